//! Byte-order helpers for 32-bit words read from foreign data.

/// Reverses the byte order of `x`.
#[must_use]
pub const fn swap_endian(x: u32) -> u32 {
    x.swap_bytes()
}

/// Converts a little-endian on-disk/on-wire word to host order.
///
/// Selected by host byte order at build time: an identity on little-endian
/// hosts, a byte swap on big-endian ones.
#[cfg(target_endian = "little")]
#[must_use]
pub const fn fix_endian(x: u32) -> u32 {
    x
}

/// Converts a little-endian on-disk/on-wire word to host order.
///
/// Selected by host byte order at build time: an identity on little-endian
/// hosts, a byte swap on big-endian ones.
#[cfg(target_endian = "big")]
#[must_use]
pub const fn fix_endian(x: u32) -> u32 {
    swap_endian(x)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swap_reverses_bytes() {
        assert_eq!(swap_endian(0x0102_0304), 0x0403_0201);
        assert_eq!(swap_endian(0), 0);
        assert_eq!(swap_endian(0xff00_00ff), 0xff00_00ff);
    }

    #[test]
    fn swap_is_an_involution() {
        for x in [0, 1, 0xdead_beef, u32::MAX] {
            assert_eq!(swap_endian(swap_endian(x)), x);
        }
    }

    #[test]
    fn fix_endian_reads_little_endian_words() {
        // A raw native load of little-endian storage, fixed up, yields the
        // little-endian value on every host.
        assert_eq!(fix_endian(u32::from_ne_bytes([1, 2, 3, 4])), 0x0403_0201);
    }
}
