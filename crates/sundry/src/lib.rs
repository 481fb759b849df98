//! Sundry diagnostic helpers: a fixed-capacity string that any thread may
//! overwrite while others read it, plus a handful of leaf utilities (hex
//! dumps, C-style prefix/suffix checks, byte-order fixes, prime sizing, and
//! a borrowed-pointer adaptor for function arguments).
//!
//! The centerpiece is [`RelaxedString`], meant for best-effort diagnostic
//! labels such as thread names or crash context. Its contract is deliberately
//! weak and documented as such: concurrent writes may leave munged content
//! behind, but a reader never sees out-of-bounds or unterminated data.

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod ascii;
mod endian;
mod error;
mod hexdump;
mod primes;
mod ptr;
mod relaxed_string;

#[cfg(test)]
mod tests;

pub use ascii::{ends_with, starts_with};
pub use endian::{fix_endian, swap_endian};
pub use error::AllocError;
pub use hexdump::{dump_memory, hexdump};
pub use primes::{is_prime, next_prime};
pub use ptr::Ptr;
pub use relaxed_string::{DEFAULT_CAPACITY, RelaxedString};
