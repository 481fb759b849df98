//! A fixed-capacity string that any thread may overwrite in place.
//!
//! [`RelaxedString`] is a diagnostic label buffer: think thread names, crash
//! context, "what am I doing right now" strings. Several threads may call
//! [`set`](RelaxedString::set) on the same object at once while others call
//! [`snapshot`](RelaxedString::snapshot), with no lock anywhere. The contract
//! is deliberately weak: a snapshot taken during a write race may contain a
//! munged interleaving of old and new content, but it is always in bounds and
//! always terminated. You will never get a bad slice, though data may be
//! munged.
//!
//! # Invariants
//!
//! - Content never occupies more than `capacity - 2` bytes; whatever is left
//!   over is truncated silently.
//! - Every assignment stores its terminator byte last, and the final buffer
//!   slot is never the target of a nonzero store, so a zero byte exists
//!   somewhere in bounds at every instant — even mid-write.
//! - Bytes past a new, shorter terminator are *not* zeroed. A racing reader
//!   may find an old terminator further right and return new-prefix +
//!   old-suffix. That is the munged case, and it is allowed.
//!
//! All buffer traffic is single-byte [`Relaxed`] loads and stores: no
//! compare-and-swap, no fences, and no ordering guarantees between concurrent
//! writers or between a writer and a reader. Do not build synchronization on
//! top of this type.

use alloc::{boxed::Box, string::String, vec::Vec};
use core::{
    fmt,
    sync::atomic::{AtomicU8, Ordering::Relaxed},
};

use bstr::ByteSlice;

use crate::AllocError;

/// Buffer size used by [`RelaxedString::new`].
pub const DEFAULT_CAPACITY: usize = 256;

/// A fixed-capacity, shared, concurrently-overwritable string buffer.
///
/// See the [module documentation](self) for the race semantics. The type is
/// intentionally not `Clone`: duplicating a live shared buffer has no
/// well-defined meaning. Share it by reference or behind an
/// [`Arc`](alloc::sync::Arc) instead.
///
/// # Examples
///
/// ```
/// use sundry::RelaxedString;
///
/// let label = RelaxedString::with_capacity(8);
/// label.set("abcdefghij");
/// assert_eq!(label.snapshot(), "abcdef"); // truncated to capacity - 2
/// ```
pub struct RelaxedString {
    buf: Box<[AtomicU8]>,
}

impl RelaxedString {
    /// Creates an empty buffer of [`DEFAULT_CAPACITY`] bytes.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty, zero-filled buffer of exactly `capacity` bytes.
    ///
    /// A capacity of 0 yields a buffer with no storage at all: it is
    /// permanently empty and every `set` is a no-op. Capacities 1 and 2 can
    /// hold the terminator but no content, so they behave the same way.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let mut buf = Vec::with_capacity(capacity);
        buf.resize_with(capacity, || AtomicU8::new(0));
        Self {
            buf: buf.into_boxed_slice(),
        }
    }

    /// Fallible variant of [`with_capacity`](Self::with_capacity).
    ///
    /// # Errors
    ///
    /// Returns [`AllocError`] if the host cannot provide `capacity` bytes.
    pub fn try_with_capacity(capacity: usize) -> Result<Self, AllocError> {
        let mut buf = Vec::new();
        buf.try_reserve_exact(capacity)
            .map_err(|_| AllocError { bytes: capacity })?;
        buf.resize_with(capacity, || AtomicU8::new(0));
        Ok(Self {
            buf: buf.into_boxed_slice(),
        })
    }

    /// Fixed buffer size chosen at construction.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Replaces the contents with `content`, truncating to `capacity - 2`
    /// bytes.
    ///
    /// Safe to call from any number of threads at once; concurrent callers
    /// may interleave their byte stores, leaving munged (but in-bounds,
    /// terminated) content behind.
    pub fn set(&self, content: &str) {
        self.set_bytes(content.as_bytes());
    }

    /// Byte-level variant of [`set`](Self::set).
    ///
    /// `content` is treated as a C-style string: a zero byte, if present,
    /// ends it. Truncation may land inside a multi-byte UTF-8 sequence;
    /// [`snapshot`](Self::snapshot) decodes lossily, so such a tail shows up
    /// as a replacement character rather than an error.
    pub fn set_bytes(&self, content: &[u8]) {
        let content = match content.find_byte(0) {
            Some(nul) => &content[..nul],
            None => content,
        };
        let len = content.len().min(self.buf.len().saturating_sub(2));
        for (slot, &byte) in self.buf.iter().zip(&content[..len]) {
            slot.store(byte, Relaxed);
        }
        // Terminator last, so a zero byte is in bounds at every instant.
        if let Some(slot) = self.buf.get(len) {
            slot.store(0, Relaxed);
        }
    }

    /// Copies the current content, up to its first terminator, into an
    /// independently owned `String`.
    ///
    /// Never blocks. Concurrent `set` calls may leave torn multi-byte UTF-8
    /// sequences behind; those decode as U+FFFD replacement characters. Note
    /// that each replacement character occupies three bytes, so the byte
    /// length of the *returned* `String` can exceed the in-buffer content
    /// length bound; [`snapshot_bytes`](Self::snapshot_bytes) exposes the raw
    /// bound-respecting bytes.
    #[must_use]
    pub fn snapshot(&self) -> String {
        String::from_utf8_lossy(&self.snapshot_bytes()).into_owned()
    }

    /// Copies the current raw content bytes, up to the first terminator.
    ///
    /// The result is always strictly shorter than the capacity and contains
    /// no zero byte.
    #[must_use]
    pub fn snapshot_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.buf.len());
        for slot in &self.buf {
            let byte = slot.load(Relaxed);
            if byte == 0 {
                break;
            }
            out.push(byte);
        }
        out
    }

    /// True if the buffer has no storage or its first byte is the terminator.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.first().is_none_or(|slot| slot.load(Relaxed) == 0)
    }
}

impl Default for RelaxedString {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RelaxedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.snapshot())
    }
}

impl fmt::Debug for RelaxedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RelaxedString")
            .field("capacity", &self.capacity())
            .field("content", &self.snapshot())
            .finish()
    }
}

// Enable serde support for tests and when the optional `serde` feature is
// activated by downstream crates. Serialization captures a snapshot; there is
// no deserialization, since the capacity is not part of the serialized form.
#[cfg(any(test, feature = "serde"))]
impl serde::Serialize for RelaxedString {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.snapshot())
    }
}
