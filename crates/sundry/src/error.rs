use thiserror::Error;

/// The host environment could not provide backing memory.
///
/// This is the only failure mode in the crate; it is surfaced to the caller
/// immediately and is not considered recoverable at this layer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("failed to allocate {bytes} bytes")]
pub struct AllocError {
    pub(crate) bytes: usize,
}

impl AllocError {
    /// Number of bytes the failed allocation asked for.
    #[must_use]
    pub fn bytes(&self) -> usize {
        self.bytes
    }
}
