//! Transform errors.

/// Errors raised before any transform work starts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FftError {
    /// The length is not one the transform can run over the current root table.
    #[error("unsupported transform length {length} (root table has {table_size} entries)")]
    UnsupportedLength { length: usize, table_size: usize },
}
