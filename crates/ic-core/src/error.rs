use thiserror::Error;

/// Errors originating from the core module.
#[derive(Error, Debug)]
pub enum CoreError {
    /// The raster backing store could not be obtained.
    ///
    /// Fatal: the pipeline never retries an allocation.
    #[error("Memory allocation failure ({width}×{height} raster)")]
    AllocationFailure {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },
}
