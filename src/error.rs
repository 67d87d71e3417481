use thiserror::Error;

/// Errors raised while capturing source content into a bitmap
#[derive(Error, Debug)]
pub enum RasterizeError {
    #[error(transparent)]
    /// An I/O error occurred while reading the source
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [image] failed to decode or resample the source
    Image(#[from] image::ImageError),

    #[error("source content is unavailable: {0}")]
    /// The source could not be rendered at all
    Unavailable(String),
}

/// Errors raised by a page writer while serializing a document
#[derive(Error, Debug)]
pub enum WriteError {
    #[error(transparent)]
    /// An I/O error occurred while saving the document
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [image] failed to encode a bitmap
    Image(#[from] image::ImageError),

    #[error("a placement refers to a bitmap that is not part of the document")]
    /// An image placement pointed outside of the document's bitmaps
    BitmapMissing,

    #[error("page writer backend failed: {0}")]
    /// Any other backend failure
    Backend(String),
}

/// The single failure signal reported to callers of an export. The underlying
/// cause is available through [std::error::Error::source].
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("failed to export PDF")]
    /// The source content could not be captured
    Rasterization(#[from] RasterizeError),

    #[error("failed to export PDF")]
    /// The page writer failed while serializing or saving
    Serialization(#[from] WriteError),
}
