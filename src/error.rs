use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [image] failed to parse the logo image
    Image(#[from] image::ImageError),

    /// A sheet was requested for an empty question list; nothing was
    /// rendered
    #[error("cannot lay out a sheet with no questions")]
    EmptySheet,

    /// The configured page size and margins leave no usable room for
    /// question content
    #[error("page geometry leaves no room for question content")]
    ContentAreaTooSmall,

    /// A page id in the document's page order had no backing page
    #[error("page is missing from the document")]
    PageMissing,
}
