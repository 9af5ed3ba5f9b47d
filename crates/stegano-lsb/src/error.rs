use thiserror::Error;

#[derive(Error, Debug)]
pub enum SteganoError {
    /// Represents a secret that does not fit into the carrier. The numbers are pixels,
    /// the feasibility check itself is done on samples.
    #[error(
        "Capacity Error: Image is too small to store this secret. Requires at least {required_pixels} pixels but only has {available_pixels}."
    )]
    CapacityError {
        required_pixels: usize,
        available_pixels: usize,
    },

    /// Represents a recovery request that reaches past the end of the pixel data.
    /// This is fatal, the carrier must not be used any further, see [`SteganoError::is_fatal`].
    #[error(
        "Length of secret is out of bounds: {requested_bits} bits requested but only {available_samples} samples available"
    )]
    OutOfBounds {
        requested_bits: usize,
        available_samples: usize,
    },

    /// Represents a channel count the requested codec cannot work with, e.g. PNG needs RGBA
    #[error(
        "Image is not in expected format: Requires {expected} channels per pixel but has {actual}."
    )]
    FormatMismatch { expected: usize, actual: usize },

    /// Represents an image without any channels per pixel
    #[error("Invalid channel count: {0}, an image needs at least one channel per pixel")]
    InvalidChannelCount(usize),

    /// Represents a failure of the image codec while decoding a file
    #[error("Image decode error: {0}")]
    DecodeError(String),

    /// Represents a failure of the image codec while writing a file
    #[error("Image write error: {0}")]
    WriteError(String),

    /// Represents a text image that does not start with the expected magic token
    #[error("Bad magic number: expected `P3` but found `{0}`")]
    BadMagic(String),

    /// Represents a text image with an unsupported maximum color value
    #[error("Bad header: expected maximum color value `255` but found `{0}`")]
    BadHeader(String),

    /// Represents a dimensions line that does not contain two integers
    #[error("Cannot parse image dimensions")]
    ParseError(#[source] Box<SteganoError>),

    /// Represents pixel data that ends before all samples were read
    #[error("Pixel data is truncated: expected {expected} samples but found only {found}")]
    TruncatedData { expected: usize, found: usize },

    /// Represents an integer scan on input that has no digits left
    #[error("No digits found")]
    NoDigitsFound,

    /// Represents a carrier with an unknown file extension
    #[error("Media format is not supported")]
    UnsupportedMedia,

    /// Represents a codec save without any committed image data
    #[error("No image data committed for saving")]
    NothingToSave,

    /// Represents pixel data that is smaller than the image dimensions demand
    #[error("Size of pixel data ({actual}) does not match the image dimensions ({expected})")]
    BufferSizeMismatch { expected: usize, actual: usize },

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

impl SteganoError {
    /// `true` when the carrier is in an unrecoverable state and must be dropped by the caller.
    pub fn is_fatal(&self) -> bool {
        matches!(self, SteganoError::OutOfBounds { .. })
    }
}
