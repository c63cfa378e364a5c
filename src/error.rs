use std::io;

use thiserror::Error;

pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_USAGE: u8 = 2;
pub const EXIT_NOT_FOUND: u8 = 3;
pub const EXIT_DECODE: u8 = 4;

/// Failure raised by the image library itself, as opposed to a file it
/// simply could not decode.
#[derive(Debug, Error)]
pub enum BackendError {
    #[cfg(feature = "highgui")]
    #[error(transparent)]
    OpenCv(#[from] opencv::Error),

    #[error("{0}")]
    Other(String),
}

/// Everything that can end a run early. The `Display` text of the first three
/// variants is exactly what gets printed to the user.
#[derive(Debug, Error)]
pub enum ShowError {
    #[error("Usage: {program} <image_path>\nExample: {program} example.jpg")]
    Usage { program: String },

    #[error("Error: File '{0}' not found.")]
    NotFound(String),

    #[error(
        "Error: Could not load image from '{0}'.\nMake sure the file is a valid image format (jpg, png, etc.)."
    )]
    Decode(String),

    #[error("Error: display backend failed: {0}")]
    Backend(#[from] BackendError),

    #[error("Error: could not write output: {0}")]
    Output(#[from] io::Error),
}

impl ShowError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Usage { .. } => EXIT_USAGE,
            Self::NotFound(_) => EXIT_NOT_FOUND,
            Self::Decode(_) => EXIT_DECODE,
            Self::Backend(_) | Self::Output(_) => EXIT_FAILURE,
        }
    }

    /// The usage, not-found and decode messages belong on stdout next to the
    /// normal output; anything else is an internal failure.
    pub const fn is_user_facing(&self) -> bool {
        matches!(self, Self::Usage { .. } | Self::NotFound(_) | Self::Decode(_))
    }
}
