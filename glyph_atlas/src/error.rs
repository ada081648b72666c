// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Error returned by font loading, metric queries and atlas baking.
///
/// Running out of atlas space is not an error; see
/// [`BakeStatus::OutOfSpace`](crate::BakeStatus::OutOfSpace).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
    /// Bytes required for a too-small buffer, or the rejected value.
    expected: usize,
    /// Bytes provided for a too-small buffer.
    actual: usize,
    /// Cause of an [`ErrorKind::Io`] error.
    #[cfg(feature = "std")]
    io: Option<std::io::ErrorKind>,
}

impl Error {
    /// The machine-readable category for this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The underlying I/O error category, for [`ErrorKind::Io`] errors.
    #[cfg(feature = "std")]
    pub fn io_kind(&self) -> Option<std::io::ErrorKind> {
        self.io
    }

    pub(crate) fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            expected: 0,
            actual: 0,
            #[cfg(feature = "std")]
            io: None,
        }
    }

    pub(crate) fn buffer_too_small(expected: usize, actual: usize) -> Self {
        Self {
            expected,
            actual,
            ..Self::new(ErrorKind::BufferTooSmall)
        }
    }

    pub(crate) fn invalid_subpixel_scale(scale: u32) -> Self {
        Self {
            expected: scale as usize,
            ..Self::new(ErrorKind::InvalidSubpixelScale)
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.kind {
            ErrorKind::Io => {
                #[cfg(feature = "std")]
                if let Some(io) = self.io {
                    return write!(f, "font file could not be read: {io}");
                }
                write!(f, "font file could not be read")
            }
            ErrorKind::InvalidFont => write!(f, "font data could not be parsed"),
            ErrorKind::NoFont => write!(f, "no font has been loaded"),
            ErrorKind::InvalidFontHeight => write!(f, "font height must be positive"),
            ErrorKind::BufferTooSmall => write!(
                f,
                "atlas buffer holds {} bytes but {} are required",
                self.actual, self.expected
            ),
            ErrorKind::InvalidSubpixelScale => {
                write!(f, "invalid subpixel scale {}", self.expected)
            }
        }
    }
}

impl core::error::Error for Error {}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

#[cfg(feature = "std")]
impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self {
            io: Some(err.kind()),
            ..Self::new(ErrorKind::Io)
        }
    }
}

/// The non-exhaustive category of an error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The font file could not be opened or read.
    Io,

    /// The font data was not a font the rasterization engine understands.
    InvalidFont,

    /// The operation needs a font face but none has been loaded.
    NoFont,

    /// The requested font height was zero or negative.
    InvalidFontHeight,

    /// The destination buffer is shorter than its declared dimensions.
    BufferTooSmall,

    /// The subpixel scale was zero.
    InvalidSubpixelScale,
}
