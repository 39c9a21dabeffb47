//! Error types that can be emitted from this library

use miette::Diagnostic;
use thiserror::Error;

/// Error type for library
#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    /// Transparent wrapper for [`std::io::Error`]
    ///
    /// A stream that ends before the declared block count is satisfied surfaces here as
    /// [`std::io::ErrorKind::UnexpectedEof`].
    #[error(transparent)]
    IOError(#[from] std::io::Error),

    /// Transparent wrapper for [`widestring::error::Utf16Error`]
    #[error(transparent)]
    UTF16Error(#[from] widestring::error::Utf16Error),

    /// file does not begin with the "ASEF" signature
    #[error("file does not begin with the \"ASEF\" signature, found {0:02X?}")]
    InvalidSignature([u8; 4]),

    /// only format version 1.0 is supported
    #[error("unsupported format version {0}.{1}, only 1.0 is supported")]
    UnsupportedVersion(u16, u16),

    /// unrecognized block tag encountered during dispatch
    #[error("unrecognized block tag 0x{0:04X}")]
    UnknownBlockTag(u16),

    /// name length field leaves no room for the zero terminator
    #[error("name length field leaves no room for the zero terminator")]
    InvalidNameLength,

    /// name does not fit the 16-bit length field
    #[error("name of {0} UTF-16 units does not fit the 16-bit length field")]
    NameTooLong(usize),

    /// header declares a negative block count
    #[error("header declares a negative block count of {0}")]
    InvalidBlockCount(i32),

    /// unrecognized color model tag
    #[error("unrecognized color model tag {0:02X?}")]
    UnknownColorModel([u8; 4]),

    /// unrecognized color type tag
    #[error("unrecognized color type tag 0x{0:04X}")]
    UnknownColorType(u16),
}

/// Generic result type with crate's Error as its error variant
pub type Result<T> = core::result::Result<T, Error>;
