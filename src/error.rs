//! Error taxonomy shared by every module in this crate.

/// Errors surfaced by the bitmap/Huffman/envelope core and the CLI glue
/// around it. Nothing in this crate retries on error; every fallible
/// operation propagates one of these variants with `?`.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("file error: {0}")]
    FileError(#[from] std::io::Error),

    #[error("bitmap format error: {0}")]
    FormatError(String),

    #[error("message is empty")]
    EmptyMessage,

    #[error("message does not fit in the envelope's 8-bit length fields")]
    MessageTooLarge,

    #[error("carrier image does not have enough pixel channels for this envelope")]
    CapacityError,

    #[error("huffman codec error: {0}")]
    CompressionError(String),

    #[error("carrier image does not contain a valid envelope")]
    InvalidPayload,
}

pub type Result<T> = std::result::Result<T, Error>;
