//! # bmpstego
//!
//! Hide a text message inside a 24-bit uncompressed bitmap using a
//! self-built Huffman code and least-significant-bit substitution.
//!
//! * `bitmap` reads and writes the bitmap file/DIB headers and exposes the
//!   pixel data as a top-down grid, round-tripping untouched bytes exactly.
//! * `lsb` addresses individual bit positions of the pixel grid's color
//!   channels.
//! * `huffman` builds a canonical prefix code from a byte frequency table
//!   and encodes/decodes a message against it.
//! * `envelope` frames the compressed bitstream together with everything
//!   needed to rebuild the Huffman tree, and checks carrier capacity.
//! * `stego` wires the above into the two public entry points, `encode`
//!   and `decode`.
//! * `recent_files` is the ambient "recent carriers" convenience ring used
//!   by the CLI; it never touches the core above.
//!
//! ## Buffer Example
//!
//! ```rs
//! use bmpstego::stego;
//! stego::encode("carrier.bmp","out.bmp","hello, world").expect("encode failed");
//! let msg = stego::decode("out.bmp").expect("decode failed");
//! assert_eq!(msg,"hello, world");
//! ```

pub mod options;
pub mod error;
pub mod bitmap;
pub mod lsb;
pub mod huffman;
pub mod envelope;
pub mod stego;
pub mod recent_files;

pub use error::{Error, Result};
