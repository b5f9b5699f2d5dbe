//! Fixed parameters controlling the envelope and the carrier format,
//! gathered the way `retrocompressor::Options`/`STD_OPTIONS` gathers its
//! tunables.

/// Maximum number of characters accepted in a message. The envelope's
/// `message_length` field is 8 bits wide, so anything above 255 cannot be
/// framed; `MAX_MESSAGE_SIZE` itself is one past the largest value the
/// field can hold, matching the source program's `#define`.
pub const MAX_MESSAGE_SIZE: usize = 256;

pub const BITS_PER_BYTE: usize = 8;

pub const RGB_PER_PIXEL: usize = 3;

/// Number of bits occupied by the `total_bits` and `message_length`
/// envelope header fields, plus the 256-byte frequency table.
pub const ENVELOPE_HEADER_BITS: usize = 2 * BITS_PER_BYTE + 256 * BITS_PER_BYTE;

/// Tunables for the steganography core. Only one knob is exposed today —
/// everything else in the envelope layout is fixed by the wire format in
/// SPEC_FULL.md §3 and cannot vary without breaking round-trips.
#[derive(Clone, Copy)]
pub struct StegoOptions {
    /// Largest pre-compression message length accepted by `encode`, before
    /// the 8-bit envelope field is even considered. Lets callers fail fast
    /// on an oversized message instead of paying for a Huffman pass first.
    pub max_message_size: usize,
}

pub const STD_OPTIONS: StegoOptions = StegoOptions { max_message_size: MAX_MESSAGE_SIZE };
