//! The self-describing envelope framed into a carrier's LSB stream.
//!
//! Bit layout, in the order written (see SPEC_FULL.md §3 / spec.md §3):
//!
//! | offset (bits) | width | field |
//! |---|---|---|
//! | 0 | 8 | `total_bits`, MSB first |
//! | 8 | 8 | `message_length`, MSB first |
//! | 16 | 2048 | `frequency_table[0..256]`, each cell MSB first |
//! | 2064 | `total_bits` | the compressed bitstream |

use bit_vec::BitVec;
use crate::bitmap::BitmapImage;
use crate::error::{Error, Result};
use crate::huffman::FrequencyTable;
use crate::lsb;
use crate::options::{BITS_PER_BYTE, ENVELOPE_HEADER_BITS};

const TOTAL_BITS_OFFSET: usize = 0;
const MESSAGE_LENGTH_OFFSET: usize = BITS_PER_BYTE;
const FREQ_TABLE_OFFSET: usize = 2 * BITS_PER_BYTE;
const STREAM_OFFSET: usize = ENVELOPE_HEADER_BITS;

fn write_byte(image: &mut BitmapImage, start_bit: usize, value: u8) -> Result<()> {
    for i in 0..BITS_PER_BYTE {
        let bit = (value >> (BITS_PER_BYTE - 1 - i)) & 1;
        lsb::set_bit(image, start_bit + i, bit)?;
    }
    Ok(())
}

fn read_byte(image: &BitmapImage, start_bit: usize) -> Result<u8> {
    let mut value = 0u8;
    for i in 0..BITS_PER_BYTE {
        value = (value << 1) | lsb::get_bit(image, start_bit + i)?;
    }
    Ok(value)
}

/// Bits required to frame a compressed stream of `total_bits` bits.
pub fn required_bits(total_bits: usize) -> usize {
    ENVELOPE_HEADER_BITS + total_bits
}

/// Check that `total_bits` fits the 8-bit envelope field and that the
/// envelope as a whole fits the carrier's usable LSB channels.
pub fn check_capacity(image: &BitmapImage, total_bits: usize) -> Result<()> {
    if total_bits > u8::MAX as usize {
        return Err(Error::MessageTooLarge);
    }
    if required_bits(total_bits) > image.channel_count() {
        return Err(Error::CapacityError);
    }
    Ok(())
}

/// Frame `bits` (the compressed stream), `message_length`, and
/// `freq_table` into the carrier's LSB stream, in the bit order above.
/// Callers must call `check_capacity` first.
pub fn write(image: &mut BitmapImage, bits: &BitVec, message_length: usize, freq_table: &FrequencyTable) -> Result<()> {
    let total_bits = bits.len();
    write_byte(image, TOTAL_BITS_OFFSET, total_bits as u8)?;
    write_byte(image, MESSAGE_LENGTH_OFFSET, message_length as u8)?;
    for (symbol, &freq) in freq_table.iter().enumerate() {
        write_byte(image, FREQ_TABLE_OFFSET + symbol * BITS_PER_BYTE, freq)?;
    }
    for (i, bit) in bits.iter().enumerate() {
        lsb::set_bit(image, STREAM_OFFSET + i, bit as u8)?;
    }
    log::debug!("framed envelope: {} header bits + {} stream bits", ENVELOPE_HEADER_BITS, total_bits);
    Ok(())
}

/// Parsed envelope contents, ready for `huffman::decompress`.
pub struct Envelope {
    pub message_length: usize,
    pub freq_table: FrequencyTable,
    pub bits: BitVec,
}

/// Extract and sanity-check the envelope from a carrier's LSB stream.
pub fn read(image: &BitmapImage) -> Result<Envelope> {
    if ENVELOPE_HEADER_BITS > image.channel_count() {
        return Err(Error::InvalidPayload);
    }
    let total_bits = read_byte(image, TOTAL_BITS_OFFSET)? as usize;
    let message_length = read_byte(image, MESSAGE_LENGTH_OFFSET)? as usize;
    if total_bits == 0 {
        return Err(Error::InvalidPayload);
    }
    if required_bits(total_bits) > image.channel_count() {
        return Err(Error::InvalidPayload);
    }
    let mut freq_table = [0u8; 256];
    for (symbol, cell) in freq_table.iter_mut().enumerate() {
        *cell = read_byte(image, FREQ_TABLE_OFFSET + symbol * BITS_PER_BYTE)?;
    }
    let mut bits = BitVec::new();
    for i in 0..total_bits {
        bits.push(lsb::get_bit(image, STREAM_OFFSET + i)? != 0);
    }
    log::debug!("read envelope: total_bits={total_bits}, message_length={message_length}");
    Ok(Envelope { message_length, freq_table, bits })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitmap::PixelGrid;
    use crate::huffman;

    fn blank_image(width: usize, height: usize) -> BitmapImage {
        BitmapImage { raw_header: Vec::new(), width, height, grid: PixelGrid::new(width, height) }
    }

    #[test]
    fn round_trips_through_lsb_stream() {
        let (bits, freq) = huffman::compress(b"hello").unwrap();
        let mut image = blank_image(40, 40); // 40*40*3 = 4800 usable bits
        check_capacity(&image, bits.len()).unwrap();
        write(&mut image, &bits, 5, &freq).unwrap();
        let env = read(&image).unwrap();
        assert_eq!(env.message_length, 5);
        assert_eq!(env.freq_table, freq);
        assert_eq!(env.bits, bits);
        let decoded = huffman::decompress(&env.bits, &env.freq_table, env.message_length).unwrap();
        assert_eq!(decoded, b"hello");
    }

    #[test]
    fn capacity_boundary_is_exact() {
        let (bits, _freq) = huffman::compress(b"A").unwrap();
        let total_bits = bits.len();
        let exact_channels = ENVELOPE_HEADER_BITS + total_bits;
        // width*height*3 == exact_channels, using width=3 for divisibility.
        let height = exact_channels / 3;
        let fits = blank_image(1, height);
        assert_eq!(fits.channel_count(), exact_channels);
        check_capacity(&fits, total_bits).unwrap();

        let one_short = blank_image(1, height - 1);
        assert!(matches!(check_capacity(&one_short, total_bits), Err(Error::CapacityError)));
    }

    #[test]
    fn zero_total_bits_is_invalid_payload() {
        let image = blank_image(40, 40);
        // Freshly zeroed image: every LSB reads 0, so total_bits decodes as 0.
        assert!(matches!(read(&image), Err(Error::InvalidPayload)));
    }

    #[test]
    fn message_too_large_when_total_bits_overflows_byte() {
        let image = blank_image(1000, 1000);
        assert!(matches!(check_capacity(&image, 256), Err(Error::MessageTooLarge)));
    }
}
