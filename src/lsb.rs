//! Least-significant-bit addressing over a bitmap's pixel grid.
//!
//! A linear bit index is mapped to a pixel and channel by walking the grid
//! row-major, top-to-bottom, left-to-right: `pixel = bit_index / 3`,
//! `channel = bit_index % 3` with 0 = red, 1 = green, 2 = blue. Both
//! `get_bit` and `set_bit` use this same order, so writing a bit and
//! reading it back at the same index always agrees, even though it differs
//! from the bottom-up order the bitmap is stored in on disk.

use crate::bitmap::BitmapImage;
use crate::error::{Error, Result};
use crate::options::RGB_PER_PIXEL;

fn locate(image: &BitmapImage, bit_index: usize) -> Result<(usize, usize, usize)> {
    if bit_index >= image.channel_count() {
        return Err(Error::InvalidPayload);
    }
    let pixel_index = bit_index / RGB_PER_PIXEL;
    let channel = bit_index % RGB_PER_PIXEL;
    let row = pixel_index / image.width;
    let col = pixel_index % image.width;
    Ok((row, col, channel))
}

/// Overwrite the least-significant bit of the selected channel with `b`
/// (`b` must be 0 or 1; any nonzero value is treated as 1).
pub fn set_bit(image: &mut BitmapImage, bit_index: usize, b: u8) -> Result<()> {
    let (row, col, channel) = locate(image, bit_index)?;
    let mut px = image.grid.get(row, col);
    let bit = if b != 0 { 1 } else { 0 };
    match channel {
        0 => px.r = (px.r & !1) | bit,
        1 => px.g = (px.g & !1) | bit,
        _ => px.b = (px.b & !1) | bit,
    }
    image.grid.set(row, col, px);
    Ok(())
}

/// Read the least-significant bit of the selected channel.
pub fn get_bit(image: &BitmapImage, bit_index: usize) -> Result<u8> {
    let (row, col, channel) = locate(image, bit_index)?;
    let px = image.grid.get(row, col);
    Ok(match channel {
        0 => px.r & 1,
        1 => px.g & 1,
        _ => px.b & 1,
    })
}
