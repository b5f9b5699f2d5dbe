//! Steganography orchestrator: wires the bitmap, LSB, Huffman, and
//! envelope modules into the two public entry points.

use std::path::Path;
use crate::bitmap;
use crate::envelope;
use crate::error::{Error, Result};
use crate::huffman;
use crate::options::StegoOptions;

/// Hide `message` in the carrier at `infile`, writing the result to
/// `outfile`. Uses `crate::options::STD_OPTIONS`.
pub fn encode<P: AsRef<Path>, Q: AsRef<Path>>(infile: P, outfile: Q, message: &str) -> Result<()> {
    encode_with_options(&crate::options::STD_OPTIONS, infile, outfile, message)
}

/// `encode`, but with an explicit maximum pre-compression message size.
pub fn encode_with_options<P: AsRef<Path>, Q: AsRef<Path>>(
    opts: &StegoOptions,
    infile: P,
    outfile: Q,
    message: &str,
) -> Result<()> {
    bitmap::validate_bmp(infile.as_ref())?;
    let mut image = bitmap::read_image(infile.as_ref())?;

    if message.is_empty() {
        return Err(Error::EmptyMessage);
    }
    let message_bytes = message.as_bytes();
    if message_bytes.len() >= opts.max_message_size {
        return Err(Error::MessageTooLarge);
    }

    let (bits, freq_table) = huffman::compress(message_bytes)?;
    envelope::check_capacity(&image, bits.len())?;
    envelope::write(&mut image, &bits, message_bytes.len(), &freq_table)?;

    bitmap::write_image(outfile.as_ref(), &image)?;
    log::info!(
        "encoded {}-byte message into {} ({} compressed bits)",
        message_bytes.len(),
        outfile.as_ref().display(),
        bits.len()
    );
    Ok(())
}

/// Recover the message hidden in the carrier at `infile`.
pub fn decode<P: AsRef<Path>>(infile: P) -> Result<String> {
    bitmap::validate_bmp(infile.as_ref())?;
    let image = bitmap::read_image(infile.as_ref())?;
    let env = envelope::read(&image)?;
    let bytes = huffman::decompress(&env.bits, &env.freq_table, env.message_length)?;
    let message = String::from_utf8(bytes)
        .map_err(|_| Error::CompressionError("decoded message is not valid UTF-8".into()))?;
    log::info!("decoded a {}-byte message from {}", message.len(), infile.as_ref().display());
    Ok(message)
}
