//! Headerless little-endian 32-bit float PCM.
//!
//! The format carries no header, magic number or metadata: the body is a
//! plain run of IEEE-754 single-precision values, four bytes each, least
//! significant byte first. Sample rate and channel layout have to come from
//! somewhere else (see [`super::wavetable::WavetableMetadata`]).

use byteorder::{ByteOrder, LittleEndian};
use log::debug;
use snafu::ensure;

use crate::error::{DecodeError, MisalignedSnafu};
use crate::SamplePoint;

/// Width of one encoded sample in bytes.
pub const SAMPLE_WIDTH: usize = 4;

/// Decodes a whole buffer into samples, preserving order.
///
/// Fails without producing anything if the buffer isn't a whole number of
/// samples. Values come through bit-for-bit, NaNs and infinities included.
pub fn decode(buffer: &[u8]) -> Result<Vec<SamplePoint>, DecodeError> {
    let mut samples = Vec::with_capacity(buffer.len() / SAMPLE_WIDTH);
    decode_into(buffer, &mut samples)?;

    Ok(samples)
}

/// Appends the samples in `buffer` to `samples`, returning how many were added.
///
/// `samples` is left untouched when the buffer is misaligned.
pub(crate) fn decode_into(buffer: &[u8], samples: &mut Vec<SamplePoint>) -> Result<usize, DecodeError> {
    ensure!(
        buffer.len() % SAMPLE_WIDTH == 0,
        MisalignedSnafu {
            length: buffer.len(),
            alignment: SAMPLE_WIDTH,
        }
    );

    let start = samples.len();
    let count = buffer.len() / SAMPLE_WIDTH;

    samples.resize(start + count, 0.0);
    LittleEndian::read_f32_into(buffer, &mut samples[start..]);

    debug!("decoded {} samples from {} bytes", count, buffer.len());

    Ok(count)
}

/// Writes `samples` out in the same layout [`decode`] reads.
pub fn encode(samples: &[SamplePoint]) -> Vec<u8> {
    let mut buffer = vec![0_u8; samples.len() * SAMPLE_WIDTH];
    LittleEndian::write_f32_into(samples, &mut buffer);

    buffer
}
