use snafu::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, Snafu)]
#[snafu(visibility(pub))]
pub enum DecodeError {
    #[snafu(display("Buffer length {length} is not divisible by the sample width ({alignment} bytes)"))]
    Misaligned { length: usize, alignment: usize },
    #[snafu(display("{samples} samples cannot be split into frames of {channels} channels"))]
    PartialFrame { samples: usize, channels: u16 },
    #[snafu(display("Channel count must be at least 1"))]
    NoChannels,
}
