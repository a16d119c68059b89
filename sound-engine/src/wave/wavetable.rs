use std::{
    fmt::Debug,
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use log::debug;
use resource_manager::{IOSnafu, LoadingError, ParserSnafu, Resource};
use serde::{Deserialize, Serialize};
use snafu::{ensure, ResultExt};

use crate::error::{DecodeError, NoChannelsSnafu, PartialFrameSnafu};
use crate::util::{mix_to_mono, peak};
use crate::SamplePoint;

use super::raw::decode;

/// Everything the raw format can't tell us about itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WavetableMetadata {
    pub sample_rate: u32,
    pub channels: u16,
}

impl Default for WavetableMetadata {
    fn default() -> Self {
        WavetableMetadata {
            sample_rate: 44_100,
            channels: 1,
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct Wavetable {
    pub sample_rate: u32,
    pub channels: u16,
    /// Interleaved samples, exactly as they were stored.
    pub wavetable: Vec<SamplePoint>,
}

impl Debug for Wavetable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[Wavetable, {} frames x {} channels @ {}Hz]",
            self.frames(),
            self.channels,
            self.sample_rate
        )
    }
}

impl Wavetable {
    pub fn from_samples(samples: Vec<SamplePoint>, metadata: WavetableMetadata) -> Result<Wavetable, DecodeError> {
        ensure!(metadata.channels > 0, NoChannelsSnafu);
        ensure!(
            samples.len() % metadata.channels as usize == 0,
            PartialFrameSnafu {
                samples: samples.len(),
                channels: metadata.channels,
            }
        );

        Ok(Wavetable {
            sample_rate: metadata.sample_rate,
            channels: metadata.channels,
            wavetable: samples,
        })
    }

    pub fn decode(buffer: &[u8], metadata: WavetableMetadata) -> Result<Wavetable, DecodeError> {
        Wavetable::from_samples(decode(buffer)?, metadata)
    }

    pub fn metadata(&self) -> WavetableMetadata {
        WavetableMetadata {
            sample_rate: self.sample_rate,
            channels: self.channels,
        }
    }

    pub fn frames(&self) -> usize {
        self.wavetable.len() / self.channels.max(1) as usize
    }

    pub fn duration_secs(&self) -> f64 {
        self.frames() as f64 / self.sample_rate.max(1) as f64
    }

    pub fn peak(&self) -> SamplePoint {
        peak(&self.wavetable)
    }

    pub fn to_mono(&self) -> Wavetable {
        Wavetable {
            sample_rate: self.sample_rate,
            channels: 1,
            wavetable: mix_to_mono(&self.wavetable, self.channels as usize),
        }
    }
}

/// Where the metadata for the raw file at `path` lives: same stem, `.json` extension.
pub fn metadata_path(path: &Path) -> Option<PathBuf> {
    match path.extension() {
        Some(extension) if extension == "json" => None,
        _ => Some(path.with_extension("json")),
    }
}

/// Reads the metadata next to `path`, falling back to the defaults when there is none.
pub fn read_metadata(path: &Path) -> Result<WavetableMetadata, LoadingError> {
    let Some(metadata_path) = metadata_path(path) else {
        return Ok(WavetableMetadata::default());
    };

    match fs::read_to_string(&metadata_path) {
        Ok(data) => serde_json::from_str(&data).context(ParserSnafu { path: &metadata_path }),
        Err(err) if err.kind() == ErrorKind::NotFound => {
            debug!("no metadata at {:?}, using defaults", metadata_path);
            Ok(WavetableMetadata::default())
        }
        Err(err) => Err(err).context(IOSnafu { path: &metadata_path }),
    }
}

impl Resource for Wavetable {
    fn load_resource(path: &Path) -> Result<Self, LoadingError>
    where
        Self: Sized,
    {
        let buffer = fs::read(path).context(IOSnafu { path })?;
        let metadata = read_metadata(path)?;

        Wavetable::decode(&buffer, metadata).map_err(|err| LoadingError::Malformed {
            path: path.into(),
            source: Box::new(err),
        })
    }
}
