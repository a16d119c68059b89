use std::{io::Read, path::Path};

use resource_manager::{Resource, ResourceManager};
use snafu::{OptionExt, ResultExt};
use sound_engine::wave::wavetable::{Wavetable, WavetableMetadata};

use crate::errors::{DecodeSnafu, EngineError, LoadingSnafu, MissingResourceSnafu, SourceSnafu};

/// Reads `resource` to the end, releases it, then decodes what was read.
pub fn load_wavetable<R: Read>(resource: R, metadata: WavetableMetadata) -> Result<Wavetable, EngineError> {
    let buffer = {
        let mut resource = resource;
        let mut buffer = Vec::new();
        resource.read_to_end(&mut buffer).context(SourceSnafu)?;

        buffer
    };

    Wavetable::decode(&buffer, metadata).context(DecodeSnafu)
}

/// Loads a raw file along with its `.json` metadata, if it has any.
pub fn load_wavetable_file(path: &Path) -> Result<Wavetable, EngineError> {
    Wavetable::load_resource(path).context(LoadingSnafu)
}

/// Loads the wavetable at `path` unless it's already cached, keyed by its path.
pub fn request_wavetable<'a>(
    wavetables: &'a mut ResourceManager<Wavetable>,
    path: &Path,
) -> Result<&'a Wavetable, EngineError> {
    let key = path.to_string_lossy();
    let index = wavetables.request_resource(&key, path).context(LoadingSnafu)?;

    wavetables
        .borrow_resource(index)
        .context(MissingResourceSnafu { key: &*key })
}
