use std::{io::Write, path::PathBuf};

use snafu::{ensure, ResultExt};
use sound_engine::wave::wavetable::Wavetable;

use crate::errors::{EngineError, OutputSnafu, UsageSnafu};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Options {
    pub paths: Vec<PathBuf>,
    pub mono: bool,
    pub summary: bool,
}

pub fn parse_args<I>(args: I) -> Result<Options, EngineError>
where
    I: IntoIterator<Item = String>,
{
    let mut options = Options::default();
    let mut flags_done = false;

    for arg in args {
        if flags_done {
            options.paths.push(arg.into());
            continue;
        }

        match arg.as_str() {
            "--" => flags_done = true,
            "--mono" => options.mono = true,
            "--summary" => options.summary = true,
            flag if flag.starts_with("--") => {
                return UsageSnafu {
                    message: format!("unknown flag `{}`", flag),
                }
                .fail();
            }
            _ => options.paths.push(arg.into()),
        }
    }

    ensure!(
        !options.paths.is_empty(),
        UsageSnafu {
            message: "no input file given"
        }
    );

    Ok(options)
}

pub fn write_summary<W: Write>(out: &mut W, name: &str, wavetable: &Wavetable) -> Result<(), EngineError> {
    writeln!(
        out,
        "{}: {} samples, {} frames, {} channels @ {}Hz ({:.3}s), peak {}",
        name,
        wavetable.wavetable.len(),
        wavetable.frames(),
        wavetable.channels,
        wavetable.sample_rate,
        wavetable.duration_secs(),
        wavetable.peak()
    )
    .context(OutputSnafu)
}

/// One sample per line, in stored order.
pub fn write_samples<W: Write>(out: &mut W, wavetable: &Wavetable) -> Result<(), EngineError> {
    for sample in &wavetable.wavetable {
        writeln!(out, "{}", sample).context(OutputSnafu)?;
    }

    Ok(())
}
