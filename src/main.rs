use std::{
    env,
    io::{self, BufWriter, Write},
    process::ExitCode,
};

use env_logger::Env;
use log::{error, info};
use resource_manager::ResourceManager;
use snafu::ResultExt;
use sound_engine::wave::wavetable::Wavetable;

use wavetable_loader::cli::{parse_args, write_samples, write_summary};
use wavetable_loader::errors::{EngineError, OutputSnafu};
use wavetable_loader::resource::wavetable::request_wavetable;

fn run() -> Result<(), EngineError> {
    let options = parse_args(env::args().skip(1))?;

    let mut wavetables: ResourceManager<Wavetable> = ResourceManager::new();
    let mut out = BufWriter::new(io::stdout().lock());

    for path in &options.paths {
        let wavetable = request_wavetable(&mut wavetables, path)?;

        info!("loaded {:?}: {:?}", path, wavetable);

        let mono;
        let wavetable = if options.mono && wavetable.channels > 1 {
            mono = wavetable.to_mono();
            &mono
        } else {
            wavetable
        };

        let name = path.to_string_lossy();

        if options.summary {
            write_summary(&mut out, &name, wavetable)?;
        } else {
            if options.paths.len() > 1 {
                writeln!(out, "# {}", name).context(OutputSnafu)?;
            }

            write_samples(&mut out, wavetable)?;
        }
    }

    out.flush().context(OutputSnafu)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
