use snafu::Snafu;

#[derive(Snafu, Debug)]
#[snafu(visibility(pub))]
pub enum EngineError {
    #[snafu(display("Could not read wavetable source: {source}"))]
    SourceError { source: std::io::Error },
    #[snafu(display("Malformed wavetable: {source}"))]
    DecodeError { source: sound_engine::error::DecodeError },
    #[snafu(display("Loading error: {source}"))]
    LoadingError { source: resource_manager::LoadingError },
    #[snafu(display("Resource `{key}` is not loaded"))]
    MissingResource { key: String },
    #[snafu(display("Could not write output: {source}"))]
    OutputError { source: std::io::Error },
    #[snafu(display("{message}\n\nusage: wavetable-loader [--mono] [--summary] <path>..."))]
    UsageError { message: String },
}
