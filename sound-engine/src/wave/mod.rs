pub mod raw;
pub mod wavetable;
