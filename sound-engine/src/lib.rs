pub mod error;
pub mod util;
pub mod wave;

pub type SamplePoint = f32;
