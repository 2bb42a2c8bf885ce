pub mod recorder;
pub mod timer;
