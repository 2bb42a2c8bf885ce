pub mod capture_source;
pub mod recorder_delegate;
