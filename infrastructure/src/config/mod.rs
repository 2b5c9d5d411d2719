//! Configuration loading

pub mod file_config;
pub mod loader;

pub use file_config::{
    FileConfig, FileLogConfig, FileSessionConfig, FileSpeechConfig, SpeechConvention,
};
pub use loader::ConfigLoader;
