//! Speech synthesis adapters

pub mod cli_gateway;

pub use cli_gateway::TtsCliGateway;
