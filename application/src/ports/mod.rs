//! Port definitions
//!
//! Ports are the interfaces through which use cases talk to the outside
//! world. Implementations (adapters) live in the infrastructure and
//! presentation layers.

pub mod speech_gateway;
pub mod transcript_logger;
pub mod transcript_sink;
