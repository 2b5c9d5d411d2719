//! Domain layer for persona-council
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Council
//!
//! A council session is a scripted discussion: a fixed catalog of six
//! personas takes turns over a number of rounds, framed by a moderator
//! opening and a moderator consensus line.
//!
//! - **Persona**: a fixed speaking role with canned dialogue templates
//! - **Round**: one pass through all selected personas
//! - **Moderator**: non-persona role for the opening and consensus lines

pub mod core;
pub mod persona;
pub mod script;
pub mod session;

// Re-export commonly used types
pub use core::{error::DomainError, topic::Topic};
pub use persona::{Persona, VoiceStyle};
pub use script::Script;
pub use session::{
    entities::{Speaker, Transcript, TranscriptEntry},
    value_objects::{
        SessionParams, SessionReport, DEFAULT_MEMBERS, DEFAULT_ROUNDS, MAX_MEMBERS, MIN_MEMBERS,
    },
};
