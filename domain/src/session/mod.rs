//! Council session entities and value objects

pub mod entities;
pub mod value_objects;

pub use entities::{Speaker, Transcript, TranscriptEntry};
pub use value_objects::{
    SessionParams, SessionReport, DEFAULT_MEMBERS, DEFAULT_ROUNDS, MAX_MEMBERS, MIN_MEMBERS,
};
