//! Shared types for the cebcode donor code engine.
//!
//! This crate holds the data model exchanged between the engine, its
//! callers, and the CLI tools:
//!
//! - [`record`] -- donor registry records (read-only snapshot rows)
//! - [`suggestion`] -- generated suggestions, validation results, stats
//! - [`character`] -- ASCII character classification and code cleaning
//!
//! No logic beyond small pure helpers lives here; the algorithms are in
//! `cebcode-engine`.

pub mod character;
pub mod record;
pub mod suggestion;

pub use record::{DonorKind, DonorRecord};
pub use suggestion::{
    CodeGenerationResult, CodePattern, CodeValidationResult, CustomCodeCheck, FormatCheck,
    GeneratedCodeSuggestion, GenerationStats, PatternKind,
};
