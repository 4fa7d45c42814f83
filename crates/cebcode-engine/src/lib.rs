//! Donor code generation and validation engine.
//!
//! Given a free-text entity name and a read-only snapshot of existing
//! donor records, the engine synthesizes short alphanumeric identifier
//! codes, scores and ranks them, detects conflicts and confusable
//! near-duplicates against the registry, and validates user-supplied
//! custom codes.
//!
//! # Architecture
//!
//! - [`analysis`] -- name decomposition into initials and abbreviations
//! - [`synthesis`] -- the three candidate strategies and the fallback cascade
//! - [`validate`] -- format, uniqueness, and similarity checks
//! - [`score`] -- the 0-100 confidence model and suggestion packaging
//! - [`engine`] -- the [`CodeEngine`] orchestrator
//!
//! Data flows one way: name -> analysis -> synthesis -> (validate, score)
//! -> engine -> caller. The engine is fully synchronous and does no I/O;
//! every loop is explicitly bounded, so a call completes in well under a
//! UI debounce window regardless of donor-list size.
//!
//! ```
//! use cebcode_engine::{CodeEngine, GenerateOptions};
//!
//! let engine = CodeEngine::new(Vec::new());
//! let result = engine
//!     .generate_code(&GenerateOptions::new("World Health Organization"))
//!     .unwrap();
//! assert!(result.primary.code.chars().all(|c| c.is_ascii_alphanumeric()));
//! ```

pub mod analysis;
pub mod engine;
pub mod score;
pub mod synthesis;
pub mod validate;

pub use engine::{
    CodeEngine, DEFAULT_MAX_SUGGESTIONS, DEFAULT_PREFERRED_LENGTH, GenerateOptions,
    GenerationError,
};
pub use synthesis::Strategy;
pub use validate::{validate_code, validate_code_format};
