//! Controlled vocabulary access for token expansion.
//!
//! A thesaurus relates concepts to labels (preferred, alternative, hidden)
//! and to each other (broader, narrower). Expansion filters only see the
//! [`ThesaurusEngine`] trait; [`InMemoryThesaurus`] is a ready-made
//! implementation for vocabularies that fit in memory.
//!
//! # Components
//!
//! - [`relation`] - The relation kinds and their payload encoding
//! - [`engine`] - The lookup trait consumed by the filters
//! - [`memory`] - Hash-map backed engine

pub mod engine;
pub mod memory;
pub mod relation;

pub use engine::ThesaurusEngine;
pub use memory::InMemoryThesaurus;
pub use relation::RelationKind;
