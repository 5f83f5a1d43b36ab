//! # HMS Symptoms
//!
//! The symptom-to-medicine lookup used by the medicine finder.
//!
//! This crate contains:
//! - The static symptom reference table ([`SymptomTable`], [`SymptomRecord`]),
//!   embedded at build time and replaceable with an operator-supplied YAML file.
//! - The free-text matcher ([`match_symptoms`]) that maps a natural-language
//!   complaint to zero or more known symptom records.
//! - The bounded recency list ([`RecentSearches`]) owned by whichever layer
//!   drives the matcher.
//!
//! The matcher is a pure function of `(text, table)`; unmatched or too-short
//! input yields an empty result rather than an error. The caller decides how
//! to render "nothing found" and when to record a hit in its recency list.

pub mod matcher;
pub mod recent;
pub mod table;

pub use matcher::match_symptoms;
pub use recent::RecentSearches;
pub use table::{SymptomError, SymptomRecord, SymptomTable};
