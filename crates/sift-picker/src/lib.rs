//! Incremental fuzzy picker sessions.
//!
//! A [`PickerSession`] owns a read-only candidate [`Corpus`](sift_core::Corpus)
//! and a live query pattern. Every keystroke mutation re-ranks the corpus and
//! rebuilds the top-K result list; per-candidate failure markers let a
//! growing query skip candidates that already failed on a shorter prefix.
//!
//! The markers are strictly a performance device: the result list after any
//! sequence of mutations is byte-identical to ranking the corpus from
//! scratch against the final pattern. A candidate that fails a prefix of the
//! pattern cannot match the whole pattern, so a recorded failure at or below
//! the shared prefix of consecutive patterns stays valid; every other marker
//! is dropped before the rescan.
//!
//! The session also carries the picker's selection state: the selected index
//! resets to the top on every pattern change, navigation wraps at both ends,
//! and accepting returns the selected candidate's corpus id. Rendering is the
//! caller's concern.

#![forbid(unsafe_code)]

mod session;

pub use session::{PickerConfig, PickerSession, DEFAULT_LIMIT};
pub use sift_fuzzy::{PatternTooLong, RankedCandidate};
