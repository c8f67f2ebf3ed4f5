//! Fuzzy subsequence matching and ranking primitives used throughout Sift.
//!
//! A [`Pattern`] scores candidates by how well its characters appear, in
//! order, within them. The scorer rewards contiguous runs and matches that
//! sit at a word or path-segment boundary (or a camelCase transition), which
//! is what makes "type the initials" queries land on the right file, buffer
//! or command. [`TopK`] and [`rank`] keep the best few candidates of a corpus
//! without sorting it.
//!
//! ## Matching alphabet
//!
//! Matching is **ASCII-only** case-insensitive: inputs are treated as raw
//! UTF-8 bytes and only `A-Z`/`a-z` are folded. Non-ASCII bytes must match
//! exactly, byte for byte; there is no Unicode normalization or case folding.
//! That is sufficient for the filename/identifier corpora this crate ranks,
//! and it is a documented limitation rather than an accident.
//!
//! Scores are unnormalized positive integers. They are only meaningful for
//! ranking candidates against the same pattern — never compare them across
//! patterns, and never persist them.

#![forbid(unsafe_code)]

mod scoring;
mod topk;

pub use scoring::{Pattern, PatternTooLong, EMPTY_PATTERN_SCORE, MAX_PATTERN_LEN};
pub use topk::{rank, RankedCandidate, TopK};
