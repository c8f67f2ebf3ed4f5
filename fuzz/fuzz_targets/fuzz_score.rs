#![no_main]

use libfuzzer_sys::fuzz_target;
use sift_fuzzy::{Pattern, EMPTY_PATTERN_SCORE, MAX_PATTERN_LEN};

/// Cap fuzz inputs so `-max_len` overrides cannot drive quadratic behavior
/// via attacker-controlled candidate lengths.
const MAX_INPUT_SIZE: usize = 64 * 1024;

/// Returns a UTF-8 view of `data`, trimming up to 3 bytes if the cap splits a
/// multibyte codepoint.
fn truncate_utf8(data: &[u8]) -> Option<&str> {
    let cap = data.len().min(MAX_INPUT_SIZE);
    for trim in 0..=3 {
        if cap < trim {
            break;
        }
        if let Ok(text) = std::str::from_utf8(&data[..cap - trim]) {
            return Some(text);
        }
    }
    None
}

fuzz_target!(|data: &[u8]| {
    let Some(text) = truncate_utf8(data) else {
        return;
    };
    // First line is the pattern, the rest is the candidate.
    let Some((pattern_text, candidate)) = text.split_once('\n') else {
        return;
    };

    let pattern = match Pattern::new(pattern_text) {
        Ok(pattern) => pattern,
        Err(err) => {
            assert!(pattern_text.len() > MAX_PATTERN_LEN, "spurious rejection: {err}");
            return;
        }
    };

    // Goal: never panic on arbitrary input, and keep the scorer, the boolean
    // predicate and the lenient variant mutually consistent.
    let score = pattern.score(candidate);
    assert_eq!(score > 0, pattern.matches(candidate));
    if pattern.is_empty() {
        assert_eq!(score, EMPTY_PATTERN_SCORE);
    }
    assert!(pattern.score_lenient(candidate) >= score);
});
