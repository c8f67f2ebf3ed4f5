use sift_fuzzy::{rank, Pattern, EMPTY_PATTERN_SCORE};

fn lcg(seed: &mut u64) -> u64 {
    *seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
    *seed
}

fn synthetic_corpus(count: usize) -> Vec<String> {
    let mut seed = 0x5eed_0f_c0ffeeu64;
    (0..count)
        .map(|i| {
            let mut name = String::new();
            for _ in 0..(lcg(&mut seed) % 12 + 4) {
                name.push((b'a' + (lcg(&mut seed) % 26) as u8) as char);
            }
            format!("src/{name}_{i}.rs")
        })
        .collect()
}

#[test]
fn empty_corpus_yields_empty_results() {
    let pattern = Pattern::new("abc").unwrap();
    assert!(rank(&pattern, std::iter::empty(), 7).is_empty());
}

// Scenario: an empty pattern over a large corpus shows the first k
// candidates unfiltered, all carrying the trivial-match sentinel.
#[test]
fn empty_pattern_shows_corpus_head() {
    let corpus = synthetic_corpus(500);
    let results = rank(&Pattern::empty(), corpus.iter().map(String::as_str), 7);

    assert_eq!(results.len(), 7);
    for (slot, entry) in results.iter().enumerate() {
        assert_eq!(entry.id as usize, slot);
        assert_eq!(entry.score, EMPTY_PATTERN_SCORE);
    }
}

#[test]
fn fewer_matches_than_k_returns_them_all() {
    let pattern = Pattern::new("mc").unwrap();
    let corpus = ["Makefile", "main.cpp", "module.c", "README.md"];
    let results = rank(&pattern, corpus.iter().copied(), 7);

    let ids: Vec<u32> = results.iter().map(|r| r.id).collect();
    assert_eq!(ids.len(), 2);
    assert!(ids.contains(&1), "main.cpp matches m..c");
    assert!(ids.contains(&2), "module.c matches m..c");
}

// Growing the pattern can drop a candidate entirely; membership is
// re-derived per pattern, never patched.
#[test]
fn membership_is_not_monotonic() {
    let corpus = ["map.rs", "mc.rs"];

    let short = rank(&Pattern::new("m").unwrap(), corpus.iter().copied(), 7);
    assert_eq!(short.len(), 2);

    let longer = rank(&Pattern::new("mp").unwrap(), corpus.iter().copied(), 7);
    let ids: Vec<u32> = longer.iter().map(|r| r.id).collect();
    assert_eq!(ids, [0], "mc.rs has no 'p' and drops out");
}
