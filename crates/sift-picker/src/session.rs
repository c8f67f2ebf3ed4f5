use sift_core::{CandidateId, Corpus};
use sift_fuzzy::{Pattern, PatternTooLong, RankedCandidate, TopK};

/// Number of results a picker shows by default.
pub const DEFAULT_LIMIT: usize = 7;

/// Session construction knobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickerConfig {
    /// Maximum number of results kept per rescan.
    pub limit: usize,
    /// Also accept adjacent-transposition typos, scored at a quarter.
    ///
    /// Lenient matches are not prefix-monotone, so this disables the failure
    /// markers: every keystroke rescans the full corpus.
    pub lenient: bool,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            lenient: false,
        }
    }
}

/// One interactive query session over a fixed corpus.
#[derive(Debug, Clone)]
pub struct PickerSession {
    corpus: Corpus,
    config: PickerConfig,
    pattern: Pattern,
    /// Byte length of the shortest pattern prefix each candidate is known to
    /// fail on; `None` when no failure has been observed.
    failed_at: Vec<Option<u32>>,
    results: Vec<RankedCandidate>,
    selected: usize,
}

impl PickerSession {
    pub fn new(corpus: Corpus) -> Self {
        Self::with_config(corpus, PickerConfig::default())
    }

    pub fn with_config(corpus: Corpus, config: PickerConfig) -> Self {
        let failed_at = vec![None; corpus.len()];
        let mut session = Self {
            corpus,
            config,
            pattern: Pattern::empty(),
            failed_at,
            results: Vec::new(),
            selected: 0,
        };
        session.rescan(0);
        session
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Current results: descending score, ties in corpus order, at most
    /// `limit` entries.
    pub fn results(&self) -> &[RankedCandidate] {
        &self.results
    }

    /// Resolves a ranked id back to its candidate string.
    pub fn candidate(&self, id: CandidateId) -> Option<&str> {
        self.corpus.get(id)
    }

    /// Appends one keystroke and re-ranks.
    ///
    /// A keystroke that would push the pattern past its maximum length is
    /// rejected and leaves the session untouched.
    pub fn push_char(&mut self, ch: char) -> Result<(), PatternTooLong> {
        let keep = self.pattern.len();
        self.pattern.push_char(ch)?;
        self.rescan(keep);
        Ok(())
    }

    /// Removes the last keystroke and re-ranks. Candidates that failed only
    /// on the removed byte(s) resurface. No-op on an empty pattern.
    pub fn pop_char(&mut self) {
        if self.pattern.pop_char().is_some() {
            let keep = self.pattern.len();
            self.rescan(keep);
        }
    }

    /// Clears the query, restoring the unfiltered view.
    pub fn clear(&mut self) {
        if !self.pattern.is_empty() {
            self.pattern.clear();
            self.rescan(0);
        }
    }

    /// Replaces the whole query, reusing markers recorded against the shared
    /// byte prefix of the old and new patterns.
    pub fn set_pattern(&mut self, text: &str) -> Result<(), PatternTooLong> {
        let next = Pattern::new(text)?;
        let keep = common_prefix_len(self.pattern.as_str().as_bytes(), text.as_bytes());
        self.pattern = next;
        self.rescan(keep);
        Ok(())
    }

    /// Currently selected result, if any.
    pub fn selected(&self) -> Option<RankedCandidate> {
        self.results.get(self.selected).copied()
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Moves the selection down, wrapping past the last result.
    pub fn select_next(&mut self) {
        if self.results.is_empty() {
            return;
        }
        self.selected = if self.selected + 1 >= self.results.len() {
            0
        } else {
            self.selected + 1
        };
    }

    /// Moves the selection up, wrapping past the first result.
    pub fn select_prev(&mut self) {
        if self.results.is_empty() {
            return;
        }
        self.selected = if self.selected == 0 {
            self.results.len() - 1
        } else {
            self.selected - 1
        };
    }

    /// Accepts the selection, returning the candidate's corpus id.
    pub fn accept(&self) -> Option<CandidateId> {
        self.selected().map(|entry| entry.id)
    }

    /// Re-ranks the corpus against the current pattern. `keep` is the byte
    /// length of the prefix shared with the previous pattern; failures
    /// recorded past it no longer apply and are dropped.
    fn rescan(&mut self, keep: usize) {
        let prune = !self.config.lenient;
        if prune {
            for marker in &mut self.failed_at {
                if marker.is_some_and(|len| len as usize > keep) {
                    *marker = None;
                }
            }
        }

        let len = self.pattern.len() as u32;
        let mut topk = TopK::new(self.config.limit);
        let mut scanned = 0usize;

        for (id, candidate) in self.corpus.iter().enumerate() {
            if prune && self.failed_at[id].is_some() {
                continue;
            }
            scanned += 1;

            let score = if self.config.lenient {
                self.pattern.score_lenient(candidate)
            } else {
                self.pattern.score(candidate)
            };
            if prune && score == 0 {
                self.failed_at[id] = Some(len);
            }
            topk.offer(id as CandidateId, score);
        }

        self.results = topk.into_ranked();
        self.selected = 0;

        tracing::debug!(
            pattern = self.pattern.as_str(),
            scanned,
            skipped = self.corpus.len() - scanned,
            results = self.results.len(),
            "rescan"
        );
    }
}

fn common_prefix_len(a: &[u8], b: &[u8]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}
