use itertools::Itertools;
use log::{debug, info};

use crate::{language::shuffle, scoring};

/// Lifecycle of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing typed yet, clock frozen
    Idle,
    /// Clock running, input accepted
    Active,
    /// Clock frozen, input ignored until restart
    Finished,
}

/// What a commit did with the typed word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commit {
    Ignored,
    Correct,
    Incorrect,
}

/// The mutable state of one playthrough
#[derive(Debug, Clone)]
pub struct Session {
    word_list: Vec<String>,
    shuffled_words: Vec<String>,
    current_index: usize,
    typed_buffer: String,
    correct_words: Vec<String>,
    duration_secs: u64,
    remaining_secs: u64,
    phase: Phase,
}

impl Session {
    /// New round over a fresh permutation of `word_list`
    pub fn new(word_list: &[String], duration_secs: u64) -> Self {
        let shuffled = shuffle(word_list);
        Self::from_parts(word_list.to_vec(), shuffled, duration_secs)
    }

    /// New round that presents `words` in the given order.
    ///
    /// A later [`Session::restart`] still shuffles.
    pub fn with_order(words: Vec<String>, duration_secs: u64) -> Self {
        Self::from_parts(words.clone(), words, duration_secs)
    }

    fn from_parts(word_list: Vec<String>, shuffled_words: Vec<String>, duration_secs: u64) -> Self {
        Self {
            word_list,
            shuffled_words,
            current_index: 0,
            typed_buffer: String::new(),
            correct_words: Vec::new(),
            duration_secs,
            remaining_secs: duration_secs,
            phase: Phase::Idle,
        }
    }

    /// Throw away the round and start over with a fresh permutation
    pub fn restart(&mut self) {
        let word_list = std::mem::take(&mut self.word_list);
        let shuffled = shuffle(&word_list);
        *self = Self::from_parts(word_list, shuffled, self.duration_secs);
        info!("session restarted with {} words", self.shuffled_words.len());
    }

    pub fn on_text_change(&mut self, new_text: impl Into<String>) {
        if self.phase == Phase::Finished {
            return;
        }

        if self.phase == Phase::Idle {
            self.phase = Phase::Active;
            info!("session started, {}s on the clock", self.remaining_secs);
        }

        self.typed_buffer = new_text.into();
    }

    /// Judge the typed word against the current target and move on
    pub fn on_commit_word(&mut self) -> Commit {
        if self.phase == Phase::Finished || self.typed_buffer.trim().is_empty() {
            return Commit::Ignored;
        }

        let index = self.current_index;
        let Some(target) = self.shuffled_words.get(index) else {
            return Commit::Ignored;
        };

        let outcome = if self.typed_buffer.trim() == target.trim() {
            self.correct_words.push(target.clone());
            Commit::Correct
        } else {
            Commit::Incorrect
        };
        debug!(
            "commit #{index}: typed {:?} for {:?} -> {outcome:?}",
            self.typed_buffer, target
        );

        self.current_index += 1;
        self.typed_buffer.clear();

        if self.remaining_secs == 0 || index + 1 == self.shuffled_words.len() {
            self.finish();
        }

        outcome
    }

    pub fn on_timer_tick(&mut self) {
        if self.phase != Phase::Active {
            return;
        }

        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs == 0 {
            self.finish();
        }
    }

    fn finish(&mut self) {
        self.phase = Phase::Finished;
        info!(
            "session finished: {}/{} correct, {} wpm",
            self.score(),
            self.current_index,
            self.wpm()
        );
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn has_started(&self) -> bool {
        self.phase != Phase::Idle
    }

    pub fn has_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    /// The word to type next, `None` once the list is exhausted
    pub fn current_word(&self) -> Option<&str> {
        self.shuffled_words
            .get(self.current_index)
            .map(String::as_str)
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn typed_buffer(&self) -> &str {
        &self.typed_buffer
    }

    pub fn shuffled_words(&self) -> &[String] {
        &self.shuffled_words
    }

    pub fn word_list(&self) -> &[String] {
        &self.word_list
    }

    pub fn total_words(&self) -> usize {
        self.shuffled_words.len()
    }

    pub fn score(&self) -> usize {
        self.correct_words.len()
    }

    pub fn correct_words(&self) -> &[String] {
        &self.correct_words
    }

    pub fn duration_secs(&self) -> u64 {
        self.duration_secs
    }

    pub fn remaining_secs(&self) -> u64 {
        self.remaining_secs
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.duration_secs - self.remaining_secs
    }

    pub fn wpm(&self) -> u64 {
        scoring::wpm(self.score(), self.elapsed_secs())
    }

    /// Committed words paired with whether each one counts as correct.
    ///
    /// Correctness is assigned from `correct_words` as a multiset, so the
    /// wrong entries are exactly `shuffled_words[..current_index] - correct_words`.
    pub fn breakdown(&self) -> Vec<(&str, bool)> {
        let mut unclaimed = self.correct_words.iter().map(String::as_str).counts();

        self.shuffled_words[..self.current_index]
            .iter()
            .map(|word| {
                let correct = match unclaimed.get_mut(word.as_str()) {
                    Some(n) if *n > 0 => {
                        *n -= 1;
                        true
                    }
                    _ => false,
                };
                (word.as_str(), correct)
            })
            .collect()
    }

    pub fn wrong_words(&self) -> Vec<&str> {
        self.breakdown()
            .into_iter()
            .filter(|(_, correct)| !correct)
            .map(|(word, _)| word)
            .collect()
    }
}
