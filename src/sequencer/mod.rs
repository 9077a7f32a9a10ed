//! Hero text sequencer — typing/erasing phrase animation.
//!
//! DESIGN
//! ======
//! A pure finite-state machine with no clock and no I/O. A driver asks for
//! `next_delay()`, waits that long, then calls `advance()` exactly once.
//! Time lives outside the machine, so any schedule can be replayed by
//! summing delays.
//!
//! STATES
//! ======
//! `Typing` → `HoldingFull` → `Erasing` → `Typing` (next phrase) → ...
//!
//! Completion happens in the same step as the final append or removal: the
//! tick that types the last character also enters the hold, and the tick
//! that removes the last character also moves to the next phrase.
//!
//! INVARIANTS
//! ==========
//! - Displayed text is always the first `typed` chars of the active phrase.
//! - `typed` only grows while typing and only shrinks while erasing.
//! - Lengths count `char`s, so a tick never splits a code point.

pub mod article;
pub mod cursor;

use std::borrow::Cow;
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

pub use cursor::CursorBlink;

pub const DEFAULT_TYPING_INTERVAL_MS: u64 = 80;
pub const DEFAULT_ERASING_INTERVAL_MS: u64 = 50;
pub const DEFAULT_HOLD_MS: u64 = 1200;
pub const DEFAULT_CURSOR_BLINK_MS: u64 = 530;

/// Built-in hero titles. Articles are already correct for each noun.
pub const DEFAULT_PHRASES: &[&str] = &[
    "I am a game developer",
    "I am a data analyst",
    "I am a student",
    "I am an IITian",
    "I am a computer science enthusiast",
    "I am an AI automator",
    "I am a leader",
];

// =============================================================================
// ERROR
// =============================================================================

/// Invalid sequencer configuration. Raised at construction, never at runtime.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SequencerError {
    #[error("phrase list must contain at least one phrase")]
    EmptyPhrases,

    #[error("{field} must be greater than zero")]
    ZeroDuration { field: &'static str },
}

// =============================================================================
// PHRASE LIST
// =============================================================================

/// Ordered, non-empty, read-only list of phrases.
///
/// Backed by `Arc<[String]>` so every view can clone the hero config cheaply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseList {
    phrases: Arc<[String]>,
}

impl PhraseList {
    /// Build a phrase list. Empty phrases are allowed; an empty list is not.
    ///
    /// # Errors
    ///
    /// Returns [`SequencerError::EmptyPhrases`] if `phrases` yields nothing.
    pub fn new<I, S>(phrases: I) -> Result<Self, SequencerError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let phrases: Arc<[String]> = phrases.into_iter().map(Into::into).collect();
        if phrases.is_empty() {
            return Err(SequencerError::EmptyPhrases);
        }
        Ok(Self { phrases })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    /// Always `false`; construction rejects an empty list.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    /// Phrase at `index`, wrapping modulo the list length.
    #[must_use]
    pub fn get(&self, index: usize) -> &str {
        &self.phrases[index % self.phrases.len()]
    }

    /// Index of the phrase that follows `index`.
    #[must_use]
    pub fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.phrases.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.phrases.iter().map(String::as_str)
    }
}

impl Default for PhraseList {
    fn default() -> Self {
        Self { phrases: DEFAULT_PHRASES.iter().map(|p| (*p).to_string()).collect() }
    }
}

// =============================================================================
// CONFIG
// =============================================================================

/// Timing and content for one animation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequencerConfig {
    pub phrases: PhraseList,
    /// Delay between character appends.
    pub typing_interval: Duration,
    /// Delay between character removals.
    pub erasing_interval: Duration,
    /// Pause after a phrase is fully typed, before erasing starts.
    pub hold: Duration,
    /// Cursor visibility toggle period.
    pub cursor_blink: Duration,
    /// Rewrite "a"/"an" in snapshots to agree with the following word.
    pub fix_articles: bool,
}

impl SequencerConfig {
    /// Config with default timings for the given phrases.
    #[must_use]
    pub fn new(phrases: PhraseList) -> Self {
        Self {
            phrases,
            typing_interval: Duration::from_millis(DEFAULT_TYPING_INTERVAL_MS),
            erasing_interval: Duration::from_millis(DEFAULT_ERASING_INTERVAL_MS),
            hold: Duration::from_millis(DEFAULT_HOLD_MS),
            cursor_blink: Duration::from_millis(DEFAULT_CURSOR_BLINK_MS),
            fix_articles: false,
        }
    }

    /// Reject zero durations.
    ///
    /// # Errors
    ///
    /// Returns [`SequencerError::ZeroDuration`] naming the first offending field.
    pub fn validate(&self) -> Result<(), SequencerError> {
        let fields = [
            ("typing_interval", self.typing_interval),
            ("erasing_interval", self.erasing_interval),
            ("hold", self.hold),
            ("cursor_blink", self.cursor_blink),
        ];
        for (field, value) in fields {
            if value.is_zero() {
                return Err(SequencerError::ZeroDuration { field });
            }
        }
        Ok(())
    }
}

impl Default for SequencerConfig {
    fn default() -> Self {
        Self::new(PhraseList::default())
    }
}

// =============================================================================
// MODE / STEP / SNAPSHOT
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    Typing,
    HoldingFull,
    Erasing,
}

/// What a single `advance()` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Appended one character; still typing.
    Typed,
    /// Phrase is fully shown; the hold has started.
    Completed,
    /// Hold elapsed; erasing has started. Text unchanged.
    EraseStarted,
    /// Removed one character; still erasing.
    Erased,
    /// Text is empty; typing restarts on the phrase at `phrase_index`.
    Advanced { phrase_index: usize },
}

/// Externally observable state: what the view renders verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub text: String,
    pub cursor_visible: bool,
}

impl Snapshot {
    /// Snapshot before the first tick: nothing typed, cursor shown.
    #[must_use]
    pub fn initial() -> Self {
        Self { text: String::new(), cursor_visible: true }
    }
}

// =============================================================================
// SEQUENCER
// =============================================================================

#[derive(Debug, Clone)]
pub struct Sequencer {
    config: SequencerConfig,
    phrase_index: usize,
    /// Chars of the active phrase currently shown.
    typed: usize,
    mode: Mode,
}

impl Sequencer {
    /// Validate `config` and build a sequencer in its initial state.
    ///
    /// # Errors
    ///
    /// Returns a [`SequencerError`] if any duration is zero.
    pub fn new(config: SequencerConfig) -> Result<Self, SequencerError> {
        config.validate()?;
        Ok(Self { config, phrase_index: 0, typed: 0, mode: Mode::Typing })
    }

    #[must_use]
    pub fn config(&self) -> &SequencerConfig {
        &self.config
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    #[must_use]
    pub fn active_phrase(&self) -> &str {
        self.config.phrases.get(self.phrase_index)
    }

    /// Canonical displayed text: a prefix of the active phrase.
    #[must_use]
    pub fn text(&self) -> &str {
        char_prefix(self.active_phrase(), self.typed)
    }

    /// Displayed text after view-only transforms.
    #[must_use]
    pub fn display_text(&self) -> Cow<'_, str> {
        let text = self.text();
        if self.config.fix_articles { article::fix_indefinite_article(text) } else { Cow::Borrowed(text) }
    }

    #[must_use]
    pub fn snapshot(&self, cursor: &CursorBlink) -> Snapshot {
        Snapshot { text: self.display_text().into_owned(), cursor_visible: cursor.visible() }
    }

    /// Wait before the next `advance()`, determined by the current mode.
    #[must_use]
    pub fn next_delay(&self) -> Duration {
        match self.mode {
            Mode::Typing => self.config.typing_interval,
            Mode::HoldingFull => self.config.hold,
            Mode::Erasing => self.config.erasing_interval,
        }
    }

    /// Perform exactly one scheduled step.
    pub fn advance(&mut self) -> Step {
        match self.mode {
            Mode::Typing => {
                let total = self.active_phrase().chars().count();
                if self.typed < total {
                    self.typed += 1;
                }
                if self.typed >= total {
                    self.mode = Mode::HoldingFull;
                    Step::Completed
                } else {
                    Step::Typed
                }
            }
            Mode::HoldingFull => {
                self.mode = Mode::Erasing;
                Step::EraseStarted
            }
            Mode::Erasing => {
                self.typed = self.typed.saturating_sub(1);
                if self.typed == 0 {
                    self.phrase_index = self.config.phrases.next_index(self.phrase_index);
                    self.mode = Mode::Typing;
                    Step::Advanced { phrase_index: self.phrase_index }
                } else {
                    Step::Erased
                }
            }
        }
    }
}

/// First `chars` chars of `s`, or all of `s` if it is shorter.
fn char_prefix(s: &str, chars: usize) -> &str {
    match s.char_indices().nth(chars) {
        Some((end, _)) => &s[..end],
        None => s,
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
