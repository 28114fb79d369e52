//! The board aggregate and its state transitions.
//!
//! A single record holds everything: the admin password, the question
//! currently on display, its optional expiration, the FIFO queue of
//! upcoming questions, the answer list, and display settings. Every
//! operation mutates the aggregate in place; persistence is the caller's
//! explicit commit step (see [`crate::store`]).
//!
//! Expiration is lazy: nothing rotates until [`Aggregate::check_expiration`]
//! is called on a read path. There is no background timer, so between the
//! deadline and the next poll the stale question stays visible.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Question shown while the queue is empty.
pub const WAITING_QUESTION: &str = "Gaidām jautājumu...";

const DEFAULT_PASSWORD: &str = "admin";
const DEFAULT_QUESTION: &str = "Kā tev šķiet...?";
const DEFAULT_INTERVAL: &str = "1d";
const DEFAULT_MAX_ANSWERS: i64 = 40;
const DEFAULT_THEME: &str = "light";

/// A submitted answer as it appears on the board.
///
/// `id` is positional: it is assigned as `answers.len() + 1` at append
/// time, not from a monotonic counter, so ids repeat once eviction kicks
/// in. This mirrors the persisted data produced by earlier deployments
/// and is kept as-is rather than silently migrated to stable ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub id: u32,
    pub text: String,
}

/// Display and intake settings.
///
/// `interval` is opaque display metadata carried for the admin panel;
/// no logic reads it. `max_answers <= 0` means unbounded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_interval")]
    pub interval: String,
    #[serde(default = "default_max_answers")]
    pub max_answers: i64,
    #[serde(default = "default_theme")]
    pub theme: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            interval: default_interval(),
            max_answers: default_max_answers(),
            theme: default_theme(),
        }
    }
}

fn default_interval() -> String {
    DEFAULT_INTERVAL.to_string()
}

const fn default_max_answers() -> i64 {
    DEFAULT_MAX_ANSWERS
}

fn default_theme() -> String {
    DEFAULT_THEME.to_string()
}

fn default_password() -> String {
    DEFAULT_PASSWORD.to_string()
}

fn default_question() -> String {
    DEFAULT_QUESTION.to_string()
}

/// The single record holding all application state.
///
/// Every field carries a serde default so a persisted copy written by an
/// older shape backfills missing fields on load (migration by field
/// presence, not by version number).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aggregate {
    /// Shared admin secret, compared in plaintext.
    #[serde(default = "default_password")]
    pub password: String,
    /// Question currently on display.
    #[serde(default = "default_question")]
    pub current_question: String,
    /// Unix timestamp (seconds) after which the next read rotates.
    #[serde(default)]
    pub expires_at: Option<i64>,
    /// FIFO queue of upcoming questions.
    #[serde(default)]
    pub next_questions: Vec<String>,
    /// Answers in insertion order; bounded by `settings.max_answers`.
    #[serde(default)]
    pub answers: Vec<Answer>,
    #[serde(default)]
    pub settings: Settings,
}

impl Default for Aggregate {
    fn default() -> Self {
        Self {
            password: default_password(),
            current_question: default_question(),
            expires_at: None,
            next_questions: Vec::new(),
            answers: Vec::new(),
            settings: Settings::default(),
        }
    }
}

/// Rejected answer submission.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    /// Submitted text was empty or whitespace-only.
    #[error("answer text is empty")]
    Empty,
}

impl Aggregate {
    /// Retire the current question and advance the queue.
    ///
    /// Pops the head of `next_questions` into `current_question`, or falls
    /// back to [`WAITING_QUESTION`] when the queue is empty. Always clears
    /// the answer list and any pending expiration.
    pub fn rotate(&mut self) {
        if self.next_questions.is_empty() {
            self.current_question = WAITING_QUESTION.to_string();
        } else {
            self.current_question = self.next_questions.remove(0);
        }
        self.expires_at = None;
        self.answers.clear();
    }

    /// Rotate if the expiration deadline has passed.
    ///
    /// Called at the start of every read of board state. Returns `true`
    /// when a rotation happened, so the caller knows to persist.
    pub fn check_expiration(&mut self, now: i64) -> bool {
        if self.expires_at.is_some_and(|deadline| now > deadline) {
            self.rotate();
            true
        } else {
            false
        }
    }

    /// Accept a student answer.
    ///
    /// Trims the text and rejects empty submissions. At capacity the
    /// oldest answer is evicted before the append. The id is assigned
    /// positionally (`len + 1` after eviction) - see [`Answer`].
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::Empty`] for empty or whitespace-only text.
    pub fn submit(&mut self, text: &str) -> Result<(), SubmitError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(SubmitError::Empty);
        }

        let max_answers = self.settings.max_answers;
        if max_answers > 0 && self.answers.len() as i64 >= max_answers && !self.answers.is_empty() {
            self.answers.remove(0);
        }

        let id = u32::try_from(self.answers.len()).unwrap_or(u32::MAX).saturating_add(1);
        self.answers.push(Answer {
            id,
            text: text.to_string(),
        });
        Ok(())
    }

    /// Set the current question directly.
    ///
    /// With a duration the question expires `duration` seconds from `now`;
    /// without one any existing expiration is cleared. The two effects are
    /// coupled: a manual question change never inherits the old deadline.
    pub fn set_question(&mut self, text: impl Into<String>, duration: Option<i64>, now: i64) {
        self.current_question = text.into();
        self.expires_at = duration.map(|seconds| now + seconds);
    }

    /// Seconds until the current question expires.
    ///
    /// `None` when no expiration is set; never negative.
    #[must_use]
    pub fn remaining_time(&self, now: i64) -> Option<i64> {
        self.expires_at.map(|deadline| (deadline - now).max(0))
    }

    /// Apply an admin patch: only keys present in the patch are touched.
    ///
    /// Merge order matches the admin panel contract:
    /// 1. `current_question` - set and clear `expires_at`
    /// 2. `duration` - set `expires_at` relative to `now`; non-numeric or
    ///    falsy values are silently ignored (lenient merge, not an error)
    /// 3. `next_questions` - full replace of the queue
    /// 4. `settings` - shallow key-wise merge
    /// 5. `clear_answers` - truthy empties the answer list
    /// 6. `password` - full replace, plaintext
    pub fn apply_update(&mut self, patch: UpdatePatch, now: i64) {
        if let Some(question) = patch.current_question {
            // Setting a question drops the old deadline; a co-supplied
            // duration re-establishes one below.
            self.set_question(question, None, now);
        }

        if let Some(duration) = patch.duration {
            if is_truthy(&duration) {
                if let Some(seconds) = parse_duration(&duration) {
                    self.expires_at = Some(now + seconds);
                }
            }
        }

        if let Some(queue) = patch.next_questions {
            self.next_questions = queue;
        }

        if let Some(settings) = patch.settings {
            settings.merge_into(&mut self.settings);
        }

        if let Some(clear) = patch.clear_answers {
            if is_truthy(&clear) {
                self.answers.clear();
            }
        }

        if let Some(password) = patch.password {
            self.password = password;
        }
    }
}

// =============================================================================
// Admin patch types
// =============================================================================

/// Selective admin update: absent keys leave the aggregate untouched.
///
/// `duration` and `clear_answers` stay untyped JSON values on purpose -
/// the admin panel has historically sent numbers, numeric strings, and
/// bare flags for these, and the merge policy is lenient rather than
/// strict.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePatch {
    pub current_question: Option<String>,
    pub duration: Option<Value>,
    pub next_questions: Option<Vec<String>>,
    pub settings: Option<SettingsPatch>,
    pub clear_answers: Option<Value>,
    pub password: Option<String>,
}

/// Shallow settings merge: only the keys present are replaced.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SettingsPatch {
    pub interval: Option<String>,
    pub max_answers: Option<i64>,
    pub theme: Option<String>,
}

impl SettingsPatch {
    fn merge_into(self, settings: &mut Settings) {
        if let Some(interval) = self.interval {
            settings.interval = interval;
        }
        if let Some(max_answers) = self.max_answers {
            settings.max_answers = max_answers;
        }
        if let Some(theme) = self.theme {
            settings.theme = theme;
        }
    }
}

/// JSON truthiness: null, false, 0, "" and empty containers are falsy.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Lenient duration parse: a JSON number (truncated) or a numeric string.
/// Anything else is `None` and the caller skips the field.
fn parse_duration(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    const NOW: i64 = 1_700_000_000;

    #[test]
    fn test_default_aggregate() {
        let board = Aggregate::default();
        assert_eq!(board.password, "admin");
        assert_eq!(board.current_question, "Kā tev šķiet...?");
        assert_eq!(board.expires_at, None);
        assert!(board.next_questions.is_empty());
        assert!(board.answers.is_empty());
        assert_eq!(board.settings.interval, "1d");
        assert_eq!(board.settings.max_answers, 40);
        assert_eq!(board.settings.theme, "light");
    }

    #[test]
    fn test_rotate_pops_queue_head() {
        let mut board = Aggregate::default();
        board.next_questions = vec!["first".to_string(), "second".to_string()];
        board.expires_at = Some(NOW);
        board.submit("stale").unwrap();

        board.rotate();

        assert_eq!(board.current_question, "first");
        assert_eq!(board.next_questions, vec!["second".to_string()]);
        assert_eq!(board.expires_at, None);
        assert!(board.answers.is_empty());
    }

    #[test]
    fn test_rotate_empty_queue_sets_placeholder() {
        let mut board = Aggregate::default();
        board.rotate();
        assert_eq!(board.current_question, WAITING_QUESTION);
    }

    #[test]
    fn test_check_expiration_past_deadline_rotates() {
        let mut board = Aggregate::default();
        board.next_questions = vec!["next up".to_string()];
        board.expires_at = Some(NOW - 1);
        board.submit("old answer").unwrap();

        assert!(board.check_expiration(NOW));
        assert_eq!(board.current_question, "next up");
        assert!(board.answers.is_empty());
        assert_eq!(board.expires_at, None);
    }

    #[test]
    fn test_check_expiration_before_deadline_is_noop() {
        let mut board = Aggregate::default();
        board.expires_at = Some(NOW + 60);
        assert!(!board.check_expiration(NOW));
        assert_eq!(board.expires_at, Some(NOW + 60));
    }

    #[test]
    fn test_check_expiration_without_deadline_is_noop() {
        let mut board = Aggregate::default();
        let question = board.current_question.clone();
        assert!(!board.check_expiration(NOW));
        assert_eq!(board.current_question, question);
    }

    #[test]
    fn test_submit_rejects_empty_and_whitespace() {
        let mut board = Aggregate::default();
        assert_eq!(board.submit(""), Err(SubmitError::Empty));
        assert_eq!(board.submit("   \t\n"), Err(SubmitError::Empty));
        assert!(board.answers.is_empty());
    }

    #[test]
    fn test_submit_trims_text() {
        let mut board = Aggregate::default();
        board.submit("  hello  ").unwrap();
        assert_eq!(board.answers[0].text, "hello");
        assert_eq!(board.answers[0].id, 1);
    }

    #[test]
    fn test_submit_never_exceeds_max_answers() {
        let mut board = Aggregate::default();
        board.settings.max_answers = 3;
        for i in 0..10 {
            board.submit(&format!("answer {i}")).unwrap();
            assert!(board.answers.len() <= 3);
        }
        assert_eq!(board.answers.len(), 3);
    }

    #[test]
    fn test_submit_evicts_oldest_and_reassigns_positional_ids() {
        // Positional len+1 ids: after eviction at capacity 2, both "b" and
        // "c" end up with id 2. Surprising, but the preserved contract.
        let mut board = Aggregate::default();
        board.settings.max_answers = 2;

        board.submit("a").unwrap();
        board.submit("b").unwrap();
        board.submit("c").unwrap();

        assert_eq!(
            board.answers,
            vec![
                Answer {
                    id: 2,
                    text: "b".to_string()
                },
                Answer {
                    id: 2,
                    text: "c".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_submit_zero_or_negative_max_is_unbounded() {
        let mut board = Aggregate::default();
        board.settings.max_answers = 0;
        for i in 0..100 {
            board.submit(&format!("answer {i}")).unwrap();
        }
        assert_eq!(board.answers.len(), 100);

        board.settings.max_answers = -5;
        board.submit("one more").unwrap();
        assert_eq!(board.answers.len(), 101);
    }

    #[test]
    fn test_set_question_with_duration() {
        let mut board = Aggregate::default();
        board.set_question("What now?", Some(300), NOW);
        assert_eq!(board.current_question, "What now?");
        assert_eq!(board.expires_at, Some(NOW + 300));
    }

    #[test]
    fn test_set_question_without_duration_clears_expiry() {
        let mut board = Aggregate::default();
        board.expires_at = Some(NOW + 300);
        board.set_question("Override", None, NOW);
        assert_eq!(board.expires_at, None);
    }

    #[test]
    fn test_remaining_time_clamps_to_zero() {
        let mut board = Aggregate::default();
        assert_eq!(board.remaining_time(NOW), None);

        board.expires_at = Some(NOW + 42);
        assert_eq!(board.remaining_time(NOW), Some(42));

        board.expires_at = Some(NOW - 42);
        assert_eq!(board.remaining_time(NOW), Some(0));
    }

    #[test]
    fn test_update_question_clears_expiry() {
        let mut board = Aggregate::default();
        board.expires_at = Some(NOW + 600);

        let patch: UpdatePatch =
            serde_json::from_value(json!({"current_question": "New question"})).unwrap();
        board.apply_update(patch, NOW);

        assert_eq!(board.current_question, "New question");
        assert_eq!(board.expires_at, None);
    }

    #[test]
    fn test_update_question_with_duration_sets_expiry() {
        let mut board = Aggregate::default();

        let patch: UpdatePatch =
            serde_json::from_value(json!({"current_question": "Timed", "duration": 120})).unwrap();
        board.apply_update(patch, NOW);

        assert_eq!(board.current_question, "Timed");
        assert_eq!(board.expires_at, Some(NOW + 120));
    }

    #[test]
    fn test_update_duration_accepts_numeric_string() {
        let mut board = Aggregate::default();
        let patch: UpdatePatch = serde_json::from_value(json!({"duration": "90"})).unwrap();
        board.apply_update(patch, NOW);
        assert_eq!(board.expires_at, Some(NOW + 90));
    }

    #[test]
    fn test_update_duration_ignores_junk() {
        let mut board = Aggregate::default();
        let patch: UpdatePatch = serde_json::from_value(json!({"duration": "soon"})).unwrap();
        board.apply_update(patch, NOW);
        assert_eq!(board.expires_at, None);
    }

    #[test]
    fn test_update_duration_ignores_falsy_zero() {
        let mut board = Aggregate::default();
        let patch: UpdatePatch = serde_json::from_value(json!({"duration": 0})).unwrap();
        board.apply_update(patch, NOW);
        assert_eq!(board.expires_at, None);
    }

    #[test]
    fn test_update_replaces_queue() {
        let mut board = Aggregate::default();
        board.next_questions = vec!["old".to_string()];

        let patch: UpdatePatch =
            serde_json::from_value(json!({"next_questions": ["x", "y"]})).unwrap();
        board.apply_update(patch, NOW);

        assert_eq!(board.next_questions, vec!["x".to_string(), "y".to_string()]);
    }

    #[test]
    fn test_update_settings_is_shallow_merge() {
        let mut board = Aggregate::default();

        let patch: UpdatePatch =
            serde_json::from_value(json!({"settings": {"theme": "dark"}})).unwrap();
        board.apply_update(patch, NOW);

        assert_eq!(board.settings.theme, "dark");
        assert_eq!(board.settings.max_answers, 40);
        assert_eq!(board.settings.interval, "1d");
    }

    #[test]
    fn test_update_clear_answers_truthy() {
        let mut board = Aggregate::default();
        board.submit("something").unwrap();

        let patch: UpdatePatch = serde_json::from_value(json!({"clear_answers": true})).unwrap();
        board.apply_update(patch, NOW);
        assert!(board.answers.is_empty());
    }

    #[test]
    fn test_update_clear_answers_falsy_keeps_answers() {
        let mut board = Aggregate::default();
        board.submit("something").unwrap();

        let patch: UpdatePatch = serde_json::from_value(json!({"clear_answers": 0})).unwrap();
        board.apply_update(patch, NOW);
        assert_eq!(board.answers.len(), 1);
    }

    #[test]
    fn test_update_password_replace() {
        let mut board = Aggregate::default();
        let patch: UpdatePatch = serde_json::from_value(json!({"password": "hunter2"})).unwrap();
        board.apply_update(patch, NOW);
        assert_eq!(board.password, "hunter2");
    }

    #[test]
    fn test_update_empty_patch_is_noop() {
        let mut board = Aggregate::default();
        let before = board.clone();
        board.apply_update(UpdatePatch::default(), NOW);
        assert_eq!(board, before);
    }
}
