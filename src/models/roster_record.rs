//! Raw roster record model.
//!
//! This module defines [`RosterRecord`], one roster element as received from
//! the upstream grades API, before any of its values have been trusted.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{ScoreField, StudentScore};

const STUDENT_ID_KEYS: [&str; 2] = ["student_id", "aluno_id"];

/// A score value read from a [`RosterRecord`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawScore {
    /// The field is absent or null: not graded yet.
    Missing,
    /// The field holds a number.
    Number(Decimal),
    /// The field holds something that is not a number, kept as text.
    Unreadable(String),
}

/// One roster element exactly as received.
///
/// The element is kept as raw JSON so that a malformed value, such as a
/// score sent as `"abc"`, only affects its own student instead of the whole
/// roster. Both the native field names and the upstream ones (`aluno_id`,
/// `nota_np1`, `nota_np2`, `nota_exame`) are recognised.
///
/// # Example
///
/// ```
/// use roster_ranking::models::{RawScore, RosterRecord, ScoreField};
///
/// let record: RosterRecord =
///     serde_json::from_str(r#"{"aluno_id": 2, "nota_np1": "abc", "nota_np2": 7.0}"#).unwrap();
///
/// assert_eq!(record.student_id(), Some(2));
/// assert_eq!(record.score(ScoreField::Partial1), RawScore::Unreadable("abc".to_string()));
/// assert_eq!(record.score(ScoreField::FinalExam), RawScore::Missing);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RosterRecord(pub Value);

impl RosterRecord {
    /// Returns the student id, if the record carries a usable one.
    ///
    /// Integer ids and integer strings are accepted.
    pub fn student_id(&self) -> Option<i64> {
        match self.lookup(&STUDENT_ID_KEYS)? {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Reads one score field.
    pub fn score(&self, field: ScoreField) -> RawScore {
        match self.lookup(&score_keys(field)) {
            None => RawScore::Missing,
            Some(Value::Number(n)) => {
                let text = n.to_string();
                parse_decimal(&text).map_or(RawScore::Unreadable(text), RawScore::Number)
            }
            Some(Value::String(s)) => {
                parse_decimal(s).map_or_else(|| RawScore::Unreadable(s.clone()), RawScore::Number)
            }
            Some(other) => RawScore::Unreadable(other.to_string()),
        }
    }

    /// First non-null value under any of `keys`.
    fn lookup(&self, keys: &[&str]) -> Option<&Value> {
        keys.iter()
            .filter_map(|key| self.0.get(*key))
            .find(|value| !value.is_null())
    }
}

impl From<&StudentScore> for RosterRecord {
    fn from(score: &StudentScore) -> Self {
        Self(serde_json::json!({
            "student_id": score.student_id,
            "score_partial1": score.score_partial1.map(|v| v.to_string()),
            "score_partial2": score.score_partial2.map(|v| v.to_string()),
            "score_final_exam": score.score_final_exam.map(|v| v.to_string()),
        }))
    }
}

fn score_keys(field: ScoreField) -> [&'static str; 2] {
    match field {
        ScoreField::Partial1 => ["score_partial1", "nota_np1"],
        ScoreField::Partial2 => ["score_partial2", "nota_np2"],
        ScoreField::FinalExam => ["score_final_exam", "nota_exame"],
    }
}

fn parse_decimal(text: &str) -> Option<Decimal> {
    let text = text.trim();
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
}
