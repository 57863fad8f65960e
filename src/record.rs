//! Sentence records and model predictions.
//!
//! A [`SentenceRecord`] is one gold-annotated example from a linguistic test
//! suite: an ordered token sequence and a positionally aligned tag column
//! marking which token carries which argument role. A [`Prediction`] is the
//! raw output of a pretrained model for one sentence; the scorer only reads
//! the free-text `description` of each verb frame, everything else is
//! carried along untouched so prediction dumps stay byte-faithful.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{Error, Result};

/// Tag marking the token that carries the primary agent role.
pub const AGENT_TAG: &str = "ARG0";

/// Tag marking the token that carries the primary patient/theme role.
pub const PATIENT_TAG: &str = "ARG1";

/// A gold-annotated sentence from a test suite.
///
/// Loaded from JSON objects of the shape
/// `{"tokens": ["Cats", "chase", "mice"], "BIO": ["ARG0", "O", "ARG1"]}`.
/// Records are immutable once loaded and never normalized: the tag column is
/// consulted exactly as the suite author wrote it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceRecord {
    /// Ordered token sequence, without terminal punctuation.
    pub tokens: Vec<String>,
    /// Per-token tag column, positionally aligned with `tokens`.
    #[serde(rename = "BIO")]
    pub bio: Vec<String>,
}

impl SentenceRecord {
    /// Render the record as the sentence string sent to the model.
    ///
    /// Tokens are joined with single spaces, trailing whitespace is
    /// stripped, and a period is appended: the token lists in the suites
    /// carry no terminal punctuation, and the pretrained models parse
    /// noticeably worse without it.
    #[must_use]
    pub fn input_sentence(&self) -> String {
        let mut sentence = self.tokens.join(" ").trim_end().to_string();
        sentence.push('.');
        sentence
    }

    /// Look up the token carrying `tag`.
    ///
    /// Only the first occurrence of the tag is consulted, even if a suite
    /// author tagged several tokens. Returns `Ok(None)` when the tag is
    /// absent, and an error when the tag is declared at a position with no
    /// aligned token (the tag column is longer than the token list).
    pub fn argument_token(&self, tag: &str) -> Result<Option<&str>> {
        let Some(position) = self.bio.iter().position(|t| t == tag) else {
            return Ok(None);
        };
        match self.tokens.get(position) {
            Some(token) => Ok(Some(token.as_str())),
            None => Err(Error::annotation(format!(
                "tag {} declared at position {} but record has only {} tokens",
                tag,
                position,
                self.tokens.len()
            ))),
        }
    }
}

/// Raw model output for one sentence.
///
/// The shape is an external contract: a `verbs` array is required, each
/// entry carrying a free-text `description` that mentions the arguments the
/// model associated with that verb. Any additional fields the model returns
/// (tags, words, confidences) are captured verbatim and round-tripped when
/// the prediction list is persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Predicted verb frames, one per detected predicate.
    pub verbs: Vec<VerbFrame>,
    /// Fields outside the scored contract, preserved as-is.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Prediction {
    /// Build a prediction from verb frames, with no extra fields.
    #[must_use]
    pub fn from_verbs(verbs: Vec<VerbFrame>) -> Self {
        Self {
            verbs,
            extra: Map::new(),
        }
    }

    /// Build a prediction from plain description strings.
    #[must_use]
    pub fn from_descriptions<S: AsRef<str>>(descriptions: &[S]) -> Self {
        Self::from_verbs(descriptions.iter().map(VerbFrame::new).collect())
    }
}

/// One predicted verb frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerbFrame {
    /// Free-text rendering of the frame, e.g.
    /// `"[ARG0: Cats] [V: chase] [ARG1: mice]"`.
    pub description: String,
    /// Fields outside the scored contract, preserved as-is.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl VerbFrame {
    /// Build a frame from a description string.
    #[must_use]
    pub fn new(description: impl AsRef<str>) -> Self {
        Self {
            description: description.as_ref().to_string(),
            extra: Map::new(),
        }
    }
}
