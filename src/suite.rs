//! Test-suite loading and validation.
//!
//! Each suite is a JSON file holding an array of [`SentenceRecord`]s that
//! probe one linguistic phenomenon. The seven suites shipped with the
//! project cover alternations that are known to trip up argument-structure
//! models:
//!
//! | Suite | Phenomenon |
//! |-------|------------|
//! | `active_passive.json` | Active/passive voice alternation |
//! | `clefts.json` | It-cleft constructions |
//! | `statement_question.json` | Declarative vs. interrogative form |
//! | `ellipsis.json` | Elided arguments |
//! | `polysemy.json` | Polysemous predicates |
//! | `conative.json` | Conative alternation ("kick" vs. "kick at") |
//! | `synonymy.json` | Synonymous predicate substitution |
//!
//! Loading is deliberately thin: the file is parsed verbatim, in order, with
//! no schema repair. Malformed annotations surface later, when the scorer
//! looks up a tagged token. [`validate_suite`] exists for authors who want
//! those problems reported up front; it never changes scoring semantics.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::record::{SentenceRecord, AGENT_TAG, PATIENT_TAG};
use crate::{Error, Result};

/// The seven suite file names evaluated by the default sweep.
pub const SUITE_FILES: [&str; 7] = [
    "active_passive.json",
    "clefts.json",
    "statement_question.json",
    "ellipsis.json",
    "polysemy.json",
    "conative.json",
    "synonymy.json",
];

/// Load a suite file into memory.
///
/// Returns the records exactly as they appear in the file: same order, no
/// filtering, no normalization. Re-loading the same file yields identical
/// output. A missing file or invalid JSON is an error.
pub fn load_suite(path: impl AsRef<Path>) -> Result<Vec<SentenceRecord>> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|e| Error::suite(format!("failed to open {}: {}", path.display(), e)))?;
    serde_json::from_reader(BufReader::new(file))
        .map_err(|e| Error::suite(format!("failed to parse {}: {}", path.display(), e)))
}

/// Report annotation problems in a loaded suite.
///
/// Checks each record for a token/tag length mismatch, duplicate argument
/// tags (only the first occurrence is ever scored), and records with
/// neither argument annotated (which can never pass). Diagnostics only.
#[must_use]
pub fn validate_suite(records: &[SentenceRecord]) -> Vec<String> {
    let mut problems = Vec::new();

    for (i, record) in records.iter().enumerate() {
        if record.tokens.len() != record.bio.len() {
            problems.push(format!(
                "Record {}: token count ({}) != tag count ({})",
                i,
                record.tokens.len(),
                record.bio.len()
            ));
        }

        for tag in [AGENT_TAG, PATIENT_TAG] {
            let occurrences = record.bio.iter().filter(|t| *t == tag).count();
            if occurrences > 1 {
                problems.push(format!(
                    "Record {}: {} tagged {} times, only the first is scored",
                    i, tag, occurrences
                ));
            }
        }

        let has_any = record
            .bio
            .iter()
            .any(|t| t == AGENT_TAG || t == PATIENT_TAG);
        if !has_any {
            problems.push(format!(
                "Record {}: neither {} nor {} annotated, record can never pass",
                i, AGENT_TAG, PATIENT_TAG
            ));
        }
    }

    problems
}
