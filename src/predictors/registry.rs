//! Pretrained model registry.
//!
//! The sweep evaluates two published pretrained archives. Each variant
//! carries its archive location, a display name, a stable slug used in
//! inference-server routes, and the numeric prefix used when naming
//! prediction dumps. Iterating [`ModelId::all`] keeps the evaluation loop
//! uniform over variants instead of branching on a position.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Pretrained model variants under evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ModelId {
    /// BERT-based semantic role labeling model.
    SrlBert,
    /// Open information extraction model.
    OpenIe,
}

impl ModelId {
    /// All variants, in sweep order.
    #[must_use]
    pub fn all() -> [ModelId; 2] {
        [ModelId::SrlBert, ModelId::OpenIe]
    }

    /// Published archive location for this variant.
    #[must_use]
    pub fn archive_url(&self) -> &'static str {
        match self {
            ModelId::SrlBert => {
                "https://storage.googleapis.com/allennlp-public-models/structured-prediction-srl-bert.2020.12.15.tar.gz"
            }
            ModelId::OpenIe => {
                "https://storage.googleapis.com/allennlp-public-models/openie-model.2020.03.26.tar.gz"
            }
        }
    }

    /// Human-readable name for display.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            ModelId::SrlBert => "structured-prediction-srl-bert",
            ModelId::OpenIe => "openie",
        }
    }

    /// Stable identifier used in inference-server routes.
    #[must_use]
    pub fn slug(&self) -> &'static str {
        match self {
            ModelId::SrlBert => "srl-bert",
            ModelId::OpenIe => "openie",
        }
    }

    /// Numeric prefix for prediction dump file names.
    ///
    /// Dumps are written as `{index}_{suite_file_name}`, so downstream
    /// tooling that matched on the historical numbering keeps working.
    #[must_use]
    pub fn index(&self) -> usize {
        match self {
            ModelId::SrlBert => 0,
            ModelId::OpenIe => 1,
        }
    }
}

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
