//! Inference over an HTTP model server.
//!
//! The pretrained archives (see [`ModelId::archive_url`]) run behind a
//! model server that loads each archive once and exposes one prediction
//! route per variant. This backend posts `{"sentence": "..."}` to
//! `{endpoint}/predict/{slug}` and parses the JSON body as a
//! [`Prediction`].
//!
//! Construction probes the server. Loading an archive is a heavyweight,
//! fallible operation, so an unreachable or still-loading server fails the
//! run up front rather than partway through a sweep. Prediction calls block
//! the calling thread for the duration of full neural inference; the read
//! timeout is set accordingly.

use std::time::Duration;

use serde::Serialize;

use crate::predictors::registry::ModelId;
use crate::record::Prediction;
use crate::{Error, Predictor, Result};

const PROBE_TIMEOUT: Duration = Duration::from_secs(10);
const PREDICT_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Serialize)]
struct InferenceRequest<'a> {
    sentence: &'a str,
}

/// Predictor backed by a remote inference server.
pub struct HttpPredictor {
    agent: ureq::Agent,
    url: String,
    model: ModelId,
}

impl HttpPredictor {
    /// Connect to a model server and verify it is reachable.
    ///
    /// `endpoint` is the server base URL, e.g. `http://127.0.0.1:8000`.
    pub fn connect(endpoint: &str, model: ModelId) -> Result<Self> {
        let base = endpoint.trim_end_matches('/');
        let url = format!("{}/predict/{}", base, model.slug());
        let agent = ureq::AgentBuilder::new().build();

        agent
            .get(base)
            .timeout(PROBE_TIMEOUT)
            .call()
            .map_err(|e| {
                Error::model_init(format!(
                    "model server unreachable at {}: {}. \
                     Start the inference server with the {} archive loaded \
                     ({}) and try again.",
                    base,
                    e,
                    model.name(),
                    model.archive_url()
                ))
            })?;

        log::info!("connected to {} for {}", base, model.name());
        Ok(Self { agent, url, model })
    }
}

impl Predictor for HttpPredictor {
    fn predict(&self, sentence: &str) -> Result<Prediction> {
        log::debug!("{} <- {:?}", self.model.slug(), sentence);

        let response = self
            .agent
            .post(&self.url)
            .timeout(PREDICT_TIMEOUT)
            .send_json(InferenceRequest { sentence })
            .map_err(|e| {
                Error::inference(format!(
                    "{} failed on {:?}: {}",
                    self.model.name(),
                    sentence,
                    e
                ))
            })?;

        response.into_json().map_err(|e| {
            Error::inference(format!(
                "malformed prediction from {}: {}",
                self.url, e
            ))
        })
    }

    fn name(&self) -> &str {
        self.model.name()
    }
}
