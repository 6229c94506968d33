use std::sync::Arc;

use tracing::{info, warn};

use ai_client::ChatModel;
use campusq_common::{extract_answer, CampusqError, PredictionRequest, PredictionResponse};
use search_client::WebSearcher;

const SYSTEM_PROMPT: &str = "You are an assistant answering questions about ITMO University.";

/// Substituted for the model's text when the completion call fails. Contains
/// no option label, so extraction on it always yields None.
pub const COMPLETION_FALLBACK: &str = "error contacting the completion service";

/// Result links attached to a prediction.
const MAX_SOURCES: u32 = 3;

/// Per-request orchestrator. Holds the process-wide model and searcher
/// handles; constructed once at startup and shared read-only across
/// requests.
pub struct Predictor {
    model: Arc<dyn ChatModel>,
    searcher: Arc<dyn WebSearcher>,
}

impl Predictor {
    pub fn new(model: Arc<dyn ChatModel>, searcher: Arc<dyn WebSearcher>) -> Self {
        Self { model, searcher }
    }

    /// Answer one prediction request.
    ///
    /// The completion and the link search run concurrently and are joined
    /// before extraction; each arm degrades to its own fallback value
    /// independently, so one failing provider never fails the request.
    pub async fn predict(
        &self,
        request: &PredictionRequest,
    ) -> Result<PredictionResponse, CampusqError> {
        info!(id = request.id, "processing prediction request");

        let (completion, search) = tokio::join!(
            self.model.complete(SYSTEM_PROMPT, &request.query),
            self.searcher.search(&request.query, MAX_SOURCES),
        );

        let reasoning = match completion {
            Ok(text) => text,
            Err(e) => {
                warn!(id = request.id, error = %e, "completion failed, using fallback text");
                COMPLETION_FALLBACK.to_string()
            }
        };

        let sources = match search {
            Ok(results) => results.into_iter().map(|r| r.url).collect(),
            Err(e) => {
                warn!(id = request.id, error = %e, "link search failed, returning no sources");
                Vec::new()
            }
        };

        let answer = extract_answer(&request.query, &reasoning);

        info!(
            id = request.id,
            answer = ?answer,
            sources = sources.len(),
            "prediction complete"
        );

        Ok(PredictionResponse {
            id: request.id,
            answer,
            reasoning,
            sources,
        })
    }
}
