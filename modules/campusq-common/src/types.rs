use serde::{Deserialize, Serialize};

/// Inbound prediction request. The query carries a question plus
/// newline-separated numbered options ("N. text"). Ids are caller-assigned
/// and not required to be unique.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PredictionRequest {
    pub query: String,
    pub id: i64,
}

/// Outbound prediction. `answer` is the matched option number, or None when
/// no option label was found in the model's text. `reasoning` is the raw
/// model response. `sources` preserves the search service's ranking order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub id: i64,
    pub answer: Option<u32>,
    pub reasoning: String,
    pub sources: Vec<String>,
}

/// One entry of the university news feed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewsItem {
    pub title: String,
    pub link: String,
}
