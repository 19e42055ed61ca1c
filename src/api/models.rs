use serde::{Deserialize, Serialize};

use crate::data_models::Source;

fn default_max_results() -> u32 {
    6
}

#[derive(Debug, Deserialize)]
pub struct AskRequest {
    pub query: String,
    #[serde(rename = "freshOnly", default)]
    pub fresh_only: bool,
    #[serde(rename = "officialOnly", default)]
    pub official_only: bool,
    #[serde(rename = "maxResults", default = "default_max_results")]
    pub max_results: u32,
}

#[derive(Debug, Serialize)]
pub struct AskResponse {
    pub answer: String,
    pub sources: Vec<Source>,
}

#[derive(Debug, Deserialize)]
pub struct PlanRequest {
    pub days: u32,
    pub month: String,
    pub party: String,
    #[serde(rename = "maxDrive")]
    pub max_drive: f64,
    pub interests: String,
    pub budget: String,
}

#[derive(Debug, Serialize)]
pub struct PlanResponse {
    pub answer: String,
}
