// Rule-based learning assistant: module recommendations, job suggestions,
// keyword chat and a static capability descriptor. Stateless per call;
// randomness is passed in by the caller.

pub mod chat;
pub mod handlers;
pub mod jobs;
pub mod recommend;
pub mod responses;
pub mod tags;

use std::collections::BTreeMap;

use serde::Serialize;

use crate::assistant::responses::{ASSISTANT_VERSION, CAPABILITY_ENDPOINTS, CAPABILITY_FEATURES};

#[derive(Debug, Clone, Serialize)]
pub struct Capabilities {
    pub features: Vec<&'static str>,
    pub endpoints: BTreeMap<&'static str, &'static str>,
    pub version: &'static str,
}

pub fn capabilities() -> Capabilities {
    Capabilities {
        features: CAPABILITY_FEATURES.to_vec(),
        endpoints: CAPABILITY_ENDPOINTS.iter().copied().collect(),
        version: ASSISTANT_VERSION,
    }
}
