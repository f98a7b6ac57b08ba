use crate::features::UrlFeatures;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Label {
    Safe,
    Malicious,
}

impl Label {
    /// Regression target the model trains against.
    pub fn target(self) -> f64 {
        match self {
            Label::Safe => 0.0,
            Label::Malicious => 1.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabeledUrl {
    pub url: String,
    pub label: Label,
}

/// One scored URL, with the diagnostic features behind the decision.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Verdict {
    pub decision_id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub url: String,
    pub label: Label,
    pub probability: f64,
    pub reasons: Vec<String>,
    pub features: UrlFeatures,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainReport {
    pub total_samples: usize,
    pub train_size: usize,
    pub test_size: usize,
    pub holdout_accuracy: f64,
    pub baseline_accuracy: f64,
}
