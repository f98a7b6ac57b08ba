use crate::catalog::{BrandCatalog, KeywordCatalog};
use crate::config::Config;
use crate::dataset::synthetic_dataset;
use crate::error::AppError;
use crate::features::{FeatureExtractor, UrlFeatures};
use crate::model::{LogisticModel, TrainOptions};
use crate::types::{Label, TrainReport, Verdict};
use chrono::Utc;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::{debug, info};
use uuid::Uuid;

/// Entropy above this is called out as a scan reason; it does not affect
/// the model's decision.
const HIGH_ENTROPY_NOTE: f64 = 4.5;

pub struct ScanEngine {
    extractor: FeatureExtractor,
    model: LogisticModel,
    decision_threshold: f64,
    report: TrainReport,
}

impl ScanEngine {
    /// Build the extractor from the default catalogs, train the model on
    /// the synthetic dataset and keep the held-out evaluation around.
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let extractor = FeatureExtractor::new(BrandCatalog::default(), KeywordCatalog::default())?;

        let data = synthetic_dataset();
        let features: Vec<UrlFeatures> = data.iter().map(|d| extractor.extract(&d.url)).collect();
        let targets: Vec<f64> = data.iter().map(|d| d.label.target()).collect();

        let mut order: Vec<usize> = (0..data.len()).collect();
        let mut rng = StdRng::seed_from_u64(config.rng_seed);
        order.shuffle(&mut rng);

        let test_size = ((data.len() as f64) * config.test_fraction).round() as usize;
        let (test_idx, train_idx) = order.split_at(test_size);

        let train_features: Vec<UrlFeatures> =
            train_idx.iter().map(|&i| features[i].clone()).collect();
        let train_targets: Vec<f64> = train_idx.iter().map(|&i| targets[i]).collect();
        let test_features: Vec<UrlFeatures> =
            test_idx.iter().map(|&i| features[i].clone()).collect();
        let test_targets: Vec<f64> = test_idx.iter().map(|&i| targets[i]).collect();

        let mut model = LogisticModel::new();
        model.fit(
            &train_features,
            &train_targets,
            &TrainOptions {
                learning_rate: config.learning_rate,
                epochs: config.epochs,
                rng_seed: config.rng_seed,
            },
        )?;

        let holdout_accuracy =
            model.accuracy(&test_features, &test_targets, config.decision_threshold);
        let baseline_accuracy = majority_baseline(&test_targets);

        let report = TrainReport {
            total_samples: data.len(),
            train_size: train_idx.len(),
            test_size: test_idx.len(),
            holdout_accuracy,
            baseline_accuracy,
        };

        info!(
            "Model trained on {} samples: holdout accuracy {:.2}% (majority baseline {:.2}%)",
            report.train_size,
            holdout_accuracy * 100.0,
            baseline_accuracy * 100.0,
        );
        for (name, weight) in model.feature_importance().into_iter().take(3) {
            debug!("top feature {}: |weight| {:.3}", name, weight);
        }

        Ok(Self {
            extractor,
            model,
            decision_threshold: config.decision_threshold,
            report,
        })
    }

    pub fn report(&self) -> &TrainReport {
        &self.report
    }

    /// Score one URL and explain the decision.
    pub fn scan(&self, url: &str) -> Verdict {
        let features = self.extractor.extract(url);
        let probability = self.model.predict_probability(&features);
        let label = if probability >= self.decision_threshold {
            Label::Malicious
        } else {
            Label::Safe
        };

        let verdict = Verdict {
            decision_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            url: url.to_string(),
            label,
            probability,
            reasons: self.collect_reasons(&features),
            features,
        };

        debug!(
            "decision {}: {}",
            verdict.decision_id,
            serde_json::to_string(&verdict).unwrap_or_default()
        );
        verdict
    }

    fn collect_reasons(&self, features: &UrlFeatures) -> Vec<String> {
        let mut reasons = Vec::new();
        if features.brand_impersonation > 0.5 {
            reasons.push("brand name used outside its official domains".to_string());
        }
        if features.has_ip > 0.5 {
            reasons.push("raw IPv4 literal in URL".to_string());
        }
        if features.suspicious_keywords > 0.0 {
            reasons.push(format!(
                "{} phishing keyword(s) present",
                features.suspicious_keywords as u64
            ));
        }
        if features.entropy > HIGH_ENTROPY_NOTE {
            reasons.push(format!("high entropy ({:.2} bits)", features.entropy));
        }
        reasons
    }
}

fn majority_baseline(targets: &[f64]) -> f64 {
    if targets.is_empty() {
        return 0.0;
    }
    let positives = targets.iter().filter(|&&t| t >= 0.5).count();
    let majority = positives.max(targets.len() - positives);
    majority as f64 / targets.len() as f64
}
