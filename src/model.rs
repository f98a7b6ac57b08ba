use crate::error::AppError;
use crate::features::{UrlFeatures, FEATURE_NAMES};
use crate::types::Label;
use nalgebra::DVector;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct TrainOptions {
    pub learning_rate: f64,
    pub epochs: usize,
    pub rng_seed: u64,
}

/// Logistic regression over the fixed feature schema.
///
/// The schema-drift risk of dict-shaped features is closed by
/// construction here: both `fit` and `predict_probability` take
/// `UrlFeatures`, whose field order is declared once in `FEATURE_NAMES`.
/// Per-feature standardization is computed at fit time and stored in the
/// model, so training and inference see identical transforms.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogisticModel {
    intercept: f64,
    weights: Vec<f64>,
    feature_order: Vec<String>,
    feature_means: Vec<f64>,
    feature_stds: Vec<f64>,
    training_samples: u64,
}

impl LogisticModel {
    pub fn new() -> Self {
        Self {
            intercept: 0.0,
            weights: vec![0.0; FEATURE_NAMES.len()],
            feature_order: FEATURE_NAMES.iter().map(|n| n.to_string()).collect(),
            feature_means: vec![0.0; FEATURE_NAMES.len()],
            feature_stds: vec![1.0; FEATURE_NAMES.len()],
            training_samples: 0,
        }
    }

    /// Stochastic gradient descent over the full set, one pass per epoch,
    /// shuffled with the seeded RNG so runs are reproducible.
    pub fn fit(
        &mut self,
        features: &[UrlFeatures],
        targets: &[f64],
        opts: &TrainOptions,
    ) -> Result<(), AppError> {
        if features.is_empty() {
            return Err(AppError::ModelTraining("empty training set".to_string()));
        }
        if features.len() != targets.len() {
            return Err(AppError::ModelTraining(format!(
                "feature/label length mismatch: {} vs {}",
                features.len(),
                targets.len()
            )));
        }

        self.fit_scaler(features);
        let inputs: Vec<DVector<f64>> = features.iter().map(|f| self.standardized(f)).collect();

        let mut weights: DVector<f64> = DVector::zeros(FEATURE_NAMES.len());
        let mut intercept = 0.0;
        let mut order: Vec<usize> = (0..inputs.len()).collect();
        let mut rng = StdRng::seed_from_u64(opts.rng_seed);

        for epoch in 0..opts.epochs {
            order.shuffle(&mut rng);
            let mut epoch_error = 0.0;
            for &i in &order {
                let p = sigmoid(weights.dot(&inputs[i]) + intercept);
                let err = targets[i] - p;
                weights += opts.learning_rate * err * &inputs[i];
                intercept += opts.learning_rate * err;
                epoch_error += err * err;
            }
            if epoch % 50 == 0 {
                debug!(
                    "epoch {}: mean squared error {:.5}",
                    epoch,
                    epoch_error / inputs.len() as f64
                );
            }
        }

        self.weights = weights.iter().copied().collect();
        self.intercept = intercept;
        self.training_samples = inputs.len() as u64;
        Ok(())
    }

    pub fn predict_probability(&self, features: &UrlFeatures) -> f64 {
        let x = self.standardized(features);
        let w = DVector::from_column_slice(&self.weights);
        sigmoid(w.dot(&x) + self.intercept)
    }

    pub fn predict(&self, features: &UrlFeatures, threshold: f64) -> Label {
        if self.predict_probability(features) >= threshold {
            Label::Malicious
        } else {
            Label::Safe
        }
    }

    /// Fraction of samples whose thresholded prediction matches the target.
    pub fn accuracy(&self, features: &[UrlFeatures], targets: &[f64], threshold: f64) -> f64 {
        if features.is_empty() {
            return 0.0;
        }
        let correct = features
            .iter()
            .zip(targets)
            .filter(|(f, &t)| (self.predict_probability(f) >= threshold) == (t >= 0.5))
            .count();
        correct as f64 / features.len() as f64
    }

    /// Feature names ranked by absolute weight.
    pub fn feature_importance(&self) -> Vec<(String, f64)> {
        let mut importance: Vec<(String, f64)> = self
            .feature_order
            .iter()
            .zip(&self.weights)
            .map(|(name, w)| (name.clone(), w.abs()))
            .collect();
        importance.sort_by(|a, b| b.1.total_cmp(&a.1));
        importance
    }

    pub fn training_samples(&self) -> u64 {
        self.training_samples
    }

    fn fit_scaler(&mut self, features: &[UrlFeatures]) {
        let n = features.len() as f64;
        let dim = FEATURE_NAMES.len();

        let mut means = vec![0.0; dim];
        for f in features {
            for (m, v) in means.iter_mut().zip(f.to_vector()) {
                *m += v;
            }
        }
        for m in &mut means {
            *m /= n;
        }

        let mut stds = vec![0.0; dim];
        for f in features {
            for ((s, v), m) in stds.iter_mut().zip(f.to_vector()).zip(&means) {
                *s += (v - m) * (v - m);
            }
        }
        for s in &mut stds {
            *s = (*s / n).sqrt();
            // Constant features pass through unscaled.
            if *s < 1e-9 {
                *s = 1.0;
            }
        }

        self.feature_means = means;
        self.feature_stds = stds;
    }

    fn standardized(&self, features: &UrlFeatures) -> DVector<f64> {
        let raw = features.to_vector();
        DVector::from_iterator(
            raw.len(),
            raw.iter()
                .zip(&self.feature_means)
                .zip(&self.feature_stds)
                .map(|((v, m), s)| (v - m) / s),
        )
    }
}

impl Default for LogisticModel {
    fn default() -> Self {
        Self::new()
    }
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}
