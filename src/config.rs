use crate::error::AppError;
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub learning_rate: f64,
    pub epochs: usize,
    pub test_fraction: f64,
    pub rng_seed: u64,
    pub decision_threshold: f64,
}

impl Config {
    pub fn load() -> Result<Self, AppError> {
        let learning_rate = env::var("LEARNING_RATE")
            .unwrap_or_else(|_| "0.1".to_string())
            .parse()
            .unwrap_or(0.1);

        let epochs = env::var("EPOCHS")
            .unwrap_or_else(|_| "150".to_string())
            .parse()
            .unwrap_or(150);

        let test_fraction = env::var("TEST_FRACTION")
            .unwrap_or_else(|_| "0.2".to_string())
            .parse()
            .unwrap_or(0.2);

        let rng_seed = env::var("RNG_SEED")
            .unwrap_or_else(|_| "42".to_string())
            .parse()
            .unwrap_or(42);

        let decision_threshold = env::var("DECISION_THRESHOLD")
            .unwrap_or_else(|_| "0.5".to_string())
            .parse()
            .unwrap_or(0.5);

        Ok(Config {
            learning_rate,
            epochs,
            test_fraction,
            rng_seed,
            decision_threshold,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            learning_rate: 0.1,
            epochs: 150,
            test_fraction: 0.2,
            rng_seed: 42,
            decision_threshold: 0.5,
        }
    }
}
