use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid detection pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Model training error: {0}")]
    ModelTraining(String),
}
