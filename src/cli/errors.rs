use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Missing required feature: {feature}. Rebuild with `--features {feature}` or pass --no-display")]
    MissingFeature { feature: &'static str },

    #[error(transparent)]
    Imgprep(#[from] imgprep::Error),
}
