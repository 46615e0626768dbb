use thiserror::Error;

#[derive(Debug, Error)]
pub enum AprioriError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid threshold {value:?}: expected a number in [0, 1]")]
    InvalidThreshold { value: String },
}

pub type Result<T> = std::result::Result<T, AprioriError>;

/// Parses a support/confidence threshold, enforcing the CLI contract of
/// `[0, 1]`. The mining core itself accepts any threshold (≤ 0 admits
/// everything); the range check belongs to the outer surface.
pub fn parse_threshold(s: &str) -> Result<f64> {
    let value: f64 = s
        .trim()
        .parse()
        .map_err(|_| AprioriError::InvalidThreshold { value: s.to_owned() })?;
    if !(0.0..=1.0).contains(&value) {
        return Err(AprioriError::InvalidThreshold { value: s.to_owned() });
    }
    Ok(value)
}
