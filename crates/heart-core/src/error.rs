use thiserror::Error;

/// Errors raised while building a [`crate::Simulation`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    #[error("sample step must be finite and positive, got {0}")]
    InvalidSampleStep(f32),
    #[error("parameter `{name}` out of range: {value}")]
    InvalidParam { name: &'static str, value: f64 },
}
