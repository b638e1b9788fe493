//! Effect sink errors
//!
//! The simulation itself cannot fail. The only fallible calls are the
//! best-effort win sound and vibration, and those errors are logged by the
//! controller and never reach the match.

/// Failure to deliver a win effect
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EffectError {
    /// The device or browser lacks the feature (no AudioContext, no Vibration API)
    #[error("{0} is not available")]
    Unsupported(&'static str),
    /// The platform call was made but failed
    #[error("playback failed: {0}")]
    Playback(String),
}
