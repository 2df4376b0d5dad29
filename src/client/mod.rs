use crate::detector::DetectorId;
use crate::issue::Severity;
use tracing::{debug, error, info, warn};

/// Host environment capabilities used during detector selection
pub trait LintClient {
    /// Substitute a different implementation for a detector
    ///
    /// The returned id must be registered in the run's detector table. The
    /// default keeps the detector as is.
    fn replace_detector(&self, detector: &DetectorId) -> DetectorId {
        detector.clone()
    }

    /// Report a non-fatal problem, with the error that caused it if any
    fn log(&self, severity: Severity, error: Option<&anyhow::Error>, message: &str) {
        match (severity, error) {
            (Severity::Fatal | Severity::Error, Some(e)) => error!("{}: {:#}", message, e),
            (Severity::Fatal | Severity::Error, None) => error!("{}", message),
            (Severity::Warning, Some(e)) => warn!("{}: {:#}", message, e),
            (Severity::Warning, None) => warn!("{}", message),
            (Severity::Informational, _) => info!("{}", message),
            (Severity::Ignore, _) => debug!("{}", message),
        }
    }
}

/// Client that keeps every detector and logs through `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultClient;

impl LintClient for DefaultClient {}
