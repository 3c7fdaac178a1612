//! Progress reporting to the tracing log.

use motionmanga_core::Stage;
use motionmanga_interface::ProgressReporter;
use tracing::info;

/// Reports stage boundaries and status lines as `info` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl ProgressReporter for TracingReporter {
    fn stage(&self, stage: Stage) {
        info!(stage = ?stage, "{}", stage);
    }

    fn status(&self, message: &str) {
        info!("{}", message);
    }
}
