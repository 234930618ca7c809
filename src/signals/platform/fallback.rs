/*!
 * Fallback Signal Arming
 * For platforms without POSIX signal dispositions
 */

use crate::signals::core::traits::SignalArming;
use crate::signals::core::types::{ArmAction, ArmStatus};
use tracing::debug;

/// Arming facility that records intent only
///
/// No host disposition exists, so `Default` cannot be represented and is
/// reported as unsupported; everything else is accepted.
#[derive(Debug, Clone, Copy, Default)]
pub struct DetachedArming;

impl DetachedArming {
    pub fn new() -> Self {
        Self
    }
}

impl SignalArming for DetachedArming {
    fn arm(&self, name: &str, action: ArmAction) -> ArmStatus {
        debug!(signal = name, ?action, "Detached arming (no host signals)");
        match action {
            ArmAction::Default => ArmStatus::Unsupported,
            _ => ArmStatus::Armed,
        }
    }
}
