/*!
 * Signal Traits
 * Seams to the external arming and termination facilities
 */

use super::types::{ArmAction, ArmStatus};
use crate::core::types::ExitStatus;

/// External signal-arming facility
///
/// Called after the handler table has committed, for every signal except
/// the virtual `EXIT`. Must not block.
#[cfg_attr(test, mockall::automock)]
pub trait SignalArming: Send + Sync {
    /// Tell the host which disposition to use for `name`
    fn arm(&self, name: &str, action: ArmAction) -> ArmStatus;
}

/// External termination facility, invoked by the built-in exit callback
#[cfg_attr(test, mockall::automock)]
pub trait Terminator: Send + Sync {
    fn terminate(&self, status: ExitStatus);
}

/// Terminates the current process
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessExit;

impl Terminator for ProcessExit {
    fn terminate(&self, status: ExitStatus) {
        std::process::exit(status)
    }
}
