/*!
 * Host Signal Arming (Unix)
 * Installs dispositions with sigaction; caught signals are recorded as
 * pending for the external dispatcher
 */

use crate::core::limits::SIGNAL_PREFIX;
use crate::core::types::SignalNumber;
use crate::signals::core::traits::SignalArming;
use crate::signals::core::types::{ArmAction, ArmStatus};
use nix::sys::signal::{sigaction, SaFlags, SigAction, SigHandler, SigSet, Signal};
use std::ffi::c_int;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, warn};

/// Bitset of caught signal numbers awaiting dispatch
static PENDING: AtomicU64 = AtomicU64::new(0);

extern "C" fn record_signal(signo: c_int) {
    // Async-signal-safe: a single atomic OR
    if (0..64).contains(&signo) {
        PENDING.fetch_or(1u64 << signo, Ordering::SeqCst);
    }
}

/// Arming facility backed by the host's `sigaction`
#[derive(Debug, Clone, Copy, Default)]
pub struct HostArming;

impl HostArming {
    pub fn new() -> Self {
        Self
    }

    /// Drain caught signal numbers in ascending order
    pub fn take_pending(&self) -> Vec<SignalNumber> {
        let bits = PENDING.swap(0, Ordering::SeqCst);
        (0..64)
            .filter(|signo| bits & (1u64 << signo) != 0)
            .collect()
    }

    fn host_signal(name: &str) -> Option<Signal> {
        Signal::from_str(&format!("{}{}", SIGNAL_PREFIX, name)).ok()
    }
}

impl SignalArming for HostArming {
    fn arm(&self, name: &str, action: ArmAction) -> ArmStatus {
        let Some(signal) = Self::host_signal(name) else {
            debug!(signal = name, "Signal not representable on this host");
            return ArmStatus::Unsupported;
        };

        let handler = match action {
            ArmAction::Default => SigHandler::SigDfl,
            // Without a callback there is nothing to run; drop the signal
            ArmAction::Ignore | ArmAction::Clear => SigHandler::SigIgn,
            ArmAction::Catch(_) => SigHandler::Handler(record_signal),
        };
        let act = SigAction::new(handler, SaFlags::SA_RESTART, SigSet::empty());

        // SAFETY: `record_signal` only performs an atomic store, which is
        // async-signal-safe; SigDfl and SigIgn install no code at all.
        match unsafe { sigaction(signal, &act) } {
            Ok(_) => {
                debug!(signal = name, ?action, "Armed host signal");
                ArmStatus::Armed
            }
            Err(errno) => {
                warn!(signal = name, ?action, error = %errno, "Host rejected signal disposition");
                ArmStatus::Unsupported
            }
        }
    }
}
