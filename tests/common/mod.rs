/*!
 * Shared test fixtures
 */

#![allow(dead_code)]

use parking_lot::Mutex;
use sigtrap::signals::{ArmAction, ArmStatus, SignalArming};
use sigtrap::{PlatformSignalTable, RegistryConfig, SignalNumber, SignalRegistry, Terminator};
use std::collections::HashSet;
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::Arc;

/// Linux x86_64 signal numbers
pub const LINUX_SIGNALS: &[(&str, SignalNumber)] = &[
    ("HUP", 1),
    ("INT", 2),
    ("QUIT", 3),
    ("ILL", 4),
    ("TRAP", 5),
    ("ABRT", 6),
    ("IOT", 6),
    ("BUS", 7),
    ("FPE", 8),
    ("KILL", 9),
    ("USR1", 10),
    ("SEGV", 11),
    ("USR2", 12),
    ("PIPE", 13),
    ("ALRM", 14),
    ("TERM", 15),
    ("STKFLT", 16),
    ("CHLD", 17),
    ("CONT", 18),
    ("STOP", 19),
    ("TSTP", 20),
    ("TTIN", 21),
    ("TTOU", 22),
    ("URG", 23),
    ("XCPU", 24),
    ("XFSZ", 25),
    ("VTALRM", 26),
    ("PROF", 27),
    ("WINCH", 28),
    ("IO", 29),
    ("POLL", 29),
    ("PWR", 30),
    ("SYS", 31),
];

pub fn linux_table() -> PlatformSignalTable {
    PlatformSignalTable::new(LINUX_SIGNALS.iter().copied(), 65)
}

pub fn linux_registry() -> Arc<SignalRegistry> {
    Arc::new(SignalRegistry::build(&linux_table(), &RegistryConfig::default()).unwrap())
}

/// Arming facility that records every call
#[derive(Default)]
pub struct RecordingArming {
    calls: Mutex<Vec<(String, ArmAction)>>,
    unsupported: HashSet<String>,
}

impl RecordingArming {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report `Unsupported` for every request on these names
    pub fn unsupported(names: &[&str]) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            unsupported: names.iter().map(|name| name.to_string()).collect(),
        }
    }

    pub fn calls(&self) -> Vec<(String, ArmAction)> {
        self.calls.lock().clone()
    }

    pub fn last(&self) -> Option<(String, ArmAction)> {
        self.calls.lock().last().cloned()
    }
}

impl SignalArming for RecordingArming {
    fn arm(&self, name: &str, action: ArmAction) -> ArmStatus {
        self.calls.lock().push((name.to_string(), action));
        if self.unsupported.contains(name) {
            ArmStatus::Unsupported
        } else {
            ArmStatus::Armed
        }
    }
}

/// Terminator that records the requested status instead of exiting
#[derive(Default)]
pub struct RecordingTerminator {
    status: AtomicI32,
}

impl RecordingTerminator {
    pub fn new() -> Self {
        Self {
            status: AtomicI32::new(-1),
        }
    }

    /// Last requested status, `-1` if never called
    pub fn status(&self) -> i32 {
        self.status.load(Ordering::SeqCst)
    }
}

impl Terminator for RecordingTerminator {
    fn terminate(&self, status: i32) {
        self.status.store(status, Ordering::SeqCst);
    }
}
