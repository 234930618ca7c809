/*!
 * Platform Signal Table
 * Raw (name, number) input supplied by the host environment
 */

use crate::core::errors::RegistryResult;
use crate::core::limits::TABLE_PATH_ENV;
use crate::core::types::SignalNumber;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Ordered platform signal data plus the platform's signal-count bound
///
/// Names may carry the `SIG` prefix; it is stripped during registry build.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlatformSignalTable {
    pub signals: Vec<(String, SignalNumber)>,
    pub nsig: SignalNumber,
}

impl PlatformSignalTable {
    pub fn new<I, S>(signals: I, nsig: SignalNumber) -> Self
    where
        I: IntoIterator<Item = (S, SignalNumber)>,
        S: Into<String>,
    {
        Self {
            signals: signals
                .into_iter()
                .map(|(name, number)| (name.into(), number))
                .collect(),
            nsig,
        }
    }

    /// Parse a table from JSON: `{"signals": [["INT", 2], ...], "nsig": 65}`
    pub fn from_json(json: &str) -> RegistryResult<Self> {
        let table: Self = serde_json::from_str(json)?;
        debug!(entries = table.signals.len(), nsig = table.nsig, "Parsed platform signal table");
        Ok(table)
    }

    /// Read a JSON table from disk
    pub fn from_path(path: impl AsRef<Path>) -> RegistryResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        info!(path = %path.display(), "Loading platform signal table");
        Self::from_json(&json)
    }

    /// Table named by `SIGTRAP_TABLE`, or the host table when unset
    pub fn from_env() -> RegistryResult<Self> {
        match std::env::var(TABLE_PATH_ENV) {
            Ok(path) if !path.is_empty() => Self::from_path(path),
            _ => Ok(Self::host()),
        }
    }

    /// Signals known to the host, enumerated through nix
    ///
    /// `nsig` is derived as the largest named number plus one, not read from
    /// the platform's `NSIG`. Unnamed real-time signals fall outside it.
    #[cfg(unix)]
    pub fn host() -> Self {
        use crate::core::limits::SIGNAL_PREFIX;
        use nix::sys::signal::Signal;

        let signals: Vec<(String, SignalNumber)> = Signal::iterator()
            .map(|signal| {
                let name = signal.as_str();
                let name = name.strip_prefix(SIGNAL_PREFIX).unwrap_or(name);
                (name.to_string(), signal as SignalNumber)
            })
            .collect();
        let nsig = signals.iter().map(|(_, number)| *number).max().unwrap_or(0) + 1;

        Self { signals, nsig }
    }

    /// No signals are known on this platform
    #[cfg(not(unix))]
    pub fn host() -> Self {
        Self {
            signals: Vec::new(),
            nsig: 1,
        }
    }

    pub fn len(&self) -> usize {
        self.signals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signals.is_empty()
    }
}
