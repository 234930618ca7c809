/*!
 * Signal Configuration
 *
 * Policy tables for registry construction and trap validation
 */

use crate::core::limits::{
    DEFAULT_ALIASES, PREFERRED_NAMES, RESERVED_SIGNAL, RESERVED_SIGNAL_ENV, SIGNAL_PREFIX,
};
use serde::{Deserialize, Serialize};

/// Registry construction policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// `(alias, counterpart)` pairs; a missing alias copies its counterpart's number
    pub aliases: Vec<(String, String)>,
    /// Names pinned as the preferred name for their number, applied in order
    pub preferred: Vec<String>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            aliases: DEFAULT_ALIASES
                .iter()
                .map(|(alias, counterpart)| (alias.to_string(), counterpart.to_string()))
                .collect(),
            preferred: PREFERRED_NAMES.iter().map(|name| name.to_string()).collect(),
        }
    }
}

/// Trap validation policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrapConfig {
    /// Preferred name of the signal that is never user-trappable
    pub reserved_signal: String,
}

impl Default for TrapConfig {
    fn default() -> Self {
        Self {
            reserved_signal: RESERVED_SIGNAL.to_string(),
        }
    }
}

impl TrapConfig {
    /// Defaults, with the reserved signal overridable via `SIGTRAP_RESERVED_SIGNAL`
    pub fn from_env() -> Self {
        match std::env::var(RESERVED_SIGNAL_ENV) {
            Ok(name) if !name.trim().is_empty() => Self {
                reserved_signal: name,
            }
            .normalized(),
            _ => Self::default(),
        }
    }

    /// Reserved name in registry form: trimmed, without the `SIG` prefix
    pub fn normalized(self) -> Self {
        let name = self.reserved_signal.trim();
        Self {
            reserved_signal: name.strip_prefix(SIGNAL_PREFIX).unwrap_or(name).to_string(),
        }
    }
}
