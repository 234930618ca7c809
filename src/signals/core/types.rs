/*!
 * Signal Types
 * Signal specs, trap commands, stored handler entries and returned dispositions
 */

use crate::core::errors::TrapError;
use crate::core::types::{HandlerId, SignalNumber};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Signal named by the caller: a symbolic name or a raw number
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SignalSpec {
    /// Symbolic name, with or without the `SIG` prefix
    Name(String),
    /// Raw platform number
    Number(SignalNumber),
}

impl From<&str> for SignalSpec {
    fn from(name: &str) -> Self {
        SignalSpec::Name(name.to_string())
    }
}

impl From<String> for SignalSpec {
    fn from(name: String) -> Self {
        SignalSpec::Name(name)
    }
}

impl From<SignalNumber> for SignalSpec {
    fn from(number: SignalNumber) -> Self {
        SignalSpec::Number(number)
    }
}

impl fmt::Display for SignalSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignalSpec::Name(name) => f.write_str(name),
            SignalSpec::Number(number) => write!(f, "{}", number),
        }
    }
}

/// Disposition requested by a trap call
///
/// Decided once at the API boundary; keywords are parsed with [`FromStr`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrapCommand {
    /// Restore the default disposition and drop any table entry
    Default,
    /// Ignore the signal
    Ignore,
    /// Clear any active callback without restoring the default
    Unset,
    /// Install the built-in callback that terminates the process
    Exit,
    /// Install a registered callback
    Handler(HandlerId),
}

impl FromStr for TrapCommand {
    type Err = TrapError;

    fn from_str(keyword: &str) -> Result<Self, Self::Err> {
        match keyword {
            "DEFAULT" | "SIG_DFL" => Ok(TrapCommand::Default),
            "IGNORE" | "SIG_IGN" => Ok(TrapCommand::Ignore),
            "EXIT" => Ok(TrapCommand::Exit),
            other => Err(TrapError::InvalidHandler(format!(
                "Unsupported command '{}'",
                other
            ))),
        }
    }
}

impl From<HandlerId> for TrapCommand {
    fn from(id: HandlerId) -> Self {
        TrapCommand::Handler(id)
    }
}

/// Entry stored in the handler table
///
/// A slot holding no entry at all is distinct from a stored `Unset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandlerEntry {
    Default,
    Ignore,
    Unset,
    Callback(HandlerId),
}

/// Disposition handed back by a trap call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Disposition {
    /// No explicit handler was registered (or one stored `Default`)
    Default,
    Ignore,
    Unset,
    Callback(HandlerId),
    /// The platform cannot represent a default disposition for this signal
    SystemDefault,
}

impl Disposition {
    /// Disposition reported for a slot's previous content
    pub fn from_previous(previous: Option<HandlerEntry>) -> Self {
        previous.map(Disposition::from).unwrap_or(Disposition::Default)
    }

    /// Callback token, if this disposition names one
    pub fn handler_id(&self) -> Option<HandlerId> {
        match self {
            Disposition::Callback(id) => Some(*id),
            _ => None,
        }
    }
}

impl From<HandlerEntry> for Disposition {
    fn from(entry: HandlerEntry) -> Self {
        match entry {
            HandlerEntry::Default => Disposition::Default,
            HandlerEntry::Ignore => Disposition::Ignore,
            HandlerEntry::Unset => Disposition::Unset,
            HandlerEntry::Callback(id) => Disposition::Callback(id),
        }
    }
}

impl fmt::Display for Disposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Disposition::Default => f.write_str("DEFAULT"),
            Disposition::Ignore => f.write_str("IGNORE"),
            Disposition::Unset => f.write_str("nil"),
            Disposition::Callback(id) => write!(f, "handler#{}", id),
            Disposition::SystemDefault => f.write_str("SYSTEM_DEFAULT"),
        }
    }
}

/// Disposition requested from the external arming facility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArmAction {
    Default,
    Ignore,
    /// No handler: drop any active callback
    Clear,
    Catch(HandlerId),
}

/// Result reported by the external arming facility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArmStatus {
    Armed,
    /// The platform cannot represent the disposition for this signal
    Unsupported,
}

/// Trap statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrapStats {
    pub traps_installed: u64,
    pub defaults_restored: u64,
    pub traps_rejected: u64,
    pub arm_unsupported: u64,
    pub system_defaults: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords() {
        assert_eq!("DEFAULT".parse::<TrapCommand>().unwrap(), TrapCommand::Default);
        assert_eq!("SIG_DFL".parse::<TrapCommand>().unwrap(), TrapCommand::Default);
        assert_eq!("IGNORE".parse::<TrapCommand>().unwrap(), TrapCommand::Ignore);
        assert_eq!("SIG_IGN".parse::<TrapCommand>().unwrap(), TrapCommand::Ignore);
        assert_eq!("EXIT".parse::<TrapCommand>().unwrap(), TrapCommand::Exit);
    }

    #[test]
    fn test_unsupported_keyword() {
        let err = "ignore".parse::<TrapCommand>().unwrap_err();
        assert_eq!(
            err,
            TrapError::InvalidHandler("Unsupported command 'ignore'".to_string())
        );
    }

    #[test]
    fn test_previous_disposition() {
        assert_eq!(Disposition::from_previous(None), Disposition::Default);
        assert_eq!(
            Disposition::from_previous(Some(HandlerEntry::Unset)),
            Disposition::Unset
        );
        assert_eq!(
            Disposition::from_previous(Some(HandlerEntry::Callback(7))).handler_id(),
            Some(7)
        );
    }
}
