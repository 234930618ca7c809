/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use super::types::SignalNumber;
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Trap operation result
pub type TrapResult<T> = Result<T, TrapError>;

/// Registry construction result
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Errors raised by the trap operation
///
/// Every variant is detected before the handler table is touched.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum TrapError {
    #[error("Unknown signal '{0}'")]
    #[diagnostic(
        code(trap::unknown_signal),
        help("Use a name from the signal list (with or without the SIG prefix) or a named signal number.")
    )]
    UnknownSignal(String),

    #[error("can't trap reserved signal: SIG{0}")]
    #[diagnostic(
        code(trap::reserved_signal),
        help("This signal is used internally to unblock native calls.")
    )]
    ReservedSignal(String),

    #[error("{0}")]
    #[diagnostic(
        code(trap::invalid_handler),
        help("Use DEFAULT, SIG_DFL, IGNORE, SIG_IGN, EXIT or a registered callback.")
    )]
    InvalidHandler(String),

    #[error("Handler failed: {0}")]
    #[diagnostic(code(trap::handler_failed))]
    HandlerFailed(String),
}

/// Fatal errors raised while building the registry from platform data
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum RegistryError {
    #[error("Signal {name} defined as both {existing} and {conflicting}")]
    #[diagnostic(
        code(registry::conflicting_number),
        help("The platform signal table is malformed. Each name must map to one number.")
    )]
    ConflictingNumber {
        name: String,
        existing: SignalNumber,
        conflicting: SignalNumber,
    },

    #[error("Signal {name} claims number 0, reserved for EXIT")]
    #[diagnostic(code(registry::reserved_number))]
    ReservedNumber { name: String },

    #[error("Signal {name} has negative number {number}")]
    #[diagnostic(code(registry::negative_number))]
    NegativeNumber { name: String, number: SignalNumber },

    #[error("Signal {name} has number {number}, outside the platform bound {nsig}")]
    #[diagnostic(code(registry::number_out_of_range))]
    NumberOutOfRange {
        name: String,
        number: SignalNumber,
        nsig: SignalNumber,
    },

    #[error("Platform signal count {nsig} is not in 1..={max}")]
    #[diagnostic(code(registry::invalid_nsig))]
    InvalidNsig {
        nsig: SignalNumber,
        max: SignalNumber,
    },

    #[error("Invalid platform signal table: {0}")]
    #[diagnostic(
        code(registry::invalid_table),
        help("Expected JSON of the form {{\"signals\": [[\"INT\", 2], ...], \"nsig\": 65}}.")
    )]
    InvalidTable(String),
}

impl From<serde_json::Error> for RegistryError {
    fn from(err: serde_json::Error) -> Self {
        RegistryError::InvalidTable(err.to_string())
    }
}

impl From<std::io::Error> for RegistryError {
    fn from(err: std::io::Error) -> Self {
        RegistryError::InvalidTable(err.to_string())
    }
}
