/*!
 * Core Types
 * Common types used across the registry
 */

/// Host signal number. `0` is the virtual `EXIT` pseudo-signal.
pub type SignalNumber = i32;

/// Opaque token naming a callback in the callback registry
pub type HandlerId = u64;

/// Exit status handed to the termination facility
pub type ExitStatus = i32;
