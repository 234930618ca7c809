/*!
 * Signal Trap Library
 * Signal name registry, handler table and trap operation
 */

pub mod core;
pub mod monitoring;
pub mod signals;

// Re-exports
pub use crate::core::errors::{RegistryError, RegistryResult, TrapError, TrapResult};
pub use crate::core::types::{HandlerId, SignalNumber};
pub use monitoring::init_tracing;
pub use signals::{
    CallbackRegistry, DetachedArming, Disposition, HandlerEntry, PlatformArming, PlatformSignalTable,
    ProcessExit, RegistryConfig, SignalArming, SignalRegistry, SignalSpec, SignalTrap,
    Terminator, TrapCommand, TrapConfig,
};
