/*!
 * Signals Module
 * Signal name registry, handler table and the trap operation
 */

pub mod core;
pub mod handler;
pub mod management;
pub mod platform;
pub mod registry;

// Re-export public API
pub use self::core::{
    ArmAction, ArmStatus, AtomicTrapStats, Disposition, HandlerEntry, ProcessExit,
    RegistryConfig, SignalArming, SignalSpec, Terminator, TrapCommand, TrapConfig, TrapStats,
};
pub use handler::{CallbackRegistry, HandlerFn, HandlerSlot, HandlerTable};
pub use management::SignalTrap;
pub use platform::{DetachedArming, PlatformArming};
#[cfg(unix)]
pub use platform::HostArming;
pub use registry::{PlatformSignalTable, SignalRegistry};
