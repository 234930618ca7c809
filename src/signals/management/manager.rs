/*!
 * Signal Trap Manager
 * Validates trap requests, swaps the handler table and arms the host
 */

use crate::core::errors::{TrapError, TrapResult};
use crate::core::limits::{EXIT_CALLBACK_STATUS, EXIT_SIGNAL};
use crate::core::types::{HandlerId, SignalNumber};
use crate::monitoring::span_trap;
use crate::signals::core::atomic_stats::AtomicTrapStats;
use crate::signals::core::config::TrapConfig;
use crate::signals::core::traits::{SignalArming, Terminator};
use crate::signals::core::types::*;
use crate::signals::handler::{CallbackRegistry, HandlerSlot, HandlerTable};
use crate::signals::registry::SignalRegistry;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Signal trap manager
///
/// Owns the handler table and shares the read-only registry. Cloning is
/// cheap and every clone operates on the same table.
#[derive(Clone)]
pub struct SignalTrap {
    registry: Arc<SignalRegistry>,
    handlers: Arc<HandlerTable>,
    callbacks: Arc<CallbackRegistry>,
    arming: Arc<dyn SignalArming>,
    exit_handler: HandlerId,
    /// Shared by installs of user callbacks, exclusive for unregistration
    callback_guard: Arc<RwLock<()>>,
    config: TrapConfig,
    stats: Arc<AtomicTrapStats>,
}

impl SignalTrap {
    pub fn new(
        registry: Arc<SignalRegistry>,
        arming: Arc<dyn SignalArming>,
        terminator: Arc<dyn Terminator>,
    ) -> Self {
        Self::with_config(registry, arming, terminator, TrapConfig::default())
    }

    pub fn with_config(
        registry: Arc<SignalRegistry>,
        arming: Arc<dyn SignalArming>,
        terminator: Arc<dyn Terminator>,
        config: TrapConfig,
    ) -> Self {
        let config = config.normalized();
        let callbacks = Arc::new(CallbackRegistry::new());
        let exit_handler = callbacks.register(move |signal| {
            info!("Exit callback fired by signal {}", signal);
            terminator.terminate(EXIT_CALLBACK_STATUS);
            Ok(())
        });

        info!(
            slots = registry.capacity(),
            reserved = %config.reserved_signal,
            "Signal trap manager initialized"
        );

        Self {
            handlers: Arc::new(HandlerTable::new(registry.capacity())),
            registry,
            callbacks,
            arming,
            exit_handler,
            callback_guard: Arc::new(RwLock::new(())),
            config,
            stats: Arc::new(AtomicTrapStats::new()),
        }
    }

    /// Install a disposition and return the one it replaced
    ///
    /// Returns [`Disposition::Default`] when nothing was installed before,
    /// and [`Disposition::SystemDefault`] when restoring the default is not
    /// representable on the host.
    pub fn trap(
        &self,
        signal: impl Into<SignalSpec>,
        command: TrapCommand,
    ) -> TrapResult<Disposition> {
        let spec = signal.into();
        let span = span_trap(&spec.to_string(), &format!("{:?}", command));
        let _entered = span.enter();

        let result = self.trap_spec(&spec, command);

        if let Err(e) = &result {
            self.stats.inc_rejected();
            debug!(signal = %spec, ?command, error = %e, "Trap rejected");
        }

        result
    }

    /// Install a disposition given as a keyword (`DEFAULT`, `SIG_IGN`, `EXIT`, ...)
    pub fn trap_keyword(
        &self,
        signal: impl Into<SignalSpec>,
        keyword: &str,
    ) -> TrapResult<Disposition> {
        let signal = signal.into();
        match keyword.parse::<TrapCommand>() {
            Ok(command) => self.trap(signal, command),
            Err(e) => {
                self.stats.inc_rejected();
                Err(e)
            }
        }
    }

    fn trap_spec(&self, spec: &SignalSpec, command: TrapCommand) -> TrapResult<Disposition> {
        let (number, name) = self.registry.resolve(spec)?;

        if name == self.config.reserved_signal {
            return Err(TrapError::ReservedSignal(name.to_string()));
        }

        let slot = self
            .handlers
            .slot(number)
            .ok_or_else(|| TrapError::UnknownSignal(spec.to_string()))?;

        // Held until the entry commits so the callback cannot vanish in between
        let _callbacks = match command {
            TrapCommand::Handler(_) => Some(self.callback_guard.read()),
            _ => None,
        };

        let (entry, action) = match command {
            TrapCommand::Default => return Ok(self.restore_default(slot, number, name)),
            TrapCommand::Ignore => (HandlerEntry::Ignore, ArmAction::Ignore),
            TrapCommand::Unset => (HandlerEntry::Unset, ArmAction::Clear),
            TrapCommand::Exit => (
                HandlerEntry::Callback(self.exit_handler),
                ArmAction::Catch(self.exit_handler),
            ),
            TrapCommand::Handler(id) => {
                if !self.callbacks.exists(id) {
                    return Err(TrapError::InvalidHandler(format!(
                        "Handler must be a registered callback (was {})",
                        id
                    )));
                }
                (HandlerEntry::Callback(id), ArmAction::Catch(id))
            }
        };

        let _install = slot.lock_install();
        let previous = slot.swap(Some(entry));

        if number != EXIT_SIGNAL && self.arming.arm(name, action) == ArmStatus::Unsupported {
            self.stats.inc_arm_unsupported();
            warn!(signal = name, ?action, "Arming facility cannot represent disposition");
        }

        self.stats.inc_installed();
        info!(signal = name, number, ?entry, ?previous, "Trap installed");

        Ok(Disposition::from_previous(previous))
    }

    fn restore_default(&self, slot: &HandlerSlot, number: SignalNumber, name: &str) -> Disposition {
        let _install = slot.lock_install();
        let previous = slot.swap(None);
        self.stats.inc_restored();

        if number != EXIT_SIGNAL && self.arming.arm(name, ArmAction::Default) == ArmStatus::Unsupported {
            self.stats.inc_arm_unsupported();
            self.stats.inc_system_defaults();
            warn!(signal = name, "Default disposition is fixed by the system");
            return Disposition::SystemDefault;
        }

        info!(signal = name, number, ?previous, "Trap removed");
        Disposition::from_previous(previous)
    }

    /// Currently installed entry for a signal (`None` when nothing is installed)
    pub fn handler(&self, signal: impl Into<SignalSpec>) -> TrapResult<Option<HandlerEntry>> {
        let spec = signal.into();
        let (number, _) = self.registry.resolve(&spec)?;
        Ok(self.handlers.get(number))
    }

    /// Copy of the `name -> number` table
    pub fn list(&self) -> BTreeMap<String, SignalNumber> {
        self.registry.list()
    }

    /// Preferred name for a number
    pub fn signame(&self, number: SignalNumber) -> Option<&str> {
        self.registry.name_of(number)
    }

    /// Installed entries in number order
    pub fn installed(&self) -> Vec<(SignalNumber, HandlerEntry)> {
        self.handlers.installed()
    }

    /// Register a callback for use with [`TrapCommand::Handler`]
    pub fn register_callback<F>(&self, handler: F) -> HandlerId
    where
        F: Fn(SignalNumber) -> TrapResult<()> + Send + Sync + 'static,
    {
        self.callbacks.register(handler)
    }

    /// Remove a registered callback
    ///
    /// Refused while any signal still has it installed, and always for the
    /// built-in exit callback. Returns `false` when `id` was not registered.
    pub fn unregister_callback(&self, id: HandlerId) -> TrapResult<bool> {
        if id == self.exit_handler {
            return Err(TrapError::InvalidHandler(
                "The built-in exit callback cannot be unregistered".to_string(),
            ));
        }

        let _callbacks = self.callback_guard.write();
        if let Some(number) = self.handlers.find_callback(id) {
            let name = self.registry.name_of(number).unwrap_or("?");
            return Err(TrapError::InvalidHandler(format!(
                "Handler {} is still installed for SIG{}",
                id, name
            )));
        }

        Ok(self.callbacks.unregister(id))
    }

    /// Callback registry for the external dispatch mechanism
    pub fn callbacks(&self) -> Arc<CallbackRegistry> {
        self.callbacks.clone()
    }

    /// Token of the built-in exit callback
    pub fn exit_handler(&self) -> HandlerId {
        self.exit_handler
    }

    pub fn registry(&self) -> &SignalRegistry {
        &self.registry
    }

    pub fn config(&self) -> &TrapConfig {
        &self.config
    }

    pub fn stats(&self) -> TrapStats {
        self.stats.snapshot()
    }
}
