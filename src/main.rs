/*!
 * sigtrap - Main Entry Point
 *
 * Builds the signal registry for the host, installs a few traps and acts
 * as the dispatcher for caught signals until SIGINT arrives.
 */

use anyhow::Context;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

use sigtrap::{
    init_tracing, HandlerEntry, PlatformArming, PlatformSignalTable, ProcessExit, RegistryConfig,
    SignalNumber, SignalRegistry, SignalTrap, TrapCommand, TrapConfig,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    info!("sigtrap starting...");

    let table = PlatformSignalTable::from_env().context("Failed to load platform signal table")?;
    let registry = SignalRegistry::build(&table, &RegistryConfig::default())
        .context("Malformed platform signal table")?;

    for (name, number) in registry.list() {
        debug!(signal = %name, number, preferred = registry.name_of(number) == Some(name.as_str()), "Known signal");
    }
    info!(names = registry.len(), nsig = registry.nsig(), "Signal registry ready");

    let arming = Arc::new(PlatformArming::new());
    let trap = SignalTrap::with_config(
        Arc::new(registry),
        arming.clone(),
        Arc::new(ProcessExit),
        TrapConfig::from_env(),
    );

    let interrupted = Arc::new(AtomicBool::new(false));
    let flag = interrupted.clone();
    let on_interrupt = trap.register_callback(move |signal| {
        info!("Caught signal {}, shutting down", signal);
        flag.store(true, Ordering::SeqCst);
        Ok(())
    });
    let on_exit = trap.register_callback(|_| {
        info!("sigtrap exiting");
        Ok(())
    });

    trap.trap("INT", TrapCommand::Handler(on_interrupt))?;
    trap.trap("TERM", TrapCommand::Exit)?;
    trap.trap("EXIT", TrapCommand::Handler(on_exit))?;

    info!("Press Ctrl+C to exit");

    let callbacks = trap.callbacks();
    let mut ticker = tokio::time::interval(Duration::from_millis(100));
    while !interrupted.load(Ordering::SeqCst) {
        ticker.tick().await;

        for number in take_pending(&arming) {
            match trap.handler(number) {
                Ok(Some(HandlerEntry::Callback(id))) => {
                    if let Err(e) = callbacks.execute(id, number) {
                        warn!(error = %e, signal = number, "Signal callback failed");
                    }
                }
                Ok(entry) => debug!(signal = number, ?entry, "No callback installed"),
                Err(e) => warn!(error = %e, "Caught unknown signal"),
            }
        }
    }

    let previous = trap.trap("INT", TrapCommand::Default)?;
    debug!(%previous, "Restored default SIGINT disposition");

    // EXIT is virtual: the process itself fires it on the way out
    if let Ok(Some(HandlerEntry::Callback(id))) = trap.handler("EXIT") {
        callbacks.execute(id, 0)?;
    }

    info!(stats = ?trap.stats(), "sigtrap stopped");
    Ok(())
}

#[cfg(unix)]
fn take_pending(arming: &PlatformArming) -> Vec<SignalNumber> {
    arming.take_pending()
}

#[cfg(not(unix))]
fn take_pending(_arming: &PlatformArming) -> Vec<SignalNumber> {
    Vec::new()
}
