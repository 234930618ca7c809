/*!
 * Signal Name Registry
 * Bidirectional name <-> number table, immutable after build
 */

use super::table::PlatformSignalTable;
use crate::core::errors::{RegistryError, RegistryResult, TrapError, TrapResult};
use crate::core::limits::{EXIT_SIGNAL, EXIT_SIGNAL_NAME, MAX_NSIG, SIGNAL_PREFIX};
use crate::core::types::SignalNumber;
use crate::signals::core::config::RegistryConfig;
use crate::signals::core::types::SignalSpec;
use ahash::HashMap;
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Name/number registry
///
/// `names` holds every known name including aliases; `numbers` holds one
/// preferred name per number. Built once and shared read-only afterwards.
#[derive(Debug, Clone)]
pub struct SignalRegistry {
    names: HashMap<String, SignalNumber>,
    numbers: HashMap<SignalNumber, String>,
    nsig: SignalNumber,
}

impl SignalRegistry {
    /// Build the registry from platform data
    ///
    /// Seeds `EXIT = 0`, inserts every platform pair, synthesizes missing
    /// aliases and finally pins preferred names so lookups by number do not
    /// depend on table order. Every number must lie in `0..nsig`.
    pub fn build(table: &PlatformSignalTable, config: &RegistryConfig) -> RegistryResult<Self> {
        if !(1..=MAX_NSIG).contains(&table.nsig) {
            return Err(RegistryError::InvalidNsig {
                nsig: table.nsig,
                max: MAX_NSIG,
            });
        }

        let mut names: HashMap<String, SignalNumber> = HashMap::default();
        let mut numbers: HashMap<SignalNumber, String> = HashMap::default();

        names.insert(EXIT_SIGNAL_NAME.to_string(), EXIT_SIGNAL);
        numbers.insert(EXIT_SIGNAL, EXIT_SIGNAL_NAME.to_string());

        for (raw, number) in &table.signals {
            let name = strip_prefix(raw);

            if *number < 0 {
                return Err(RegistryError::NegativeNumber {
                    name: name.to_string(),
                    number: *number,
                });
            }

            if *number >= table.nsig {
                return Err(RegistryError::NumberOutOfRange {
                    name: name.to_string(),
                    number: *number,
                    nsig: table.nsig,
                });
            }

            if let Some(&existing) = names.get(name) {
                if existing != *number {
                    return Err(RegistryError::ConflictingNumber {
                        name: name.to_string(),
                        existing,
                        conflicting: *number,
                    });
                }
            }

            if *number == EXIT_SIGNAL {
                return Err(RegistryError::ReservedNumber {
                    name: name.to_string(),
                });
            }

            names.insert(name.to_string(), *number);
            numbers.insert(*number, name.to_string());
        }

        for (alias, counterpart) in &config.aliases {
            if names.contains_key(alias) {
                continue;
            }
            if let Some(&number) = names.get(counterpart) {
                debug!(alias = %alias, counterpart = %counterpart, number, "Synthesized signal alias");
                names.insert(alias.clone(), number);
            }
        }

        // Pinned names win regardless of insertion order
        for name in &config.preferred {
            if let Some(&number) = names.get(name) {
                numbers.insert(number, name.clone());
            }
        }

        info!(
            names = names.len(),
            numbers = numbers.len(),
            nsig = table.nsig,
            "Signal registry built"
        );

        Ok(Self {
            names,
            numbers,
            nsig: table.nsig,
        })
    }

    /// Registry for the host platform with default policy
    pub fn host() -> RegistryResult<Self> {
        Self::build(&PlatformSignalTable::host(), &RegistryConfig::default())
    }

    /// Resolve a name, with or without the `SIG` prefix, to its number
    pub fn resolve_name(&self, input: &str) -> TrapResult<SignalNumber> {
        self.names
            .get(strip_prefix(input))
            .copied()
            .ok_or_else(|| TrapError::UnknownSignal(input.to_string()))
    }

    /// Preferred name for a number; `None` means an unnamed signal
    pub fn name_of(&self, number: SignalNumber) -> Option<&str> {
        self.numbers.get(&number).map(String::as_str)
    }

    /// Resolve a caller's spec to its number and preferred name
    pub fn resolve(&self, spec: &SignalSpec) -> TrapResult<(SignalNumber, &str)> {
        let number = match spec {
            SignalSpec::Name(name) => self.resolve_name(name)?,
            SignalSpec::Number(number) => *number,
        };

        let name = self
            .name_of(number)
            .ok_or_else(|| TrapError::UnknownSignal(spec.to_string()))?;

        Ok((number, name))
    }

    /// Copy of the `name -> number` table, aliases included
    pub fn list(&self) -> BTreeMap<String, SignalNumber> {
        self.names
            .iter()
            .map(|(name, number)| (name.clone(), *number))
            .collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains_key(strip_prefix(name))
    }

    /// Signal-count bound supplied by the platform
    pub fn nsig(&self) -> SignalNumber {
        self.nsig
    }

    /// Number of handler slots needed to cover `0..nsig`
    pub fn capacity(&self) -> usize {
        // build() keeps nsig within 1..=MAX_NSIG
        self.nsig as usize
    }

    /// Number of known names, aliases included
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[inline]
fn strip_prefix(name: &str) -> &str {
    name.strip_prefix(SIGNAL_PREFIX).unwrap_or(name)
}
