/*!
 * Signal Registry Tests
 * Name resolution, alias synthesis and preferred-name pinning
 */

mod common;

use common::{linux_registry, linux_table, LINUX_SIGNALS};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use sigtrap::{
    PlatformSignalTable, RegistryConfig, RegistryError, SignalNumber, SignalRegistry, SignalSpec,
    TrapError,
};

fn shuffled_table(seed: u64) -> PlatformSignalTable {
    let mut signals = LINUX_SIGNALS.to_vec();
    signals.shuffle(&mut StdRng::seed_from_u64(seed));
    PlatformSignalTable::new(signals, 65)
}

#[test]
fn test_exit_seeded() {
    let registry = linux_registry();
    assert_eq!(registry.resolve_name("EXIT").unwrap(), 0);
    assert_eq!(registry.resolve_name("SIGEXIT").unwrap(), 0);
    assert_eq!(registry.name_of(0), Some("EXIT"));
}

#[test]
fn test_cld_synthesized_from_chld() {
    let registry = linux_registry();

    assert_eq!(registry.resolve_name("CLD").unwrap(), 17);
    assert_eq!(registry.resolve_name("SIGCLD").unwrap(), 17);
    assert_eq!(registry.name_of(17), Some("CHLD"));
}

#[test]
fn test_cld_not_synthesized_without_chld() {
    let table = PlatformSignalTable::new([("INT", 2), ("TERM", 15)], 32);
    let registry = SignalRegistry::build(&table, &RegistryConfig::default()).unwrap();

    assert!(!registry.contains("CLD"));
    assert!(!registry.contains("CHLD"));
}

#[test]
fn test_platform_cld_kept() {
    // Platforms that report CLD themselves keep their own number for it
    let table = PlatformSignalTable::new([("CLD", 18), ("CHLD", 18)], 32);
    let registry = SignalRegistry::build(&table, &RegistryConfig::default()).unwrap();

    assert_eq!(registry.resolve_name("CLD").unwrap(), 18);
    assert_eq!(registry.name_of(18), Some("CHLD"));
}

#[test]
fn test_prefixed_platform_names() {
    let table = PlatformSignalTable::new([("SIGINT", 2), ("SIGTERM", 15)], 32);
    let registry = SignalRegistry::build(&table, &RegistryConfig::default()).unwrap();

    assert_eq!(registry.resolve_name("INT").unwrap(), 2);
    assert_eq!(registry.name_of(15), Some("TERM"));
}

#[test]
fn test_resolve_numbers() {
    let registry = linux_registry();

    assert_eq!(registry.resolve(&SignalSpec::Number(9)).unwrap(), (9, "KILL"));
    assert_eq!(registry.resolve(&SignalSpec::from("SIGIOT")).unwrap(), (6, "ABRT"));
    assert_eq!(
        registry.resolve(&SignalSpec::Number(64)),
        Err(TrapError::UnknownSignal("64".to_string()))
    );
}

#[test]
fn test_resolution_is_case_sensitive() {
    let registry = linux_registry();
    assert!(registry.resolve_name("int").is_err());
    assert!(registry.resolve_name("sigINT").is_err());
}

#[test]
fn test_capacity_is_nsig() {
    let registry = linux_registry();
    assert_eq!(registry.nsig(), 65);
    assert_eq!(registry.capacity(), 65);
}

#[test]
fn test_numbers_bounded_by_nsig() {
    let beyond = PlatformSignalTable::new([("RTMAX", 64)], 32);
    assert_eq!(
        SignalRegistry::build(&beyond, &RegistryConfig::default()).unwrap_err(),
        RegistryError::NumberOutOfRange {
            name: "RTMAX".to_string(),
            number: 64,
            nsig: 32,
        }
    );

    let overflow = PlatformSignalTable::new([("BIG", SignalNumber::MAX)], 65);
    assert!(matches!(
        SignalRegistry::build(&overflow, &RegistryConfig::default()),
        Err(RegistryError::NumberOutOfRange { .. })
    ));

    // A huge number must fail the build instead of sizing the handler table
    let huge = PlatformSignalTable::from_json(r#"{"signals": [["RTHUGE", 1000000000]], "nsig": 65}"#)
        .unwrap();
    assert!(matches!(
        SignalRegistry::build(&huge, &RegistryConfig::default()),
        Err(RegistryError::NumberOutOfRange { number: 1000000000, .. })
    ));
}

#[test]
fn test_nsig_must_be_sane() {
    for nsig in [0, -1, 1_000_000_000, SignalNumber::MAX] {
        let table = PlatformSignalTable::new([("INT", 2)], nsig);
        assert!(matches!(
            SignalRegistry::build(&table, &RegistryConfig::default()),
            Err(RegistryError::InvalidNsig { .. })
        ));
    }
}

#[test]
fn test_malformed_tables_rejected() {
    let conflicting = PlatformSignalTable::new([("INT", 2), ("INT", 3)], 32);
    assert_eq!(
        SignalRegistry::build(&conflicting, &RegistryConfig::default()).unwrap_err(),
        RegistryError::ConflictingNumber {
            name: "INT".to_string(),
            existing: 2,
            conflicting: 3,
        }
    );

    let zero = PlatformSignalTable::new([("NULL", 0)], 32);
    assert!(matches!(
        SignalRegistry::build(&zero, &RegistryConfig::default()),
        Err(RegistryError::ReservedNumber { .. })
    ));

    let negative = PlatformSignalTable::new([("BAD", -4)], 32);
    assert!(matches!(
        SignalRegistry::build(&negative, &RegistryConfig::default()),
        Err(RegistryError::NegativeNumber { number: -4, .. })
    ));
}

#[test]
fn test_duplicate_pairs_accepted() {
    let table = PlatformSignalTable::new([("INT", 2), ("SIGINT", 2)], 32);
    let registry = SignalRegistry::build(&table, &RegistryConfig::default()).unwrap();
    assert_eq!(registry.resolve_name("INT").unwrap(), 2);
}

#[test]
fn test_table_from_json() {
    let json = r#"{"signals": [["SIGHUP", 1], ["SIGCHLD", 20]], "nsig": 33}"#;
    let table = PlatformSignalTable::from_json(json).unwrap();
    let registry = SignalRegistry::build(&table, &RegistryConfig::default()).unwrap();

    assert_eq!(registry.resolve_name("CLD").unwrap(), 20);
    assert_eq!(registry.nsig(), 33);

    assert!(matches!(
        PlatformSignalTable::from_json("{\"signals\": 4}"),
        Err(RegistryError::InvalidTable(_))
    ));
}

#[test]
fn test_custom_policy() {
    let config = RegistryConfig {
        aliases: vec![("POLL".to_string(), "IO".to_string())],
        preferred: vec!["IO".to_string()],
    };
    let table = PlatformSignalTable::new([("POLL", 29), ("IO", 29)], 32);
    let registry = SignalRegistry::build(&table, &config).unwrap();

    assert_eq!(registry.name_of(29), Some("IO"));
}

#[test]
fn test_list_contains_aliases() {
    let registry = linux_registry();
    let list = registry.list();

    assert_eq!(list.len(), LINUX_SIGNALS.len() + 2);
    assert_eq!(list.get("POLL"), list.get("IO"));
    assert_eq!(list.get("CLD"), Some(&17));
}

proptest! {
    #[test]
    fn prop_preferred_names_independent_of_order(seed in any::<u64>()) {
        let registry = SignalRegistry::build(&shuffled_table(seed), &RegistryConfig::default()).unwrap();

        prop_assert_eq!(registry.name_of(17), Some("CHLD"));
        prop_assert_eq!(registry.name_of(6), Some("ABRT"));
        prop_assert_eq!(registry.resolve_name("CLD").unwrap(), 17);
        prop_assert_eq!(registry.list(), linux_registry().list());
    }

    #[test]
    fn prop_name_round_trip(seed in any::<u64>()) {
        let registry = SignalRegistry::build(&shuffled_table(seed), &RegistryConfig::default()).unwrap();

        for (name, number) in registry.list() {
            let preferred = registry.name_of(number).unwrap();
            prop_assert_eq!(registry.resolve_name(preferred).unwrap(), number);
            prop_assert_eq!(registry.resolve_name(&format!("SIG{}", name)).unwrap(), number);
        }
    }

    #[test]
    fn prop_unknown_numbers_rejected(number in 32..10_000i32) {
        let registry = SignalRegistry::build(&linux_table(), &RegistryConfig::default()).unwrap();
        let spec = SignalSpec::Number(number as SignalNumber);
        prop_assert!(matches!(registry.resolve(&spec), Err(TrapError::UnknownSignal(_))));
    }
}
