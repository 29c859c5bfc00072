use super::*;

// =============================================================
// resolve_preference
// =============================================================

#[test]
fn os_dark_applies_without_stored_preference() {
    assert!(resolve_preference(None, true));
    assert!(!resolve_preference(None, false));
}

#[test]
fn stored_false_wins_over_os_dark() {
    assert!(!resolve_preference(Some("false"), true));
}

#[test]
fn stored_true_wins_over_os_light() {
    assert!(resolve_preference(Some("true"), false));
}

#[test]
fn unrecognized_stored_value_reads_as_light() {
    assert!(!resolve_preference(Some("yes"), true));
}

#[test]
fn stored_value_round_trips_through_resolve() {
    assert!(resolve_preference(Some(stored_value(true)), false));
    assert!(!resolve_preference(Some(stored_value(false)), true));
}

#[test]
fn boot_script_uses_same_key_and_class() {
    assert!(BOOT_SCRIPT.contains(STORAGE_KEY));
    assert!(BOOT_SCRIPT.contains(&format!("'{DARK_CLASS}'")));
}

// =============================================================
// Browser-less behavior
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn read_preference_is_false_in_non_hydrate_tests() {
    assert!(!read_preference());
}

#[test]
fn toggle_flips_boolean_value() {
    assert!(toggle(false));
    assert!(!toggle(true));
}

#[test]
fn apply_is_noop_but_callable() {
    apply(false);
    apply(true);
}
