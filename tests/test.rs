//! End-to-end scenarios from the changeset algebra's spec, run against the
//! public API rather than any single module's internals.

use pretty_assertions::assert_eq;
use textweave::{Changeset, Operation, apply, compose, decode, encode, transform};

fn keep(n: usize) -> Operation { Operation::Keep(n) }
fn add(s: &str) -> Operation { Operation::Add(s.to_owned()) }
fn remove(n: usize) -> Operation { Operation::Remove(n) }

/// Installs a `tracing` subscriber so the `tracing::warn!` events `apply`,
/// `compose`, and `transform` emit on a rejected precondition are visible
/// when running tests with `--nocapture` instead of silently discarded.
fn init_tracing() {
    use std::sync::Once;

    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

#[test]
fn test_apply_concrete_scenario() {
    let changeset = Changeset::new([keep(5), add("asdf"), remove(3), keep(4), add("zxcv")]);
    assert_eq!(apply(&changeset, "qwerty poiu!").unwrap(), "qwertasdfoiu!zxcv");
}

#[test]
fn test_compose_concrete_scenario_matches_sequential_apply() {
    let a = Changeset::new([keep(5), add("asdf"), remove(3), keep(4), add("zxcv")]);
    let b = Changeset::new([
        remove(1),
        keep(2),
        add(" a"),
        keep(1),
        add("e "),
        keep(3),
        remove(5),
        add("ty"),
        keep(1),
        remove(4),
    ]);

    let text = "qwerty poiu!";
    let intermediate = apply(&a, text).unwrap();
    assert_eq!(intermediate, "qwertasdfoiu!zxcv");

    let sequential = apply(&b, &intermediate).unwrap();
    assert_eq!(sequential, "we are tasty!");

    let combined = compose(&a, &b).unwrap();
    assert_eq!(apply(&combined, text).unwrap(), sequential);
}

#[test]
fn test_transform_concrete_scenario_satisfies_diamond_property() {
    let b = Changeset::new([
        remove(1),
        keep(2),
        add(" a"),
        keep(1),
        add("e "),
        keep(3),
        remove(5),
        add("ty"),
        keep(1),
        remove(4),
    ]);
    let d = Changeset::new([
        remove(3),
        add(" ab"),
        keep(3),
        remove(5),
        add("ty"),
        keep(5),
        remove(1),
    ]);

    assert_eq!(b.from_len(), 17);
    assert_eq!(d.from_len(), 17);

    let (b_prime, d_prime) = transform(&b, &d).unwrap();

    // Both changesets were built against the same 17-UTF-16-unit input (the
    // intermediate result of applying `a` from the compose scenario above),
    // not the original 12-unit "qwerty poiu!" — `transform` requires equal
    // `from_len` on both sides.
    let text = "qwertasdfoiu!zxcv";
    let via_b = apply(&d_prime, &apply(&b, text).unwrap()).unwrap();
    let via_d = apply(&b_prime, &apply(&d, text).unwrap()).unwrap();
    assert_eq!(via_b, via_d);
}

#[test]
fn test_utf16_unit_semantics_across_a_surrogate_pair() {
    let base = "👨\u{200d}👩\u{200d}👧qwerty poiu!";
    assert_eq!(base.encode_utf16().count(), 19);

    let changeset = Changeset::new([keep(13), add("asdf"), remove(3), keep(4), add("zxcv")]);
    assert_eq!(
        apply(&changeset, base).unwrap(),
        "👨\u{200d}👩\u{200d}👧qwertasdfoiu!zxcv"
    );
}

#[test]
fn test_canonicalization_coalesces_adjacent_same_kind_operations() {
    let changeset = Changeset::new([keep(2), keep(3), add("a"), add("b")]);
    assert_eq!(changeset.operations(), &[keep(5), add("ab")]);
}

#[test]
fn test_apply_error_gating() {
    init_tracing();
    let changeset = Changeset::new([keep(5)]);
    let error = apply(&changeset, "abcdef").unwrap_err();
    assert!(matches!(error, textweave::ReconcileError::BadTextLength { .. }));
}

#[test]
fn test_compose_error_gating() {
    let a = Changeset::new([keep(5)]);
    let b = Changeset::new([keep(6)]);
    let error = compose(&a, &b).unwrap_err();
    assert!(matches!(error, textweave::ReconcileError::Uncomposable { .. }));
}

#[test]
fn test_transform_error_gating() {
    let a = Changeset::new([keep(5)]);
    let b = Changeset::new([keep(6)]);
    let error = transform(&a, &b).unwrap_err();
    assert!(matches!(error, textweave::ReconcileError::Uncombinable { .. }));
}

#[test]
fn test_encode_decode_round_trip() {
    let changeset = Changeset::new([keep(5), add("asdf"), remove(3), keep(4), add("zxcv")]);
    let json = encode(&changeset).to_string();
    assert_eq!(decode(&json).unwrap(), changeset);
}

#[test]
fn test_identity_keep_leaves_text_unchanged() {
    let changeset = Changeset::new([keep(11)]);
    assert_eq!(apply(&changeset, "hello world").unwrap(), "hello world");

    let other = Changeset::new([remove(5), keep(6)]);
    let composed_left = compose(&changeset, &other).unwrap();
    let composed_right = compose(&other, &Changeset::new([keep(other.to_len())])).unwrap();

    assert_eq!(composed_left, other);
    assert_eq!(composed_right, other);
}
