use crate::changeset::chain;
use crate::operation::Operation;
use crate::walk::Walker;
use crate::{Changeset, ReconcileError};

/// Transform two concurrent changesets built against the same base text into
/// a pair that can be applied in either order with the same result: the
/// diamond property `apply(b', apply(a, text)) == apply(a', apply(b, text))`.
///
/// When both sides insert at the same position, `a`'s insertion is placed
/// first; this is an arbitrary but consistent tie-break, not a claim about
/// either caller's intent.
///
/// # Errors
///
/// Returns [`ReconcileError::Uncombinable`] when `a.from_len() != b.from_len()`,
/// meaning the two changesets were not built against documents of the same
/// length and therefore cannot be concurrent edits of the same text.
///
/// ```
/// use textweave::{Changeset, Operation, apply, transform};
///
/// let a = Changeset::new([Operation::Add("x".to_owned()), Operation::Keep(3)]);
/// let b = Changeset::new([Operation::Keep(3), Operation::Add("y".to_owned())]);
///
/// let (a_prime, b_prime) = transform(&a, &b).unwrap();
/// let text = "abc";
/// let via_a = apply(&b_prime, &apply(&a, text).unwrap()).unwrap();
/// let via_b = apply(&a_prime, &apply(&b, text).unwrap()).unwrap();
/// assert_eq!(via_a, via_b);
/// ```
pub fn transform(a: &Changeset, b: &Changeset) -> Result<(Changeset, Changeset), ReconcileError> {
    if a.from_len() != b.from_len() {
        tracing::warn!(
            from_len_a = a.from_len(),
            from_len_b = b.from_len(),
            "refusing to transform: length mismatch"
        );
        return Err(ReconcileError::Uncombinable {
            from_len_a: a.from_len(),
            from_len_b: b.from_len(),
        });
    }

    let mut wa = Walker::new(a.operations());
    let mut wb = Walker::new(b.operations());
    let mut result_a = Vec::new();
    let mut result_b = Vec::new();

    while !wa.is_done() || !wb.is_done() {
        let ha = wa.head();
        let hb = wb.head();

        match (ha, hb) {
            (Operation::Add(s), _) => {
                let n = crate::operation::utf16_len(&s);
                chain(&mut result_a, Operation::Add(s));
                chain(&mut result_b, Operation::Keep(n));
                wa.advance_add(n);
            }
            (_, Operation::Add(s)) => {
                let n = crate::operation::utf16_len(&s);
                chain(&mut result_a, Operation::Keep(n));
                chain(&mut result_b, Operation::Add(s));
                wb.advance_add(n);
            }
            (Operation::Keep(na), Operation::Keep(nb)) => {
                let n = na.min(nb);
                chain(&mut result_a, Operation::Keep(n));
                chain(&mut result_b, Operation::Keep(n));
                wa.advance_len(n);
                wb.advance_len(n);
            }
            (Operation::Remove(na), Operation::Remove(nb)) => {
                let n = na.min(nb);
                wa.advance_len(n);
                wb.advance_len(n);
            }
            (Operation::Remove(na), Operation::Keep(nb)) => {
                let n = na.min(nb);
                chain(&mut result_a, Operation::Remove(n));
                wa.advance_len(n);
                wb.advance_len(n);
            }
            (Operation::Keep(na), Operation::Remove(nb)) => {
                let n = na.min(nb);
                chain(&mut result_b, Operation::Remove(n));
                wa.advance_len(n);
                wb.advance_len(n);
            }
        }
    }

    Ok((
        Changeset::from_canonical(result_a),
        Changeset::from_canonical(result_b),
    ))
}
