use crate::changeset::chain;
use crate::operation::Operation;
use crate::walk::{Walker, split_utf16};
use crate::{Changeset, ReconcileError};

/// Combine two changesets applied back-to-back into one equivalent
/// changeset: `apply(compose(a, b), text) == apply(b, apply(a, text))`.
///
/// # Errors
///
/// Returns [`ReconcileError::Uncomposable`] when `a.to_len() != b.from_len()`,
/// meaning `b` was not built against the text `a` produces.
///
/// ```
/// use textweave::{Changeset, Operation, apply, compose};
///
/// let a = Changeset::new([Operation::Keep(3), Operation::Add("xyz".to_owned())]);
/// let b = Changeset::new([Operation::Remove(1), Operation::Keep(5)]);
///
/// let combined = compose(&a, &b).unwrap();
/// assert_eq!(apply(&combined, "abc").unwrap(), apply(&b, &apply(&a, "abc").unwrap()).unwrap());
/// ```
pub fn compose(a: &Changeset, b: &Changeset) -> Result<Changeset, ReconcileError> {
    if a.to_len() != b.from_len() {
        tracing::warn!(
            to_len_a = a.to_len(),
            from_len_b = b.from_len(),
            "refusing to compose: length mismatch"
        );
        return Err(ReconcileError::Uncomposable {
            to_len_a: a.to_len(),
            from_len_b: b.from_len(),
        });
    }

    if a.is_empty() {
        return Ok(b.clone());
    }
    if b.is_empty() {
        return Ok(a.clone());
    }

    let mut wa = Walker::new(a.operations());
    let mut wb = Walker::new(b.operations());
    let mut result = Vec::new();

    while !wa.is_done() || !wb.is_done() {
        let ha = wa.head();
        let hb = wb.head();

        match (ha, hb) {
            (Operation::Remove(n), _) => {
                chain(&mut result, Operation::Remove(n));
                wa.pop();
            }
            (_, Operation::Add(s)) => {
                chain(&mut result, Operation::Add(s));
                wb.pop();
            }
            (Operation::Keep(na), Operation::Keep(nb)) => {
                let n = na.min(nb);
                chain(&mut result, Operation::Keep(n));
                wa.advance_len(n);
                wb.advance_len(n);
            }
            (Operation::Keep(na), Operation::Remove(nb)) => {
                let n = na.min(nb);
                chain(&mut result, Operation::Remove(n));
                wa.advance_len(n);
                wb.advance_len(n);
            }
            (Operation::Add(s), Operation::Keep(nb)) => {
                let n = crate::operation::utf16_len(&s).min(nb);
                let (prefix, _) = split_utf16(&s, n);
                chain(&mut result, Operation::Add(prefix));
                wa.advance_add(n);
                wb.advance_len(n);
            }
            (Operation::Add(s), Operation::Remove(nb)) => {
                let n = crate::operation::utf16_len(&s).min(nb);
                wa.advance_add(n);
                wb.advance_len(n);
            }
        }
    }

    Ok(Changeset::from_canonical(result))
}
