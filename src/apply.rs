use crate::{Changeset, ReconcileError, operation::Operation};

/// Materialize `changeset` against `text`, producing the transformed string.
///
/// Fails with [`ReconcileError::BadTextLength`] when the UTF-16 length of
/// `text` doesn't match `changeset.from_len()`.
///
/// ```
/// use textweave::{Changeset, Operation, apply};
///
/// let changeset = Changeset::new([
///     Operation::Keep(5),
///     Operation::Add("asdf".to_owned()),
///     Operation::Remove(3),
///     Operation::Keep(4),
///     Operation::Add("zxcv".to_owned()),
/// ]);
///
/// assert_eq!(apply(&changeset, "qwerty poiu!").unwrap(), "qwertasdfoiu!zxcv");
/// ```
pub fn apply(changeset: &Changeset, text: &str) -> Result<String, ReconcileError> {
    let units: Vec<u16> = text.encode_utf16().collect();

    if units.len() != changeset.from_len() {
        tracing::warn!(
            expected = changeset.from_len(),
            actual = units.len(),
            "refusing to apply changeset: input length mismatch"
        );
        return Err(ReconcileError::BadTextLength {
            expected: changeset.from_len(),
            actual: units.len(),
        });
    }

    let mut output = String::with_capacity(changeset.to_len());
    let mut position = 0;

    for operation in changeset.operations() {
        match operation {
            Operation::Keep(n) => {
                output.push_str(&decode_utf16_unit_range(&units, position, *n, changeset)?);
                position += n;
            }
            Operation::Add(s) => output.push_str(s),
            Operation::Remove(n) => position += n,
        }
    }

    Ok(output)
}

/// Decode `units[start..start + len]` back into a `String`, surfacing a
/// surrogate-pair split as [`ReconcileError::BadTextLength`] rather than
/// panicking. Such a split can only happen if an upstream producer measured
/// an `Add`'s length incorrectly; the spec leaves the behavior undefined, but
/// detecting it here is strictly better than emitting invalid UTF-16.
fn decode_utf16_unit_range(
    units: &[u16],
    start: usize,
    len: usize,
    changeset: &Changeset,
) -> Result<String, ReconcileError> {
    String::from_utf16(&units[start..start + len]).map_err(|_| ReconcileError::BadTextLength {
        expected: changeset.from_len(),
        actual: units.len(),
    })
}
