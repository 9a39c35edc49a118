#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::operation::Operation;

/// Append `operation` to `sequence`, keeping it in canonical form.
///
/// Canonical form means no two adjacent operations share a variant (they are
/// coalesced into one) and no operation has zero length. Every emit site in
/// [`compose`](crate::compose) and [`transform`](crate::transform) routes its
/// output through this function so the result never needs a separate
/// canonicalization pass.
pub(crate) fn chain(sequence: &mut Vec<Operation>, operation: Operation) {
    if operation.is_empty() {
        return;
    }

    match (sequence.last_mut(), operation) {
        (Some(Operation::Keep(a)), Operation::Keep(b)) => *a += b,
        (Some(Operation::Remove(a)), Operation::Remove(b)) => *a += b,
        (Some(Operation::Add(a)), Operation::Add(b)) => a.push_str(&b),
        (_, operation) => sequence.push(operation),
    }
}

/// A canonical, ordered sequence of [`Operation`]s describing a transformation
/// from one text to another.
///
/// Changesets are immutable values: there is no mutation API. They are built
/// either from a raw operation list (canonicalized at construction time via
/// [`Changeset::new`]), decoded from JSON (see [`crate::decode`]), or produced
/// as the output of [`compose`](crate::compose) or
/// [`transform`](crate::transform).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "crate::wire::ChangesetWire"))]
#[cfg_attr(feature = "serde", serde(into = "crate::wire::ChangesetWire"))]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Changeset {
    operations: Vec<Operation>,
    from_len: usize,
    to_len: usize,
}

impl Changeset {
    /// Canonicalizing constructor: folds [`chain`] over `operations` in
    /// order, so the result is always in canonical form regardless of
    /// whether `operations` already was.
    #[must_use]
    pub fn new(operations: impl IntoIterator<Item = Operation>) -> Self {
        let mut canonical = Vec::new();
        for operation in operations {
            chain(&mut canonical, operation);
        }
        Self::from_canonical(canonical)
    }

    /// Build a changeset from a sequence that the caller guarantees is
    /// already canonical (for example, the output of [`chain`]-only emission
    /// in `compose`/`transform`). Skips the redundant re-canonicalization
    /// pass `new` would otherwise perform.
    pub(crate) fn from_canonical(operations: Vec<Operation>) -> Self {
        let mut from_len = 0;
        let mut to_len = 0;
        for operation in &operations {
            match operation {
                Operation::Keep(n) => {
                    from_len += n;
                    to_len += n;
                }
                Operation::Remove(n) => from_len += n,
                Operation::Add(s) => to_len += crate::operation::utf16_len(s),
            }
        }

        Self {
            operations,
            from_len,
            to_len,
        }
    }

    /// The operations that make up this changeset, in order.
    #[must_use]
    pub fn operations(&self) -> &[Operation] { &self.operations }

    /// The UTF-16 length of text this changeset can be applied to.
    #[must_use]
    pub fn from_len(&self) -> usize { self.from_len }

    /// The UTF-16 length of text this changeset produces when applied.
    #[must_use]
    pub fn to_len(&self) -> usize { self.to_len }

    /// Whether this changeset has no operations at all.
    ///
    /// An empty changeset only makes sense over an empty document: it is the
    /// identity for `compose`/`transform` on a document of matching length,
    /// but it is not a `Keep(0)` no-op over arbitrary text the way a single
    /// `Keep(n)` is a no-op over text of length `n`.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.operations.is_empty() }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test]
    fn test_chain_coalesces_adjacent_same_kind_operations() {
        let changeset = Changeset::new([
            Operation::Keep(2),
            Operation::Keep(3),
            Operation::Add("a".to_owned()),
            Operation::Add("b".to_owned()),
        ]);

        assert_eq!(
            changeset.operations(),
            &[Operation::Keep(5), Operation::Add("ab".to_owned())]
        );
    }

    #[test]
    fn test_chain_does_not_coalesce_across_a_different_kind() {
        let changeset = Changeset::new([
            Operation::Keep(2),
            Operation::Remove(1),
            Operation::Keep(3),
        ]);

        assert_eq!(
            changeset.operations(),
            &[
                Operation::Keep(2),
                Operation::Remove(1),
                Operation::Keep(3)
            ]
        );
    }

    #[test_case(vec![], 0, 0; "empty")]
    #[test_case(vec![Operation::Keep(4)], 4, 4; "single keep")]
    #[test_case(vec![Operation::Remove(3)], 3, 0; "single remove")]
    #[test_case(vec![Operation::Add("hi".to_owned())], 0, 2; "single add")]
    #[test_case(
        vec![Operation::Keep(5), Operation::Add("asdf".to_owned()), Operation::Remove(3), Operation::Keep(4), Operation::Add("zxcv".to_owned())],
        12, 17;
        "mixed"
    )]
    fn test_derived_lengths(operations: Vec<Operation>, from_len: usize, to_len: usize) {
        let changeset = Changeset::new(operations);
        assert_eq!(changeset.from_len(), from_len);
        assert_eq!(changeset.to_len(), to_len);
    }

    #[test]
    fn test_zero_length_operations_are_dropped() {
        let changeset = Changeset::new([
            Operation::Keep(0),
            Operation::Keep(3),
            Operation::Remove(0),
            Operation::Add(String::new()),
        ]);

        assert_eq!(changeset.operations(), &[Operation::Keep(3)]);
    }

    #[test]
    fn test_canonicalization_is_insensitive_to_how_the_input_is_split() {
        let whole = Changeset::new([Operation::Keep(5)]);
        let split = Changeset::new([Operation::Keep(2), Operation::Keep(3)]);
        assert_eq!(whole, split);
    }
}
