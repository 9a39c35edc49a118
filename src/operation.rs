use core::fmt::{self, Debug, Display};

/// An atomic edit instruction: keep, insert, or delete a run of text.
///
/// Lengths (and `Add`'s implicit length) are always measured in UTF-16 code
/// units, not bytes or grapheme clusters, so that offsets agree with the
/// measurement most editor surfaces (CodeMirror, Monaco, `contenteditable`)
/// already use.
///
/// `Operation` itself has no `Serialize`/`Deserialize` impl: the wire format
/// (see [`crate::wire`]) is a distinct `{"type": ..., "value": ...}` shape
/// routed through `OperationWire`, not a bare derive on this type.
#[derive(Clone, PartialEq, Eq)]
pub enum Operation {
    /// Copy the next `n` UTF-16 code units from the input unchanged.
    Keep(usize),

    /// Insert the given text; does not advance the input cursor.
    Add(String),

    /// Skip the next `n` UTF-16 code units of the input, emitting nothing.
    Remove(usize),
}

impl Operation {
    /// The number of UTF-16 code units this operation spans.
    ///
    /// For `Add`, this is the UTF-16 length of the inserted text, not its
    /// byte length or character count.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Operation::Keep(n) | Operation::Remove(n) => *n,
            Operation::Add(s) => utf16_len(s),
        }
    }

    /// Whether this operation spans zero code units.
    ///
    /// A canonical [`Changeset`](crate::Changeset) never contains such an
    /// operation, but the `Keep(0)` sentinel used internally by
    /// [`transform`](crate::transform) to mark an exhausted side is one.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.len() == 0 }

    /// Same variant and same payload as `other`.
    #[must_use]
    pub fn same_kind(&self, other: &Operation) -> bool {
        matches!(
            (self, other),
            (Operation::Keep(_), Operation::Keep(_))
                | (Operation::Add(_), Operation::Add(_))
                | (Operation::Remove(_), Operation::Remove(_))
        )
    }
}

/// Count the UTF-16 code units of `s`.
#[must_use]
pub(crate) fn utf16_len(s: &str) -> usize { s.encode_utf16().count() }

impl Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Keep(n) => write!(f, "<keep {n}>"),
            Operation::Add(s) => write!(f, "<add '{}'>", s.replace('\n', "\\n")),
            Operation::Remove(n) => write!(f, "<remove {n}>"),
        }
    }
}

impl Debug for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{self}") }
}
