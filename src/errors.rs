use thiserror::Error;

/// Errors raised by the three changeset operations ([`apply`](crate::apply),
/// [`compose`](crate::compose), [`transform`](crate::transform)) and by
/// [`decode`](crate::decode).
///
/// Every case here corresponds to a violated precondition, never an internal
/// bug: the operation-pair tables inside `compose`/`transform` are exhaustive
/// over the three-variant [`Operation`](crate::Operation) enum, so there is
/// no "unknown combination" panic to guard against.
#[derive(Error, Debug)]
pub enum ReconcileError {
    /// [`apply`](crate::apply) was given text whose UTF-16 length doesn't
    /// match the changeset's [`Changeset::from_len`](crate::Changeset::from_len).
    #[error(
        "text has {actual} UTF-16 code units but the changeset expects {expected}"
    )]
    BadTextLength {
        /// `changeset.from_len()`.
        expected: usize,
        /// `utf16_len(text)`.
        actual: usize,
    },

    /// [`compose`](crate::compose) was given changesets whose lengths don't
    /// chain: the left side's output length must equal the right side's
    /// required input length.
    #[error(
        "cannot compose: left changeset produces {to_len_a} code units but right changeset \
         expects {from_len_b}"
    )]
    Uncomposable {
        /// `a.to_len()`.
        to_len_a: usize,
        /// `b.from_len()`.
        from_len_b: usize,
    },

    /// [`transform`](crate::transform) was given changesets derived from
    /// documents of different lengths, so they cannot be concurrent edits of
    /// the same base text.
    #[error(
        "cannot transform: changesets expect different input lengths ({from_len_a} vs \
         {from_len_b})"
    )]
    Uncombinable {
        /// `a.from_len()`.
        from_len_a: usize,
        /// `b.from_len()`.
        from_len_b: usize,
    },

    /// [`decode`](crate::decode) was given malformed JSON, an unknown
    /// operation `"type"`, or a `"value"` of the wrong JSON type.
    #[cfg(feature = "serde")]
    #[error("failed to decode changeset: {0}")]
    Decode(#[from] serde_json::Error),
}
