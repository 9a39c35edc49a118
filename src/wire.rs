//! JSON wire representation, feature-gated behind `serde`.
//!
//! [`Changeset`] derives its [`serde::Serialize`]/[`serde::Deserialize`] impls
//! by routing through [`ChangesetWire`], which mirrors the wire format
//! verbatim: `{"operations": [{"type": "keep"|"add"|"remove", "value": ...}]}`.
//! Keeping this shape as a separate type (rather than hand-tagging
//! `Operation` itself) means `Operation`'s in-memory representation stays the
//! tuple-variant enum the rest of the crate matches on.

use serde::{Deserialize, Serialize};

use crate::{Changeset, Operation};

#[derive(Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub(crate) enum OperationWire {
    Keep(usize),
    Add(String),
    Remove(usize),
}

impl From<Operation> for OperationWire {
    fn from(operation: Operation) -> Self {
        match operation {
            Operation::Keep(n) => OperationWire::Keep(n),
            Operation::Add(s) => OperationWire::Add(s),
            Operation::Remove(n) => OperationWire::Remove(n),
        }
    }
}

impl From<OperationWire> for Operation {
    fn from(wire: OperationWire) -> Self {
        match wire {
            OperationWire::Keep(n) => Operation::Keep(n),
            OperationWire::Add(s) => Operation::Add(s),
            OperationWire::Remove(n) => Operation::Remove(n),
        }
    }
}

#[derive(Serialize, Deserialize)]
pub(crate) struct ChangesetWire {
    operations: Vec<OperationWire>,
}

impl From<Changeset> for ChangesetWire {
    fn from(changeset: Changeset) -> Self {
        Self {
            operations: changeset.operations().iter().cloned().map(Into::into).collect(),
        }
    }
}

impl From<ChangesetWire> for Changeset {
    fn from(wire: ChangesetWire) -> Self {
        Changeset::new(wire.operations.into_iter().map(Into::into))
    }
}

/// Encode `changeset` as a [`serde_json::Value`] in the `{"operations": [...]}`
/// wire shape.
///
/// Infallible: every in-memory [`Changeset`] can be represented on the wire.
#[must_use]
pub fn encode(changeset: &Changeset) -> serde_json::Value {
    serde_json::to_value(ChangesetWire::from(changeset.clone()))
        .expect("ChangesetWire only contains types that always serialize")
}

/// Decode a changeset from its JSON wire representation.
///
/// # Errors
///
/// Returns [`crate::ReconcileError::Decode`] if `json` is not valid JSON, is
/// missing the `operations` array, carries an unrecognized `"type"` tag, or
/// pairs a `"type"` with a `"value"` of the wrong JSON type (for example a
/// string `"value"` under `"type": "keep"`).
///
/// Decoded operations are canonicalized the same way [`Changeset::new`]
/// canonicalizes a manually built list, so a wire payload with adjacent
/// same-kind operations or zero-length operations still round-trips to a
/// valid changeset.
pub fn decode(json: &str) -> Result<Changeset, crate::ReconcileError> {
    let wire: ChangesetWire = serde_json::from_str(json)?;
    Ok(Changeset::from(wire))
}
