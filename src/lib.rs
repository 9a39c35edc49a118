//! Operational transformation core for concurrent plain-text editing.
//!
//! A [`Changeset`] is a canonical sequence of [`Operation`]s describing how
//! one text turns into another. Three functions form the whole algebra:
//!
//! - [`apply`] materializes a changeset against a concrete string.
//! - [`compose`] combines two sequential changesets into one equivalent
//!   changeset.
//! - [`transform`] reconciles two concurrent changesets built against the
//!   same base text into a pair safe to apply in either order.
//!
//! All lengths are measured in UTF-16 code units, matching the offset
//! convention most collaborative-editing surfaces (CodeMirror, Monaco,
//! `contenteditable`) already use.

mod apply;
mod changeset;
mod compose;
mod errors;
mod operation;
mod transform;
mod walk;
#[cfg(feature = "serde")]
mod wire;

pub use apply::apply;
pub use changeset::Changeset;
pub use compose::compose;
pub use errors::ReconcileError;
pub use operation::Operation;
pub use transform::transform;
#[cfg(feature = "serde")]
pub use wire::{decode, encode};

#[cfg(feature = "wasm")]
pub mod wasm;
