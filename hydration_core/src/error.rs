//! Error taxonomy (`spec.md` §7).
//!
//! Category 1 ("Unreachable target") never reaches this type, it is
//! handled entirely inside [`crate::path::path`] by logging and degrading
//! to an empty path. What's here are the two categories that abort
//! serialization outright.

use thiserror::Error;

/// A fatal error raised while serializing a view tree (`spec.md` §7,
/// categories 2 and 3).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SerializeError {
    /// Category 2: a structural assumption about the view tree's shape
    /// didn't hold, e.g. an embedded `tView` reference was absent where
    /// one was required.
    #[error("structural assumption violated while serializing slot {slot}: {detail}")]
    StructuralAssumptionViolated { slot: usize, detail: String },

    /// Category 3: no DOM element could be located for a component host
    /// this view tree claims to have.
    #[error("no host element found for component {selector:?}")]
    MissingHostAnchor { selector: String },
}
