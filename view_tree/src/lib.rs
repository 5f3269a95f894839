#![deny(missing_docs)]
#![allow(clippy::module_inception)]

//! Read-only view-tree abstraction for server-side hydration annotation.
//!
//! This crate models the shape `spec.md` §3 describes, slots, view
//! containers, embedded views, and the static `TView`/`TNode` metadata
//! that parallels them, without committing to any particular rendering
//! platform's actual layout. A platform adapter builds [`LView`]s (or any
//! other type implementing [`ViewTreeReader`]) from its own runtime
//! structures; everything in `hydration_core` is written against the
//! trait, not this crate's concrete types.
//!
//! The tree is read-only by contract: nothing here mutates a [`Slot`],
//! [`ViewContainer`], or [`TNode`] once built.

mod dom;
mod reader;
mod slot;
mod tnode;
mod tview;

pub use dom::{collect_root_nodes, DomNode};
pub use reader::ViewTreeReader;
pub use slot::{EmbeddedView, LView, Slot, ViewContainer, ViewKind};
pub use tnode::{I18nOpcode, ProjectionHead, TNode, TNodeType};
pub use tview::{AdjustedIndex, SlotIndex, TView, TViewRef};

#[cfg(any(test, feature = "testing"))]
pub mod fixtures;
