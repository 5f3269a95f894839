#![deny(missing_docs)]

//! Server-side hydration annotation core.
//!
//! Given a read-only [`view_tree::ViewTreeReader`] over a rendered
//! component tree, this crate computes the annotation data a client needs
//! to hydrate without re-walking the DOM from scratch: per-component
//! `ngh` payloads describing wherever the client's static expectations
//! (projection, `*ngFor`-style containers, i18n reordering) diverge from
//! a plain first-child/next-sibling walk.
//!
//! The pipeline, in the order the modules are applied:
//! 1. [`path`], computes a navigation path between two known DOM nodes.
//! 2. [`classify`], decides what (if anything) a given slot needs.
//! 3. [`container_serializer`] and [`view_serializer`], recursively walk
//!    a view tree, producing one [`wire::Annotation`] per component.
//! 4. [`template_registry`], mints stable template identities as it goes.
//! 5. [`store`], collects and deduplicates every component's annotation,
//!    and compresses repeated view-container entries.
//! 6. [`host_writer`], the only place this crate touches a DOM node
//!    destructively, writing the `ngh` and `ng-server-context` attributes.

mod classify;
mod container_serializer;
mod view_serializer;

pub mod config;
pub mod error;
pub mod host_writer;
pub mod path;
pub mod store;
pub mod template_registry;
pub mod wire;

pub use error::SerializeError;
pub use store::AnnotationStore;
pub use template_registry::{TemplateIdentityRegistry, TemplateOrigin};
pub use view_serializer::{serialize_view, HostAssignment};

use oco_ref::Oco;
use view_tree::{DomNode, ViewTreeReader};

/// Serializes an entire render, starting from its root component.
///
/// Equivalent to calling [`serialize_view`] directly and then pushing the
/// result onto the store yourself, except it also folds in the root's
/// own [`HostAssignment`], the root component needs an `ngh` just like
/// any component reached by descending into the tree (`spec.md` §4.7).
///
/// Returns the finished [`AnnotationStore`] (ready for
/// [`AnnotationStore::into_table`]) and every host that needs an `ngh`
/// attribute written, root included.
#[cfg_attr(
    any(debug_assertions, feature = "diagnostics"),
    tracing::instrument(level = "trace", skip_all)
)]
pub fn serialize_root<D: DomNode>(
    root: &impl ViewTreeReader<D>,
    root_host: &D,
    root_selector: Oco<'static, str>,
) -> Result<(AnnotationStore, Vec<HostAssignment<D>>), SerializeError> {
    let mut registry = TemplateIdentityRegistry::new();
    let mut store = AnnotationStore::new();
    let mut assignments = Vec::new();

    let annotation = serialize_view(root, root_host, &mut registry, &mut store, &mut assignments)?;
    let key = store.push(annotation);
    assignments.push(HostAssignment {
        host: root_host.clone(),
        key,
        selector: root_selector,
    });

    Ok((store, assignments))
}

#[cfg(test)]
mod tests {
    use super::*;
    use view_tree::{fixtures::FakeDom, LView, TNode, TNodeType, TView, TViewRef, ViewKind};

    #[test]
    fn root_component_is_assigned_a_key() {
        let tview = TViewRef::new(TView {
            header_offset: 0,
            binding_start_index: 1,
            nodes: vec![Some(TNode {
                node_type: TNodeType::Text,
                parent: None,
                next: None,
                projection_next: None,
                projection: None,
                i18n_create_opcodes: Vec::new(),
                insert_before_index: Vec::new(),
                embedded_tview: None,
            })],
            component_selector: Some("app-root".into()),
        });
        let host = FakeDom::leaf("root-host");
        let text = FakeDom::leaf("text");
        let root = LView::new(
            tview,
            vec![view_tree::Slot::Dom(text)],
            ViewKind::Component {
                selector: "app-root".into(),
                host: host.clone(),
            },
        );

        let (store, assignments) = serialize_root(&root, &host, "app-root".into()).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(assignments.len(), 1);
        assert_eq!(assignments[0].key, 0);
        assert_eq!(assignments[0].host, host);
    }
}
