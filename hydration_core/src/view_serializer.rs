//! The View Serializer (`spec.md` §4.4).

use crate::{
    classify::{classify_slot, SlotOutcome},
    container_serializer::serialize_container,
    error::SerializeError,
    store::AnnotationStore,
    template_registry::TemplateIdentityRegistry,
    wire::Annotation,
};
use oco_ref::Oco;
use view_tree::{DomNode, Slot, SlotIndex, ViewTreeReader};

/// A component host discovered while serializing, paired with the store
/// key its own annotation was assigned.
///
/// Produced for every component instance encountered during a walk,
/// including nested ones reached through a view container, so the
/// caller can attach `ngh="<key>"` to the right DOM element afterward
/// (`spec.md` §4.7). This crate never mutates DOM nodes itself; see
/// [`crate::host_writer`].
#[derive(Debug, Clone)]
pub struct HostAssignment<D: DomNode> {
    /// The component instance's host DOM element.
    pub host: D,
    /// The key under which this instance's annotation was stored.
    pub key: usize,
    /// The component's tag/selector string.
    pub selector: Oco<'static, str>,
}

/// Walks every classifiable slot of `view` and produces its [`Annotation`]
/// (`spec.md` §4.4).
///
/// `host` is the DOM element of the nearest enclosing component, never
/// `view`'s own host unless `view` itself is a component (paths never
/// cross a component boundary, `spec.md` §3). Every component instance
/// reached while descending, directly nested, or found inside a view
/// container, is serialized as its own annotation, pushed onto `store`,
/// and recorded in `host_assignments`.
#[cfg_attr(
    any(debug_assertions, feature = "diagnostics"),
    tracing::instrument(level = "trace", skip_all)
)]
pub fn serialize_view<D: DomNode>(
    view: &impl ViewTreeReader<D>,
    host: &D,
    registry: &mut TemplateIdentityRegistry,
    store: &mut AnnotationStore,
    host_assignments: &mut Vec<HostAssignment<D>>,
) -> Result<Annotation, SerializeError> {
    let mut annotation = Annotation::empty();
    let header_offset = view.tview().header_offset;

    for raw in view.slot_range() {
        let index = SlotIndex(raw);
        match classify_slot(view, host, index, &mut annotation) {
            SlotOutcome::Handled => {}

            SlotOutcome::Container { index, .. } => {
                let default_template = view.embedded_tview(index);
                let record = serialize_container(view, index, host, registry, store, host_assignments)?;

                if let Some(tview) = &default_template {
                    let (id, _origin) = registry.id_for(tview);
                    annotation
                        .templates
                        .insert(index.adjusted(header_offset).0, id);
                }
                annotation
                    .containers
                    .insert(index.adjusted(header_offset).0, record);
            }

            SlotOutcome::ComponentHost { index } => {
                let Some(Slot::View(inner)) = view.slot(index) else {
                    return Err(SerializeError::StructuralAssumptionViolated {
                        slot: index.0,
                        detail: "classifier reported a component host slot with no view".into(),
                    });
                };
                let selector = inner.selector().cloned().ok_or_else(|| {
                    SerializeError::StructuralAssumptionViolated {
                        slot: index.0,
                        detail: "nested component view has no selector".into(),
                    }
                })?;
                let inner_host =
                    inner
                        .host()
                        .ok_or_else(|| SerializeError::MissingHostAnchor {
                            selector: selector.to_string(),
                        })?;

                let inner_annotation =
                    serialize_view(inner, inner_host, registry, store, host_assignments)?;
                let key = store.push(inner_annotation);
                host_assignments.push(HostAssignment {
                    host: inner_host.clone(),
                    key,
                    selector,
                });
            }
        }
    }

    Ok(annotation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use view_tree::{fixtures::FakeDom, LView, TNode, TNodeType, TView, TViewRef, ViewKind};

    fn bare_tview(nodes: Vec<Option<TNode>>) -> TViewRef {
        TViewRef::new(TView {
            header_offset: 0,
            binding_start_index: nodes.len(),
            nodes,
            component_selector: None,
        })
    }

    fn text_node() -> TNode {
        TNode {
            node_type: TNodeType::Text,
            parent: None,
            next: None,
            projection_next: None,
            projection: None,
            i18n_create_opcodes: Vec::new(),
            insert_before_index: Vec::new(),
            embedded_tview: None,
        }
    }

    #[test]
    fn plain_view_with_no_reordering_yields_empty_annotation() {
        let tview = bare_tview(vec![Some(text_node())]);
        let host = FakeDom::leaf("host");
        let text = FakeDom::leaf("text");
        let view = LView::new(tview, vec![Slot::Dom(text)], ViewKind::Plain);

        let mut registry = TemplateIdentityRegistry::new();
        let mut store = AnnotationStore::new();
        let mut assignments = Vec::new();
        let annotation =
            serialize_view(&view, &host, &mut registry, &mut store, &mut assignments).unwrap();
        assert!(annotation.is_empty());
        assert!(assignments.is_empty());
    }

    #[test]
    fn nested_component_host_gets_its_own_store_entry() {
        let inner_tview = bare_tview(vec![Some(text_node())]);
        let inner_host = FakeDom::leaf("inner-host");
        let inner_text = FakeDom::leaf("inner-text");
        let inner = LView::new(
            inner_tview,
            vec![Slot::Dom(inner_text)],
            ViewKind::Component {
                selector: "app-widget".into(),
                host: inner_host.clone(),
            },
        );

        let outer_tview = bare_tview(vec![Some(text_node())]);
        let outer_host = FakeDom::leaf("outer-host");
        let outer = LView::new(outer_tview, vec![Slot::View(inner)], ViewKind::Plain);

        let mut registry = TemplateIdentityRegistry::new();
        let mut store = AnnotationStore::new();
        let mut assignments = Vec::new();
        let annotation = serialize_view(
            &outer,
            &outer_host,
            &mut registry,
            &mut store,
            &mut assignments,
        )
        .unwrap();

        assert!(annotation.is_empty());
        assert_eq!(assignments.len(), 1);
        assert_eq!(assignments[0].key, 0);
        assert_eq!(assignments[0].selector.as_ref(), "app-widget");
        assert_eq!(store.len(), 1);
    }
}
