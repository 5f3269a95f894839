//! The Container Serializer (`spec.md` §4.5).

use crate::{
    error::SerializeError,
    store::{compress_views, AnnotationStore},
    template_registry::TemplateIdentityRegistry,
    view_serializer::{serialize_view, HostAssignment},
    wire::{Annotation, ContainerRecord, ViewRecord},
};
use view_tree::{collect_root_nodes, DomNode, LView, Slot, SlotIndex, ViewTreeReader};

/// Serializes the view container living at `index` of `view` into a
/// [`ContainerRecord`] (`spec.md` §4.5).
///
/// `host` is the enclosing component host, forwarded to every plain
/// embedded view (a view container's plain entries share their parent's
/// component boundary; only an entry that is itself a component gets a
/// new one). Entries are walked in order; `EmbeddedView::RootView`
/// wrappers are unwrapped the same way `Plain` entries are, this crate's
/// view-tree model carries no extra DOM wrapper for them to skip.
#[cfg_attr(
    any(debug_assertions, feature = "diagnostics"),
    tracing::instrument(level = "trace", skip_all)
)]
pub fn serialize_container<D: DomNode>(
    view: &impl ViewTreeReader<D>,
    index: SlotIndex,
    host: &D,
    registry: &mut TemplateIdentityRegistry,
    store: &mut AnnotationStore,
    host_assignments: &mut Vec<HostAssignment<D>>,
) -> Result<ContainerRecord, SerializeError> {
    let Some(Slot::Container(container)) = view.slot(index) else {
        return Err(SerializeError::StructuralAssumptionViolated {
            slot: index.0,
            detail: "classifier reported a container slot that isn't one".into(),
        });
    };

    let default_tview = view.embedded_tview(index);
    let mut records = Vec::with_capacity(container.views.len());

    for (position, embedded) in container.views.iter().enumerate() {
        let inner = embedded.view();
        let first = first_dom_node(inner, index)?;
        let stop = container
            .views
            .get(position + 1)
            .map(|next| first_dom_node(next.view(), index))
            .transpose()?;
        let num_root_nodes = collect_root_nodes(&first, stop.as_ref()).len();

        if let Some(selector) = inner.selector() {
            let template = selector.to_string();
            let inner_host =
                inner
                    .host()
                    .ok_or_else(|| SerializeError::MissingHostAnchor {
                        selector: template.clone(),
                    })?;
            let annotation = serialize_view(inner, inner_host, registry, store, host_assignments)?;
            let key = store.push(annotation);
            host_assignments.push(HostAssignment {
                host: inner_host.clone(),
                key,
                selector: selector.clone(),
            });
            records.push(ViewRecord {
                template,
                num_root_nodes,
                multiplicity: None,
                annotation: Annotation::empty(),
            });
        } else {
            let template = match &default_tview {
                Some(tview) => registry.id_for(tview).0,
                None => {
                    return Err(SerializeError::StructuralAssumptionViolated {
                        slot: index.0,
                        detail: "embedded view has no component selector and no embedded tView"
                            .into(),
                    });
                }
            };
            let annotation = serialize_view(inner, host, registry, store, host_assignments)?;
            records.push(ViewRecord {
                template,
                num_root_nodes,
                multiplicity: None,
                annotation,
            });
        }
    }

    Ok(ContainerRecord {
        views: compress_views(records),
        num_root_nodes: None,
    })
}

/// The first DOM node belonging to `view`, used as the start of the
/// `numRootNodes` walk for its entry in the container.
fn first_dom_node<D: DomNode>(
    view: &LView<D>,
    container_slot: SlotIndex,
) -> Result<D, SerializeError> {
    for raw in view.slot_range() {
        if let Some(Slot::Dom(dom)) = view.slot(SlotIndex(raw)) {
            return Ok(dom.clone());
        }
    }
    Err(SerializeError::StructuralAssumptionViolated {
        slot: container_slot.0,
        detail: "embedded view has no DOM root node".into(),
    })
}
