//! View-Slot Classifier (`spec.md` §4.2).
//!
//! [`classify_slot`] checks the rows of the classifier table in order and
//! stops at the first match, exactly as the table specifies. Most rows
//! fully handle themselves (recording a path or a self-contained
//! container record); the two rows that need more than this function can
//! do alone, a real view container, and a nested component host, are
//! reported back to the [`crate::view_serializer`] as a [`SlotOutcome`].

use crate::{
    path::{path, Anchor, Path},
    wire::{Annotation, ContainerRecord},
};
use view_tree::{
    collect_root_nodes, DomNode, ProjectionHead, Slot, SlotIndex, TNode, TNodeType, ViewTreeReader,
};

/// What the caller still needs to do after a slot has been classified.
pub enum SlotOutcome<D: DomNode> {
    /// The row fully handled itself; nothing further to do for this slot.
    Handled,
    /// Row 3: a real view container lives here. `anchor` is its comment
    /// node, already recorded as the target of `nodes[index]` (if a path
    /// was needed), the caller still owns running the Container
    /// Serializer and filling in `containers[index]`/`templates[index]`.
    Container { index: SlotIndex, anchor: D },
    /// Row 4: a nested component host lives here. The caller serializes
    /// it as an independent annotation root.
    ComponentHost { index: SlotIndex },
}

/// Classifies slot `index` of `view`, mutating `annotation` in place for
/// every row that can be fully handled here, and returning the rest.
///
/// `host` is the DOM element of the nearest enclosing component, the
/// anchor a path resolves to when a slot has no in-view parent
/// (`spec.md` §4.1: the `"host"` path head).
#[cfg_attr(
    any(debug_assertions, feature = "diagnostics"),
    tracing::instrument(level = "trace", skip_all)
)]
pub fn classify_slot<D: DomNode>(
    view: &impl ViewTreeReader<D>,
    host: &D,
    index: SlotIndex,
    annotation: &mut Annotation,
) -> SlotOutcome<D> {
    let header_offset = view.tview().header_offset;

    let tnode = match view.tview().tnode(index) {
        // Row 1: local-reference slot.
        None => return SlotOutcome::Handled,
        Some(tnode) => tnode,
    };

    // Row 2: projection head.
    if let Some(heads) = &tnode.projection {
        for head in heads.iter().flatten() {
            if let ProjectionHead::Content(content_slot) = head {
                if let Some(Slot::Dom(dom)) = view.slot(*content_slot) {
                    let dom = dom.clone();
                    let anchor_slot = view.tview().tnode(*content_slot).and_then(|t| t.parent);
                    emit_path(view, host, header_offset, anchor_slot, *content_slot, &dom, annotation);
                }
            }
        }
        return SlotOutcome::Handled;
    }

    // Row 3: view container.
    if let Some(Slot::Container(container)) = view.slot(index) {
        let anchor_dom = container.anchor.clone();
        emit_path(view, host, header_offset, tnode.parent, index, &anchor_dom, annotation);
        return SlotOutcome::Container {
            index,
            anchor: anchor_dom,
        };
    }

    // Row 4: nested component host.
    if matches!(view.slot(index), Some(Slot::View(_))) {
        return SlotOutcome::ComponentHost { index };
    }

    // Row 5: i18n create-opcodes.
    if !tnode.i18n_create_opcodes.is_empty() {
        for opcode in &tnode.i18n_create_opcodes {
            if let Some(Slot::Dom(dom)) = view.slot(opcode.node) {
                let dom = dom.clone();
                emit_path(view, host, header_offset, Some(opcode.parent), opcode.node, &dom, annotation);
            }
        }
        return SlotOutcome::Handled;
    }

    // Row 6: i18n-relocated root.
    if tnode.insert_before_head().is_some() {
        if let Some(Slot::Dom(dom)) = view.slot(index) {
            let dom = dom.clone();
            emit_path(view, host, header_offset, tnode.parent, index, &dom, annotation);
        }
        return SlotOutcome::Handled;
    }

    // Row 7: <ng-container> (element container). `anchor_dom` is the
    // container's opening comment marker; its content runs from the
    // marker's next sibling up to (not including) whatever static slot
    // follows the container.
    if tnode.node_type == TNodeType::ElementContainer {
        if let Some(Slot::Dom(anchor_dom)) = view.slot(index) {
            let stop = next_slot_dom(view, tnode);
            let num_root_nodes = match anchor_dom.next_sibling() {
                Some(first) => collect_root_nodes(&first, stop.as_ref()).len(),
                None => 0,
            };
            annotation.containers.insert(
                index.adjusted(header_offset).0,
                ContainerRecord {
                    views: Vec::new(),
                    num_root_nodes: Some(num_root_nodes),
                },
            );
        }
        return SlotOutcome::Handled;
    }

    // Row 8: projection marker.
    if tnode.node_type == TNodeType::Projection {
        if let Some(next_slot) = next_non_projection_sibling(view, tnode) {
            if let Some(Slot::Dom(dom)) = view.slot(next_slot) {
                let dom = dom.clone();
                emit_path(view, host, header_offset, tnode.parent, next_slot, &dom, annotation);
            }
        }
        return SlotOutcome::Handled;
    }

    // Row 9: plain element/text, possibly reprojected.
    if let Some(proj_next) = tnode.projection_next {
        if Some(proj_next) != tnode.next {
            if let Some(Slot::Dom(dom)) = view.slot(proj_next) {
                let dom = dom.clone();
                emit_path(view, host, header_offset, tnode.parent, proj_next, &dom, annotation);
            }
        }
    }

    SlotOutcome::Handled
}

/// Computes and records `nodes[key_slot] = path(anchor, target)`, where
/// `anchor` is the DOM node at `anchor_slot` (or `host`, if `anchor_slot`
/// is `None` or not yet a DOM node).
fn emit_path<D: DomNode>(
    view: &impl ViewTreeReader<D>,
    host: &D,
    header_offset: usize,
    anchor_slot: Option<SlotIndex>,
    key_slot: SlotIndex,
    target: &D,
    annotation: &mut Annotation,
) {
    let (anchor_kind, anchor_dom) = match anchor_slot {
        Some(slot) => match view.slot(slot) {
            Some(Slot::Dom(dom)) => (Anchor::Slot(slot.adjusted(header_offset)), dom.clone()),
            _ => (Anchor::Host, host.clone()),
        },
        None => (Anchor::Host, host.clone()),
    };
    let steps = path(&anchor_dom, target);
    let key = key_slot.adjusted(header_offset);
    annotation
        .nodes
        .insert(key.0, Path::new(anchor_kind, steps).to_string());
}

fn next_slot_dom<D: DomNode>(view: &impl ViewTreeReader<D>, tnode: &TNode) -> Option<D> {
    let next = tnode.next?;
    match view.slot(next) {
        Some(Slot::Dom(dom)) => Some(dom.clone()),
        _ => None,
    }
}

fn next_non_projection_sibling<D: DomNode>(
    view: &impl ViewTreeReader<D>,
    tnode: &TNode,
) -> Option<SlotIndex> {
    let mut current = tnode.next;
    while let Some(slot) = current {
        match view.tview().tnode(slot) {
            Some(t) if t.node_type == TNodeType::Projection => current = t.next,
            Some(_) => return Some(slot),
            None => return None,
        }
    }
    None
}
