use crate::tview::{SlotIndex, TViewRef};

/// The static classification of a slot's tree-node metadata (`spec.md` §3:
/// "node type (Element | Text | ElementContainer | Container | Projection
/// | I18n)").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TNodeType {
    /// A plain DOM element.
    Element,
    /// A text node.
    Text,
    /// An `<ng-container>`-style element container with no DOM node of
    /// its own, only an anchor comment.
    ElementContainer,
    /// A view container slot (`*ngIf`, `*ngFor`, and similar).
    Container,
    /// A content-projection marker (`<ng-content>`).
    Projection,
    /// A slot carrying i18n create-opcodes or reordering instructions.
    I18n,
}

/// One entry of a `tNode.projection` sequence (`spec.md` §4.2, second
/// classifier row).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectionHead {
    /// Concrete projected content anchored at this slot.
    Content(SlotIndex),
    /// A re-projection marker: this head forwards further, rather than
    /// terminating in real content, and is skipped by the classifier.
    Reprojection,
}

/// One i18n create-opcode: the client must locate `node` by first finding
/// `parent` and computing a path from there (`spec.md` §4.2, i18n block
/// row).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct I18nOpcode {
    /// The slot the client must locate first.
    pub parent: SlotIndex,
    /// The slot whose path is computed from `parent`.
    pub node: SlotIndex,
}

/// Static, per-slot tree-node metadata (`spec.md` §3's `TNode`).
///
/// A `None` value in `TView::nodes`, not this struct, represents the
/// local-reference slot case; every `TNode` that exists has a concrete
/// type.
#[derive(Debug, Clone)]
pub struct TNode {
    /// This slot's static classification.
    pub node_type: TNodeType,
    /// The enclosing slot in static template order, if any.
    pub parent: Option<SlotIndex>,
    /// The next slot in static template order.
    pub next: Option<SlotIndex>,
    /// The next slot in *projected* order, when it differs from `next`
    /// (`spec.md` §4.2, last classifier row).
    pub projection_next: Option<SlotIndex>,
    /// Present only on projection-head slots (`spec.md` §4.2, second
    /// classifier row). `None` for everything else, including plain
    /// projection markers (see `node_type == Projection`).
    pub projection: Option<Vec<Option<ProjectionHead>>>,
    /// i18n create-opcodes targeting this slot's subtree (`spec.md` §4.2,
    /// i18n block row). Empty when this slot carries no i18n content.
    pub i18n_create_opcodes: Vec<I18nOpcode>,
    /// i18n reordering: a non-empty sequence whose head, when present,
    /// gives the slot this node must be inserted before (`spec.md` §4.2,
    /// i18n-relocated-root row).
    pub insert_before_index: Vec<Option<SlotIndex>>,
    /// For a view-container slot, the template backing each embedded view
    /// unless overridden per-view by a component type (`spec.md` §4.5).
    pub embedded_tview: Option<TViewRef>,
}

impl TNode {
    /// The head of `insert_before_index`, if the sequence is non-empty and
    /// its first entry is non-null, the exact condition checked by the
    /// i18n-relocated-root classifier row (a non-null *head*, not just any
    /// non-null entry further in the sequence).
    pub fn insert_before_head(&self) -> Option<SlotIndex> {
        self.insert_before_index.first().copied().flatten()
    }
}
