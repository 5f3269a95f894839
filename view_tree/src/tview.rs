use crate::tnode::TNode;
use oco_ref::Oco;
use std::rc::Rc;

/// A raw slot index within a view, counted from the start of the view's
/// slot array (includes the header offset, see [`AdjustedIndex`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlotIndex(pub usize);

/// A slot index adjusted by subtracting the view's header offset, as used
/// in the wire-format `nodes`/`containers`/`templates` maps (`spec.md`
/// §3: "mapping from *adjusted slot index* ... to ...").
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AdjustedIndex(pub usize);

impl SlotIndex {
    /// Subtracts `header_offset` to produce the adjusted index used in the
    /// wire format.
    pub fn adjusted(self, header_offset: usize) -> AdjustedIndex {
        AdjustedIndex(self.0.saturating_sub(header_offset))
    }
}

impl std::fmt::Display for AdjustedIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Static, per-slot metadata for one template, shared by every live view
/// instantiated from it (`spec.md` §3: "a `TView` describes static
/// per-slot metadata").
#[derive(Debug)]
pub struct TView {
    /// Index of the first slot that holds renderable content; slots before
    /// this are reserved for framework bookkeeping.
    pub header_offset: usize,
    /// Index one past the last slot eligible for classification; slots
    /// from here on hold reactive bindings, not tree structure.
    pub binding_start_index: usize,
    /// Per-slot static metadata, indexed the same way as the live view's
    /// slot array. `None` marks a local-reference slot (`spec.md` §4.2,
    /// first classifier row).
    pub nodes: Vec<Option<TNode>>,
    /// If this template backs a component, its selector string, used in
    /// place of a minted template id so that identical components reuse
    /// one identity across renders (`spec.md` §4.3).
    pub component_selector: Option<Oco<'static, str>>,
}

impl TView {
    /// Looks up the static metadata for a slot, if present.
    pub fn tnode(&self, slot: SlotIndex) -> Option<&TNode> {
        self.nodes.get(slot.0).and_then(|n| n.as_ref())
    }

    /// The range of slots the classifier should walk: `[headerOffset,
    /// bindingStartIndex)` (`spec.md` §4.2).
    pub fn classifiable_range(&self) -> std::ops::Range<usize> {
        self.header_offset..self.binding_start_index
    }
}

/// A stable, cheaply-cloned handle to a [`TView`].
///
/// Identity (not structural equality) is what matters here: two
/// `TViewRef`s referring to the same `Rc` back the same template, which is
/// exactly the invariant the Template Identity Registry relies on
/// (`spec.md` §4.3).
#[derive(Debug, Clone)]
pub struct TViewRef(pub Rc<TView>);

impl TViewRef {
    /// Wraps a [`TView`] for sharing across views and the registry.
    pub fn new(tview: TView) -> Self {
        Self(Rc::new(tview))
    }

    /// A stable identity key for this template, suitable for use as a hash
    /// map key by the Template Identity Registry.
    pub fn identity(&self) -> usize {
        Rc::as_ptr(&self.0) as usize
    }
}

impl std::ops::Deref for TViewRef {
    type Target = TView;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl PartialEq for TViewRef {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for TViewRef {}
