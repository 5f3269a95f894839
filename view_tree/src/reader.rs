use crate::{
    dom::DomNode,
    slot::{LView, Slot},
    tview::{SlotIndex, TView, TViewRef},
};

/// The exact surface a serializer is allowed to depend on when walking a
/// view tree.
///
/// Design note (`spec.md` §9, "Opaque view-tree layout"): the real
/// framework's slot array has conventions specific to its runtime. This
/// trait is the seam that isolates the rest of the crate from that layout
///, everything downstream takes `impl ViewTreeReader<D>` rather than
/// reaching into a concrete view struct.
pub trait ViewTreeReader<D: DomNode> {
    /// Static per-slot metadata for this view.
    fn tview(&self) -> &TView;

    /// The dynamic value currently held by a slot, or `None` if the index
    /// is out of range for this view.
    fn slot(&self, index: SlotIndex) -> Option<&Slot<D>>;

    /// The slot range the classifier should walk, `[headerOffset,
    /// bindingStartIndex)`.
    fn slot_range(&self) -> std::ops::Range<usize> {
        self.tview().classifiable_range()
    }

    /// The embedded template backing a view-container slot's entries,
    /// absent a per-view component override (`spec.md` §4.5).
    fn embedded_tview(&self, index: SlotIndex) -> Option<TViewRef> {
        self.tview().tnode(index).and_then(|n| n.embedded_tview.clone())
    }
}

impl<D: DomNode> ViewTreeReader<D> for LView<D> {
    fn tview(&self) -> &TView {
        &self.tview
    }

    fn slot(&self, index: SlotIndex) -> Option<&Slot<D>> {
        self.slots.get(index.0)
    }
}
