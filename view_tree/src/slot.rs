use crate::{dom::DomNode, tview::TViewRef};
use oco_ref::Oco;

/// What a single dynamic slot of a live view currently holds (`spec.md`
/// §3: "Each slot holds one of: a DOM node reference, a view container
/// ..., a nested view ..., or a tree-node metadata record").
///
/// The `TNode` case isn't represented here: it lives in the parallel
/// `TView`, not in the live, per-instance slot array.
pub enum Slot<D: DomNode> {
    /// A concrete DOM node produced for this slot.
    Dom(D),
    /// An embedded view container (`spec.md` glossary: "an ordered
    /// sequence of embedded views anchored at a comment node").
    Container(ViewContainer<D>),
    /// A nested view, structurally identical to the enclosing one.
    View(LView<D>),
    /// A local-reference slot, or any slot with no live value yet.
    Empty,
}

/// An ordered sequence of embedded views, anchored at a comment node in the
/// DOM (`spec.md` glossary: "View container").
pub struct ViewContainer<D: DomNode> {
    /// The comment node the client uses to locate this container.
    pub anchor: D,
    /// The container's embedded views, in rendering order.
    pub views: Vec<EmbeddedView<D>>,
}

/// One entry of a view container.
///
/// `RootView` marks the "root view wrapper" the Container Serializer must
/// unwrap before inspecting the underlying view (`spec.md` §4.5, step 1).
pub enum EmbeddedView<D: DomNode> {
    /// An ordinary embedded view.
    Plain(LView<D>),
    /// A view wrapped in an extra "root view" layer that must be
    /// unwrapped before the underlying view is inspected.
    RootView(LView<D>),
}

impl<D: DomNode> EmbeddedView<D> {
    /// Unwraps to the underlying view regardless of wrapper.
    pub fn view(&self) -> &LView<D> {
        match self {
            EmbeddedView::Plain(v) | EmbeddedView::RootView(v) => v,
        }
    }

    /// Whether this entry is a root-view wrapper (`spec.md` §4.5, step 1).
    pub fn is_root_view(&self) -> bool {
        matches!(self, EmbeddedView::RootView(_))
    }
}

/// Whether, and as what, a live view hosts a component.
pub enum ViewKind<D: DomNode> {
    /// An embedded view with no component of its own.
    Plain,
    /// A view that is itself a component instance, anchored at `host`.
    /// `selector` is the component's tag/selector string, used by the
    /// Template Identity Registry and the Host Annotation Writer.
    Component {
        /// The component's tag/selector string.
        selector: Oco<'static, str>,
        /// The component instance's host DOM element.
        host: D,
    },
}

/// A live view: the dynamic half of `spec.md` §3's view tree, paired with
/// its static [`TViewRef`].
pub struct LView<D: DomNode> {
    /// The static template this view was instantiated from.
    pub tview: TViewRef,
    /// The dynamic slot array, parallel to `tview`'s `TNode` array.
    pub slots: Vec<Slot<D>>,
    /// Whether this view is a component instance or a plain embedded view.
    pub kind: ViewKind<D>,
}

impl<D: DomNode> LView<D> {
    /// Builds a live view from its static template, slot array, and kind.
    pub fn new(tview: TViewRef, slots: Vec<Slot<D>>, kind: ViewKind<D>) -> Self {
        Self { tview, slots, kind }
    }

    /// The host DOM element for this view, if it is a component.
    pub fn host(&self) -> Option<&D> {
        match &self.kind {
            ViewKind::Component { host, .. } => Some(host),
            ViewKind::Plain => None,
        }
    }

    /// The component selector, if this view is a component instance.
    pub fn selector(&self) -> Option<&Oco<'static, str>> {
        match &self.kind {
            ViewKind::Component { selector, .. } => Some(selector),
            ViewKind::Plain => None,
        }
    }
}
