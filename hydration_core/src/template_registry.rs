//! Template Identity Registry (`spec.md` §4.3).

use rustc_hash::FxHashMap;
use view_tree::TViewRef;

/// Whether a call to [`TemplateIdentityRegistry::id_for`] minted a fresh
/// id or reused one minted earlier for the same `tView`.
///
/// This distinguishes the *definition* site of a template, the first
/// place a given `tView` is serialized, from an *insertion* site that
/// reuses it, which is exactly the property `spec.md` §8 scenario 6
/// (cross-template outlets) requires: both sites end up pointing at one
/// identity string, minted once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateOrigin {
    /// This call minted a fresh id; `tview` had not been seen before.
    Definition,
    /// This call reused an id minted by an earlier call for the same
    /// `tview`.
    Insertion,
}

/// Mints and caches stable `t<N>` ids for embedded templates within one
/// render (`spec.md` §4.3).
///
/// Per `spec.md` §9 ("No globals"), one registry belongs to one render,
/// never shared across concurrent renders in the same process.
#[derive(Debug, Default)]
pub struct TemplateIdentityRegistry {
    next_id: usize,
    ids: FxHashMap<usize, String>,
}

impl TemplateIdentityRegistry {
    /// Creates an empty registry for a new render.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the stable identity string for `tview`, minting one on
    /// first use. A component's own template always returns its selector
    /// (`spec.md` §4.3: "Component hosts use the component's selector
    /// string instead of a minted id").
    pub fn id_for(&mut self, tview: &TViewRef) -> (String, TemplateOrigin) {
        if let Some(selector) = &tview.component_selector {
            return (selector.to_string(), TemplateOrigin::Insertion);
        }

        let key = tview.identity();
        if let Some(existing) = self.ids.get(&key) {
            return (existing.clone(), TemplateOrigin::Insertion);
        }

        let id = format!("t{}", self.next_id);
        self.next_id += 1;
        self.ids.insert(key, id.clone());
        (id, TemplateOrigin::Definition)
    }
}
