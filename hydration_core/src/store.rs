//! The Annotation Store and view-record Compressor (`spec.md` §4.6).

use crate::wire::{Annotation, ViewRecord};
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;

/// The ordered table of per-component annotations that becomes the
/// `nghData` transfer-state payload (`spec.md` §3, §6).
///
/// Keys are assigned in first-seen order starting at zero. Two component
/// instances that produce byte-for-byte identical annotations are
/// assigned the *same* key (`spec.md` §8, scenario 5: two instances of
/// the same nested component share one `ngh`), which is why lookups are
/// keyed on the [`Annotation`] value rather than on instance identity.
#[derive(Debug, Default)]
pub struct AnnotationStore {
    table: Vec<Annotation>,
    lookup: FxHashMap<Annotation, usize>,
}

impl AnnotationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `annotation`, returning its key. Reuses an existing key if
    /// an identical annotation was already recorded.
    pub fn push(&mut self, annotation: Annotation) -> usize {
        if let Some(&key) = self.lookup.get(&annotation) {
            return key;
        }
        let key = self.table.len();
        self.lookup.insert(annotation.clone(), key);
        self.table.push(annotation);
        key
    }

    /// Finalizes the store into the `{ "0": ..., "1": ... }` wire table.
    pub fn into_table(self) -> BTreeMap<usize, Annotation> {
        self.table.into_iter().enumerate().collect()
    }

    /// The number of distinct annotations recorded so far.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

/// Collapses consecutive structurally-equal [`ViewRecord`]s into one with
/// a run-length `multiplicity`, leaving singletons with `multiplicity:
/// None` (`spec.md` §4.6: "structurally equal, ignoring any existing
/// `x`"; "omitted for a run of one").
pub fn compress_views(views: Vec<ViewRecord>) -> Vec<ViewRecord> {
    let mut out: Vec<ViewRecord> = Vec::with_capacity(views.len());
    for view in views {
        if let Some(last) = out.last_mut() {
            if last.same_shape(&view) {
                last.multiplicity = Some(last.multiplicity.unwrap_or(1) + 1);
                continue;
            }
        }
        out.push(view);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(template: &str) -> ViewRecord {
        ViewRecord {
            template: template.to_string(),
            num_root_nodes: 1,
            multiplicity: None,
            annotation: Annotation::empty(),
        }
    }

    #[test]
    fn store_assigns_sequential_keys() {
        let mut store = AnnotationStore::new();
        let mut a = Annotation::empty();
        a.templates.insert(0, "t0".into());
        let mut b = Annotation::empty();
        b.templates.insert(0, "t1".into());
        assert_eq!(store.push(a), 0);
        assert_eq!(store.push(b), 1);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn store_reuses_key_for_identical_annotation() {
        let mut store = AnnotationStore::new();
        let mut a = Annotation::empty();
        a.templates.insert(0, "t0".into());
        assert_eq!(store.push(a.clone()), 0);
        assert_eq!(store.push(a), 0);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn compress_collapses_identical_runs() {
        let views = vec![record("t0"), record("t0"), record("t0"), record("t1")];
        let compressed = compress_views(views);
        assert_eq!(compressed.len(), 2);
        assert_eq!(compressed[0].multiplicity, Some(3));
        assert_eq!(compressed[1].multiplicity, None);
    }

    #[test]
    fn compress_leaves_singleton_runs_unmarked() {
        let views = vec![record("t0"), record("t1"), record("t0")];
        let compressed = compress_views(views);
        assert_eq!(compressed.len(), 3);
        assert!(compressed.iter().all(|v| v.multiplicity.is_none()));
    }

    #[test]
    fn compress_ignores_pre_existing_multiplicity_when_comparing() {
        let mut a = record("t0");
        a.multiplicity = Some(5);
        let b = record("t0");
        let compressed = compress_views(vec![a, b]);
        assert_eq!(compressed.len(), 1);
        assert_eq!(compressed[0].multiplicity, Some(2));
    }
}
