//! The annotation wire shape (`spec.md` §3, §6).
//!
//! These types are the JSON-round-trippable contract between server and
//! client: every field is a string, number, boolean, map, or sequence, and
//! the short keys (`n`/`c`/`t`, `v`/`r`/`x`, `i`/`r`) are exactly what
//! `spec.md` §6 specifies. Keep server and client in agreement on these
//! names if you ever rename the Rust fields.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A per-view annotation object (`spec.md` §3, "Annotation object").
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Annotation {
    /// Adjusted slot index -> navigation path string.
    #[serde(rename = "n", default, skip_serializing_if = "BTreeMap::is_empty")]
    pub nodes: BTreeMap<usize, String>,
    /// Adjusted slot index -> container record.
    #[serde(rename = "c", default, skip_serializing_if = "BTreeMap::is_empty")]
    pub containers: BTreeMap<usize, ContainerRecord>,
    /// Adjusted slot index -> template identity string.
    #[serde(rename = "t", default, skip_serializing_if = "BTreeMap::is_empty")]
    pub templates: BTreeMap<usize, String>,
}

impl Annotation {
    /// An annotation object with nothing recorded, the expected output
    /// for a view with no reordering at all (`spec.md` §8, scenario 1).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether this annotation carries no information at all.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.containers.is_empty() && self.templates.is_empty()
    }
}

/// A view container's serialized description (`spec.md` §3, "Container
/// Record").
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContainerRecord {
    #[serde(rename = "v", default)]
    pub views: Vec<ViewRecord>,
    /// Only present for element containers (`spec.md` §4.2).
    #[serde(rename = "r", default, skip_serializing_if = "Option::is_none")]
    pub num_root_nodes: Option<usize>,
}

/// One embedded view's record, extending [`Annotation`] with the fields
/// that identify and size it (`spec.md` §3, "View Record").
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ViewRecord {
    /// Template identity string, or a component selector.
    #[serde(rename = "i")]
    pub template: String,
    #[serde(rename = "r")]
    pub num_root_nodes: usize,
    /// Run-length multiplicity set by the compressor; always omitted or
    /// `>= 2` (`spec.md` §4.6).
    #[serde(rename = "x", default, skip_serializing_if = "Option::is_none")]
    pub multiplicity: Option<usize>,
    #[serde(flatten)]
    pub annotation: Annotation,
}

impl ViewRecord {
    /// Whether two records are structurally equal *ignoring* `multiplicity`
    ///, the equality the compressor uses to collapse runs (`spec.md`
    /// §4.6: "structurally equal, ignoring any existing `x`").
    pub fn same_shape(&self, other: &Self) -> bool {
        self.template == other.template
            && self.num_root_nodes == other.num_root_nodes
            && self.annotation == other.annotation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_annotation_serializes_to_empty_object() {
        let a = Annotation::empty();
        assert_eq!(serde_json::to_string(&a).unwrap(), "{}");
    }

    #[test]
    fn round_trips_through_json() {
        let mut a = Annotation::empty();
        a.nodes.insert(3, "host.firstChild".to_string());
        a.templates.insert(0, "t0".to_string());
        a.containers.insert(
            1,
            ContainerRecord {
                views: vec![ViewRecord {
                    template: "t0".into(),
                    num_root_nodes: 1,
                    multiplicity: Some(3),
                    annotation: Annotation::empty(),
                }],
                num_root_nodes: None,
            },
        );
        let json = serde_json::to_string(&a).unwrap();
        let back: Annotation = serde_json::from_str(&json).unwrap();
        assert_eq!(a, back);
    }

    #[test]
    fn view_records_compare_ignoring_multiplicity() {
        let base = ViewRecord {
            template: "t0".into(),
            num_root_nodes: 1,
            multiplicity: None,
            annotation: Annotation::empty(),
        };
        let mut with_x = base.clone();
        with_x.multiplicity = Some(4);
        assert!(base.same_shape(&with_x));
        assert_ne!(base, with_x);
    }
}
