//! The DOM Path Computer (`spec.md` §4.1).

use smallvec::{smallvec, SmallVec};
use std::{fmt, str::FromStr};
use view_tree::{AdjustedIndex, DomNode};

/// One step of DOM navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    /// Move to the current node's first child.
    FirstChild,
    /// Move to the current node's next sibling.
    NextSibling,
}

impl Step {
    const fn as_str(self) -> &'static str {
        match self {
            Step::FirstChild => "firstChild",
            Step::NextSibling => "nextSibling",
        }
    }
}

/// The head of a path string: either the containing component's host
/// element, or an intra-view parent slot (`spec.md` §4.1, "Result
/// encoding").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    /// The nearest enclosing component's host element.
    Host,
    /// An intra-view slot, already adjusted for the header offset.
    Slot(AdjustedIndex),
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Anchor::Host => write!(f, "host"),
            Anchor::Slot(i) => write!(f, "{i}"),
        }
    }
}

/// A `dot`-joined navigation path from an anchor to a target node
/// (`spec.md` §4.1, §6: "Path string grammar").
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path {
    /// Where navigation starts.
    pub anchor: Anchor,
    /// The steps taken from `anchor` to reach the target.
    pub steps: SmallVec<[Step; 4]>,
}

impl Path {
    /// Builds a path from an anchor and an explicit step sequence.
    pub fn new(anchor: Anchor, steps: SmallVec<[Step; 4]>) -> Self {
        Self { anchor, steps }
    }

    /// A path with no steps, the result for `a == b`, and the degraded
    /// result used when the precondition of [`path`] is violated.
    pub fn empty(anchor: Anchor) -> Self {
        Self {
            anchor,
            steps: smallvec![],
        }
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.anchor)?;
        for step in &self.steps {
            write!(f, ".{}", step.as_str())?;
        }
        Ok(())
    }
}

/// Error returned by [`Path`]'s `FromStr` impl when a wire-format path
/// string doesn't match the grammar in `spec.md` §6.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("malformed path string: {0:?}")]
pub struct PathParseError(String);

impl FromStr for Path {
    type Err = PathParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split('.');
        let anchor = match parts.next() {
            Some("host") => Anchor::Host,
            Some(digits) => digits
                .parse::<usize>()
                .map(|i| Anchor::Slot(AdjustedIndex(i)))
                .map_err(|_| PathParseError(s.to_string()))?,
            None => return Err(PathParseError(s.to_string())),
        };
        let mut steps = smallvec![];
        for part in parts {
            steps.push(match part {
                "firstChild" => Step::FirstChild,
                "nextSibling" => Step::NextSibling,
                _ => return Err(PathParseError(s.to_string())),
            });
        }
        Ok(Path { anchor, steps })
    }
}

/// Raised internally while computing steps between two DOM nodes; never
/// escapes [`path`], which downgrades it to a logged warning and an empty
/// result (`spec.md` §4.1, "Failure semantics"; §7, category 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PathComputeError {
    Unreachable,
}

/// Computes the step sequence from `a` to `b` (`spec.md` §4.1,
/// "Algorithm").
///
/// Precondition: `b` is reachable from `a` by forward-only in-order
/// traversal. Violating it (an overshot sibling walk, or a parent pointer
/// going null before convergence) is logged and degrades to an empty
/// sequence rather than propagating an error, hydration mismatches are
/// reported precisely on the client instead (`spec.md` §7, category 1).
#[cfg_attr(
    any(debug_assertions, feature = "diagnostics"),
    tracing::instrument(level = "trace", skip_all)
)]
pub fn path<D: DomNode>(a: &D, b: &D) -> SmallVec<[Step; 4]> {
    match compute_steps(a, b) {
        Ok(steps) => steps,
        Err(PathComputeError::Unreachable) => {
            tracing::warn!(
                "hydration path computation could not reach target node; \
                 recording an empty path, client hydration will report a \
                 mismatch here"
            );
            smallvec![]
        }
    }
}

fn compute_steps<D: DomNode>(a: &D, b: &D) -> Result<SmallVec<[Step; 4]>, PathComputeError> {
    if a == b {
        return Ok(smallvec![]);
    }

    let a_parent = a.parent();
    let b_parent = b.parent();

    if let (Some(ap), Some(bp)) = (&a_parent, &b_parent) {
        if ap == bp {
            return walk_siblings(a, b);
        }
    }

    let b_parent = b_parent.ok_or(PathComputeError::Unreachable)?;
    let mut steps = compute_steps(a, &b_parent)?;
    steps.push(Step::FirstChild);

    let first_child = b_parent
        .first_child()
        .ok_or(PathComputeError::Unreachable)?;
    if first_child != *b {
        steps.extend(compute_steps(&first_child, b)?);
    }
    Ok(steps)
}

fn walk_siblings<D: DomNode>(a: &D, b: &D) -> Result<SmallVec<[Step; 4]>, PathComputeError> {
    let mut steps = smallvec![];
    let mut current = a.clone();
    loop {
        match current.next_sibling() {
            Some(next) => {
                steps.push(Step::NextSibling);
                if next == *b {
                    return Ok(steps);
                }
                current = next;
            }
            None => return Err(PathComputeError::Unreachable),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use view_tree::fixtures::FakeDom;

    #[test]
    fn same_node_is_empty() {
        let a = FakeDom::leaf("a");
        assert!(path(&a, &a).is_empty());
    }

    #[test]
    fn siblings_walk_forward() {
        let root = FakeDom::with_children(
            "root",
            [FakeDom::leaf("a"), FakeDom::leaf("b"), FakeDom::leaf("c")],
        );
        let a = root.first_child().unwrap();
        let b = a.next_sibling().unwrap();
        let c = b.next_sibling().unwrap();
        assert_eq!(path(&a, &c).as_slice(), [Step::NextSibling, Step::NextSibling]);
    }

    #[test]
    fn descends_into_nested_children() {
        let grandchild = FakeDom::leaf("gc");
        let child = FakeDom::with_children("child", [grandchild]);
        let root = FakeDom::with_children("root", [FakeDom::leaf("before"), child]);
        let before = root.first_child().unwrap();
        let child = before.next_sibling().unwrap();
        let grandchild = child.first_child().unwrap();
        assert_eq!(
            path(&before, &grandchild).as_slice(),
            [Step::NextSibling, Step::FirstChild]
        );
    }

    #[test]
    fn unreachable_target_degrades_to_empty() {
        let a = FakeDom::leaf("a");
        let unrelated = FakeDom::leaf("b");
        assert!(path(&a, &unrelated).is_empty());
    }

    #[test]
    fn path_string_round_trips() {
        let p = Path::new(
            Anchor::Slot(AdjustedIndex(3)),
            smallvec![Step::FirstChild, Step::NextSibling, Step::NextSibling],
        );
        let rendered = p.to_string();
        assert_eq!(rendered, "3.firstChild.nextSibling.nextSibling");
        assert_eq!(rendered.parse::<Path>().unwrap(), p);
    }

    #[test]
    fn host_anchor_round_trips() {
        let p = Path::new(Anchor::Host, smallvec![Step::FirstChild]);
        assert_eq!(p.to_string(), "host.firstChild");
        assert_eq!("host.firstChild".parse::<Path>().unwrap(), p);
    }
}
