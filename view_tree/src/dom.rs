/// A read-only handle onto a single node of the platform's in-memory DOM
/// representation.
///
/// The core never constructs or mutates DOM nodes; it only walks them
/// forward (`first_child`, `next_sibling`) to compute navigation paths and
/// to count root nodes under a container anchor. Implementations are
/// supplied by the external rendering platform (see `spec.md` §1, "Out of
/// scope: the rendering platform").
pub trait DomNode: Clone + PartialEq {
    /// The first child of this node, if any.
    fn first_child(&self) -> Option<Self>;

    /// The next sibling of this node, if any.
    fn next_sibling(&self) -> Option<Self>;

    /// The parent of this node, if any. `None` for a detached root (such as
    /// a component host with no DOM parent visible to the core).
    fn parent(&self) -> Option<Self>;
}

/// Walks `next_sibling` starting at `first`, collecting every node up to
/// (but not including) `stop_before`, or until the chain runs out.
///
/// This is the "native-node collector" referenced by design note §9: the
/// one piece of DOM traversal the container serializer needs that isn't a
/// path computation between two known anchors.
pub fn collect_root_nodes<D: DomNode>(first: &D, stop_before: Option<&D>) -> Vec<D> {
    let mut nodes = Vec::new();
    let mut current = Some(first.clone());
    while let Some(node) = current {
        if let Some(stop) = stop_before {
            if node == *stop {
                break;
            }
        }
        current = node.next_sibling();
        nodes.push(node);
    }
    nodes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug)]
    struct Chain(Vec<u32>, usize);

    impl DomNode for Chain {
        fn first_child(&self) -> Option<Self> {
            None
        }

        fn next_sibling(&self) -> Option<Self> {
            if self.1 + 1 < self.0.len() {
                Some(Chain(self.0.clone(), self.1 + 1))
            } else {
                None
            }
        }

        fn parent(&self) -> Option<Self> {
            None
        }
    }

    #[test]
    fn collects_until_stop() {
        let chain = Chain(vec![1, 2, 3, 4], 0);
        let stop = Chain(vec![1, 2, 3, 4], 3);
        let collected = collect_root_nodes(&chain, Some(&stop));
        assert_eq!(collected.len(), 3);
    }

    #[test]
    fn collects_to_end_without_stop() {
        let chain = Chain(vec![1, 2, 3], 0);
        let collected = collect_root_nodes(&chain, None);
        assert_eq!(collected.len(), 3);
    }
}
