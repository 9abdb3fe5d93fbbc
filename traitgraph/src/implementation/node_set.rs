use crate::index::GraphIndex;
use bitvector::BitVector;
use std::marker::PhantomData;

/// A set of nodes of a graph that stores the presence or absence of each node in a bitvector.
///
/// The set has a fixed capacity, usually the amount of nodes of the graph it was created for.
/// Inserting a node outside of the capacity panics.
pub struct NodeSet<NodeIndex> {
    present_nodes: BitVector,
    capacity: usize,
    len: usize,
    node_index: PhantomData<NodeIndex>,
}

impl<NodeIndex: GraphIndex> NodeSet<NodeIndex> {
    /// Creates an empty set that can hold the node indices `0..capacity`.
    pub fn new_empty(capacity: usize) -> Self {
        Self {
            present_nodes: BitVector::new(capacity),
            capacity,
            len: 0,
            node_index: Default::default(),
        }
    }

    /// Returns the amount of nodes in this set.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if this set contains no nodes.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true if the given node is in this set.
    /// Nodes outside the capacity of this set are never contained.
    pub fn contains(&self, node: NodeIndex) -> bool {
        let node = node.as_usize();
        node < self.capacity && self.present_nodes.contains(node)
    }

    /// Adds the given node to this set and returns true if it was not contained before.
    /// Panics if the node is outside the capacity of this set.
    pub fn insert(&mut self, node: NodeIndex) -> bool {
        assert!(
            node.as_usize() < self.capacity,
            "Node {:?} is outside the capacity {} of the node set",
            node,
            self.capacity
        );
        if self.contains(node) {
            false
        } else {
            self.present_nodes.insert(node.as_usize());
            self.len += 1;
            true
        }
    }

    /// Removes the given node from this set and returns true if it was contained before.
    pub fn remove(&mut self, node: NodeIndex) -> bool {
        if self.contains(node) {
            self.present_nodes.remove(node.as_usize());
            self.len -= 1;
            true
        } else {
            false
        }
    }

    /// Returns an iterator over the nodes in this set in ascending order.
    pub fn iter(&self) -> impl '_ + Iterator<Item = NodeIndex> {
        (0..self.capacity)
            .filter(move |&node| self.present_nodes.contains(node))
            .map(NodeIndex::from)
    }

    /// Returns true if this set and `other` have no node in common.
    pub fn is_disjoint(&self, other: &Self) -> bool {
        let (smaller, larger) = if self.len <= other.len {
            (self, other)
        } else {
            (other, self)
        };
        smaller.iter().all(|node| !larger.contains(node))
    }
}

impl<NodeIndex: GraphIndex> PartialEq for NodeSet<NodeIndex> {
    fn eq(&self, rhs: &Self) -> bool {
        self.len == rhs.len && self.iter().all(|node| rhs.contains(node))
    }
}

impl<NodeIndex: GraphIndex> Eq for NodeSet<NodeIndex> {}

impl<NodeIndex: GraphIndex> std::fmt::Debug for NodeSet<NodeIndex> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::implementation::node_set::NodeSet;
    use crate::index::NodeIndex;

    #[test]
    fn test_insert_remove_contains() {
        let mut set = NodeSet::<NodeIndex<usize>>::new_empty(70);
        assert!(set.is_empty());
        assert!(set.insert(3.into()));
        assert!(set.insert(69.into()));
        assert!(!set.insert(3.into()));
        assert_eq!(set.len(), 2);
        assert!(set.contains(69.into()));
        assert!(!set.contains(4.into()));
        assert!(!set.contains(100.into()));

        assert!(set.remove(3.into()));
        assert!(!set.remove(3.into()));
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![NodeIndex::from(69)]);
    }

    #[test]
    fn test_disjoint() {
        let mut first = NodeSet::<NodeIndex<usize>>::new_empty(10);
        let mut second = NodeSet::new_empty(10);
        first.insert(1.into());
        first.insert(2.into());
        second.insert(3.into());
        assert!(first.is_disjoint(&second));
        assert!(first.is_disjoint(&NodeSet::new_empty(10)));

        second.insert(2.into());
        assert!(!first.is_disjoint(&second));
        assert!(!second.is_disjoint(&first));
    }

    #[test]
    #[should_panic]
    fn test_insert_outside_capacity() {
        let mut set = NodeSet::<NodeIndex<usize>>::new_empty(4);
        set.insert(4.into());
    }
}
