use num_traits::{NumCast, PrimInt};
use std::hash::Hash;
use std::marker::PhantomData;

/// A valid node index.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Copy, Clone)]
pub struct NodeIndex<IndexType: Sized>(IndexType);
/// A valid edge index.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Copy, Clone)]
pub struct EdgeIndex<IndexType: Sized>(IndexType);

/// A valid graph index.
///
/// Indices are dense, i.e. a graph with `n` nodes uses exactly the node indices `0..n`.
pub trait GraphIndex:
    std::fmt::Debug + Eq + Ord + Hash + Copy + Sized + From<usize> + std::ops::Add<usize, Output = Self>
{
    // No `Into<usize>`, such that indices are not accidentally converted into each other.
    /// Get this index as `usize`.
    fn as_usize(self) -> usize;
}

macro_rules! impl_graph_index {
    ($GraphIndexType:ident) => {
        impl<IndexType: PrimInt + Hash> GraphIndex for $GraphIndexType<IndexType> {
            fn as_usize(self) -> usize {
                <usize as NumCast>::from(self.0).expect("index does not fit into usize")
            }
        }

        impl<IndexType: PrimInt + Hash> std::fmt::Debug for $GraphIndexType<IndexType> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.as_usize())
            }
        }

        impl<IndexType: PrimInt> From<usize> for $GraphIndexType<IndexType> {
            fn from(source: usize) -> Self {
                let source = <IndexType as NumCast>::from(source)
                    .expect("usize does not fit into the index type");
                debug_assert!(source != IndexType::max_value());
                Self(source)
            }
        }

        impl<IndexType: PrimInt + Hash> std::ops::Add<usize> for $GraphIndexType<IndexType> {
            type Output = Self;

            fn add(self, rhs: usize) -> Self::Output {
                Self::from(self.as_usize() + rhs)
            }
        }
    };
}

impl_graph_index!(NodeIndex);
impl_graph_index!(EdgeIndex);

/// An iterator over a consecutive sequence of graph indices.
pub struct GraphIndices<IndexType> {
    start: usize,
    end: usize,
    index_type: PhantomData<IndexType>,
}

impl<IndexType: GraphIndex> From<(usize, usize)> for GraphIndices<IndexType> {
    fn from(raw: (usize, usize)) -> Self {
        Self {
            start: raw.0,
            end: raw.1,
            index_type: Default::default(),
        }
    }
}

impl<IndexType: GraphIndex> Iterator for GraphIndices<IndexType> {
    type Item = IndexType;

    fn next(&mut self) -> Option<Self::Item> {
        if self.start < self.end {
            let result = Some(IndexType::from(self.start));
            self.start += 1;
            result
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end.saturating_sub(self.start);
        (remaining, Some(remaining))
    }
}

#[cfg(test)]
mod tests {
    use crate::index::{EdgeIndex, GraphIndex, GraphIndices, NodeIndex};

    #[test]
    fn test_graph_indices() {
        let indices: GraphIndices<NodeIndex<usize>> = GraphIndices::from((2, 5));
        assert_eq!(indices.size_hint(), (3, Some(3)));
        assert_eq!(
            indices.map(GraphIndex::as_usize).collect::<Vec<_>>(),
            vec![2, 3, 4]
        );

        let mut indices: GraphIndices<EdgeIndex<u32>> = GraphIndices::from((3, 3));
        assert_eq!(indices.next(), None);
    }

    #[test]
    fn test_index_arithmetic_and_debug() {
        let node: NodeIndex<u16> = 1.into();
        assert_eq!((node + 2).as_usize(), 3);
        assert_eq!(format!("{:?}", node + 2), "3");
        assert!(node < node + 1);
    }
}
