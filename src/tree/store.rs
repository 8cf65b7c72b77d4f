//! A compact CSR (compressed sparse row) weighted tree.
//!
//! The primary goal is predictable memory layout:
//! - `offsets`: `Vec<usize>` of length `n + 1`
//! - `children`: flat contiguous child-id list of length `n - 1`
//! - `weights`: `Vec<u32>`, one weight per vertex
//!
//! The store is immutable after construction and safe to share across any
//! number of threads without locking: traversal only ever reads it.

use core::fmt;

/// Errors rejected at construction time.
///
/// Traversal never validates ids; everything that could go wrong with the
/// adjacency data is caught here, once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// The vertex set is empty; a tree needs at least the root.
    Empty,
    /// `weights` and the adjacency data disagree on the vertex count.
    WeightCountMismatch {
        /// Number of weights supplied.
        weights: usize,
        /// Number of vertices implied by the adjacency data.
        vertices: usize,
    },
    /// A child id is outside `0..vertex_count`.
    ChildOutOfRange {
        /// The parent whose child list contains the bad id.
        parent: usize,
        /// The out-of-range child id.
        child: usize,
        /// The vertex count the id was checked against.
        vertices: usize,
    },
    /// A parent id does not precede its child in creation order.
    ParentOutOfOrder {
        /// The vertex whose parent is invalid.
        vertex: usize,
        /// The offending parent id.
        parent: usize,
    },
    /// The root appears in some vertex's child list.
    RootHasParent {
        /// The vertex claiming the root as a child.
        parent: usize,
    },
    /// A vertex appears in more than one child list.
    DuplicateParent {
        /// The vertex with multiple parents.
        child: usize,
    },
    /// A vertex is never reached from the root (orphan or cycle).
    Unreachable {
        /// Number of vertices reachable from the root.
        reachable: usize,
        /// Total number of vertices.
        vertices: usize,
    },
}

impl fmt::Display for TreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "tree must contain at least the root vertex"),
            Self::WeightCountMismatch { weights, vertices } => write!(
                f,
                "{weights} weights supplied for {vertices} vertices"
            ),
            Self::ChildOutOfRange {
                parent,
                child,
                vertices,
            } => write!(
                f,
                "child {child} of vertex {parent} is out of bounds for n={vertices}"
            ),
            Self::ParentOutOfOrder { vertex, parent } => write!(
                f,
                "parent {parent} of vertex {vertex} was not created before it"
            ),
            Self::RootHasParent { parent } => {
                write!(f, "vertex {parent} lists the root as a child")
            }
            Self::DuplicateParent { child } => {
                write!(f, "vertex {child} has more than one parent")
            }
            Self::Unreachable { reachable, vertices } => write!(
                f,
                "only {reachable} of {vertices} vertices are reachable from the root"
            ),
        }
    }
}

impl std::error::Error for TreeError {}

/// A rooted tree with one `u32` weight per vertex, stored in CSR form.
///
/// Vertex ids are `0..vertex_count()`; vertex 0 is the root. Children keep
/// their insertion order within each parent.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `from_parents` | \(O(n)\) | two counting passes, no per-vertex allocation |
/// | `from_adjacency` | \(O(n)\) | includes the reachability check |
/// | `children_of` | \(O(1)\) | borrowed slice view |
/// | `weight_of` / `child_count` | \(O(1)\) | |
#[derive(Debug)]
pub struct WeightedTree {
    offsets: Vec<usize>,
    children: Vec<usize>,
    weights: Vec<u32>,
}

impl WeightedTree {
    /// Builds a tree from creation-order parent assignments.
    ///
    /// `parents[i]` is the parent of vertex `i + 1` and must satisfy
    /// `parents[i] <= i`, i.e. every parent is created before its child. This
    /// is the shape produced by [`random_tree`](crate::tree::random_tree) and
    /// guarantees acyclicity by construction order.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError`] if `weights` is empty, if
    /// `parents.len() != weights.len() - 1`, or if any parent does not
    /// precede its child.
    pub fn from_parents(weights: Vec<u32>, parents: &[usize]) -> Result<Self, TreeError> {
        let n = weights.len();
        if n == 0 {
            return Err(TreeError::Empty);
        }
        if parents.len() != n - 1 {
            return Err(TreeError::WeightCountMismatch {
                weights: n,
                vertices: parents.len() + 1,
            });
        }
        for (i, &parent) in parents.iter().enumerate() {
            if parent > i {
                return Err(TreeError::ParentOutOfOrder {
                    vertex: i + 1,
                    parent,
                });
            }
        }

        // Counting-sort construction: degree pass, then placement pass.
        let mut offsets = vec![0usize; n + 1];
        for &parent in parents {
            offsets[parent + 1] += 1;
        }
        for i in 0..n {
            offsets[i + 1] += offsets[i];
        }

        let mut children = vec![0usize; n - 1];
        let mut cursor = offsets.clone();
        for (i, &parent) in parents.iter().enumerate() {
            children[cursor[parent]] = i + 1;
            cursor[parent] += 1;
        }

        Ok(Self {
            offsets,
            children,
            weights,
        })
    }

    /// Builds a tree from explicit per-vertex child lists.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError`] if the lists do not describe a single rooted
    /// tree: child ids out of range, the root listed as a child, a vertex
    /// with two parents, or vertices unreachable from the root (which also
    /// covers cycles among non-root vertices).
    pub fn from_adjacency(weights: Vec<u32>, adjacency: &[Vec<usize>]) -> Result<Self, TreeError> {
        let n = adjacency.len();
        if n == 0 {
            return Err(TreeError::Empty);
        }
        if weights.len() != n {
            return Err(TreeError::WeightCountMismatch {
                weights: weights.len(),
                vertices: n,
            });
        }

        let mut has_parent = vec![false; n];
        let mut total = 0usize;
        for (parent, list) in adjacency.iter().enumerate() {
            for &child in list {
                if child >= n {
                    return Err(TreeError::ChildOutOfRange {
                        parent,
                        child,
                        vertices: n,
                    });
                }
                if child == 0 {
                    return Err(TreeError::RootHasParent { parent });
                }
                if has_parent[child] {
                    return Err(TreeError::DuplicateParent { child });
                }
                has_parent[child] = true;
                total += 1;
            }
        }
        debug_assert!(total <= n);

        let mut offsets = Vec::with_capacity(n + 1);
        offsets.push(0);
        let mut children = Vec::with_capacity(total);
        for list in adjacency {
            children.extend_from_slice(list);
            offsets.push(children.len());
        }

        let tree = Self {
            offsets,
            children,
            weights,
        };

        // Single-parenthood alone does not rule out cycles detached from the
        // root; a root-reachability sweep does.
        let reachable = tree.reachable_from_root();
        if reachable != n {
            return Err(TreeError::Unreachable {
                reachable,
                vertices: n,
            });
        }
        Ok(tree)
    }

    /// Number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.weights.len()
    }

    /// Children of `vertex`, in insertion order. Borrowed view, no allocation.
    #[inline]
    pub fn children_of(&self, vertex: usize) -> &[usize] {
        &self.children[self.offsets[vertex]..self.offsets[vertex + 1]]
    }

    /// Number of children of `vertex`.
    #[inline]
    pub fn child_count(&self, vertex: usize) -> usize {
        self.offsets[vertex + 1] - self.offsets[vertex]
    }

    /// Weight of `vertex`.
    #[inline]
    pub fn weight_of(&self, vertex: usize) -> u32 {
        self.weights[vertex]
    }

    fn reachable_from_root(&self) -> usize {
        let mut seen = 0usize;
        let mut stack = vec![0usize];
        while let Some(vertex) = stack.pop() {
            seen += 1;
            stack.extend_from_slice(self.children_of(vertex));
        }
        seen
    }
}
