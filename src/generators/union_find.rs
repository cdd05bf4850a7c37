use crate::maze::Vertex;

/// Disjoint-set forest over `[0, n)` with path compression.
///
/// Unions simply reparent one root under the other; no rank is tracked.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<Vertex>,
}

impl UnionFind {
    /// Creates `size` singleton sets.
    pub fn new(size: usize) -> Self {
        UnionFind {
            parent: (0..size).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the representative of the set containing `x`, pointing every
    /// vertex on the way directly at it.
    pub fn find(&mut self, x: Vertex) -> Vertex {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut node = x;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }

        root
    }

    /// Merges the sets containing `x` and `y`.
    /// Returns `false` if they were already the same set.
    pub fn union(&mut self, x: Vertex, y: Vertex) -> bool {
        let root_x = self.find(x);
        let root_y = self.find(y);
        if root_x == root_y {
            return false;
        }
        self.parent[root_x] = root_y;
        true
    }

    pub fn same_set(&mut self, x: Vertex, y: Vertex) -> bool {
        self.find(x) == self.find(y)
    }
}
