//! Arena backed circular doubly linked vertex lists used by the clipping engine.
//!
//! Each polygon operand gets its own [VertexStore]. Nodes link to their neighbors by index within
//! the owning store and to their partner in the other store through a [NodeRef].
use crate::{
    core::{math::Vector2, traits::Real},
    polygon::PolygonRole,
};

/// Reference to a node in one of the two vertex stores of a [ClipGraph].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct NodeRef {
    pub role: PolygonRole,
    pub index: usize,
}

impl NodeRef {
    #[inline]
    pub fn new(role: PolygonRole, index: usize) -> Self {
        Self { role, index }
    }

    #[inline]
    pub fn subject(index: usize) -> Self {
        Self::new(PolygonRole::Subject, index)
    }

    #[inline]
    pub fn clip(index: usize) -> Self {
        Self::new(PolygonRole::Clip, index)
    }
}

/// Crossing classification of an intersection node.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum CrossingLabel {
    #[default]
    Unset,
    /// Boundaries cross transversally, inside/outside status flips.
    Crossing,
    /// Boundaries touch without the inside/outside status flipping.
    Bouncing,
}

/// Entry/exit classification of a crossing intersection node.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum EntryLabel {
    #[default]
    Unset,
    /// Traversing forward moves from outside to inside the other polygon.
    Entry,
    /// Traversing forward moves from inside to outside the other polygon.
    Exit,
}

impl EntryLabel {
    /// Opposite label, unset stays unset.
    #[inline]
    pub fn flipped(self) -> Self {
        match self {
            EntryLabel::Unset => EntryLabel::Unset,
            EntryLabel::Entry => EntryLabel::Exit,
            EntryLabel::Exit => EntryLabel::Entry,
        }
    }

    #[inline]
    pub fn is_entry(self) -> bool {
        self == EntryLabel::Entry
    }
}

/// Transition type of a subject node lying on a run of edges shared with the clip.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ChainKind {
    /// Subject moves from the left of the clip onto the shared run.
    LeftOn,
    /// Subject moves from the right of the clip onto the shared run.
    RightOn,
    /// Interior of a shared run.
    OnOn,
    /// Subject leaves the shared run to the left of the clip.
    OnLeft,
    /// Subject leaves the shared run to the right of the clip.
    OnRight,
}

impl ChainKind {
    /// Returns true if this node ends a shared run.
    #[inline]
    pub fn ends_run(self) -> bool {
        matches!(self, ChainKind::OnLeft | ChainKind::OnRight)
    }

    /// Returns true if this node starts a shared run.
    #[inline]
    pub fn starts_run(self) -> bool {
        matches!(self, ChainKind::LeftOn | ChainKind::RightOn)
    }

    /// Returns true if this kind, recorded at the start of a run, and `end` (the kind at the end
    /// of the run) are on the same side of the clip.
    #[inline]
    pub fn same_side_as_end(self, end: ChainKind) -> bool {
        matches!(
            (self, end),
            (ChainKind::LeftOn, ChainKind::OnLeft) | (ChainKind::RightOn, ChainKind::OnRight)
        )
    }
}

/// Vertex record, one per polygon occurrence.
#[derive(Debug, Copy, Clone)]
pub struct VertexNode<T = f64> {
    pub point: Vector2<T>,
    pub next: usize,
    pub prev: usize,
    /// Copied directly from the input point sequence.
    pub is_source: bool,
    pub is_intersection: bool,
    /// Parametric position along the source edge the node was inserted into.
    pub alpha: T,
    /// Partner node in the other store.
    pub corresponding: Option<NodeRef>,
    pub crossing: CrossingLabel,
    pub entry: EntryLabel,
    pub chain: Option<ChainKind>,
    pub processed: bool,
}

impl<T> VertexNode<T>
where
    T: Real,
{
    fn new(point: Vector2<T>, is_source: bool, is_intersection: bool, alpha: T) -> Self {
        Self {
            point,
            next: 0,
            prev: 0,
            is_source,
            is_intersection,
            alpha,
            corresponding: None,
            crossing: CrossingLabel::Unset,
            entry: EntryLabel::Unset,
            chain: None,
            processed: false,
        }
    }

    /// Node copied from an input point.
    #[inline]
    pub fn source(point: Vector2<T>) -> Self {
        Self::new(point, true, false, T::zero())
    }

    /// Synthesized intersection node at parametric position `alpha` along its edge.
    #[inline]
    pub fn intersection(point: Vector2<T>, alpha: T) -> Self {
        Self::new(point, false, true, alpha)
    }

    /// Synthesized non-intersection node (labeling seed).
    #[inline]
    pub fn synthetic(point: Vector2<T>) -> Self {
        Self::new(point, false, false, T::zero())
    }

    /// Partner index if this node is an intersection linked to the other store.
    #[inline]
    pub fn partner_index(&self) -> Option<usize> {
        if self.is_intersection {
            self.corresponding.map(|r| r.index)
        } else {
            None
        }
    }
}

/// Circular doubly linked list of vertex nodes held in an arena.
///
/// The nodes created from the input points always occupy indexes `0..source_count()` in input
/// order, so source edge `i` runs from node `i` to node `(i + 1) % source_count()` (possibly
/// through inserted nodes).
#[derive(Debug, Clone)]
pub struct VertexStore<T = f64> {
    role: PolygonRole,
    nodes: Vec<VertexNode<T>>,
    source_count: usize,
}

impl<T> VertexStore<T>
where
    T: Real,
{
    /// Build a circular store from `points`, all nodes are tagged as source nodes.
    pub fn from_points(role: PolygonRole, points: &[Vector2<T>]) -> Self {
        let n = points.len();
        let mut nodes = Vec::with_capacity(2 * n);
        for (i, &pt) in points.iter().enumerate() {
            let mut node = VertexNode::source(pt);
            node.next = if i + 1 == n { 0 } else { i + 1 };
            node.prev = if i == 0 { n.saturating_sub(1) } else { i - 1 };
            nodes.push(node);
        }

        Self {
            role,
            nodes,
            source_count: n,
        }
    }

    #[inline]
    pub fn role(&self) -> PolygonRole {
        self.role
    }

    /// Total node count (source and synthesized).
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn source_count(&self) -> usize {
        self.source_count
    }

    #[inline]
    pub fn node(&self, index: usize) -> &VertexNode<T> {
        &self.nodes[index]
    }

    #[inline]
    pub fn node_mut(&mut self, index: usize) -> &mut VertexNode<T> {
        &mut self.nodes[index]
    }

    #[inline]
    pub fn point(&self, index: usize) -> Vector2<T> {
        self.nodes[index].point
    }

    #[inline]
    pub fn next(&self, index: usize) -> usize {
        self.nodes[index].next
    }

    #[inline]
    pub fn prev(&self, index: usize) -> usize {
        self.nodes[index].prev
    }

    /// Index of the source node following source node `source_index`.
    #[inline]
    pub fn next_source(&self, source_index: usize) -> usize {
        debug_assert!(source_index < self.source_count);
        if source_index + 1 == self.source_count {
            0
        } else {
            source_index + 1
        }
    }

    /// Insert `node` directly after the node at `at`, returns the new node's index.
    pub fn insert_after(&mut self, at: usize, mut node: VertexNode<T>) -> usize {
        let new_index = self.nodes.len();
        let after = self.nodes[at].next;
        node.prev = at;
        node.next = after;
        self.nodes.push(node);
        self.nodes[at].next = new_index;
        self.nodes[after].prev = new_index;
        new_index
    }

    /// Insert `node` directly before the node at `at`, returns the new node's index.
    pub fn insert_before(&mut self, at: usize, node: VertexNode<T>) -> usize {
        let before = self.nodes[at].prev;
        self.insert_after(before, node)
    }

    /// Insert `node` on the edge running from `edge_start` to `edge_end`, after the last node on
    /// the edge whose alpha does not exceed the new node's alpha.
    pub fn insert_on_edge(&mut self, edge_start: usize, edge_end: usize, node: VertexNode<T>) -> usize {
        let mut at = edge_start;
        loop {
            let next = self.nodes[at].next;
            if next == edge_end || self.nodes[next].alpha > node.alpha {
                break;
            }
            at = next;
        }

        self.insert_after(at, node)
    }

    /// Start a single pass walk at `start`, see [Walk].
    #[inline]
    pub fn walk(&self, start: usize) -> Walk {
        Walk::new(start, self.nodes.len())
    }

    /// Iterate node indexes in traversal order starting at `start`, visiting every node once.
    #[inline]
    pub fn iter_from(&self, start: usize) -> NodeIter<'_, T> {
        NodeIter {
            store: self,
            walk: self.walk(start),
        }
    }

    /// Iterate node indexes in traversal order starting at the first input node.
    #[inline]
    pub fn iter(&self) -> NodeIter<'_, T> {
        self.iter_from(0)
    }

    /// Index of the first node in traversal order (from the first input node) matching
    /// `predicate`.
    pub fn find_first<F>(&self, mut predicate: F) -> Option<usize>
    where
        F: FnMut(&VertexNode<T>) -> bool,
    {
        self.iter().find(|&i| predicate(&self.nodes[i]))
    }

    /// Returns true if every node matches `predicate`.
    pub fn all<F>(&self, mut predicate: F) -> bool
    where
        F: FnMut(&VertexNode<T>) -> bool,
    {
        self.nodes.iter().all(|n| predicate(n))
    }

    /// Iterate the edges of the store boundary as point pairs.
    pub fn iter_segments(&self) -> impl Iterator<Item = (Vector2<T>, Vector2<T>)> + '_ {
        self.iter().map(move |i| {
            let node = &self.nodes[i];
            (node.point, self.nodes[node.next].point)
        })
    }

    /// Flatten back to an ordered point list starting at the first input node (no repeated
    /// closing point).
    pub fn to_points(&self) -> Vec<Vector2<T>> {
        self.iter().map(|i| self.nodes[i].point).collect()
    }
}

/// Restartable single pass cursor over a [VertexStore].
///
/// The cursor captures the store size when created and skips any node inserted afterwards, so
/// the store may be mutated between steps without the pass revisiting or extending into new
/// nodes. Every node that existed at creation is visited exactly once, in link order.
#[derive(Debug, Clone)]
pub struct Walk {
    start: usize,
    current: Option<usize>,
    limit: usize,
}

impl Walk {
    #[inline]
    fn new(start: usize, limit: usize) -> Self {
        Self {
            start,
            current: if start < limit { Some(start) } else { None },
            limit,
        }
    }

    /// Advance the cursor returning the index of the node visited.
    pub fn next_index<T>(&mut self, store: &VertexStore<T>) -> Option<usize>
    where
        T: Real,
    {
        let current = self.current?;
        let mut next = store.next(current);
        while next >= self.limit && next != self.start {
            next = store.next(next);
        }

        self.current = if next == self.start { None } else { Some(next) };
        Some(current)
    }
}

/// Borrowing iterator form of [Walk].
#[derive(Debug, Clone)]
pub struct NodeIter<'a, T> {
    store: &'a VertexStore<T>,
    walk: Walk,
}

impl<'a, T> Iterator for NodeIter<'a, T>
where
    T: Real,
{
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.walk.next_index(self.store)
    }
}

/// The subject and clip vertex stores of one boolean operation.
#[derive(Debug, Clone)]
pub struct ClipGraph<T = f64> {
    pub subject: VertexStore<T>,
    pub clip: VertexStore<T>,
}

impl<T> ClipGraph<T>
where
    T: Real,
{
    pub fn new(subject: &[Vector2<T>], clip: &[Vector2<T>]) -> Self {
        Self {
            subject: VertexStore::from_points(PolygonRole::Subject, subject),
            clip: VertexStore::from_points(PolygonRole::Clip, clip),
        }
    }

    #[inline]
    pub fn store(&self, role: PolygonRole) -> &VertexStore<T> {
        match role {
            PolygonRole::Subject => &self.subject,
            PolygonRole::Clip => &self.clip,
        }
    }

    #[inline]
    pub fn store_mut(&mut self, role: PolygonRole) -> &mut VertexStore<T> {
        match role {
            PolygonRole::Subject => &mut self.subject,
            PolygonRole::Clip => &mut self.clip,
        }
    }

    #[inline]
    pub fn node(&self, r: NodeRef) -> &VertexNode<T> {
        self.store(r.role).node(r.index)
    }

    #[inline]
    pub fn node_mut(&mut self, r: NodeRef) -> &mut VertexNode<T> {
        self.store_mut(r.role).node_mut(r.index)
    }

    /// Mark both nodes as intersections and make them each other's partner.
    pub fn link(&mut self, a: NodeRef, b: NodeRef) {
        debug_assert!(a.role != b.role, "partners must be in different stores");
        let node_a = self.node_mut(a);
        node_a.is_intersection = true;
        node_a.corresponding = Some(b);
        let node_b = self.node_mut(b);
        node_b.is_intersection = true;
        node_b.corresponding = Some(a);
    }

    /// Set processed on the node and its partner (if any).
    pub fn mark_processed(&mut self, r: NodeRef) {
        let node = self.node_mut(r);
        node.processed = true;
        if let Some(partner) = node.corresponding {
            self.node_mut(partner).processed = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::vec2;

    fn square() -> Vec<Vector2<f64>> {
        vec![
            vec2(0.0, 0.0),
            vec2(1.0, 0.0),
            vec2(1.0, 1.0),
            vec2(0.0, 1.0),
        ]
    }

    #[test]
    fn from_points_is_circular() {
        let store = VertexStore::from_points(PolygonRole::Subject, &square());
        assert_eq!(store.len(), 4);
        assert_eq!(store.next(3), 0);
        assert_eq!(store.prev(0), 3);
        assert!(store.all(|n| n.is_source && !n.is_intersection));
        assert_eq!(store.to_points(), square());
    }

    #[test]
    fn insert_on_edge_orders_by_alpha() {
        let mut store = VertexStore::from_points(PolygonRole::Subject, &square());
        let a = store.insert_on_edge(0, 1, VertexNode::intersection(vec2(0.75, 0.0), 0.75));
        let b = store.insert_on_edge(0, 1, VertexNode::intersection(vec2(0.25, 0.0), 0.25));
        let c = store.insert_on_edge(0, 1, VertexNode::intersection(vec2(0.5, 0.0), 0.5));
        let order: Vec<usize> = store.iter().take(5).collect();
        assert_eq!(order, vec![0, b, c, a, 1]);
        assert_eq!(store.prev(1), a);
    }

    #[test]
    fn insert_before_links_both_sides() {
        let mut store = VertexStore::from_points(PolygonRole::Clip, &square());
        let i = store.insert_before(0, VertexNode::synthetic(vec2(0.0, 0.5)));
        assert_eq!(store.next(3), i);
        assert_eq!(store.next(i), 0);
        assert_eq!(store.prev(0), i);
        assert_eq!(store.to_points().len(), 5);
    }

    #[test]
    fn walk_skips_nodes_inserted_during_pass() {
        let mut store = VertexStore::from_points(PolygonRole::Subject, &square());
        let mut walk = store.walk(0);
        let mut visited = Vec::new();
        while let Some(i) = walk.next_index(&store) {
            visited.push(i);
            let next = store.next(i);
            store.insert_on_edge(i, next, VertexNode::synthetic(store.point(i)));
        }
        assert_eq!(visited, vec![0, 1, 2, 3]);
        assert_eq!(store.len(), 8);
        assert_eq!(store.iter().count(), 8);
    }

    #[test]
    fn find_first_follows_links() {
        let mut store = VertexStore::from_points(PolygonRole::Subject, &square());
        let i = store.insert_on_edge(0, 1, VertexNode::intersection(vec2(0.5, 0.0), 0.5));
        assert_eq!(store.find_first(|n| n.is_intersection), Some(i));
        assert_eq!(store.find_first(|n| !n.is_source && !n.is_intersection), None);
    }

    #[test]
    fn link_is_mutual() {
        let mut graph = ClipGraph::new(&square(), &square());
        graph.link(NodeRef::subject(2), NodeRef::clip(1));
        assert_eq!(graph.subject.node(2).corresponding, Some(NodeRef::clip(1)));
        assert_eq!(graph.clip.node(1).corresponding, Some(NodeRef::subject(2)));
        assert_eq!(graph.subject.node(2).partner_index(), Some(1));
        graph.mark_processed(NodeRef::clip(1));
        assert!(graph.subject.node(2).processed);
    }
}
