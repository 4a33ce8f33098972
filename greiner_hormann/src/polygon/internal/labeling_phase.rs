//! Labeling phase: mark every intersection node as crossing or bouncing (resolving runs of shared
//! edges as one delayed decision), then mark crossing nodes as entry or exit.
use super::{
    predicates::{inside_store, side, Side},
    vertex_store::{ChainKind, ClipGraph, CrossingLabel, EntryLabel, VertexNode, VertexStore},
};
use crate::{
    core::{math::midpoint, traits::Real},
    polygon::PolygonRole,
};

/// Result of [label_intersections].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LabelingOutcome {
    /// Subject and clip describe the same boundary, no labels were assigned.
    Identical,
    /// Entry/exit labels assigned starting from the seed node of each store.
    Labeled { subject_seed: usize, clip_seed: usize },
}

/// Run all labeling steps on `graph` (after the intersection phase).
pub fn label_intersections<T>(graph: &mut ClipGraph<T>, epsilon: T) -> LabelingOutcome
where
    T: Real,
{
    classify_subject_nodes(graph, epsilon);
    resolve_chains(&mut graph.subject);
    copy_crossing_to_partners(graph);

    let subject_seed = match find_or_insert_subject_seed(&mut graph.subject) {
        Some(s) => s,
        None => return LabelingOutcome::Identical,
    };
    let clip_seed = match find_or_insert_seed(&mut graph.clip, &graph.subject) {
        Some(s) => s,
        None => return LabelingOutcome::Identical,
    };

    label_entry_exit(graph, PolygonRole::Subject, subject_seed);
    label_entry_exit(graph, PolygonRole::Clip, clip_seed);

    LabelingOutcome::Labeled {
        subject_seed,
        clip_seed,
    }
}

/// Classify every subject intersection node as a chain node (on a run of shared edges) or as a
/// plain crossing/bouncing intersection.
pub fn classify_subject_nodes<T>(graph: &mut ClipGraph<T>, epsilon: T)
where
    T: Real,
{
    let mut walk = graph.subject.walk(0);
    while let Some(i) = walk.next_index(&graph.subject) {
        let q = match graph.subject.node(i).partner_index() {
            Some(q) => q,
            None => continue,
        };

        let p_plus = graph.subject.next(i);
        let p_minus = graph.subject.prev(i);
        let q_plus = graph.clip.next(q);
        let q_minus = graph.clip.prev(q);

        let partner_of_plus = graph.subject.node(p_plus).partner_index();
        let partner_of_minus = graph.subject.node(p_minus).partner_index();

        let plus_is = |idx: usize| partner_of_plus == Some(idx);
        let minus_is = |idx: usize| partner_of_minus == Some(idx);

        let pm = graph.subject.point(p_minus);
        let pc = graph.subject.point(i);
        let pp = graph.subject.point(p_plus);
        let side_of = |idx: usize| side(graph.clip.point(idx), pm, pc, pp, epsilon);

        let on_overlap = plus_is(q_plus) || plus_is(q_minus) || minus_is(q_plus) || minus_is(q_minus);

        if on_overlap {
            let chain = if (plus_is(q_plus) && minus_is(q_minus)) || (plus_is(q_minus) && minus_is(q_plus))
            {
                ChainKind::OnOn
            } else if plus_is(q_plus) || plus_is(q_minus) {
                // leaving side is on the run, entering side decides
                let other = if plus_is(q_plus) { q_minus } else { q_plus };
                match side_of(other) {
                    Side::Right => ChainKind::LeftOn,
                    Side::Left => ChainKind::RightOn,
                }
            } else {
                let other = if minus_is(q_minus) { q_plus } else { q_minus };
                match side_of(other) {
                    Side::Right => ChainKind::OnLeft,
                    Side::Left => ChainKind::OnRight,
                }
            };
            log::trace!("subject node {i} chain {chain:?}");
            graph.subject.node_mut(i).chain = Some(chain);
        } else {
            let crossing = if side_of(q_minus) != side_of(q_plus) {
                CrossingLabel::Crossing
            } else {
                CrossingLabel::Bouncing
            };
            log::trace!("subject node {i} {crossing:?}");
            graph.subject.node_mut(i).crossing = crossing;
        }
    }
}

/// Resolve runs of chain nodes: every node of a run is bouncing except the last, which is
/// bouncing if it leaves to the same side the run was entered from, otherwise crossing.
pub fn resolve_chains<T>(subject: &mut VertexStore<T>)
where
    T: Real,
{
    // start outside of any run so a run wrapping past the first node is resolved as a whole
    let start = subject
        .find_first(|n| n.chain.map_or(true, ChainKind::starts_run))
        .unwrap_or(0);

    let mut run_start: Option<ChainKind> = None;
    let mut walk = subject.walk(start);
    while let Some(i) = walk.next_index(subject) {
        let kind = match subject.node(i).chain {
            Some(k) => k,
            None => continue,
        };

        let first = *run_start.get_or_insert(kind);
        let crossing = if !kind.ends_run() {
            CrossingLabel::Bouncing
        } else {
            run_start = None;
            if first.same_side_as_end(kind) {
                CrossingLabel::Bouncing
            } else {
                CrossingLabel::Crossing
            }
        };
        subject.node_mut(i).crossing = crossing;
    }
}

/// Copy crossing/bouncing labels from every subject intersection node to its partner.
pub fn copy_crossing_to_partners<T>(graph: &mut ClipGraph<T>)
where
    T: Real,
{
    let ClipGraph { subject, clip } = graph;
    for i in subject.iter() {
        let node = subject.node(i);
        if let Some(q) = node.partner_index() {
            clip.node_mut(q).crossing = node.crossing;
        }
    }
}

/// Find the subject's seed node for entry/exit labeling: the first node that is not an
/// intersection, otherwise a new node at the midpoint of an edge that is not on a shared run.
///
/// Returns `None` if every node is in the interior of a shared run (subject and clip are
/// identical).
pub fn find_or_insert_subject_seed<T>(subject: &mut VertexStore<T>) -> Option<usize>
where
    T: Real,
{
    if let Some(i) = subject.find_first(|n| !n.is_intersection) {
        return Some(i);
    }

    let i = subject.find_first(|n| n.chain != Some(ChainKind::OnOn))?;
    let edge_start = match subject.node(i).chain {
        Some(k) if k.starts_run() => subject.prev(i),
        Some(_) => i,
        None => i,
    };

    Some(insert_midpoint_seed(subject, edge_start))
}

/// Find the seed node of `store` (with partners in `other`): the first node that is not an
/// intersection, otherwise a new node at the midpoint of the first edge that is not shared with
/// `other`.
///
/// Returns `None` if every edge is shared (the boundaries are identical).
pub fn find_or_insert_seed<T>(store: &mut VertexStore<T>, other: &VertexStore<T>) -> Option<usize>
where
    T: Real,
{
    if let Some(i) = store.find_first(|n| !n.is_intersection) {
        return Some(i);
    }

    let edge_start = {
        let store: &VertexStore<T> = store;
        store.iter().find(|&i| !is_shared_edge(store, other, i))?
    };
    Some(insert_midpoint_seed(store, edge_start))
}

/// Returns true if the edge starting at node `i` of `store` coincides with an edge of `other`
/// (both end nodes are partnered with adjacent nodes of `other`).
pub fn is_shared_edge<T>(store: &VertexStore<T>, other: &VertexStore<T>, i: usize) -> bool
where
    T: Real,
{
    let next = store.next(i);
    match (
        store.node(i).partner_index(),
        store.node(next).partner_index(),
    ) {
        (Some(a), Some(b)) => other.next(a) == b || other.prev(a) == b,
        _ => false,
    }
}

fn insert_midpoint_seed<T>(store: &mut VertexStore<T>, edge_start: usize) -> usize
where
    T: Real,
{
    let edge_end = store.next(edge_start);
    let pt = midpoint(store.point(edge_start), store.point(edge_end));
    log::trace!("{} seed inserted at {pt:?}", store.role());
    store.insert_after(edge_start, VertexNode::synthetic(pt))
}

/// Assign entry/exit labels to the crossing nodes of the `role` store, walking from `seed` with
/// the initial status taken from an inside test of the seed against the other store.
pub fn label_entry_exit<T>(graph: &mut ClipGraph<T>, role: PolygonRole, seed: usize)
where
    T: Real,
{
    let seed_point = graph.store(role).point(seed);
    let mut status = if inside_store(seed_point, graph.store(role.other())) {
        EntryLabel::Exit
    } else {
        EntryLabel::Entry
    };

    let store = graph.store_mut(role);
    let mut walk = store.walk(seed);
    while let Some(i) = walk.next_index(store) {
        let node = store.node_mut(i);
        if node.crossing == CrossingLabel::Crossing {
            node.entry = status;
            status = status.flipped();
        }
    }
}
