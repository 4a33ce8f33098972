//! Per operation rules: results for the trivial cases and traversal directions while tracing.
use super::{tracing_phase::Direction, vertex_store::EntryLabel};
use crate::{
    core::traits::Real,
    polygon::{BooleanOp, BooleanResult, Polygon, PolygonRole},
};

/// Input configurations resolved without tracing.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TrivialCase {
    /// Subject and clip have the same boundary.
    Identical,
    SubjectEmpty,
    ClipEmpty,
    /// Subject lies inside the clip with no crossing intersections.
    SubjectContained,
    /// Clip lies inside the subject with no crossing intersections.
    ClipContained,
    Disjoint,
}

/// Outcome of applying an operation's trivial case rule.
#[derive(Debug, Clone, PartialEq)]
pub enum TrivialResult<T>
where
    T: Real,
{
    /// Final result.
    Done(BooleanResult<T>),
    /// The subject must be split around the clip, see
    /// [hole_split](crate::polygon::internal::hole_split).
    SplitSubject,
}

impl BooleanOp {
    /// Result for the trivial case given.
    pub fn trivial_result<T>(
        self,
        case: TrivialCase,
        subject: &Polygon<T>,
        clip: &Polygon<T>,
    ) -> TrivialResult<T>
    where
        T: Real,
    {
        use BooleanOp::*;
        use TrivialCase::*;

        let subject_only = || TrivialResult::Done(BooleanResult::single(subject.clone()));
        let clip_only = || TrivialResult::Done(BooleanResult::single(clip.clone()));
        let empty = || TrivialResult::Done(BooleanResult::empty());

        match (self, case) {
            (Intersect, Identical) | (Union, Identical) => subject_only(),
            (Difference, Identical) => empty(),

            (Intersect, SubjectEmpty) | (Difference, SubjectEmpty) => empty(),
            (Union, SubjectEmpty) => clip_only(),

            (Intersect, ClipEmpty) => empty(),
            (Union, ClipEmpty) | (Difference, ClipEmpty) => subject_only(),

            (Intersect, SubjectContained) => subject_only(),
            (Union, SubjectContained) => clip_only(),
            (Difference, SubjectContained) => empty(),

            (Intersect, ClipContained) => clip_only(),
            (Union, ClipContained) => subject_only(),
            (Difference, ClipContained) => TrivialResult::SplitSubject,

            (Intersect, Disjoint) => empty(),
            (Union, Disjoint) => TrivialResult::Done(BooleanResult::new(vec![
                subject.clone(),
                clip.clone(),
            ])),
            (Difference, Disjoint) => subject_only(),
        }
    }

    /// Direction to walk along the `role` store from a crossing node labeled `entry`.
    ///
    /// Intersect walks into the other polygon on both stores, union walks away from it on both
    /// stores, difference walks away from the clip along the subject and into the subject along the
    /// clip. Only the label decides, the orientation of either polygon does not matter.
    #[inline]
    pub fn direction(self, role: PolygonRole, entry: EntryLabel) -> Direction {
        let inward = match (self, role) {
            (BooleanOp::Intersect, _) => true,
            (BooleanOp::Union, _) => false,
            (BooleanOp::Difference, PolygonRole::Subject) => false,
            (BooleanOp::Difference, PolygonRole::Clip) => true,
        };

        if entry.is_entry() == inward {
            Direction::Forward
        } else {
            Direction::Backward
        }
    }

    /// Direction to start tracing from a subject crossing node labeled `entry`.
    #[inline]
    pub fn initial_direction(self, entry: EntryLabel) -> Direction {
        self.direction(PolygonRole::Subject, entry)
    }
}
