//! Dots on the paper and the fold transform.

use std::collections::HashSet;

/// A dot on the transparent paper.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

/// Which way the crease runs: `X` folds the paper left, `Y` folds it up.
///
/// Exactly two variants; the parser guarantees nothing else ever reaches
/// the fold transform.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Axis {
    X,
    Y,
}

/// A single fold instruction: the crease line sits at `on = value`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Fold {
    pub on: Axis,
    pub value: i64,
}

/// The deduplicated set of dotted cells.
pub type PointSet = HashSet<Point>;

impl Fold {
    /// Reflect a single point across the crease.
    ///
    /// A coordinate short of the crease is untouched; a coordinate on or
    /// past it maps to `2 * value - coordinate`. A point sitting exactly on
    /// the crease maps to itself.
    pub fn apply(&self, p: Point) -> Point {
        match self.on {
            Axis::X => Point {
                x: if p.x < self.value { p.x } else { 2 * self.value - p.x },
                y: p.y,
            },
            Axis::Y => Point {
                x: p.x,
                y: if p.y < self.value { p.y } else { 2 * self.value - p.y },
            },
        }
    }
}

/// Apply one fold to every point, collecting the images into a fresh set.
///
/// Two points that land on the same cell merge silently, so the result is
/// never larger than the input. Traversal order is irrelevant: the
/// transform is pointwise.
pub fn fold_set(points: &PointSet, fold: Fold) -> PointSet {
    points.iter().map(|p| fold.apply(*p)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(points: &[(i64, i64)]) -> PointSet {
        points.iter().map(|&(x, y)| Point { x, y }).collect()
    }

    #[test]
    fn point_past_the_crease_is_reflected() {
        let fold = Fold { on: Axis::X, value: 1 };
        assert_eq!(fold.apply(Point { x: 2, y: 0 }), Point { x: 0, y: 0 });
    }

    #[test]
    fn point_short_of_the_crease_is_unchanged() {
        let fold = Fold { on: Axis::Y, value: 7 };
        assert_eq!(fold.apply(Point { x: 3, y: 4 }), Point { x: 3, y: 4 });
    }

    #[test]
    fn point_on_the_crease_maps_to_itself() {
        // 2v - v = v; degenerate but must not misbehave.
        let fold = Fold { on: Axis::X, value: 5 };
        assert_eq!(fold.apply(Point { x: 5, y: 2 }), Point { x: 5, y: 2 });
    }

    #[test]
    fn y_fold_leaves_x_untouched() {
        let fold = Fold { on: Axis::Y, value: 7 };
        assert_eq!(fold.apply(Point { x: 6, y: 10 }), Point { x: 6, y: 4 });
    }

    #[test]
    fn overlapping_images_merge() {
        let fold = Fold { on: Axis::X, value: 1 };
        let folded = fold_set(&set(&[(0, 0), (2, 0)]), fold);
        assert_eq!(folded, set(&[(0, 0)]));
    }

    #[test]
    fn refolding_an_already_folded_set_is_a_no_op() {
        let fold = Fold { on: Axis::Y, value: 7 };
        let once = fold_set(&set(&[(0, 3), (6, 10), (9, 14)]), fold);
        let twice = fold_set(&once, fold);
        assert_eq!(once, twice);
    }

    #[test]
    fn fold_never_grows_the_set() {
        let original = set(&[(0, 0), (4, 0), (1, 3), (3, 3)]);
        let folded = fold_set(&original, Fold { on: Axis::X, value: 2 });
        assert!(folded.len() <= original.len());
    }
}
