//! Procedural description of the ring tower.
//!
//! This is everything the scene needs to instantiate meshes, computed without
//! touching the rendering library so it can be inspected and tested on its
//! own.

use kiss3d::color::Color;
use rand::Rng;

use crate::animation::SegmentAnimation;
use crate::layout::{Placement, RingLayout};
use crate::palette::Pattern;

/// One box segment of the tower.
#[derive(Clone, Debug, PartialEq)]
pub struct SegmentSpec {
    /// Ring index, `0` being the top ring.
    pub row: usize,
    /// Position of the segment around its ring.
    pub column: usize,
    /// Rest placement of the segment.
    pub placement: Placement,
    /// Surface color.
    pub color: Color,
    /// Animation record driving the segment.
    pub animation: SegmentAnimation,
}

/// The complete procedural tower.
#[derive(Clone, Debug)]
pub struct Tower {
    /// Box size shared by all segments: `(width, height, depth)`.
    pub segment_size: (f32, f32, f32),
    /// All segments, row by row.
    pub segments: Vec<SegmentSpec>,
}

impl Tower {
    /// Generates a tower from `layout`, animating its first `active_rows` rows.
    ///
    /// The random pattern and the per-segment phase jitter are both drawn
    /// from `rng`.
    pub fn generate<R: Rng>(layout: &RingLayout, active_rows: usize, rng: &mut R) -> Self {
        let pattern = Pattern::random(rng, active_rows, layout.count);
        Self::from_pattern(layout, active_rows, &pattern, rng)
    }

    /// Generates a tower painted with an existing `pattern`.
    ///
    /// Only the per-segment phase jitter is drawn from `rng`.
    pub fn from_pattern<R: Rng>(
        layout: &RingLayout,
        active_rows: usize,
        pattern: &Pattern,
        rng: &mut R,
    ) -> Self {
        let bands = active_rows.max(1) as f32;
        let mut segments = Vec::with_capacity(layout.len());

        for row in 0..layout.rows {
            for column in 0..layout.count {
                let placement = layout.placement(row, column, active_rows);
                let jitter: f32 = rng.random();

                segments.push(SegmentSpec {
                    row,
                    column,
                    placement,
                    color: pattern.color(row, column),
                    animation: SegmentAnimation {
                        row,
                        y: placement.position.y,
                        offset: row as f32 / bands + jitter / bands,
                    },
                });
            }
        }

        Self {
            segment_size: (layout.segment_width(), 1.0, 1.0),
            segments,
        }
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns `true` if the tower has no segment.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kiss3d::color::{BLUE, RED, WHITE, YELLOW};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn tower_has_one_segment_per_cell() {
        let layout = RingLayout::default();
        let tower = Tower::generate(&layout, 4, &mut StdRng::seed_from_u64(1));

        assert_eq!(tower.len(), 120);
        assert_eq!(tower.segments[13].row, 1);
        assert_eq!(tower.segments[13].column, 1);
        assert!((tower.segment_size.0 - layout.segment_width()).abs() < 1.0e-6);
    }

    #[test]
    fn phase_offsets_grow_with_the_row() {
        let tower = Tower::generate(&RingLayout::default(), 4, &mut StdRng::seed_from_u64(2));

        for segment in &tower.segments {
            let row = segment.row as f32;
            let offset = segment.animation.offset;
            assert!(offset >= row / 4.0 && offset <= (row + 1.0) / 4.0);
            assert_eq!(segment.animation.y, -row);
            assert!(segment.color == WHITE || segment.color == RED);
        }
    }

    #[test]
    fn same_seed_same_tower() {
        let layout = RingLayout::default().with_rows(5).with_count(8);
        let a = Tower::generate(&layout, 3, &mut StdRng::seed_from_u64(9));
        let b = Tower::generate(&layout, 3, &mut StdRng::seed_from_u64(9));
        assert_eq!(a.segments, b.segments);
    }

    #[test]
    fn pattern_colors_are_used_as_given() {
        let pattern = Pattern::from_cells(vec![vec![true, false]]).with_colors(BLUE, YELLOW);
        let layout = RingLayout::default().with_count(3).with_rows(3);
        let tower = Tower::from_pattern(&layout, 1, &pattern, &mut StdRng::seed_from_u64(4));

        for segment in &tower.segments {
            let expected = if segment.row == 0 { BLUE } else { YELLOW };
            assert_eq!(segment.color, expected);
        }
    }

    #[test]
    fn rows_past_the_pattern_width_are_red() {
        // Only 4 columns, so the pattern has no cell for rows 4 and beyond.
        let layout = RingLayout::default().with_count(4).with_rows(6);
        let tower = Tower::generate(&layout, 2, &mut StdRng::seed_from_u64(3));

        assert!(tower
            .segments
            .iter()
            .filter(|s| s.row >= 4)
            .all(|s| s.color == RED));
    }
}
