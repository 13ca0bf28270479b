//! Geometry of the ring tower.
//!
//! The tower is a stack of `rows` rings. Every ring is made of `count` boxes
//! laid tangentially on a circle, and rings are rotated by half a segment per
//! row (modulo the active rows) so their joints alternate.

use std::f32::consts::{PI, TAU};

use glamx::{Quat, Vec3};

use crate::error::{ExperienceError, Result};

/// Where a single box segment sits in the tower.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    /// Position of the segment center, relative to the tower group.
    pub position: Vec3,
    /// Orientation of the segment (a rotation around the vertical axis).
    pub rotation: Quat,
}

/// Dimensions of the ring tower.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RingLayout {
    /// Number of segments per ring.
    pub count: usize,
    /// Radius of the circle the segment widths are computed from.
    pub radius: f32,
    /// Extra distance pushing the segments out of the circle.
    pub gap: f32,
    /// Number of stacked rings.
    pub rows: usize,
}

impl Default for RingLayout {
    fn default() -> Self {
        Self {
            count: 12,
            radius: 3.0,
            gap: 0.39,
            rows: 10,
        }
    }
}

impl RingLayout {
    /// Sets the number of segments per ring.
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Sets the ring radius.
    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    /// Sets the number of rings.
    pub fn with_rows(mut self, rows: usize) -> Self {
        self.rows = rows;
        self
    }

    /// Checks that the layout produces at least one visible segment.
    pub fn validate(&self) -> Result<()> {
        let radius_ok = self.radius.is_finite() && self.radius > 0.0;

        if self.count == 0 || self.rows == 0 || !radius_ok {
            return Err(ExperienceError::EmptyRing {
                count: self.count,
                rows: self.rows,
                radius: self.radius,
            });
        }

        Ok(())
    }

    /// Total number of segments in the tower.
    pub fn len(&self) -> usize {
        self.rows * self.count
    }

    /// Returns `true` if the tower has no segment.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Width of a box segment: the chord subtending one segment of the ring.
    pub fn segment_width(&self) -> f32 {
        2.0 * self.radius * (PI / self.count as f32).sin()
    }

    /// Angle of the segment at (`row`, `column`).
    ///
    /// Rows are staggered by half a segment, cycling every `active_rows` rows.
    pub fn angle(&self, row: usize, column: usize, active_rows: usize) -> f32 {
        let count = self.count as f32;
        let stagger = (row % active_rows.max(1)) as f32;

        TAU * column as f32 / count + stagger * PI / count
    }

    /// Rest placement of the segment at (`row`, `column`).
    ///
    /// Row `i` sits at height `-i`, so the tower grows downward from the
    /// group origin.
    pub fn placement(&self, row: usize, column: usize, active_rows: usize) -> Placement {
        let angle = self.angle(row, column, active_rows);
        let distance = self.radius + self.gap;

        Placement {
            position: Vec3::new(distance * angle.sin(), -(row as f32), distance * angle.cos()),
            rotation: Quat::from_axis_angle(Vec3::Y, angle),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1.0e-5;

    #[test]
    fn segment_width_is_the_ring_chord() {
        let layout = RingLayout::default();
        // 2 * 3 * sin(pi / 12)
        assert!((layout.segment_width() - 1.552_914_3).abs() < EPS);
        assert_eq!(layout.len(), 120);
    }

    #[test]
    fn rows_are_staggered_by_half_a_segment() {
        let layout = RingLayout::default();
        let half = PI / 12.0;

        assert!(layout.angle(0, 0, 4).abs() < EPS);
        assert!((layout.angle(1, 0, 4) - half).abs() < EPS);
        assert!((layout.angle(3, 0, 4) - 3.0 * half).abs() < EPS);
        // The stagger cycles with the active rows.
        assert!((layout.angle(4, 0, 4) - layout.angle(0, 0, 4)).abs() < EPS);
        assert!((layout.angle(0, 3, 4) - TAU / 4.0).abs() < EPS);
    }

    #[test]
    fn placement_sits_on_the_pushed_out_circle() {
        let layout = RingLayout::default();

        for row in 0..layout.rows {
            for column in 0..layout.count {
                let placement = layout.placement(row, column, 4);
                let horizontal = Vec3::new(placement.position.x, 0.0, placement.position.z);

                assert!((horizontal.length() - 3.39).abs() < EPS);
                assert_eq!(placement.position.y, -(row as f32));
            }
        }

        let quarter = layout.placement(0, 3, 4);
        assert!((quarter.position.x - 3.39).abs() < EPS);
        assert!(quarter.position.z.abs() < EPS);

        // A segment rotated by its angle faces outward: its local Z axis points
        // away from the tower axis.
        let outward = quarter.rotation * Vec3::Z;
        assert!((outward - Vec3::X).length() < EPS);
    }

    #[test]
    fn empty_layouts_are_rejected() {
        assert!(RingLayout::default().validate().is_ok());
        assert!(RingLayout::default().with_count(0).validate().is_err());
        assert!(RingLayout::default().with_rows(0).validate().is_err());
        assert!(RingLayout::default().with_radius(-1.0).validate().is_err());
    }
}
