//! The looping scroll animation.
//!
//! Every frame the [`Clock`] advances the global playhead by a fixed step.
//! The whole tower group scrolls up by `playhead × active_rows`, while each
//! segment of the active rows drops from ten units above its rest height
//! with a cubic ease. Once a segment's local phase passes `1`, it starts its
//! next drop and a duplicate left at the rest height is shown, hiding the
//! seam left behind.

use crate::parameters::Parameters;

/// Height a segment falls from, above its rest height.
pub const DROP_HEIGHT: f32 = 10.0;

/// Cubic ease-in: `t³`.
#[inline]
pub fn ease_in_cubic(t: f32) -> f32 {
    t * t * t
}

/// Vertical offset of the tower group for the given playhead.
#[inline]
pub fn group_offset(playhead: f32, active_rows: usize) -> f32 {
    -playhead * active_rows as f32
}

/// Fixed-step phase accumulator.
#[derive(Clone, Debug, PartialEq)]
pub struct Clock {
    time: f32,
    step: f32,
    loops: u64,
}

impl Clock {
    /// Creates a clock advancing by `parameters.step()` every frame.
    pub fn new(parameters: &Parameters) -> Self {
        Self::with_step(parameters.step())
    }

    /// Creates a clock advancing by `step` every frame.
    pub fn with_step(step: f32) -> Self {
        Self {
            time: 0.0,
            step,
            loops: 0,
        }
    }

    /// Advances the clock by one frame and returns the new playhead.
    pub fn tick(&mut self) -> f32 {
        self.time += self.step;

        // Keep the accumulator small so the fractional part stays precise.
        if self.time >= 1.0 {
            self.time = self.time.fract();
            self.loops += 1;
            log::trace!("animation loop {} completed", self.loops);
        }

        self.playhead()
    }

    /// The current playhead, in `[0, 1)`.
    pub fn playhead(&self) -> f32 {
        self.time % 1.0
    }

    /// Number of completed loops.
    pub fn loops(&self) -> u64 {
        self.loops
    }
}

/// What a segment looks like on a given frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SegmentFrame {
    /// Height of the primary mesh, relative to the tower group.
    pub y: f32,
    /// Whether the duplicate mesh is shown.
    pub duplicate_visible: bool,
}

/// Animation record of a single segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SegmentAnimation {
    /// Row of the segment; row `0` is the top ring.
    pub row: usize,
    /// Rest height of the segment.
    pub y: f32,
    /// Phase offset added to the global playhead.
    pub offset: f32,
}

impl SegmentAnimation {
    /// Whether this segment moves at all.
    pub fn is_active(&self, active_rows: usize) -> bool {
        self.row < active_rows
    }

    /// Computes the segment state for the given global playhead.
    pub fn evaluate(&self, playhead: f32, active_rows: usize) -> SegmentFrame {
        if !self.is_active(active_rows) {
            return SegmentFrame {
                y: self.y,
                duplicate_visible: false,
            };
        }

        let theta = playhead + self.offset;

        if theta > 1.0 {
            let eased = ease_in_cubic(theta - 1.0);
            SegmentFrame {
                y: self.y + (1.0 - eased) * DROP_HEIGHT - group_offset(playhead, active_rows),
                duplicate_visible: true,
            }
        } else {
            let eased = ease_in_cubic(theta);
            SegmentFrame {
                y: self.y + (1.0 - eased) * DROP_HEIGHT,
                duplicate_visible: false,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1.0e-5;

    fn segment(row: usize, offset: f32) -> SegmentAnimation {
        SegmentAnimation {
            row,
            y: -(row as f32),
            offset,
        }
    }

    #[test]
    fn clock_wraps_into_the_unit_interval() {
        let mut clock = Clock::new(&Parameters::default());
        let mut last = 0.0;

        for frame in 1..=400 {
            let playhead = clock.tick();
            assert!((0.0..1.0).contains(&playhead), "frame {frame}: {playhead}");
            if frame % 180 != 0 {
                assert!(playhead > last || playhead < 0.01);
            }
            last = playhead;
        }

        assert_eq!(clock.loops(), 2);
    }

    #[test]
    fn group_scrolls_up_with_the_playhead() {
        assert_eq!(group_offset(0.0, 4), 0.0);
        assert!((group_offset(0.5, 4) + 2.0).abs() < EPS);
    }

    #[test]
    fn falling_segment_keeps_duplicate_hidden() {
        let record = segment(1, 0.25);

        let start = record.evaluate(0.25, 4);
        assert!(!start.duplicate_visible);
        assert!((start.y - (-1.0 + (1.0 - 0.125) * 10.0)).abs() < EPS);

        // theta == 1 lands exactly on the rest height.
        let landed = record.evaluate(0.75, 4);
        assert!(!landed.duplicate_visible);
        assert!((landed.y - record.y).abs() < EPS);
    }

    #[test]
    fn wrapped_segment_shows_duplicate_and_compensates_scroll() {
        let record = segment(2, 0.6);
        let frame = record.evaluate(0.5, 4);

        assert!(frame.duplicate_visible);
        let eased = 0.1f32.powi(3);
        let expected = -2.0 + (1.0 - eased) * 10.0 + 0.5 * 4.0;
        assert!((frame.y - expected).abs() < EPS);
    }

    #[test]
    fn inactive_rows_stay_at_rest() {
        let record = segment(7, 1.9);

        for playhead in [0.0, 0.25, 0.5, 0.99] {
            let frame = record.evaluate(playhead, 4);
            assert_eq!(frame.y, record.y);
            assert!(!frame.duplicate_visible);
        }
    }
}
