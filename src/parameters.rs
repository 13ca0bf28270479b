//! Timing parameters of the scrolling animation.

use crate::error::{ExperienceError, Result};

/// Timing of one full animation loop.
///
/// The animation does not look at wall-clock time: the playhead is advanced by
/// a fixed [`step`](Parameters::step) every rendered frame, so `fps` is the
/// frame rate the loop is tuned for rather than a limit.
///
/// # Example
/// ```
/// use ring_tower::parameters::Parameters;
///
/// let params = Parameters::default().with_duration(2.0).with_fps(30.0);
/// assert!((params.step() - 1.0 / 60.0).abs() < 1.0e-6);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Parameters {
    /// Length of one loop, in seconds.
    pub duration: f32,
    /// Frames per second the step is computed for.
    pub fps: f32,
    /// Number of top rows that take part in the animation.
    pub active_rows: usize,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            duration: 3.0,
            fps: 60.0,
            active_rows: 4,
        }
    }
}

impl Parameters {
    /// Sets the loop duration, in seconds.
    pub fn with_duration(mut self, duration: f32) -> Self {
        self.duration = duration;
        self
    }

    /// Sets the frame rate the step is computed for.
    pub fn with_fps(mut self, fps: f32) -> Self {
        self.fps = fps;
        self
    }

    /// Sets the number of animated rows.
    pub fn with_active_rows(mut self, active_rows: usize) -> Self {
        self.active_rows = active_rows;
        self
    }

    /// Phase increment applied every frame: `1 / (fps * duration)`.
    pub fn step(&self) -> f32 {
        1.0 / (self.fps * self.duration)
    }

    /// Checks that the parameters describe a usable animation.
    pub fn validate(&self) -> Result<()> {
        positive("duration", self.duration)?;
        positive("fps", self.fps)?;

        if self.active_rows == 0 {
            return Err(ExperienceError::NoActiveRows);
        }

        Ok(())
    }
}

fn positive(name: &'static str, value: f32) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ExperienceError::InvalidParameter { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_step_covers_three_seconds_at_sixty_fps() {
        let params = Parameters::default();
        assert_eq!(params.active_rows, 4);
        assert!((params.step() - 1.0 / 180.0).abs() < 1.0e-7);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn rejects_degenerate_timings() {
        assert_eq!(
            Parameters::default().with_duration(0.0).validate(),
            Err(ExperienceError::InvalidParameter {
                name: "duration",
                value: 0.0
            })
        );
        assert!(matches!(
            Parameters::default().with_fps(f32::NAN).validate(),
            Err(ExperienceError::InvalidParameter { name: "fps", .. })
        ));
        assert_eq!(
            Parameters::default().with_active_rows(0).validate(),
            Err(ExperienceError::NoActiveRows)
        );
    }
}
