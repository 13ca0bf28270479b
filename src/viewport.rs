//! Resize handling.

/// Upper bound on the device pixel ratio used for rendering.
pub const MAX_PIXEL_RATIO: f64 = 2.0;

/// Size of the drawing surface, updated on every framebuffer resize.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    width: u32,
    height: u32,
    scale_factor: f64,
}

impl Viewport {
    /// Creates a viewport of `width × height` physical pixels.
    pub fn new(width: u32, height: u32, scale_factor: f64) -> Self {
        Self {
            width,
            height,
            scale_factor,
        }
    }

    /// Records a new surface size.
    ///
    /// Returns `true` if the size actually changed.
    pub fn resize(&mut self, width: u32, height: u32, scale_factor: f64) -> bool {
        let changed = (width, height) != (self.width, self.height);

        self.width = width;
        self.height = height;
        self.scale_factor = scale_factor;

        if changed {
            log::debug!(
                "viewport resized to {}x{} (aspect {:.3}, pixel ratio {})",
                width,
                height,
                self.aspect(),
                self.pixel_ratio()
            );
        }

        changed
    }

    /// Width, in physical pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height, in physical pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Width over height. A zero-height surface (minimized window) yields `1`.
    pub fn aspect(&self) -> f32 {
        if self.height == 0 {
            1.0
        } else {
            self.width as f32 / self.height as f32
        }
    }

    /// Device pixel ratio clamped to [`MAX_PIXEL_RATIO`].
    pub fn pixel_ratio(&self) -> f64 {
        self.scale_factor.min(MAX_PIXEL_RATIO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aspect_follows_resizes() {
        let mut viewport = Viewport::new(800, 600, 1.0);
        assert!((viewport.aspect() - 4.0 / 3.0).abs() < 1.0e-6);

        assert!(viewport.resize(1920, 1080, 1.0));
        assert!((viewport.aspect() - 16.0 / 9.0).abs() < 1.0e-6);
        assert!(!viewport.resize(1920, 1080, 1.0));

        viewport.resize(1920, 0, 1.0);
        assert_eq!(viewport.aspect(), 1.0);
    }

    #[test]
    fn pixel_ratio_is_clamped() {
        assert_eq!(Viewport::new(1, 1, 1.5).pixel_ratio(), 1.5);
        assert_eq!(Viewport::new(1, 1, 3.0).pixel_ratio(), 2.0);
    }
}
