//! Light rig of the demos: one point light, one directional light and a
//! global ambient term.

use glamx::Vec3;
use kiss3d::color::{Color, WHITE};
use kiss3d::light::Light;

/// A point light and where it sits relative to the scene root.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointLight {
    /// Light color.
    pub color: Color,
    /// Intensity multiplier.
    pub intensity: f32,
    /// Distance beyond which the light has no effect.
    pub range: f32,
    /// Position, relative to the scene root.
    pub position: Vec3,
}

/// A directional light shining from `position` toward the scene origin.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DirectionalLight {
    /// Light color.
    pub color: Color,
    /// Intensity multiplier.
    pub intensity: f32,
    /// Point the light shines from.
    pub position: Vec3,
}

impl DirectionalLight {
    /// Direction of the light rays.
    ///
    /// Falls back to straight down when the light sits at the origin.
    pub fn direction(&self) -> Vec3 {
        (-self.position).try_normalize().unwrap_or(Vec3::NEG_Y)
    }
}

/// The full light rig.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Lighting {
    /// Global ambient intensity.
    pub ambient: f32,
    /// The point light.
    pub point: PointLight,
    /// The directional light.
    pub directional: DirectionalLight,
}

impl Default for Lighting {
    fn default() -> Self {
        Self {
            ambient: 0.5,
            point: PointLight {
                color: WHITE,
                intensity: 10.0,
                range: 100.0,
                position: Vec3::new(0.0, 0.0, 6.0),
            },
            directional: DirectionalLight {
                color: WHITE,
                intensity: 1.0,
                position: Vec3::new(4.0, 2.0, 3.0),
            },
        }
    }
}

impl Lighting {
    /// Sets the ambient intensity.
    pub fn with_ambient(mut self, ambient: f32) -> Self {
        self.ambient = ambient;
        self
    }

    /// Library light for the point light.
    pub fn point_light(&self) -> Light {
        Light::point(self.point.range)
            .with_color(self.point.color)
            .with_intensity(self.point.intensity)
    }

    /// Library light for the directional light.
    pub fn directional_light(&self) -> Light {
        Light::directional(self.directional.direction())
            .with_color(self.directional.color)
            .with_intensity(self.directional.intensity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kiss3d::light::LightType;

    #[test]
    fn directional_light_points_at_the_origin() {
        let lighting = Lighting::default();
        let dir = lighting.directional.direction();

        assert!((dir.length() - 1.0).abs() < 1.0e-6);
        assert!(dir.dot(lighting.directional.position) < 0.0);
        assert_eq!(
            lighting.directional_light().light_type,
            LightType::Directional(dir)
        );
    }

    #[test]
    fn default_ambient_is_softened() {
        assert_eq!(Lighting::default().ambient, 0.5);
        assert_eq!(Lighting::default().with_ambient(1.0).ambient, 1.0);
    }

    #[test]
    fn degenerate_directional_light_shines_down() {
        let mut lighting = Lighting::default();
        lighting.directional.position = Vec3::ZERO;
        assert_eq!(lighting.directional.direction(), Vec3::NEG_Y);
    }

    #[test]
    fn point_light_keeps_its_range_and_intensity() {
        let light = Lighting::default().point_light();

        assert_eq!(
            light.light_type,
            LightType::Point {
                attenuation_radius: 100.0
            }
        );
        assert_eq!(light.intensity, 10.0);
        assert_eq!(light.color, WHITE);
    }
}
