//! Scene construction and the render loop.

use glamx::Vec3;
use kiss3d::camera::OrbitCamera3d;
use kiss3d::color::{Color, BLACK, RED, WHITE};
use kiss3d::event::WindowEvent;
use kiss3d::scene::SceneNode3d;
use kiss3d::window::{CanvasSetup, NumSamples, Window};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::animation::{group_offset, Clock, SegmentAnimation, SegmentFrame};
use crate::error::{ExperienceError, Result};
use crate::layout::RingLayout;
use crate::lighting::Lighting;
use crate::mount::mount;
use crate::parameters::Parameters;
use crate::palette::Pattern;
use crate::tower::{SegmentSpec, Tower};
use crate::viewport::Viewport;

/// Everything needed to build an [`Experience`].
///
/// # Example
/// ```
/// use ring_tower::prelude::*;
///
/// let config = ExperienceConfig::scroll()
///     .with_seed(42)
///     .with_parameters(Parameters::default().with_duration(5.0));
/// assert!(config.animated);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExperienceConfig {
    /// Window title (ignored by browsers).
    pub title: String,
    /// CSS selector of the element the canvas is mounted into.
    pub container: String,
    /// Animation timing.
    pub parameters: Parameters,
    /// Tower dimensions.
    pub layout: RingLayout,
    /// Light rig.
    pub lighting: Lighting,
    /// Initial camera position.
    pub camera_eye: Vec3,
    /// Point the camera orbits around.
    pub camera_target: Vec3,
    /// Vertical field of view, in radians.
    pub fov: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
    /// Initial window size, in pixels (native only).
    pub window_size: (u32, u32),
    /// Multisampling level: 0, 1, 2, 4, 8 or 16 samples per pixel.
    pub samples: u32,
    /// Whether presentation waits for vertical sync.
    pub vsync: bool,
    /// Color of the light pattern cells.
    pub light_color: Color,
    /// Color of the dark pattern cells.
    pub dark_color: Color,
    /// Height the whole scene is raised by.
    pub scene_height: f32,
    /// Clear color.
    pub background: Color,
    /// Whether the scroll animation runs.
    pub animated: bool,
    /// Seed of the procedural pattern; a random one is used when `None`.
    pub seed: Option<u64>,
}

impl Default for ExperienceConfig {
    fn default() -> Self {
        Self {
            title: "Ring tower".to_string(),
            container: "#app".to_string(),
            parameters: Parameters::default(),
            layout: RingLayout::default(),
            lighting: Lighting::default(),
            camera_eye: Vec3::new(0.0, 4.0, 8.0),
            camera_target: Vec3::ZERO,
            fov: 75f32.to_radians(),
            znear: 0.1,
            zfar: 1000.0,
            window_size: (800, 600),
            samples: 4,
            vsync: true,
            light_color: WHITE,
            dark_color: RED,
            scene_height: 3.0,
            background: BLACK,
            animated: false,
            seed: None,
        }
    }
}

impl ExperienceConfig {
    /// The static tower.
    pub fn tower() -> Self {
        Self::default().with_title("Ring tower")
    }

    /// The infinitely scrolling tower.
    pub fn scroll() -> Self {
        Self::default()
            .with_title("Ring tower: scroll")
            .with_animation(true)
    }

    /// Sets the window title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the CSS selector of the mount point.
    pub fn with_container(mut self, container: impl Into<String>) -> Self {
        self.container = container.into();
        self
    }

    /// Sets the animation timing.
    pub fn with_parameters(mut self, parameters: Parameters) -> Self {
        self.parameters = parameters;
        self
    }

    /// Sets the tower dimensions.
    pub fn with_layout(mut self, layout: RingLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Sets the light rig.
    pub fn with_lighting(mut self, lighting: Lighting) -> Self {
        self.lighting = lighting;
        self
    }

    /// Sets the initial camera position and the point it orbits around.
    pub fn with_camera(mut self, eye: Vec3, target: Vec3) -> Self {
        self.camera_eye = eye;
        self.camera_target = target;
        self
    }

    /// Sets the perspective frustum: vertical field of view (radians) and
    /// clipping planes.
    pub fn with_frustum(mut self, fov: f32, znear: f32, zfar: f32) -> Self {
        self.fov = fov;
        self.znear = znear;
        self.zfar = zfar;
        self
    }

    /// Sets the initial window size.
    pub fn with_window_size(mut self, width: u32, height: u32) -> Self {
        self.window_size = (width, height);
        self
    }

    /// Sets the multisampling level; `0` disables antialiasing.
    pub fn with_samples(mut self, samples: u32) -> Self {
        self.samples = samples;
        self
    }

    /// Sets the two colors of the procedural pattern.
    pub fn with_palette(mut self, light: Color, dark: Color) -> Self {
        self.light_color = light;
        self.dark_color = dark;
        self
    }

    /// Sets the clear color.
    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    /// Enables or disables the scroll animation.
    pub fn with_animation(mut self, animated: bool) -> Self {
        self.animated = animated;
        self
    }

    /// Makes the procedural pattern reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Checks the timing, the layout, the frustum and the sample count.
    pub fn validate(&self) -> Result<()> {
        self.parameters.validate()?;
        self.layout.validate()?;
        self.canvas_setup()?;

        let frustum_ok = self.fov > 0.0
            && self.fov < std::f32::consts::PI
            && self.znear > 0.0
            && self.zfar > self.znear;
        if !frustum_ok {
            return Err(ExperienceError::InvalidFrustum {
                fov: self.fov,
                znear: self.znear,
                zfar: self.zfar,
            });
        }

        Ok(())
    }

    /// Surface settings handed to the window.
    pub fn canvas_setup(&self) -> Result<CanvasSetup> {
        let samples = NumSamples::from_u32(self.samples)
            .ok_or(ExperienceError::InvalidSampleCount(self.samples))?;

        Ok(CanvasSetup {
            vsync: self.vsync,
            samples,
        })
    }

    /// The orbit camera looking at the tower.
    pub fn camera(&self) -> OrbitCamera3d {
        OrbitCamera3d::new_with_frustum(
            self.fov,
            self.znear,
            self.zfar,
            self.camera_eye,
            self.camera_target,
        )
    }

    /// Generates the procedural tower described by this configuration.
    pub fn generate_tower(&self) -> Tower {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let pattern = Pattern::random(&mut rng, self.parameters.active_rows, self.layout.count)
            .with_colors(self.light_color, self.dark_color);

        Tower::from_pattern(&self.layout, self.parameters.active_rows, &pattern, &mut rng)
    }
}

/// A segment of the tower, with the two meshes that represent it.
struct Segment {
    animation: SegmentAnimation,
    rest: Vec3,
    mesh: SceneNode3d,
    duplicate: SceneNode3d,
}

impl Segment {
    fn spawn(group: &mut SceneNode3d, size: (f32, f32, f32), spec: &SegmentSpec) -> Self {
        let (wx, wy, wz) = size;
        let rest = spec.placement.position;
        let rotation = spec.placement.rotation;

        let mesh = group
            .add_cube(wx, wy, wz)
            .set_color(spec.color)
            .set_rotation(rotation)
            .set_position(rest);
        let duplicate = group
            .add_cube(wx, wy, wz)
            .set_color(spec.color)
            .set_rotation(rotation)
            .set_position(rest)
            .set_visible(false);

        Self {
            animation: spec.animation,
            rest,
            mesh,
            duplicate,
        }
    }

    fn apply(&mut self, frame: SegmentFrame) {
        self.mesh
            .set_position(Vec3::new(self.rest.x, frame.y, self.rest.z));
        self.duplicate.set_visible(frame.duplicate_visible);
    }
}

/// A running demo: window, camera, scene and animation state.
pub struct Experience {
    config: ExperienceConfig,
    window: Window,
    camera: OrbitCamera3d,
    scene: SceneNode3d,
    group: SceneNode3d,
    segments: Vec<Segment>,
    clock: Clock,
    viewport: Viewport,
}

impl Experience {
    /// Validates `config`, mounts the canvas and builds the whole scene.
    pub async fn new(config: ExperienceConfig) -> Result<Self> {
        config.validate()?;
        mount(&config.container)?;

        let (width, height) = config.window_size;
        let mut window =
            Window::new_with_setup(&config.title, width, height, config.canvas_setup()?).await;
        window.set_background_color(config.background);
        window.set_ambient(config.lighting.ambient);

        let viewport = Viewport::new(window.width(), window.height(), window.scale_factor());
        let camera = config.camera();

        let mut scene = SceneNode3d::empty();
        let mut stage = scene
            .add_group()
            .set_position(Vec3::new(0.0, config.scene_height, 0.0));

        let tower = config.generate_tower();
        let mut group = stage.add_group();
        let segments: Vec<_> = tower
            .segments
            .iter()
            .map(|spec| Segment::spawn(&mut group, tower.segment_size, spec))
            .collect();

        let lighting = &config.lighting;
        stage
            .add_light(lighting.point_light())
            .set_position(lighting.point.position);
        stage
            .add_light(lighting.directional_light())
            .set_position(lighting.directional.position);

        log::info!(
            "{} ready: {} segments, animated: {}",
            config.title,
            segments.len(),
            config.animated
        );

        Ok(Self {
            clock: Clock::new(&config.parameters),
            config,
            window,
            camera,
            scene,
            group,
            segments,
            viewport,
        })
    }

    /// The configuration this experience was built from.
    pub fn config(&self) -> &ExperienceConfig {
        &self.config
    }

    /// Number of tower segments (each backed by two meshes).
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Current drawing surface.
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Current playhead of the animation.
    pub fn playhead(&self) -> f32 {
        self.clock.playhead()
    }

    /// Renders frames until the window closes.
    pub async fn run(mut self) {
        while self.window.render_3d(&mut self.scene, &mut self.camera).await {
            self.handle_events();
            self.update();
        }

        log::info!("{} closed after {} loops", self.config.title, self.clock.loops());
    }

    /// Advances the animation by one frame.
    ///
    /// Static experiences are left untouched.
    pub fn update(&mut self) {
        if !self.config.animated {
            return;
        }

        let active_rows = self.config.parameters.active_rows;
        let playhead = self.clock.tick();

        self.group
            .set_position(Vec3::new(0.0, group_offset(playhead, active_rows), 0.0));

        for segment in &mut self.segments {
            let frame = segment.animation.evaluate(playhead, active_rows);
            segment.apply(frame);
        }
    }

    // The camera receives resize events from the window itself; only the
    // viewport bookkeeping happens here.
    fn handle_events(&mut self) {
        for event in self.window.events().iter() {
            if let WindowEvent::FramebufferSize(width, height) = event.value {
                self.viewport
                    .resize(width, height, self.window.scale_factor());
            }
        }
    }
}
