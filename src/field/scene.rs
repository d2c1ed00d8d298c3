//! Particle field scene: point mesh, camera, controls and projection

use glam::{Mat4, Vec3, Vec4};
use rand::Rng;
use std::f32::consts::TAU;

use super::camera::{PerspectiveCamera, Viewport};
use super::controls::OrbitControls;
use super::particles::ParticleSet;
use crate::config::{FieldConfig, Rgb};

/// Smallest on-screen point, in pixels. Attenuated sizes below this would
/// vanish entirely on most displays.
pub const MIN_POINT_PIXELS: f32 = 1.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointsMaterial {
    /// World-space size (screen pixels when `size_attenuation` is off)
    pub size: f32,
    pub color: Rgb,
    pub size_attenuation: bool,
}

/// Point cloud: owns the particle set and its material
#[derive(Debug)]
pub struct PointsMesh {
    geometry: ParticleSet,
    material: PointsMaterial,
    /// Rotation around Y, kept in `[0, 2π)`
    rotation_y: f32,
}

impl PointsMesh {
    pub fn new(geometry: ParticleSet, material: PointsMaterial) -> Self {
        Self {
            geometry,
            material,
            rotation_y: 0.0,
        }
    }

    pub fn geometry(&self) -> &ParticleSet {
        &self.geometry
    }

    pub fn material(&self) -> &PointsMaterial {
        &self.material
    }

    pub fn rotation_y(&self) -> f32 {
        self.rotation_y
    }

    fn rotate_y(&mut self, step: f32) {
        self.rotation_y = (self.rotation_y + step).rem_euclid(TAU);
    }

    fn model(&self) -> Mat4 {
        Mat4::from_rotation_y(self.rotation_y)
    }
}

/// A particle projected to screen space
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenPoint {
    pub x: f32,
    pub y: f32,
    /// Diameter in pixels
    pub size: f32,
}

/// Per-frame projection target, reused across frames
#[derive(Debug, Default)]
pub struct PointBuffer {
    points: Vec<ScreenPoint>,
    color: Option<Rgb>,
}

impl PointBuffer {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
            color: None,
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[ScreenPoint] {
        &self.points
    }

    /// Material color of the last projection
    pub fn color(&self) -> Option<Rgb> {
        self.color
    }

    pub fn capacity(&self) -> usize {
        self.points.capacity()
    }
}

/// Scene state for the particle background.
///
/// Only the mesh rotation and (through orbit control) the camera change
/// after construction; the particle set is fixed.
#[derive(Debug)]
pub struct ParticleField {
    camera: PerspectiveCamera,
    controls: OrbitControls,
    mesh: PointsMesh,
    rotation_step: f32,
    frames: u64,
}

impl ParticleField {
    pub fn new<R: Rng + ?Sized>(config: &FieldConfig, viewport: Viewport, rng: &mut R) -> Self {
        let geometry = ParticleSet::generate(config.particle_count, config.spread, rng);
        let material = PointsMaterial {
            size: config.point_size,
            color: config.color,
            size_attenuation: true,
        };
        Self {
            camera: PerspectiveCamera::new(&config.camera, viewport.aspect()),
            controls: OrbitControls::new(&config.controls),
            mesh: PointsMesh::new(geometry, material),
            rotation_step: config.rotation_step,
            frames: 0,
        }
    }

    pub fn camera(&self) -> &PerspectiveCamera {
        &self.camera
    }

    pub fn controls_mut(&mut self) -> &mut OrbitControls {
        &mut self.controls
    }

    pub fn mesh(&self) -> &PointsMesh {
        &self.mesh
    }

    pub fn rotation(&self) -> f32 {
        self.mesh.rotation_y()
    }

    /// Frames advanced since construction
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// One render-loop step: rotate the mesh, then settle orbit damping
    pub fn advance(&mut self) {
        self.mesh.rotate_y(self.rotation_step);
        self.controls.update(&mut self.camera);
        self.frames += 1;
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.camera.set_aspect(viewport.aspect());
    }

    /// Project every visible particle into `out`, replacing its contents.
    /// Screen coordinates are relative to the top-left of `viewport`.
    pub fn project(&self, viewport: Viewport, out: &mut PointBuffer) {
        out.points.clear();
        out.color = Some(self.mesh.material.color);

        let view_proj = self.camera.projection() * self.camera.view() * self.mesh.model();
        let material = &self.mesh.material;
        // Pixels per world unit at unit depth
        let scale = viewport.height * 0.5;

        for &position in self.mesh.geometry.positions() {
            let clip = view_proj * Vec4::from((position, 1.0));
            if clip.w <= 0.0 {
                continue;
            }
            let ndc = Vec3::new(clip.x, clip.y, clip.z) / clip.w;
            if ndc.abs().max_element() > 1.0 {
                continue;
            }

            let size = if material.size_attenuation {
                material.size * scale / clip.w
            } else {
                material.size
            };
            out.points.push(ScreenPoint {
                x: (ndc.x * 0.5 + 0.5) * viewport.width,
                y: (0.5 - ndc.y * 0.5) * viewport.height,
                size: size.max(MIN_POINT_PIXELS),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn field(viewport: Viewport) -> ParticleField {
        ParticleField::new(
            &FieldConfig::default(),
            viewport,
            &mut StdRng::seed_from_u64(42),
        )
    }

    #[test]
    fn new_field_matches_config() {
        let field = field(Viewport::new(1024.0, 768.0));
        assert_eq!(field.mesh().geometry().len(), 5000);
        assert_eq!(field.mesh().material().size, 0.005);
        assert_eq!(field.mesh().material().color, Rgb([0x21, 0x96, 0xf3]));
        assert!((field.camera().aspect() - 1024.0 / 768.0).abs() < 1e-5);
        assert_eq!(field.rotation(), 0.0);
        assert_eq!(field.frames(), 0);
    }

    #[test]
    fn rotation_advances_by_constant_step() {
        let mut field = field(Viewport::new(800.0, 600.0));
        let mut previous = field.rotation();
        for frame in 1..=500u32 {
            field.advance();
            let current = field.rotation();
            let step = (current - previous).rem_euclid(TAU);
            assert!((step - 0.001).abs() < 1e-5, "frame {frame}: step {step}");
            previous = current;
        }
        assert!((field.rotation() - 0.5).abs() < 1e-3);
        assert_eq!(field.frames(), 500);
    }

    #[test]
    fn rotation_wraps_into_full_turn() {
        let config = FieldConfig {
            rotation_step: 1.0,
            ..FieldConfig::default()
        };
        let mut field =
            ParticleField::new(&config, Viewport::new(100.0, 100.0), &mut StdRng::seed_from_u64(1));
        for _ in 0..20 {
            field.advance();
            assert!((0.0..TAU).contains(&field.rotation()));
        }
        assert!((field.rotation() - 20.0f32.rem_euclid(TAU)).abs() < 1e-3);
    }

    #[test]
    fn particles_do_not_move_between_frames() {
        let mut field = field(Viewport::new(800.0, 600.0));
        let before = field.mesh().geometry().positions().to_vec();
        field.controls_mut().drag(40.0, 10.0, 600.0);
        for _ in 0..50 {
            field.advance();
        }
        assert_eq!(field.mesh().geometry().positions(), &before[..]);
    }

    #[test]
    fn resize_updates_aspect() {
        let mut field = field(Viewport::new(1280.0, 720.0));
        assert!((field.camera().aspect() - 1.778).abs() < 1e-3);
        field.resize(Viewport::new(640.0, 480.0));
        assert!((field.camera().aspect() - 1.333).abs() < 1e-3);
    }

    #[test]
    fn projection_stays_on_screen() {
        let viewport = Viewport::new(1024.0, 768.0);
        let field = field(viewport);
        let mut buffer = PointBuffer::default();
        field.project(viewport, &mut buffer);

        assert!(!buffer.is_empty());
        assert!(buffer.len() <= 5000);
        assert_eq!(buffer.color(), Some(Rgb([0x21, 0x96, 0xf3])));
        for p in buffer.points() {
            assert!((0.0..=viewport.width).contains(&p.x));
            assert!((0.0..=viewport.height).contains(&p.y));
            assert!(p.size >= MIN_POINT_PIXELS);
        }
    }

    #[test]
    fn projection_center_and_attenuation() {
        let viewport = Viewport::new(1000.0, 800.0);
        let config = FieldConfig {
            particle_count: 1,
            spread: 1e-6,
            point_size: 1.5,
            ..FieldConfig::default()
        };
        let field = ParticleField::new(&config, viewport, &mut StdRng::seed_from_u64(5));
        let mut buffer = PointBuffer::default();
        field.project(viewport, &mut buffer);

        let p = buffer.points()[0];
        assert!((p.x - 500.0).abs() < 0.01);
        assert!((p.y - 400.0).abs() < 0.01);
        // size * (height / 2) / depth
        assert!((p.size - 1.5 * 400.0 / 3.0).abs() < 0.01, "size {}", p.size);
    }

    #[test]
    fn projection_reuses_buffer() {
        let viewport = Viewport::new(800.0, 600.0);
        let mut field = field(viewport);
        let mut buffer = PointBuffer::with_capacity(5000);
        field.project(viewport, &mut buffer);
        let first = buffer.len();
        field.advance();
        field.project(viewport, &mut buffer);
        assert!(buffer.len() <= 5000);
        assert!(first > 0);
        assert!(buffer.capacity() >= 5000);
    }
}
