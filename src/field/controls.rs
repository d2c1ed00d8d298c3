//! Drag-to-orbit camera control with damping
//!
//! The camera orbits its target on a sphere. Drag input accumulates a
//! pending (theta, phi) delta; each `update` applies a fraction of it
//! (`damping_factor`) and decays the rest, so motion eases out after the
//! pointer is released.

use glam::Vec3;
use std::f32::consts::{PI, TAU};

use super::camera::PerspectiveCamera;
use crate::config::ControlSettings;

const EPS: f32 = 1e-6;
/// Closest the polar angle may get to straight up or down
const POLE_MARGIN: f32 = 1e-3;

/// Spherical coordinates: `phi` is the polar angle from +Y, `theta` the
/// azimuth around Y measured from +Z
#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct Spherical {
    radius: f32,
    phi: f32,
    theta: f32,
}

impl Spherical {
    fn from_offset(v: Vec3) -> Self {
        let radius = v.length();
        if radius == 0.0 {
            return Self::default();
        }
        Self {
            radius,
            theta: v.x.atan2(v.z),
            phi: (v.y / radius).clamp(-1.0, 1.0).acos(),
        }
    }

    fn to_offset(self) -> Vec3 {
        let sin_phi_r = self.phi.sin() * self.radius;
        Vec3::new(
            sin_phi_r * self.theta.sin(),
            self.phi.cos() * self.radius,
            sin_phi_r * self.theta.cos(),
        )
    }

    /// Keep phi away from the poles so look-at stays well defined
    fn make_safe(&mut self) {
        self.phi = self.phi.clamp(POLE_MARGIN, PI - POLE_MARGIN);
    }
}

#[derive(Clone, Debug)]
pub struct OrbitControls {
    pub enable_damping: bool,
    pub damping_factor: f32,
    pub enable_zoom: bool,
    pub rotate_speed: f32,
    /// Pending rotation not yet applied to the camera
    delta: Spherical,
    /// Pending dolly scale (1.0 = none)
    scale: f32,
}

impl OrbitControls {
    pub fn new(settings: &ControlSettings) -> Self {
        Self {
            enable_damping: settings.enable_damping,
            damping_factor: settings.damping_factor,
            enable_zoom: settings.enable_zoom,
            rotate_speed: settings.rotate_speed,
            delta: Spherical::default(),
            scale: 1.0,
        }
    }

    /// Queue a rotation from a pointer drag of `(dx, dy)` pixels.
    /// A drag across the full viewport height turns the camera once around.
    pub fn drag(&mut self, dx: f32, dy: f32, viewport_height: f32) {
        if !(viewport_height > 0.0) {
            return;
        }
        self.delta.theta -= TAU * dx / viewport_height * self.rotate_speed;
        self.delta.phi -= TAU * dy / viewport_height * self.rotate_speed;
    }

    /// Queue a dolly from scroll input. Returns false when zoom is disabled.
    pub fn zoom(&mut self, scroll: f32) -> bool {
        if !self.enable_zoom || scroll == 0.0 {
            return false;
        }
        self.scale *= 0.95_f32.powf(scroll.signum());
        true
    }

    /// Whether rotation is still pending (the camera will keep moving)
    pub fn is_settling(&self) -> bool {
        self.delta.theta.abs() > EPS || self.delta.phi.abs() > EPS
    }

    /// Apply pending input to the camera. Returns true if the camera moved.
    pub fn update(&mut self, camera: &mut PerspectiveCamera) -> bool {
        let offset = camera.position - camera.target;
        let mut spherical = Spherical::from_offset(offset);

        let weight = if self.enable_damping {
            self.damping_factor
        } else {
            1.0
        };
        spherical.theta += self.delta.theta * weight;
        spherical.phi += self.delta.phi * weight;
        spherical.make_safe();
        spherical.radius *= self.scale;

        let position = camera.target + spherical.to_offset();
        let moved = position.distance_squared(camera.position) > EPS;
        camera.position = position;

        if self.enable_damping {
            self.delta.theta *= 1.0 - self.damping_factor;
            self.delta.phi *= 1.0 - self.damping_factor;
        } else {
            self.delta = Spherical::default();
        }
        self.scale = 1.0;

        moved
    }
}
