//! Particle field background
//!
//! A fixed cloud of random points that slowly rotates around the vertical
//! axis, viewed through a perspective camera the user can orbit by dragging.

mod camera;
mod controls;
mod lifecycle;
mod particles;
mod scene;

pub use camera::{PerspectiveCamera, Viewport};
pub use controls::OrbitControls;
pub use lifecycle::{Host, Mount, MountError};
pub use particles::ParticleSet;
pub use scene::{ParticleField, PointBuffer, PointsMaterial, PointsMesh, ScreenPoint, MIN_POINT_PIXELS};
