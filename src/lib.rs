//! Particle Folio - personal portfolio page over a 3D particle field
//!
//! A slowly rotating cloud of points, orbitable by dragging, rendered behind
//! a single scrolling page: navigation, hero, about, projects, contact and
//! footer. Runs in the browser (mounted into a page element) and natively.

pub mod config;
pub mod field;

#[cfg(not(target_arch = "wasm32"))]
pub mod window;

#[cfg(any(feature = "wasm", feature = "native"))]
pub mod app;
#[cfg(any(feature = "wasm", feature = "native"))]
mod render;
#[cfg(any(feature = "wasm", feature = "native"))]
mod theme;

#[cfg(all(feature = "wasm", target_arch = "wasm32"))]
mod web;

#[cfg(all(feature = "wasm", target_arch = "wasm32"))]
pub use web::{init, mount, Portfolio};
