//! Mount / frame / teardown lifecycle of the particle field
//!
//! A [`Mount`] binds a [`ParticleField`] to a [`Host`]: the environment that
//! owns the container the render surface is attached to and the window whose
//! resize events drive the camera. Teardown happens exactly once, either
//! explicitly or when the `Mount` is dropped.

use rand::Rng;
use thiserror::Error;
use tracing::{debug, info};

use super::camera::Viewport;
use super::scene::{ParticleField, PointBuffer};
use crate::config::FieldConfig;

#[derive(Error, Debug)]
pub enum MountError {
    #[error("Container element `{0}` not found")]
    ContainerNotFound(String),
    #[error("Host environment error: {0}")]
    Host(String),
    #[error("Viewport {width}x{height} has no drawable area")]
    DegenerateViewport { width: f32, height: f32 },
    #[error("Particle field is already mounted")]
    AlreadyMounted,
}

/// Environment a particle field is mounted into.
///
/// Resize notifications are recorded by the host as they arrive and handed
/// out by [`Host::poll_resize`] at the start of the next frame; both happen on
/// the same thread.
pub trait Host {
    /// Drawable output target attached to the container
    type Surface;
    /// Live resize subscription; dropping it without
    /// [`Host::unsubscribe_resize`] may leak the listener
    type Subscription;

    /// Current window dimensions
    fn viewport(&self) -> Viewport;

    fn attach_surface(&mut self, viewport: Viewport) -> Result<Self::Surface, MountError>;

    fn resize_surface(&mut self, surface: &mut Self::Surface, viewport: Viewport);

    fn detach_surface(&mut self, surface: Self::Surface);

    fn subscribe_resize(&mut self) -> Result<Self::Subscription, MountError>;

    fn unsubscribe_resize(&mut self, subscription: Self::Subscription);

    /// Latest viewport reported since the previous poll, if any
    fn poll_resize(&mut self, subscription: &Self::Subscription) -> Option<Viewport>;
}

/// Everything acquired at mount time and released at teardown
struct Live<H: Host> {
    subscription: H::Subscription,
    surface: H::Surface,
    field: ParticleField,
    points: PointBuffer,
    viewport: Viewport,
}

/// A particle field mounted into a host
pub struct Mount<H: Host> {
    host: H,
    live: Option<Live<H>>,
}

impl<H: Host> Mount<H> {
    /// Attach a render surface, subscribe to resize and build the scene
    pub fn new<R: Rng + ?Sized>(
        host: H,
        config: &FieldConfig,
        rng: &mut R,
    ) -> Result<Self, MountError> {
        let mut mount = Self { host, live: None };
        mount.remount(config, rng)?;
        Ok(mount)
    }

    /// Mount again after [`Mount::teardown`]. The new field shares nothing
    /// with the previous one.
    pub fn remount<R: Rng + ?Sized>(
        &mut self,
        config: &FieldConfig,
        rng: &mut R,
    ) -> Result<(), MountError> {
        if self.live.is_some() {
            return Err(MountError::AlreadyMounted);
        }

        let viewport = self.host.viewport();
        if viewport.is_degenerate() {
            return Err(MountError::DegenerateViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        let surface = self.host.attach_surface(viewport)?;
        let subscription = match self.host.subscribe_resize() {
            Ok(subscription) => subscription,
            Err(e) => {
                self.host.detach_surface(surface);
                return Err(e);
            }
        };

        let field = ParticleField::new(config, viewport, rng);
        let points = PointBuffer::with_capacity(field.mesh().geometry().len());
        info!(
            particles = field.mesh().geometry().len(),
            width = viewport.width,
            height = viewport.height,
            "particle field mounted"
        );

        self.live = Some(Live {
            subscription,
            surface,
            field,
            points,
            viewport,
        });
        Ok(())
    }

    pub fn is_mounted(&self) -> bool {
        self.live.is_some()
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn surface(&self) -> Option<&H::Surface> {
        self.live.as_ref().map(|live| &live.surface)
    }

    pub fn field(&self) -> Option<&ParticleField> {
        self.live.as_ref().map(|live| &live.field)
    }

    /// Viewport the camera and surface are currently sized to
    pub fn viewport(&self) -> Option<Viewport> {
        self.live.as_ref().map(|live| live.viewport)
    }

    /// Forward a pointer drag to the orbit control
    pub fn drag(&mut self, dx: f32, dy: f32) {
        if let Some(live) = self.live.as_mut() {
            let height = live.viewport.height;
            live.field.controls_mut().drag(dx, dy, height);
        }
    }

    /// Forward scroll input; ignored unless zoom is enabled
    pub fn scroll(&mut self, delta: f32) {
        if let Some(live) = self.live.as_mut() {
            live.field.controls_mut().zoom(delta);
        }
    }

    /// Apply a resize notification now
    pub fn resize(&mut self, viewport: Viewport) {
        if let Some(live) = self.live.as_mut() {
            Self::apply_resize(&mut self.host, live, viewport);
        }
    }

    fn apply_resize(host: &mut H, live: &mut Live<H>, viewport: Viewport) {
        if viewport.is_degenerate() {
            debug!(width = viewport.width, height = viewport.height, "ignoring degenerate resize");
            return;
        }
        live.field.resize(viewport);
        host.resize_surface(&mut live.surface, viewport);
        live.viewport = viewport;
        debug!(width = viewport.width, height = viewport.height, "particle field resized");
    }

    /// One render-loop iteration. Returns the projected points to draw, or
    /// `None` once the field has been torn down.
    pub fn frame(&mut self) -> Option<&PointBuffer> {
        let live = self.live.as_mut()?;
        if let Some(viewport) = self.host.poll_resize(&live.subscription) {
            Self::apply_resize(&mut self.host, live, viewport);
        }
        live.field.advance();
        live.field.project(live.viewport, &mut live.points);
        Some(&live.points)
    }

    /// Stop the loop and release everything acquired at mount. Idempotent.
    pub fn teardown(&mut self) {
        let Some(live) = self.live.take() else {
            return;
        };
        let Live {
            subscription,
            surface,
            field,
            points,
            ..
        } = live;

        self.host.unsubscribe_resize(subscription);
        self.host.detach_surface(surface);
        let frames = field.frames();
        drop(field);
        drop(points);
        info!(frames, "particle field torn down");
    }
}

impl<H: Host> Drop for Mount<H> {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Recorded host side effects, shared so they survive the `Mount`
    #[derive(Default)]
    struct HostLog {
        viewport: Option<Viewport>,
        /// Attached surface ids and their current size
        attached: Vec<(u32, Viewport)>,
        next_surface: u32,
        subscribers: usize,
        pending: Option<Viewport>,
        fail_subscribe: bool,
    }

    #[derive(Clone, Default)]
    struct FakeHost(Rc<RefCell<HostLog>>);

    struct FakeSurface(u32);
    struct FakeSubscription;

    impl FakeHost {
        fn at(width: f32, height: f32) -> Self {
            let host = Self::default();
            host.0.borrow_mut().viewport = Some(Viewport::new(width, height));
            host
        }

        /// Window resize event: reaches only live subscribers
        fn fire_resize(&self, width: f32, height: f32) {
            let mut log = self.0.borrow_mut();
            let viewport = Viewport::new(width, height);
            log.viewport = Some(viewport);
            if log.subscribers > 0 {
                log.pending = Some(viewport);
            }
        }

        fn attached(&self) -> Vec<(u32, Viewport)> {
            self.0.borrow().attached.clone()
        }

        fn subscribers(&self) -> usize {
            self.0.borrow().subscribers
        }
    }

    impl Host for FakeHost {
        type Surface = FakeSurface;
        type Subscription = FakeSubscription;

        fn viewport(&self) -> Viewport {
            self.0.borrow().viewport.unwrap_or(Viewport::new(0.0, 0.0))
        }

        fn attach_surface(&mut self, viewport: Viewport) -> Result<FakeSurface, MountError> {
            let mut log = self.0.borrow_mut();
            let id = log.next_surface;
            log.next_surface += 1;
            log.attached.push((id, viewport));
            Ok(FakeSurface(id))
        }

        fn resize_surface(&mut self, surface: &mut FakeSurface, viewport: Viewport) {
            let mut log = self.0.borrow_mut();
            for entry in log.attached.iter_mut().filter(|(id, _)| *id == surface.0) {
                entry.1 = viewport;
            }
        }

        fn detach_surface(&mut self, surface: FakeSurface) {
            self.0.borrow_mut().attached.retain(|(id, _)| *id != surface.0);
        }

        fn subscribe_resize(&mut self) -> Result<FakeSubscription, MountError> {
            let mut log = self.0.borrow_mut();
            if log.fail_subscribe {
                return Err(MountError::Host("listener rejected".into()));
            }
            log.subscribers += 1;
            Ok(FakeSubscription)
        }

        fn unsubscribe_resize(&mut self, _subscription: FakeSubscription) {
            let mut log = self.0.borrow_mut();
            log.subscribers -= 1;
            log.pending = None;
        }

        fn poll_resize(&mut self, _subscription: &FakeSubscription) -> Option<Viewport> {
            self.0.borrow_mut().pending.take()
        }
    }

    fn mount(host: &FakeHost, seed: u64) -> Mount<FakeHost> {
        Mount::new(
            host.clone(),
            &FieldConfig::default(),
            &mut StdRng::seed_from_u64(seed),
        )
        .unwrap()
    }

    #[test]
    fn mount_attaches_and_subscribes() {
        let host = FakeHost::at(1024.0, 768.0);
        let m = mount(&host, 1);

        assert!(m.is_mounted());
        assert_eq!(host.attached(), vec![(0, Viewport::new(1024.0, 768.0))]);
        assert_eq!(host.subscribers(), 1);

        let field = m.field().unwrap();
        assert_eq!(field.mesh().geometry().len(), 5000);
        assert!((field.camera().aspect() - 1.333).abs() < 1e-3);
    }

    #[test]
    fn resize_event_updates_camera_and_surface() {
        let host = FakeHost::at(1280.0, 720.0);
        let mut m = mount(&host, 2);
        assert!((m.field().unwrap().camera().aspect() - 1.778).abs() < 1e-3);

        host.fire_resize(640.0, 480.0);
        m.frame().unwrap();

        assert!((m.field().unwrap().camera().aspect() - 1.333).abs() < 1e-3);
        assert_eq!(m.viewport(), Some(Viewport::new(640.0, 480.0)));
        assert_eq!(host.attached(), vec![(0, Viewport::new(640.0, 480.0))]);
    }

    #[test]
    fn resize_to_arbitrary_sizes() {
        let host = FakeHost::at(800.0, 600.0);
        let mut m = mount(&host, 3);
        for &(w, h) in &[(1.0, 1.0), (3840.0, 2160.0), (333.0, 999.0), (1920.0, 1.0)] {
            m.resize(Viewport::new(w, h));
            assert!((m.field().unwrap().camera().aspect() - w / h).abs() < 1e-3);
            assert_eq!(host.attached(), vec![(0, Viewport::new(w, h))]);
        }
    }

    #[test]
    fn degenerate_resize_is_ignored() {
        let host = FakeHost::at(800.0, 600.0);
        let mut m = mount(&host, 4);
        host.fire_resize(0.0, 0.0);
        m.frame().unwrap();
        assert_eq!(m.viewport(), Some(Viewport::new(800.0, 600.0)));
        assert!((m.field().unwrap().camera().aspect() - 800.0 / 600.0).abs() < 1e-5);
    }

    #[test]
    fn frames_advance_rotation() {
        let host = FakeHost::at(800.0, 600.0);
        let mut m = mount(&host, 5);
        for _ in 0..10 {
            let points = m.frame().unwrap();
            assert!(!points.is_empty());
        }
        let field = m.field().unwrap();
        assert_eq!(field.frames(), 10);
        assert!((field.rotation() - 0.01).abs() < 1e-5);
    }

    #[test]
    fn teardown_detaches_and_unsubscribes() {
        let host = FakeHost::at(800.0, 600.0);
        let mut m = mount(&host, 6);
        m.frame();
        m.teardown();

        assert!(!m.is_mounted());
        assert!(host.attached().is_empty());
        assert_eq!(host.subscribers(), 0);

        // Resize after teardown has no effect and the loop has stopped
        host.fire_resize(300.0, 200.0);
        assert!(m.frame().is_none());
        assert!(m.field().is_none());
        assert!(m.surface().is_none());
        assert!(m.viewport().is_none());
        assert!(host.0.borrow().pending.is_none());

        // Teardown is idempotent
        m.teardown();
        assert_eq!(host.subscribers(), 0);
    }

    #[test]
    fn drop_tears_down() {
        let host = FakeHost::at(800.0, 600.0);
        {
            let _m = mount(&host, 7);
            assert_eq!(host.subscribers(), 1);
            assert_eq!(host.attached().len(), 1);
        }
        assert_eq!(host.subscribers(), 0);
        assert!(host.attached().is_empty());
    }

    #[test]
    fn remount_after_teardown_is_fresh() {
        let host = FakeHost::at(800.0, 600.0);
        let mut m = mount(&host, 8);
        for _ in 0..25 {
            m.frame();
        }
        let first = m.field().unwrap().mesh().geometry().positions().to_vec();
        m.teardown();

        m.remount(&FieldConfig::default(), &mut StdRng::seed_from_u64(9))
            .unwrap();
        let field = m.field().unwrap();
        assert_eq!(field.frames(), 0);
        assert_eq!(field.rotation(), 0.0);
        assert_ne!(field.mesh().geometry().positions(), &first[..]);
        // New surface, single subscription
        assert_eq!(host.attached(), vec![(1, Viewport::new(800.0, 600.0))]);
        assert_eq!(host.subscribers(), 1);
    }

    #[test]
    fn double_mount_is_rejected() {
        let host = FakeHost::at(800.0, 600.0);
        let mut m = mount(&host, 10);
        let err = m
            .remount(&FieldConfig::default(), &mut StdRng::seed_from_u64(11))
            .unwrap_err();
        assert!(matches!(err, MountError::AlreadyMounted));
        assert_eq!(host.attached().len(), 1);
        assert_eq!(host.subscribers(), 1);
    }

    #[test]
    fn failed_subscribe_rolls_back_surface() {
        let host = FakeHost::at(800.0, 600.0);
        host.0.borrow_mut().fail_subscribe = true;
        let result = Mount::new(
            host.clone(),
            &FieldConfig::default(),
            &mut StdRng::seed_from_u64(12),
        );
        assert!(matches!(result, Err(MountError::Host(_))));
        assert!(host.attached().is_empty());
        assert_eq!(host.subscribers(), 0);
    }

    #[test]
    fn degenerate_viewport_is_rejected() {
        let host = FakeHost::at(0.0, 600.0);
        let result = Mount::new(
            host.clone(),
            &FieldConfig::default(),
            &mut StdRng::seed_from_u64(13),
        );
        assert!(matches!(result, Err(MountError::DegenerateViewport { .. })));
        assert!(host.attached().is_empty());
    }

    #[test]
    fn drag_reaches_camera() {
        let host = FakeHost::at(800.0, 600.0);
        let mut m = mount(&host, 14);
        m.drag(120.0, 0.0);
        for _ in 0..5 {
            m.frame();
        }
        let position = m.field().unwrap().camera().position;
        assert!(position.x.abs() > 1e-3, "camera did not orbit: {position:?}");
        assert!((position.length() - 3.0).abs() < 1e-4);
    }

    #[test]
    fn scroll_does_not_zoom_by_default() {
        let host = FakeHost::at(800.0, 600.0);
        let mut m = mount(&host, 15);
        m.scroll(5.0);
        m.frame();
        let position = m.field().unwrap().camera().position;
        assert!((position.length() - 3.0).abs() < 1e-5);
    }
}
