//! Native window host
//!
//! The window itself is the render surface. The app reports the window's
//! logical size every frame; size changes become resize notifications while
//! a subscription is live.

use tracing::debug;

use crate::field::{Host, MountError, Viewport};

#[derive(Debug)]
pub struct WindowHost {
    viewport: Viewport,
    surface_attached: bool,
    listening: bool,
    pending: Option<Viewport>,
}

/// Render surface handle: the window area the field is drawn into
#[derive(Debug)]
pub struct WindowSurface {
    pub size: Viewport,
}

/// Live resize subscription
#[derive(Debug)]
pub struct ResizeToken(());

impl WindowHost {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            surface_attached: false,
            listening: false,
            pending: None,
        }
    }

    /// Record the window size seen this frame
    pub fn observe(&mut self, viewport: Viewport) {
        if viewport == self.viewport || viewport.is_degenerate() {
            return;
        }
        debug!(width = viewport.width, height = viewport.height, "window resized");
        self.viewport = viewport;
        if self.listening {
            self.pending = Some(viewport);
        }
    }

    pub fn has_surface(&self) -> bool {
        self.surface_attached
    }

    pub fn is_listening(&self) -> bool {
        self.listening
    }
}

impl Host for WindowHost {
    type Surface = WindowSurface;
    type Subscription = ResizeToken;

    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn attach_surface(&mut self, viewport: Viewport) -> Result<WindowSurface, MountError> {
        if self.surface_attached {
            return Err(MountError::Host("window already has a render surface".into()));
        }
        self.surface_attached = true;
        Ok(WindowSurface { size: viewport })
    }

    fn resize_surface(&mut self, surface: &mut WindowSurface, viewport: Viewport) {
        surface.size = viewport;
    }

    fn detach_surface(&mut self, _surface: WindowSurface) {
        self.surface_attached = false;
    }

    fn subscribe_resize(&mut self) -> Result<ResizeToken, MountError> {
        self.listening = true;
        Ok(ResizeToken(()))
    }

    fn unsubscribe_resize(&mut self, _subscription: ResizeToken) {
        self.listening = false;
        self.pending = None;
    }

    fn poll_resize(&mut self, _subscription: &ResizeToken) -> Option<Viewport> {
        self.pending.take()
    }
}
