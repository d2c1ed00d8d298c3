//! Browser host and the JS entry points
//!
//! The render canvas is created inside a page element and sized to the
//! browser window. A `resize` listener on the window records the latest
//! size; the app picks it up at the start of the next frame.

use std::cell::Cell;
use std::rc::Rc;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing::{debug, info, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlCanvasElement, Window};

use crate::app::PortfolioApp;
use crate::config::PortfolioConfig;
use crate::field::{Host, Mount, MountError, Viewport};

/// Page element the field's canvas lives in
pub struct WebHost {
    window: Window,
    container: Element,
}

/// Canvas appended to the container
pub struct WebSurface {
    pub canvas: HtmlCanvasElement,
}

/// Live `resize` listener on the window
pub struct ResizeListener {
    callback: Closure<dyn FnMut()>,
    /// Latest size reported by the browser, drained by `poll_resize`
    pending: Rc<Cell<Option<Viewport>>>,
}

impl WebHost {
    pub fn new(container_id: &str) -> Result<Self, MountError> {
        let window = web_sys::window().ok_or_else(|| MountError::Host("no window".into()))?;
        let document = window
            .document()
            .ok_or_else(|| MountError::Host("no document".into()))?;
        let container = document
            .get_element_by_id(container_id)
            .ok_or_else(|| MountError::ContainerNotFound(container_id.to_owned()))?;
        Ok(Self { window, container })
    }
}

fn js_error(context: &str, err: JsValue) -> MountError {
    MountError::Host(format!("{context}: {err:?}"))
}

fn window_viewport(window: &Window) -> Viewport {
    let dimension = |value: Result<JsValue, JsValue>| {
        value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32
    };
    Viewport::new(dimension(window.inner_width()), dimension(window.inner_height()))
}

fn set_canvas_size(canvas: &HtmlCanvasElement, viewport: Viewport) {
    let style = canvas.style();
    for (property, value) in [
        ("width", format!("{}px", viewport.width)),
        ("height", format!("{}px", viewport.height)),
    ] {
        if let Err(e) = style.set_property(property, &value) {
            warn!(?e, property, "failed to size canvas");
        }
    }
}

impl Host for WebHost {
    type Surface = WebSurface;
    type Subscription = ResizeListener;

    fn viewport(&self) -> Viewport {
        window_viewport(&self.window)
    }

    fn attach_surface(&mut self, viewport: Viewport) -> Result<WebSurface, MountError> {
        let document = self
            .window
            .document()
            .ok_or_else(|| MountError::Host("no document".into()))?;
        let canvas = document
            .create_element("canvas")
            .map_err(|e| js_error("create canvas", e))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| MountError::Host("created element is not a canvas".into()))?;

        let style = canvas.style();
        for (property, value) in [("display", "block"), ("outline", "none")] {
            style
                .set_property(property, value)
                .map_err(|e| js_error("style canvas", e))?;
        }
        set_canvas_size(&canvas, viewport);

        self.container
            .append_child(&canvas)
            .map_err(|e| js_error("append canvas", e))?;
        debug!(id = %self.container.id(), "canvas attached");
        Ok(WebSurface { canvas })
    }

    fn resize_surface(&mut self, surface: &mut WebSurface, viewport: Viewport) {
        set_canvas_size(&surface.canvas, viewport);
    }

    fn detach_surface(&mut self, surface: WebSurface) {
        if let Err(e) = self.container.remove_child(&surface.canvas) {
            warn!(?e, "canvas was already detached");
        }
    }

    fn subscribe_resize(&mut self) -> Result<ResizeListener, MountError> {
        let pending = Rc::new(Cell::new(None));

        let window = self.window.clone();
        let latest = pending.clone();
        let callback = Closure::wrap(Box::new(move || {
            latest.set(Some(window_viewport(&window)));
        }) as Box<dyn FnMut()>);

        self.window
            .add_event_listener_with_callback("resize", callback.as_ref().unchecked_ref())
            .map_err(|e| js_error("add resize listener", e))?;

        Ok(ResizeListener { callback, pending })
    }

    fn unsubscribe_resize(&mut self, subscription: ResizeListener) {
        if let Err(e) = self.window.remove_event_listener_with_callback(
            "resize",
            subscription.callback.as_ref().unchecked_ref(),
        ) {
            warn!(?e, "failed to remove resize listener");
        }
    }

    fn poll_resize(&mut self, subscription: &ResizeListener) -> Option<Viewport> {
        subscription.pending.take()
    }
}

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();

    // Initialize tracing for browser console
    tracing_wasm::set_as_global_default();
}

/// A mounted portfolio page
#[wasm_bindgen]
pub struct Portfolio {
    runner: eframe::WebRunner,
}

#[wasm_bindgen]
impl Portfolio {
    /// Stop rendering and remove the canvas from the page
    pub fn unmount(&self) {
        info!("unmounting portfolio");
        self.runner.destroy();
    }
}

/// Mount the portfolio page into the element with id `container_id`.
///
/// `config_json` overrides the built-in profile and particle settings.
#[wasm_bindgen]
pub async fn mount(container_id: String, config_json: Option<String>) -> Result<Portfolio, JsValue> {
    let config = match config_json {
        Some(json) => {
            PortfolioConfig::from_json(&json).map_err(|e| JsValue::from_str(&e.to_string()))?
        }
        None => PortfolioConfig::default(),
    };

    let host = WebHost::new(&container_id).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let mount = Mount::new(host, &config.field, &mut SmallRng::from_entropy())
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    let canvas = mount
        .surface()
        .map(|surface| surface.canvas.clone())
        .ok_or_else(|| JsValue::from_str("particle field has no canvas"))?;

    let profile = config.profile;
    let runner = eframe::WebRunner::new();
    runner
        .start(
            canvas,
            eframe::WebOptions::default(),
            Box::new(move |cc| Ok(Box::new(PortfolioApp::new(cc, mount, profile)))),
        )
        .await?;

    info!(container = %container_id, "portfolio mounted");
    Ok(Portfolio { runner })
}
