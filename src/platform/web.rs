//! Browser host: `requestAnimationFrame` loop and window resize events

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Function;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, Window};

use super::{FrameHandle, FrameHost};
use crate::animation::Backdrop;
use crate::config::FieldConfig;
use crate::error::MountError;
use crate::renderer::WebCanvas;
use crate::surface::Viewport;

/// Canvas attribute holding a JSON `FieldConfig` override
pub const CONFIG_ATTRIBUTE: &str = "data-field-config";

/// `FrameHost` over the global window.
///
/// The JS callbacks are installed after the closures that own the backdrop
/// exist; until then no frame can be scheduled.
pub struct WebHost {
    window: Window,
    frame_callback: Option<Function>,
    resize_callback: Option<Function>,
}

impl WebHost {
    fn new(window: Window) -> Self {
        Self {
            window,
            frame_callback: None,
            resize_callback: None,
        }
    }
}

impl FrameHost for WebHost {
    fn viewport(&self) -> Viewport {
        let width = self
            .window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        let height = self
            .window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        Viewport::new(width as f32, height as f32, self.window.device_pixel_ratio())
    }

    fn request_frame(&mut self) -> Option<FrameHandle> {
        let callback = self.frame_callback.as_ref()?;
        match self.window.request_animation_frame(callback) {
            Ok(id) => Some(id),
            Err(e) => {
                log::error!("requestAnimationFrame failed: {:?}", e);
                None
            }
        }
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if let Err(e) = self.window.cancel_animation_frame(handle) {
            log::warn!("cancelAnimationFrame failed: {:?}", e);
        }
    }

    fn listen_resize(&mut self) {
        if let Some(callback) = &self.resize_callback {
            if let Err(e) = self
                .window
                .add_event_listener_with_callback("resize", callback)
            {
                log::warn!("resize listener not attached: {:?}", e);
            }
        }
    }

    fn unlisten_resize(&mut self) {
        if let Some(callback) = &self.resize_callback {
            if let Err(e) = self
                .window
                .remove_event_listener_with_callback("resize", callback)
            {
                log::warn!("resize listener not removed: {:?}", e);
            }
        }
    }
}

struct Mounted {
    backdrop: Backdrop<WebCanvas>,
    host: WebHost,
}

/// A running backdrop. Dropping (or `free()`-ing from JS) also unmounts.
#[wasm_bindgen]
pub struct BackdropHandle {
    state: Rc<RefCell<Mounted>>,
    _frame: Closure<dyn FnMut(f64)>,
    _resize: Closure<dyn FnMut(web_sys::Event)>,
}

#[wasm_bindgen]
impl BackdropHandle {
    /// Cancel the pending frame and detach the resize listener
    pub fn unmount(&self) {
        match self.state.try_borrow_mut() {
            Ok(mut guard) => {
                let Mounted { backdrop, host } = &mut *guard;
                backdrop.unmount(host);
            }
            Err(_) => log::warn!("unmount called re-entrantly; ignored"),
        }
    }

    #[wasm_bindgen(getter = pointCount)]
    pub fn point_count(&self) -> usize {
        self.state.borrow().backdrop.field().len()
    }

    #[wasm_bindgen(getter)]
    pub fn frames(&self) -> f64 {
        self.state.borrow().backdrop.clock().ticks() as f64
    }
}

impl Drop for BackdropHandle {
    fn drop(&mut self) {
        self.unmount();
    }
}

/// Mount a backdrop on `canvas`.
///
/// `config` wins over the canvas `data-field-config` attribute; with neither,
/// the default look is used.
pub fn mount(canvas: HtmlCanvasElement, config: Option<FieldConfig>) -> Result<BackdropHandle, MountError> {
    let window = web_sys::window().ok_or(MountError::NoWindow)?;
    let config = match config {
        Some(config) => config,
        None => match canvas.get_attribute(CONFIG_ATTRIBUTE) {
            Some(json) => FieldConfig::from_json(&json)?,
            None => FieldConfig::default(),
        },
    };

    let surface = WebCanvas::new(canvas)?;
    surface.make_backdrop_layer();
    let state = Rc::new(RefCell::new(Mounted {
        backdrop: Backdrop::new(surface, config),
        host: WebHost::new(window),
    }));

    let frame = {
        let state = state.clone();
        Closure::<dyn FnMut(f64)>::new(move |_time: f64| {
            if let Ok(mut guard) = state.try_borrow_mut() {
                let Mounted { backdrop, host } = &mut *guard;
                backdrop.on_frame(host);
            }
        })
    };
    let resize = {
        let state = state.clone();
        Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            if let Ok(mut guard) = state.try_borrow_mut() {
                let Mounted { backdrop, host } = &mut *guard;
                backdrop.on_resize(host);
            }
        })
    };

    {
        let mut guard = state.borrow_mut();
        let Mounted { backdrop, host } = &mut *guard;
        host.frame_callback = Some(frame.as_ref().unchecked_ref::<Function>().clone());
        host.resize_callback = Some(resize.as_ref().unchecked_ref::<Function>().clone());

        let seed = js_sys::Date::now() as u64 ^ (js_sys::Math::random() * u32::MAX as f64) as u64;
        let mut rng = Pcg32::seed_from_u64(seed);
        backdrop.mount(host, &mut rng)?;
    }

    Ok(BackdropHandle {
        state,
        _frame: frame,
        _resize: resize,
    })
}

/// JS entry point: mount on the canvas with id `canvas_id`
#[wasm_bindgen(js_name = mountBackdrop)]
pub fn mount_backdrop(canvas_id: &str, config_json: Option<String>) -> Result<BackdropHandle, JsValue> {
    mount_by_id(canvas_id, config_json.as_deref()).map_err(|e| {
        log::error!("Backdrop mount failed: {}", e);
        JsValue::from_str(&e.to_string())
    })
}

fn mount_by_id(canvas_id: &str, config_json: Option<&str>) -> Result<BackdropHandle, MountError> {
    let document = web_sys::window()
        .ok_or(MountError::NoWindow)?
        .document()
        .ok_or(MountError::NoDocument)?;
    let canvas = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| MountError::CanvasNotFound(canvas_id.to_string()))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| MountError::NotACanvas(canvas_id.to_string()))?;
    let config = config_json.map(FieldConfig::from_json).transpose()?;
    mount(canvas, config)
}
