//! Browser host: runs a sort on an HTML canvas.
//!
//! [`WebScheduler`] maps the scheduling port onto `setTimeout` and
//! `requestAnimationFrame`. Callbacks hold only a weak reference to the
//! engine; the running engine is owned by this module, so starting a new
//! run drops the old one and its pending callbacks become no-ops.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use std::time::Duration;

use js_sys::Function;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use crate::error::BubbleVizError;
use crate::options::Options;
use crate::render::web::WebCanvas;
use crate::sampler::shuffled_sample;
use crate::schedule::{FrameHandle, Scheduler};
use crate::sort::{BubbleSort, SortStyle};

type WebSort = BubbleSort<WebCanvas, WebScheduler>;

thread_local! {
    static RUNNING: RefCell<Option<Rc<RefCell<WebSort>>>> = const { RefCell::new(None) };
}

/// Scheduler backed by browser timers.
pub struct WebScheduler {
    window: Window,
    engine: Weak<RefCell<WebSort>>,
    /// Timeout id of the latest scheduled advance. Clearing an id that
    /// already fired is harmless.
    timeout: Option<i32>,
}

impl WebScheduler {
    /// Scheduler whose callbacks drive `engine` while it is alive.
    #[must_use]
    pub fn new(window: Window, engine: Weak<RefCell<WebSort>>) -> Self {
        Self {
            window,
            engine,
            timeout: None,
        }
    }
}

/// Run `f` on the engine if it is still alive and not already borrowed.
fn with_engine(engine: &Weak<RefCell<WebSort>>, f: impl FnOnce(&mut WebSort)) {
    let Some(engine) = engine.upgrade() else {
        return;
    };
    let Ok(mut engine) = engine.try_borrow_mut() else {
        log::warn!("engine busy, dropping callback");
        return;
    };
    f(&mut engine);
}

impl Scheduler for WebScheduler {
    fn schedule_advance(&mut self, delay: Duration) {
        let engine = self.engine.clone();
        let callback = Closure::once_into_js(move || {
            with_engine(&engine, WebSort::advance);
        });
        let millis = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);
        match self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.unchecked_ref::<Function>(),
                millis,
            ) {
            Ok(id) => self.timeout = Some(id),
            Err(e) => log::error!("setTimeout failed: {e:?}"),
        }
    }

    fn request_frame(&mut self) -> FrameHandle {
        // The id is only known once the request is made, after the
        // callback already exists.
        let id = Rc::new(Cell::new(0_u64));
        let engine = self.engine.clone();
        let own_id = Rc::clone(&id);
        let callback = Closure::once_into_js(move |timestamp: f64| {
            let handle = FrameHandle::new(own_id.get());
            let timestamp = Duration::from_secs_f64(timestamp.max(0.0) / 1000.0);
            with_engine(&engine, |sort| sort.frame(handle, timestamp));
        });
        match self.window.request_animation_frame(callback.unchecked_ref::<Function>()) {
            Ok(raw) => id.set(u64::from(raw.unsigned_abs())),
            Err(e) => log::error!("requestAnimationFrame failed: {e:?}"),
        }
        FrameHandle::new(id.get())
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        let Ok(raw) = i32::try_from(handle.id()) else {
            return;
        };
        if let Err(e) = self.window.cancel_animation_frame(raw) {
            log::warn!("cancelAnimationFrame failed: {e:?}");
        }
    }

    fn cancel_advances(&mut self) {
        if let Some(id) = self.timeout.take() {
            self.window.clear_timeout_with_handle(id);
        }
    }
}

fn context_2d(
    window: &Window,
    canvas_id: &str,
) -> Result<(HtmlCanvasElement, CanvasRenderingContext2d), BubbleVizError> {
    let canvas = window
        .document()
        .and_then(|document| document.get_element_by_id(canvas_id))
        .ok_or_else(|| BubbleVizError::Web(format!("no element #{canvas_id}")))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| BubbleVizError::Web(format!("#{canvas_id} is not a canvas")))?;
    let context = canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
        .ok_or_else(|| BubbleVizError::Web("2d context unavailable".to_owned()))?;
    Ok((canvas, context))
}

fn start_run(canvas_id: &str, options_json: Option<&str>) -> Result<(), BubbleVizError> {
    let options = match options_json {
        Some(json) => Options::from_json(json)?,
        None => Options::default(),
    };
    let window = web_sys::window()
        .ok_or_else(|| BubbleVizError::Web("no window".to_owned()))?;
    let (canvas, context) = context_2d(&window, canvas_id)?;
    canvas.set_width(options.canvas.width as u32);
    canvas.set_height(options.canvas.height as u32);

    let surface = WebCanvas::new(context, &options.theme.background_color);
    let engine = Rc::new_cyclic(|weak| {
        RefCell::new(BubbleSort::new(
            surface,
            WebScheduler::new(window, weak.clone()),
            options.canvas.scene_bounds(),
            SortStyle::from(&options),
        ))
    });

    let (values, range) = shuffled_sample(options.sample.length, options.sample.seed);
    {
        let mut sort = engine.borrow_mut();
        sort.begin(&values, range);
        sort.advance();
    }
    // Replacing the previous run drops it; its callbacks fail to upgrade.
    RUNNING.with(|running| {
        let _ = running.borrow_mut().replace(engine);
    });
    Ok(())
}

/// Sort a shuffled sample on the canvas with id `canvas_id`.
///
/// `options_json` is a JSON object in the shape of [`Options`]; missing
/// fields use defaults. Calling again restarts with a new sample.
#[wasm_bindgen]
#[allow(clippy::needless_pass_by_value)]
pub fn start(canvas_id: &str, options_json: Option<String>) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    start_run(canvas_id, options_json.as_deref())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// JSON schema of the options accepted by [`start`].
#[wasm_bindgen]
pub fn options_schema() -> String {
    serde_json::to_string(&Options::json_schema()).unwrap_or_default()
}
