// Browser glue: drives an Animator from requestAnimationFrame and window resize
// events. The handle keeps both closures alive; the resize listener is detached
// as soon as the animation stops.

use crate::animator::{Animator, FrameScheduler};
use crate::canvas::CanvasSurface;
use crate::config::BackgroundConfig;
use crate::error::{BackgroundError, BackgroundResult};
use crate::viewport::Viewport;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, Window};

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

struct RafScheduler {
    window: Window,
    callback: FrameCallback,
}

impl FrameScheduler for RafScheduler {
    type Handle = i32;

    fn request_frame(&mut self) -> BackgroundResult<i32> {
        let callback = self.callback.borrow();
        let callback = callback
            .as_ref()
            .ok_or_else(|| BackgroundError::Schedule("frame callback already released".into()))?;
        self.window
            .request_animation_frame(callback.as_ref().unchecked_ref::<js_sys::Function>())
            .map_err(BackgroundError::schedule)
    }

    fn cancel_frame(&mut self, handle: i32) {
        if let Err(err) = self.window.cancel_animation_frame(handle) {
            console_warn!("cancelAnimationFrame failed: {:?}", err);
        }
    }
}

type WebAnimator = Animator<CanvasSurface, RafScheduler>;

// The registered resize closure, kept so the exact same reference can be removed
struct ResizeListener {
    window: Window,
    closure: Closure<dyn FnMut()>,
}

impl ResizeListener {
    fn register(window: &Window, animator: Weak<RefCell<WebAnimator>>) -> Option<ResizeListener> {
        let resize_window = window.clone();
        let closure = Closure::wrap(Box::new(move || {
            if let Some(animator) = animator.upgrade() {
                animator.borrow_mut().resize(read_viewport(&resize_window));
            }
        }) as Box<dyn FnMut()>);
        match window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref::<js_sys::Function>()) {
            Ok(()) => Some(ResizeListener {
                window: window.clone(),
                closure,
            }),
            Err(err) => {
                console_warn!("failed to add resize listener: {:?}", err);
                None
            }
        }
    }

    fn remove(self) {
        if let Err(err) = self
            .window
            .remove_event_listener_with_callback("resize", self.closure.as_ref().unchecked_ref::<js_sys::Function>())
        {
            console_warn!("failed to remove resize listener: {:?}", err);
        }
    }
}

type SharedListener = Rc<RefCell<Option<ResizeListener>>>;

#[wasm_bindgen]
pub struct ParticleBackground {
    // None when there is no window to animate in
    animator: Option<Rc<RefCell<WebAnimator>>>,
    frame_callback: FrameCallback,
    resize_listener: SharedListener,
}

#[wasm_bindgen]
impl ParticleBackground {
    /// Starts the background on the canvas with the given element id. A missing
    /// window, canvas or 2D context yields an idle handle rather than an error.
    pub fn mount(canvas_id: &str, config: &BackgroundConfig) -> Result<ParticleBackground, JsValue> {
        config.validate()?;
        let window = match web_sys::window() {
            Some(window) => window,
            None => return Ok(ParticleBackground::without_window()),
        };
        let surface = window
            .document()
            .ok_or_else(|| BackgroundError::surface_unavailable("window has no document"))
            .and_then(|document| CanvasSurface::from_element_id(&document, canvas_id));
        Ok(ParticleBackground::activate(window, surface, config))
    }

    pub fn attach(canvas: HtmlCanvasElement, config: &BackgroundConfig) -> Result<ParticleBackground, JsValue> {
        config.validate()?;
        let window = match web_sys::window() {
            Some(window) => window,
            None => return Ok(ParticleBackground::without_window()),
        };
        Ok(ParticleBackground::activate(window, CanvasSurface::new(canvas), config))
    }

    pub fn unmount(&mut self) {
        if let Some(animator) = &self.animator {
            animator.borrow_mut().deactivate();
        }
        release(&self.resize_listener);
        self.frame_callback.borrow_mut().take();
    }

    pub fn is_running(&self) -> bool {
        self.animator
            .as_ref()
            .map_or(false, |animator| animator.borrow().is_running())
    }

    pub fn has_pending_frame(&self) -> bool {
        self.animator
            .as_ref()
            .map_or(false, |animator| animator.borrow().has_pending_frame())
    }

    pub fn has_resize_listener(&self) -> bool {
        self.resize_listener.borrow().is_some()
    }

    pub fn particle_count(&self) -> u32 {
        self.animator.as_ref().map_or(0, |animator| {
            animator
                .borrow()
                .field()
                .map_or(0, |field| field.particles().len() as u32)
        })
    }
}

impl ParticleBackground {
    fn without_window() -> ParticleBackground {
        console_warn!(
            "particle background disabled: {}",
            BackgroundError::surface_unavailable("no global window")
        );
        ParticleBackground {
            animator: None,
            frame_callback: Rc::new(RefCell::new(None)),
            resize_listener: Rc::new(RefCell::new(None)),
        }
    }

    fn activate(window: Window, surface: BackgroundResult<CanvasSurface>, config: &BackgroundConfig) -> ParticleBackground {
        let viewport = read_viewport(&window);
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let frame_callback: FrameCallback = Rc::new(RefCell::new(None));
        let scheduler = RafScheduler {
            window: window.clone(),
            callback: frame_callback.clone(),
        };
        let animator = Rc::new(RefCell::new(Animator::new(
            config, viewport, surface, scheduler, &mut rng,
        )));
        let resize_listener: SharedListener = Rc::new(RefCell::new(None));
        if !animator.borrow().is_running() {
            return ParticleBackground {
                animator: Some(animator),
                frame_callback,
                resize_listener,
            };
        }

        // Closures hold weak references; the handle owns the animator
        let weak = Rc::downgrade(&animator);
        *frame_callback.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            if let Some(animator) = weak.upgrade() {
                animator.borrow_mut().run_frame();
            }
        }) as Box<dyn FnMut()>));

        *resize_listener.borrow_mut() = ResizeListener::register(&window, Rc::downgrade(&animator));
        // Stopping for any reason, a frame error included, detaches from the window
        let listener = resize_listener.clone();
        animator.borrow_mut().on_stop(move || release(&listener));

        animator.borrow_mut().start();
        ParticleBackground {
            animator: Some(animator),
            frame_callback,
            resize_listener,
        }
    }
}

impl Drop for ParticleBackground {
    fn drop(&mut self) {
        self.unmount();
    }
}

fn release(listener: &SharedListener) {
    if let Some(listener) = listener.borrow_mut().take() {
        listener.remove();
    }
}

fn read_viewport(window: &Window) -> Viewport {
    let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    Viewport::from_f64(width, height)
}
