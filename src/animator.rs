// Lifecycle of the background: activation, one tick per scheduled frame, resize
// and teardown. The host's frame scheduling is abstracted behind FrameScheduler so
// that the handle bookkeeping can be exercised without a browser.

use crate::config::BackgroundConfig;
use crate::error::{BackgroundError, BackgroundResult};
use crate::field::ParticleField;
use crate::surface::Surface;
use crate::utils::Timer;
use crate::viewport::Viewport;
use rand::Rng;

pub trait FrameScheduler {
    type Handle: Copy;

    /// Asks the host to run the next frame on its next refresh.
    fn request_frame(&mut self) -> BackgroundResult<Self::Handle>;

    fn cancel_frame(&mut self, handle: Self::Handle);
}

struct Running<S> {
    field: ParticleField,
    surface: S,
}

pub struct Animator<S: Surface, F: FrameScheduler> {
    running: Option<Running<S>>,
    scheduler: F,
    // A frame only runs while its handle is pending
    pending: Option<F::Handle>,
    profile: bool,
    on_stop: Option<Box<dyn FnMut()>>,
}

impl<S: Surface, F: FrameScheduler> Animator<S, F> {
    /// Sizes the surface to the viewport and generates the particles. An
    /// unavailable surface leaves the animator permanently idle.
    pub fn new<R: Rng>(
        config: &BackgroundConfig,
        viewport: Viewport,
        surface: BackgroundResult<S>,
        scheduler: F,
        rng: &mut R,
    ) -> Self {
        let running = match surface {
            Ok(mut surface) => {
                surface.resize(viewport);
                let field = ParticleField::generate(config, viewport, rng);
                console_log!(
                    "particle background: {} particles in {}x{}",
                    field.particles().len(),
                    viewport.width,
                    viewport.height
                );
                Some(Running { field, surface })
            }
            Err(err) => {
                console_warn!("particle background disabled: {}", err);
                None
            }
        };
        Animator {
            running,
            scheduler,
            pending: None,
            profile: config.profile,
            on_stop: None,
        }
    }

    pub fn start(&mut self) {
        if self.running.is_some() && self.pending.is_none() {
            self.schedule();
        }
    }

    /// Registers a hook that runs once, when a running animator stops for any reason.
    pub fn on_stop<H: FnMut() + 'static>(&mut self, hook: H) {
        self.on_stop = Some(Box::new(hook));
    }

    pub fn run_frame(&mut self) {
        if self.pending.take().is_none() {
            return;
        }
        let result = match self.running.as_mut() {
            Some(running) => {
                let _timer = if self.profile {
                    Some(Timer::new("ParticleBackground::frame"))
                } else {
                    None
                };
                running.field.tick(&mut running.surface)
            }
            None => return,
        };
        match result {
            Ok(()) => self.schedule(),
            Err(err) => self.fail(err),
        }
    }

    pub fn resize(&mut self, viewport: Viewport) {
        if let Some(running) = self.running.as_mut() {
            console_log!("particle background resized to {}x{}", viewport.width, viewport.height);
            running.surface.resize(viewport);
            running.field.resize(viewport);
        }
    }

    // Safe to call repeatedly
    pub fn deactivate(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel_frame(handle);
        }
        if self.running.take().is_some() {
            console_log!("particle background stopped");
            if let Some(mut hook) = self.on_stop.take() {
                hook();
            }
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    pub fn has_pending_frame(&self) -> bool {
        self.pending.is_some()
    }

    pub fn field(&self) -> Option<&ParticleField> {
        self.running.as_ref().map(|running| &running.field)
    }

    fn schedule(&mut self) {
        match self.scheduler.request_frame() {
            Ok(handle) => self.pending = Some(handle),
            Err(err) => self.fail(err),
        }
    }

    fn fail(&mut self, err: BackgroundError) {
        console_warn!("particle background stopped after error: {}", err);
        self.deactivate();
    }
}
