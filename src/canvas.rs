// Surface backed by an HTML canvas and its 2D rendering context

use crate::color::Color;
use crate::error::{BackgroundError, BackgroundResult};
use crate::surface::Surface;
use crate::viewport::Viewport;
use std::f64::consts::PI;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
    // Last fill style handed to the context, so a frame does not rebuild the CSS string
    fill: Option<(Color, JsValue)>,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> BackgroundResult<CanvasSurface> {
        let context = canvas
            .get_context("2d")
            .map_err(|_| BackgroundError::surface_unavailable("canvas refused a 2d context"))?
            .ok_or_else(|| BackgroundError::surface_unavailable("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| BackgroundError::surface_unavailable("context is not a CanvasRenderingContext2d"))?;
        Ok(CanvasSurface {
            canvas,
            context,
            fill: None,
        })
    }

    // Looks up the canvas by element id
    pub fn from_element_id(document: &web_sys::Document, id: &str) -> BackgroundResult<CanvasSurface> {
        let canvas = document
            .get_element_by_id(id)
            .ok_or_else(|| BackgroundError::surface_unavailable(format!("no element with id '{}'", id)))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| BackgroundError::surface_unavailable(format!("element '{}' is not a canvas", id)))?;
        CanvasSurface::new(canvas)
    }

    #[allow(deprecated)]
    fn set_fill(&mut self, color: Color) {
        let current = self.fill.as_ref().map(|(c, _)| *c);
        if current != Some(color) {
            let style = JsValue::from_str(&color.to_css());
            self.context.set_fill_style(&style);
            self.fill = Some((color, style));
        }
    }
}

impl Surface for CanvasSurface {
    fn resize(&mut self, viewport: Viewport) {
        self.canvas.set_width(viewport.width);
        self.canvas.set_height(viewport.height);
        // Resizing a canvas resets its context state, fill style included
        self.fill = None;
    }

    fn clear(&mut self, viewport: Viewport) -> BackgroundResult<()> {
        let [width, height] = viewport.bounds();
        self.context.clear_rect(0.0, 0.0, width, height);
        Ok(())
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color) -> BackgroundResult<()> {
        self.set_fill(color);
        self.context.begin_path();
        self.context
            .arc(x, y, radius, 0.0, PI * 2.0)
            .map_err(BackgroundError::draw)?;
        self.context.fill();
        Ok(())
    }
}
