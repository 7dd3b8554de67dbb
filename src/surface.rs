// Drawing seam between the particle field and whatever it is painted on

use crate::color::Color;
use crate::error::BackgroundResult;
use crate::viewport::Viewport;

pub trait Surface {
    /// Sets the backing pixel size of the surface.
    fn resize(&mut self, viewport: Viewport);

    fn clear(&mut self, viewport: Viewport) -> BackgroundResult<()>;

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color) -> BackgroundResult<()>;
}
