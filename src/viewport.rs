// Pixel dimensions of the visible drawing area

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Viewport {
        Viewport { width, height }
    }

    // Browsers report window.innerWidth/innerHeight as doubles
    pub fn from_f64(width: f64, height: f64) -> Viewport {
        Viewport {
            width: to_pixels(width),
            height: to_pixels(height),
        }
    }

    pub fn bounds(&self) -> [f64; 2] {
        [self.width as f64, self.height as f64]
    }
}

fn to_pixels(value: f64) -> u32 {
    if value.is_finite() && value > 0.0 {
        value.min(u32::MAX as f64) as u32
    } else {
        0
    }
}
