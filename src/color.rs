// Simple color struct, created from an unsigned 32 representing RRGGBBAA

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    // rgba(17, 24, 39, 0.4)
    pub const AMBIENT: Color = Color {
        r: 17,
        g: 24,
        b: 39,
        a: 102,
    };

    pub fn from_u32(num: u32) -> Color {
        let r = (num >> 24) as u8;
        let g = (num >> 16) as u8;
        let b = (num >> 8) as u8;
        let a = num as u8;

        Color { r, g, b, a }
    }

    pub fn to_u32(self) -> u32 {
        (self.r as u32) << 24 | (self.g as u32) << 16 | (self.b as u32) << 8 | self.a as u32
    }

    // Alpha is written as a fraction rounded to two decimals
    pub fn to_css(self) -> String {
        let alpha = (self.a as f64 / 255.0 * 100.0).round() / 100.0;
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::AMBIENT
    }
}

impl From<u32> for Color {
    fn from(num: u32) -> Self {
        Color::from_u32(num)
    }
}

impl From<Color> for u32 {
    fn from(color: Color) -> Self {
        color.to_u32()
    }
}
