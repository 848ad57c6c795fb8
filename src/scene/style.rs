//! Colors and marker/line styles handed to the renderer.

use serde::Serialize;

/// A named display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Color {
    /// CSS color name.
    pub name: &'static str,
    /// sRGB components.
    pub rgb: [u8; 3],
}

impl Color {
    /// Creates a named color.
    pub const fn new(name: &'static str, rgb: [u8; 3]) -> Self {
        Self { name, rgb }
    }

    /// Hex notation, e.g. `#87cefa`.
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.rgb[0], self.rgb[1], self.rgb[2])
    }
}

pub const LIGHT_SKY_BLUE: Color = Color::new("lightskyblue", [135, 206, 250]);
pub const WHITE: Color = Color::new("white", [255, 255, 255]);
pub const LIGHT_CORAL: Color = Color::new("lightcoral", [240, 128, 128]);
pub const GOLD: Color = Color::new("gold", [255, 215, 0]);
pub const LIGHT_PINK: Color = Color::new("lightpink", [255, 182, 193]);
pub const BLUE: Color = Color::new("blue", [0, 0, 255]);
pub const RED: Color = Color::new("red", [255, 0, 0]);
pub const GREEN: Color = Color::new("green", [0, 128, 0]);

/// Opacity of the three cell boxes.
pub const MESH_OPACITY: f32 = 0.9;

/// Style of a point cloud.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MarkerStyle {
    pub color: Color,
    /// Marker size in screen units.
    pub size: f32,
    pub opacity: f32,
}

/// Style of a polyline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LineStyle {
    pub color: Color,
    /// Line width in screen units.
    pub width: f32,
}

pub const ELECTRON_MARKER: MarkerStyle = MarkerStyle {
    color: BLUE,
    size: 6.0,
    opacity: 1.0,
};

pub const PROTON_MARKER: MarkerStyle = MarkerStyle {
    color: RED,
    size: 6.0,
    opacity: 1.0,
};

pub const OXYGEN_MARKER: MarkerStyle = MarkerStyle {
    color: GREEN,
    size: 5.0,
    opacity: 0.6,
};

pub const WIRE_LINE: LineStyle = LineStyle {
    color: GOLD,
    width: 6.0,
};

pub const CHANNEL_LINE: LineStyle = LineStyle {
    color: LIGHT_PINK,
    width: 3.0,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex() {
        assert_eq!(LIGHT_SKY_BLUE.hex(), "#87cefa");
        assert_eq!(WHITE.hex(), "#ffffff");
        assert_eq!(GOLD.hex(), "#ffd700");
    }
}
