//! Pointer-driven decoration. Everything here is cosmetic: inputs are raw
//! pointer coordinates and element bounds, outputs are visual offsets. None
//! of it reads or writes navigation state.

/// How far a magnetic button follows the pointer, relative to its distance
/// from the button centre.
pub const MAGNETIC_PULL: f64 = 0.35;
pub const SPOTLIGHT_RADIUS_PX: u32 = 500;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pointer {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn center(&self) -> Pointer {
        Pointer {
            x: self.left + self.width / 2.0,
            y: self.top + self.height / 2.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

impl Offset {
    pub const ZERO: Offset = Offset { x: 0.0, y: 0.0 };
}

/// Translation of a magnetic button while the pointer is over it. When the
/// pointer leaves, the button goes back to [`Offset::ZERO`].
pub fn magnetic_offset(pointer: Pointer, bounds: Bounds) -> Offset {
    let center = bounds.center();
    Offset {
        x: (pointer.x - center.x) * MAGNETIC_PULL,
        y: (pointer.y - center.y) * MAGNETIC_PULL,
    }
}

/// Spotlight centre in element-local coordinates.
pub fn spotlight_origin(pointer: Pointer, bounds: Bounds) -> Offset {
    Offset {
        x: pointer.x - bounds.left,
        y: pointer.y - bounds.top,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpotlightLayer {
    /// Violet wash over the card body.
    Glow,
    /// White highlight clipped to the card border.
    Border,
}

pub fn spotlight_gradient(origin: Offset, layer: SpotlightLayer) -> String {
    let (color, fade) = match layer {
        SpotlightLayer::Glow => ("rgba(124, 58, 237, 0.1)", 80),
        SpotlightLayer::Border => ("rgba(255, 255, 255, 0.1)", 40),
    };
    format!(
        "radial-gradient({SPOTLIGHT_RADIUS_PX}px circle at {}px {}px, {color}, transparent {fade}%)",
        origin.x, origin.y
    )
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parallax {
    pub translate_y: f64,
    pub opacity: f64,
}

impl Parallax {
    pub fn style(&self) -> String {
        format!(
            "transform: translateY({}px); opacity: {}",
            self.translate_y, self.opacity
        )
    }
}

fn interpolate(
    value: f64,
    (in_start, in_end): (f64, f64),
    (out_start, out_end): (f64, f64),
) -> f64 {
    let progress = ((value - in_start) / (in_end - in_start)).clamp(0.0, 1.0);
    out_start + (out_end - out_start) * progress
}

/// Hero headline drift and fade for a given page scroll offset.
pub fn hero_parallax(scroll_y: u32) -> Parallax {
    let scroll_y = f64::from(scroll_y);
    Parallax {
        translate_y: interpolate(scroll_y, (0.0, 500.0), (0.0, 150.0)),
        opacity: interpolate(scroll_y, (0.0, 300.0), (1.0, 0.0)),
    }
}
