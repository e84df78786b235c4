/// Drawing surface contract
///
/// The simulation never renders directly; it talks to whatever implements
/// `Surface`. The terminal front end provides one, tests use
/// `RecordingSurface`.

use glam::Vec2;

/// Opaque RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a colour from hue in degrees, saturation and lightness in `[0, 1]`.
    pub fn from_hsl(hue: f32, saturation: f32, lightness: f32) -> Self {
        let h = hue.rem_euclid(360.0) / 60.0;
        let c = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
        let x = c * (1.0 - (h % 2.0 - 1.0).abs());
        let (r, g, b) = match h as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        let m = lightness - c / 2.0;
        let channel = |v: f32| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
        Self::rgb(channel(r), channel(g), channel(b))
    }

    /// Blend toward `background` by `1 - alpha`.
    pub fn faded(self, alpha: f32, background: Color) -> Self {
        let a = alpha.clamp(0.0, 1.0);
        let mix = |fg: u8, bg: u8| (fg as f32 * a + bg as f32 * (1.0 - a)).round() as u8;
        Self::rgb(mix(self.r, background.r), mix(self.g, background.g), mix(self.b, background.b))
    }
}

/// Something the simulation can paint filled circles onto.
pub trait Surface {
    /// Canvas width in world units, queried every tick.
    fn width(&self) -> f32;
    /// Canvas height in world units, queried every tick.
    fn height(&self) -> f32;
    /// Fill the whole canvas with `color`.
    fn clear(&mut self, color: Color);
    /// Paint a filled circle; `alpha` in `[0, 1]` fades it toward the background.
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color, alpha: f32);
}

/// One recorded `fill_circle` call.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleCall {
    pub center: Vec2,
    pub radius: f32,
    pub color: Color,
    pub alpha: f32,
}

/// Headless surface that remembers what was drawn during the last frame.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    width: f32,
    height: f32,
    pub clears: u64,
    pub circles: Vec<CircleCall>,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            clears: 0,
            circles: Vec::new(),
        }
    }
}

impl Surface for RecordingSurface {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn clear(&mut self, _color: Color) {
        self.clears += 1;
        self.circles.clear();
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color, alpha: f32) {
        self.circles.push(CircleCall {
            center,
            radius,
            color,
            alpha,
        });
    }
}
