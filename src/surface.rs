/// HSLA color. Hue in degrees, saturation/lightness in percent, alpha 0..1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsla {
    pub hue: f32,
    pub saturation: f32,
    pub lightness: f32,
    pub alpha: f32,
}

impl Hsla {
    pub const fn new(hue: f32, saturation: f32, lightness: f32, alpha: f32) -> Self {
        Self {
            hue,
            saturation,
            lightness,
            alpha,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    pub offset: f32,
    pub color: Hsla,
}

/// Positional linear gradient between two surface-space points.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearGradient {
    pub from: (f32, f32),
    pub to: (f32, f32),
    pub stops: Vec<GradientStop>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Paint {
    Solid(Hsla),
    Linear(LinearGradient),
}

/// Stroke configuration for a path. Joins and caps are always round.
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    pub paint: Paint,
    pub width: f32,
}

/// The primitive drawing operations the renderer needs from its host surface.
/// The host owns the underlying pixels; the core never assumes more than this.
pub trait Surface {
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Hsla);
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f32, y: f32);
    fn line_to(&mut self, x: f32, y: f32);
    fn stroke(&mut self, style: &StrokeStyle);
    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Hsla);
    fn set_glow(&mut self, color: Hsla, blur: f32);
    fn clear_glow(&mut self);
}
