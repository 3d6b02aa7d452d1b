pub const DEFAULT_FONT_FAMILY: &str = "monospace";

#[derive(Debug, PartialEq, Clone)]
pub enum Shape {
    Rect,
    /// Horizontal line through the middle of the pipe with the given stroke width
    HLine(u32),
}

pub type Color = String;

#[derive(Debug, PartialEq, Clone)]
pub struct Seg {
    pub width: u32,
    pub color: Color,
    pub shape: Shape,
}

#[derive(Debug, PartialEq, Clone)]
pub struct Band {
    pub pos: u32, // Position relative to pipe's start
    pub width: u32,
    pub color: Color,
    pub opacity: f64,
}

#[derive(Debug, Clone)]
pub struct Pipe {
    pub xpos: u32,
    pub ypos: u32,
    pub height: u32,
    pub segs: Vec<Seg>,
    pub bands: Vec<Band>,
    pub label: Option<String>,
}

impl Pipe {
    pub fn width(&self) -> u32 {
        self.segs.iter().map(|s| s.width).sum()
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct LegendEntry {
    pub label: String,
    pub color: Color,
    pub shape: Shape,
}

/// Vertical legend; entry `i` occupies the row starting at `ypos + i * height`
#[derive(Debug, Clone)]
pub struct Legend {
    pub xpos: u32,
    pub ypos: u32,
    pub height: u32,
    pub title: Option<String>,
    pub entries: Vec<LegendEntry>,
}

#[derive(Debug, Clone)]
pub struct PipePlot {
    pub width: u32,
    pub height: u32,
    pub pipes: Vec<Pipe>,
    pub legend: Legend,
    pub font_family: String,
}

impl PipePlot {
    pub fn set_font_family(&mut self, font_family: &str) {
        self.font_family = font_family.to_string();
    }
}
