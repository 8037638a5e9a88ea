use base::Vec2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Center,
    Right,
}

/// A display the pipeline draws onto.
///
/// Colors are opaque ARGB words. Writes outside the surface are clipped by
/// the implementation, never reported.
pub trait Surface {
    fn clear(&mut self, color: u32);
    fn set_pixel(&mut self, x: i32, y: i32, color: u32);
    fn draw_text(&mut self, line: usize, text: &str, alignment: Alignment);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextLine {
    pub text: String,
    pub alignment: Alignment,
}

/// In-memory ARGB surface with a fixed number of text lines.
///
/// Pixels are row-major, ready for `minifb::Window::update_with_buffer`.
/// Text is kept per line rather than rasterized.
#[derive(Debug, Clone)]
pub struct Framebuffer {
    size: Vec2<usize>,
    pixels: Vec<u32>,
    lines: Vec<Option<TextLine>>,
}

impl Framebuffer {
    pub fn new(size: Vec2<usize>, line_count: usize) -> Self {
        Self {
            size,
            pixels: vec![0xFF00_0000; size.area()],
            lines: vec![None; line_count],
        }
    }

    pub fn size(&self) -> Vec2<usize> {
        self.size
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    pub fn pixel(&self, x: i32, y: i32) -> Option<u32> {
        if !self.size.contains(Vec2::new(x, y)) {
            return None;
        }
        Some(self.pixels[y as usize * self.size.x + x as usize])
    }

    pub fn text(&self, line: usize) -> Option<&TextLine> {
        self.lines.get(line).and_then(|l| l.as_ref())
    }

    /// Occupied text lines, top to bottom.
    pub fn lines(&self) -> impl Iterator<Item = (usize, &TextLine)> {
        self.lines
            .iter()
            .enumerate()
            .filter_map(|(i, l)| l.as_ref().map(|l| (i, l)))
    }
}

impl Surface for Framebuffer {
    fn clear(&mut self, color: u32) {
        self.pixels.fill(color);
        self.lines.iter_mut().for_each(|l| *l = None);
    }

    fn set_pixel(&mut self, x: i32, y: i32, color: u32) {
        if self.size.contains(Vec2::new(x, y)) {
            self.pixels[y as usize * self.size.x + x as usize] = color;
        }
    }

    fn draw_text(&mut self, line: usize, text: &str, alignment: Alignment) {
        if let Some(slot) = self.lines.get_mut(line) {
            *slot = Some(TextLine {
                text: text.to_string(),
                alignment,
            });
        }
    }
}
