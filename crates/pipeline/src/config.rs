use base::Vec2;

/// Screen layout and behavior of the classifier loop.
///
/// Defaults match the 480x272 board display: the tile sits to the right,
/// the mirrored sensor frame grows up and left from (200, 160), and the
/// result text uses lines 8 and 9.
#[derive(Clone, Debug, PartialEq)]
pub struct PipelineConfig {
    screen_size: Vec2<usize>,
    line_count: usize,
    tile_origin: Vec2<i32>,
    frame_origin: Vec2<i32>,
    show_frame: bool,
    prediction_line: usize,
    confidence_line: usize,
    background: u32,
    alert_color: u32,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            screen_size: Vec2::new(480, 272),
            line_count: 11,
            tile_origin: Vec2::new(300, 100),
            frame_origin: Vec2::new(200, 160),
            show_frame: true,
            prediction_line: 8,
            confidence_line: 9,
            background: 0xFFFF_FFFF,
            alert_color: 0xFFFF_0000,
        }
    }
}

impl PipelineConfig {
    /// Set the screen size in pixels.
    pub fn with_screen_size(mut self, screen_size: Vec2<usize>) -> Self {
        self.screen_size = screen_size;
        self
    }

    /// Set the number of text lines on the screen.
    pub fn with_line_count(mut self, line_count: usize) -> Self {
        self.line_count = line_count;
        self
    }

    /// Set the top-left corner of the tile.
    pub fn with_tile_origin(mut self, tile_origin: Vec2<i32>) -> Self {
        self.tile_origin = tile_origin;
        self
    }

    /// Set the anchor of the mirrored frame (its bottom-right corner on screen).
    pub fn with_frame_origin(mut self, frame_origin: Vec2<i32>) -> Self {
        self.frame_origin = frame_origin;
        self
    }

    /// Show or hide the raw sensor frame.
    pub fn with_show_frame(mut self, show_frame: bool) -> Self {
        self.show_frame = show_frame;
        self
    }

    /// Set the text lines for the prediction and confidence.
    pub fn with_text_lines(mut self, prediction_line: usize, confidence_line: usize) -> Self {
        self.prediction_line = prediction_line;
        self.confidence_line = confidence_line;
        self
    }

    /// Set the color the screen is cleared to after a successful start.
    pub fn with_background(mut self, background: u32) -> Self {
        self.background = background;
        self
    }

    /// Set the color the screen is cleared to when capture fails to start.
    pub fn with_alert_color(mut self, alert_color: u32) -> Self {
        self.alert_color = alert_color;
        self
    }

    pub fn screen_size(&self) -> Vec2<usize> {
        self.screen_size
    }

    pub fn line_count(&self) -> usize {
        self.line_count
    }

    pub fn tile_origin(&self) -> Vec2<i32> {
        self.tile_origin
    }

    pub fn frame_origin(&self) -> Vec2<i32> {
        self.frame_origin
    }

    pub fn show_frame(&self) -> bool {
        self.show_frame
    }

    pub fn prediction_line(&self) -> usize {
        self.prediction_line
    }

    pub fn confidence_line(&self) -> usize {
        self.confidence_line
    }

    pub fn background(&self) -> u32 {
        self.background
    }

    pub fn alert_color(&self) -> u32 {
        self.alert_color
    }
}
