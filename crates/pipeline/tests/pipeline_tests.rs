use image::fill_rgb565;
use inference::{ClassScores, InferError, Model};
use pipeline::{FRAME_BYTES, Pipeline, PipelineConfig, PipelineError, TILE_BYTES};
use video::{Alignment, CaptureConfig, Framebuffer, TestPattern, VideoError, VideoInDevice};

const RED: u32 = 0xFFFF_0000;
const WHITE: u32 = 0xFFFF_FFFF;

struct MissingDevice;

impl VideoInDevice for MissingDevice {
    fn open(&mut self, _config: &CaptureConfig) -> Result<CaptureConfig, VideoError> {
        Err(VideoError::Device("no sensor".to_string()))
    }

    fn close(&mut self) {}

    fn blocking_capture(&mut self, _frame: &mut [u8]) -> Result<(), VideoError> {
        Err(VideoError::Stream("not open".to_string()))
    }
}

// delivers one red frame, then fails
#[derive(Default)]
struct OneShotDevice {
    captures: usize,
}

impl VideoInDevice for OneShotDevice {
    fn open(&mut self, config: &CaptureConfig) -> Result<CaptureConfig, VideoError> {
        Ok(config.clone())
    }

    fn close(&mut self) {}

    fn blocking_capture(&mut self, frame: &mut [u8]) -> Result<(), VideoError> {
        self.captures += 1;
        if self.captures > 1 {
            return Err(VideoError::Stream("sensor timeout".to_string()));
        }
        fill_rgb565(frame, 0xFF, 0, 0);
        Ok(())
    }
}

// returns fixed scores and keeps the last tile it saw
struct FixedModel {
    scores: ClassScores,
    last_tile: Vec<u8>,
}

impl FixedModel {
    fn new(scores: ClassScores) -> Self {
        Self {
            scores,
            last_tile: Vec::new(),
        }
    }
}

impl Model for FixedModel {
    fn infer(&mut self, tile: &[u8], scores: &mut ClassScores) -> Result<(), InferError> {
        self.last_tile = tile.to_vec();
        *scores = self.scores;
        Ok(())
    }
}

struct BrokenModel;

impl Model for BrokenModel {
    fn infer(&mut self, _tile: &[u8], _scores: &mut ClassScores) -> Result<(), InferError> {
        Err(InferError::Shape("bad tile".to_string()))
    }
}

fn cat_scores() -> ClassScores {
    let mut scores = [-128; 10];
    scores[3] = 127;
    scores
}

fn screen(config: &PipelineConfig) -> Framebuffer {
    Framebuffer::new(config.screen_size(), config.line_count())
}

#[test]
fn test_start_failure_clears_to_alert_and_keeps_running() {
    let config = PipelineConfig::default();
    let mut surface = screen(&config);
    let mut pipeline = Pipeline::new(MissingDevice, FixedModel::new(cat_scores()), config);

    assert!(!pipeline.start(&mut surface));
    assert_eq!(surface.pixel(0, 0), Some(RED));
    assert_eq!(surface.pixel(479, 271), Some(RED));

    // every capture fails, the loop still produces output
    for _ in 0..3 {
        let prediction = pipeline.step(&mut surface).unwrap();
        assert_eq!(prediction.index, 3);
    }
    assert_eq!(surface.pixel(0, 0), Some(RED));
    // zeroed frame gives a black tile
    assert_eq!(surface.pixel(300, 100), Some(0xFF00_0000));
    assert_eq!(surface.text(8).unwrap().text, "  Prediction: Cat       ");
}

#[test]
fn test_start_success_clears_to_background() {
    let config = PipelineConfig::default();
    let mut surface = screen(&config);
    let mut pipeline = Pipeline::new(TestPattern::bars(), FixedModel::new(cat_scores()), config);

    assert!(pipeline.start(&mut surface));
    assert!(surface.pixels().iter().all(|&p| p == WHITE));
}

#[test]
fn test_step_draws_two_text_lines() {
    let config = PipelineConfig::default();
    let mut surface = screen(&config);
    let mut pipeline = Pipeline::new(TestPattern::bars(), FixedModel::new(cat_scores()), config);
    pipeline.start(&mut surface);

    let prediction = pipeline.step(&mut surface).unwrap();

    assert_eq!(prediction.index, 3);
    assert_eq!(prediction.score, 127);
    let prediction_line = surface.text(8).unwrap();
    assert_eq!(prediction_line.text, "  Prediction: Cat       ");
    assert_eq!(prediction_line.alignment, Alignment::Left);
    let confidence_line = surface.text(9).unwrap();
    assert_eq!(confidence_line.text, "  Confidence: 100.0%   ");
    assert_eq!(confidence_line.alignment, Alignment::Left);
    assert_eq!(surface.lines().count(), 2);
}

#[test]
fn test_solid_red_frame_end_to_end() {
    let config = PipelineConfig::default();
    let mut surface = screen(&config);
    let mut pipeline = Pipeline::new(
        TestPattern::solid(0xFF, 0, 0),
        FixedModel::new(cat_scores()),
        config,
    );
    pipeline.start(&mut surface);
    pipeline.step(&mut surface).unwrap();

    assert_eq!(pipeline.tile().data.len(), TILE_BYTES);
    assert!(pipeline.tile().data.chunks_exact(3).all(|p| p == [0xF8, 0, 0]));
    assert_eq!(pipeline.frame().data.len(), FRAME_BYTES);

    // the model sees the tile
    assert_eq!(pipeline.model().last_tile, pipeline.tile().data.to_vec());

    // tile drawn upright at (300, 100)
    assert_eq!(surface.pixel(300, 100), Some(0xFFF8_0000));
    assert_eq!(surface.pixel(331, 131), Some(0xFFF8_0000));
    assert_eq!(surface.pixel(332, 132), Some(WHITE));
    // frame drawn mirrored from (200, 160) up to (41, 41)
    assert_eq!(surface.pixel(200, 160), Some(0xFFF8_0000));
    assert_eq!(surface.pixel(41, 41), Some(0xFFF8_0000));
    assert_eq!(surface.pixel(40, 40), Some(WHITE));
    assert_eq!(surface.pixel(201, 161), Some(WHITE));
}

#[test]
fn test_hidden_frame_is_not_drawn() {
    let config = PipelineConfig::default().with_show_frame(false);
    let mut surface = screen(&config);
    let mut pipeline = Pipeline::new(
        TestPattern::solid(0xFF, 0, 0),
        FixedModel::new(cat_scores()),
        config,
    );
    pipeline.start(&mut surface);
    pipeline.step(&mut surface).unwrap();

    assert_eq!(surface.pixel(300, 100), Some(0xFFF8_0000));
    assert_eq!(surface.pixel(200, 160), Some(WHITE));
}

#[test]
fn test_model_error_skips_text() {
    let config = PipelineConfig::default();
    let mut surface = screen(&config);
    let mut pipeline = Pipeline::new(TestPattern::solid(0xFF, 0, 0), BrokenModel, config);
    pipeline.start(&mut surface);

    let result = pipeline.step(&mut surface);

    assert!(matches!(result, Err(PipelineError::Infer(InferError::Shape(_)))));
    assert!(surface.text(8).is_none());
    assert!(surface.text(9).is_none());
    // tile was still presented
    assert_eq!(surface.pixel(300, 100), Some(0xFFF8_0000));
}

#[test]
fn test_capture_error_reuses_previous_frame() {
    let config = PipelineConfig::default();
    let mut surface = screen(&config);
    let mut pipeline = Pipeline::new(OneShotDevice::default(), FixedModel::new(cat_scores()), config);
    pipeline.start(&mut surface);

    pipeline.step(&mut surface).unwrap();
    pipeline.step(&mut surface).unwrap();

    assert!(pipeline.tile().data.chunks_exact(3).all(|p| p == [0xF8, 0, 0]));
}

#[test]
fn test_custom_normalizer_replaces_softmax() {
    let config = PipelineConfig::default();
    let mut surface = screen(&config);
    let scores = [5, 5, 3, 0, 0, 0, 0, 0, 0, 0];
    let mut pipeline = Pipeline::new(TestPattern::bars(), FixedModel::new(scores), config)
        .with_normalizer(|_| {});
    pipeline.start(&mut surface);

    let prediction = pipeline.step(&mut surface).unwrap();

    assert_eq!(prediction.index, 0);
    assert_eq!(pipeline.scores(), &scores);
    assert_eq!(surface.text(8).unwrap().text, "  Prediction: Plane       ");
    assert_eq!(surface.text(9).unwrap().text, "  Confidence: 3.9%   ");
}

#[test]
fn test_custom_layout() {
    let config = PipelineConfig::default()
        .with_tile_origin(base::Vec2::new(0, 0))
        .with_text_lines(0, 1)
        .with_background(0xFF00_0000);
    let mut surface = screen(&config);
    let mut pipeline = Pipeline::new(
        TestPattern::solid(0, 0, 0xFF),
        FixedModel::new(cat_scores()),
        config,
    );
    pipeline.start(&mut surface);
    pipeline.step(&mut surface).unwrap();

    assert_eq!(surface.pixel(0, 0), Some(0xFF00_00F8));
    assert_eq!(surface.pixel(300, 100), Some(0xFF00_0000));
    assert!(surface.text(0).unwrap().text.contains("Cat"));
    assert!(surface.text(1).unwrap().text.contains("100.0%"));
}

#[test]
fn test_snapshot_writes_png_files() {
    let dir = std::env::temp_dir().join(format!("pipeline-snapshot-{}", std::process::id()));
    let config = PipelineConfig::default();
    let mut surface = screen(&config);
    let mut pipeline = Pipeline::new(
        TestPattern::solid(0xFF, 0, 0),
        FixedModel::new(cat_scores()),
        config,
    );
    pipeline.start(&mut surface);
    pipeline.step(&mut surface).unwrap();

    pipeline.save_snapshot(&dir).unwrap();

    for name in ["tile.png", "frame.png"] {
        let bytes = std::fs::read(dir.join(name)).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }
    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_start_with_keeps_fixed_frame_size() {
    let config = PipelineConfig::default();
    let mut surface = screen(&config);
    let mut pipeline = Pipeline::new(
        TestPattern::solid(0xFF, 0, 0),
        FixedModel::new(cat_scores()),
        config,
    );
    let capture = CaptureConfig::default().with_size(base::Vec2::new(320, 240));

    assert!(pipeline.start_with(&mut surface, &capture));
    pipeline.step(&mut surface).unwrap();

    // the pattern was opened at 160x120, so capture succeeded
    assert!(pipeline.tile().data.chunks_exact(3).all(|p| p == [0xF8, 0, 0]));
}
