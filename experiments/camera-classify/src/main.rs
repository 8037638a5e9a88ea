use {
    base::*,
    inference::{FullyConnectedQ7, Model, NUM_CLASSES},
    minifb::{Key, Window, WindowOptions},
    pipeline::{FRAME_SIZE, Pipeline, PipelineConfig, TILE_BYTES},
    std::path::PathBuf,
    video::*,
};

const USAGE: &str = "usage: camera-classify [DEVICE] [--model CONFIG.json] [--log-dir DIR] [--snapshot DIR] [--frames N] [--hide-frame]";

#[derive(Debug, Default)]
struct Args {
    device: Option<String>,
    model: Option<PathBuf>,
    log_dir: Option<PathBuf>,
    snapshot: Option<PathBuf>,
    frames: Option<usize>,
    hide_frame: bool,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args, String> {
    let mut parsed = Args::default();
    while let Some(arg) = args.next() {
        let mut value = |name: &str| args.next().ok_or_else(|| format!("{} needs a value", name));
        match arg.as_str() {
            "--model" => parsed.model = Some(value("--model")?.into()),
            "--log-dir" => parsed.log_dir = Some(value("--log-dir")?.into()),
            "--snapshot" => parsed.snapshot = Some(value("--snapshot")?.into()),
            "--frames" => {
                let count = value("--frames")?;
                let count = count
                    .parse()
                    .map_err(|_| format!("bad frame count {}", count))?;
                parsed.frames = Some(count);
            }
            "--hide-frame" => parsed.hide_frame = true,
            flag if flag.starts_with("--") => return Err(format!("unknown option {}", flag)),
            other if parsed.device.is_none() => parsed.device = Some(other.to_string()),
            other => return Err(format!("unexpected argument {}", other)),
        }
    }
    Ok(parsed)
}

#[cfg(feature = "v4l2")]
fn create_device(path: Option<&str>) -> Box<dyn VideoInDevice> {
    match path {
        Some(_) => Box::new(V4l2::new()),
        None => Box::new(TestPattern::bars()),
    }
}

#[cfg(not(feature = "v4l2"))]
fn create_device(path: Option<&str>) -> Box<dyn VideoInDevice> {
    if path.is_some() {
        log_warn!("built without v4l2 support, using test pattern");
    }
    Box::new(TestPattern::bars())
}

fn create_model(path: Option<&PathBuf>) -> Result<Box<dyn Model>, inference::InferError> {
    match path {
        Some(path) => Ok(Box::new(FullyConnectedQ7::load(path)?)),
        None => {
            log_warn!("no model given, all classes score zero");
            let model = FullyConnectedQ7::new(
                TILE_BYTES,
                vec![0; NUM_CLASSES * TILE_BYTES],
                vec![0; NUM_CLASSES],
                0,
                0,
            )?;
            Ok(Box::new(model))
        }
    }
}

fn window_title(surface: &Framebuffer) -> String {
    let text: Vec<&str> = surface.lines().map(|(_, line)| line.text.trim()).collect();
    if text.is_empty() {
        "Camera Classify - ESC to exit".to_string()
    } else {
        format!("Camera Classify - {}", text.join(" | "))
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = match parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("{}", USAGE);
            std::process::exit(2);
        }
    };

    match &args.log_dir {
        Some(dir) => init_file_logger(dir)?,
        None => init_stdout_logger(),
    }

    let config = PipelineConfig::default().with_show_frame(!args.hide_frame);
    let screen = config.screen_size();
    let mut surface = Framebuffer::new(screen, config.line_count());

    let device = create_device(args.device.as_deref());
    let model = create_model(args.model.as_ref())?;
    let mut pipeline = Pipeline::new(device, model, config);

    let capture = CaptureConfig::default()
        .with_device(args.device.clone().map(Into::into))
        .with_size(FRAME_SIZE);
    pipeline.start_with(&mut surface, &capture);

    let mut window = Window::new(
        &window_title(&surface),
        screen.x,
        screen.y,
        WindowOptions::default(),
    )?;
    window.set_target_fps(capture.frame_rate() as usize);

    let mut snapshot = args.snapshot;
    let mut iterations = 0;
    while window.is_open() && !window.is_key_down(Key::Escape) {
        if args.frames.is_some_and(|frames| iterations >= frames) {
            break;
        }
        match pipeline.step(&mut surface) {
            Ok(_) => {
                if let Some(dir) = snapshot.take() {
                    pipeline.save_snapshot(dir)?;
                }
            }
            Err(err) => log_error!("{}", err),
        }
        iterations += 1;

        window.set_title(&window_title(&surface));
        window.update_with_buffer(surface.pixels(), screen.x, screen.y)?;
    }

    pipeline.stop();
    log_info!("stopped after {} frames", iterations);
    Ok(())
}
