use {
    crate::*,
    serde::{Deserialize, Serialize},
    std::path::{Path, PathBuf},
};

/// A classifier over one model-input tile.
///
/// `infer` writes one raw score per class into `scores`; normalization is
/// a separate step.
pub trait Model {
    fn infer(&mut self, tile: &[u8], scores: &mut ClassScores) -> Result<(), InferError>;
}

impl<T: Model + ?Sized> Model for Box<T> {
    fn infer(&mut self, tile: &[u8], scores: &mut ClassScores) -> Result<(), InferError> {
        (**self).infer(tile, scores)
    }
}

/// Sidecar description of a q7 fully-connected model.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ModelConfig {
    /// Inputs per class row, the tile length in bytes.
    pub input_len: usize,
    /// Left shift applied to each bias before accumulation.
    pub bias_shift: u32,
    /// Right shift (with rounding) applied to each accumulator.
    pub out_shift: u32,
    /// Raw weight file: `NUM_CLASSES * input_len` weights, then `NUM_CLASSES` biases.
    pub weights: PathBuf,
}

/// Single fully-connected q7 layer.
///
/// Tile bytes are taken as q7 (two's complement), the same way the
/// firmware hands its 8-8-8 buffer to the network.
#[derive(Debug, Clone)]
pub struct FullyConnectedQ7 {
    input_len: usize,
    weights: Vec<i8>,
    biases: Vec<i8>,
    bias_shift: u32,
    out_shift: u32,
}

impl FullyConnectedQ7 {
    pub fn new(
        input_len: usize,
        weights: Vec<i8>,
        biases: Vec<i8>,
        bias_shift: u32,
        out_shift: u32,
    ) -> Result<Self, InferError> {
        if weights.len() != NUM_CLASSES * input_len {
            return Err(InferError::Shape(format!(
                "expected {} weights, got {}",
                NUM_CLASSES * input_len,
                weights.len()
            )));
        }
        if biases.len() != NUM_CLASSES {
            return Err(InferError::Shape(format!(
                "expected {} biases, got {}",
                NUM_CLASSES,
                biases.len()
            )));
        }
        if bias_shift > 24 || out_shift > 24 {
            return Err(InferError::Config(format!(
                "shifts out of range: bias {} out {}",
                bias_shift, out_shift
            )));
        }
        Ok(Self {
            input_len,
            weights,
            biases,
            bias_shift,
            out_shift,
        })
    }

    /// Load a model from its JSON sidecar. A relative weight path is
    /// resolved against the sidecar's directory.
    pub fn load(config_path: impl AsRef<Path>) -> Result<Self, InferError> {
        let config_path = config_path.as_ref();
        let config_json = std::fs::read_to_string(config_path)
            .map_err(|e| InferError::Io(format!("Failed to read model config: {}", e)))?;
        let config: ModelConfig = serde_json::from_str(&config_json)?;

        let weights_path = match config_path.parent() {
            Some(dir) if config.weights.is_relative() => dir.join(&config.weights),
            _ => config.weights.clone(),
        };
        let raw = std::fs::read(&weights_path)
            .map_err(|e| InferError::Io(format!("Failed to read {:?}: {}", weights_path, e)))?;
        let model = Self::from_bytes(&config, &raw)?;
        base::log_info!(
            "Loaded q7 model {:?}: {} inputs x {} classes",
            weights_path,
            model.input_len,
            NUM_CLASSES
        );
        Ok(model)
    }

    /// Split a raw weight blob into weights and biases.
    pub fn from_bytes(config: &ModelConfig, raw: &[u8]) -> Result<Self, InferError> {
        let weight_count = NUM_CLASSES * config.input_len;
        if raw.len() != weight_count + NUM_CLASSES {
            return Err(InferError::Shape(format!(
                "weight file holds {} bytes, expected {}",
                raw.len(),
                weight_count + NUM_CLASSES
            )));
        }
        let as_q7 = |bytes: &[u8]| bytes.iter().map(|&b| b as i8).collect::<Vec<i8>>();
        Self::new(
            config.input_len,
            as_q7(&raw[..weight_count]),
            as_q7(&raw[weight_count..]),
            config.bias_shift,
            config.out_shift,
        )
    }

    pub fn input_len(&self) -> usize {
        self.input_len
    }
}

impl Model for FullyConnectedQ7 {
    fn infer(&mut self, tile: &[u8], scores: &mut ClassScores) -> Result<(), InferError> {
        if tile.len() != self.input_len {
            return Err(InferError::Shape(format!(
                "model takes {} inputs, tile has {}",
                self.input_len,
                tile.len()
            )));
        }
        let round = if self.out_shift > 0 {
            1i64 << (self.out_shift - 1)
        } else {
            0
        };
        for (class, score) in scores.iter_mut().enumerate() {
            let row = &self.weights[class * self.input_len..(class + 1) * self.input_len];
            let dot: i64 = row
                .iter()
                .zip(tile)
                .map(|(&w, &x)| w as i64 * (x as i8) as i64)
                .sum();
            let acc = ((self.biases[class] as i64) << self.bias_shift) + round + dot;
            *score = (acc >> self.out_shift).clamp(i8::MIN as i64, i8::MAX as i64) as i8;
        }
        Ok(())
    }
}
