use std::fmt;

/// Score that maps to 100% confidence after q7 normalization.
pub const FULL_SCALE: f32 = 127.0;

/// Winning class of one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prediction {
    pub index: usize,
    pub score: i8,
}

impl Prediction {
    /// Confidence as a fraction of full scale. Not clamped, so negative
    /// scores give negative confidence.
    pub fn confidence(&self) -> f32 {
        self.score as f32 / FULL_SCALE
    }

    /// Percentage with one decimal, e.g. `"100.0%"`.
    pub fn confidence_text(&self) -> String {
        format!("{:.1}%", self.confidence() * 100.0)
    }

    /// Label for this prediction, or `"?"` if the table is shorter than the scores.
    pub fn label<'a>(&self, labels: &[&'a str]) -> &'a str {
        labels.get(self.index).copied().unwrap_or("?")
    }
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "class {} ({})", self.index, self.confidence_text())
    }
}

/// Arg-max over normalized scores.
///
/// The running maximum starts at -128 with index 0 and only a strictly
/// larger score replaces it, so ties go to the lowest index and an all
/// -128 vector yields index 0.
pub fn top_prediction(scores: &[i8]) -> Prediction {
    let mut best = Prediction {
        index: 0,
        score: i8::MIN,
    };
    for (index, &score) in scores.iter().enumerate() {
        if best.score < score {
            best = Prediction { index, score };
        }
    }
    best
}
