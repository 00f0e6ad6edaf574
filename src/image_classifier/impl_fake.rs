use crate::image_classifier::error::InferenceError;
use crate::image_classifier::interface::{ImageTensor, Model, PredictionVector};
use rand::distr::{Distribution, Uniform};

pub struct ModelFake {
    scores: Option<Vec<f32>>,
    class_count: usize,
}

impl ModelFake {
    // Draws fresh uniform scores on every call.
    pub fn new(class_count: usize) -> Self {
        Self {
            scores: None,
            class_count,
        }
    }

    // Replays the same scores on every call.
    pub fn with_scores(scores: Vec<f32>) -> Self {
        let class_count = scores.len();
        Self {
            scores: Some(scores),
            class_count,
        }
    }
}

impl Model for ModelFake {
    fn infer(&self, _input: &ImageTensor) -> Result<PredictionVector, InferenceError> {
        if let Some(scores) = &self.scores {
            return Ok(scores.clone());
        }

        let mut rng = rand::rng();

        let score_dist = Uniform::new(0.0f32, 1.0).map_err(|e| InferenceError {
            reason: e.to_string(),
        })?;

        Ok((0..self.class_count)
            .map(|_| score_dist.sample(&mut rng))
            .collect())
    }
}
