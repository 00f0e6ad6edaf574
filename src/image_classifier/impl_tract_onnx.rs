use crate::image_classifier::error::{InferenceError, LoadError};
use crate::image_classifier::interface::{
    ImageTensor, Model, PredictionVector, INPUT_CHANNELS, INPUT_HEIGHT, INPUT_WIDTH,
};
use tract_onnx::prelude::*;

pub struct ModelTractOnnx {
    plan: SimplePlan<TypedFact, Box<dyn TypedOp>, TypedModel>,
}

impl ModelTractOnnx {
    pub fn new(model_path: &str) -> Result<Self, LoadError> {
        let plan = load_plan(model_path).map_err(|e| LoadError::Model {
            path: model_path.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self { plan })
    }
}

fn load_plan(model_path: &str) -> TractResult<SimplePlan<TypedFact, Box<dyn TypedOp>, TypedModel>> {
    tract_onnx::onnx()
        .model_for_path(model_path)?
        .with_input_fact(
            0,
            f32::fact([1, INPUT_HEIGHT, INPUT_WIDTH, INPUT_CHANNELS]).into(),
        )?
        .into_optimized()?
        .into_runnable()
}

impl Model for ModelTractOnnx {
    fn infer(&self, input: &ImageTensor) -> Result<PredictionVector, InferenceError> {
        let tensor = tract_ndarray::Array4::from_shape_vec(
            (1, INPUT_HEIGHT, INPUT_WIDTH, INPUT_CHANNELS),
            input.as_slice().to_vec(),
        )
        .map_err(|e| InferenceError {
            reason: e.to_string(),
        })?
        .into_tensor();

        let outputs = self
            .plan
            .run(tvec!(tensor.into_tvalue()))
            .map_err(|e| InferenceError {
                reason: e.to_string(),
            })?;

        let scores = outputs
            .first()
            .ok_or_else(|| InferenceError {
                reason: "model produced no outputs".to_string(),
            })?
            .to_array_view::<f32>()
            .map_err(|e| InferenceError {
                reason: e.to_string(),
            })?;

        Ok(scores.iter().copied().collect())
    }
}
