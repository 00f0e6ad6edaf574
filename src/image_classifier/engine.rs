use crate::image_classifier::decode::decode;
use crate::image_classifier::error::{ClassifyError, LoadError};
use crate::image_classifier::impl_tract_onnx::ModelTractOnnx;
use crate::image_classifier::interface::{Classification, Model};
use crate::image_classifier::label_table::LabelTable;
use crate::image_classifier::preprocess;
use crate::logger::interface::Logger;

// Owns the once-loaded model and label table for the process lifetime.
// Neither is mutated after construction, so `classify` is safe to call
// concurrently through a shared reference.
pub struct InferenceEngine {
    model: Box<dyn Model>,
    labels: LabelTable,
    logger: Box<dyn Logger>,
}

impl std::fmt::Debug for InferenceEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InferenceEngine")
            .field("labels", &self.labels.len())
            .finish_non_exhaustive()
    }
}

impl InferenceEngine {
    pub fn load(
        model_path: &str,
        labels_path: &str,
        logger: Box<dyn Logger>,
    ) -> Result<Self, LoadError> {
        let model = ModelTractOnnx::new(model_path)?;
        let labels = LabelTable::from_path(labels_path)?;

        let engine = Self::new(Box::new(model), labels, logger);

        engine.logger.info(&format!(
            "loaded model {} with {} labels from {}",
            model_path,
            engine.labels.len(),
            labels_path
        ));

        Ok(engine)
    }

    pub fn new(model: Box<dyn Model>, labels: LabelTable, logger: Box<dyn Logger>) -> Self {
        Self {
            model,
            labels,
            logger: logger.with_namespace("engine"),
        }
    }

    pub fn classify(&self, image_path: &str) -> Result<Classification, ClassifyError> {
        let image = preprocess::load_image(image_path)?;
        let tensor = preprocess::image_to_tensor(&image);

        let prediction = self.model.infer(&tensor)?;

        let classification = decode(&prediction, &self.labels)?;

        self.logger.info(&format!(
            "classified {} as {} ({:.1}%)",
            image_path,
            classification.label,
            classification.confidence * 100.0
        ));

        Ok(classification)
    }
}
