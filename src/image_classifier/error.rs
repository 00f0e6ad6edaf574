use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to load model from {path}: {reason}")]
    Model { path: String, reason: String },
    #[error("failed to load labels from {path}: {reason}")]
    Labels { path: String, reason: String },
    #[error("label source contains no labels")]
    EmptyLabels,
}

#[derive(Debug, Error)]
#[error("model invocation failed: {reason}")]
pub struct InferenceError {
    pub reason: String,
}

#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error("could not decode image {path}: {source}")]
    ImageLoad {
        path: String,
        #[source]
        source: image::ImageError,
    },
    #[error(transparent)]
    Inference(#[from] InferenceError),
    #[error("prediction has {prediction_len} scores but the label table has {label_len} entries")]
    LabelMismatch {
        prediction_len: usize,
        label_len: usize,
    },
}
