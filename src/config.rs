#[derive(Debug, Clone)]
pub struct Config {
    pub model_path: String,
    pub labels_path: String,
    pub logger_timezone: chrono::FixedOffset,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model_path: "model.onnx".to_string(),
            labels_path: "labels.txt".to_string(),
            logger_timezone: utc(),
        }
    }
}

fn utc() -> chrono::FixedOffset {
    chrono::FixedOffset::east_opt(0).unwrap()
}
