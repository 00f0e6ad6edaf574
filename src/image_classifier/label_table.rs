use crate::image_classifier::error::LoadError;

// One label per line, line order is class-index order. Lines follow the
// `<index> <name>` convention of Teachable Machine exports ("0 Awake");
// the numeric prefix is stripped at load so callers only ever see names.
#[derive(Debug, Clone)]
pub struct LabelTable {
    labels: Vec<String>,
}

impl LabelTable {
    pub fn from_path(path: &str) -> Result<Self, LoadError> {
        let text = std::fs::read_to_string(path).map_err(|e| LoadError::Labels {
            path: path.to_string(),
            reason: e.to_string(),
        })?;

        Self::from_text(&text).map_err(|e| LoadError::Labels {
            path: path.to_string(),
            reason: e.to_string(),
        })
    }

    pub fn from_text(text: &str) -> Result<Self, LoadError> {
        let labels: Vec<String> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| strip_index_prefix(line).to_string())
            .collect();

        if labels.is_empty() {
            return Err(LoadError::EmptyLabels);
        }

        Ok(Self { labels })
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }
}

// "0 Awake" -> "Awake", "10 Dog" -> "Dog". Lines without a digits-then-space
// prefix pass through whole, including all-digit lines.
fn strip_index_prefix(line: &str) -> &str {
    let rest = line.trim_start_matches(|c: char| c.is_ascii_digit());
    if rest.len() < line.len() && rest.starts_with(char::is_whitespace) {
        rest.trim_start()
    } else {
        line
    }
}
