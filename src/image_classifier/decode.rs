use crate::image_classifier::error::ClassifyError;
use crate::image_classifier::interface::Classification;
use crate::image_classifier::label_table::LabelTable;

// Argmax over the prediction vector, ties broken by the first occurrence.
pub fn decode(prediction: &[f32], labels: &LabelTable) -> Result<Classification, ClassifyError> {
    if prediction.len() != labels.len() {
        return Err(ClassifyError::LabelMismatch {
            prediction_len: prediction.len(),
            label_len: labels.len(),
        });
    }

    let mut best_index = 0;
    let mut best_score = f32::NEG_INFINITY;
    for (index, &score) in prediction.iter().enumerate() {
        if score > best_score {
            best_index = index;
            best_score = score;
        }
    }

    let label = labels.get(best_index).ok_or(ClassifyError::LabelMismatch {
        prediction_len: prediction.len(),
        label_len: labels.len(),
    })?;

    Ok(Classification {
        label: label.to_string(),
        confidence: best_score,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels() -> LabelTable {
        LabelTable::from_text("0 Awake\n1 Sleep\n2 Unknown\n").unwrap()
    }

    #[test]
    fn test_picks_unique_maximum() {
        let classification = decode(&[0.1, 0.7, 0.2], &labels()).unwrap();

        assert_eq!(classification.label, "Sleep");
        assert!((classification.confidence - 0.7).abs() < 1e-6);
    }

    #[test]
    fn test_tie_breaks_to_lowest_index() {
        let classification = decode(&[0.4, 0.4, 0.2], &labels()).unwrap();

        assert_eq!(classification.label, "Awake");
    }

    #[test]
    fn test_maximum_at_last_index() {
        let classification = decode(&[0.1, 0.2, 0.7], &labels()).unwrap();

        assert_eq!(classification.label, "Unknown");
    }

    #[test]
    fn test_length_mismatch_fails_loudly() {
        let err = decode(&[0.5, 0.5], &labels()).unwrap_err();

        assert!(matches!(
            err,
            ClassifyError::LabelMismatch {
                prediction_len: 2,
                label_len: 3,
            }
        ));
    }

    #[test]
    fn test_confidence_stays_in_unit_interval() {
        let classification = decode(&[0.25, 0.3, 0.45], &labels()).unwrap();

        assert!((0.0..=1.0).contains(&classification.confidence));
    }
}
