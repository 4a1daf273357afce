use serde::{Deserialize, Serialize};

/// A class label as stored in a model artifact and returned in the body.
///
/// Labels are plain JSON scalars, so integer classes encode as `0`,
/// numeric outputs as `0.25` and named classes as `"setosa"`. Numeric
/// outputs stay `f32`, the precision every model computes in.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Label {
    Int(i64),
    Float(f32),
    Text(String),
}

impl From<i64> for Label {
    fn from(value: i64) -> Self {
        Label::Int(value)
    }
}

impl From<f32> for Label {
    fn from(value: f32) -> Self {
        Label::Float(value)
    }
}

impl From<&str> for Label {
    fn from(value: &str) -> Self {
        Label::Text(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_decode_by_json_type() {
        let labels: Vec<Label> = serde_json::from_str(r#"[0, 2.5, "setosa"]"#).unwrap();
        assert_eq!(
            labels,
            vec![Label::Int(0), Label::Float(2.5), Label::Text("setosa".into())]
        );
    }

    #[test]
    fn labels_encode_as_bare_scalars() {
        let body = serde_json::to_string(&vec![Label::from(1), Label::from("virginica")]).unwrap();
        assert_eq!(body, r#"[1,"virginica"]"#);
    }

    #[test]
    fn numeric_outputs_encode_at_model_precision() {
        let body = serde_json::to_string(&vec![Label::from(0.731_058_6f32)]).unwrap();
        assert_eq!(body, "[0.7310586]");
    }
}
