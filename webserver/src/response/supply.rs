use serde::Serialize;

/// Bare supply figure, serialized under an empty key for compatibility
/// with existing consumers.
#[derive(Clone, Debug, Serialize)]
pub struct SupplyValue {
    #[serde(rename = "")]
    pub value: f64,
}

impl From<f64> for SupplyValue {
    fn from(value: f64) -> Self {
        Self { value }
    }
}
