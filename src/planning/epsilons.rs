use std::str::FromStr;

use crate::foundation::error::{ZoomError, ZoomResult};
use crate::foundation::math::is_strictly_decreasing;

/// Non-empty, strictly decreasing list of positive, finite epsilons.
///
/// Construction is the only validation point; every `EpsilonList` in circulation already
/// satisfies the invariants.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct EpsilonList(Vec<f64>);

impl EpsilonList {
    pub fn new(values: &[f64]) -> ZoomResult<Self> {
        if values.is_empty() {
            return Err(ZoomError::epsilons_type(
                "epsilons must contain at least one value; a single epsilon is a one-element list",
            ));
        }
        if let Some((i, v)) = values
            .iter()
            .enumerate()
            .find(|(_, v)| !v.is_finite() || **v <= 0.0)
        {
            return Err(ZoomError::epsilons_order(format!(
                "epsilon #{i} must be positive and finite, got {v}"
            )));
        }
        if !is_strictly_decreasing(values) {
            return Err(ZoomError::epsilons_order(format!(
                "epsilons must be strictly decreasing, got {values:?}"
            )));
        }
        Ok(Self(values.to_vec()))
    }

    /// Build from untyped JSON. Anything other than an array of numbers is a type error.
    pub fn from_value(value: &serde_json::Value) -> ZoomResult<Self> {
        let serde_json::Value::Array(items) = value else {
            return Err(ZoomError::epsilons_type(format!(
                "epsilons must be an ordered array, got {}",
                json_kind(value)
            )));
        };
        let values = items
            .iter()
            .enumerate()
            .map(|(i, v)| {
                v.as_f64().ok_or_else(|| {
                    ZoomError::epsilons_type(format!(
                        "epsilon #{i} must be a number, got {}",
                        json_kind(v)
                    ))
                })
            })
            .collect::<ZoomResult<Vec<_>>>()?;
        Self::new(&values)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, i: usize) -> Option<f64> {
        self.0.get(i).copied()
    }

    pub fn smallest(&self) -> f64 {
        self.0[self.0.len() - 1]
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().copied()
    }
}

impl TryFrom<Vec<f64>> for EpsilonList {
    type Error = ZoomError;

    fn try_from(values: Vec<f64>) -> ZoomResult<Self> {
        Self::new(&values)
    }
}

impl From<EpsilonList> for Vec<f64> {
    fn from(list: EpsilonList) -> Self {
        list.0
    }
}

impl FromStr for EpsilonList {
    type Err = ZoomError;

    /// Parse a JSON array such as `[0.25, 0.05]`.
    fn from_str(s: &str) -> ZoomResult<Self> {
        let value: serde_json::Value = serde_json::from_str(s)
            .map_err(|e| ZoomError::epsilons_type(format!("parse epsilons JSON: {e}")))?;
        Self::from_value(&value)
    }
}

fn json_kind(v: &serde_json::Value) -> &'static str {
    match v {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an unordered object",
    }
}

#[cfg(test)]
#[path = "../../tests/unit/planning/epsilons.rs"]
mod tests;
