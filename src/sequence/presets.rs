use crate::foundation::core::Point;
use crate::foundation::error::ZoomResult;
use crate::sequence::Sequence;

/// Built-in sequences, mostly for demos and the CLI.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Preset {
    /// `n -> (1/n, 0)`.
    Harmonic,
    /// `n -> ((4/(n+1))^3 + 2/(n+1)^2, 2/(n+1)^2)`: a fast start that settles into a cusp.
    Cusp,
    /// `n -> (cos n / n, sin n / n)`.
    Spiral,
    /// `n -> (distance, 0)` for every `n`; never enters a ball smaller than `distance`.
    Constant { distance: f64 },
}

impl Preset {
    /// Epsilons that produce a well-formed ladder for this preset.
    pub fn suggested_epsilons(self) -> Vec<f64> {
        match self {
            Self::Harmonic => vec![0.25, 0.05],
            Self::Cusp => vec![1.0 / 4.0, 1.0 / 50.0, 1.0 / 400.0, 1.0 / 10000.0],
            Self::Spiral => vec![0.25, 0.02],
            Self::Constant { distance } => vec![distance / 10.0],
        }
    }

    /// Run length that makes the thresholds for this preset meaningful.
    pub fn suggested_acc(self) -> u64 {
        match self {
            Self::Harmonic => 3,
            Self::Cusp => 200,
            Self::Spiral => 10,
            Self::Constant { .. } => 3,
        }
    }
}

impl Sequence for Preset {
    fn point(&self, n: u64) -> ZoomResult<Point> {
        let x = n as f64;
        Ok(match *self {
            Self::Harmonic => Point::new(1.0 / x, 0.0),
            Self::Cusp => {
                let m = x + 1.0;
                let tail = 2.0 / (m * m);
                Point::new((4.0 / m).powi(3) + tail, tail)
            }
            Self::Spiral => Point::new(x.cos() / x, x.sin() / x),
            Self::Constant { distance } => Point::new(distance, 0.0),
        })
    }
}
