use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::animation::ease::Ease;
use crate::convergence::detector::DEFAULT_SEARCH_CAP;
use crate::foundation::error::{ZoomError, ZoomResult};

/// Tunables for planning an animation. Every field has a default; JSON configs may set any subset.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlanParams {
    /// Maximum index probed per epsilon.
    pub search_cap: u64,
    /// Headroom applied to the initial half-width.
    pub margin_factor: f64,
    /// Frames between consecutive point reveals.
    pub reveal_rate: u64,
    /// Points revealed one by one before the rest appear at once.
    pub points_to_show: u64,
    /// Pause between the reveal and the first zoom.
    pub wait_frames: u64,
    /// Frames per zoom phase.
    pub frame_unit: u64,
    /// Frames per freeze phase.
    pub freeze_unit: u64,
    /// Progress curve for zoom phases.
    pub zoom_ease: Ease,
}

impl Default for PlanParams {
    fn default() -> Self {
        Self {
            search_cap: DEFAULT_SEARCH_CAP,
            margin_factor: 1.1,
            reveal_rate: 60,
            points_to_show: 20,
            wait_frames: 50,
            frame_unit: 500,
            freeze_unit: 400,
            zoom_ease: Ease::Linear,
        }
    }
}

impl PlanParams {
    pub fn validate(&self) -> ZoomResult<()> {
        if self.search_cap == 0 {
            return Err(ZoomError::params("search_cap must be >= 1"));
        }
        if !self.margin_factor.is_finite() || self.margin_factor < 1.0 {
            return Err(ZoomError::params(format!(
                "margin_factor must be finite and >= 1, got {}",
                self.margin_factor
            )));
        }
        if self.reveal_rate == 0 {
            return Err(ZoomError::params("reveal_rate must be >= 1"));
        }
        if self.frame_unit == 0 {
            return Err(ZoomError::params("frame_unit must be >= 1"));
        }
        if self.freeze_unit == 0 {
            return Err(ZoomError::params("freeze_unit must be >= 1"));
        }
        Ok(())
    }

    /// Parse parameters from JSON. Missing fields keep their defaults.
    pub fn from_reader<R: std::io::Read>(r: R) -> ZoomResult<Self> {
        let params: Self = serde_json::from_reader(r)
            .map_err(|e| ZoomError::serde(format!("parse plan params JSON: {e}")))?;
        params.validate()?;
        Ok(params)
    }

    pub fn from_path(path: impl AsRef<Path>) -> ZoomResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ZoomError::serde(format!("open plan params JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Frames spent revealing points one at a time.
    pub fn reveal_frames(&self) -> u64 {
        self.points_to_show.saturating_mul(self.reveal_rate)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/planning/params.rs"]
mod tests;
