//! Biometric defaults for the `tracker` binary.
//!
//! The library always takes weight and height as arguments. The binary lets
//! them come from flags or, failing that, from the environment (`.env` is
//! honoured):
//!
//! - `TRACKER_WEIGHT_KG`
//! - `TRACKER_HEIGHT_M`
//!
//! Environment values are kept raw and only parsed when the matching flag is
//! absent, so a broken variable never overrides an explicit flag.

use crate::domain::Biometrics;
use crate::error::AppError;

pub const WEIGHT_ENV: &str = "TRACKER_WEIGHT_KG";
pub const HEIGHT_ENV: &str = "TRACKER_HEIGHT_M";

/// Raw biometric values found in the environment (either may be absent).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BiometricDefaults {
    pub weight: Option<String>,
    pub height: Option<String>,
}

impl BiometricDefaults {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_env_with(|k| std::env::var(k).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injected lookup, so tests
    /// never touch the process environment.
    pub fn from_env_with<F>(mut get: F) -> Self
    where
        F: FnMut(&str) -> Option<String>,
    {
        Self {
            weight: get(WEIGHT_ENV),
            height: get(HEIGHT_ENV),
        }
    }

    /// Combine explicit values with these defaults; explicit values win.
    pub fn resolve(&self, weight: Option<f64>, height: Option<f64>) -> Result<Biometrics, AppError> {
        let weight = pick(weight, WEIGHT_ENV, self.weight.as_deref())?.ok_or_else(|| {
            AppError::new(2, format!("Missing weight: pass `--weight <kg>` or set {WEIGHT_ENV}."))
        })?;
        let height = pick(height, HEIGHT_ENV, self.height.as_deref())?.ok_or_else(|| {
            AppError::new(2, format!("Missing height: pass `--height <m>` or set {HEIGHT_ENV}."))
        })?;
        Ok(Biometrics::new(weight, height))
    }
}

fn pick(explicit: Option<f64>, key: &str, raw: Option<&str>) -> Result<Option<f64>, AppError> {
    explicit.map(|v| Ok(Some(v))).unwrap_or_else(|| parse_number(key, raw))
}

fn parse_number(key: &str, raw: Option<&str>) -> Result<Option<f64>, AppError> {
    let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return Ok(None);
    };
    raw.parse::<f64>()
        .map(Some)
        .map_err(|e| AppError::new(2, format!("Invalid {key}='{raw}': {e}")))
}
