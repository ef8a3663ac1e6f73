//! Fingerprint match tuning parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_PHASH_THRESHOLD: u32 = 8;
pub const DEFAULT_DURATION_TOLERANCE_SECS: f64 = 5.0;

pub const PHASH_THRESHOLD_ENV: &str = "STASHKIT_PHASH_THRESHOLD";
pub const DURATION_TOLERANCE_ENV: &str = "STASHKIT_DURATION_TOLERANCE_SECS";

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("config parse failed: {var}={value:?}: {reason}")]
    Parse { var: &'static str, value: String, reason: String },
}

impl ConfigError {
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Parse { .. } => "E_CONFIG_PARSE",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchConfig {
    /// Largest phash distance still treated as the same video.
    pub phash_threshold: u32,
    /// Largest duration difference, in seconds, still treated as a match.
    pub duration_tolerance_secs: f64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self { phash_threshold: DEFAULT_PHASH_THRESHOLD, duration_tolerance_secs: DEFAULT_DURATION_TOLERANCE_SECS }
    }
}

impl MatchConfig {
    /// Build match config from environment variables.
    ///
    /// Optional:
    /// - `STASHKIT_PHASH_THRESHOLD`: default 8
    /// - `STASHKIT_DURATION_TOLERANCE_SECS`: default 5
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when a variable is set but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            phash_threshold: parse_threshold(std::env::var(PHASH_THRESHOLD_ENV).ok().as_deref())?,
            duration_tolerance_secs: parse_tolerance(std::env::var(DURATION_TOLERANCE_ENV).ok().as_deref())?,
        })
    }

    #[must_use]
    pub fn with_phash_threshold(mut self, threshold: Option<u32>) -> Self {
        if let Some(threshold) = threshold {
            self.phash_threshold = threshold;
        }
        self
    }

    #[must_use]
    pub fn with_duration_tolerance(mut self, secs: Option<f64>) -> Self {
        if let Some(secs) = secs {
            self.duration_tolerance_secs = secs;
        }
        self
    }
}

fn parse_threshold(raw: Option<&str>) -> Result<u32, ConfigError> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_PHASH_THRESHOLD);
    };
    raw.trim().parse::<u32>().map_err(|e| ConfigError::Parse {
        var: PHASH_THRESHOLD_ENV,
        value: raw.to_owned(),
        reason: e.to_string(),
    })
}

fn parse_tolerance(raw: Option<&str>) -> Result<f64, ConfigError> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_DURATION_TOLERANCE_SECS);
    };
    let parsed = raw.trim().parse::<f64>().map_err(|e| ConfigError::Parse {
        var: DURATION_TOLERANCE_ENV,
        value: raw.to_owned(),
        reason: e.to_string(),
    })?;
    if !parsed.is_finite() || parsed < 0.0 {
        return Err(ConfigError::Parse {
            var: DURATION_TOLERANCE_ENV,
            value: raw.to_owned(),
            reason: "expected a non-negative number of seconds".to_owned(),
        });
    }
    Ok(parsed)
}
