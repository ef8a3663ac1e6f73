//! Scoring a local scene against a scene scraped from a stash-box.
//!
//! DESIGN
//! ======
//! The tagger shows two signals next to each remote candidate: which remote
//! perceptual hashes are close to a local one, and whether the durations of
//! the submitted fingerprints agree with the local file. Both are derived here
//! so the view only has to render the result.

#[cfg(test)]
#[path = "fingerprint_test.rs"]
mod fingerprint_test;

use serde::Serialize;

use crate::config::MatchConfig;
use crate::hamming::try_distance;
use crate::models::{Fingerprint, RemoteFingerprint, RemoteScene};

const LOCAL_PHASH_KIND: &str = "phash";
const REMOTE_PHASH_ALGORITHM: &str = "PHASH";

/// A remote phash and its best distance to any local phash.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PhashMatch {
    pub hash: String,
    pub distance: u32,
}

impl PhashMatch {
    #[must_use]
    pub fn is_exact(&self) -> bool {
        self.distance == 0
    }
}

/// Remote phashes within the configured threshold of a local phash, closest first.
#[must_use]
pub fn match_phashes(
    scene_fingerprints: &[Fingerprint],
    remote_fingerprints: &[RemoteFingerprint],
    config: &MatchConfig,
) -> Vec<PhashMatch> {
    let local: Vec<&str> = scene_fingerprints
        .iter()
        .filter(|fp| fp.kind == LOCAL_PHASH_KIND)
        .map(|fp| fp.value.as_str())
        .collect();

    let mut matches: Vec<PhashMatch> = Vec::new();
    let remote_phashes = remote_fingerprints.iter().filter(|fp| fp.algorithm == REMOTE_PHASH_ALGORITHM);
    for remote in remote_phashes {
        if matches.iter().any(|m| m.hash == remote.hash) {
            continue;
        }

        let mut best: Option<u32> = None;
        for candidate in &local {
            match try_distance(&remote.hash, candidate) {
                Ok(d) if d <= config.phash_threshold => {
                    best = Some(best.map_or(d, |b| b.min(d)));
                }
                Ok(_) => {}
                Err(error) => {
                    tracing::debug!(
                        remote = %remote.hash,
                        local = %candidate,
                        %error,
                        "skipping incomparable phash"
                    );
                }
            }
        }

        if let Some(distance) = best {
            matches.push(PhashMatch { hash: remote.hash.clone(), distance });
        }
    }

    matches.sort_by_key(|m| m.distance);
    matches
}

/// How well the remote fingerprints' durations agree with the local file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DurationStatus {
    /// Nothing to compare against.
    Unknown,
    /// `matched` of `total` fingerprint durations are within tolerance.
    Matches { matched: usize, total: usize },
    /// No fingerprint agrees, but the remote scene's own duration does.
    SceneDurationMatches,
    /// Closest remote duration is this many whole seconds away.
    Off { seconds: u64 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchConfidence {
    Low,
    Medium,
    High,
}

impl DurationStatus {
    /// Confidence band for a positive match; `None` when nothing matched.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn confidence(&self) -> Option<MatchConfidence> {
        match *self {
            Self::Matches { matched, total } => {
                let pct = if total == 0 { 0.0 } else { matched as f64 * 100.0 / total as f64 };
                Some(if pct > 65.0 {
                    MatchConfidence::High
                } else if pct > 35.0 {
                    MatchConfidence::Medium
                } else {
                    MatchConfidence::Low
                })
            }
            Self::SceneDurationMatches => Some(MatchConfidence::Low),
            Self::Unknown | Self::Off { .. } => None,
        }
    }
}

/// Compare a local file duration with a remote scene.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn duration_status(remote: &RemoteScene, local_duration: Option<f64>, config: &MatchConfig) -> DurationStatus {
    let Some(local) = local_duration.filter(|d| d.abs() > f64::EPSILON) else {
        return DurationStatus::Unknown;
    };
    let scene_duration = remote.duration.filter(|d| d.abs() > f64::EPSILON);

    let diffs: Vec<f64> = remote.fingerprints.iter().map(|fp| (fp.duration - local).abs()).collect();
    if scene_duration.is_none() && diffs.is_empty() {
        return DurationStatus::Unknown;
    }

    let matched = diffs.iter().filter(|d| **d <= config.duration_tolerance_secs).count();
    if matched > 0 {
        return DurationStatus::Matches { matched, total: diffs.len() };
    }

    let scene_diff = scene_duration.map(|d| (d - local).abs());
    if scene_diff.is_some_and(|d| d < config.duration_tolerance_secs) {
        return DurationStatus::SceneDurationMatches;
    }

    let min_diff = diffs.iter().copied().chain(scene_diff).fold(f64::INFINITY, f64::min);
    DurationStatus::Off { seconds: min_diff.floor() as u64 }
}
