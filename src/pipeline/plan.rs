use std::{collections::HashSet, path::Path};

use anyhow::Context as _;

use crate::{
    compose::time::ClockTime,
    devices::catalog::Platform,
    foundation::error::{WatchshotError, WatchshotResult},
};

/// One screenshot time in a [`ShotPlan`].
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ShotSpec {
    pub hour: u8,
    pub minute: u8,
    #[serde(default)]
    pub is_24h: bool,
    /// Output file stem; defaults to [`ClockTime::file_stem`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl ShotSpec {
    pub fn from_time(time: ClockTime) -> Self {
        Self {
            hour: time.hour(),
            minute: time.minute(),
            is_24h: time.is_24h(),
            name: None,
        }
    }

    pub fn clock_time(&self) -> WatchshotResult<ClockTime> {
        ClockTime::new(self.hour, self.minute, self.is_24h)
    }

    pub fn output_stem(&self) -> WatchshotResult<String> {
        match &self.name {
            Some(name) => Ok(name.clone()),
            None => Ok(self.clock_time()?.file_stem()),
        }
    }
}

/// Which times to render for which platforms.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ShotPlan {
    #[serde(default = "all_platforms")]
    pub platforms: Vec<Platform>,
    pub shots: Vec<ShotSpec>,
}

fn all_platforms() -> Vec<Platform> {
    Platform::ALL.to_vec()
}

impl Default for ShotPlan {
    /// The store listing set: four 12-hour times and one 24-hour time, on every platform.
    fn default() -> Self {
        let shot = |hour, minute, is_24h| ShotSpec {
            hour,
            minute,
            is_24h,
            name: None,
        };
        Self {
            platforms: all_platforms(),
            shots: vec![
                shot(10, 8, false),
                shot(12, 0, false),
                shot(3, 45, false),
                shot(9, 41, false),
                shot(23, 59, true),
            ],
        }
    }
}

impl ShotPlan {
    pub fn from_json_str(s: &str) -> WatchshotResult<Self> {
        let plan: Self = serde_json::from_str(s).context("parse shot plan json")?;
        plan.validate()?;
        Ok(plan)
    }

    pub fn from_path(path: &Path) -> WatchshotResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read shot plan '{}'", path.display()))?;
        Self::from_json_str(&text)
            .map_err(|e| WatchshotError::validation(format!("{}: {e:#}", path.display())))
    }

    pub fn validate(&self) -> WatchshotResult<()> {
        if self.platforms.is_empty() {
            return Err(WatchshotError::validation("plan must name at least one platform"));
        }
        if self.shots.is_empty() {
            return Err(WatchshotError::validation("plan must contain at least one shot"));
        }

        let mut seen_platforms = HashSet::new();
        for p in &self.platforms {
            if !seen_platforms.insert(*p) {
                return Err(WatchshotError::validation(format!(
                    "platform '{p}' listed more than once"
                )));
            }
        }

        let mut seen_names = HashSet::new();
        for (idx, shot) in self.shots.iter().enumerate() {
            shot.clock_time()
                .map_err(|e| WatchshotError::validation(format!("shots[{idx}]: {e}")))?;
            let stem = shot.output_stem()?;
            validate_stem(&stem, idx)?;
            if !seen_names.insert(stem.clone()) {
                return Err(WatchshotError::validation(format!(
                    "shots[{idx}]: duplicate output name '{stem}'"
                )));
            }
        }
        Ok(())
    }
}

fn validate_stem(stem: &str, idx: usize) -> WatchshotResult<()> {
    if stem.trim().is_empty() {
        return Err(WatchshotError::validation(format!(
            "shots[{idx}]: name must be non-empty"
        )));
    }
    if stem.contains(['/', '\\']) || stem == "." || stem == ".." {
        return Err(WatchshotError::validation(format!(
            "shots[{idx}]: name '{stem}' must be a plain file stem"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/plan.rs"]
mod tests;
