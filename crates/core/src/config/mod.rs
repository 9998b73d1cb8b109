use std::{fs, ops::RangeInclusive, path::Path, time::Duration};

use serde::{Deserialize, Serialize};

use crate::{AlgorithmVariant, Result, SortVizError, Value};

/// Top-level configuration structure for the application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub sequence: SequenceConfig,
    pub animation: AnimationConfig,
    pub algorithm: AlgorithmVariant,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            sequence: SequenceConfig::default(),
            animation: AnimationConfig::default(),
            algorithm: AlgorithmVariant::Bubble,
        }
    }
}

impl AppConfig {
    /// Loads a JSON config file. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let config = if path.exists() {
            let contents = fs::read_to_string(path)?;
            serde_json::from_str(&contents)?
        } else {
            tracing::debug!(path = %path.display(), "config file missing, using defaults");
            Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.sequence.size == 0 {
            return Err(SortVizError::InvalidSize { requested: 0 });
        }
        if self.sequence.min_value > self.sequence.max_value {
            return Err(SortVizError::InvalidConfig(format!(
                "sequence.min_value ({}) exceeds sequence.max_value ({})",
                self.sequence.min_value, self.sequence.max_value
            )));
        }
        if let Some(limit) = self.algorithm.value_limit() {
            if self.sequence.max_value > limit {
                return Err(SortVizError::InvalidConfig(format!(
                    "sequence.max_value ({}) exceeds the {} sort limit of {limit}",
                    self.sequence.max_value, self.algorithm
                )));
            }
        }
        Ok(())
    }
}

/// Shape of the generated input sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SequenceConfig {
    pub size: usize,
    pub min_value: Value,
    pub max_value: Value,
}

impl SequenceConfig {
    pub fn value_range(&self) -> RangeInclusive<Value> {
        self.min_value..=self.max_value
    }
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self {
            size: 50,
            min_value: 10,
            max_value: 309,
        }
    }
}

/// Pacing of the animation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub delay_ms: u64,
    /// Emit events from counting and radix sort too.
    pub visual_parity: bool,
}

impl AnimationConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            delay_ms: 10,
            visual_parity: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let path = std::env::temp_dir().join("sort-visualiser-does-not-exist.json");
        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.sequence.value_range(), 10..=309);
    }

    #[test]
    fn partial_json_fills_in_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{ "algorithm": "radix", "animation": { "delay_ms": 0 } }"#)
                .unwrap();

        assert_eq!(config.algorithm, AlgorithmVariant::Radix);
        assert_eq!(config.animation.delay(), Duration::ZERO);
        assert!(!config.animation.visual_parity);
        assert_eq!(config.sequence, SequenceConfig::default());
    }

    #[test]
    fn validation_rejects_bad_values() {
        let mut config = AppConfig::default();
        config.sequence.size = 0;
        assert!(matches!(
            config.validate(),
            Err(SortVizError::InvalidSize { requested: 0 })
        ));

        let mut config = AppConfig::default();
        config.sequence.min_value = 400;
        assert!(matches!(
            config.validate(),
            Err(SortVizError::InvalidConfig(_))
        ));
    }

    #[test]
    fn validation_bounds_counting_sort_range() {
        let mut config = AppConfig::default();
        config.algorithm = AlgorithmVariant::Counting;
        config.sequence.max_value = crate::MAX_COUNTING_VALUE;
        assert!(config.validate().is_ok());

        config.sequence.max_value = i64::MAX / 4;
        assert!(matches!(
            config.validate(),
            Err(SortVizError::InvalidConfig(_))
        ));

        config.algorithm = AlgorithmVariant::Radix;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn loads_from_disk() {
        let path = std::env::temp_dir().join(format!(
            "sort-visualiser-config-{}.json",
            std::process::id()
        ));
        fs::write(&path, r#"{ "sequence": { "size": 12 }, "algorithm": "heap" }"#).unwrap();

        let config = AppConfig::load(&path);
        let _ = fs::remove_file(&path);
        let config = config.unwrap();
        assert_eq!(config.sequence.size, 12);
        assert_eq!(config.algorithm, AlgorithmVariant::Heap);
    }
}
