//! Configuration structures for the extraction pipeline.

use serde::{Deserialize, Serialize};

/// Main configuration for the idex pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IdexConfig {
    /// Field extraction configuration.
    pub extraction: ExtractionConfig,

    /// Image preprocessing configuration.
    pub preprocess: PreprocessConfig,
}

impl Default for IdexConfig {
    fn default() -> Self {
        Self {
            extraction: ExtractionConfig::default(),
            preprocess: PreprocessConfig::default(),
        }
    }
}

/// Field extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Try the fuzzy country fallback when no ID pattern matches.
    pub country_fallback: bool,

    /// Extra noise words removed before line splitting, on top of the
    /// built-in set.
    pub extra_noise_words: Vec<String>,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            country_fallback: true,
            extra_noise_words: Vec::new(),
        }
    }
}

/// Image preprocessing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PreprocessConfig {
    /// Gaussian blur sigma (1.1 matches a 5x5 kernel).
    pub blur_sigma: f32,

    /// Apply the 3x3 sharpen kernel after denoising.
    pub sharpen: bool,

    /// Contrast adjustment in percent; 50 is roughly a 1.5x linear
    /// stretch.
    pub contrast: f32,

    /// Brightness offset added to every channel.
    pub brighten: i32,
}

impl Default for PreprocessConfig {
    fn default() -> Self {
        Self {
            blur_sigma: 1.1,
            sharpen: true,
            contrast: 50.0,
            brighten: 15,
        }
    }
}

impl IdexConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })?;
        std::fs::write(path, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = IdexConfig::default();
        assert!(config.extraction.country_fallback);
        assert!(config.extraction.extra_noise_words.is_empty());
        assert!(config.preprocess.sharpen);
    }

    #[test]
    fn test_partial_config_round_trip() {
        // Missing sections fall back to defaults.
        let config: IdexConfig =
            serde_json::from_str(r#"{"extraction": {"country_fallback": false}}"#).unwrap();
        assert!(!config.extraction.country_fallback);
        assert_eq!(config.preprocess.brighten, 15);

        let json = serde_json::to_string(&config).unwrap();
        let back: IdexConfig = serde_json::from_str(&json).unwrap();
        assert!(!back.extraction.country_fallback);
    }
}
