//! Configuration schema definitions
//!
//! Defaults the CLI and other hosts apply before per-call overrides.

use crate::error::{Error, ErrorCode, Result};
use serde::{Deserialize, Serialize};
use sveltacular_position::{Placement, PositionOptions, Rect};
use sveltacular_search::FuzzySearchOptions;

/// Root configuration schema
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigSchema {
    #[serde(default)]
    pub position: PositionConfig,

    #[serde(default)]
    pub search: SearchConfig,
}

impl ConfigSchema {
    /// Validate every section
    pub fn validate(&self) -> Result<()> {
        self.position.to_options()?;
        self.search.to_options()?;
        Ok(())
    }
}

/// Floating element positioning defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PositionConfig {
    /// Preferred placement, e.g. "bottom" or "top-start"
    #[serde(default = "default_placement")]
    pub placement: String,

    /// Gap between reference and floating element
    #[serde(default = "default_gap")]
    pub offset: f64,

    /// Flip to the opposite side on overflow
    #[serde(default = "default_true")]
    pub auto_flip: bool,

    /// Try other alignments on overflow
    #[serde(default = "default_true")]
    pub auto_align: bool,

    /// Minimum distance from the viewport edge
    #[serde(default = "default_gap")]
    pub viewport_padding: f64,

    /// Compute arrow offsets
    #[serde(default)]
    pub arrow: bool,

    /// Arrow size
    #[serde(default = "default_gap")]
    pub arrow_size: f64,

    /// Viewport width used when none is given
    #[serde(default = "default_viewport_width")]
    pub viewport_width: f64,

    /// Viewport height used when none is given
    #[serde(default = "default_viewport_height")]
    pub viewport_height: f64,
}

impl Default for PositionConfig {
    fn default() -> Self {
        Self {
            placement: default_placement(),
            offset: default_gap(),
            auto_flip: true,
            auto_align: true,
            viewport_padding: default_gap(),
            arrow: false,
            arrow_size: default_gap(),
            viewport_width: default_viewport_width(),
            viewport_height: default_viewport_height(),
        }
    }
}

impl PositionConfig {
    /// Build engine options from this section
    pub fn to_options(&self) -> Result<PositionOptions> {
        let placement: Placement = self.placement.parse().map_err(|e| {
            Error::invalid_placement(ErrorCode::ConfigValidationError, e).with_context("In [position] placement")
        })?;

        for (name, value) in [
            ("offset", self.offset),
            ("viewport_padding", self.viewport_padding),
            ("arrow_size", self.arrow_size),
        ] {
            if !value.is_finite() {
                return Err(Error::config_validation(format!("[position] {} must be a finite number", name)));
            }
        }

        Ok(PositionOptions {
            placement,
            offset: self.offset,
            auto_flip: self.auto_flip,
            auto_align: self.auto_align,
            viewport_padding: self.viewport_padding,
            arrow: self.arrow,
            arrow_size: self.arrow_size,
        })
    }

    /// Default viewport rect
    pub fn viewport(&self) -> Rect {
        Rect::viewport(self.viewport_width, self.viewport_height)
    }
}

fn default_placement() -> String {
    "bottom".to_string()
}

fn default_gap() -> f64 {
    8.0
}

fn default_viewport_width() -> f64 {
    1280.0
}

fn default_viewport_height() -> f64 {
    720.0
}

fn default_true() -> bool {
    true
}

/// Fuzzy search defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Fields to score on object items
    #[serde(default)]
    pub keys: Vec<String>,

    /// Minimum score to keep a result
    #[serde(default)]
    pub threshold: f64,

    /// Maximum results; 0 for all
    #[serde(default = "default_limit")]
    pub limit: usize,

    /// Case-sensitive matching
    #[serde(default)]
    pub case_sensitive: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            keys: Vec::new(),
            threshold: 0.0,
            limit: default_limit(),
            case_sensitive: false,
        }
    }
}

fn default_limit() -> usize {
    20
}

impl SearchConfig {
    /// Build search options from this section
    pub fn to_options(&self) -> Result<FuzzySearchOptions> {
        let options = FuzzySearchOptions {
            keys: self.keys.clone(),
            threshold: self.threshold,
            limit: (self.limit > 0).then_some(self.limit),
            case_sensitive: self.case_sensitive,
        };
        options
            .validate()
            .map_err(|e| Error::config_validation(e.to_string()).with_context("In [search]"))?;
        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::exit_codes;
    use sveltacular_position::{Alignment, Side};

    #[test]
    fn test_defaults_match_engine_defaults() {
        let options = PositionConfig::default().to_options().unwrap();
        let engine = PositionOptions::new(options.placement);
        assert_eq!(options, engine);
        assert_eq!(options.placement.side, Side::Bottom);
    }

    #[test]
    fn test_parse_sections() {
        let schema: ConfigSchema = toml::from_str(
            r#"
            [position]
            placement = "left-end"
            auto_flip = false

            [search]
            keys = ["label", "description"]
            limit = 0
            "#,
        )
        .unwrap();

        let position = schema.position.to_options().unwrap();
        assert_eq!(position.placement, Placement::new(Side::Left, Alignment::End));
        assert!(!position.auto_flip);
        assert!(position.auto_align);

        let search = schema.search.to_options().unwrap();
        assert_eq!(search.keys.len(), 2);
        assert_eq!(search.limit, None);
    }

    #[test]
    fn test_invalid_placement() {
        let config = PositionConfig {
            placement: "sideways".into(),
            ..PositionConfig::default()
        };
        let err = config.to_options().unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigValidationError);
        assert!(err.context.is_some());
        assert!(err.suggestion.is_some());
        assert_eq!(err.exit_code(), exit_codes::CONFIG_ERROR);
    }

    #[test]
    fn test_invalid_search_threshold() {
        let config = SearchConfig {
            threshold: f64::NAN,
            ..SearchConfig::default()
        };
        let err = config.to_options().unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigValidationError);
    }
}
