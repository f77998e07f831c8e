use crate::path::NormalizationOptions;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_MAX_SEGMENTS: usize = 32;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(try_from = "RawRouterOptions")]
pub struct RouterOptions {
    pub case_sensitive: bool,
    pub strict_trailing_slash: bool,
    pub allow_duplicate_slash: bool,
    /// Longest pattern accepted at registration; longer request paths never match.
    pub max_segments: usize,
    /// Emits a DEBUG event with the score of every candidate considered.
    pub debug: bool,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            case_sensitive: true,
            strict_trailing_slash: false,
            allow_duplicate_slash: false,
            max_segments: DEFAULT_MAX_SEGMENTS,
            debug: false,
        }
    }
}

impl RouterOptions {
    pub fn builder() -> RouterOptionsBuilder {
        RouterOptionsBuilder::default()
    }

    pub fn validate(&self) -> Result<(), RouterOptionsError> {
        if self.max_segments == 0 {
            return Err(RouterOptionsError::MaxSegmentsInvalid {
                provided: self.max_segments,
            });
        }
        Ok(())
    }

    pub(crate) fn normalization(&self) -> NormalizationOptions {
        NormalizationOptions {
            allow_duplicate_slash: self.allow_duplicate_slash,
            strict_trailing_slash: self.strict_trailing_slash,
            case_sensitive: self.case_sensitive,
        }
    }
}

// Deserialization target; converted through `validate()` so bad input never
// reaches a router.
#[derive(Deserialize)]
#[serde(default)]
struct RawRouterOptions {
    case_sensitive: bool,
    strict_trailing_slash: bool,
    allow_duplicate_slash: bool,
    max_segments: usize,
    debug: bool,
}

impl Default for RawRouterOptions {
    fn default() -> Self {
        let defaults = RouterOptions::default();
        Self {
            case_sensitive: defaults.case_sensitive,
            strict_trailing_slash: defaults.strict_trailing_slash,
            allow_duplicate_slash: defaults.allow_duplicate_slash,
            max_segments: defaults.max_segments,
            debug: defaults.debug,
        }
    }
}

impl TryFrom<RawRouterOptions> for RouterOptions {
    type Error = RouterOptionsError;

    fn try_from(raw: RawRouterOptions) -> Result<Self, Self::Error> {
        let options = RouterOptions {
            case_sensitive: raw.case_sensitive,
            strict_trailing_slash: raw.strict_trailing_slash,
            allow_duplicate_slash: raw.allow_duplicate_slash,
            max_segments: raw.max_segments,
            debug: raw.debug,
        };
        options.validate()?;
        Ok(options)
    }
}

#[derive(Debug, Default, Clone)]
pub struct RouterOptionsBuilder {
    options: RouterOptions,
}

impl RouterOptionsBuilder {
    pub fn case_sensitive(mut self, value: bool) -> Self {
        self.options.case_sensitive = value;
        self
    }

    pub fn strict_trailing_slash(mut self, value: bool) -> Self {
        self.options.strict_trailing_slash = value;
        self
    }

    pub fn allow_duplicate_slash(mut self, value: bool) -> Self {
        self.options.allow_duplicate_slash = value;
        self
    }

    pub fn max_segments(mut self, value: usize) -> Self {
        self.options.max_segments = value;
        self
    }

    pub fn debug(mut self, value: bool) -> Self {
        self.options.debug = value;
        self
    }

    pub fn build(self) -> Result<RouterOptions, RouterOptionsError> {
        let options = self.options;
        options.validate()?;
        Ok(options)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouterOptionsError {
    #[error("max_segments must be at least 1 (got {provided})")]
    MaxSegmentsInvalid { provided: usize },
}
