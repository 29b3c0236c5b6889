use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Packing strategy used by the pipeline.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AlgorithmFamily {
    /// Guillotine splitting into exactly one bin; fails if anything does not fit.
    Guillotine,
    /// Guillotine splitting that opens a new bin whenever the current one is full.
    MultiBin,
    /// Candidate-point packing into a growing array of canvases.
    Canvas,
}

impl FromStr for AlgorithmFamily {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "guillotine" | "single" => Ok(Self::Guillotine),
            "multibin" | "multi_bin" | "multi" => Ok(Self::MultiBin),
            "canvas" | "candidate" => Ok(Self::Canvas),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for AlgorithmFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Guillotine => "guillotine",
            Self::MultiBin => "multibin",
            Self::Canvas => "canvas",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PackerConfig {
    /// Container width in pixels.
    pub width: u32,
    /// Container height in pixels.
    pub height: u32,
    #[serde(default = "default_family")]
    pub family: AlgorithmFamily,
    /// Sort canvas items largest-first (width, then height) before placing them.
    /// Guillotine packers always sort by area and ignore this flag.
    #[serde(default = "default_sort_contents")]
    pub sort_contents: bool,
}

impl Default for PackerConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 1024,
            family: default_family(),
            sort_contents: default_sort_contents(),
        }
    }
}

impl PackerConfig {
    /// Validates the configuration parameters.
    ///
    /// Returns `InvalidDimensions` if either side is zero.
    pub fn validate(&self) -> crate::error::Result<()> {
        use crate::error::BinPackError;

        if self.width == 0 || self.height == 0 {
            return Err(BinPackError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    /// Create a fluent builder for `PackerConfig`.
    pub fn builder() -> PackerConfigBuilder {
        PackerConfigBuilder::new()
    }
}

fn default_family() -> AlgorithmFamily {
    AlgorithmFamily::MultiBin
}
fn default_sort_contents() -> bool {
    true
}

/// Builder for `PackerConfig` for ergonomic construction.
#[derive(Debug, Default, Clone)]
pub struct PackerConfigBuilder {
    cfg: PackerConfig,
}

impl PackerConfigBuilder {
    pub fn new() -> Self {
        Self {
            cfg: PackerConfig::default(),
        }
    }
    pub fn with_dimensions(mut self, w: u32, h: u32) -> Self {
        self.cfg.width = w;
        self.cfg.height = h;
        self
    }
    pub fn family(mut self, v: AlgorithmFamily) -> Self {
        self.cfg.family = v;
        self
    }
    pub fn sort_contents(mut self, v: bool) -> Self {
        self.cfg.sort_contents = v;
        self
    }
    pub fn build(self) -> PackerConfig {
        self.cfg
    }
}
