//! Sampler configuration.
//!
//! [`SamplerConfig`] is the serialisable description of a [`Sampler`]:
//! which generator to use and how generous the Poisson draw budget is.
//! With the `serde` feature it deserialises from TOML such as
//!
//! ```toml
//! generator = "good"
//! poisson_draw_factor = 5.0
//! poisson_min_draws = 16
//! ```
//!
//! or, for a custom recurrence,
//!
//! ```toml
//! [generator.custom]
//! multiplier = 48271
//! modulus = 2147483647
//! ```

use std::fmt;
use std::str::FromStr;

use crate::distributions::{DrawBudget, DEFAULT_DRAW_FACTOR, DEFAULT_MINIMUM_DRAWS};
use crate::engine::GeneratorParameters;
use crate::error::ConfigurationError;
use crate::sampler::Sampler;
use crate::seed::SeedSource;

/// Which recurrence the engine runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum GeneratorPreset {
    /// Multiplier 16807, modulus 2^31 - 1.
    #[default]
    Good,
    /// Multiplier 5, modulus 11: a period of at most 5.
    Bad,
    /// Caller-chosen multiplier and modulus.
    Custom {
        /// Multiplier
        multiplier: u64,
        /// Modulus
        modulus: u64,
    },
}

impl GeneratorPreset {
    /// Builds validated parameters for the given seed.
    pub fn parameters(&self, seed: u64) -> Result<GeneratorParameters, ConfigurationError> {
        match *self {
            GeneratorPreset::Good => Ok(GeneratorParameters::good(seed)),
            GeneratorPreset::Bad => Ok(GeneratorParameters::bad(seed)),
            GeneratorPreset::Custom {
                multiplier,
                modulus,
            } => GeneratorParameters::new(multiplier, modulus, seed),
        }
    }
}

impl FromStr for GeneratorPreset {
    type Err = ConfigurationError;

    /// Parses `good`, `bad`, or `<multiplier>/<modulus>`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "good" => Ok(GeneratorPreset::Good),
            "bad" => Ok(GeneratorPreset::Bad),
            other => {
                let invalid = || {
                    ConfigurationError::InvalidGenerator(format!(
                        "{}: expected good, bad or <multiplier>/<modulus>",
                        other
                    ))
                };
                let (multiplier, modulus) = other.split_once('/').ok_or_else(invalid)?;
                let multiplier = multiplier.trim().parse().map_err(|_| invalid())?;
                let modulus = modulus.trim().parse().map_err(|_| invalid())?;
                let preset = GeneratorPreset::Custom {
                    multiplier,
                    modulus,
                };
                preset.parameters(0)?;
                Ok(preset)
            }
        }
    }
}

impl fmt::Display for GeneratorPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeneratorPreset::Good => write!(f, "good"),
            GeneratorPreset::Bad => write!(f, "bad"),
            GeneratorPreset::Custom {
                multiplier,
                modulus,
            } => write!(f, "{}/{}", multiplier, modulus),
        }
    }
}

/// Serialisable sampler settings.
///
/// # Examples
///
/// ```rust
/// use variate_core::config::{GeneratorPreset, SamplerConfig};
/// use variate_core::seed::WeylSeeds;
///
/// let config = SamplerConfig {
///     generator: GeneratorPreset::Bad,
///     ..Default::default()
/// };
/// let sampler = config.build_sampler(WeylSeeds::new(1)).unwrap();
/// assert_eq!(sampler.template().modulus(), 11);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SamplerConfig {
    /// Generator recurrence
    pub generator: GeneratorPreset,
    /// Poisson draws allowed per unit of rate
    pub poisson_draw_factor: f64,
    /// Floor on Poisson draws per outcome
    pub poisson_min_draws: usize,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            generator: GeneratorPreset::Good,
            poisson_draw_factor: DEFAULT_DRAW_FACTOR,
            poisson_min_draws: DEFAULT_MINIMUM_DRAWS,
        }
    }
}

impl SamplerConfig {
    /// Validates the generator and the draw budget.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        self.generator.parameters(0)?;
        self.draw_budget()?;
        Ok(())
    }

    /// Returns the configured Poisson draw budget.
    pub fn draw_budget(&self) -> Result<DrawBudget, ConfigurationError> {
        DrawBudget::new(self.poisson_draw_factor, self.poisson_min_draws)
    }

    /// Builds a sampler that draws its seeds from `seeds`.
    pub fn build_sampler<S: SeedSource>(&self, seeds: S) -> Result<Sampler<S>, ConfigurationError> {
        let template = self.generator.parameters(0)?;
        Ok(Sampler::with_seed_source(seeds)
            .generator(template)
            .draw_budget(self.draw_budget()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::FixedSeed;

    #[test]
    fn test_default_config() {
        let config = SamplerConfig::default();
        assert_eq!(config.generator, GeneratorPreset::Good);
        assert_eq!(config.poisson_draw_factor, 5.0);
        assert_eq!(config.poisson_min_draws, 16);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_preset_parsing() {
        assert_eq!(GeneratorPreset::from_str("good").unwrap(), GeneratorPreset::Good);
        assert_eq!(GeneratorPreset::from_str(" BAD ").unwrap(), GeneratorPreset::Bad);
        assert_eq!(
            GeneratorPreset::from_str("48271/2147483647").unwrap(),
            GeneratorPreset::Custom {
                multiplier: 48_271,
                modulus: 2_147_483_647
            }
        );
        assert!(GeneratorPreset::from_str("fast").is_err());
        assert!(GeneratorPreset::from_str("5/x").is_err());
        assert_eq!(
            GeneratorPreset::from_str("5/0"),
            Err(ConfigurationError::NonPositiveModulus)
        );
    }

    #[test]
    fn test_preset_display_round_trips() {
        for preset in [
            GeneratorPreset::Good,
            GeneratorPreset::Bad,
            GeneratorPreset::Custom {
                multiplier: 69_069,
                modulus: 1 << 32,
            },
        ] {
            assert_eq!(GeneratorPreset::from_str(&preset.to_string()).unwrap(), preset);
        }
    }

    #[test]
    fn test_invalid_budget_rejected() {
        let config = SamplerConfig {
            poisson_min_draws: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
        assert!(config.build_sampler(FixedSeed(1)).is_err());
    }

    #[test]
    fn test_build_sampler_applies_settings() {
        let config = SamplerConfig {
            generator: GeneratorPreset::Custom {
                multiplier: 48_271,
                modulus: 2_147_483_647,
            },
            poisson_draw_factor: 8.0,
            poisson_min_draws: 4,
        };
        let sampler = config.build_sampler(FixedSeed(1)).unwrap();
        assert_eq!(sampler.template().multiplier(), 48_271);
        assert_eq!(sampler.budget().draws_for(2.0), 16);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_toml_deserialization() {
        let config: SamplerConfig = toml::from_str(
            r#"
            generator = "bad"
            poisson_draw_factor = 6.5
        "#,
        )
        .unwrap();
        assert_eq!(config.generator, GeneratorPreset::Bad);
        assert_eq!(config.poisson_draw_factor, 6.5);
        assert_eq!(config.poisson_min_draws, 16);

        let custom: SamplerConfig = toml::from_str(
            r#"
            [generator.custom]
            multiplier = 48271
            modulus = 2147483647
        "#,
        )
        .unwrap();
        assert_eq!(
            custom.generator,
            GeneratorPreset::Custom {
                multiplier: 48_271,
                modulus: 2_147_483_647
            }
        );
    }
}
