//! Validated generator parameters.

use crate::error::ConfigurationError;

/// Largest supported modulus (2^53).
///
/// Every integer below 2^53 is exact in `f64`, so `x / modulus` with
/// `x < modulus` rounds to a value strictly below 1.0.
pub const MAX_MODULUS: u64 = 1 << 53;

/// Multiplier of the good configuration (a primitive root of 2^31 - 1).
pub const GOOD_MULTIPLIER: u64 = 16_807;

/// Modulus of the good configuration (the Mersenne prime 2^31 - 1).
pub const GOOD_MODULUS: u64 = 2_147_483_647;

/// Multiplier of the bad, short-period configuration.
pub const BAD_MULTIPLIER: u64 = 5;

/// Modulus of the bad, short-period configuration.
pub const BAD_MODULUS: u64 = 11;

/// Multiplier, modulus and seed of one engine run.
///
/// Immutable once constructed. The seed is normalised into
/// `[0, modulus)` at construction, so two parameter sets that differ only
/// by a multiple of the modulus in their seed compare equal.
///
/// # Examples
///
/// ```rust
/// use variate_core::engine::GeneratorParameters;
///
/// let params = GeneratorParameters::new(5, 11, 25).unwrap();
/// assert_eq!(params.seed(), 3);
/// assert_eq!(params, GeneratorParameters::bad(3));
///
/// assert!(GeneratorParameters::new(5, 0, 3).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GeneratorParameters {
    multiplier: u64,
    modulus: u64,
    seed: u64,
}

impl GeneratorParameters {
    /// Creates validated parameters.
    ///
    /// # Errors
    ///
    /// - [`ConfigurationError::NonPositiveModulus`] when `modulus == 0`
    /// - [`ConfigurationError::ModulusTooLarge`] when `modulus > 2^53`
    pub fn new(multiplier: u64, modulus: u64, seed: u64) -> Result<Self, ConfigurationError> {
        if modulus == 0 {
            return Err(ConfigurationError::NonPositiveModulus);
        }
        if modulus > MAX_MODULUS {
            return Err(ConfigurationError::ModulusTooLarge {
                modulus,
                max: MAX_MODULUS,
            });
        }
        Ok(Self {
            multiplier,
            modulus,
            seed: seed % modulus,
        })
    }

    /// The good configuration: multiplier 16807, modulus 2^31 - 1.
    #[inline]
    pub fn good(seed: u64) -> Self {
        Self {
            multiplier: GOOD_MULTIPLIER,
            modulus: GOOD_MODULUS,
            seed: seed % GOOD_MODULUS,
        }
    }

    /// The bad configuration: multiplier 5, modulus 11.
    ///
    /// Its period is at most 5, which makes short-period artefacts obvious.
    #[inline]
    pub fn bad(seed: u64) -> Self {
        Self {
            multiplier: BAD_MULTIPLIER,
            modulus: BAD_MODULUS,
            seed: seed % BAD_MODULUS,
        }
    }

    /// Returns a copy with a new (normalised) seed and the same recurrence.
    #[inline]
    pub fn with_seed(self, seed: u64) -> Self {
        Self {
            seed: seed % self.modulus,
            ..self
        }
    }

    /// Returns the multiplier.
    #[inline]
    pub fn multiplier(&self) -> u64 {
        self.multiplier
    }

    /// Returns the modulus.
    #[inline]
    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// Returns the normalised seed.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_normalisation() {
        let params = GeneratorParameters::new(16_807, GOOD_MODULUS, GOOD_MODULUS + 7).unwrap();
        assert_eq!(params.seed(), 7);
        assert_eq!(GeneratorParameters::good(GOOD_MODULUS + 7), params);
    }

    #[test]
    fn test_zero_modulus_rejected() {
        assert_eq!(
            GeneratorParameters::new(5, 0, 1),
            Err(ConfigurationError::NonPositiveModulus)
        );
    }

    #[test]
    fn test_oversized_modulus_rejected() {
        let err = GeneratorParameters::new(5, MAX_MODULUS + 1, 1).unwrap_err();
        assert!(matches!(err, ConfigurationError::ModulusTooLarge { .. }));
        assert!(GeneratorParameters::new(5, MAX_MODULUS, 1).is_ok());
    }

    #[test]
    fn test_with_seed_keeps_recurrence() {
        let params = GeneratorParameters::bad(3).with_seed(14);
        assert_eq!(params.multiplier(), BAD_MULTIPLIER);
        assert_eq!(params.modulus(), BAD_MODULUS);
        assert_eq!(params.seed(), 3);
    }

    #[test]
    fn test_modulus_of_one() {
        // Degenerate but well defined: every state is zero
        let params = GeneratorParameters::new(3, 1, 99).unwrap();
        assert_eq!(params.seed(), 0);
    }
}
