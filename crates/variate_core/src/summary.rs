//! Summary statistics and histograms over generated samples.
//!
//! This module provides:
//! - [`SummaryStatistics`]: count, mean, sample variance/standard deviation,
//!   min and max, the summary a downstream hypothesis test consumes
//! - [`Histogram`]: equal-width binning with a Pearson chi-square statistic
//!   against the uniform expectation

use crate::error::ConfigurationError;

/// Count, moments and range of a sample.
///
/// Variance uses the `n - 1` denominator; it is zero for fewer than two
/// observations.
///
/// # Examples
///
/// ```rust
/// use variate_core::summary::SummaryStatistics;
///
/// let stats = SummaryStatistics::from_samples(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
/// assert_eq!(stats.count, 8);
/// assert_eq!(stats.mean, 5.0);
/// assert!((stats.variance - 32.0 / 7.0).abs() < 1e-12);
/// assert_eq!((stats.min, stats.max), (2.0, 9.0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SummaryStatistics {
    /// Number of observations
    pub count: usize,
    /// Arithmetic mean (NaN when empty)
    pub mean: f64,
    /// Sample variance
    pub variance: f64,
    /// Sample standard deviation
    pub std_dev: f64,
    /// Smallest observation (NaN when empty)
    pub min: f64,
    /// Largest observation (NaN when empty)
    pub max: f64,
}

impl SummaryStatistics {
    /// Summarises any slice of values convertible to `f64`.
    pub fn from_samples<T: Copy + Into<f64>>(samples: &[T]) -> Self {
        Self::from_values(samples.iter().map(|&x| x.into()))
    }

    /// Summarises a stream of values with Welford's online update.
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Self {
        let mut count = 0usize;
        let mut mean = 0.0;
        let mut m2 = 0.0;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;

        for x in values {
            count += 1;
            let delta = x - mean;
            mean += delta / count as f64;
            m2 += delta * (x - mean);
            min = min.min(x);
            max = max.max(x);
        }

        if count == 0 {
            return Self {
                count,
                mean: f64::NAN,
                variance: 0.0,
                std_dev: 0.0,
                min: f64::NAN,
                max: f64::NAN,
            };
        }

        let variance = if count > 1 {
            m2 / (count - 1) as f64
        } else {
            0.0
        };
        Self {
            count,
            mean,
            variance,
            std_dev: variance.sqrt(),
            min,
            max,
        }
    }

    /// Standard error of the mean, `std_dev / sqrt(count)`.
    pub fn standard_error(&self) -> f64 {
        self.std_dev / (self.count as f64).sqrt()
    }
}

/// Equal-width histogram over `[low, high)`.
///
/// Values outside the range are counted separately and do not enter the
/// chi-square statistic.
#[derive(Clone, Debug, PartialEq)]
pub struct Histogram {
    low: f64,
    width: f64,
    counts: Vec<u64>,
    outside: u64,
}

impl Histogram {
    /// Creates an empty histogram with `bins` bins.
    ///
    /// # Errors
    ///
    /// [`ConfigurationError::InvalidHistogram`] for zero bins or an empty or
    /// inverted range.
    pub fn new(bins: usize, low: f64, high: f64) -> Result<Self, ConfigurationError> {
        if bins == 0 {
            return Err(ConfigurationError::InvalidHistogram(
                "at least one bin is required".to_string(),
            ));
        }
        if !(low.is_finite() && high.is_finite() && low < high) {
            return Err(ConfigurationError::InvalidHistogram(format!(
                "range [{}, {}) is empty or not finite",
                low, high
            )));
        }
        Ok(Self {
            low,
            width: (high - low) / bins as f64,
            counts: vec![0; bins],
            outside: 0,
        })
    }

    /// Adds one value.
    pub fn add(&mut self, value: f64) {
        let offset = (value - self.low) / self.width;
        if offset >= 0.0 && offset < self.counts.len() as f64 {
            self.counts[offset as usize] += 1;
        } else {
            self.outside += 1;
        }
    }

    /// Returns the per-bin counts.
    #[inline]
    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    /// Returns how many values fell outside the range.
    #[inline]
    pub fn outside(&self) -> u64 {
        self.outside
    }

    /// Returns the number of values inside the range.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Pearson chi-square statistic against equal expected counts.
    ///
    /// Has `bins - 1` degrees of freedom. Zero when the histogram is empty.
    pub fn chi_square_uniform(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        let expected = total as f64 / self.counts.len() as f64;
        self.counts
            .iter()
            .map(|&observed| {
                let diff = observed as f64 - expected;
                diff * diff / expected
            })
            .sum()
    }
}

impl Extend<f64> for Histogram {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}
