//! Normal (Box-Muller) and Exponential (inverse-CDF) samplers.
//!
//! Both transforms feed a uniform draw into a logarithm. The engine can
//! legitimately emit exactly zero (whenever its state reaches zero), and
//! `ln(0)` is not a number we are willing to return. A boundary draw is
//! therefore replaced by the stream's next draw, once; a second boundary
//! draw is reported as [`SamplerError::Domain`].

use std::f64::consts::PI;

use tracing::warn;

use super::ensure_finite;
use super::uniform::UniformStream;
use crate::buffer::SampleBuffer;
use crate::error::{ConfigurationError, Result, SamplerError};

/// Validated Normal parameters.
///
/// `std_dev == 0` is the point-mass case: every sample equals the mean.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NormalRequest {
    mean: f64,
    std_dev: f64,
}

impl NormalRequest {
    /// Creates a request.
    ///
    /// # Errors
    ///
    /// - [`ConfigurationError::NonFinite`] for NaN or infinite inputs
    /// - [`ConfigurationError::NegativeStdDev`] when `std_dev < 0`
    pub fn new(mean: f64, std_dev: f64) -> std::result::Result<Self, ConfigurationError> {
        let mean = ensure_finite("mean", mean)?;
        let std_dev = ensure_finite("std_dev", std_dev)?;
        if std_dev < 0.0 {
            return Err(ConfigurationError::NegativeStdDev(std_dev));
        }
        Ok(Self { mean, std_dev })
    }

    /// The standard normal: mean 0, standard deviation 1.
    #[inline]
    pub fn standard() -> Self {
        Self {
            mean: 0.0,
            std_dev: 1.0,
        }
    }

    /// Returns the mean.
    #[inline]
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Returns the standard deviation.
    #[inline]
    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }
}

/// Validated Exponential rate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExponentialRequest {
    rate: f64,
}

impl ExponentialRequest {
    /// Creates a request; `rate` must be finite and strictly positive.
    pub fn new(rate: f64) -> std::result::Result<Self, ConfigurationError> {
        let rate = ensure_finite("rate", rate)?;
        if rate <= 0.0 {
            return Err(ConfigurationError::NonPositiveRate(rate));
        }
        Ok(Self { rate })
    }

    /// Returns the rate.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the distribution mean, `1 / rate`.
    #[inline]
    pub fn mean(&self) -> f64 {
        1.0 / self.rate
    }
}

/// The Box-Muller transform of two uniforms.
///
/// Returns `(z0, z1)` with
///
/// ```text
/// z0 = sqrt(-2 ln u1) * cos(2 pi u2)
/// z1 = sqrt(-2 ln u1) * sin(2 pi u2)
/// ```
///
/// For `u1` in `(0, 1]` and any `u2`, both are independent standard normals.
///
/// # Examples
///
/// ```rust
/// use variate_core::distributions::box_muller;
///
/// let (z0, z1) = box_muller(1.0, 0.3);
/// assert_eq!((z0, z1), (0.0, 0.0));
///
/// let (z0, _) = box_muller((-0.5_f64).exp(), 0.0);
/// assert!((z0 - 1.0).abs() < 1e-12);
/// ```
#[inline]
pub fn box_muller(u1: f64, u2: f64) -> (f64, f64) {
    let radius = (-2.0 * u1.ln()).sqrt();
    let theta = 2.0 * PI * u2;
    (radius * theta.cos(), radius * theta.sin())
}

/// Draws from the stream, replacing one boundary draw with the next one.
///
/// `in_domain` decides whether a draw is usable.
fn draw_in_domain(
    stream: &mut UniformStream,
    distribution: &'static str,
    in_domain: impl Fn(f64) -> bool,
) -> Result<f64> {
    let draw = stream.next_value();
    if in_domain(draw) {
        return Ok(draw);
    }

    warn!(distribution, draw, "Boundary draw outside logarithm domain, resampling");
    let retry = stream.next_value();
    if in_domain(retry) {
        Ok(retry)
    } else {
        Err(SamplerError::Domain {
            distribution,
            draw: retry,
        })
    }
}

/// Draws `count` Normal samples.
///
/// `first` supplies `U1` (fed to the logarithm) and `second` supplies `U2`
/// (fed to the cosine); they must come from separately seeded engines.
/// Only `z0` of each Box-Muller pair is used.
///
/// # Errors
///
/// [`SamplerError::Domain`] when `first` emits zero twice in a row.
pub fn normal(
    request: &NormalRequest,
    first: &mut UniformStream,
    second: &mut UniformStream,
    count: usize,
) -> Result<SampleBuffer> {
    (0..count)
        .map(|_| {
            let u1 = draw_in_domain(first, "normal", |u| u > 0.0)?;
            let u2 = second.next_value();
            let (z0, _) = box_muller(u1, u2);
            Ok(z0 * request.std_dev() + request.mean())
        })
        .collect()
}

/// Draws `count` Exponential samples via `X = -(1 / rate) ln(1 - U)`.
///
/// # Errors
///
/// [`SamplerError::Domain`] when `1 - U` is zero twice in a row.
pub fn exponential(
    request: &ExponentialRequest,
    stream: &mut UniformStream,
    count: usize,
) -> Result<SampleBuffer> {
    let scale = request.mean();
    (0..count)
        .map(|_| {
            let u = draw_in_domain(stream, "exponential", |u| 1.0 - u > 0.0)?;
            Ok(-scale * (1.0 - u).ln())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distributions::UniformRequest;
    use crate::engine::{GeneratorParameters, LcgEngine};
    use approx::assert_abs_diff_eq;

    fn stream(params: GeneratorParameters) -> UniformStream {
        UniformStream::standard(LcgEngine::new(params))
    }

    /// Parameters whose first emitted state is zero: (0 * 0 + 1) mod 1.
    fn always_zero() -> GeneratorParameters {
        GeneratorParameters::new(0, 1, 0).unwrap()
    }

    #[test]
    fn test_box_muller_known_values() {
        let u1 = (-2.0_f64).exp(); // radius = 2
        let (z0, z1) = box_muller(u1, 0.25);
        assert_abs_diff_eq!(z0, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(z1, 2.0, epsilon = 1e-12);

        let (z0, z1) = box_muller(u1, 0.5);
        assert_abs_diff_eq!(z0, -2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(z1, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_normal_point_mass() {
        let request = NormalRequest::new(2.5, 0.0).unwrap();
        let values = normal(
            &request,
            &mut stream(GeneratorParameters::good(1)),
            &mut stream(GeneratorParameters::good(2)),
            100,
        )
        .unwrap();
        assert!(values.iter().all(|&v| v == 2.5));
    }

    #[test]
    fn test_normal_scales_and_shifts() {
        let standard = normal(
            &NormalRequest::standard(),
            &mut stream(GeneratorParameters::good(10)),
            &mut stream(GeneratorParameters::good(20)),
            50,
        )
        .unwrap();
        let shifted = normal(
            &NormalRequest::new(-3.0, 2.0).unwrap(),
            &mut stream(GeneratorParameters::good(10)),
            &mut stream(GeneratorParameters::good(20)),
            50,
        )
        .unwrap();

        for (&z, &x) in standard.iter().zip(shifted.iter()) {
            assert_abs_diff_eq!(x, 2.0 * z - 3.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_normal_resamples_single_zero() {
        // Bad configuration from seed 2 emits state 0 first, then 1
        let mut first = stream(GeneratorParameters::bad(2));
        let mut second = stream(GeneratorParameters::good(9));
        let values = normal(&NormalRequest::standard(), &mut first, &mut second, 1).unwrap();

        assert!(values[0].is_finite());
        assert_eq!(first.engine().state(), 1);
    }

    #[test]
    fn test_normal_domain_error_after_second_zero() {
        let err = normal(
            &NormalRequest::standard(),
            &mut stream(always_zero()),
            &mut stream(GeneratorParameters::good(9)),
            3,
        )
        .unwrap_err();
        assert_eq!(
            err,
            SamplerError::Domain {
                distribution: "normal",
                draw: 0.0
            }
        );
    }

    #[test]
    fn test_exponential_domain_error_on_unit_draw() {
        // A degenerate [1, 1) stream makes 1 - U zero on every draw
        let mut ones = UniformStream::new(
            LcgEngine::new(GeneratorParameters::good(1)),
            &UniformRequest::new(1.0, 1.0).unwrap(),
        );
        let err = exponential(&ExponentialRequest::new(0.5).unwrap(), &mut ones, 1).unwrap_err();
        assert!(matches!(
            err,
            SamplerError::Domain {
                distribution: "exponential",
                ..
            }
        ));
    }

    #[test]
    fn test_exponential_resamples_single_unit_draw() {
        // States alternate 1, 0 under (1, 2); over [0.5, 1.5) the draws are 1.0, 0.5
        let mut alternating = UniformStream::new(
            LcgEngine::new(GeneratorParameters::new(1, 2, 0).unwrap()),
            &UniformRequest::new(0.5, 1.5).unwrap(),
        );
        let values =
            exponential(&ExponentialRequest::new(0.5).unwrap(), &mut alternating, 2).unwrap();

        for &x in values.iter() {
            assert_abs_diff_eq!(x, 2.0 * std::f64::consts::LN_2, epsilon = 1e-12);
        }
        assert_eq!(alternating.engine().state(), 0);
    }

    #[test]
    fn test_exponential_inverse_cdf() {
        let params = GeneratorParameters::good(4_242);
        let request = ExponentialRequest::new(0.1).unwrap();
        let values = exponential(&request, &mut stream(params), 20).unwrap();
        let uniforms = stream(params).take_buffer(20);

        for (&x, &u) in values.iter().zip(uniforms.iter()) {
            assert_abs_diff_eq!(x, -10.0 * (1.0 - u).ln(), epsilon = 1e-9);
            assert!(x >= 0.0);
        }
    }

    #[test]
    fn test_exponential_accepts_zero_draw() {
        // U = 0 gives ln(1) = 0, which is in the domain
        let values = exponential(
            &ExponentialRequest::new(2.0).unwrap(),
            &mut stream(always_zero()),
            3,
        )
        .unwrap();
        assert!(values.iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_request_validation() {
        assert_eq!(
            NormalRequest::new(0.0, -1.0),
            Err(ConfigurationError::NegativeStdDev(-1.0))
        );
        assert!(NormalRequest::new(f64::NAN, 1.0).is_err());
        assert_eq!(
            ExponentialRequest::new(0.0),
            Err(ConfigurationError::NonPositiveRate(0.0))
        );
        assert!(ExponentialRequest::new(-2.0).is_err());
        assert!(ExponentialRequest::new(f64::INFINITY).is_err());
    }
}
