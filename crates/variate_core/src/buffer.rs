//! Fixed-length, read-only sample sequences.

use std::ops::Deref;

/// Ordered sequence of samples produced by one sampling call.
///
/// The buffer is read-only once produced: it dereferences to a slice but
/// offers no mutable access. Continuous samplers yield `SampleBuffer<f64>`,
/// discrete samplers yield `SampleBuffer<u32>`.
///
/// # Examples
///
/// ```rust
/// use variate_core::engine::{generate, GeneratorParameters};
///
/// let buffer = generate(GeneratorParameters::good(42), 4);
/// assert_eq!(buffer.len(), 4);
/// assert!(buffer.iter().all(|&u| (0.0..1.0).contains(&u)));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SampleBuffer<T = f64> {
    values: Vec<T>,
}

impl<T> SampleBuffer<T> {
    /// Returns the samples as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    /// Consumes the buffer, returning the underlying vector.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.values
    }
}

impl<T> Deref for SampleBuffer<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        &self.values
    }
}

impl<T> FromIterator<T> for SampleBuffer<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for SampleBuffer<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a SampleBuffer<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl<T> From<SampleBuffer<T>> for Vec<T> {
    fn from(buffer: SampleBuffer<T>) -> Self {
        buffer.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_and_read_back() {
        let buffer: SampleBuffer<u32> = (0..5).collect();
        assert_eq!(buffer.len(), 5);
        assert_eq!(buffer.as_slice(), &[0, 1, 2, 3, 4]);
        assert_eq!(buffer[2], 2);
    }

    #[test]
    fn test_fallible_collect() {
        let ok: Result<SampleBuffer<f64>, &str> = vec![Ok(1.0), Ok(2.0)].into_iter().collect();
        assert_eq!(ok.unwrap().into_vec(), vec![1.0, 2.0]);

        let err: Result<SampleBuffer<f64>, &str> = vec![Ok(1.0), Err("boom")].into_iter().collect();
        assert_eq!(err, Err("boom"));
    }

    #[test]
    fn test_empty_buffer() {
        let buffer: SampleBuffer = SampleBuffer::default();
        assert!(buffer.is_empty());
        assert_eq!(Vec::from(buffer), Vec::<f64>::new());
    }
}
