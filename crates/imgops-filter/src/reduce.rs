//! Neighborhood reducers
//!
//! A reducer turns the weighted samples gathered under a mask into one
//! output sample. The filter engine calls it once per channel per interior
//! pixel, passing a scratch buffer the reducer may reorder freely.
//!
//! [`Reduction`] covers the standard order statistics and sums; any
//! `Fn(&mut [f64], usize) -> u8` closure is also a [`Reducer`].

use crate::{FilterError, FilterResult};

/// Maps a neighborhood's weighted samples to one output value.
pub trait Reducer {
    /// Reduce `samples` to a single value.
    ///
    /// `center` is the index of the sample under the mask's center cell.
    /// `samples` is never empty.
    fn reduce(&self, samples: &mut [f64], center: usize) -> u8;

    /// Check the reducer's parameters before filtering starts.
    fn validate(&self) -> FilterResult<()> {
        Ok(())
    }
}

impl<F> Reducer for F
where
    F: Fn(&mut [f64], usize) -> u8,
{
    fn reduce(&self, samples: &mut [f64], center: usize) -> u8 {
        self(samples, center)
    }
}

/// Built-in reducers
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Reduction {
    /// Largest sample (dilation with a mask of ones)
    Max,
    /// Smallest sample (erosion with a mask of ones)
    Min,
    /// Sum divided by sample count
    Mean,
    /// Sum of samples (for normalized masks such as Gaussian)
    Sum,
    /// Sorted sample at index `n / 2`
    Median,
    /// Sorted sample at index `round(rank * (n - 1))`, `rank` in `[0, 1]`
    Rank(f64),
    /// Center sample clamped into the range of its neighbors
    Conservative,
}

/// Round and saturate a sample into `u8`.
#[inline]
pub fn clamp_sample(v: f64) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

fn sort_samples(samples: &mut [f64]) {
    samples.sort_unstable_by(f64::total_cmp);
}

impl Reducer for Reduction {
    fn reduce(&self, samples: &mut [f64], center: usize) -> u8 {
        match *self {
            Reduction::Max => clamp_sample(samples.iter().copied().fold(f64::MIN, f64::max)),
            Reduction::Min => clamp_sample(samples.iter().copied().fold(f64::MAX, f64::min)),
            Reduction::Mean => {
                clamp_sample(samples.iter().sum::<f64>() / samples.len() as f64)
            }
            Reduction::Sum => clamp_sample(samples.iter().sum()),
            Reduction::Median => {
                sort_samples(samples);
                clamp_sample(samples[samples.len() / 2])
            }
            Reduction::Rank(rank) => {
                sort_samples(samples);
                let idx = (rank.clamp(0.0, 1.0) * (samples.len() - 1) as f64).round() as usize;
                clamp_sample(samples[idx])
            }
            Reduction::Conservative => {
                let value = samples[center];
                let (lo, hi) = samples
                    .iter()
                    .enumerate()
                    .filter(|&(i, _)| i != center)
                    .fold((f64::MAX, f64::MIN), |(lo, hi), (_, &s)| {
                        (lo.min(s), hi.max(s))
                    });
                if lo > hi {
                    // no neighbors (1x1 mask)
                    clamp_sample(value)
                } else {
                    clamp_sample(value.clamp(lo, hi))
                }
            }
        }
    }

    fn validate(&self) -> FilterResult<()> {
        match *self {
            Reduction::Rank(rank) if !(0.0..=1.0).contains(&rank) => Err(
                FilterError::InvalidParameters(format!("rank must be in [0.0, 1.0], got {rank}")),
            ),
            _ => Ok(()),
        }
    }
}
