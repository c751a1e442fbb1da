//! Histogram computation and equalization
//!
//! Per-channel frequency tables over the 256 possible sample values, their
//! cumulative sums, and histogram equalization built on them.
//!
//! Equalization maps each sample `v` of a channel through
//!
//! ```text
//! floor((cfd[v] - cfd[0]) * 255 / (total - cfd[0]))
//! ```
//!
//! where `cfd` is the channel's cumulative frequency distribution. The
//! arithmetic is exact integer arithmetic.

use super::{PixelMatrix, PixelMatrixMut};
use crate::color::{Channel, Rgb};
use crate::error::{Error, Result};

/// Per-channel value frequencies of a matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    counts: [[u32; 256]; 3],
    total: u64,
}

impl Histogram {
    /// Tally the samples of a pixel slice.
    pub fn from_pixels(data: &[Rgb]) -> Self {
        let mut counts = [[0u32; 256]; 3];
        for p in data {
            for c in 0..3 {
                counts[c][p[c] as usize] += 1;
            }
        }
        Histogram {
            counts,
            total: data.len() as u64,
        }
    }

    /// Frequency table of one channel.
    #[inline]
    pub fn channel(&self, channel: Channel) -> &[u32; 256] {
        &self.counts[channel.index()]
    }

    /// Count of `value` in `channel`.
    #[inline]
    pub fn count(&self, channel: Channel, value: u8) -> u32 {
        self.counts[channel.index()][value as usize]
    }

    /// Number of pixels tallied.
    #[inline]
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Cumulative frequency distribution of one channel.
    ///
    /// Entry `v` is the number of samples with value `<= v`; entry 255
    /// equals [`Histogram::total`].
    pub fn cumulative(&self, channel: Channel) -> [u64; 256] {
        let mut cfd = [0u64; 256];
        let mut running = 0u64;
        for (v, &count) in self.counts[channel.index()].iter().enumerate() {
            running += count as u64;
            cfd[v] = running;
        }
        cfd
    }

    /// Build the equalization lookup table for one channel.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DegenerateHistogram`] if every sample of the channel
    /// is 0.
    pub fn equalization_table(&self, channel: Channel) -> Result<[u8; 256]> {
        let cfd = self.cumulative(channel);
        let min = cfd[0];
        let range = self.total - min;
        if range == 0 {
            return Err(Error::DegenerateHistogram { channel });
        }

        let mut table = [0u8; 256];
        for (v, entry) in table.iter_mut().enumerate() {
            // cfd[v] >= cfd[0] since cfd is non-decreasing
            *entry = ((cfd[v] - min) * 255 / range) as u8;
        }
        Ok(table)
    }
}

impl PixelMatrix {
    /// Compute the per-channel histogram.
    pub fn histogram(&self) -> Histogram {
        Histogram::from_pixels(self.data())
    }

    /// Collect every sample of one channel, in storage order.
    pub fn channel_values(&self, channel: Channel) -> Vec<u8> {
        let c = channel.index();
        self.data().iter().map(|p| p[c]).collect()
    }

    /// Histogram-equalize every channel, consuming the matrix.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DegenerateHistogram`] naming the first channel whose
    /// samples are all 0. No pixel is modified in that case.
    pub fn equalize(self) -> Result<PixelMatrix> {
        let mut m = self.into_mut();
        m.equalize_inplace()?;
        Ok(m.into())
    }
}

impl PixelMatrixMut {
    /// Histogram-equalize every channel in place.
    ///
    /// All three lookup tables are built before any sample is written.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DegenerateHistogram`] naming the first channel whose
    /// samples are all 0. The matrix is left unchanged in that case.
    pub fn equalize_inplace(&mut self) -> Result<()> {
        let hist = Histogram::from_pixels(self.data());
        let tables = [
            hist.equalization_table(Channel::Red)?,
            hist.equalization_table(Channel::Green)?,
            hist.equalization_table(Channel::Blue)?,
        ];

        for p in self.data_mut() {
            for c in 0..3 {
                p[c] = tables[c][p[c] as usize];
            }
        }
        Ok(())
    }
}
