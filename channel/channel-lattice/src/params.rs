//! Lattice build and sequence sampling parameters.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{LatticeError, LatticeResult};

/// Configuration for building a lattice from a row-count sequence.
///
/// # Examples
///
/// ```
/// use channel_lattice::LatticeParams;
///
/// let params = LatticeParams::default()
///     .with_spacing(4.0)
///     .with_channel_width(0.4);
/// assert!(params.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LatticeParams {
    /// Distance between neighbouring nodes in a row.
    ///
    /// Rows are stacked at half this distance.
    pub spacing: f64,

    /// Full width of every channel, wall to wall.
    pub channel_width: f64,
}

impl Default for LatticeParams {
    fn default() -> Self {
        Self {
            spacing: 5.0,
            channel_width: 0.5,
        }
    }
}

impl LatticeParams {
    /// Creates parameters with the given spacing and channel width.
    #[must_use]
    pub const fn new(spacing: f64, channel_width: f64) -> Self {
        Self {
            spacing,
            channel_width,
        }
    }

    /// Sets the node spacing.
    #[must_use]
    pub const fn with_spacing(mut self, spacing: f64) -> Self {
        self.spacing = spacing;
        self
    }

    /// Sets the channel width.
    #[must_use]
    pub const fn with_channel_width(mut self, channel_width: f64) -> Self {
        self.channel_width = channel_width;
        self
    }

    /// Vertical distance between consecutive rows.
    #[must_use]
    pub fn row_pitch(&self) -> f64 {
        self.spacing / 2.0
    }

    /// Validates the parameters.
    ///
    /// # Errors
    ///
    /// Returns [`LatticeError::InvalidSpacing`] or
    /// [`LatticeError::InvalidChannelWidth`] for values that are not
    /// positive and finite.
    pub fn validate(&self) -> LatticeResult<()> {
        if !(self.spacing.is_finite() && self.spacing > 0.0) {
            return Err(LatticeError::InvalidSpacing(self.spacing));
        }
        if !(self.channel_width.is_finite() && self.channel_width > 0.0) {
            return Err(LatticeError::InvalidChannelWidth(self.channel_width));
        }
        Ok(())
    }
}

/// Constraints for drawing a random row-count sequence.
///
/// # Examples
///
/// ```
/// use channel_lattice::SamplerParams;
///
/// let params = SamplerParams::new(9, 4, 1).with_max_attempts(10_000);
/// assert_eq!(params.max_attempts, Some(10_000));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SamplerParams {
    /// Length of the sequence, first and last rows included.
    pub rows: usize,

    /// Largest node count allowed in any row.
    pub max_width: usize,

    /// Largest change in node count between adjacent rows.
    pub max_delta: usize,

    /// Give up after this many rejected draws. `None` retries forever.
    pub max_attempts: Option<usize>,
}

impl Default for SamplerParams {
    fn default() -> Self {
        Self {
            rows: 11,
            max_width: 3,
            max_delta: 1,
            max_attempts: None,
        }
    }
}

impl SamplerParams {
    /// Creates sampler parameters with unbounded retries.
    #[must_use]
    pub const fn new(rows: usize, max_width: usize, max_delta: usize) -> Self {
        Self {
            rows,
            max_width,
            max_delta,
            max_attempts: None,
        }
    }

    /// Sets the sequence length.
    #[must_use]
    pub const fn with_rows(mut self, rows: usize) -> Self {
        self.rows = rows;
        self
    }

    /// Sets the largest row width.
    #[must_use]
    pub const fn with_max_width(mut self, max_width: usize) -> Self {
        self.max_width = max_width;
        self
    }

    /// Sets the largest step between adjacent rows.
    #[must_use]
    pub const fn with_max_delta(mut self, max_delta: usize) -> Self {
        self.max_delta = max_delta;
        self
    }

    /// Caps the number of draws before sampling fails.
    #[must_use]
    pub const fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = Some(max_attempts);
        self
    }

    /// Validates the parameters.
    ///
    /// # Errors
    ///
    /// Returns [`LatticeError::InvalidSampler`] if no sequence could ever
    /// satisfy the constraints.
    pub fn validate(&self) -> LatticeResult<()> {
        if self.rows == 0 {
            return Err(LatticeError::invalid_sampler("sequence needs at least one row"));
        }
        if self.max_width == 0 {
            return Err(LatticeError::invalid_sampler("max width must be at least 1"));
        }
        if self.max_attempts == Some(0) {
            return Err(LatticeError::invalid_sampler("max attempts must be at least 1"));
        }
        if i64::try_from(self.max_delta).is_err() {
            return Err(LatticeError::invalid_sampler("max delta is too large"));
        }
        Ok(())
    }
}
