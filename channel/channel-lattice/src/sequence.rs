//! Random row-count sequences for exploring lattice designs.
//!
//! Sequences are rejection-sampled: a whole sequence is drawn, checked, and
//! thrown away on any violation. Nothing is repaired in place.

use rand::Rng;
use tracing::debug;

use crate::error::{LatticeError, LatticeResult};
use crate::params::SamplerParams;

/// Returns true if every row count is within `1..=max_width` and adjacent
/// counts differ by at most `max_delta`.
///
/// Empty and single-row sequences only need their values in range.
///
/// # Example
///
/// ```
/// use channel_lattice::is_valid_sequence;
///
/// assert!(is_valid_sequence(&[1, 2, 3, 2, 1], 3, 1));
/// assert!(!is_valid_sequence(&[1, 3, 1], 3, 1));
/// ```
#[must_use]
pub fn is_valid_sequence(rows: &[usize], max_width: usize, max_delta: usize) -> bool {
    rows.iter().all(|&count| (1..=max_width).contains(&count))
        && rows
            .windows(2)
            .all(|pair| pair[0].abs_diff(pair[1]) <= max_delta)
}

/// One unchecked draw: starts and ends at 1, each row a random step from the
/// one before it.
///
/// Returns `None` if the walk leaves the `i64` range.
fn draw<R: Rng + ?Sized>(rows: usize, max_delta: i64, rng: &mut R) -> Option<Vec<i64>> {
    let mut sequence = Vec::with_capacity(rows);
    let mut previous: i64 = 1;
    sequence.push(previous);
    for _ in 2..rows {
        previous = previous.checked_add(rng.gen_range(-max_delta..=max_delta))?;
        sequence.push(previous);
    }
    if rows >= 2 {
        sequence.push(1);
    }
    Some(sequence)
}

/// Draw a valid row-count sequence under `params`.
///
/// # Errors
///
/// Returns [`LatticeError::InvalidSampler`] if the constraints can never be
/// met, or [`LatticeError::SamplingExhausted`] if `max_attempts` draws were
/// all rejected.
///
/// # Example
///
/// ```
/// use channel_lattice::{sample_layer_sequence, SamplerParams};
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let rows = sample_layer_sequence(&SamplerParams::new(9, 3, 1), &mut rng).unwrap();
/// assert_eq!(rows.len(), 9);
/// assert_eq!(rows[0], 1);
/// assert_eq!(rows[8], 1);
/// ```
pub fn sample_layer_sequence<R: Rng + ?Sized>(
    params: &SamplerParams,
    rng: &mut R,
) -> LatticeResult<Vec<usize>> {
    params.validate()?;
    let max_delta = i64::try_from(params.max_delta)
        .map_err(|_| LatticeError::invalid_sampler("max delta is too large"))?;

    let mut attempts = 0;
    loop {
        attempts += 1;

        let candidate: Option<Vec<usize>> = draw(params.rows, max_delta, rng).and_then(|walk| {
            walk.into_iter()
                .map(|count| usize::try_from(count).ok())
                .collect()
        });
        if let Some(rows) = candidate {
            if is_valid_sequence(&rows, params.max_width, params.max_delta) {
                debug!(attempts, rows = ?rows, "Sampled row sequence");
                return Ok(rows);
            }
        }

        if params.max_attempts.is_some_and(|max| attempts >= max) {
            return Err(LatticeError::SamplingExhausted { attempts });
        }
    }
}

/// Draw a valid row-count sequence of length `rows`.
///
/// Retries until a draw satisfies the constraints.
///
/// # Errors
///
/// Returns [`LatticeError::InvalidSampler`] if `rows` or `max_width` is zero.
pub fn random_layer_sequence<R: Rng + ?Sized>(
    rows: usize,
    max_width: usize,
    max_delta: usize,
    rng: &mut R,
) -> LatticeResult<Vec<usize>> {
    sample_layer_sequence(&SamplerParams::new(rows, max_width, max_delta), rng)
}
