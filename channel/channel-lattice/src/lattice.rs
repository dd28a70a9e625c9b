//! Whole lattices: every channel layer from inlet row to outlet row.

// Row indices are small; the usize -> f64 conversion cannot lose precision.
#![allow(clippy::cast_precision_loss)]

use hashbrown::HashSet;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::assemble::{
    ChannelLayer, FlattenSide, create_joined_channel_layer, flatten_channel_layer,
};
use crate::channel::Channel;
use crate::error::{LatticeError, LatticeResult};
use crate::layer::{connect_layers, create_layer};
use crate::line::Line;
use crate::params::LatticeParams;
use crate::point::Point;

/// An ordered network of channel layers.
///
/// Layer 0 touches the inlet row; the last layer touches the outlet row.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Lattice {
    channel_layers: Vec<ChannelLayer>,
}

impl Lattice {
    /// Channel layers from inlet to outlet.
    #[must_use]
    pub fn channel_layers(&self) -> &[ChannelLayer] {
        &self.channel_layers
    }

    /// Number of channel layers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.channel_layers.len()
    }

    /// Returns true if the lattice has no channel layers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.channel_layers.is_empty()
    }

    /// The channel layer on the inlet side.
    #[must_use]
    pub fn inlet_layer(&self) -> Option<&ChannelLayer> {
        self.channel_layers.first()
    }

    /// The channel layer on the outlet side.
    #[must_use]
    pub fn outlet_layer(&self) -> Option<&ChannelLayer> {
        self.channel_layers.last()
    }

    /// Iterate over the channel layers, inlet first.
    pub fn iter(&self) -> impl Iterator<Item = &ChannelLayer> {
        self.channel_layers.iter()
    }

    /// Every channel, layer by layer.
    pub fn channels(&self) -> impl Iterator<Item = &Channel> {
        self.channel_layers.iter().flat_map(ChannelLayer::iter)
    }

    /// Every channel outline line, in channel order.
    pub fn lines(&self) -> impl Iterator<Item = Line> + '_ {
        self.channels().flat_map(Channel::lines)
    }

    /// Every outline endpoint, duplicates included.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.lines().flat_map(|line| line.points())
    }

    /// The distinct outline vertices.
    #[must_use]
    pub fn point_set(&self) -> HashSet<Point> {
        self.points().collect()
    }

    /// Total number of channels.
    #[must_use]
    pub fn channel_count(&self) -> usize {
        self.channel_layers.iter().map(ChannelLayer::len).sum()
    }

    /// Returns true if one channel layer holds every channel in `channels`.
    #[must_use]
    pub fn contains_in_same_layer(&self, channels: &[&Channel]) -> bool {
        self.channel_layers
            .iter()
            .any(|layer| channels.iter().all(|channel| layer.contains(channel)))
    }
}

impl<'a> IntoIterator for &'a Lattice {
    type Item = &'a ChannelLayer;
    type IntoIter = std::slice::Iter<'a, ChannelLayer>;

    fn into_iter(self) -> Self::IntoIter {
        self.channel_layers.iter()
    }
}

/// Build a lattice from per-row node counts.
///
/// # Errors
///
/// See [`build_lattice`].
///
/// # Example
///
/// ```
/// use channel_lattice::create_lattice;
///
/// let lattice = create_lattice(&[2, 1, 2, 3, 2, 1, 2, 3, 2, 1, 1], 5.0, 0.5).unwrap();
/// assert_eq!(lattice.len(), 10);
/// ```
pub fn create_lattice(rows: &[usize], spacing: f64, channel_width: f64) -> LatticeResult<Lattice> {
    build_lattice(rows, &LatticeParams::new(spacing, channel_width))
}

/// Build a lattice from per-row node counts.
///
/// Row `i` is placed at `y = spacing * i / 2`. Each pair of consecutive rows
/// is connected and turned into a mitered channel layer. Every interior
/// boundary except the one next to the final layer is then flattened: the
/// end of layer `i` and the start of layer `i + 1` are both cut against the
/// row between them. The overall inlet and outlet rows are left as the
/// joins produced them.
///
/// # Errors
///
/// Returns an error if the parameters are invalid, fewer than two rows are
/// given, or a row has no nodes. Adjacent channels that cannot be mitered
/// (equal multi-node rows, or a fan of two or more from a multi-node row)
/// abort the build with [`LatticeError::NoSharedVertex`].
pub fn build_lattice(rows: &[usize], params: &LatticeParams) -> LatticeResult<Lattice> {
    params.validate()?;
    if rows.len() < 2 {
        return Err(LatticeError::TooFewRows {
            min: 2,
            actual: rows.len(),
        });
    }
    if let Some((index, &count)) = rows.iter().enumerate().find(|(_, count)| **count == 0) {
        return Err(LatticeError::InvalidRowCount { index, count });
    }

    info!(
        rows = rows.len(),
        spacing = params.spacing,
        channel_width = params.channel_width,
        "Building channel lattice"
    );

    let layers: Vec<_> = rows
        .iter()
        .enumerate()
        .map(|(i, &count)| create_layer(count, params.spacing * i as f64 / 2.0, params.spacing))
        .collect();

    let mut channel_layers = layers
        .windows(2)
        .map(|pair| {
            let connection = connect_layers(&pair[0], &pair[1]);
            create_joined_channel_layer(&connection, params.channel_width)
        })
        .collect::<LatticeResult<Vec<_>>>()?;

    for i in 0..channel_layers.len().saturating_sub(2) {
        debug!(boundary = i + 1, "Flattening interior boundary");
        channel_layers[i] = flatten_channel_layer(&channel_layers[i], FlattenSide::End)?;
        channel_layers[i + 1] = flatten_channel_layer(&channel_layers[i + 1], FlattenSide::Start)?;
    }

    let lattice = Lattice { channel_layers };
    info!(
        channel_layers = lattice.len(),
        channels = lattice.channel_count(),
        "Channel lattice complete"
    );
    Ok(lattice)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const TWO_INLET: [usize; 11] = [2, 1, 2, 3, 2, 1, 2, 3, 2, 1, 1];

    #[test]
    fn test_layer_count_and_channels() {
        let lattice = create_lattice(&TWO_INLET, 5.0, 0.5).unwrap();
        assert_eq!(lattice.len(), TWO_INLET.len() - 1);

        // Each layer holds small * (diff + 1) channels.
        let expected: Vec<usize> = TWO_INLET
            .windows(2)
            .map(|pair| pair[0].min(pair[1]) * (pair[0].abs_diff(pair[1]) + 1))
            .collect();
        let actual: Vec<usize> = lattice.iter().map(ChannelLayer::len).collect();
        assert_eq!(actual, expected);
        assert_eq!(lattice.channel_count(), expected.iter().sum::<usize>());
    }

    #[test]
    fn test_rows_stacked_at_half_spacing() {
        let lattice = create_lattice(&[1, 2, 1], 4.0, 0.5).unwrap();
        let ys: Vec<f64> = lattice
            .iter()
            .flat_map(|layer| layer.node_layers().iter().map(|row| row.y()))
            .collect();
        assert_eq!(ys, vec![0.0, 2.0, 2.0, 4.0]);
    }

    #[test]
    fn test_interior_boundaries_flattened() {
        let lattice = create_lattice(&TWO_INLET, 5.0, 0.5).unwrap();
        let layers = lattice.channel_layers();

        for i in 0..layers.len() - 2 {
            let row_y = layers[i].node_layer(FlattenSide::End).y();
            for channel in layers[i].iter() {
                for wall in channel.walls() {
                    assert_relative_eq!(wall.end().y(), row_y, epsilon = 1e-9);
                }
            }
            for channel in layers[i + 1].iter() {
                for wall in channel.walls() {
                    assert_relative_eq!(wall.start().y(), row_y, epsilon = 1e-9);
                }
            }
        }
    }

    #[test]
    fn test_two_rows_skip_flattening() {
        let lattice = create_lattice(&[2, 1], 5.0, 0.5).unwrap();
        let connection = connect_layers(&create_layer(2, 0.0, 5.0), &create_layer(1, 2.5, 5.0));
        let joined = create_joined_channel_layer(&connection, 0.5).unwrap();
        assert_eq!(lattice.channel_layers(), &[joined]);
    }

    #[test]
    fn test_traversal() {
        let lattice = create_lattice(&[2, 1, 1], 5.0, 0.5).unwrap();
        assert_eq!(lattice.channels().count(), 3);
        assert_eq!(lattice.lines().count(), 12);
        assert_eq!(lattice.points().count(), 24);
        assert!(lattice.point_set().len() < 24);
    }

    #[test]
    fn test_contains_in_same_layer() {
        let lattice = create_lattice(&[2, 1, 1], 5.0, 0.5).unwrap();
        let first = &lattice.channel_layers()[0].channels()[0];
        let second = &lattice.channel_layers()[0].channels()[1];
        let third = &lattice.channel_layers()[1].channels()[0];

        assert!(lattice.contains_in_same_layer(&[first, second]));
        assert!(!lattice.contains_in_same_layer(&[first, third]));
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(matches!(
            create_lattice(&[2], 5.0, 0.5),
            Err(LatticeError::TooFewRows { min: 2, actual: 1 })
        ));
        assert!(matches!(
            create_lattice(&[2, 0, 1], 5.0, 0.5),
            Err(LatticeError::InvalidRowCount { index: 1, count: 0 })
        ));
        assert!(matches!(
            create_lattice(&[2, 1], -5.0, 0.5),
            Err(LatticeError::InvalidSpacing(_))
        ));
        assert!(matches!(
            create_lattice(&[2, 1], 5.0, 0.0),
            Err(LatticeError::InvalidChannelWidth(_))
        ));
    }

    #[test]
    fn test_unjoinable_rows_abort() {
        let err = create_lattice(&[2, 2, 1], 5.0, 0.5).unwrap_err();
        assert!(matches!(err, LatticeError::NoSharedVertex { .. }));
    }

    #[test]
    fn test_build_is_repeatable() {
        let a = create_lattice(&TWO_INLET, 5.0, 0.5).unwrap();
        let b = build_lattice(&TWO_INLET, &LatticeParams::default()).unwrap();
        assert_eq!(a, b);
    }
}
