//! Channel layers: every channel between two rows, mitered where channels
//! branch and cut flat where they meet a row.

use std::cmp::Ordering;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::channel::{Channel, create_channel};
use crate::error::{LatticeError, LatticeResult};
use crate::layer::{ConnectedLayers, Layer};
use crate::line::{Line, alter_line, common_point, intersection, start_or_end};
use crate::point::Point;

/// Half-width of the horizontal cut used at rows holding a single node.
///
/// Cuts are intersected as infinite lines, so this only needs to be
/// non-zero; it is kept wide so plotted cut lines span the channels.
pub const SINGLE_NODE_CUT_HALF_WIDTH: f64 = 100.0;

/// Which node row of a channel layer a flatten applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FlattenSide {
    /// The row with the lower y-level.
    Start,
    /// The row with the higher y-level.
    End,
}

/// All channels connecting two adjacent node rows.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ChannelLayer {
    node_layers: [Layer; 2],
    channels: Vec<Channel>,
}

impl ChannelLayer {
    /// The two node rows spanned, lower y first.
    #[must_use]
    pub const fn node_layers(&self) -> &[Layer; 2] {
        &self.node_layers
    }

    /// Channels, left to right.
    #[must_use]
    pub fn channels(&self) -> &[Channel] {
        &self.channels
    }

    /// Number of channels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.channels.len()
    }

    /// Returns true if the layer has no channels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    /// Iterate over the channels, left to right.
    pub fn iter(&self) -> impl Iterator<Item = &Channel> {
        self.channels.iter()
    }

    /// The node row for one side of the layer.
    #[must_use]
    pub const fn node_layer(&self, side: FlattenSide) -> &Layer {
        match side {
            FlattenSide::Start => &self.node_layers[0],
            FlattenSide::End => &self.node_layers[1],
        }
    }

    /// The node row this layer shares with `other`, if they are adjacent.
    #[must_use]
    pub fn common_node_layer(&self, other: &Self) -> Option<&Layer> {
        self.node_layers
            .iter()
            .find(|mine| other.node_layers.iter().any(|theirs| theirs == *mine))
    }

    /// Channels whose centerline starts or ends at `point`.
    pub fn channels_through<'a>(&'a self, point: &'a Point) -> impl Iterator<Item = &'a Channel> {
        self.channels
            .iter()
            .filter(move |channel| channel.centerline().has_endpoint(point))
    }

    /// Returns true if `channel` belongs to this layer.
    #[must_use]
    pub fn contains(&self, channel: &Channel) -> bool {
        self.channels.contains(channel)
    }
}

impl<'a> IntoIterator for &'a ChannelLayer {
    type Item = &'a Channel;
    type IntoIter = std::slice::Iter<'a, Channel>;

    fn into_iter(self) -> Self::IntoIter {
        self.channels.iter()
    }
}

/// Build one plain channel per connecting line.
///
/// Lines are ordered by start x, then end x, so channels run left to right.
///
/// # Example
///
/// ```
/// use channel_lattice::{connect_layers, create_channel_layer, create_layer};
///
/// let connection = connect_layers(&create_layer(2, 0.0, 5.0), &create_layer(3, 2.5, 5.0));
/// let layer = create_channel_layer(&connection, 0.5);
/// assert_eq!(layer.len(), 4);
/// ```
#[must_use]
pub fn create_channel_layer(connection: &ConnectedLayers, width: f64) -> ChannelLayer {
    let mut lines = connection.lines().to_vec();
    lines.sort_by(|a, b| {
        a.start()
            .x()
            .total_cmp(&b.start().x())
            .then_with(|| a.end().x().total_cmp(&b.end().x()))
    });

    ChannelLayer {
        node_layers: connection.layers().clone(),
        channels: lines.iter().map(|line| create_channel(line, width)).collect(),
    }
}

/// Wall slots of `channel` ordered by start y, then start x.
fn pairing_order(channel: &Channel) -> [usize; 2] {
    let [a, b] = channel.walls();
    let order = b
        .start()
        .y()
        .total_cmp(&a.start().y())
        .then_with(|| b.start().x().total_cmp(&a.start().x()));
    if order == Ordering::Less { [1, 0] } else { [0, 1] }
}

/// Miter two channels that branch from a shared centerline vertex.
///
/// Each channel's walls are ordered by start y then start x, and paired
/// positionally with the other channel's. Every pair is intersected and the
/// branch-side endpoint of both walls is moved to that intersection, so the
/// two channels meet at exact corners with no gap or overlap.
///
/// # Errors
///
/// Returns [`LatticeError::NoSharedVertex`] if the centerlines have no common
/// endpoint, or [`LatticeError::ParallelLines`] if paired walls are parallel.
///
/// # Example
///
/// ```
/// use channel_lattice::{create_channel, join_channels, Line, Point};
///
/// let vertex = Point::new(0.0, 2.5);
/// let left = create_channel(&Line::new(Point::new(-2.5, 0.0), vertex), 0.5);
/// let right = create_channel(&Line::new(Point::new(2.5, 0.0), vertex), 0.5);
///
/// let (left, right) = join_channels(&left, &right).unwrap();
/// assert!(left.walls().iter().any(|w| right.walls().iter().any(|v| v.end() == w.end())));
/// ```
pub fn join_channels(first: &Channel, second: &Channel) -> LatticeResult<(Channel, Channel)> {
    let shared = common_point(first.centerline(), second.centerline()).ok_or_else(|| {
        LatticeError::NoSharedVertex {
            first: *first.centerline(),
            second: *second.centerline(),
        }
    })?;
    let first_at = start_or_end(first.centerline(), &shared)?;
    let second_at = start_or_end(second.centerline(), &shared)?;

    let mut first_walls = *first.walls();
    let mut second_walls = *second.walls();
    for (a, b) in pairing_order(first).into_iter().zip(pairing_order(second)) {
        let corner = intersection(&first.walls()[a], &second.walls()[b])?;
        first_walls[a] = alter_line(&first.walls()[a], corner, first_at);
        second_walls[b] = alter_line(&second.walls()[b], corner, second_at);
    }

    Ok((
        Channel::from_parts(first_walls, *first.centerline()),
        Channel::from_parts(second_walls, *second.centerline()),
    ))
}

/// Build a channel layer and miter every adjacent pair of channels.
///
/// Channels are joined left to right, pair `i, i + 1` after pair
/// `i - 1, i`, so interior channels pick up a miter on both sides.
///
/// # Errors
///
/// Returns [`LatticeError::NoSharedVertex`] if two adjacent channels have no
/// common centerline vertex, as happens between rows of equal size or when a
/// row fans out by two or more from a row of several nodes. Any other
/// [`join_channels`] failure is propagated too.
pub fn create_joined_channel_layer(
    connection: &ConnectedLayers,
    width: f64,
) -> LatticeResult<ChannelLayer> {
    let ChannelLayer {
        node_layers,
        mut channels,
    } = create_channel_layer(connection, width);

    for i in 1..channels.len() {
        let (left, right) = join_channels(&channels[i - 1], &channels[i])?;
        channels[i - 1] = left;
        channels[i] = right;
    }
    debug!(channels = channels.len(), "Joined channel layer");

    Ok(ChannelLayer {
        node_layers,
        channels,
    })
}

/// Cut a channel's walls against `cut_line`.
///
/// The centerline end lying at the cut line's y picks which end of each
/// wall moves; that end is replaced by the wall's intersection with the cut
/// line.
///
/// # Errors
///
/// Returns [`LatticeError::CutLineMissesChannel`] if neither centerline end
/// is at the cut line's y, or [`LatticeError::ParallelLines`] if a wall runs
/// parallel to the cut.
// Coordinates are rounded on construction, so exact comparison is intended.
#[allow(clippy::float_cmp)]
pub fn cut_channel(channel: &Channel, cut_line: &Line) -> LatticeResult<Channel> {
    let cut_y = cut_line.start().y();
    let centerline = channel.centerline();
    let end = centerline
        .points()
        .into_iter()
        .find(|p| p.y() == cut_y)
        .ok_or_else(|| LatticeError::CutLineMissesChannel {
            cut_y,
            centerline: *centerline,
        })?;
    let at = start_or_end(centerline, &end)?;

    let [left, right] = channel.walls();
    let walls = [
        alter_line(left, intersection(left, cut_line)?, at),
        alter_line(right, intersection(right, cut_line)?, at),
    ];
    Ok(Channel::from_parts(walls, *centerline))
}

/// The straight boundary a row imposes on the channels meeting it.
fn boundary_cut_line(row: &Layer) -> Line {
    match (row.first(), row.last()) {
        (Some(first), Some(last)) if row.len() > 1 => Line::new(*first, *last),
        _ => Line::new(
            Point::new(-SINGLE_NODE_CUT_HALF_WIDTH, row.y()),
            Point::new(SINGLE_NODE_CUT_HALF_WIDTH, row.y()),
        ),
    }
}

/// Flatten one side of a channel layer onto its node row.
///
/// The cut runs from the first to the last node of the row, or, for a row
/// with a single node, along a wide horizontal line through it. Every
/// channel is cut against it.
///
/// # Errors
///
/// Propagates any [`cut_channel`] failure.
pub fn flatten_channel_layer(layer: &ChannelLayer, side: FlattenSide) -> LatticeResult<ChannelLayer> {
    let cut_line = boundary_cut_line(layer.node_layer(side));
    debug!(?side, cut = %cut_line, channels = layer.len(), "Flattening channel layer");

    let channels = layer
        .iter()
        .map(|channel| cut_channel(channel, &cut_line))
        .collect::<LatticeResult<Vec<_>>>()?;

    Ok(ChannelLayer {
        node_layers: layer.node_layers.clone(),
        channels,
    })
}
