//! Node rows and the fan of lines connecting two of them.

// Node counts are small; the usize -> f64 conversions cannot lose precision.
#![allow(clippy::cast_precision_loss)]

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::line::Line;
use crate::point::{Point, round_coordinate};

/// A row of evenly spaced nodes at one y-level, sorted by x and centered on
/// `x = 0`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Layer {
    points: Vec<Point>,
    y: f64,
}

impl Layer {
    /// The nodes, left to right.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the row has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The shared y-level of every node.
    #[must_use]
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// Node at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Point> {
        self.points.get(index)
    }

    /// Leftmost node.
    #[must_use]
    pub fn first(&self) -> Option<&Point> {
        self.points.first()
    }

    /// Rightmost node.
    #[must_use]
    pub fn last(&self) -> Option<&Point> {
        self.points.last()
    }

    /// Iterate over the nodes, left to right.
    pub fn iter(&self) -> impl Iterator<Item = &Point> {
        self.points.iter()
    }
}

impl<'a> IntoIterator for &'a Layer {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Place `count` nodes at height `y`, `spacing` apart and centered on `x = 0`.
///
/// # Example
///
/// ```
/// use channel_lattice::{create_layer, Point};
///
/// let layer = create_layer(3, 2.5, 5.0);
/// assert_eq!(layer.points(), &[
///     Point::new(-5.0, 2.5),
///     Point::new(0.0, 2.5),
///     Point::new(5.0, 2.5),
/// ]);
/// ```
#[must_use]
pub fn create_layer(count: usize, y: f64, spacing: f64) -> Layer {
    let leftmost = (count as f64 - 1.0) * spacing / 2.0;
    let points = (0..count)
        .map(|i| Point::new((i as f64).mul_add(spacing, -leftmost), y))
        .collect();

    Layer {
        points,
        y: round_coordinate(y),
    }
}

/// Two adjacent rows and the lines connecting them.
///
/// Every node of the larger row ends at least one line; every node of the
/// smaller row starts `diff + 1` lines, where `diff` is the difference in
/// node counts.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConnectedLayers {
    layers: [Layer; 2],
    lines: Vec<Line>,
}

impl ConnectedLayers {
    /// Both rows, lower y first.
    #[must_use]
    pub const fn layers(&self) -> &[Layer; 2] {
        &self.layers
    }

    /// The row with the lower y-level.
    #[must_use]
    pub const fn lower(&self) -> &Layer {
        &self.layers[0]
    }

    /// The row with the higher y-level.
    #[must_use]
    pub const fn upper(&self) -> &Layer {
        &self.layers[1]
    }

    /// Connecting lines in generation order, each oriented lower-y first.
    #[must_use]
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }
}

/// Connect two rows with a fan of lines.
///
/// With `small` the row with fewer nodes, `large` the other, and
/// `diff = |large| - |small|`, node `i` of `small` is joined to nodes
/// `i..=i + diff` of `large`. The windows overlap by `diff` and together
/// cover `large` with no gaps. Lines are emitted by ascending `i`, then by
/// ascending offset, and each is oriented with its lower-y point first.
///
/// # Example
///
/// ```
/// use channel_lattice::{connect_layers, create_layer};
///
/// let bottom = create_layer(2, 0.0, 5.0);
/// let top = create_layer(3, 2.5, 5.0);
/// let connection = connect_layers(&top, &bottom);
///
/// assert_eq!(connection.lines().len(), 4);
/// assert_eq!(connection.lower().y(), 0.0);
/// ```
#[must_use]
pub fn connect_layers(first: &Layer, second: &Layer) -> ConnectedLayers {
    let (small, large) = if second.len() < first.len() {
        (second, first)
    } else {
        (first, second)
    };
    let diff = large.len() - small.len();

    let lines = small
        .iter()
        .enumerate()
        .flat_map(|(i, from)| {
            large.points[i..=i + diff]
                .iter()
                .map(move |to| Line::upward(*from, *to))
        })
        .collect();

    let layers = if second.y() < first.y() {
        [second.clone(), first.clone()]
    } else {
        [first.clone(), second.clone()]
    };

    ConnectedLayers { layers, lines }
}
