//! Single channels: a centerline widened into two parallel walls.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::line::{Line, offset_line};

/// Side of a channel relative to its centerline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum WallSide {
    /// The wall at lower x.
    Left,
    /// The wall at higher x.
    Right,
}

/// A fluidic passage bounded by two walls around a centerline.
///
/// `walls[0]` is the left wall and `walls[1]` the right one, as ordered by
/// start x when the channel is created. Joining and cutting move wall
/// endpoints but keep each wall in its slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Channel {
    walls: [Line; 2],
    centerline: Line,
}

impl Channel {
    pub(crate) const fn from_parts(walls: [Line; 2], centerline: Line) -> Self {
        Self { walls, centerline }
    }

    /// Both walls, left first.
    #[must_use]
    pub const fn walls(&self) -> &[Line; 2] {
        &self.walls
    }

    /// The centerline the channel was built around.
    #[must_use]
    pub const fn centerline(&self) -> &Line {
        &self.centerline
    }

    /// Cross-wall joining the start points of both walls.
    #[must_use]
    pub const fn bottom_wall(&self) -> Line {
        Line::new(self.walls[0].start(), self.walls[1].start())
    }

    /// Cross-wall joining the end points of both walls.
    #[must_use]
    pub const fn top_wall(&self) -> Line {
        Line::new(self.walls[0].end(), self.walls[1].end())
    }

    /// The outline: both walls, then the top and bottom cross-walls.
    #[must_use]
    pub const fn lines(&self) -> [Line; 4] {
        [
            self.walls[0],
            self.walls[1],
            self.top_wall(),
            self.bottom_wall(),
        ]
    }

    /// The wall lying on `side` of the centerline at both of its ends.
    ///
    /// Returns `None` if no wall qualifies, which only happens for
    /// centerlines close to horizontal.
    #[must_use]
    pub fn wall(&self, side: WallSide) -> Option<&Line> {
        let center = &self.centerline;
        self.walls.iter().find(|wall| match side {
            WallSide::Right => {
                wall.start().x() >= center.start().x() && wall.end().x() >= center.end().x()
            }
            WallSide::Left => {
                wall.start().x() <= center.start().x() && wall.end().x() <= center.end().x()
            }
        })
    }

    /// A copy of this channel with wall `index` (0 or 1) replaced.
    ///
    /// Out-of-range indices replace the right wall.
    #[must_use]
    pub const fn with_wall(&self, index: usize, wall: Line) -> Self {
        let walls = if index == 0 {
            [wall, self.walls[1]]
        } else {
            [self.walls[0], wall]
        };
        Self::from_parts(walls, self.centerline)
    }
}

/// Widen `centerline` into a channel `width` across.
///
/// Both walls are offset by `width / 2`, one to each side, then ordered by
/// start x so the wall order does not depend on the centerline's
/// orientation.
///
/// # Example
///
/// ```
/// use channel_lattice::{create_channel, Line, Point};
///
/// let centerline = Line::new(Point::new(0.0, 0.0), Point::new(0.0, 2.5));
/// let channel = create_channel(&centerline, 0.5);
///
/// assert_eq!(channel.walls()[0].start(), Point::new(-0.25, 0.0));
/// assert_eq!(channel.walls()[1].start(), Point::new(0.25, 0.0));
/// ```
#[must_use]
pub fn create_channel(centerline: &Line, width: f64) -> Channel {
    let half = width / 2.0;
    let backward = offset_line(centerline, half, true);
    let forward = offset_line(centerline, half, false);

    let walls = if forward.start().x() < backward.start().x() {
        [forward, backward]
    } else {
        [backward, forward]
    };

    Channel::from_parts(walls, *centerline)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::point::Point;
    use approx::assert_relative_eq;

    fn slanted() -> Line {
        Line::new(Point::new(-2.5, 0.0), Point::new(0.0, 2.5))
    }

    #[test]
    fn test_walls_are_half_width_from_center() {
        let centerline = slanted();
        let channel = create_channel(&centerline, 0.5);

        for wall in channel.walls() {
            let gap = centerline.start().vector_to(&wall.start()).norm();
            assert_relative_eq!(gap, 0.25, epsilon = 1e-4);
            assert_relative_eq!(wall.direction(), centerline.direction(), epsilon = 1e-4);
        }
    }

    #[test]
    fn test_walls_sorted_by_start_x() {
        for centerline in [slanted(), slanted().reversed()] {
            let channel = create_channel(&centerline, 1.0);
            let [left, right] = channel.walls();
            assert!(left.start().x() <= right.start().x());
        }
    }

    #[test]
    fn test_cross_walls_connect_wall_ends() {
        let channel = create_channel(&slanted(), 0.5);
        let [left, right] = channel.walls();

        assert_eq!(channel.bottom_wall(), Line::new(left.start(), right.start()));
        assert_eq!(channel.top_wall(), Line::new(left.end(), right.end()));
        assert_relative_eq!(channel.bottom_wall().length(), 0.5, epsilon = 1e-4);
    }

    #[test]
    fn test_lines_outline_order() {
        let channel = create_channel(&slanted(), 0.5);
        let lines = channel.lines();
        assert_eq!(lines[0], channel.walls()[0]);
        assert_eq!(lines[1], channel.walls()[1]);
        assert_eq!(lines[2], channel.top_wall());
        assert_eq!(lines[3], channel.bottom_wall());
    }

    #[test]
    fn test_wall_by_side() {
        let centerline = Line::new(Point::new(0.0, 0.0), Point::new(0.0, 5.0));
        let channel = create_channel(&centerline, 1.0);

        assert_eq!(channel.wall(WallSide::Left).unwrap().start().x(), -0.5);
        assert_eq!(channel.wall(WallSide::Right).unwrap().start().x(), 0.5);
    }

    #[test]
    fn test_with_wall_replaces_one_slot() {
        let channel = create_channel(&slanted(), 0.5);
        let replacement = Line::new(Point::new(9.0, 9.0), Point::new(10.0, 10.0));

        let changed = channel.with_wall(1, replacement);
        assert_eq!(changed.walls()[0], channel.walls()[0]);
        assert_eq!(changed.walls()[1], replacement);
        assert_eq!(changed.centerline(), channel.centerline());

        let changed = channel.with_wall(0, replacement);
        assert_eq!(changed.walls()[0], replacement);
        assert_eq!(changed.walls()[1], channel.walls()[1]);
    }
}
