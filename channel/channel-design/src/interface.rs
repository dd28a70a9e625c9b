//! The capability a design backend must provide to receive a lattice.

use channel_lattice::{Lattice, Line, Point};
use hashbrown::HashSet;
use tracing::debug;

use crate::boundary::{NamedFace, named_faces};
use crate::error::{DesignError, DesignResult};

/// A consumer of lattice geometry, such as a CAD kernel binding or a plotter.
///
/// Implementors receive vertices and edges one at a time, then turn a whole
/// lattice into a solid (or a drawing) of the given extrusion height. The
/// lattice crates never depend on a concrete implementation.
pub trait DesignInterface {
    /// Register a vertex.
    fn add_point(&mut self, point: Point);

    /// Register an edge.
    fn add_line(&mut self, line: Line);

    /// Build geometry for `lattice`, extruded to `extrusion_height`.
    ///
    /// # Errors
    ///
    /// Implementations return [`DesignError::InvalidExtrusionHeight`] for a
    /// height that is not positive and finite, and propagate naming or
    /// backend failures.
    fn create_geometry(&mut self, lattice: &Lattice, extrusion_height: f64) -> DesignResult<()>;

    /// Feed every distinct vertex of `lattice`, in first-seen order, then
    /// every line.
    ///
    /// Returns the number of distinct vertices added.
    fn trace_lattice(&mut self, lattice: &Lattice) -> usize {
        let mut seen = HashSet::new();
        for point in lattice.points() {
            if seen.insert(point) {
                self.add_point(point);
            }
        }
        for line in lattice.lines() {
            self.add_line(line);
        }
        debug!(points = seen.len(), "Traced lattice");
        seen.len()
    }
}

/// Check that an extrusion height is usable.
///
/// # Errors
///
/// Returns [`DesignError::InvalidExtrusionHeight`] unless the height is
/// positive and finite.
pub fn validate_extrusion_height(extrusion_height: f64) -> DesignResult<()> {
    if extrusion_height.is_finite() && extrusion_height > 0.0 {
        Ok(())
    } else {
        Err(DesignError::InvalidExtrusionHeight(extrusion_height))
    }
}

/// A design backend that only records what it is given.
///
/// Useful for tests and for inspecting exactly what a real backend would
/// receive.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordingInterface {
    /// Vertices in the order they were added.
    pub points: Vec<Point>,
    /// Edges in the order they were added.
    pub lines: Vec<Line>,
    /// Named faces of the most recent geometry.
    pub named_faces: Vec<NamedFace>,
    /// Extrusion height of every `create_geometry` call.
    pub extrusion_heights: Vec<f64>,
}

impl RecordingInterface {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl DesignInterface for RecordingInterface {
    fn add_point(&mut self, point: Point) {
        self.points.push(point);
    }

    fn add_line(&mut self, line: Line) {
        self.lines.push(line);
    }

    fn create_geometry(&mut self, lattice: &Lattice, extrusion_height: f64) -> DesignResult<()> {
        validate_extrusion_height(extrusion_height)?;
        self.named_faces = named_faces(lattice)?;
        self.trace_lattice(lattice);
        self.extrusion_heights.push(extrusion_height);
        Ok(())
    }
}
