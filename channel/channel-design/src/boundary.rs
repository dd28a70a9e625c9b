//! Boundary face naming.
//!
//! Meshing and case-file generation refer to inlet and outlet faces by
//! name. These names are assigned here and nowhere else.

use std::fmt;

use channel_lattice::{Lattice, Line, Point};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{DesignError, DesignResult};

/// The role a named boundary face plays in the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BoundaryKind {
    /// Aqueous phase inlet, numbered from 1.
    AqueousInlet(usize),
    /// Organic phase inlet.
    OrganicInlet,
    /// The single outlet.
    Outlet,
}

impl BoundaryKind {
    /// Returns true for either kind of inlet.
    #[must_use]
    pub const fn is_inlet(&self) -> bool {
        matches!(self, Self::AqueousInlet(_) | Self::OrganicInlet)
    }
}

impl fmt::Display for BoundaryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AqueousInlet(n) => write!(f, "aqueous_inlet_{n}"),
            Self::OrganicInlet => f.write_str("organic_inlet"),
            Self::Outlet => f.write_str("outlet"),
        }
    }
}

/// A channel wall tagged with its boundary role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NamedFace {
    /// The wall segment forming the face.
    pub line: Line,
    /// What the face is.
    pub boundary: BoundaryKind,
}

impl NamedFace {
    /// The face name used by downstream meshing, e.g. `aqueous_inlet_2`.
    #[must_use]
    pub fn name(&self) -> String {
        self.boundary.to_string()
    }
}

/// Name the inlet and outlet faces of a lattice.
///
/// Every channel of the inlet layer contributes its bottom wall, alternating
/// aqueous and organic starting with aqueous. Aqueous inlets are numbered
/// 1, 2, ... in left-to-right order. The first channel of the outlet layer
/// contributes its top wall as `outlet`, which is always last.
///
/// # Errors
///
/// Returns [`DesignError::EmptyLattice`] if the lattice has no channel
/// layers or its outlet layer has no channels.
///
/// # Example
///
/// ```
/// use channel_design::named_faces;
/// use channel_lattice::create_lattice;
///
/// let lattice = create_lattice(&[2, 1, 1], 5.0, 0.5).unwrap();
/// let names: Vec<String> = named_faces(&lattice).unwrap().iter().map(|f| f.name()).collect();
/// assert_eq!(names, ["aqueous_inlet_1", "organic_inlet", "outlet"]);
/// ```
pub fn named_faces(lattice: &Lattice) -> DesignResult<Vec<NamedFace>> {
    let inlet = lattice.inlet_layer().ok_or(DesignError::EmptyLattice)?;
    let outlet = lattice
        .outlet_layer()
        .and_then(|layer| layer.channels().first())
        .ok_or(DesignError::EmptyLattice)?;

    let mut faces: Vec<NamedFace> = inlet
        .iter()
        .enumerate()
        .map(|(i, channel)| NamedFace {
            line: channel.bottom_wall(),
            boundary: if i % 2 == 0 {
                BoundaryKind::AqueousInlet(i / 2 + 1)
            } else {
                BoundaryKind::OrganicInlet
            },
        })
        .collect();

    faces.push(NamedFace {
        line: outlet.top_wall(),
        boundary: BoundaryKind::Outlet,
    });
    Ok(faces)
}

/// Endpoints of every named face, in face order.
///
/// Corner rounding must leave these vertices sharp. A point shared by two
/// faces appears once per face.
///
/// # Errors
///
/// See [`named_faces`].
pub fn exclude_points(lattice: &Lattice) -> DesignResult<Vec<Point>> {
    Ok(named_faces(lattice)?
        .iter()
        .flat_map(|face| face.line.points())
        .collect())
}
