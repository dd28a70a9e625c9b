//! Boundary naming and design backends for channel lattices.
//!
//! A [`Lattice`](channel_lattice::Lattice) is pure geometry. To become a
//! device it is handed to a design backend (a CAD kernel, a mesher, a
//! plotter) that extrudes it and needs to know which faces are inlets and
//! which is the outlet. This crate provides:
//!
//! - [`named_faces`] and [`exclude_points`], the only place boundary names
//!   are assigned
//! - [`DesignInterface`], the capability a backend implements
//! - [`RecordingInterface`], a backend that records every call
//! - [`SvgInterface`] and [`export_lattice_svg`] for quick 2D plots
//!
//! # Example
//!
//! ```
//! use channel_design::{DesignInterface, RecordingInterface, named_faces};
//! use channel_lattice::create_lattice;
//!
//! let lattice = create_lattice(&[2, 1, 2, 3, 2, 1, 1], 5.0, 0.5).unwrap();
//!
//! let faces = named_faces(&lattice).unwrap();
//! assert_eq!(faces.last().unwrap().name(), "outlet");
//!
//! let mut backend = RecordingInterface::new();
//! backend.create_geometry(&lattice, 0.1).unwrap();
//! assert_eq!(backend.lines.len(), lattice.lines().count());
//! ```
//!
//! # Feature Flags
//!
//! - `serde`: Serialization for named faces and export parameters

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![allow(clippy::module_name_repetitions, clippy::must_use_candidate)]

mod boundary;
mod error;
mod interface;
mod svg;

pub use boundary::{BoundaryKind, NamedFace, exclude_points, named_faces};
pub use error::{DesignError, DesignResult};
pub use interface::{DesignInterface, RecordingInterface, validate_extrusion_height};
pub use svg::{SvgExportParams, SvgInterface, export_lattice_svg};
