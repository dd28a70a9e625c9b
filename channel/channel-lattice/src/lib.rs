//! Branching micro-channel lattice geometry.
//!
//! This crate turns a sequence of per-row node counts into a planar network
//! of channel walls, the 2D cross-section of a microfluidic device that is
//! later extruded, meshed, and simulated elsewhere.
//!
//! # Pipeline
//!
//! Data flows one way, every stage producing new immutable values:
//!
//! 1. **Rows**: [`create_layer`] places evenly spaced nodes on one y-level.
//! 2. **Connections**: [`connect_layers`] fans lines between two rows so
//!    every node of the larger row is reached.
//! 3. **Channels**: [`create_channel`] widens a centerline into two walls.
//! 4. **Channel layers**: [`create_joined_channel_layer`] miters channels
//!    that branch from a shared vertex; [`flatten_channel_layer`] cuts their
//!    ends flat against a row.
//! 5. **Lattice**: [`create_lattice`] stacks the channel layers and flattens
//!    the interior boundaries between them.
//!
//! [`random_layer_sequence`] draws constraint-valid row sequences for
//! exploring the design space.
//!
//! # Quick Start
//!
//! ```
//! use channel_lattice::create_lattice;
//!
//! let lattice = create_lattice(&[2, 1, 2, 3, 2, 1, 1], 5.0, 0.5).unwrap();
//! assert_eq!(lattice.len(), 6);
//!
//! for line in lattice.lines() {
//!     // Feed edges to a CAD kernel, a plotter, ...
//!     let _ = line.length();
//! }
//! ```
//!
//! # Precision
//!
//! Coordinates are rounded to five decimal places whenever a [`Point`] is
//! built, so shared vertices reached along different paths compare equal.
//!
//! # Layer 0 Crate
//!
//! No I/O, no global state. Every function is pure and safe to call from
//! several threads on separate inputs.
//!
//! # Feature Flags
//!
//! - `serde`: Serialization for all geometry and parameter types

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![allow(clippy::module_name_repetitions, clippy::must_use_candidate)]

mod assemble;
mod channel;
mod error;
mod lattice;
mod layer;
mod line;
mod params;
mod point;
mod sequence;

pub use assemble::{
    ChannelLayer, FlattenSide, SINGLE_NODE_CUT_HALF_WIDTH, create_channel_layer,
    create_joined_channel_layer, cut_channel, flatten_channel_layer, join_channels,
};
pub use channel::{Channel, WallSide, create_channel};
pub use error::{LatticeError, LatticeResult};
pub use lattice::{Lattice, build_lattice, create_lattice};
pub use layer::{ConnectedLayers, Layer, connect_layers, create_layer};
pub use line::{
    Line, LineEnd, alter_line, common_point, intersection, line_degrees, line_direction,
    line_length, offset_line, start_or_end,
};
pub use params::{LatticeParams, SamplerParams};
pub use point::{PRECISION, Point, offset_point, round_coordinate};
pub use sequence::{is_valid_sequence, random_layer_sequence, sample_layer_sequence};

// Re-export nalgebra types for convenience
pub use nalgebra::{Point2, Vector2};
