//! Procedural **donut meshes**: a torus base plus an "icing" mesh cut from a copy
//! of it by a bounding-box half-space vertex selection.
//!
//! The cut is a pure function over owned data. A [`HalfSpaceSelector`] takes a
//! mesh's 8-corner local [`BoundingBox`], builds a plane through the box centre
//! facing along one box edge, and marks the vertices at least `keep_band`
//! (0.01 by default) in front of it. Deleting the bottom half is then "mark,
//! invert, delete": [`Mesh::delete_bottom_half`].
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//! - [**stl-io**](https://en.wikipedia.org/wiki/STL_(file_format)): `.stl` export
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64
//! - **parallel**: use rayon to classify vertices

#![forbid(unsafe_code)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod bounding_box;
pub mod config;
pub mod donut;
pub mod errors;
pub mod float_types;
pub mod io;
pub mod mesh;
pub mod plane;
pub mod scene;
pub mod selection;
pub mod selector;
pub mod triangulated;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use bounding_box::{BoundingBox, CutAxis};
pub use mesh::Mesh;
pub use selection::Selection;
pub use selector::{HalfSpacePartition, HalfSpaceSelector};
