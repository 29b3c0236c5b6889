//! Candidate-point packing of payload-carrying items.
//!
//! Typical use: stage items in a [`ContentAccumulator`], sort them, then hand them to a
//! [`CanvasArray`], which opens as many canvases as needed. [`CanvasArray::collect`]
//! flattens the result and records the canvas index of every item in `origin().z`.

pub mod accumulator;
pub mod array;
pub mod container;
pub mod content;

pub use accumulator::ContentAccumulator;
pub use array::CanvasArray;
pub use container::Canvas;
pub use content::{Content, Coord, Size};
