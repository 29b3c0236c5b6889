//! Deterministic 2D rectangle bin packing.
//!
//! - Guillotine: `BinPacker` (one bin, all-or-nothing) and `MultiBinPacker` (opens bins as needed)
//! - Candidate points: `Canvas` / `CanvasArray` carry arbitrary payloads and grow on demand
//! - Pipeline: `pack_layout` runs either strategy and returns pages of frames
//!
//! Everything is synchronous and single-threaded; use one packer per batch to pack in parallel.
//!
//! Quick example:
//! ```
//! use binpack_core::prelude::*;
//!
//! let mut packer = MultiBinPacker::new(10, 10);
//! let rects = vec![Rect::with_size(10, 10); 3];
//! let packed = packer.insert(&rects).unwrap();
//! let bins: Vec<usize> = packed.iter().map(|p| p.bin).collect();
//! assert_eq!(bins, vec![0, 1, 2]);
//! ```

pub mod canvas;
pub mod config;
pub mod error;
pub mod export;
pub mod model;
pub mod packer;
pub mod pipeline;

pub use canvas::*;
pub use config::*;
pub use error::*;
pub use export::*;
pub use model::*;
pub use packer::*;
pub use pipeline::*;

/// Convenience prelude for common types and functions.
/// Importing `binpack_core::prelude::*` brings the primary APIs into scope.
pub mod prelude {
    pub use crate::canvas::{Canvas, CanvasArray, Content, ContentAccumulator, Coord, Size};
    pub use crate::config::{AlgorithmFamily, PackerConfig, PackerConfigBuilder};
    pub use crate::error::{BinPackError, Result};
    pub use crate::model::{Frame, Layout, PackStats, PackedArea, Page, Rect};
    pub use crate::packer::{BinPacker, GuillotineFreeList, MultiBinPacker, Packer};
    pub use crate::pipeline::{LayoutItem, pack_layout, pack_layout_items, pack_layouts};
}
