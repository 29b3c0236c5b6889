use crate::error::Result;
use crate::model::{PackedArea, Rect};

pub mod bin;
pub mod guillotine;

pub use bin::{BinPacker, MultiBinPacker};
pub use guillotine::GuillotineFreeList;

/// A packer places rectangles into fixed-size bins.
///
/// Implementations must never return overlapping rectangles within one bin and must keep
/// every placement inside `[0, width] x [0, height]`. Insertion is online: successive calls
/// keep filling the same free space until `clear` is called.
pub trait Packer {
    /// Returns the configured bin size as `(width, height)`.
    fn size(&self) -> (u32, u32);
    /// Sets the bin size. Must be called before the first placement; resizing a bin that
    /// already holds placements is unsupported.
    fn set_size(&mut self, width: u32, height: u32);
    /// Packs a batch and returns one `PackedArea` per input, in input order.
    /// Fails with `BinTooSmall` without returning partial results. Space claimed before the
    /// failing rectangle stays claimed; call `clear` before retrying.
    fn insert(&mut self, areas: &[Rect]) -> Result<Vec<PackedArea>>;
    /// Packs a single rectangle.
    fn insert_one(&mut self, area: Rect) -> Result<PackedArea>;
    /// Resets the packer to its initial empty state.
    fn clear(&mut self);
}
