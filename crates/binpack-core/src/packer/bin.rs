use super::Packer;
use super::guillotine::GuillotineFreeList;
use crate::error::{BinPackError, Result};
use crate::model::{PackedArea, Rect};
use tracing::debug;

/// Packs rectangles into exactly one bin using guillotine splits.
#[derive(Debug, Clone)]
pub struct BinPacker {
    free: GuillotineFreeList,
}

impl BinPacker {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            free: GuillotineFreeList::new(width, height),
        }
    }

    /// Sets the bin size, builder style.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.free.set_size(width, height);
        self
    }

    pub fn width(&self) -> u32 {
        self.free.size().0
    }

    pub fn height(&self) -> u32 {
        self.free.size().1
    }

    pub fn free_list(&self) -> &GuillotineFreeList {
        &self.free
    }
}

impl Packer for BinPacker {
    fn size(&self) -> (u32, u32) {
        self.free.size()
    }

    fn set_size(&mut self, width: u32, height: u32) {
        self.free.set_size(width, height);
    }

    fn insert(&mut self, areas: &[Rect]) -> Result<Vec<PackedArea>> {
        let mut packed = largest_first(areas);
        for area in packed.iter_mut() {
            let Some(placed) = self.free.place(area.rect.w, area.rect.h) else {
                return Err(too_small(&self.free, &area.rect));
            };
            area.rect = placed;
        }
        packed.sort_by_key(|a| a.order);
        Ok(packed)
    }

    fn insert_one(&mut self, area: Rect) -> Result<PackedArea> {
        match self.free.place(area.w, area.h) {
            Some(placed) => Ok(PackedArea::new(placed, 0)),
            None => Err(too_small(&self.free, &area)),
        }
    }

    fn clear(&mut self) {
        self.free.clear();
    }
}

/// Packs rectangles with guillotine splits, opening a new bin whenever the current one
/// cannot take the next rectangle.
///
/// Only the current bin is ever filled: once a bin is left behind its free space is
/// discarded and never revisited.
#[derive(Debug, Clone)]
pub struct MultiBinPacker {
    free: GuillotineFreeList,
    bin: usize,
}

impl MultiBinPacker {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            free: GuillotineFreeList::new(width, height),
            bin: 0,
        }
    }

    /// Sets the bin size, builder style.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.free.set_size(width, height);
        self
    }

    pub fn width(&self) -> u32 {
        self.free.size().0
    }

    pub fn height(&self) -> u32 {
        self.free.size().1
    }

    /// Index of the bin currently being filled.
    pub fn current_bin(&self) -> usize {
        self.bin
    }

    /// Number of bins opened so far (0 before the first placement).
    pub fn bin_count(&self) -> usize {
        if self.bin == 0 && !self.free.is_seeded() {
            0
        } else {
            self.bin + 1
        }
    }

    pub fn free_list(&self) -> &GuillotineFreeList {
        &self.free
    }

    fn place(&mut self, area: &Rect) -> Result<(Rect, usize)> {
        if let Some(placed) = self.free.place(area.w, area.h) {
            return Ok((placed, self.bin));
        }
        // Larger than an empty bin: fail without discarding the current one.
        if !self.free.fits_empty(area.w, area.h) {
            return Err(too_small(&self.free, area));
        }
        self.free.clear();
        self.bin += 1;
        debug!(bin = self.bin, w = area.w, h = area.h, "opened new bin");
        match self.free.place(area.w, area.h) {
            Some(placed) => Ok((placed, self.bin)),
            None => Err(too_small(&self.free, area)),
        }
    }
}

impl Packer for MultiBinPacker {
    fn size(&self) -> (u32, u32) {
        self.free.size()
    }

    fn set_size(&mut self, width: u32, height: u32) {
        self.free.set_size(width, height);
    }

    fn insert(&mut self, areas: &[Rect]) -> Result<Vec<PackedArea>> {
        let mut packed = largest_first(areas);
        for area in packed.iter_mut() {
            let (placed, bin) = self.place(&area.rect)?;
            area.rect = placed;
            area.bin = bin;
        }
        packed.sort_by_key(|a| a.order);
        Ok(packed)
    }

    fn insert_one(&mut self, area: Rect) -> Result<PackedArea> {
        let (placed, bin) = self.place(&area)?;
        Ok(PackedArea {
            rect: placed,
            order: 0,
            bin,
        })
    }

    fn clear(&mut self) {
        self.free.clear();
        self.bin = 0;
    }
}

/// Tags each input with its index and orders the batch by descending area; equal areas
/// keep their input order.
fn largest_first(areas: &[Rect]) -> Vec<PackedArea> {
    let mut packed: Vec<PackedArea> = areas
        .iter()
        .enumerate()
        .map(|(order, a)| PackedArea::new(Rect::with_size(a.w, a.h), order))
        .collect();
    packed.sort_by(|a, b| b.area().cmp(&a.area()).then_with(|| a.order.cmp(&b.order)));
    packed
}

fn too_small(free: &GuillotineFreeList, item: &Rect) -> BinPackError {
    let (width, height) = free.size();
    debug!(width, height, item_w = item.w, item_h = item.h, "bin too small");
    BinPackError::BinTooSmall {
        width,
        height,
        item_w: item.w,
        item_h: item.h,
    }
}
