use crate::model::Rect;
use tracing::{trace, warn};

/// Free space of a single guillotine bin.
///
/// Regions are kept sorted by ascending area, so a first-fit scan tries the smallest
/// adequate region first. The scan is first-fit by list order, not an exhaustive best fit.
///
/// Each placement scans every free region, so a batch costs `O(items * regions)`; region
/// count grows by at most one per placement, which makes a batch quadratic in the worst case.
#[derive(Debug, Clone)]
pub struct GuillotineFreeList {
    width: u32,
    height: u32,
    free: Vec<Rect>,
    // Seeded once per bin; an empty list on a seeded bin means the bin is full.
    seeded: bool,
}

impl GuillotineFreeList {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            free: Vec::new(),
            seeded: false,
        }
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn set_size(&mut self, width: u32, height: u32) {
        if self.seeded {
            warn!(
                old_w = self.width,
                old_h = self.height,
                width,
                height,
                "resizing a bin that already holds placements"
            );
        }
        self.width = width;
        self.height = height;
    }

    /// Currently available regions, smallest first.
    pub fn free_rects(&self) -> &[Rect] {
        &self.free
    }

    /// True once the first placement has claimed space in this bin.
    pub fn is_seeded(&self) -> bool {
        self.seeded
    }

    /// Forgets all free regions; the next placement starts from an empty bin.
    pub fn clear(&mut self) {
        self.free.clear();
        self.seeded = false;
    }

    /// True if a `w x h` rectangle fits into an empty bin of this size.
    pub fn fits_empty(&self, w: u32, h: u32) -> bool {
        w <= self.width && h <= self.height
    }

    /// Places a `w x h` rectangle at the top-left corner of the first free region that can
    /// hold it and returns the placed rectangle, or `None` if no region fits.
    pub fn place(&mut self, w: u32, h: u32) -> Option<Rect> {
        if !self.seeded {
            if self.width > 0 && self.height > 0 {
                self.free.push(Rect::with_size(self.width, self.height));
            }
            self.seeded = true;
        }

        // Degenerate items occupy no space.
        if (w == 0 || h == 0) && self.fits_empty(w, h) {
            return Some(Rect::with_size(w, h));
        }

        let wanted = Rect::with_size(w, h);
        let idx = self.free.iter().position(|fr| wanted.fits_in(fr))?;
        let region = self.free[idx];
        let placed = Rect::new(region.x, region.y, w, h);

        let (kept, split_off) = split(&region, w, h);
        if kept.is_empty() {
            self.free.swap_remove(idx);
        } else {
            self.free[idx] = kept;
        }
        if !split_off.is_empty() {
            self.free.push(split_off);
        }
        self.free.sort_by_key(Rect::area);

        trace!(x = placed.x, y = placed.y, w, h, free = self.free.len(), "guillotine place");
        Some(placed)
    }
}

/// Splits what remains of `region` after a `w x h` rectangle is placed at its top-left
/// corner. Returns `(kept, split_off)`; both lie below/right of the placed rectangle and
/// either may be empty.
///
/// Of the two guillotine cuts, picks the one whose larger leftover piece is larger.
fn split(region: &Rect, w: u32, h: u32) -> (Rect, Rect) {
    let (rw, rh) = (region.w as u64, region.h as u64);
    let (iw, ih) = (w as u64, h as u64);
    let right = rw - iw;
    let bottom = rh - ih;

    // Vertical cut: item-wide strip below, full-height strip to the right.
    let below_item = iw * bottom;
    let right_full = right * rh;
    // Horizontal cut: item-high strip to the right, full-width strip below.
    let right_item = right * ih;
    let below_full = rw * bottom;

    if below_item.max(right_full) > right_item.max(below_full) {
        let kept = Rect::new(region.x, region.y + h, w, region.h - h);
        let split_off = Rect::new(region.x + w, region.y, region.w - w, region.h);
        (kept, split_off)
    } else {
        let kept = Rect::new(region.x, region.y + h, region.w, region.h - h);
        let split_off = Rect::new(region.x + w, region.y, region.w - w, h);
        (kept, split_off)
    }
}
