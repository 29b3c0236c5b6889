use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use super::content::{Content, Coord};

/// One fixed-size container filled by candidate-point packing.
///
/// The canvas keeps a list of candidate points where the top-left corner of a new item may
/// go. Before each placement the list is sorted by squared distance from the origin (only
/// when it changed since the last sort), so items gravitate towards the top-left corner.
///
/// A placement tests each candidate point against every placed item, so one call costs
/// `O(points * placed)` and a batch is cubic in the number of items in the worst case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Canvas<T> {
    width: u32,
    height: u32,
    candidates: VecDeque<Coord>,
    contents: Vec<Content<T>>,
    dirty: bool,
}

impl<T> Canvas<T> {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            candidates: VecDeque::from([Coord::default()]),
            contents: Vec::new(),
            dirty: false,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Sets the canvas size. A canvas that holds items never shrinks: such a resize is
    /// ignored and `false` is returned.
    pub fn set_size(&mut self, width: u32, height: u32) -> bool {
        if !self.contents.is_empty() && (width < self.width || height < self.height) {
            warn!(
                old_w = self.width,
                old_h = self.height,
                width,
                height,
                placed = self.contents.len(),
                "refusing to shrink a non-empty canvas"
            );
            return false;
        }
        self.width = width;
        self.height = height;
        true
    }

    /// Items placed so far, in placement order.
    pub fn contents(&self) -> &[Content<T>] {
        &self.contents
    }

    pub fn into_contents(self) -> Vec<Content<T>> {
        self.contents
    }

    pub fn len(&self) -> usize {
        self.contents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    /// Candidate points as currently stored (not necessarily sorted).
    pub fn candidates(&self) -> impl Iterator<Item = &Coord> {
        self.candidates.iter()
    }

    /// Removes all items and resets the candidate list to the origin.
    pub fn clear(&mut self) {
        self.contents.clear();
        self.candidates.clear();
        self.candidates.push_back(Coord::default());
        self.dirty = false;
    }

    /// Sorts the candidate points closest-first if they changed since the last sort.
    /// The sort is stable, so equidistant points keep their insertion order.
    pub fn ensure_sorted(&mut self) {
        if !self.dirty {
            return;
        }
        self.candidates
            .make_contiguous()
            .sort_by_key(Coord::distance_sq);
        self.dirty = false;
    }

    /// Tries to place one item at the closest candidate point where it fits.
    /// On failure the item is handed back unchanged.
    pub fn try_place(&mut self, content: Content<T>) -> Result<(), Content<T>> {
        self.ensure_sorted();

        let original = content.origin();
        let mut item = content;
        for i in 0..self.candidates.len() {
            item.set_origin(self.candidates[i]);
            if self.fits(&item) {
                self.candidates.remove(i);
                self.commit(item);
                return Ok(());
            }
        }
        item.set_origin(original);
        Err(item)
    }

    /// Places every item in the given order; items that do not fit are appended to
    /// `remainder`. Returns true if everything was placed.
    ///
    /// `remainder` must be empty on entry.
    pub fn place<I>(&mut self, contents: I, remainder: &mut Vec<Content<T>>) -> bool
    where
        I: IntoIterator<Item = Content<T>>,
    {
        debug_assert!(remainder.is_empty(), "remainder must be empty");
        for content in contents {
            if let Err(rejected) = self.try_place(content) {
                remainder.push(rejected);
            }
        }
        remainder.is_empty()
    }

    fn fits(&self, item: &Content<T>) -> bool {
        let (origin, size) = (item.origin(), item.size());
        let right = origin.x as u64 + size.width as u64;
        let bottom = origin.y as u64 + size.height as u64;
        if right > self.width as u64 || bottom > self.height as u64 {
            return false;
        }
        !self.contents.iter().any(|placed| item.intersects(placed))
    }

    fn commit(&mut self, item: Content<T>) {
        let origin = item.origin();
        let extent = item.extent();
        trace!(
            x = origin.x,
            y = origin.y,
            w = item.size().width,
            h = item.size().height,
            "canvas place"
        );
        // Right of the item at its top edge, and below the item at its left edge.
        self.candidates.push_front(Coord::new(extent.x, origin.y));
        self.candidates.push_back(Coord::new(origin.x, extent.y));
        self.contents.push(item);
        self.dirty = true;
    }
}
