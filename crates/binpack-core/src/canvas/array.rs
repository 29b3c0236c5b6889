use serde::{Deserialize, Serialize};
use tracing::debug;

use super::container::Canvas;
use super::content::{Content, Coord};
use crate::error::{BinPackError, Result};

/// A growing sequence of equally sized canvases.
///
/// Existing canvases are tried first; when items are left over, new canvases are appended
/// until everything is placed or the leftovers are too large for an empty canvas.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CanvasArray<T> {
    width: u32,
    height: u32,
    canvases: Vec<Canvas<T>>,
}

impl<T> CanvasArray<T> {
    /// Creates an array holding one empty `width x height` canvas.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            canvases: vec![Canvas::new(width, height)],
        }
    }

    /// Builds an array from existing canvases. New canvases take the size of the first one.
    pub fn from_canvases(canvases: Vec<Canvas<T>>) -> Result<Self> {
        let Some(first) = canvases.first() else {
            return Err(BinPackError::InvalidInput(
                "canvas array needs at least one canvas".into(),
            ));
        };
        Ok(Self {
            width: first.width(),
            height: first.height(),
            canvases,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Resizes every canvas and the canvases opened from now on.
    ///
    /// Canvases that hold items never shrink: if the new size is smaller on either axis and
    /// any canvas is non-empty, nothing changes and `false` is returned.
    pub fn set_size(&mut self, width: u32, height: u32) -> bool {
        let shrinks = width < self.width || height < self.height;
        if shrinks && self.canvases.iter().any(|c| !c.is_empty()) {
            debug!(width, height, "refusing to shrink a canvas array holding items");
            return false;
        }
        self.width = width;
        self.height = height;
        for canvas in &mut self.canvases {
            canvas.set_size(width, height);
        }
        true
    }

    pub fn canvases(&self) -> &[Canvas<T>] {
        &self.canvases
    }

    pub fn into_canvases(self) -> Vec<Canvas<T>> {
        self.canvases
    }

    /// Number of canvases.
    pub fn len(&self) -> usize {
        self.canvases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.canvases.is_empty()
    }

    /// Drops all canvases and starts over with a single empty one.
    pub fn clear(&mut self) {
        self.canvases.clear();
        self.canvases.push(Canvas::new(self.width, self.height));
    }

    /// Places items onto the existing canvases only. Each canvas receives what the previous
    /// one could not take; leftovers end up in `remainder`, which must be empty on entry.
    pub fn place_existing<I>(&mut self, contents: I, remainder: &mut Vec<Content<T>>) -> bool
    where
        I: IntoIterator<Item = Content<T>>,
    {
        debug_assert!(remainder.is_empty(), "remainder must be empty");
        let mut items: Vec<Content<T>> = contents.into_iter().collect();
        for canvas in &mut self.canvases {
            if items.is_empty() {
                break;
            }
            let mut rest = Vec::new();
            canvas.place(items, &mut rest);
            items = rest;
        }
        remainder.extend(items);
        remainder.is_empty()
    }

    /// Places items onto existing canvases, appending new canvases as needed.
    ///
    /// Returns false only when some items do not fit into an empty canvas; those items are
    /// left in `remainder` (which must be empty on entry) and everything else is placed.
    pub fn place<I>(&mut self, contents: I, remainder: &mut Vec<Content<T>>) -> bool
    where
        I: IntoIterator<Item = Content<T>>,
    {
        debug_assert!(remainder.is_empty(), "remainder must be empty");
        let mut items = Vec::new();
        if self.place_existing(contents, &mut items) {
            return true;
        }

        while !items.is_empty() {
            let mut canvas = Canvas::new(self.width, self.height);
            let mut rest = Vec::new();
            canvas.place(items, &mut rest);
            if canvas.is_empty() {
                debug!(
                    unplaced = rest.len(),
                    width = self.width,
                    height = self.height,
                    "items do not fit an empty canvas"
                );
                items = rest;
                break;
            }
            self.canvases.push(canvas);
            debug!(canvas = self.canvases.len() - 1, left = rest.len(), "appended canvas");
            items = rest;
        }

        remainder.extend(items);
        remainder.is_empty()
    }
}

impl<T: Clone> CanvasArray<T> {
    /// Copies every placed item into `out`, stamping `origin.z` with the index of its
    /// canvas. Returns the number of items appended.
    pub fn collect<E>(&self, out: &mut E) -> usize
    where
        E: Extend<Content<T>>,
    {
        let mut count = 0;
        for (z, canvas) in self.canvases.iter().enumerate() {
            out.extend(canvas.contents().iter().map(|content| {
                let mut item = content.clone();
                let origin = item.origin();
                item.set_origin(Coord::with_z(origin.x, origin.y, z as u32));
                item
            }));
            count += canvas.len();
        }
        count
    }
}
