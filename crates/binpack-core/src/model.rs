use serde::{Deserialize, Serialize};

use crate::config::AlgorithmFamily;

/// Axis-aligned rectangle. `x,y` is the min corner; `w,h` are sizes.
///
/// The max corner is exclusive: a rectangle at `(0,0)` of size `10x10` ends at `(10,10)`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    /// Rectangle of size `w x h` anchored at the origin.
    pub fn with_size(w: u32, h: u32) -> Self {
        Self::new(0, 0, w, h)
    }

    /// Builds a rectangle from its min and (exclusive) max corners.
    /// Inverted corners produce an empty rectangle.
    pub fn from_corners(x1: u32, y1: u32, x2: u32, y2: u32) -> Self {
        Self::new(x1, y1, x2.saturating_sub(x1), y2.saturating_sub(y1))
    }

    /// Exclusive right edge (`x + w`), saturating at `u32::MAX`.
    pub fn x2(&self) -> u32 {
        self.x.saturating_add(self.w)
    }

    /// Exclusive bottom edge (`y + h`), saturating at `u32::MAX`.
    pub fn y2(&self) -> u32 {
        self.y.saturating_add(self.h)
    }

    // Exact max corner; never overflows.
    fn max_corner(&self) -> (u64, u64) {
        (self.x as u64 + self.w as u64, self.y as u64 + self.h as u64)
    }

    pub fn area(&self) -> u64 {
        (self.w as u64) * (self.h as u64)
    }

    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }

    /// True if `self` is no larger than `other` on both axes (position is ignored).
    pub fn fits_in(&self, other: &Rect) -> bool {
        self.w <= other.w && self.h <= other.h
    }

    /// True if the interiors overlap. Rectangles that only touch at an edge do not
    /// intersect, and an empty rectangle intersects nothing.
    pub fn intersects(&self, other: &Rect) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        let (ax2, ay2) = self.max_corner();
        let (bx2, by2) = other.max_corner();
        (self.x as u64) < bx2
            && (other.x as u64) < ax2
            && (self.y as u64) < by2
            && (other.y as u64) < ay2
    }

    /// Returns true if `r` is fully inside `self` (edges may coincide).
    pub fn contains(&self, r: &Rect) -> bool {
        let (ax2, ay2) = self.max_corner();
        let (bx2, by2) = r.max_corner();
        r.x >= self.x && r.y >= self.y && bx2 <= ax2 && by2 <= ay2
    }
}

/// A rectangle placed by one of the guillotine packers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PackedArea {
    /// Placed rectangle inside its bin.
    pub rect: Rect,
    /// Index of the rectangle in the batch the caller passed in.
    pub order: usize,
    /// Index of the bin the rectangle landed in (always 0 for `BinPacker`).
    pub bin: usize,
}

impl PackedArea {
    pub fn new(rect: Rect, order: usize) -> Self {
        Self { rect, order, bin: 0 }
    }

    pub fn area(&self) -> u64 {
        self.rect.area()
    }
}

/// A placed item within a page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Frame<K = String> {
    /// User-specified key (e.g., sprite name or glyph id).
    pub key: K,
    /// Placed rectangle within the page.
    pub frame: Rect,
    /// True if the item was rotated by the caller before placement.
    pub rotated: bool,
}

/// A single container of a layout: one guillotine bin or one canvas.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<K = String> {
    pub id: usize,
    pub width: u32,
    pub height: u32,
    pub frames: Vec<Frame<K>>,
}

/// Layout-level metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meta {
    /// Schema version of the exported layout; current: "1".
    pub schema_version: String,
    pub app: String,
    pub version: String,
    pub family: AlgorithmFamily,
    pub bin_size: (u32, u32),
    pub sorted: bool,
}

/// Result of a pipeline run: pages of placed frames plus metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Layout<K = String> {
    pub pages: Vec<Page<K>>,
    pub meta: Meta,
}

/// Statistics about packing efficiency.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PackStats {
    /// Number of pages (bins or canvases) in the layout.
    pub num_pages: usize,
    /// Number of frames placed.
    pub num_frames: usize,
    /// Sum of `width * height` over all pages.
    pub total_page_area: u64,
    /// Sum of frame areas.
    pub used_frame_area: u64,
    /// `used_frame_area / total_page_area` (0.0 to 1.0). Higher is better.
    pub occupancy: f64,
    /// Number of frames the caller rotated before placement.
    pub num_rotated: usize,
}

impl<K> Layout<K> {
    /// Computes packing statistics for this layout.
    pub fn stats(&self) -> PackStats {
        let mut num_frames = 0;
        let mut total_page_area = 0u64;
        let mut used_frame_area = 0u64;
        let mut num_rotated = 0;

        for page in &self.pages {
            total_page_area += (page.width as u64) * (page.height as u64);
            for frame in &page.frames {
                num_frames += 1;
                used_frame_area += frame.frame.area();
                if frame.rotated {
                    num_rotated += 1;
                }
            }
        }

        let occupancy = if total_page_area > 0 {
            used_frame_area as f64 / total_page_area as f64
        } else {
            0.0
        };

        PackStats {
            num_pages: self.pages.len(),
            num_frames,
            total_page_area,
            used_frame_area,
            occupancy,
            num_rotated,
        }
    }

    /// Total number of frames across all pages.
    pub fn frame_count(&self) -> usize {
        self.pages.iter().map(|p| p.frames.len()).sum()
    }
}

impl PackStats {
    /// Returns a human-readable summary of the statistics.
    pub fn summary(&self) -> String {
        format!(
            "Pages: {}, Frames: {}, Occupancy: {:.2}%, Total Area: {} px², Used Area: {} px², Rotated: {}",
            self.num_pages,
            self.num_frames,
            self.occupancy * 100.0,
            self.total_page_area,
            self.used_frame_area,
            self.num_rotated,
        )
    }

    /// Returns wasted space in pixels.
    pub fn wasted_area(&self) -> u64 {
        self.total_page_area.saturating_sub(self.used_frame_area)
    }

    /// Returns wasted space as a percentage (0.0 to 100.0).
    pub fn waste_percentage(&self) -> f64 {
        if self.total_page_area > 0 {
            (self.wasted_area() as f64 / self.total_page_area as f64) * 100.0
        } else {
            0.0
        }
    }
}
