use serde::{Deserialize, Serialize};

use crate::model::Rect;

/// Integer position. `z` carries the canvas index once contents are collected.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    pub x: u32,
    pub y: u32,
    pub z: u32,
}

impl Coord {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y, z: 0 }
    }

    pub fn with_z(x: u32, y: u32, z: u32) -> Self {
        Self { x, y, z }
    }

    /// Squared distance from the origin in the xy plane.
    pub fn distance_sq(&self) -> u64 {
        let (x, y) = (self.x as u64, self.y as u64);
        (x * x).saturating_add(y * y)
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// An item for the candidate-point packer: a size, a position and an opaque payload.
///
/// The extent is always derived from `origin + size`, never stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Content<T> {
    origin: Coord,
    size: Size,
    rotated: bool,
    pub payload: T,
}

impl<T> Content<T> {
    pub fn new(payload: T, size: Size) -> Self {
        Self {
            origin: Coord::default(),
            size,
            rotated: false,
            payload,
        }
    }

    pub fn with_origin(mut self, origin: Coord) -> Self {
        self.origin = origin;
        self
    }

    pub fn origin(&self) -> Coord {
        self.origin
    }

    pub fn set_origin(&mut self, origin: Coord) {
        self.origin = origin;
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    /// Exclusive bottom-right corner, saturating at `u32::MAX` on either axis.
    pub fn extent(&self) -> Coord {
        Coord::with_z(
            self.origin.x.saturating_add(self.size.width),
            self.origin.y.saturating_add(self.size.height),
            self.origin.z,
        )
    }

    /// Index of the canvas this content was collected from.
    pub fn canvas_index(&self) -> u32 {
        self.origin.z
    }

    pub fn rotated(&self) -> bool {
        self.rotated
    }

    /// Swaps width and height and flips the rotated flag.
    ///
    /// The packer never rotates on its own; callers rotate before placing.
    pub fn rotate(&mut self) {
        self.rotated = !self.rotated;
        self.size = Size::new(self.size.height, self.size.width);
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.origin.x, self.origin.y, self.size.width, self.size.height)
    }

    /// Overlap test on both axes; touching edges do not intersect.
    pub fn intersects<U>(&self, other: &Content<U>) -> bool {
        self.rect().intersects(&other.rect())
    }

    pub fn into_payload(self) -> T {
        self.payload
    }
}
