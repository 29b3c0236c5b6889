use crate::canvas::{CanvasArray, Content, ContentAccumulator, Size};
use crate::config::{AlgorithmFamily, PackerConfig};
use crate::error::{BinPackError, Result};
use crate::model::{Frame, Layout, Meta, Page, Rect};
use crate::packer::{BinPacker, MultiBinPacker, Packer};
use tracing::{debug, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Layout-only item: a key, a size and whether to rotate it by 90° before placement.
#[derive(Debug, Clone)]
pub struct LayoutItem<K = String> {
    pub key: K,
    pub w: u32,
    pub h: u32,
    pub rotate: bool,
}

impl<K> LayoutItem<K> {
    pub fn new(key: K, w: u32, h: u32) -> Self {
        Self {
            key,
            w,
            h,
            rotate: false,
        }
    }
}

#[instrument(skip_all)]
/// Packs `(key, width, height)` triples into pages using configuration `cfg`.
pub fn pack_layout<K>(items: Vec<(K, u32, u32)>, cfg: PackerConfig) -> Result<Layout<K>> {
    let items = items
        .into_iter()
        .map(|(key, w, h)| LayoutItem::new(key, w, h))
        .collect();
    pack_layout_items(items, cfg)
}

#[instrument(skip_all)]
/// Packs layout items into pages.
///
/// Notes:
/// - Guillotine families sort by area internally; `sort_contents` only affects `Canvas`.
/// - Within each page, frames are listed in input order.
/// - `Guillotine` fails with `BinTooSmall` if the batch does not fit one bin; `Canvas`
///   fails with `OutOfSpace` if some item is larger than a canvas.
pub fn pack_layout_items<K>(items: Vec<LayoutItem<K>>, cfg: PackerConfig) -> Result<Layout<K>> {
    cfg.validate()?;

    if items.is_empty() {
        return Err(BinPackError::Empty);
    }
    let total = items.len();

    let pages = match cfg.family {
        AlgorithmFamily::Guillotine => {
            pack_guillotine(items, &mut BinPacker::new(cfg.width, cfg.height))?
        }
        AlgorithmFamily::MultiBin => {
            pack_guillotine(items, &mut MultiBinPacker::new(cfg.width, cfg.height))?
        }
        AlgorithmFamily::Canvas => pack_canvas(items, &cfg)?,
    };
    debug!(family = %cfg.family, items = total, pages = pages.len(), "layout packed");

    let meta = Meta {
        schema_version: "1".into(),
        app: "binpack".into(),
        version: env!("CARGO_PKG_VERSION").into(),
        family: cfg.family,
        bin_size: (cfg.width, cfg.height),
        sorted: cfg.family != AlgorithmFamily::Canvas || cfg.sort_contents,
    };
    Ok(Layout { pages, meta })
}

/// Packs several independent batches, each with its own packer.
/// With the `parallel` feature the batches are packed on the rayon thread pool.
#[cfg(feature = "parallel")]
pub fn pack_layouts<K: Send>(
    batches: Vec<Vec<(K, u32, u32)>>,
    cfg: &PackerConfig,
) -> Vec<Result<Layout<K>>> {
    batches
        .into_par_iter()
        .map(|batch| pack_layout(batch, cfg.clone()))
        .collect()
}

/// Packs several independent batches, each with its own packer.
/// With the `parallel` feature the batches are packed on the rayon thread pool.
#[cfg(not(feature = "parallel"))]
pub fn pack_layouts<K>(
    batches: Vec<Vec<(K, u32, u32)>>,
    cfg: &PackerConfig,
) -> Vec<Result<Layout<K>>> {
    batches
        .into_iter()
        .map(|batch| pack_layout(batch, cfg.clone()))
        .collect()
}

fn oriented<K>(item: &LayoutItem<K>) -> (u32, u32) {
    if item.rotate {
        (item.h, item.w)
    } else {
        (item.w, item.h)
    }
}

fn pack_guillotine<K>(items: Vec<LayoutItem<K>>, packer: &mut dyn Packer) -> Result<Vec<Page<K>>> {
    let (width, height) = packer.size();
    let rects: Vec<Rect> = items
        .iter()
        .map(|it| {
            let (w, h) = oriented(it);
            Rect::with_size(w, h)
        })
        .collect();
    let packed = packer.insert(&rects)?;

    let mut pages: Vec<Page<K>> = Vec::new();
    for (item, area) in items.into_iter().zip(packed) {
        while pages.len() <= area.bin {
            let id = pages.len();
            pages.push(Page {
                id,
                width,
                height,
                frames: Vec::new(),
            });
        }
        pages[area.bin].frames.push(Frame {
            key: item.key,
            frame: area.rect,
            rotated: item.rotate,
        });
    }
    Ok(pages)
}

fn pack_canvas<K>(items: Vec<LayoutItem<K>>, cfg: &PackerConfig) -> Result<Vec<Page<K>>> {
    let total = items.len();
    let mut staged = ContentAccumulator::new();
    for (index, item) in items.into_iter().enumerate() {
        let mut content = Content::new((index, item.key), Size::new(item.w, item.h));
        if item.rotate {
            content.rotate();
        }
        staged += content;
    }
    if cfg.sort_contents {
        staged.sort();
    }

    let mut array = CanvasArray::new(cfg.width, cfg.height);
    let mut remainder = Vec::new();
    if !array.place(staged, &mut remainder) {
        return Err(BinPackError::OutOfSpace {
            placed: total - remainder.len(),
            total,
        });
    }

    let pages = array
        .into_canvases()
        .into_iter()
        .enumerate()
        .map(|(id, canvas)| {
            let mut placed = canvas.into_contents();
            placed.sort_by_key(|c| c.payload.0);
            let frames = placed
                .into_iter()
                .map(|c| {
                    let frame = c.rect();
                    let rotated = c.rotated();
                    Frame {
                        key: c.into_payload().1,
                        frame,
                        rotated,
                    }
                })
                .collect();
            Page {
                id,
                width: cfg.width,
                height: cfg.height,
                frames,
            }
        })
        .collect();
    Ok(pages)
}
