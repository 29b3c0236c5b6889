use thiserror::Error;

#[derive(Debug, Error)]
pub enum BinPackError {
    #[error("Bin size {width}x{height} is too small to fit all areas (failed on {item_w}x{item_h})")]
    BinTooSmall {
        width: u32,
        height: u32,
        item_w: u32,
        item_h: u32,
    },
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Nothing to pack")]
    Empty,
    #[error("Out of space: placed {placed} of {total} items")]
    OutOfSpace { placed: usize, total: usize },
}

pub type Result<T> = std::result::Result<T, BinPackError>;
