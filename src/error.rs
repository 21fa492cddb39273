use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::game_core::Cell;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("tile size must be positive")]
    ZeroTileSize,
    #[error("tick interval must be positive")]
    ZeroTickInterval,
    #[error("grid {columns}x{rows} is too small, need at least {min_columns}x{min_rows}")]
    GridTooSmall {
        columns: i32,
        rows: i32,
        min_columns: i32,
        min_rows: i32,
    },
    #[error("canvas {width}x{height} with tile size {tile_size} gives a grid too large to address")]
    GridTooLarge {
        width: u32,
        height: u32,
        tile_size: u32,
    },
    #[error("unknown log level {0:?}")]
    LogLevel(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("body must have at least one segment")]
    EmptyBody,
    #[error("segment {index} at ({}, {}) is off the grid", .cell.col, .cell.row)]
    SegmentOutOfBounds { index: usize, cell: Cell },
    #[error("segment {index} at ({}, {}) overlaps an earlier segment", .cell.col, .cell.row)]
    DuplicateSegment { index: usize, cell: Cell },
    #[error("segment {index} is not adjacent to the segment before it")]
    Disconnected { index: usize },
    #[error("food at ({}, {}) is off the grid", .0.col, .0.row)]
    FoodOutOfBounds(Cell),
    #[error("food at ({}, {}) lies on the body", .0.col, .0.row)]
    FoodOnBody(Cell),
}
