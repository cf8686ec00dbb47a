//! Fixed-size tile grid and the BFS distance field produced over it.

use crate::error::GridError;
use crate::types::{Pos, TileKind};

/// A `rows x cols` matrix of tile tags. Dimensions never change after construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    tiles: Vec<TileKind>,
}

impl Grid {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols, tiles: vec![TileKind::Wall; rows * cols] }
    }

    /// Builds a grid from glyph rows (see [`TileKind::glyph`]). Unknown glyphs become walls,
    /// short rows are padded with walls.
    pub fn from_glyph_rows(lines: &[&str]) -> Self {
        let rows = lines.len();
        let cols = lines.iter().map(|line| line.chars().count()).max().unwrap_or(0);
        let mut grid = Self::new(rows, cols);
        for (y, line) in lines.iter().enumerate() {
            for (x, glyph) in line.chars().enumerate() {
                grid.tiles[y * cols + x] = TileKind::from_glyph(glyph).unwrap_or(TileKind::Wall);
            }
        }
        grid
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.cols && (pos.y as usize) < self.rows
    }

    pub fn get(&self, pos: Pos) -> Result<TileKind, GridError> {
        let index = self.index(pos)?;
        Ok(self.tiles[index])
    }

    pub fn set(&mut self, pos: Pos, tile: TileKind) -> Result<(), GridError> {
        let index = self.index(pos)?;
        self.tiles[index] = tile;
        Ok(())
    }

    /// Like [`Grid::get`] but treats anything outside the grid as `Wall`.
    pub fn tile_or_wall(&self, pos: Pos) -> TileKind {
        self.get(pos).unwrap_or(TileKind::Wall)
    }

    pub fn positions(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..self.rows)
            .flat_map(move |y| (0..self.cols).map(move |x| Pos { y: y as i32, x: x as i32 }))
    }

    /// Row-major positions currently tagged with any of `tiles`.
    pub fn positions_of(&self, tiles: &[TileKind]) -> Vec<Pos> {
        self.positions().filter(|&pos| tiles.contains(&self.tile_or_wall(pos))).collect()
    }

    pub fn count(&self, tile: TileKind) -> usize {
        self.tiles.iter().filter(|&&candidate| candidate == tile).count()
    }

    pub fn tiles(&self) -> &[TileKind] {
        &self.tiles
    }

    pub fn render_ascii(&self) -> String {
        let mut out = String::with_capacity(self.rows * (self.cols + 1));
        for row in self.tiles.chunks(self.cols.max(1)) {
            out.extend(row.iter().map(|tile| tile.glyph()));
            out.push('\n');
        }
        out
    }

    pub(crate) fn index(&self, pos: Pos) -> Result<usize, GridError> {
        if !self.in_bounds(pos) {
            return Err(GridError::OutOfBounds { pos, rows: self.rows, cols: self.cols });
        }
        Ok((pos.y as usize) * self.cols + (pos.x as usize))
    }
}

/// BFS step counts per cell; `-1` marks cells the traversal never reached.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DistanceField {
    rows: usize,
    cols: usize,
    distances: Vec<i32>,
}

impl DistanceField {
    pub const UNREACHED: i32 = -1;

    pub(crate) fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols, distances: vec![Self::UNREACHED; rows * cols] }
    }

    /// Distance at `pos`, or `None` when `pos` lies outside the field.
    pub fn get(&self, pos: Pos) -> Option<i32> {
        if pos.x < 0 || pos.y < 0 || pos.x as usize >= self.cols || pos.y as usize >= self.rows {
            return None;
        }
        Some(self.distances[(pos.y as usize) * self.cols + (pos.x as usize)])
    }

    pub fn is_reached(&self, pos: Pos) -> bool {
        self.get(pos).is_some_and(|distance| distance >= 0)
    }

    pub(crate) fn set(&mut self, index: usize, distance: i32) {
        self.distances[index] = distance;
    }

    pub(crate) fn at_index(&self, index: usize) -> i32 {
        self.distances[index]
    }
}
