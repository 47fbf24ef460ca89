//! Planting grid
//!
//! A bed is a rows × cols matrix of optional placed plants. Rows arriving from
//! storage may be ragged; neighbor enumeration checks every coordinate against
//! the actual row length, so a malformed grid just shows fewer neighbors.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// (row, col)
pub type CellPos = (usize, usize);

/// Moore neighborhood offsets in enumeration order: NW, N, NE, W, E, SW, S, SE
const MOORE_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// A plant placed in a grid cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedPlant {
    /// Display name shown in alerts
    pub name: String,
    /// Catalog key; blank means "same as name"
    #[serde(default)]
    pub key: String,
}

impl PlacedPlant {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), key: String::new() }
    }

    pub fn with_key(name: impl Into<String>, key: impl Into<String>) -> Self {
        Self { name: name.into(), key: key.into() }
    }

    /// Key used against both catalogs
    pub fn lookup_key(&self) -> &str {
        if self.key.trim().is_empty() {
            &self.name
        } else {
            &self.key
        }
    }
}

/// Occupied neighbor of a cell
pub type Neighbor<'a> = (CellPos, &'a PlacedPlant);

/// Rectangular (or, from storage, possibly ragged) bed layout
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlantingGrid {
    cells: Vec<Vec<Option<PlacedPlant>>>,
}

impl PlantingGrid {
    /// Empty rows × cols grid
    ///
    /// # Panics
    /// If either dimension is zero.
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(rows >= 1 && cols >= 1, "grid must be at least 1×1, got {}×{}", rows, cols);
        Self { cells: vec![vec![None; cols]; rows] }
    }

    /// Wrap rows as stored; rows may differ in length
    pub fn from_rows(cells: Vec<Vec<Option<PlacedPlant>>>) -> Self {
        Self { cells }
    }

    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    /// Widest row length
    pub fn cols(&self) -> usize {
        self.cells.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Plant at (row, col); None for empty or out-of-range cells
    pub fn get(&self, row: usize, col: usize) -> Option<&PlacedPlant> {
        self.cells.get(row)?.get(col)?.as_ref()
    }

    /// Place a plant, replacing whatever was there
    ///
    /// # Panics
    /// If (row, col) is outside the grid.
    pub fn place(&mut self, row: usize, col: usize, plant: PlacedPlant) {
        self.cells[row][col] = Some(plant);
    }

    /// Empty a cell
    ///
    /// # Panics
    /// If (row, col) is outside the grid.
    pub fn clear(&mut self, row: usize, col: usize) {
        self.cells[row][col] = None;
    }

    /// Occupied cells in row-major order
    pub fn occupied_cells(&self) -> impl Iterator<Item = Neighbor<'_>> {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter_map(move |(col, cell)| cell.as_ref().map(|plant| ((row, col), plant)))
        })
    }

    pub fn occupied_count(&self) -> usize {
        self.occupied_cells().count()
    }

    pub fn is_empty(&self) -> bool {
        self.occupied_cells().next().is_none()
    }

    /// Occupied cells in the Moore neighborhood of (row, col)
    pub fn neighbors(&self, row: usize, col: usize) -> SmallVec<[Neighbor<'_>; 8]> {
        let mut found = SmallVec::new();

        for (dr, dc) in MOORE_OFFSETS {
            let (Some(r), Some(c)) = (row.checked_add_signed(dr), col.checked_add_signed(dc)) else {
                continue;
            };
            if let Some(plant) = self.get(r, c) {
                found.push(((r, c), plant));
            }
        }

        found
    }
}
