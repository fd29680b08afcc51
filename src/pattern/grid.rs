use std::sync::Arc;

pub const GRID_SIZE: usize = 21;
pub const MARKER_SIZE: usize = 7;

/// Top-left corners (x, y) of the three position markers.
const MARKER_ORIGINS: [(usize, usize); 3] = [
    (0, 0),
    (GRID_SIZE - MARKER_SIZE, 0),
    (0, GRID_SIZE - MARKER_SIZE),
];

/// Percentage threshold above which a data cell is filled.
const FILL_THRESHOLD: u64 = 45;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PatternGrid {
    cells: [[bool; GRID_SIZE]; GRID_SIZE],
}

impl PatternGrid {
    pub fn generate(data: &str) -> Self {
        let hash = hash_input(data);
        let mut cells = [[false; GRID_SIZE]; GRID_SIZE];

        for (y, row) in cells.iter_mut().enumerate() {
            for (x, cell) in row.iter_mut().enumerate() {
                *cell = match marker_local(x, y) {
                    Some((lx, ly)) => marker_cell(lx, ly),
                    None => data_cell(hash, x, y),
                };
            }
        }

        Self { cells }
    }

    pub fn size(&self) -> usize {
        GRID_SIZE
    }

    /// Out-of-range coordinates read as off.
    pub fn is_on(&self, x: usize, y: usize) -> bool {
        self.cells
            .get(y)
            .and_then(|row| row.get(x))
            .copied()
            .unwrap_or(false)
    }

    pub fn is_marker(&self, x: usize, y: usize) -> bool {
        marker_local(x, y).is_some()
    }

    pub fn rows(&self) -> &[[bool; GRID_SIZE]; GRID_SIZE] {
        &self.cells
    }

    /// Iterates `(x, y)` of every filled cell in row-major order.
    pub fn filled_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, on)| **on)
                .map(move |(x, _)| (x, y))
        })
    }
}

/// Sum of UTF-16 code unit × 1-based position.
fn hash_input(data: &str) -> u64 {
    data.encode_utf16()
        .enumerate()
        .fold(0u64, |acc, (i, unit)| {
            acc.wrapping_add(u64::from(unit).wrapping_mul(i as u64 + 1))
        })
}

fn marker_local(x: usize, y: usize) -> Option<(usize, usize)> {
    MARKER_ORIGINS.iter().find_map(|&(ox, oy)| {
        let inside = (ox..ox + MARKER_SIZE).contains(&x) && (oy..oy + MARKER_SIZE).contains(&y);
        inside.then(|| (x - ox, y - oy))
    })
}

fn marker_cell(lx: usize, ly: usize) -> bool {
    let edge = MARKER_SIZE - 1;
    let on_ring = lx == 0 || ly == 0 || lx == edge || ly == edge;
    let in_core = (2..=4).contains(&lx) && (2..=4).contains(&ly);
    on_ring || in_core
}

fn data_cell(hash: u64, x: usize, y: usize) -> bool {
    let value = hash
        .wrapping_add(x as u64 * 31)
        .wrapping_add(y as u64 * 17);
    value % 100 > FILL_THRESHOLD
}

/// Keeps the grid for the most recent input and only regenerates when the
/// input changes.
#[derive(Debug, Default)]
pub struct PatternMemo {
    last: Option<(String, Arc<PatternGrid>)>,
}

impl PatternMemo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&mut self, data: &str) -> Arc<PatternGrid> {
        if let Some((input, grid)) = &self.last {
            if input == data {
                return Arc::clone(grid);
            }
        }

        let grid = Arc::new(PatternGrid::generate(data));
        self.last = Some((data.to_string(), Arc::clone(&grid)));
        grid
    }
}
