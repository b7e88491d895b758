use crate::utils::wrap;

/// Pair of equally sized cell buffers: `current` is the generation being read,
/// `next` receives the generation being computed.
///
/// Cells are addressed as `(x, y)` with `x` on the first axis; both buffers are
/// stored with `y` varying fastest, so a printed line is one `x`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells_curr: Vec<bool>,
    cells_next: Vec<bool>,
    width: usize,
    height: usize,
}

impl Board {
    /// Creates a board whose both buffers are filled with dead cells.
    pub fn blank(width: usize, height: usize) -> Self {
        assert!(width >= 1 && height >= 1);
        let size = width * height;
        Self {
            cells_curr: vec![false; size],
            cells_next: vec![false; size],
            width,
            height,
        }
    }

    /// `(width, height)` of the board
    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    fn index(&self, x: usize, y: usize) -> usize {
        assert!(x < self.width && y < self.height);
        x * self.height + y
    }

    pub fn get(&self, x: usize, y: usize) -> bool {
        self.cells_curr[self.index(x, y)]
    }

    pub fn set(&mut self, x: usize, y: usize, state: bool) {
        let idx = self.index(x, y);
        self.cells_curr[idx] = state;
    }

    /// Reads the current generation with both axes stitched at the edges.
    pub fn get_wrapped(&self, x: isize, y: isize) -> bool {
        self.get(wrap(x, self.width), wrap(y, self.height))
    }

    /// Reads the buffer that the next step will overwrite.
    pub fn next_cell(&self, x: usize, y: usize) -> bool {
        self.cells_next[self.index(x, y)]
    }

    pub(crate) fn set_next(&mut self, x: usize, y: usize, state: bool) {
        let idx = self.index(x, y);
        self.cells_next[idx] = state;
    }

    /// Exchanges the roles of the two buffers without copying cells.
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.cells_curr, &mut self.cells_next);
    }

    /// Sets every listed coordinate alive in the current generation.
    pub fn seed(&mut self, cells: &[(usize, usize)]) {
        for &(x, y) in cells {
            self.set(x, y, true);
        }
    }

    /// Kills every cell of both buffers.
    pub fn clear(&mut self) {
        self.cells_curr.fill(false);
        self.cells_next.fill(false);
    }

    /// Number of alive cells in the current generation
    pub fn population(&self) -> usize {
        self.cells_curr.iter().filter(|&&c| c).count()
    }

    pub fn cells(&self) -> &[bool] {
        &self.cells_curr
    }

    pub fn next_cells(&self) -> &[bool] {
        &self.cells_next
    }

    /// Fills the current generation with random cells
    ///
    /// `seed` - random seed (if `None`, then random seed is generated)
    pub fn randomize(&mut self, seed: Option<u64>, fill_rate: f64) {
        use rand::{Rng, SeedableRng};

        let mut rng = if let Some(x) = seed {
            rand_chacha::ChaCha8Rng::seed_from_u64(x)
        } else {
            rand_chacha::ChaCha8Rng::from_entropy()
        };
        for cell in self.cells_curr.iter_mut() {
            *cell = rng.gen_bool(fill_rate);
        }
    }
}
