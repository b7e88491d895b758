use crate::{utils::parse_rle, Board};

/// Named set of alive cells, relative to the pattern's top-left corner.
///
/// Coordinates are `(x, y)` in board terms: `x` is the printed line.
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

pub const BLINKER: Pattern = Pattern {
    name: "Blinker",
    cells: &[(0, 0), (0, 1), (0, 2)],
};

pub const GLIDER: Pattern = Pattern {
    name: "Glider",
    cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
};

pub const TOAD: Pattern = Pattern {
    name: "Toad",
    cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
};

pub const BEACON: Pattern = Pattern {
    name: "Beacon",
    cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
};

pub const R_PENTOMINO: Pattern = Pattern {
    name: "R-pentomino",
    cells: &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)],
};

pub const PATTERNS: &[Pattern] = &[BLINKER, GLIDER, TOAD, BEACON, R_PENTOMINO];

pub fn find(name: &str) -> Option<&'static Pattern> {
    PATTERNS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

/// Decodes an RLE pattern into board-relative cells.
///
/// RLE text lines become board lines, so printing the board shows the pattern as drawn.
pub fn from_rle(data: &str) -> anyhow::Result<Vec<(usize, usize)>> {
    let rle = parse_rle(data)?;
    Ok(rle.cells.into_iter().map(|(col, line)| (line, col)).collect())
}

impl Board {
    /// Sets `cells` alive with their origin at `(x, y)`, wrapping around the edges.
    pub fn place(&mut self, cells: &[(usize, usize)], x: usize, y: usize) {
        let (w, h) = self.size();
        for &(dx, dy) in cells {
            self.set((x + dx) % w, (y + dy) % h, true);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{printer::render, Automaton, Life};

    #[test]
    fn test_find() {
        assert_eq!(find("glider").map(|p| p.name), Some("Glider"));
        assert!(find("spaceship").is_none());
    }

    #[test]
    fn test_glider_rle_matches_builtin() {
        let mut cells = from_rle("x = 3, y = 3\nbo$2bo$3o!").unwrap();
        cells.sort();
        assert_eq!(cells, GLIDER.cells);
    }

    #[test]
    fn test_place_wraps() {
        let mut board = Board::blank(4, 4);
        board.place(BLINKER.cells, 3, 3);
        assert!(board.get(3, 3) && board.get(3, 0) && board.get(3, 1));
        assert_eq!(board.population(), 3);
    }

    #[test]
    fn test_glider_drawn_as_in_rle() {
        let mut board = Board::blank(3, 3);
        board.place(GLIDER.cells, 0, 0);
        assert_eq!(render(&board), "010\n001\n111\n");
    }

    #[test]
    fn test_oscillators_have_period_two() {
        for pattern in [BLINKER, TOAD, BEACON] {
            let mut life = Automaton::<Life>::blank(12, 12);
            life.board_mut().place(pattern.cells, 4, 4);
            let start = life.board().cells().to_vec();
            life.step();
            assert_ne!(life.board().cells(), &start[..], "{}", pattern.name);
            life.step();
            assert_eq!(life.board().cells(), &start[..], "{}", pattern.name);
        }
    }

    #[test]
    fn test_glider_returns_after_wrapping() {
        // a glider moves one cell diagonally every 4 generations
        let n = 8;
        let mut life = Automaton::<Life>::blank(n, n);
        life.board_mut().place(GLIDER.cells, 2, 2);
        let start = life.board().cells().to_vec();
        life.update(4 * n as u64);
        assert_eq!(life.board().cells(), &start[..]);
        assert_eq!(life.board().population(), 5);
    }
}
