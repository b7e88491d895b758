use crate::Board;

/// Local update rule of a cellular automaton.
///
/// Implementations read only the current generation of `board`.
pub trait Rule {
    /// Name that is used in logs
    fn id<'a>() -> &'a str;

    fn next_state(board: &Board, x: usize, y: usize) -> bool;
}

/// Elementary rule 30 along the second axis: `left XOR (center OR right)`.
pub fn rule30(left: bool, center: bool, right: bool) -> bool {
    left ^ (center || right)
}

/// B3/S23
pub fn life(alive: bool, neighbors: u8) -> bool {
    match (alive, neighbors) {
        (true, 2) | (true, 3) => true,
        (false, 3) => true,
        _ => false,
    }
}

const MOORE: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Counts alive cells among the 8 toroidal neighbours of `(x, y)`.
pub fn moore_neighbors(board: &Board, x: usize, y: usize) -> u8 {
    let (x, y) = (x as isize, y as isize);
    MOORE
        .iter()
        .map(|&(dx, dy)| board.get_wrapped(x + dx, y + dy) as u8)
        .sum()
}

/// One-dimensional rule 30; neighbours are `y - 1` and `y + 1` in the same line.
pub struct Rule30;

impl Rule for Rule30 {
    fn id<'a>() -> &'a str {
        "rule30"
    }

    fn next_state(board: &Board, x: usize, y: usize) -> bool {
        let (x, y) = (x as isize, y as isize);
        rule30(
            board.get_wrapped(x, y - 1),
            board.get_wrapped(x, y),
            board.get_wrapped(x, y + 1),
        )
    }
}

/// Conway's Game of Life.
pub struct Life;

impl Rule for Life {
    fn id<'a>() -> &'a str {
        "life"
    }

    fn next_state(board: &Board, x: usize, y: usize) -> bool {
        life(board.get(x, y), moore_neighbors(board, x, y))
    }
}
