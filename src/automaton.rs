use crate::{utils::NiceInt, Board, Rule};
use log::{debug, trace};
use std::marker::PhantomData;

/// A board together with the rule that advances it.
///
/// Owns both generations; the stepper writes only into the `next` buffer and
/// then swaps, so every cell of a generation depends only on the previous one.
pub struct Automaton<R: Rule> {
    board: Board,
    generation: u64,
    rule: PhantomData<R>,
}

impl<R: Rule> Automaton<R> {
    /// Creates a field filled with dead cells
    pub fn blank(width: usize, height: usize) -> Self {
        Self::from_board(Board::blank(width, height))
    }

    pub fn from_board(board: Board) -> Self {
        Self {
            board,
            generation: 0,
            rule: PhantomData,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Number of generations computed so far
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Evaluates the rule for every cell of the current generation into the next buffer.
    pub fn compute_next(&mut self) {
        let (w, h) = self.board.size();
        for x in 0..w {
            for y in 0..h {
                let next = R::next_state(&self.board, x, y);
                self.board.set_next(x, y, next);
            }
        }
    }

    pub fn swap(&mut self) {
        self.board.swap();
    }

    /// Computes one generation and makes it current.
    pub fn step(&mut self) {
        self.compute_next();
        self.swap();
        self.generation += 1;
        trace!(
            "{}: generation {} population {}",
            R::id(),
            self.generation,
            self.board.population()
        );
    }

    /// Advances the field `n` generations.
    pub fn update(&mut self, n: u64) {
        for _ in 0..n {
            self.step();
        }
        debug!(
            "{}: ran {} generations, now at {}",
            R::id(),
            NiceInt::from(n),
            NiceInt::from(self.generation)
        );
    }
}
