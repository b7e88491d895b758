use crate::Printer;

/// Compile-time settings of both programs.
pub struct Config;

impl Config {
    pub const RULE30_WIDTH: usize = 1;
    pub const RULE30_HEIGHT: usize = 100;
    pub const RULE30_SEED: &'static [(usize, usize)] = &[(0, 50)];
    pub const RULE30_GENERATIONS: u64 = 10;
    /// The 1D program also shows the buffer that the next step overwrites.
    pub const RULE30_PRINTER: Printer = Printer::SideBySide;

    pub const LIFE_WIDTH: usize = 10;
    pub const LIFE_HEIGHT: usize = 10;
    pub const LIFE_SEED: &'static [(usize, usize)] = &[(4, 3), (4, 4), (4, 5)];
    pub const LIFE_GENERATIONS: u64 = 1_000_000;
    pub const LIFE_PRINTER: Printer = Printer::Plain;

    pub const RANDOM_SEED: u64 = 42;
    pub const RANDOM_FILL_RATE: f64 = 0.3;
}
