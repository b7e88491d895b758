#![warn(clippy::all)]

mod automaton;
mod board;
mod config;
pub mod patterns;
pub mod printer;
pub mod rules;
mod utils;

pub use automaton::Automaton;
pub use board::Board;
pub use config::Config;
pub use printer::Printer;
pub use rules::{Life, Rule, Rule30};
pub use utils::{parse_rle, wrap, NiceInt, Rle};
