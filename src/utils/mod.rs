mod format_int;
mod parse_rle;
mod topology;

pub use format_int::NiceInt;
pub use parse_rle::{parse_rle, Rle};
pub use topology::wrap;
