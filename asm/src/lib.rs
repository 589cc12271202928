mod assembler;
mod diag;
mod error;
mod line;

pub use assembler::{assemble, measure, Assembly, ListingEntry, INST_SIZE};
pub use diag::{print_excerpt, Diagnostic};
pub use error::Error;
pub use line::Line;
