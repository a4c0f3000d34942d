pub mod writer;

pub use writer::{write_ranking, OutputError};
