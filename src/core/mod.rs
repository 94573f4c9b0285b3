pub mod generation;
pub mod preview;
