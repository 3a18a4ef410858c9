pub mod explanation;

pub use explanation::*;
