pub mod collapse;
pub mod search;
pub mod tree;

pub use collapse::*;
pub use search::*;
pub use tree::*;
