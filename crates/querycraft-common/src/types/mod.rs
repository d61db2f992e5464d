mod table;
mod turn;

pub use table::*;
pub use turn::*;
