pub mod errors;
pub mod id;
pub mod types;

pub use errors::{ConfigError, QueryCraftError};
pub use id::{new_id, SessionId};
pub use types::{CellValue, ResultTable, Role, Turn};

pub type Result<T> = std::result::Result<T, QueryCraftError>;
