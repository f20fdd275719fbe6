pub mod config;
pub mod create_table;
pub mod error;
pub mod insert;
pub mod schema;
pub mod trim;

pub use create_table::*;
pub use error::*;
pub use insert::*;
pub use schema::*;
pub use trim::*;
