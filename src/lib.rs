//! Generates SQL text from an ordered column spec: a
//! `CREATE TABLE IF NOT EXISTS` statement and a prepared `INSERT INTO`
//! statement with `?` placeholders.
//!
//! Identifiers are emitted verbatim. They are not escaped, so table and
//! column names must come from a trusted source.

// lets `#[table_spec]` expansions resolve `::specsql` inside this crate
extern crate self as specsql;

pub mod libs;

pub use libs::*;
pub use specsql_derive::table_spec;
