// Load-side plumbing: destination DDL, insert rendering, and the SQL script
// sink. All statements flow through the `Database` port; the core never
// touches a connection.

pub mod insert;
pub mod schema;
pub mod script;

pub use insert::insert_statement;
pub use schema::{create_table, drop_table};
pub use script::SqlScript;
