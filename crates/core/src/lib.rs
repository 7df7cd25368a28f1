//! Domain types and pure logic shared by the catalog crates.
//!
//! Nothing in here touches the network or the database; the `db` and `api`
//! crates build on these types.

pub mod error;
pub mod pagination;
pub mod types;
