//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row, exposed to GraphQL
//!   as an output object
//! - A create DTO, exposed to GraphQL as an input object
//! - An update DTO (all `Option` fields) for patches

pub mod category;
pub mod product;
