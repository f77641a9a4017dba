//! Pure domain logic for the SPMB admission service.
//!
//! No database or HTTP dependencies live here; the `spmb-db` and
//! `spmb-api` crates build on these types.

pub mod admission;
pub mod error;
pub mod form;
pub mod registration;
pub mod types;
