//! HTTP handler modules, one per route group.

pub mod application;
pub mod form_schema;
pub mod lookup;
pub mod student;
pub mod submission;
