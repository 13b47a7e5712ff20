//! Row types shared by the Neo4j and MySQL query layers and the dashboard API.
//!
//! Every type here is a read-only projection of a query result. Nothing in the
//! dashboard creates or mutates catalog data.

pub mod catalog;
pub mod graph;
pub mod table;

pub use catalog::*;
pub use graph::*;
pub use table::*;
