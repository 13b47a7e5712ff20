//! Neo4j side of the Goodbooks dashboard.
//!
//! [`graph_db`] holds the Cypher queries behind the [`BookGraph`] trait and
//! the neo4rs-backed client. [`network`] turns recommendation rows into the
//! node/edge/options payload the vis-network library renders.

pub mod errors;
pub mod graph_db;
pub mod network;

pub use errors::{GraphError, GraphResult};
pub use graph_db::{BookGraph, Neo4jClient};
pub use network::{
    build_recommendation_network, render_network_page, NetworkSettings, PhysicsSettings,
    RecommendationNetwork,
};
