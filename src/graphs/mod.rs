pub mod components;
pub mod edge;
pub mod edges;
pub mod geometry;
pub mod graph;
pub mod undirected;
pub mod vertices;
pub mod weighted;
