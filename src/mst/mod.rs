pub mod disjoint_set;
pub mod kruskal;
pub mod stream;
