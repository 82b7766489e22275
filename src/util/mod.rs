pub mod aco;

mod dijkstra;
pub use dijkstra::Dijkstra;
