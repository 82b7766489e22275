mod topology;
pub use topology::{Edge, EdgeID, Topology};
