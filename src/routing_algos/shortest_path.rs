use std::time::Instant;
use tracing::info;

use super::PathSearchEngine;
use crate::graph_util::Topology;
use crate::util::Dijkstra;

/// 以 Dijkstra 求精確最短路徑，作為蟻群結果的對照組
pub struct SPF {
    g: Topology,
    compute_time: u128,
}

impl SPF {
    pub fn new(g: Topology) -> Self {
        SPF { g, compute_time: 0 }
    }
    pub fn topology(&self) -> &Topology {
        &self.g
    }
}

impl PathSearchEngine for SPF {
    fn insert_edge(&mut self, src: usize, dst: usize, weight: f64) {
        self.g.add_edge((src, dst), weight);
    }
    fn find_path(&mut self, src: usize, dst: usize) -> Vec<usize> {
        if src == dst {
            return vec![];
        }
        let init_time = Instant::now();
        let route = Dijkstra::new(&self.g)
            .get_route(src, dst)
            .map(|(_, route)| route)
            .unwrap_or_default();
        self.compute_time = init_time.elapsed().as_micros();
        info!(src, dst, route = ?route, "shortest path computed");
        route
    }
    fn clear(&mut self) {
        self.g.clear();
    }
    fn get_last_compute_time(&self) -> u128 {
        self.compute_time
    }
}
