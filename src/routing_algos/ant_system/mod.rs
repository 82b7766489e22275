use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, warn};

use super::PathSearchEngine;
use crate::config::Config;
use crate::graph_util::Topology;
use crate::read_topo_from_file;
use crate::util::aco::PheromoneTable;

mod ant_walk;
pub use ant_walk::go_ant;

/// 蟻群系統。擁有拓樸與費洛蒙表，費洛蒙會在多次 `find_path` 之間延續，直到 `clear` 或插入新邊。
pub struct AntSystem {
    g: Topology,
    pheromone: PheromoneTable,
    config: Config,
    rng: StdRng,
    compute_time: u128,
}

impl AntSystem {
    pub fn new(g: Topology, config: Config) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        AntSystem {
            pheromone: PheromoneTable::new(g.get_edge_cnt(), config.pheromone_quantity),
            g,
            config,
            rng,
            compute_time: 0,
        }
    }
    /// 螞蟻數或輪數不為正時採用預設值
    pub fn from_edges(edges: &[(usize, usize, f64)], ants: i64, iterations: i64) -> Self {
        let mut g = Topology::new();
        for &(src, dst, weight) in edges.iter() {
            g.add_edge((src, dst), weight);
        }
        AntSystem::new(g, Config::default().with_counts(ants, iterations))
    }
    /// 拓樸檔讀取失敗時只記錄錯誤，以空的拓樸繼續
    pub fn from_file<P: AsRef<Path>>(path: P, config: Config) -> Self {
        let g = match read_topo_from_file(path.as_ref()) {
            Ok(g) => g,
            Err(err) => {
                warn!("{}: {}", path.as_ref().display(), err);
                Topology::new()
            }
        };
        AntSystem::new(g, config)
    }
    pub fn topology(&self) -> &Topology {
        &self.g
    }
    pub fn pheromone(&self) -> &PheromoneTable {
        &self.pheromone
    }
    pub fn config(&self) -> &Config {
        &self.config
    }
    pub fn tour_length(&self, trace: &[usize]) -> f64 {
        self.g.get_dist(trace)
    }
    /// 放出一輪的螞蟻。每隻螞蟻的種子都先從主亂數依序取出，因此平行與否結果相同。
    fn release_ants(&mut self, start: usize, end: usize) -> Vec<Vec<usize>> {
        let seeds: Vec<u64> = (0..self.config.ants).map(|_| self.rng.gen()).collect();
        let (g, table, config) = (&self.g, &self.pheromone, &self.config);
        let walk = |seed: u64| {
            let mut rng = StdRng::seed_from_u64(seed);
            go_ant(g, table, config, start, end, &mut rng)
        };
        if config.parallel {
            seeds.into_par_iter().map(walk).collect()
        } else {
            seeds.into_iter().map(walk).collect()
        }
    }
}

impl PathSearchEngine for AntSystem {
    fn insert_edge(&mut self, src: usize, dst: usize, weight: f64) {
        if !(weight > 0.0) || !weight.is_finite() {
            warn!(src, dst, weight, "inserting edge with non-positive weight");
        }
        self.g.add_edge((src, dst), weight);
        self.pheromone.reset(self.g.get_edge_cnt());
    }
    fn find_path(&mut self, start: usize, end: usize) -> Vec<usize> {
        let init_time = Instant::now();
        let mut best_path = Vec::<usize>::new();
        let mut shortest = std::f64::MAX;

        for i in 0..self.config.iterations {
            let mut traces = self.release_ants(start, end);
            let mut tour_lengths = Vec::with_capacity(traces.len());
            let mut success = 0;
            for trace in traces.iter_mut() {
                if trace.len() > 1 && trace.first() == Some(&start) && trace.last() == Some(&end) {
                    success += 1;
                    let length = self.g.get_dist(trace);
                    if length > 0.0 && length < shortest {
                        shortest = length;
                        best_path = trace.clone();
                    }
                    tour_lengths.push(length);
                } else {
                    trace.clear();
                    tour_lengths.push(0.0);
                }
            }
            self.pheromone
                .update_trails(&self.g, &traces, &tour_lengths, &self.config);
            debug!(iteration = i, success, best = shortest, "ant round finished");
        }

        self.compute_time = init_time.elapsed().as_micros();
        if best_path.is_empty() {
            info!(start, end, "no path found");
        } else {
            info!(start, end, length = shortest, route = ?best_path, "path found");
        }
        best_path
    }
    fn clear(&mut self) {
        self.g.clear();
        self.pheromone.clear();
    }
    fn get_last_compute_time(&self) -> u128 {
        self.compute_time
    }
}
