use rand::Rng;

use crate::config::Config;
use crate::graph_util::{EdgeID, Topology};

/// 每條邊上的費洛蒙，以 `EdgeID` 為索引。拓樸中的每條邊恰有一個值。
#[derive(Clone, Debug)]
pub struct PheromoneTable {
    levels: Vec<f64>,
    init: f64,
}

impl PheromoneTable {
    pub fn new(edge_cnt: usize, init: f64) -> Self {
        PheromoneTable {
            levels: vec![init; edge_cnt],
            init,
        }
    }
    /// 所有邊（新舊皆然）回到初始費洛蒙量
    pub fn reset(&mut self, edge_cnt: usize) {
        self.levels = vec![self.init; edge_cnt];
    }
    pub fn clear(&mut self) {
        self.levels.clear();
    }
    pub fn get_init(&self) -> f64 {
        self.init
    }
    pub fn level(&self, id: EdgeID) -> f64 {
        self.levels.get(id.0).copied().unwrap_or(0.0)
    }
    pub fn levels(&self) -> &[f64] {
        &self.levels
    }
    pub fn len(&self) -> usize {
        self.levels.len()
    }
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
    pub fn evaporate(&mut self, rho: f64) {
        for ph in self.levels.iter_mut() {
            *ph *= 1.0 - rho;
        }
    }
    pub fn deposit(&mut self, id: EdgeID, amount: f64) {
        if let Some(ph) = self.levels.get_mut(id.0) {
            *ph += amount;
        }
    }
    /// 一輪結束後的離線更新：先對全部的邊蒸發，再依各螞蟻的路徑長度補上費洛蒙。
    ///
    /// * `traces` - 本輪每隻螞蟻的足跡，失敗者為空或只有一個節點
    /// * `tour_lengths` - 與 `traces` 一一對應的路徑長度
    pub fn update_trails(
        &mut self,
        g: &Topology,
        traces: &[Vec<usize>],
        tour_lengths: &[f64],
        config: &Config,
    ) {
        self.evaporate(config.evaporation_rate);
        for (trace, &length) in traces.iter().zip(tour_lengths.iter()) {
            // 長度為 0 的路徑與失敗無法區分，一律不補
            if trace.len() <= 1 || length <= 0.0 {
                continue;
            }
            let diff = diff_pheromone(config.pheromone_quantity, length);
            for hop in trace.windows(2) {
                for &id in g.find_edges(hop[0], hop[1]) {
                    self.deposit(id, diff);
                }
            }
        }
    }
}

/// 一條長度為 `length` 的路徑在它經過的每條邊上留下的費洛蒙
pub fn diff_pheromone(quantity: f64, length: f64) -> f64 {
    quantity / length
}

/// 邊權重的倒數。邊不存在或權重不為正時回傳 0，避免除以零。
pub fn heuristic(g: &Topology, src: usize, dst: usize) -> f64 {
    match g.find_edge(src, dst) {
        Some(edge) if edge.weight > 0.0 && edge.weight.is_finite() => 1.0 / edge.weight,
        _ => 0.0,
    }
}

pub fn pheromone(g: &Topology, table: &PheromoneTable, src: usize, dst: usize) -> f64 {
    match g.find_edge(src, dst) {
        Some(edge) => table.level(edge.id),
        None => 0.0,
    }
}

pub fn avail_neighbours(g: &Topology, node: usize) -> Vec<usize> {
    let mut neighbours = vec![];
    g.foreach_edge(node, |edge| neighbours.push(edge.dst));
    neighbours
}

fn desirability(g: &Topology, table: &PheromoneTable, src: usize, dst: usize, config: &Config) -> f64 {
    // 0^0 == 1，能見度為 0 的邊必須在取指數前排除
    let heu = heuristic(g, src, dst);
    if heu == 0.0 {
        return 0.0;
    }
    let d = pheromone(g, table, src, dst).powf(config.alpha) * heu.powf(config.beta);
    if d.is_finite() {
        d
    } else {
        0.0
    }
}

/// 從 `node` 出發時，走向每個鄰居的機率，順序與 `avail_neighbours` 相同。
///
/// 沒有出邊，或所有鄰居的權重皆為 0 時回傳 `None`。
pub fn transition_probs(
    g: &Topology,
    table: &PheromoneTable,
    node: usize,
    config: &Config,
) -> Option<(Vec<usize>, Vec<f64>)> {
    let neighs = avail_neighbours(g, node);
    let weights: Vec<f64> = neighs
        .iter()
        .map(|&neigh| desirability(g, table, node, neigh, config))
        .collect();
    let sum: f64 = weights.iter().sum();
    if !(sum > 0.0) || !sum.is_finite() {
        return None;
    }
    let probs = weights.into_iter().map(|w| w / sum).collect();
    Some((neighs, probs))
}

/// 從 `src` 走到 `dst` 的機率，分母為零時無定義
pub fn transition_prob(
    g: &Topology,
    table: &PheromoneTable,
    src: usize,
    dst: usize,
    config: &Config,
) -> Option<f64> {
    let mut denominator = 0.0;
    g.foreach_edge(src, |edge| {
        denominator += desirability(g, table, src, edge.dst, config);
    });
    if !(denominator > 0.0) || !denominator.is_finite() {
        return None;
    }
    Some(desirability(g, table, src, dst, config) / denominator)
}

/// 輪盤選擇：累加機率，取第一個累計值大於等於亂數的鄰居。機率為 0 的鄰居永遠不會被選中。
pub fn select_neighbour<R: Rng>(neighs: &[usize], probs: &[f64], rng: &mut R) -> Option<usize> {
    let rand_f: f64 = rng.gen_range(0.0..1.0);
    let mut accumulation = 0.0;
    for (&neigh, &prob) in neighs.iter().zip(probs.iter()) {
        if prob <= 0.0 {
            continue;
        }
        accumulation += prob;
        if accumulation >= rand_f {
            return Some(neigh);
        }
    }
    None
}
