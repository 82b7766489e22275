use rand::Rng;
use std::collections::HashSet;

use crate::config::Config;
use crate::graph_util::Topology;
use crate::util::aco::{select_neighbour, transition_probs, PheromoneTable};

/// 一隻螞蟻從 `start` 出發，依機率一步步走向 `end`。
///
/// 成功時回傳以 `start` 開頭、`end` 結尾且沒有重複節點的足跡；
/// 走進環、走進死路或機率退化時回傳空的足跡。
pub fn go_ant<R: Rng>(
    g: &Topology,
    table: &PheromoneTable,
    config: &Config,
    start: usize,
    end: usize,
    rng: &mut R,
) -> Vec<usize> {
    let mut trace = Vec::<usize>::new();
    let mut visited = HashSet::<usize>::new();
    let mut cur = start;
    loop {
        // 把目前節點加進足跡前就先檢查會不會成環
        if !visited.insert(cur) {
            return vec![];
        }
        if cur == end && !trace.is_empty() {
            trace.push(cur);
            debug_assert!(!is_cyclic(&trace));
            return trace;
        }
        let next = transition_probs(g, table, cur, config)
            .and_then(|(neighs, probs)| select_neighbour(&neighs, &probs, rng));
        match next {
            Some(next) => {
                trace.push(cur);
                cur = next;
            }
            None => return vec![],
        }
    }
}

pub fn is_cyclic(nodes: &[usize]) -> bool {
    let unique: HashSet<&usize> = nodes.iter().collect();
    unique.len() != nodes.len()
}
