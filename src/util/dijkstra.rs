use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use crate::graph_util::Topology;

#[derive(PartialEq)]
struct WeightedNode {
    dist: f64,
    id: usize,
    prev: usize,
}
impl Eq for WeightedNode {}
impl PartialOrd for WeightedNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for WeightedNode {
    // BinaryHeap 是最大堆，距離小者優先
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .dist
            .partial_cmp(&self.dist)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.id.cmp(&self.id))
    }
}

pub struct Dijkstra<'a> {
    g: &'a Topology,
    final_dist_map: HashMap<(usize, usize), (f64, usize)>,
    routed_node_table: HashSet<usize>,
}

impl<'a> Dijkstra<'a> {
    pub fn new(g: &'a Topology) -> Self {
        Dijkstra {
            g,
            final_dist_map: HashMap::new(),
            routed_node_table: HashSet::new(),
        }
    }
    pub fn compute_route(&mut self, src_id: usize) {
        if !self.routed_node_table.insert(src_id) {
            return;
        }
        let mut heap = BinaryHeap::new();
        heap.push(WeightedNode {
            dist: 0.0,
            id: src_id,
            prev: src_id,
        });
        // 從優先權佇列中移除，並塞進最終 dist map
        while let Some(WeightedNode { dist, id, prev }) = heap.pop() {
            if self.final_dist_map.contains_key(&(src_id, id)) {
                continue;
            }
            self.final_dist_map.insert((src_id, id), (dist, prev));
            let final_dist_map = &self.final_dist_map;
            self.g.foreach_edge(id, |edge| {
                if !final_dist_map.contains_key(&(src_id, edge.dst)) {
                    heap.push(WeightedNode {
                        dist: dist + edge.weight,
                        id: edge.dst,
                        prev: id,
                    });
                }
            });
        }
    }
    pub fn get_dist(&mut self, src_id: usize, dst_id: usize) -> f64 {
        self.compute_route(src_id);
        match self.final_dist_map.get(&(src_id, dst_id)) {
            Some(entry) => entry.0,
            // NOTE: 路徑無法連通
            None => std::f64::MAX,
        }
    }
    pub fn get_route(&mut self, src_id: usize, dst_id: usize) -> Option<(f64, Vec<usize>)> {
        self.compute_route(src_id);
        let &(dist, _) = self.final_dist_map.get(&(src_id, dst_id))?;
        let mut route = vec![dst_id];
        let mut cur = dst_id;
        while cur != src_id {
            cur = self.final_dist_map.get(&(src_id, cur))?.1;
            route.push(cur);
        }
        route.reverse();
        Some((dist, route))
    }
}

#[cfg(test)]
mod test {
    use super::Dijkstra;
    use crate::graph_util::Topology;
    #[test]
    fn test_dijkstra1() {
        let mut g = Topology::new();
        g.add_edge((0, 1), 1.0);
        g.add_edge((0, 1), 10.0);
        g.add_edge((1, 2), 1.0);
        g.add_edge((0, 2), 5.0);
        let mut algo = Dijkstra::new(&g);
        assert_eq!(Some((2.0, vec![0, 1, 2])), algo.get_route(0, 2));
        assert_eq!(Some((0.0, vec![0])), algo.get_route(0, 0));
    }
    #[test]
    fn test_dijkstra2() {
        let mut g = Topology::new();
        g.add_edge((0, 1), 10.0);
        g.add_edge((1, 2), 20.0);
        g.add_edge((0, 2), 2.0);
        g.add_edge((2, 1), 2.0);
        g.add_edge((1, 3), 10.0);
        g.add_edge((0, 3), 30.0);
        g.add_edge((3, 4), 3.0);

        let mut algo = Dijkstra::new(&g);
        assert_eq!(vec![0, 2, 1, 3, 4], algo.get_route(0, 4).unwrap().1);
        assert_eq!(17.0, algo.get_dist(0, 4));
        assert_eq!(vec![2, 1, 3, 4], algo.get_route(2, 4).unwrap().1);
        assert!(algo.get_route(4, 0).is_none());
        assert_eq!(std::f64::MAX, algo.get_dist(0, 5));
    }
}
