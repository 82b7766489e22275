use std::cmp::Ordering;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};

#[derive(Clone, Copy, Eq, PartialEq, Hash, Ord, PartialOrd, Debug)]
pub struct EdgeID(pub(crate) usize);
impl From<usize> for EdgeID {
    fn from(i: usize) -> Self {
        EdgeID(i)
    }
}
impl Into<usize> for EdgeID {
    fn into(self) -> usize {
        self.0
    }
}

/// 有向邊。建立後不可變，相等與排序只看 `id`。
#[derive(Clone, Debug)]
pub struct Edge {
    pub id: EdgeID,
    pub src: usize,
    pub dst: usize,
    pub weight: f64,
}
impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
impl Eq for Edge {}
impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
impl PartialOrd for Edge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for Edge {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

/// 圖的靜態結構。邊的 id 依插入順序從 0 開始連續配發，因此 `EdgeID` 同時也是 `edges` 的索引。
///
/// 同一對 `(src, dst)` 之間允許多條平行邊，但以節點對查詢時一律取最早插入的那條。
#[derive(Clone, Default, Debug)]
pub struct Topology {
    edges: Vec<Edge>,
    out_edges: HashMap<usize, Vec<EdgeID>>,
    pair_index: HashMap<(usize, usize), Vec<EdgeID>>,
    node_cnt: usize,
}

impl Topology {
    pub fn new() -> Self {
        Topology::default()
    }
    /// 宣告節點數量（節點本身是隱含的，只出現在邊的端點上）
    pub fn set_node_cnt(&mut self, cnt: usize) {
        if cnt > self.node_cnt {
            self.node_cnt = cnt;
        }
    }
    pub fn add_edge(&mut self, id_pair: (usize, usize), weight: f64) -> EdgeID {
        let id = EdgeID(self.edges.len());
        let (src, dst) = id_pair;
        self.edges.push(Edge {
            id,
            src,
            dst,
            weight,
        });
        self.out_edges.entry(src).or_insert_with(Vec::new).push(id);
        self.pair_index.entry(id_pair).or_insert_with(Vec::new).push(id);
        self.set_node_cnt(src.max(dst) + 1);
        id
    }
    pub fn clear(&mut self) {
        self.edges.clear();
        self.out_edges.clear();
        self.pair_index.clear();
        self.node_cnt = 0;
    }
    pub fn get_edge_cnt(&self) -> usize {
        self.edges.len()
    }
    pub fn get_node_cnt(&self) -> usize {
        self.node_cnt
    }
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }
    /// 依插入順序走訪 `node` 的所有出邊
    pub fn foreach_edge(&self, node: usize, mut callback: impl FnMut(&Edge)) {
        if let Some(ids) = self.out_edges.get(&node) {
            for id in ids.iter() {
                callback(&self.edges[id.0]);
            }
        }
    }
    /// `src -> dst` 上最早插入的邊
    pub fn find_edge(&self, src: usize, dst: usize) -> Option<&Edge> {
        self.pair_index
            .get(&(src, dst))
            .and_then(|ids| ids.first())
            .map(|id| &self.edges[id.0])
    }
    /// `src -> dst` 上所有的平行邊
    pub fn find_edges(&self, src: usize, dst: usize) -> &[EdgeID] {
        match self.pair_index.get(&(src, dst)) {
            Some(ids) => ids.as_slice(),
            None => &[],
        }
    }
    /// 路徑上所有邊權重的總和。長度不足 2 的路徑回傳 0；找不到對應邊的一跳以 0 計。
    pub fn get_dist(&self, path: &[usize]) -> f64 {
        if path.len() <= 1 {
            return 0.0;
        }
        path.windows(2)
            .map(|hop| match self.find_edge(hop[0], hop[1]) {
                Some(edge) => edge.weight,
                None => 0.0,
            })
            .sum()
    }
}
