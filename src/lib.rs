use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub mod config;
pub mod error;
pub mod graph_util;
pub mod routing_algos;
pub mod util;

use error::TopoError;
use graph_util::Topology;

/// 讀取 JSON 格式的拓樸檔，邊的 id 依檔案中的順序配發
pub fn read_topo_from_file<P: AsRef<Path>>(file_name: P) -> Result<Topology, TopoError> {
    let txt = fs::read_to_string(file_name)?;
    read_topo_from_str(&txt)
}

pub fn read_topo_from_str(txt: &str) -> Result<Topology, TopoError> {
    let json: TopoJSON = serde_json::from_str(txt)?;
    let mut g = Topology::new();
    g.set_node_cnt(json.number_of_nodes);
    for edge in json.edges.into_iter() {
        let (src, dst) = edge.nodes;
        if src >= json.number_of_nodes || dst >= json.number_of_nodes {
            // 端點超出宣告的節點數時照樣加入，節點數隨之擴大
            tracing::warn!(src, dst, node_cnt = json.number_of_nodes, "edge endpoint beyond number_of_nodes");
        }
        if !(edge.length >= 0.0) || !edge.length.is_finite() {
            return Err(TopoError::InvalidWeight {
                src,
                dst,
                weight: edge.length,
            });
        }
        g.add_edge((src, dst), edge.length);
    }
    Ok(g)
}

#[derive(Serialize, Deserialize)]
struct TopoJSON {
    number_of_nodes: usize,
    #[serde(alias = "links")]
    edges: Vec<RawEdge>,
}
#[derive(Serialize, Deserialize)]
struct RawEdge {
    nodes: (usize, usize),
    length: f64,
}

#[cfg(test)]
mod test {
    use super::*;
    #[test]
    fn test_read_topo() -> Result<(), String> {
        let g = read_topo_from_str(
            r#"{
                "number_of_nodes": 6,
                "edges": [
                    {"nodes": [0, 5], "length": 10},
                    {"nodes": [0, 3], "length": 2},
                    {"nodes": [3, 5], "length": 2.5}
                ]
            }"#,
        )
        .map_err(|e| e.to_string())?;
        assert_eq!(6, g.get_node_cnt());
        assert_eq!(3, g.get_edge_cnt());
        assert_eq!(4.5, g.get_dist(&[0, 3, 5]));
        let ids: Vec<usize> = g.edges().iter().map(|e| e.id.into()).collect();
        assert_eq!(vec![0, 1, 2], ids);
        Ok(())
    }
    #[test]
    fn test_links_alias() {
        let g = read_topo_from_str(r#"{"number_of_nodes": 2, "links": [{"nodes": [0, 1], "length": 1}]}"#);
        assert_eq!(1, g.unwrap().get_edge_cnt());
    }
    #[test]
    fn test_endpoint_beyond_node_cnt_is_kept() -> Result<(), String> {
        let g = read_topo_from_str(
            r#"{"number_of_nodes": 2, "edges": [
                {"nodes": [0, 1], "length": 1},
                {"nodes": [1, 5], "length": 2}
            ]}"#,
        )
        .map_err(|e| e.to_string())?;
        assert_eq!(2, g.get_edge_cnt());
        assert_eq!(6, g.get_node_cnt());
        assert_eq!(3.0, g.get_dist(&[0, 1, 5]));
        Ok(())
    }
    #[test]
    fn test_malformed_topo() {
        match read_topo_from_str("{ not json") {
            Err(TopoError::Json(_)) => (),
            _ => panic!("應該要解析失敗"),
        }
        match read_topo_from_str(r#"{"number_of_nodes": 2, "edges": [{"nodes": [0, 1], "length": -1}]}"#) {
            Err(TopoError::InvalidWeight { .. }) => (),
            _ => panic!("應該要拒絕負的權重"),
        }
        match read_topo_from_file("no_such_topology.json") {
            Err(TopoError::Io(_)) => (),
            _ => panic!("應該要找不到檔案"),
        }
    }
}
