/// 路徑搜尋引擎共同的介面，新的搜尋策略以另一個實作的方式加入。
pub trait PathSearchEngine {
    /// 插入一條有向邊
    fn insert_edge(&mut self, src: usize, dst: usize, weight: f64);
    /// 找不到路徑時回傳空陣列
    fn find_path(&mut self, src: usize, dst: usize) -> Vec<usize>;
    fn clear(&mut self);
    fn get_last_compute_time(&self) -> u128;
}

mod shortest_path;
pub use shortest_path::SPF;

mod ant_system;
pub use ant_system::{go_ant, AntSystem};
