use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::ConfigError;

pub const ANTS: usize = 250;
pub const ITERATIONS: usize = 150;
pub const PHERO_QUANTITY: f64 = 100.0;
pub const A_PAR: f64 = 1.0;
pub const B_PAR: f64 = 5.0;
pub const EVAPO_RATE: f64 = 0.5;

const EXAMPLE_FILE: &str = "config.example.json";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// 每一輪放出的螞蟻數量
    pub ants: usize,
    /// 總共執行的輪數
    pub iterations: usize,
    /// 每條邊的初始費洛蒙，也是一條路徑能留下的總量
    pub pheromone_quantity: f64,
    /// 費洛蒙的指數
    pub alpha: f64,
    /// 能見度（權重倒數）的指數
    pub beta: f64,
    /// 每輪蒸發的比例
    pub evaporation_rate: f64,
    /// 亂數種子，未指定時取系統熵
    pub seed: Option<u64>,
    /// 同一輪的螞蟻平行走訪
    pub parallel: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            ants: ANTS,
            iterations: ITERATIONS,
            pheromone_quantity: PHERO_QUANTITY,
            alpha: A_PAR,
            beta: B_PAR,
            evaporation_rate: EVAPO_RATE,
            seed: None,
            parallel: false,
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let txt = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&txt)?;
        config.validate()?;
        Ok(config)
    }
    /// 依序嘗試 `path`、`config.example.json`，都失敗就用預設值
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        match Config::load(path.as_ref()) {
            Ok(config) => return config,
            Err(err) => tracing::debug!("{}: {}", path.as_ref().display(), err),
        }
        Config::load(EXAMPLE_FILE).unwrap_or_default()
    }
    /// 螞蟻數或輪數任一不為正時，兩者都退回預設值
    pub fn with_counts(mut self, ants: i64, iterations: i64) -> Self {
        if ants > 0 && iterations > 0 {
            self.ants = ants as usize;
            self.iterations = iterations as usize;
        } else {
            self.ants = ANTS;
            self.iterations = ITERATIONS;
        }
        self
    }
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.evaporation_rate) {
            return Err(ConfigError::Invalid(format!(
                "evaporation_rate 必需介於 0 與 1 之間: {}",
                self.evaporation_rate
            )));
        }
        if !(self.pheromone_quantity > 0.0) || !self.pheromone_quantity.is_finite() {
            return Err(ConfigError::Invalid(format!(
                "pheromone_quantity 必需為正數: {}",
                self.pheromone_quantity
            )));
        }
        for (name, value) in [("alpha", self.alpha), ("beta", self.beta)].iter() {
            if !(*value >= 0.0) || !value.is_finite() {
                return Err(ConfigError::Invalid(format!("{} 必需為非負數: {}", name, value)));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    #[test]
    fn test_default_is_tuned() {
        let config = Config::default();
        assert_eq!(250, config.ants);
        assert_eq!(150, config.iterations);
        assert_eq!(100.0, config.pheromone_quantity);
        assert_eq!(1.0, config.alpha);
        assert_eq!(5.0, config.beta);
        assert_eq!(0.5, config.evaporation_rate);
        assert!(config.validate().is_ok());
    }
    #[test]
    fn test_with_counts_fallback() {
        let config = Config::default().with_counts(30, 10);
        assert_eq!((30, 10), (config.ants, config.iterations));
        let config = Config::default().with_counts(30, 0);
        assert_eq!((ANTS, ITERATIONS), (config.ants, config.iterations));
        let config = Config::default().with_counts(-1, 10);
        assert_eq!((ANTS, ITERATIONS), (config.ants, config.iterations));
    }
    #[test]
    fn test_partial_json() -> Result<(), String> {
        let config: Config =
            serde_json::from_str(r#"{"ants": 12, "seed": 3}"#).map_err(|e| e.to_string())?;
        assert_eq!(12, config.ants);
        assert_eq!(Some(3), config.seed);
        assert_eq!(ITERATIONS, config.iterations);
        assert!(!config.parallel);
        Ok(())
    }
    #[test]
    fn test_validate() {
        let mut config = Config::default();
        config.evaporation_rate = 1.5;
        assert!(config.validate().is_err());
        let mut config = Config::default();
        config.pheromone_quantity = 0.0;
        assert!(config.validate().is_err());
        let mut config = Config::default();
        config.beta = std::f64::NAN;
        assert!(config.validate().is_err());
    }
    #[test]
    fn test_load_missing_file() {
        assert!(Config::load("no_such_config.json").is_err());
    }
}
