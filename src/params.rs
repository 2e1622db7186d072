use anyhow::{bail, Context, Result};
use serde_derive::{Deserialize, Serialize};
use std::fs;

pub const EVAPORATION_RATE: f64 = 0.05;
pub const ITERS_ACO: usize = 30;
pub const MIN_PHEROMONE: f64 = 0.05;
pub const N_RUNS: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Params {
    pub evaporation_rate: f64,
    pub iteration_count: usize,
    pub min_pheromone: f64,
    pub runs_per_instance: usize,
    // Derived as 2 * job_count when unset.
    pub ant_count: Option<usize>,
    pub pheromone_ceiling: Option<f64>,
    pub seed: Option<u64>,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            evaporation_rate: EVAPORATION_RATE,
            iteration_count: ITERS_ACO,
            min_pheromone: MIN_PHEROMONE,
            runs_per_instance: N_RUNS,
            ant_count: None,
            pheromone_ceiling: None,
            seed: None,
        }
    }
}

impl Params {
    pub fn load(config_path: &str) -> Result<Self> {
        let contents = fs::read_to_string(config_path)
            .with_context(|| format!("unable to read config file {}", config_path))?;
        let params: Params = serde_json::from_str(&contents)
            .with_context(|| format!("invalid config file {}", config_path))?;
        Ok(params)
    }

    pub fn ant_count(&self, job_count: usize) -> usize {
        self.ant_count.unwrap_or(2 * job_count)
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.evaporation_rate) {
            bail!(
                "evaporation_rate must lie in [0, 1], got {}",
                self.evaporation_rate
            );
        }
        if !(self.min_pheromone > 0.0 && self.min_pheromone.is_finite()) {
            bail!("min_pheromone must be positive, got {}", self.min_pheromone);
        }
        if self.iteration_count == 0 {
            bail!("iteration_count must be at least 1");
        }
        if self.runs_per_instance == 0 {
            bail!("runs_per_instance must be at least 1");
        }
        if self.ant_count == Some(0) {
            bail!("ant_count must be at least 1 when set");
        }
        if let Some(ceiling) = self.pheromone_ceiling {
            if !(ceiling >= self.min_pheromone) {
                bail!(
                    "pheromone_ceiling ({}) must not be below min_pheromone ({})",
                    ceiling,
                    self.min_pheromone
                );
            }
        }
        Ok(())
    }
}
