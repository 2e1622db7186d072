use crate::colony::colony_iteration;
use crate::instance_data::InstanceData;
use crate::local_search::local_search;
use crate::params::{Params, EVAPORATION_RATE, ITERS_ACO, MIN_PHEROMONE};
use crate::pheromone::PheromoneTrail;
use crate::solution::Solution;
use rand::Rng;
use serde_derive::Serialize;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunResult {
    pub best_sequence: Vec<usize>,
    pub best_tardiness: u64,
    pub best_aco_tardiness: u64,
    // Run-best tardiness after each iteration.
    pub history: Vec<u64>,
    pub pheromone: Vec<f64>,
}

impl RunResult {
    fn empty() -> Self {
        Self {
            best_sequence: Vec::new(),
            best_tardiness: 0,
            best_aco_tardiness: 0,
            history: Vec::new(),
            pheromone: Vec::new(),
        }
    }
}

pub struct LsAcoBuilder<'a> {
    instance: &'a InstanceData,
    evaporation_rate: f64,
    iteration_count: usize,
    min_pheromone: f64,
    ant_count: Option<usize>,
    pheromone_ceiling: Option<f64>,
}

impl<'a> LsAcoBuilder<'a> {
    pub fn new(instance: &'a InstanceData) -> Self {
        Self {
            instance,
            evaporation_rate: EVAPORATION_RATE,
            iteration_count: ITERS_ACO,
            min_pheromone: MIN_PHEROMONE,
            ant_count: None,
            pheromone_ceiling: None,
        }
    }

    pub fn set_evaporation_rate(mut self, evaporation_rate: f64) -> Self {
        self.evaporation_rate = evaporation_rate;
        self
    }

    pub fn set_iteration_count(mut self, iteration_count: usize) -> Self {
        self.iteration_count = iteration_count;
        self
    }

    pub fn set_min_pheromone(mut self, min_pheromone: f64) -> Self {
        self.min_pheromone = min_pheromone;
        self
    }

    pub fn set_ant_count(mut self, ant_count: Option<usize>) -> Self {
        self.ant_count = ant_count;
        self
    }

    pub fn set_pheromone_ceiling(mut self, pheromone_ceiling: Option<f64>) -> Self {
        self.pheromone_ceiling = pheromone_ceiling;
        self
    }

    pub fn build(self) -> LsAco<'a> {
        if !(0.0..=1.0).contains(&self.evaporation_rate) || self.min_pheromone <= 0.0 {
            panic!("Evaporation rate must lie in [0, 1] and the pheromone floor must be positive!");
        }
        if self.iteration_count == 0 || self.ant_count == Some(0) {
            panic!("At least one iteration and one ant are required!");
        }

        LsAco {
            instance: self.instance,
            evaporation_rate: self.evaporation_rate,
            iteration_count: self.iteration_count,
            min_pheromone: self.min_pheromone,
            ant_count: self.ant_count.unwrap_or(2 * self.instance.job_count()),
            pheromone_ceiling: self.pheromone_ceiling,
        }
    }
}

pub struct LsAco<'a> {
    instance: &'a InstanceData,
    evaporation_rate: f64,
    iteration_count: usize,
    min_pheromone: f64,
    ant_count: usize,
    pheromone_ceiling: Option<f64>,
}

impl<'a> LsAco<'a> {
    pub fn builder(instance: &'a InstanceData) -> LsAcoBuilder<'a> {
        LsAcoBuilder::new(instance)
    }

    pub fn from_params(instance: &'a InstanceData, params: &Params) -> Self {
        LsAco::builder(instance)
            .set_evaporation_rate(params.evaporation_rate)
            .set_iteration_count(params.iteration_count)
            .set_min_pheromone(params.min_pheromone)
            .set_ant_count(params.ant_count)
            .set_pheromone_ceiling(params.pheromone_ceiling)
            .build()
    }

    pub fn ant_count(&self) -> usize {
        self.ant_count
    }

    /// One independent run: fresh trail, then `iteration_count` rounds of
    /// colony construction, local search on the iteration best and a
    /// pheromone update driven by the unrefined iteration best.
    pub fn run<T: Rng>(&self, rng: &mut T) -> RunResult {
        let instance = self.instance;
        if instance.is_empty() {
            return RunResult::empty();
        }

        let mut trail = PheromoneTrail::new(
            instance.job_count(),
            self.evaporation_rate,
            self.min_pheromone,
            self.pheromone_ceiling,
        );

        let mut best: Option<Solution> = None;
        let mut best_aco_tardiness = u64::MAX;
        let mut history: Vec<u64> = Vec::with_capacity(self.iteration_count);

        for t in 0..self.iteration_count {
            let iter_best = colony_iteration(instance, &trail, self.ant_count, rng);
            best_aco_tardiness = best_aco_tardiness.min(iter_best.tardiness);

            let mut refined = iter_best.clone();
            let outcome = local_search(&mut refined, instance);
            let refined_tardiness = refined.tardiness;
            if best
                .as_ref()
                .map_or(true, |b| refined_tardiness < b.tardiness)
            {
                best = Some(refined);
            }
            let best_tardiness = best.as_ref().map_or(refined_tardiness, |b| b.tardiness);
            history.push(best_tardiness);

            trail.reinforce(&iter_best.sequence);
            trail.evaporate();

            debug!(
                instance = %instance.name,
                iteration = t + 1,
                aco_tardiness = iter_best.tardiness,
                refined_tardiness,
                local_search_rounds = outcome.rounds,
                local_search_passes = outcome.history.len() - 1,
                best_tardiness,
                "iteration finished"
            );
        }

        let best = best.unwrap_or_else(Solution::empty);
        debug_assert!(best.is_permutation(instance.job_count()));
        RunResult {
            best_sequence: best.sequence,
            best_tardiness: best.tardiness,
            best_aco_tardiness,
            history,
            pheromone: trail.levels().to_vec(),
        }
    }
}
