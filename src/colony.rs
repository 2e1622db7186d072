use crate::instance_data::InstanceData;
use crate::pheromone::{ConstructionState, PheromoneTrail};
use crate::solution::Solution;
use rand::Rng;

pub fn construct_ant<T: Rng>(
    instance: &InstanceData,
    trail: &PheromoneTrail,
    state: &mut ConstructionState,
    rng: &mut T,
) -> Vec<usize> {
    state.reset();
    let mut sequence: Vec<usize> = Vec::with_capacity(instance.job_count());

    for _ in 0..instance.job_count() {
        state.compute_probabilities(trail);
        let Some(selected) = state.select_job(rng) else {
            break;
        };
        sequence.push(selected);
        state.schedule(selected, instance.jobs[selected].processing_time);
    }
    debug_assert_eq!(state.elapsed(), instance.total_processing_time());

    sequence
}

// All ants of one iteration sample the same, unmodified trail.
pub fn colony_iteration<T: Rng>(
    instance: &InstanceData,
    trail: &PheromoneTrail,
    ant_count: usize,
    rng: &mut T,
) -> Solution {
    let mut state = ConstructionState::new(instance.job_count());
    let mut iter_best: Option<Solution> = None;

    for _ in 0..ant_count {
        let candidate = Solution::new(construct_ant(instance, trail, &mut state, rng), instance);
        let improves = iter_best
            .as_ref()
            .map_or(true, |best| candidate.tardiness < best.tardiness);
        if improves {
            iter_best = Some(candidate);
        }
    }

    iter_best.unwrap_or_else(Solution::empty)
}
