use crate::instance_data::InstanceData;
use crate::solution::{insert_job, Solution};
use crate::utils::sequence_tardiness;
use itertools::Itertools;
use tracing::trace;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalSearchOutcome {
    pub rounds: usize,
    // Tardiness before the first pass and after every pass.
    pub history: Vec<u64>,
}

fn evaluate_swap(sequence: &mut [usize], i: usize, j: usize, instance: &InstanceData) -> u64 {
    sequence.swap(i, j);
    let swapped = sequence_tardiness(sequence, instance);
    sequence.swap(i, j);
    swapped
}

fn swap_pass(solution: &mut Solution, instance: &InstanceData) -> bool {
    let current_tardiness = solution.tardiness;
    let mut candidate = solution.sequence.clone();
    let mut best_improvement: u64 = 0;
    let mut best_pair: Option<(usize, usize)> = None;

    for (i, j) in (0..candidate.len()).tuple_combinations() {
        let improvement =
            current_tardiness.saturating_sub(evaluate_swap(&mut candidate, i, j, instance));
        if improvement > best_improvement {
            best_improvement = improvement;
            best_pair = Some((i, j));
        }
    }

    match best_pair {
        Some((i, j)) => {
            solution.swap_jobs(i, j, instance);
            true
        }
        None => false,
    }
}

// Best destination for the job currently at position i, with the resulting tardiness.
fn evaluate_insertion(
    sequence: &[usize],
    i: usize,
    candidate: &mut [usize],
    instance: &InstanceData,
) -> Option<(usize, u64)> {
    let mut best_insertion: Option<(usize, u64)> = None;
    for k in (0..sequence.len()).filter(|&k| k != i) {
        candidate.copy_from_slice(sequence);
        insert_job(candidate, i, k);
        let new_tardiness = sequence_tardiness(candidate, instance);
        if best_insertion.map_or(true, |(_, t)| new_tardiness < t) {
            best_insertion = Some((k, new_tardiness));
        }
    }
    best_insertion
}

fn insertion_pass(solution: &mut Solution, instance: &InstanceData) -> bool {
    let mut candidate = solution.sequence.clone();
    let mut best_move: Option<(usize, usize, u64)> = None;

    for i in 0..solution.len() {
        if let Some((k, new_tardiness)) =
            evaluate_insertion(&solution.sequence, i, &mut candidate, instance)
        {
            if best_move.map_or(true, |(_, _, t)| new_tardiness < t) {
                best_move = Some((i, k, new_tardiness));
            }
        }
    }

    match best_move {
        Some((i, k, new_tardiness)) if new_tardiness < solution.tardiness => {
            solution.insert_job(i, k, instance);
            true
        }
        _ => false,
    }
}

/// Best-improvement descent alternating one swap pass and one insertion pass
/// until neither neighborhood contains an improving move.
pub fn local_search(solution: &mut Solution, instance: &InstanceData) -> LocalSearchOutcome {
    let mut outcome = LocalSearchOutcome {
        rounds: 0,
        history: vec![solution.tardiness],
    };
    if solution.len() < 2 {
        return outcome;
    }

    loop {
        outcome.rounds += 1;
        let improved_swap = swap_pass(solution, instance);
        outcome.history.push(solution.tardiness);
        let improved_insertion = insertion_pass(solution, instance);
        outcome.history.push(solution.tardiness);
        trace!(
            round = outcome.rounds,
            improved_swap,
            improved_insertion,
            tardiness = solution.tardiness,
            "local search round"
        );

        if !(improved_swap || improved_insertion) {
            break;
        }
    }
    outcome
}
