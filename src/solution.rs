use crate::instance_data::InstanceData;
use crate::utils::sequence_tardiness;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    pub sequence: Vec<usize>,
    pub tardiness: u64,
}

impl Solution {
    pub fn new(sequence: Vec<usize>, instance: &InstanceData) -> Self {
        let tardiness = sequence_tardiness(&sequence, instance);
        Self {
            sequence,
            tardiness,
        }
    }

    pub fn empty() -> Self {
        Self {
            sequence: Vec::new(),
            tardiness: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    pub fn is_permutation(&self, job_count: usize) -> bool {
        is_permutation(&self.sequence, job_count)
    }

    pub fn swap_jobs(&mut self, index1: usize, index2: usize, instance: &InstanceData) {
        self.sequence.swap(index1, index2);
        self.tardiness = sequence_tardiness(&self.sequence, instance);
    }

    pub fn insert_job(&mut self, old_position: usize, new_position: usize, instance: &InstanceData) {
        insert_job(&mut self.sequence, old_position, new_position);
        self.tardiness = sequence_tardiness(&self.sequence, instance);
    }
}

pub fn is_permutation(sequence: &[usize], job_count: usize) -> bool {
    if sequence.len() != job_count {
        return false;
    }
    let mut seen = vec![false; job_count];
    for &j in sequence {
        if j >= job_count || seen[j] {
            return false;
        }
        seen[j] = true;
    }
    true
}

// Moves the job at old_position to new_position, shifting the jobs in between.
pub fn insert_job(sequence: &mut [usize], old_position: usize, new_position: usize) {
    if old_position < new_position {
        sequence[old_position..=new_position].rotate_left(1);
    } else if old_position > new_position {
        sequence[new_position..=old_position].rotate_right(1);
    }
}
