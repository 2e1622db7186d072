use crate::instance_data::{InstanceData, Job};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimedJob {
    pub job: usize,
    pub start: i64,
    pub processing_time: u32,
    pub end: i64,
    pub weight: u32,
    pub tardiness: u64,
}

pub fn job_tardiness(job: &Job, start_time: i64) -> u64 {
    let lateness = start_time + job.processing_time as i64 - job.due_date;
    if lateness > 0 {
        lateness as u64 * job.weight as u64
    } else {
        0
    }
}

pub fn sequence_tardiness(sequence: &[usize], instance: &InstanceData) -> u64 {
    let mut current_date: i64 = 0;
    let mut total_tardiness: u64 = 0;
    for &j in sequence {
        let job = &instance.jobs[j];
        total_tardiness += job_tardiness(job, current_date);
        current_date += job.processing_time as i64;
    }
    total_tardiness
}

// Per-job timing of a sequence, for reporting only.
pub fn schedule_trace(sequence: &[usize], instance: &InstanceData) -> Vec<TimedJob> {
    let mut current_date: i64 = 0;
    sequence
        .iter()
        .map(|&j| {
            let job = &instance.jobs[j];
            let timed = TimedJob {
                job: j,
                start: current_date,
                processing_time: job.processing_time,
                end: current_date + job.processing_time as i64,
                weight: job.weight,
                tardiness: job_tardiness(job, current_date),
            };
            current_date = timed.end;
            timed
        })
        .collect()
}

#[cfg(test)]
pub fn worked_example() -> InstanceData {
    InstanceData::new(
        "worked".to_string(),
        vec![4, 2, 3],
        vec![4, 2, 10],
        vec![1, 1, 1],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_tardiness() {
        let job = Job {
            processing_time: 4,
            due_date: 4,
            weight: 3,
        };
        assert_eq!(job_tardiness(&job, 0), 0);
        assert_eq!(job_tardiness(&job, 2), 6);
        let early = Job {
            processing_time: 1,
            due_date: 100,
            weight: 9,
        };
        assert_eq!(job_tardiness(&early, 50), 0);
        let negative_due = Job {
            processing_time: 2,
            due_date: -3,
            weight: 2,
        };
        assert_eq!(job_tardiness(&negative_due, 0), 10);
    }

    #[test]
    fn test_worked_example() {
        let instance = worked_example();
        assert_eq!(sequence_tardiness(&[1, 0, 2], &instance), 2);
        assert_eq!(sequence_tardiness(&[0, 1, 2], &instance), 4);
        assert_eq!(sequence_tardiness(&[2, 0, 1], &instance), 3 + 7);
    }

    #[test]
    fn test_sequence_tardiness_is_deterministic() {
        let instance = worked_example();
        let first = sequence_tardiness(&[2, 1, 0], &instance);
        for _ in 0..10 {
            assert_eq!(sequence_tardiness(&[2, 1, 0], &instance), first);
        }
        assert_eq!(sequence_tardiness(&[], &instance), 0);
    }

    #[test]
    fn test_schedule_trace_matches_total() {
        let instance = worked_example();
        let trace = schedule_trace(&[1, 0, 2], &instance);
        assert_eq!(
            trace.iter().map(|t| (t.job, t.start, t.end)).collect::<Vec<_>>(),
            vec![(1, 0, 2), (0, 2, 6), (2, 6, 9)]
        );
        assert_eq!(trace.iter().map(|t| t.tardiness).sum::<u64>(), 2);
    }
}
