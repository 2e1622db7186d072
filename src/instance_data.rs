use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Job {
    pub processing_time: u32,
    pub due_date: i64,
    pub weight: u32,
}

#[derive(Debug, Clone)]
pub struct InstanceData {
    pub name: String,
    pub jobs: Vec<Job>,
}

impl InstanceData {
    pub fn new(
        name: String,
        processing_times: Vec<u32>,
        due_dates: Vec<i64>,
        weights: Vec<u32>,
    ) -> Self {
        assert_eq!(processing_times.len(), due_dates.len());
        assert_eq!(processing_times.len(), weights.len());
        assert!(
            processing_times.iter().all(|&p| p > 0) && weights.iter().all(|&w| w > 0),
            "processing times and weights must be positive!"
        );

        let jobs = processing_times
            .iter()
            .zip(due_dates.iter())
            .zip(weights.iter())
            .map(|((&processing_time, &due_date), &weight)| Job {
                processing_time,
                due_date,
                weight,
            })
            .collect::<Vec<Job>>();

        Self { name, jobs }
    }

    pub fn job_count(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    pub fn total_processing_time(&self) -> i64 {
        self.jobs.iter().map(|j| j.processing_time as i64).sum()
    }
}

fn parse_positive(value: i64, what: &str, job: usize) -> Result<u32> {
    if value <= 0 || value > u32::MAX as i64 {
        bail!("job {}: {} must be a positive integer, got {}", job, what, value);
    }
    Ok(value as u32)
}

pub fn parse_instance(name: &str, contents: &str) -> Result<InstanceData> {
    let values = contents
        .split_whitespace()
        .enumerate()
        .map(|(i, token)| {
            token
                .parse::<i64>()
                .with_context(|| format!("token {} ('{}') is not an integer", i + 1, token))
        })
        .collect::<Result<Vec<i64>>>()?;

    let (&n, records) = match values.split_first() {
        Some(split) => split,
        None => bail!("missing job count"),
    };
    if n < 0 {
        bail!("job count must not be negative, got {}", n);
    }
    let n = n as usize;
    let expected = match n.checked_mul(3) {
        Some(expected) => expected,
        None => bail!("job count {} is too large", n),
    };
    if records.len() < expected {
        bail!(
            "expected {} values for {} jobs, found {}",
            expected,
            n,
            records.len()
        );
    }
    if records.len() > expected {
        bail!(
            "{} unexpected trailing values after {} jobs",
            records.len() - expected,
            n
        );
    }

    let mut processing_times: Vec<u32> = Vec::with_capacity(n);
    let mut due_dates: Vec<i64> = Vec::with_capacity(n);
    let mut weights: Vec<u32> = Vec::with_capacity(n);
    for (job, record) in records.chunks_exact(3).enumerate() {
        processing_times.push(parse_positive(record[0], "processing time", job)?);
        due_dates.push(record[1]);
        weights.push(parse_positive(record[2], "weight", job)?);
    }

    Ok(InstanceData::new(
        name.to_string(),
        processing_times,
        due_dates,
        weights,
    ))
}

pub fn read_instance(instance_path: &str) -> Result<InstanceData> {
    let contents = fs::read_to_string(instance_path)
        .with_context(|| format!("unable to read instance file {}", instance_path))?;
    let name = Path::new(instance_path)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| instance_path.to_string());
    parse_instance(&name, &contents)
        .with_context(|| format!("malformed instance file {}", instance_path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_small_instance() {
        let instance = parse_instance("small", "3\n4 4 1\n2 2 1\n3 10 1\n").unwrap();
        assert_eq!(instance.name, "small");
        assert_eq!(instance.job_count(), 3);
        assert_eq!(
            instance.jobs[1],
            Job {
                processing_time: 2,
                due_date: 2,
                weight: 1
            }
        );
        assert_eq!(instance.total_processing_time(), 9);
    }

    #[test]
    fn test_parse_accepts_any_whitespace_and_negative_due_dates() {
        let instance = parse_instance("ws", "2 5 -3 2\t\t7\n\n 0 4").unwrap();
        assert_eq!(instance.jobs[0].due_date, -3);
        assert_eq!(instance.jobs[1].processing_time, 7);
        assert_eq!(instance.jobs[1].weight, 4);
    }

    #[test]
    fn test_parse_zero_jobs() {
        let instance = parse_instance("empty", "0").unwrap();
        assert!(instance.is_empty());
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        assert!(parse_instance("x", "").is_err());
        assert!(parse_instance("x", "   \n").is_err());
        assert!(parse_instance("x", "-1").is_err());
        assert!(parse_instance("x", "2 1 2 3").is_err());
        assert!(parse_instance("x", "1 1 2 3 4").is_err());
        assert!(parse_instance("x", "1 1 two 3").is_err());
        assert!(parse_instance("x", "1 0 2 3").is_err());
        assert!(parse_instance("x", "1 1 2 0").is_err());
        assert!(parse_instance("x", "1 -4 2 1").is_err());
        assert!(parse_instance("x", "6148914691236517206 1 1").is_err());
        assert!(parse_instance("x", "9223372036854775807 1 1 1").is_err());
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_instance("./does/not/exist.dat").unwrap_err();
        assert!(err.to_string().contains("does/not/exist.dat"));
    }

    #[test]
    fn test_read_instance_from_file() {
        let path = std::env::temp_dir().join("lsaco_wt_read_instance_test.dat");
        fs::write(&path, "2\n3 1 2\n1 5 1\n").unwrap();
        let instance = read_instance(path.to_str().unwrap()).unwrap();
        assert_eq!(instance.name, "lsaco_wt_read_instance_test");
        assert_eq!(instance.job_count(), 2);
        fs::remove_file(&path).unwrap();
    }
}
