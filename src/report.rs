use crate::instance_data::InstanceData;
use crate::lsaco::RunResult;
use crate::utils::schedule_trace;
use anyhow::{Context, Result};
use itertools::Itertools;
use serde_derive::Serialize;
use std::fs;

const RULE: &str = "================================================";

#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub run: usize,
    pub seed: u64,
    pub seconds: f64,
    pub result: RunResult,
}

#[derive(Debug, Clone, Serialize)]
pub struct InstanceReport {
    pub name: String,
    pub job_count: usize,
    pub runs: Vec<RunReport>,
    pub mean_aco_tardiness: f64,
    pub best_tardiness: u64,
    pub mean_seconds: f64,
}

impl InstanceReport {
    pub fn new(instance: &InstanceData, runs: Vec<RunReport>) -> Self {
        let n_runs = runs.len().max(1) as f64;
        let mean_aco_tardiness = runs
            .iter()
            .map(|r| r.result.best_aco_tardiness as f64)
            .sum::<f64>()
            / n_runs;
        let best_tardiness = runs
            .iter()
            .map(|r| r.result.best_tardiness)
            .min()
            .unwrap_or(0);
        let mean_seconds = runs.iter().map(|r| r.seconds).sum::<f64>() / n_runs;
        Self {
            name: instance.name.clone(),
            job_count: instance.job_count(),
            runs,
            mean_aco_tardiness,
            best_tardiness,
            mean_seconds,
        }
    }
}

pub fn print_header(instance: &InstanceData, path: &str, verbose: bool) {
    println!("{}", RULE);
    println!("FILE: {}", path);
    println!("{}", RULE);
    if !verbose {
        return;
    }
    println!("Printing job list...");
    println!("PT\tDD\tTW");
    for job in &instance.jobs {
        println!("{}\t{}\t{}", job.processing_time, job.due_date, job.weight);
    }
    println!("Total processing time: {}", instance.total_processing_time());
}

pub fn print_run(run: &RunReport, instance: &InstanceData, trace: bool, verbose: bool) {
    let result = &run.result;
    println!("========================");
    println!("LSACO Iteration {}", run.run + 1);
    println!("========================");
    println!("Solution:");
    println!("{}", result.best_sequence.iter().join(" "));
    println!("Best ACO tardiness: {}", result.best_aco_tardiness);
    println!("Solution tardiness: {}", result.best_tardiness);
    if verbose {
        // Pheromone of each job, in the order of the best sequence.
        println!(
            "Pheromones: {}",
            result
                .best_sequence
                .iter()
                .map(|&j| format!("{:.4}", result.pheromone[j]))
                .join(" ")
        );
    }
    if trace {
        for timed in schedule_trace(&result.best_sequence, instance) {
            println!(
                "Job: {}\tStart: {}\tProcessing Time: {}\tEnd: {}\tWeight: {}\tAdditional tardiness: {}",
                timed.job, timed.start, timed.processing_time, timed.end, timed.weight, timed.tardiness
            );
        }
    }
    println!("========================\n");
}

pub fn print_summary(report: &InstanceReport, path: &str) {
    println!("FILE: {}", path);
    println!("Mean solution provided by ACO: {:.6}", report.mean_aco_tardiness);
    println!("Best solution found for file: {}", report.best_tardiness);
    println!("CPU MEAN TIME: {:.6}s", report.mean_seconds);
    println!("{}", RULE);
    println!("{}\n", RULE);
}

pub fn write_json(output_path: &str, reports: &[InstanceReport]) -> Result<()> {
    let contents = serde_json::to_string_pretty(reports)?;
    fs::write(output_path, contents)
        .with_context(|| format!("unable to write report file {}", output_path))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::worked_example;

    fn run_report(run: usize, aco: u64, best: u64, seconds: f64) -> RunReport {
        RunReport {
            run,
            seed: run as u64,
            seconds,
            result: RunResult {
                best_sequence: vec![1, 0, 2],
                best_tardiness: best,
                best_aco_tardiness: aco,
                history: vec![best],
                pheromone: vec![1.0, 1.0, 1.0],
            },
        }
    }

    #[test]
    fn test_instance_report_statistics() {
        let instance = worked_example();
        let report = InstanceReport::new(
            &instance,
            vec![run_report(0, 4, 2, 0.5), run_report(1, 6, 3, 1.5)],
        );
        assert_eq!(report.job_count, 3);
        assert_eq!(report.mean_aco_tardiness, 5.0);
        assert_eq!(report.best_tardiness, 2);
        assert_eq!(report.mean_seconds, 1.0);
    }

    #[test]
    fn test_write_json() {
        let instance = worked_example();
        let report = InstanceReport::new(&instance, vec![run_report(0, 4, 2, 0.5)]);
        let path = std::env::temp_dir().join("lsaco_wt_report_test.json");
        write_json(path.to_str().unwrap(), &[report]).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value[0]["name"], "worked");
        assert_eq!(value[0]["best_tardiness"], 2);
        assert_eq!(value[0]["runs"][0]["result"]["best_sequence"][1], 0);
        fs::remove_file(&path).unwrap();
    }
}
