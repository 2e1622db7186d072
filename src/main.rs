mod cli;
mod colony;
mod instance_data;
mod local_search;
mod lsaco;
mod params;
mod pheromone;
mod report;
mod solution;
mod utils;

use crate::cli::Args;
use crate::instance_data::{read_instance, InstanceData};
use crate::lsaco::LsAco;
use crate::params::Params;
use crate::report::{InstanceReport, RunReport};
use anyhow::{bail, Result};
use clap::Parser;
use rand::SeedableRng;
use rand_pcg::Pcg64;
use rayon::prelude::*;
use std::time::Instant;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

fn enable_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn solve_instance(
    instance: &InstanceData,
    params: &Params,
    seed: u64,
    parallel_runs: bool,
) -> Vec<RunReport> {
    let lsaco = LsAco::from_params(instance, params);
    let single_run = |run: usize| -> RunReport {
        let run_seed = seed.wrapping_add(run as u64);
        let mut rng = Pcg64::seed_from_u64(run_seed);
        let now = Instant::now();
        let result = lsaco.run(&mut rng);
        let seconds = now.elapsed().as_secs_f64();
        debug!(
            instance = %instance.name,
            run = run + 1,
            seed = run_seed,
            best_tardiness = result.best_tardiness,
            best_aco_tardiness = result.best_aco_tardiness,
            seconds,
            "run finished"
        );
        RunReport {
            run,
            seed: run_seed,
            seconds,
            result,
        }
    };

    if parallel_runs {
        (0..params.runs_per_instance)
            .into_par_iter()
            .map(single_run)
            .collect()
    } else {
        (0..params.runs_per_instance).map(single_run).collect()
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    enable_tracing(args.verbose);

    let params = match &args.config {
        Some(config_path) => Params::load(config_path)?,
        None => Params::default(),
    };
    let params = args.apply_overrides(params);
    params.validate()?;
    let seed = params.seed.unwrap_or_else(rand::random);
    info!(
        seed,
        runs = params.runs_per_instance,
        iterations = params.iteration_count,
        evaporation_rate = params.evaporation_rate,
        "starting"
    );

    let mut reports: Vec<InstanceReport> = Vec::with_capacity(args.instances.len());
    for instance_path in &args.instances {
        let instance = match read_instance(instance_path) {
            Ok(instance) => instance,
            Err(e) => {
                error!("skipping instance: {:#}", e);
                continue;
            }
        };
        info!(
            instance = %instance.name,
            jobs = instance.job_count(),
            ants = params.ant_count(instance.job_count()),
            "solving"
        );

        report::print_header(&instance, instance_path, args.verbose);
        let runs = solve_instance(&instance, &params, seed, args.parallel_runs);
        for run in &runs {
            report::print_run(run, &instance, args.trace, args.verbose);
        }
        let instance_report = InstanceReport::new(&instance, runs);
        report::print_summary(&instance_report, instance_path);
        info!(
            instance = %instance.name,
            best_tardiness = instance_report.best_tardiness,
            mean_aco_tardiness = instance_report.mean_aco_tardiness,
            "instance finished"
        );
        reports.push(instance_report);
    }

    if let Some(output_path) = &args.output {
        report::write_json(output_path, &reports)?;
        info!(path = %output_path, reports = reports.len(), "report written");
    }
    if reports.is_empty() {
        bail!("none of the {} instances could be read", args.instances.len());
    }
    Ok(())
}
