use crate::params::Params;
use clap::Parser;

const APP_NAME: &str = env!("CARGO_PKG_NAME");
const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser, Debug)]
#[command(name = APP_NAME)]
#[command(version = VERSION)]
#[command(
    about = "Ant colony optimization with local search for single-machine weighted tardiness",
    long_about = None
)]
pub struct Args {
    /// Instance files: a job count followed by one `processing_time due_date weight` line per job
    #[arg(required = true)]
    pub instances: Vec<String>,

    /// JSON file with solver parameters; command-line values take precedence
    #[arg(short, long)]
    pub config: Option<String>,

    /// Independent runs per instance
    #[arg(short, long)]
    pub runs: Option<usize>,

    /// ACO iterations per run
    #[arg(short, long)]
    pub iterations: Option<usize>,

    /// Fraction of pheromone removed after every iteration
    #[arg(long)]
    pub evaporation_rate: Option<f64>,

    /// Lower bound for pheromone levels
    #[arg(long)]
    pub min_pheromone: Option<f64>,

    /// Upper bound for pheromone levels (unbounded when omitted)
    #[arg(long)]
    pub pheromone_ceiling: Option<f64>,

    /// Ants per iteration (defaults to twice the job count)
    #[arg(short, long)]
    pub ants: Option<usize>,

    /// Base seed; run k uses seed + k
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Print the per-job timing of every run's best sequence
    #[arg(long)]
    pub trace: bool,

    /// Debug logging and final pheromone levels in the report
    #[arg(short, long)]
    pub verbose: bool,

    /// Execute the runs of an instance on a thread pool
    #[arg(long)]
    pub parallel_runs: bool,

    /// Write all instance reports to this JSON file
    #[arg(short, long)]
    pub output: Option<String>,
}

impl Args {
    pub fn apply_overrides(&self, mut params: Params) -> Params {
        if let Some(runs) = self.runs {
            params.runs_per_instance = runs;
        }
        if let Some(iterations) = self.iterations {
            params.iteration_count = iterations;
        }
        if let Some(evaporation_rate) = self.evaporation_rate {
            params.evaporation_rate = evaporation_rate;
        }
        if let Some(min_pheromone) = self.min_pheromone {
            params.min_pheromone = min_pheromone;
        }
        if self.pheromone_ceiling.is_some() {
            params.pheromone_ceiling = self.pheromone_ceiling;
        }
        if self.ants.is_some() {
            params.ant_count = self.ants;
        }
        if self.seed.is_some() {
            params.seed = self.seed;
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_take_precedence() {
        let args = Args::parse_from([
            APP_NAME,
            "a.dat",
            "b.dat",
            "--runs",
            "2",
            "--evaporation-rate",
            "0.2",
            "--seed",
            "9",
        ]);
        assert_eq!(args.instances, vec!["a.dat", "b.dat"]);
        let base = Params {
            iteration_count: 12,
            ..Params::default()
        };
        let params = args.apply_overrides(base);
        assert_eq!(params.runs_per_instance, 2);
        assert_eq!(params.evaporation_rate, 0.2);
        assert_eq!(params.seed, Some(9));
        assert_eq!(params.iteration_count, 12);
        assert_eq!(params.ant_count, None);
    }

    #[test]
    fn test_instances_are_required() {
        assert!(Args::try_parse_from([APP_NAME]).is_err());
    }
}
