use rand::Rng;

pub const INITIAL_PHEROMONE: f64 = 1.0;

#[derive(Debug, Clone)]
pub struct PheromoneTrail {
    levels: Vec<f64>,
    evaporation_rate: f64,
    min_pheromone: f64,
    ceiling: Option<f64>,
}

impl PheromoneTrail {
    pub fn new(
        job_count: usize,
        evaporation_rate: f64,
        min_pheromone: f64,
        ceiling: Option<f64>,
    ) -> Self {
        let mut trail = Self {
            levels: vec![0.0; job_count],
            evaporation_rate,
            min_pheromone,
            ceiling,
        };
        trail.reset();
        trail
    }

    pub fn reset(&mut self) {
        self.levels.iter_mut().for_each(|l| *l = INITIAL_PHEROMONE);
    }

    pub fn levels(&self) -> &[f64] {
        &self.levels
    }

    pub fn evaporate(&mut self) {
        for level in &mut self.levels {
            *level *= 1.0 - self.evaporation_rate;
            if *level < self.min_pheromone {
                *level = self.min_pheromone;
            }
        }
    }

    // Rank bonus: position i earns job_count / (2i + 2), truncated to an integer.
    pub fn reinforce(&mut self, sequence: &[usize]) {
        let job_count = self.levels.len();
        for (i, &j) in sequence.iter().enumerate() {
            self.levels[j] += (job_count / (2 * i + 2)) as f64;
            if let Some(ceiling) = self.ceiling {
                self.levels[j] = self.levels[j].min(ceiling);
            }
        }
    }
}

/// Per-ant scratch state: which jobs are already sequenced and the current
/// selection probability of every job.
#[derive(Debug, Clone)]
pub struct ConstructionState {
    scheduled: Vec<bool>,
    probabilities: Vec<f64>,
    elapsed: i64,
}

impl ConstructionState {
    pub fn new(job_count: usize) -> Self {
        Self {
            scheduled: vec![false; job_count],
            probabilities: vec![0.0; job_count],
            elapsed: 0,
        }
    }

    pub fn reset(&mut self) {
        self.scheduled.iter_mut().for_each(|s| *s = false);
        self.probabilities.iter_mut().for_each(|p| *p = 0.0);
        self.elapsed = 0;
    }

    #[cfg(test)]
    pub fn probabilities(&self) -> &[f64] {
        &self.probabilities
    }

    pub fn elapsed(&self) -> i64 {
        self.elapsed
    }

    pub fn schedule(&mut self, job: usize, processing_time: u32) {
        self.scheduled[job] = true;
        self.elapsed += processing_time as i64;
    }

    pub fn compute_probabilities(&mut self, trail: &PheromoneTrail) {
        let levels = trail.levels();
        let mut sum: f64 = 0.0;
        let mut unscheduled: usize = 0;
        for (j, probability) in self.probabilities.iter_mut().enumerate() {
            if self.scheduled[j] {
                *probability = 0.0;
            } else {
                *probability = levels[j];
                sum += levels[j];
                unscheduled += 1;
            }
        }
        if unscheduled == 0 {
            return;
        }

        if sum > 0.0 && sum.is_finite() {
            self.probabilities.iter_mut().for_each(|p| *p /= sum);
        } else {
            let uniform = 1.0 / unscheduled as f64;
            for (j, probability) in self.probabilities.iter_mut().enumerate() {
                if !self.scheduled[j] {
                    *probability = uniform;
                }
            }
        }
    }

    /// Roulette wheel over the current probabilities for the draw `r` in
    /// `[0, 1)`. Falls back to the last unscheduled job when rounding leaves
    /// the cumulative sum short of `r`; `None` only if every job is scheduled.
    pub fn roulette(&self, r: f64) -> Option<usize> {
        let mut cumulative: f64 = 0.0;
        let mut last_unscheduled: Option<usize> = None;
        for (j, &probability) in self.probabilities.iter().enumerate() {
            if self.scheduled[j] {
                continue;
            }
            cumulative += probability;
            last_unscheduled = Some(j);
            if r < cumulative {
                return Some(j);
            }
        }
        last_unscheduled
    }

    pub fn select_job<T: Rng>(&self, rng: &mut T) -> Option<usize> {
        let r: f64 = rng.gen_range(0.0..1.0);
        self.roulette(r)
    }
}
