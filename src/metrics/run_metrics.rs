use std::time::{Duration, Instant};

/// Statistics for the current simulation run
#[derive(Debug, Clone, PartialEq)]
pub struct RunMetrics {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    /// Generations computed since the run started
    pub generation: u64,
    pub population: usize,
    pub peak_population: usize,
    /// Number of times the simulation has been started this session
    pub runs: u32,
}

impl RunMetrics {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            generation: 0,
            population: 0,
            peak_population: 0,
            runs: 0,
        }
    }

    pub fn update(&mut self) {
        self.elapsed_time = self.start_time.elapsed();
    }

    pub fn on_run_start(&mut self, population: usize) {
        self.start_time = Instant::now();
        self.elapsed_time = Duration::ZERO;
        self.generation = 0;
        self.population = population;
        self.peak_population = population;
        self.runs += 1;
    }

    pub fn on_generation(&mut self, population: usize) {
        self.generation += 1;
        self.population = population;
        if population > self.peak_population {
            self.peak_population = population;
        }
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for RunMetrics {
    fn default() -> Self {
        Self::new()
    }
}
