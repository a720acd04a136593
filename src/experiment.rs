//! Batch experiment runner comparing heuristic performance.
//!
//! Generates a set of random instances once, then runs every heuristic
//! through the same engine on the same instances and aggregates the
//! per-trial statistics into per-heuristic summaries.

use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::{random, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::puzzle::{GoalSet, PuzzleGame, State};
use crate::search::{AStar, Heuristic, ManhattanDistance, MisplacedLinearConflict, SearchStats};

/// Experiment configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperimentConfig {
    /// Number of random initial states.
    pub trials: usize,
    /// Iteration budget per search invocation.
    pub max_iterations: usize,
    /// Seed for reproducible instance generation.
    pub seed: Option<u64>,
    /// Whether to show a progress bar.
    pub progress: bool,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            trials: 100,
            max_iterations: 10_000,
            seed: None,
            progress: true,
        }
    }
}

/// Outcome of one search invocation on one instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrialRecord {
    pub trial: usize,
    /// Compact encoding of the initial board.
    pub initial: String,
    pub solved: bool,
    pub stats: SearchStats,
}

/// Aggregated results for one heuristic across all trials.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeuristicSummary {
    pub heuristic: String,
    pub trials: usize,
    pub solved: usize,
    pub success_rate: f64,
    /// Mean over solved trials only; `None` when nothing was solved.
    pub mean_path_length: Option<f64>,
    pub mean_nodes_expanded: f64,
    pub median_nodes_expanded: f64,
    pub mean_max_frontier_size: f64,
    pub mean_time_ms: f64,
    pub records: Vec<TrialRecord>,
}

/// Full experiment output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperimentReport {
    pub config: ExperimentConfig,
    /// The seed actually used, recorded so unseeded runs stay reproducible.
    pub seed: u64,
    pub summaries: Vec<HeuristicSummary>,
}

/// Runs the heuristic comparison experiment.
pub struct ExperimentRunner {
    config: ExperimentConfig,
}

impl ExperimentRunner {
    pub fn new(config: ExperimentConfig) -> Self {
        ExperimentRunner { config }
    }

    /// Generate the trial instances and run every heuristic on them.
    ///
    /// # Errors
    ///
    /// Returns error when the configuration requests zero trials or the
    /// progress bar template fails to parse.
    pub fn run(&self) -> crate::Result<ExperimentReport> {
        if self.config.trials == 0 {
            return Err(crate::Error::InvalidConfiguration {
                message: "trials must be at least 1".to_string(),
            });
        }
        let seed = self.config.seed.unwrap_or_else(random);
        let mut rng = StdRng::seed_from_u64(seed);

        let goals = GoalSet::standard();
        let instances: Vec<State> = (0..self.config.trials)
            .map(|_| PuzzleGame::random_state(&mut rng))
            .collect();

        let heuristics: Vec<Box<dyn Heuristic>> = vec![
            Box::new(ManhattanDistance::new()),
            Box::new(MisplacedLinearConflict::new()),
        ];

        let mut summaries = Vec::with_capacity(heuristics.len());
        for heuristic in heuristics {
            let name = heuristic.name().to_string();
            let engine = AStar::from_boxed(heuristic);
            let progress = self.make_progress(&name)?;

            let mut records = Vec::with_capacity(instances.len());
            for (trial, initial) in instances.iter().enumerate() {
                let (path, stats) =
                    engine.search(initial, &goals, self.config.max_iterations);
                records.push(TrialRecord {
                    trial,
                    initial: initial.encode(),
                    solved: path.is_some(),
                    stats,
                });
                if let Some(pb) = &progress {
                    pb.inc(1);
                }
            }
            if let Some(pb) = &progress {
                pb.finish_and_clear();
            }

            summaries.push(Self::summarize(name, records));
        }

        Ok(ExperimentReport {
            config: self.config.clone(),
            seed,
            summaries,
        })
    }

    fn make_progress(&self, name: &str) -> crate::Result<Option<ProgressBar>> {
        if !self.config.progress {
            return Ok(None);
        }
        let pb = ProgressBar::new(self.config.trials as u64);
        let style = ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} trials ({msg})")
            .map_err(|e| crate::Error::ProgressBarTemplate {
                message: e.to_string(),
            })?
            .progress_chars("=>-");
        pb.set_style(style);
        pb.set_message(name.to_string());
        Ok(Some(pb))
    }

    fn summarize(heuristic: String, records: Vec<TrialRecord>) -> HeuristicSummary {
        let trials = records.len();
        let solved = records.iter().filter(|r| r.solved).count();

        let path_lengths: Vec<f64> = records
            .iter()
            .filter_map(|r| r.stats.path_length)
            .map(|len| len as f64)
            .collect();
        let nodes: Vec<f64> = records
            .iter()
            .map(|r| r.stats.nodes_expanded as f64)
            .collect();
        let frontiers: Vec<f64> = records
            .iter()
            .map(|r| r.stats.max_frontier_size as f64)
            .collect();
        let times_ms: Vec<f64> = records
            .iter()
            .map(|r| r.stats.time_taken.as_secs_f64() * 1000.0)
            .collect();

        HeuristicSummary {
            heuristic,
            trials,
            solved,
            success_rate: if trials > 0 {
                solved as f64 / trials as f64
            } else {
                0.0
            },
            mean_path_length: mean(&path_lengths),
            mean_nodes_expanded: mean(&nodes).unwrap_or(0.0),
            median_nodes_expanded: median(nodes).unwrap_or(0.0),
            mean_max_frontier_size: mean(&frontiers).unwrap_or(0.0),
            mean_time_ms: mean(&times_ms).unwrap_or(0.0),
            records,
        }
    }
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

fn median(mut values: Vec<f64>) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    values.sort_by(|a, b| a.total_cmp(b));
    let mid = values.len() / 2;
    if values.len() % 2 == 0 {
        Some((values[mid - 1] + values[mid]) / 2.0)
    } else {
        Some(values[mid])
    }
}
