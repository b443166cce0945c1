use std::{
    hint::black_box,
    iter::StepBy,
    ops::RangeInclusive,
    path::PathBuf,
    time::{Duration, Instant},
};

use bisect::{
    binary_search::{bisect_left, bisect_right},
    cli::{Bias, InsortCommands, InsortExperimentArgs, SweepArgs},
    comparator::compare_int,
    experiment::{generate_sorted_vec_of_size, Experiment, ExperimentRun},
    insort::{insort_left, insort_right},
};
use clap::Parser;
use eyre::{Context, Result};
use log::info;
use rand::{distributions::Uniform, rngs::StdRng, Rng, SeedableRng};
use serde::Serialize;

#[derive(Serialize)]
pub struct BisectExperiment {
    params: SweepArgs,
    runs: Vec<ExperimentRun<u64>>,
    outfile: PathBuf,
}

impl BisectExperiment {
    pub fn new(params: SweepArgs, outfile: PathBuf) -> Self {
        Self {
            runs: Vec::new(),
            params,
            outfile,
        }
    }
}

#[derive(Serialize)]
pub struct InsortExperiment {
    params: SweepArgs,
    runs: Vec<ExperimentRun<u64>>,
    outfile: PathBuf,
}

impl InsortExperiment {
    pub fn new(params: SweepArgs, outfile: PathBuf) -> Self {
        Self {
            runs: Vec::new(),
            params,
            outfile,
        }
    }
}

fn probe_distribution(resource: &[i64]) -> Uniform<i64> {
    Uniform::new_inclusive(-1, resource.len() as i64 + 1)
}

impl Experiment for BisectExperiment {
    type Resource = Vec<i64>;
    type Param = u64;
    type I = StepBy<RangeInclusive<u64>>;

    fn iter_params(&self) -> Self::I {
        (self.params.min_size..=self.params.max_size).step_by(self.params.step_size)
    }

    fn setup(&self, rng: &mut StdRng, param: &Self::Param) -> Self::Resource {
        generate_sorted_vec_of_size(*param, rng)
    }

    fn execute_queries(&self, rng: &mut StdRng, resource: &mut Self::Resource) -> Duration {
        let bias = self.params.bias;
        rng.sample_iter(probe_distribution(resource))
            .take(self.params.query_size as usize)
            .map(|x: i64| {
                let now = Instant::now();
                black_box(match bias {
                    Bias::Left => bisect_left(resource.as_slice(), &x, 0, None, compare_int),
                    Bias::Right => bisect_right(resource.as_slice(), &x, 0, None, compare_int),
                });
                now.elapsed()
            })
            .sum()
    }
}

impl Experiment for InsortExperiment {
    type Resource = Vec<i64>;
    type Param = u64;
    type I = StepBy<RangeInclusive<u64>>;

    fn iter_params(&self) -> Self::I {
        (self.params.min_size..=self.params.max_size).step_by(self.params.step_size)
    }

    fn setup(&self, rng: &mut StdRng, param: &Self::Param) -> Self::Resource {
        let mut values = generate_sorted_vec_of_size(*param, rng);
        values.reserve(self.params.query_size as usize);
        values
    }

    fn execute_queries(&self, rng: &mut StdRng, resource: &mut Self::Resource) -> Duration {
        let bias = self.params.bias;
        let probes = rng
            .sample_iter(probe_distribution(resource))
            .take(self.params.query_size as usize)
            .collect::<Vec<i64>>();
        probes
            .into_iter()
            .map(|x| {
                let now = Instant::now();
                match bias {
                    Bias::Left => insort_left(resource, x, 0, None, compare_int),
                    Bias::Right => insort_right(resource, x, 0, None, compare_int),
                }
                now.elapsed()
            })
            .sum()
    }
}

pub enum SortedVecExperiment {
    Bisect(BisectExperiment),
    Insort(InsortExperiment),
}

impl SortedVecExperiment {
    pub fn new(args: InsortExperimentArgs) -> Self {
        match args.command {
            InsortCommands::Bisect(sweep) => {
                Self::Bisect(BisectExperiment::new(sweep, args.outfile))
            }
            InsortCommands::Insort(sweep) => {
                Self::Insort(InsortExperiment::new(sweep, args.outfile))
            }
        }
    }

    pub fn run(&mut self, rng: &mut StdRng) {
        match self {
            Self::Bisect(experiment) => {
                info!("Running bisect sweep with {:?} bias", experiment.params.bias);
                experiment.runs.extend(experiment.create_runs(rng));
            }
            Self::Insort(experiment) => {
                info!("Running insort sweep with {:?} bias", experiment.params.bias);
                experiment.runs.extend(experiment.create_runs(rng));
            }
        }
    }

    pub fn save(&self) -> Result<()> {
        match self {
            Self::Bisect(experiment) => {
                experiment
                    .save(&experiment.outfile)
                    .wrap_err("Failed to save bisect experiment results")?;
                info!("Wrote results to {}", experiment.outfile.display());
            }
            Self::Insort(experiment) => {
                experiment
                    .save(&experiment.outfile)
                    .wrap_err("Failed to save insort experiment results")?;
                info!("Wrote results to {}", experiment.outfile.display());
            }
        }
        Ok(())
    }
}

pub fn main() -> Result<()> {
    env_logger::init();
    let args = InsortExperimentArgs::parse();
    args.sweep().validate()?;
    let mut rng = match args.sweep().seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut experiment = SortedVecExperiment::new(args);
    experiment.run(&mut rng);
    experiment.save()?;
    Ok(())
}
