use eyre::{Result, WrapErr};
use log::{debug, info};
use rand::{distributions::Uniform, rngs::StdRng, Rng};
use serde::Serialize;
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
    time::{Duration, Instant},
};

#[derive(Serialize, Debug, Clone)]
pub struct ExperimentRun<P> {
    pub param: P,
    pub setup_time: Duration,
    pub query_time: Duration,
}

pub trait Experiment: Serialize {
    type Resource;
    type Param: Clone + std::fmt::Debug;
    type I: Iterator<Item = Self::Param>;

    fn iter_params(&self) -> Self::I;
    fn setup(&self, rng: &mut StdRng, param: &Self::Param) -> Self::Resource;
    fn execute_queries(&self, rng: &mut StdRng, resource: &mut Self::Resource) -> Duration;

    fn create_runs(&self, rng: &mut StdRng) -> Vec<ExperimentRun<Self::Param>> {
        let runs = self
            .iter_params()
            .map(|param| {
                debug!("Setting up run with parameter: {param:?}");
                let now = Instant::now();
                let mut resource = self.setup(rng, &param);
                let setup_time = now.elapsed();
                let query_time = self.execute_queries(rng, &mut resource);
                ExperimentRun {
                    param,
                    setup_time,
                    query_time,
                }
            })
            .collect::<Vec<_>>();
        info!("Finished {} runs", runs.len());
        runs
    }

    fn save<S: AsRef<Path>>(&self, fname: S) -> Result<()> {
        let file = File::create(fname).wrap_err("could not create experiment output file")?;
        let mut writer = BufWriter::new(file);
        write!(
            &mut writer,
            "{}",
            serde_json::to_string(self).wrap_err("Could not serialize experiment")?
        )?;
        writer.flush()?;
        Ok(())
    }
}

/// A sorted vector of `size` values drawn uniformly from `[0, size]`
pub fn generate_sorted_vec_of_size(size: u64, rng: &mut StdRng) -> Vec<i64> {
    let distribution = Uniform::new_inclusive(0, size as i64);
    let mut values = rng
        .sample_iter(distribution)
        .take(size as usize)
        .collect::<Vec<i64>>();
    values.sort_unstable();
    values
}
