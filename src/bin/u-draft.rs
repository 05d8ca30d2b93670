//! Squad drafting CLI.
//!
//! `solve` drafts a squad from a player catalog and writes the two-line
//! solution; `validate` checks an existing solution against a catalog.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use env_logger::Env;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use u_draft::build::BuildConfig;
use u_draft::catalog::Catalog;
use u_draft::local::LocalSearchConfig;
use u_draft::pipeline::{Construction, Improvement, PipelineConfig, PipelineRunner};
use u_draft::sa::SaConfig;
use u_draft::solution::Solution;
use u_draft::tabu::TabuConfig;
use u_draft::validator;

#[derive(Parser)]
#[command(name = "u-draft")]
#[command(about = "Draft and validate fantasy-football squads", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draft a squad from a player catalog
    Solve {
        /// Player catalog (headerless CSV: id,position,name,club,points,price)
        instance: PathBuf,

        /// Construction heuristic: random or greedy
        #[arg(long, default_value = "random")]
        construction: Construction,

        /// Improvement heuristic: none, local, tabu or sa
        #[arg(long, default_value = "local")]
        improvement: Improvement,

        /// Seed for the random number generator
        #[arg(long, default_value_t = 0)]
        seed: u64,

        /// Number of independent starts, seeded seed, seed+1, ...
        #[arg(long, default_value_t = 1)]
        starts: u64,

        /// Maximum passes over the pool during random construction
        #[arg(long, default_value_t = BuildConfig::default().max_passes)]
        max_passes: usize,

        /// Candidates tried per slot by local search
        #[arg(long, default_value_t = LocalSearchConfig::default().candidates)]
        candidates: usize,

        /// Tabu search iterations
        #[arg(long, default_value_t = TabuConfig::default().max_iterations)]
        iterations: usize,

        /// Tabu memory capacity
        #[arg(long, default_value_t = TabuConfig::default().tabu_tenure)]
        tenure: usize,

        /// Initial annealing temperature
        #[arg(long, default_value_t = SaConfig::default().initial_temperature)]
        t0: f64,

        /// Output solution file; printed to stdout when omitted
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Check a solution file against a player catalog
    Validate {
        /// Player catalog
        instance: PathBuf,

        /// Two-line solution file
        solution: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Solve {
            instance,
            construction,
            improvement,
            seed,
            starts,
            max_passes,
            candidates,
            iterations,
            tenure,
            t0,
            out,
        } => {
            let catalog = load_catalog(&instance)?;
            let config = PipelineConfig::default()
                .with_construction(construction)
                .with_improvement(improvement)
                .with_build(BuildConfig::default().with_max_passes(max_passes))
                .with_local(LocalSearchConfig::default().with_candidates(candidates))
                .with_tabu(
                    TabuConfig::default()
                        .with_max_iterations(iterations)
                        .with_tabu_tenure(tenure),
                )
                .with_sa(SaConfig::default().with_initial_temperature(t0));

            let outcome = if starts > 1 {
                let seeds: Vec<u64> = (0..starts).map(|i| seed.wrapping_add(i)).collect();
                PipelineRunner::run_multistart(catalog.players(), &config, &seeds)
            } else {
                let mut rng = StdRng::seed_from_u64(seed);
                PipelineRunner::run(catalog.players(), &config, &mut rng)
            };
            let result = outcome.context("drafting failed")?;

            info!(
                "{construction} + {improvement}: score {}, price {:.1}",
                result.score,
                result.squad.total_price()
            );

            let solution = result.squad.to_solution();
            match out {
                Some(path) => solution
                    .write(&path)
                    .with_context(|| format!("writing solution to {}", path.display()))?,
                None => println!("{solution}"),
            }
        }

        Commands::Validate { instance, solution } => {
            let catalog = load_catalog(&instance)?;
            let parsed = Solution::read(&solution)
                .with_context(|| format!("reading solution {}", solution.display()))?;

            let report = validator::validate(&catalog, &parsed);
            println!("{report}");
            if !report.is_valid() {
                bail!("{} rule(s) broken", report.violations.len());
            }
        }
    }

    Ok(())
}

fn load_catalog(path: &Path) -> Result<Catalog> {
    let catalog = Catalog::from_path(path)
        .with_context(|| format!("loading catalog {}", path.display()))?;
    info!("loaded {} players from {}", catalog.len(), path.display());
    Ok(catalog)
}
