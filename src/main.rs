// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! `dimer`: randomize and inspect double-dimer configurations.
//!
//! # Usage
//! ```text
//! dimer randomize DIR [--pane a|b|both] [--steps N] [--seed S] [--proposal active|any] [--rescan]
//! dimer count DIR
//! dimer active DIR
//! dimer highlight DIR R1 C1 R2 C2
//! ```
//!
//! Set `RUST_LOG` to adjust logging, e.g. `RUST_LOG=dimer_paint=trace`.

use anyhow::{anyhow, Context};
use clap::{Parser, Subcommand, ValueEnum};
use dimer_paint::dynamics::{ActiveTracking, Proposal, SamplerOptions};
use dimer_paint::{Edge, PaneId, Session, Vertex};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "dimer", version, about = "Dimer configurations on hexagonal lattices")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Randomize matchings by Glauber dynamics and write them back.
    Randomize {
        dir: PathBuf,
        #[arg(long, value_enum, default_value_t = PaneArg::Both)]
        pane: PaneArg,
        /// Steps per pane; defaults to the stored randomize_steps.
        #[arg(long)]
        steps: Option<usize>,
        /// Seed for reproducible runs.
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, value_enum, default_value_t = ProposalArg::Active)]
        proposal: ProposalArg,
        /// Retest every hexagon after each flip.
        #[arg(long)]
        rescan: bool,
    },
    /// Count loops, doubled edges and open paths of A over B.
    Count { dir: PathBuf },
    /// List the active hexagons of each pane.
    Active { dir: PathBuf },
    /// Toggle the highlight of the strand through an edge.
    #[command(allow_negative_numbers = true)]
    Highlight {
        dir: PathBuf,
        r1: i32,
        c1: i32,
        r2: i32,
        c2: i32,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum PaneArg {
    A,
    B,
    Both,
}

impl PaneArg {
    fn panes(self) -> &'static [PaneId] {
        match self {
            PaneArg::A => &[PaneId::A],
            PaneArg::B => &[PaneId::B],
            PaneArg::Both => &PaneId::BOTH,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ProposalArg {
    Active,
    Any,
}

fn load(dir: &Path) -> anyhow::Result<Session> {
    let session = Session::load(dir).with_context(|| format!("loading {}", dir.display()))?;
    for id in PaneId::BOTH {
        if let Err(e) = session.validate(id) {
            warn!(pane = %id, "matching is not a perfect matching of the lattice: {}", e);
        }
    }
    Ok(session)
}

fn randomize(
    dir: &Path,
    pane: PaneArg,
    steps: Option<usize>,
    seed: Option<u64>,
    options: SamplerOptions,
) -> anyhow::Result<()> {
    let mut session = load(dir)?;
    let steps = steps.unwrap_or_else(|| session.lengths.randomize_steps());
    let mut master = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    for &id in pane.panes() {
        let mut rng = StdRng::seed_from_u64(master.gen());
        let report = session
            .randomize_with(id, steps, options, &mut rng)
            .with_context(|| format!("randomizing pane {}", id))?;
        info!(
            pane = %id,
            active = report.active_hexagons,
            "{}",
            report.statistics
        );
    }
    session.save(dir)?;
    Ok(())
}

/// Filter from `RUST_LOG` directives, or `info` when they are absent or
/// unparseable.
fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

fn main() -> anyhow::Result<()> {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(directives.as_deref()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Randomize {
            dir,
            pane,
            steps,
            seed,
            proposal,
            rescan,
        } => {
            let options = SamplerOptions {
                proposal: match proposal {
                    ProposalArg::Active => Proposal::ActiveHexagon,
                    ProposalArg::Any => Proposal::AnyHexagon,
                },
                tracking: if rescan {
                    ActiveTracking::Rescan
                } else {
                    ActiveTracking::Incremental
                },
            };
            randomize(&dir, pane, steps, seed, options)?;
        }
        Command::Count { dir } => {
            let session = load(&dir)?;
            println!("{}", session.summary()?);
        }
        Command::Active { dir } => {
            let session = load(&dir)?;
            for id in PaneId::BOTH {
                let active = session.active_hexagons(id)?;
                println!("{}: {} active {:?}", id, active.len(), active);
            }
        }
        Command::Highlight {
            dir,
            r1,
            c1,
            r2,
            c2,
        } => {
            let (a, b) = (Vertex::new(r1, c1), Vertex::new(r2, c2));
            let edge =
                Edge::try_new(a, b).ok_or_else(|| anyhow!("edge endpoints coincide at {}", a))?;
            let mut session = load(&dir)?;
            let outcome = session.highlight_path(PaneId::A, edge)?;
            println!(
                "{:?} {} edges: {}",
                outcome.toggle,
                outcome.path.edge_count(),
                outcome.path
            );
            println!("{} edges highlighted", session.highlight(PaneId::A).len());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn test_log_filter_defaults_to_info() {
        assert_eq!(log_filter(None).max_level_hint(), Some(LevelFilter::INFO));
        assert_eq!(
            log_filter(Some("dimer_paint=nonsense")).max_level_hint(),
            Some(LevelFilter::INFO)
        );
    }

    #[test]
    fn test_log_filter_honors_global_level() {
        assert_eq!(log_filter(Some("warn")).max_level_hint(), Some(LevelFilter::WARN));
        assert_eq!(
            log_filter(Some("dimer_paint=trace")).max_level_hint(),
            Some(LevelFilter::TRACE)
        );
    }
}
