//! Rubik CLI - solve, scramble and inspect 3x3x3 cubes

use anyhow::Result;
use clap::{Parser, Subcommand};
use rubik::{CommandSolver, LabelScheme, Solver};
use rubik_cli::{commands, input};
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "rubik")]
#[command(version, about = "Rubik's cube solver and notation tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a cube with an external two-phase solver
    Solve {
        /// Cube state JSON file. Without it, faces are typed in one by one
        #[arg(short, long)]
        state: Option<PathBuf>,

        /// How colors are turned into face labels: center or fixed
        #[arg(short, long, default_value_t = LabelScheme::Center)]
        labels: LabelScheme,

        /// Solver program; called as `<solver> <args...> <facelets>`
        #[arg(long, default_value = CommandSolver::DEFAULT_PROGRAM)]
        solver: PathBuf,

        /// Extra argument passed to the solver before the facelets (repeatable)
        #[arg(long = "solver-arg", allow_hyphen_values = true)]
        solver_args: Vec<String>,

        /// Seconds to wait for the solver; 0 waits indefinitely
        #[arg(long, default_value_t = CommandSolver::DEFAULT_TIMEOUT.as_secs())]
        timeout: u64,
    },

    /// Print a random scramble and the faces it produces
    Scramble {
        /// Number of moves
        #[arg(short = 'n', long, default_value_t = rubik::scramble::DEFAULT_LENGTH)]
        length: usize,

        /// Seed for a reproducible scramble
        #[arg(long)]
        seed: Option<u64>,

        /// Print a JSON document instead of text
        #[arg(long)]
        json: bool,
    },

    /// Apply a move sequence such as "R U R' U'" and show the result
    Apply {
        /// Moves in standard notation
        sequence: String,

        /// Starting cube state JSON file (default: solved)
        #[arg(short, long)]
        state: Option<PathBuf>,
    },

    /// Print the 54-character facelet string for a cube
    Encode {
        /// Cube state JSON file (default: solved)
        #[arg(short, long)]
        state: Option<PathBuf>,

        /// How colors are turned into face labels: center or fixed
        #[arg(short, long, default_value_t = LabelScheme::Center)]
        labels: LabelScheme,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mut stdout = io::stdout().lock();

    match cli.command {
        Commands::Solve {
            state,
            labels,
            solver,
            solver_args,
            timeout,
        } => {
            let cube = match state {
                Some(path) => input::load_state(&path)?,
                None => input::prompt_cube(&mut io::stdin().lock(), &mut stdout)?,
            };
            let algorithm = CommandSolver::new(solver)
                .with_args(solver_args)
                .with_timeout((timeout > 0).then(|| Duration::from_secs(timeout)));
            let solver = Solver::new(algorithm).with_labels(labels);
            commands::solve(&cube, &solver, &mut stdout)?;
        }
        Commands::Scramble { length, seed, json } => {
            commands::scramble(length, seed, json, &mut stdout)?;
        }
        Commands::Apply { sequence, state } => {
            let cube = input::load_or_solved(state.as_deref())?;
            commands::apply(cube, &sequence, &mut stdout)?;
        }
        Commands::Encode { state, labels } => {
            let cube = input::load_or_solved(state.as_deref())?;
            commands::encode(&cube, labels, &mut stdout)?;
        }
    }

    Ok(())
}
