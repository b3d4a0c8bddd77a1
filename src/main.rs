use std::io::{self, BufWriter};

use anyhow::{Context, Result};
use clap::Parser;
use quadsys::{EquationSystem, Generator, SystemConfig};
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Generate a random sparse system of quadratic equations, one grammar
/// rule per variable, on stdout.
///
/// Example: `gen_eqs 14 0.7`
#[derive(Parser)]
#[command(name = "gen_eqs")]
#[command(version)]
struct Cli {
    /// Number of variables (and equations)
    n: usize,

    /// Density in (0, 1]: fraction of all monomials present in each equation
    eps: f64,

    /// Seed the random source for a reproducible system
    #[arg(short, long)]
    seed: Option<u64>,

    /// Draw the equations in parallel
    #[arg(short, long)]
    parallel: bool,
}

fn draw<R: Rng + ?Sized>(generator: &Generator, parallel: bool, rng: &mut R) -> EquationSystem {
    if parallel {
        generator.generate_par(rng)
    } else {
        generator.generate(rng)
    }
}

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries only rules
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("quadsys=warn,gen_eqs=warn")),
        )
        .init();

    let cli = Cli::parse();

    let config = SystemConfig::new(cli.n, cli.eps).context("invalid parameters")?;
    let generator = Generator::new(config).context("cannot build the requested system")?;
    tracing::info!(
        n = cli.n,
        eps = cli.eps,
        budget = generator.term_budget(),
        seed = ?cli.seed,
        "generating system"
    );

    let system = match cli.seed {
        Some(seed) => draw(&generator, cli.parallel, &mut StdRng::seed_from_u64(seed)),
        None => draw(&generator, cli.parallel, &mut rand::rng()),
    };

    let stdout = io::stdout();
    system
        .emit(BufWriter::new(stdout.lock()))
        .context("failed to write equations")?;
    Ok(())
}
