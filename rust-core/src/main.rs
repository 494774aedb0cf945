use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use env_logger::Env;
use log::{error, info, warn};
use serde::Serialize;

use cluster_expansion::config::EngineConfig;
use cluster_expansion::correlations::{
    CancellationToken, CorrelationCounter, CorrelationMatrix, OrbitCatalog,
};
use cluster_expansion::structures::{parse_clusters, parse_structures};
use cluster_expansion::symmetries::TabulatedSymmetry;

#[derive(Parser)]
#[command(name = "cluster-expansion")]
#[command(about = "Cluster orbits and decoration correlation counts for cluster expansions")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Number of threads to use (default: all available cores)
    #[arg(short, long)]
    threads: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the symmetry orbits of the base clusters
    Orbits {
        /// Cluster definition file ({"List": [...]})
        #[arg(short, long)]
        clusters: PathBuf,

        /// Symmetry operation table (default: cubic m-3m)
        #[arg(short, long)]
        symmetry: Option<PathBuf>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Count decorated clusters in every structure
    Count {
        /// Structure data file
        #[arg(long)]
        structures: PathBuf,

        /// Cluster definition file ({"List": [...]})
        #[arg(short, long)]
        clusters: PathBuf,

        /// Symmetry operation table (default: cubic m-3m)
        #[arg(short, long)]
        symmetry: Option<PathBuf>,

        /// Species convention, e.g. Fe,Ni,Cr
        #[arg(long, value_delimiter = ',')]
        species: Vec<String>,

        /// Engine configuration (JSON)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Output file for the count tables (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output file for the correlation matrix
        #[arg(short, long)]
        matrix: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Set thread pool size if specified
    if let Some(threads) = cli.threads {
        #[cfg(feature = "parallel")]
        {
            rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build_global()
                .context("Failed to set thread pool size")?;
            info!("Using {} threads", threads);
        }
        #[cfg(not(feature = "parallel"))]
        {
            warn!("Thread count {} specified but parallel feature not enabled. Ignoring.", threads);
        }
    }

    info!("Starting cluster-expansion v{}", cluster_expansion::VERSION);

    match cli.command {
        Commands::Orbits {
            clusters,
            symmetry,
            output,
        } => run_orbits(&clusters, symmetry.as_deref(), output.as_deref()),
        Commands::Count {
            structures,
            clusters,
            symmetry,
            species,
            config,
            output,
            matrix,
        } => {
            let mut engine_config = match config {
                Some(path) => EngineConfig::from_json_file(path)?,
                None => EngineConfig::default(),
            };
            if !species.is_empty() {
                engine_config = engine_config.with_species(species);
            }
            run_count(
                &structures,
                &clusters,
                symmetry.as_deref(),
                engine_config,
                output.as_deref(),
                matrix.as_deref(),
            )
        }
    }
}

fn load_symmetry(path: Option<&Path>) -> Result<TabulatedSymmetry> {
    match path {
        Some(path) => {
            info!("Reading symmetry operations from {}", path.display());
            TabulatedSymmetry::from_json_file(path)
        }
        None => {
            info!("No symmetry table given, using cubic m-3m");
            Ok(TabulatedSymmetry::cubic())
        }
    }
}

fn run_orbits(clusters: &Path, symmetry: Option<&Path>, output: Option<&Path>) -> Result<()> {
    let symmetry = load_symmetry(symmetry)?;
    let clusters = parse_clusters(clusters)?;
    let catalog = OrbitCatalog::build(&clusters, &symmetry, &EngineConfig::default())?;
    for (index, entry) in catalog.clusters().iter().enumerate() {
        info!(
            "cluster #{}: {} sites, {} orbit members, multiplicity {}",
            index + 1,
            entry.cluster_size(),
            entry.orbit().len(),
            entry.multiplicity()
        );
    }
    write_json(&catalog, output)
}

fn run_count(
    structures: &Path,
    clusters: &Path,
    symmetry: Option<&Path>,
    config: EngineConfig,
    output: Option<&Path>,
    matrix: Option<&Path>,
) -> Result<()> {
    let symmetry = load_symmetry(symmetry)?;
    let clusters = parse_clusters(clusters)?;
    let structures = parse_structures(structures)?;
    info!(
        "Read {} clusters and {} structures",
        clusters.len(),
        structures.len()
    );

    let catalog = OrbitCatalog::build(&clusters, &symmetry, &config)?;
    let counter = CorrelationCounter::new(catalog, config);
    let report = counter.count_all(&structures, &CancellationToken::new());

    for failure in &report.failures {
        error!("{}: {}", failure.structure, failure.error);
    }
    write_json(&report.counts, output)?;

    if let Some(path) = matrix {
        let energies: HashMap<String, f64> = structures
            .iter()
            .filter_map(|s| s.energy_per_atom().map(|e| (s.name().to_string(), e)))
            .collect();
        let design = CorrelationMatrix::from_counts(&report.counts, &energies);
        info!(
            "Correlation matrix: {} structures x {} columns",
            design.n_rows(),
            design.n_columns()
        );
        write_json(&design, Some(path))?;
    }

    if !report.failures.is_empty() {
        bail!(
            "{} of {} structures failed",
            report.failures.len(),
            structures.len()
        );
    }
    Ok(())
}

fn write_json<T: Serialize>(value: &T, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("creating output file {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            serde_json::to_writer_pretty(&mut writer, value)?;
            writer.flush()?;
            info!("Wrote {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            serde_json::to_writer_pretty(&mut writer, value)?;
            writeln!(writer)?;
        }
    }
    Ok(())
}
