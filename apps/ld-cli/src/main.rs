use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};

use ld_app::{load_run, load_sample, AppError, AppResult, RunArtifacts, SampleArtifacts};
use ld_artifacts::ArtifactCache;
use ld_core::RunLocator;
use ld_platform::client::DEFAULT_API_HOST;
use ld_platform::PollinationClient;
use ld_report::{
    credit_csv_bytes, credit_rows, CreditStyle, CreditSummary, SpaceSummary,
    CREDIT_EXPORT_FILE, DEFAULT_NOTABLE_THRESHOLD, SPACE_EXPORT_FILE,
};

#[derive(Parser)]
#[command(name = "ld-cli")]
#[command(about = "LEED Daylight Option II - run results and visualization pipeline", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a run: validate, fetch its outputs and build the visualization
    Load {
        /// Run URL as shared from the platform web app
        url: Option<String>,
        /// Project owner account (alternative to the URL form)
        #[arg(long)]
        owner: Option<String>,
        /// Project name
        #[arg(long)]
        project: Option<String>,
        /// Study (job) id
        #[arg(long)]
        job: Option<String>,
        /// Run id
        #[arg(long)]
        run: Option<String>,
        /// Cache directory for downloaded artifacts
        #[arg(long, default_value = ".leed-daylight")]
        cache_dir: PathBuf,
        /// Platform API host
        #[arg(long, default_value = DEFAULT_API_HOST)]
        api_host: String,
        /// API token; falls back to the POLLINATION_TOKEN variable
        #[arg(long)]
        token: Option<String>,
        /// Credit count that earns the notable headline styling
        #[arg(long, default_value_t = DEFAULT_NOTABLE_THRESHOLD)]
        notable_threshold: f64,
        /// Directory to write the two CSV exports into
        #[arg(short, long)]
        export: Option<PathBuf>,
    },
    /// Load the bundled sample run (no network access)
    Sample {
        #[arg(long, default_value = ".leed-daylight")]
        cache_dir: PathBuf,
        #[arg(long, default_value_t = DEFAULT_NOTABLE_THRESHOLD)]
        notable_threshold: f64,
        #[arg(short, long)]
        export: Option<PathBuf>,
    },
    /// Print the reports of an already-cached run
    Report {
        /// Run id of a bundle under the cache directory
        run_id: String,
        #[arg(long, default_value = ".leed-daylight")]
        cache_dir: PathBuf,
        #[arg(long, default_value_t = DEFAULT_NOTABLE_THRESHOLD)]
        notable_threshold: f64,
        #[arg(short, long)]
        export: Option<PathBuf>,
    },
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Load {
            url,
            owner,
            project,
            job,
            run,
            cache_dir,
            api_host,
            token,
            notable_threshold,
            export,
        } => cmd_load(
            url,
            owner,
            project,
            job,
            run,
            cache_dir,
            api_host,
            token,
            notable_threshold,
            export,
        ),
        Commands::Sample {
            cache_dir,
            notable_threshold,
            export,
        } => cmd_sample(cache_dir, notable_threshold, export),
        Commands::Report {
            run_id,
            cache_dir,
            notable_threshold,
            export,
        } => cmd_report(run_id, cache_dir, notable_threshold, export),
    }
}

#[allow(clippy::too_many_arguments)]
fn cmd_load(
    url: Option<String>,
    owner: Option<String>,
    project: Option<String>,
    job: Option<String>,
    run: Option<String>,
    cache_dir: PathBuf,
    api_host: String,
    token: Option<String>,
    notable_threshold: f64,
    export: Option<PathBuf>,
) -> AppResult<()> {
    let locator = resolve_locator(url, owner, project, job, run)?;
    let token = token.or_else(|| std::env::var("POLLINATION_TOKEN").ok());

    let client = PollinationClient::new(api_host, token);
    let run = client.resolve(&locator)?;
    let cache = ArtifactCache::new(cache_dir)?;

    let RunArtifacts {
        vis_set_path,
        credit_summary,
        space_summary,
        ..
    } = load_run(&run, &cache)?;

    print_reports(&credit_summary, &space_summary, notable_threshold)?;
    println!("\nVisualization artifact: {}", vis_set_path.display());

    if let Some(dir) = export {
        export_reports(&dir, &credit_summary, &space_summary)?;
    }
    Ok(())
}

fn cmd_sample(
    cache_dir: PathBuf,
    notable_threshold: f64,
    export: Option<PathBuf>,
) -> AppResult<()> {
    let cache = ArtifactCache::new(cache_dir)?;
    let SampleArtifacts {
        vis_set_path,
        credit_summary,
        space_summary,
    } = load_sample(&cache)?;

    print_reports(&credit_summary, &space_summary, notable_threshold)?;
    println!("\nVisualization artifact: {}", vis_set_path.display());

    if let Some(dir) = export {
        export_reports(&dir, &credit_summary, &space_summary)?;
    }
    Ok(())
}

fn cmd_report(
    run_id: String,
    cache_dir: PathBuf,
    notable_threshold: f64,
    export: Option<PathBuf>,
) -> AppResult<()> {
    let cache = ArtifactCache::new(cache_dir)?;
    let bundle = cache.bundle(&run_id);
    if !bundle.is_complete() {
        return Err(AppError::Fetch(format!(
            "no complete cached bundle for run '{run_id}' under {}",
            cache.data_dir().display()
        )));
    }

    let credit_summary = ld_report::load_credit_summary(&bundle.credit_summary_path())?;
    let space_summary = SpaceSummary::new(bundle.space_summary_path());

    print_reports(&credit_summary, &space_summary, notable_threshold)?;
    if bundle.vis_set_path().is_file() {
        println!("\nVisualization artifact: {}", bundle.vis_set_path().display());
    }

    if let Some(dir) = export {
        export_reports(&dir, &credit_summary, &space_summary)?;
    }
    Ok(())
}

fn resolve_locator(
    url: Option<String>,
    owner: Option<String>,
    project: Option<String>,
    job: Option<String>,
    run: Option<String>,
) -> AppResult<RunLocator> {
    if let Some(url) = url {
        return RunLocator::from_url(&url).map_err(|err| AppError::Validation(err.to_string()));
    }
    match (owner, project, job, run) {
        (Some(owner), Some(project), Some(job), Some(run)) => {
            Ok(RunLocator::new(owner, project, job, run))
        }
        _ => Err(AppError::Validation(
            "Pass a run URL, or all of --owner, --project, --job and --run.".to_string(),
        )),
    }
}

fn print_reports(
    credit_summary: &CreditSummary,
    space_summary: &SpaceSummary,
    notable_threshold: f64,
) -> AppResult<()> {
    let marker = match credit_summary.style(notable_threshold) {
        CreditStyle::Notable => "*",
        CreditStyle::Baseline => " ",
    };
    println!(
        "{marker} LEED Credits: {} points",
        credit_summary.credits as i64
    );
    println!(
        "  Percentage passing: {:.2}%",
        credit_summary.percentage_passing
    );

    println!("\nModel breakdown");
    let rows = credit_rows(credit_summary);
    let label_width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    for (label, value) in &rows {
        println!("  {label:<label_width$}  {value:>10}");
    }

    println!("\nSpace by space breakdown");
    let table = space_summary.load()?;
    let formatted = table.formatted()?;
    let widths: Vec<usize> = formatted
        .columns
        .iter()
        .enumerate()
        .map(|(index, column)| {
            formatted
                .rows
                .iter()
                .map(|row| row.get(index).map(String::len).unwrap_or(0))
                .chain(std::iter::once(column.len()))
                .max()
                .unwrap_or(0)
        })
        .collect();
    print_row(&formatted.columns, &widths);
    for row in &formatted.rows {
        print_row(row, &widths);
    }
    Ok(())
}

fn print_row(cells: &[String], widths: &[usize]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect();
    println!("  {}", line.join("  "));
}

fn export_reports(
    dir: &Path,
    credit_summary: &CreditSummary,
    space_summary: &SpaceSummary,
) -> AppResult<()> {
    fs::create_dir_all(dir)?;

    fs::write(dir.join(CREDIT_EXPORT_FILE), credit_csv_bytes(credit_summary)?)?;

    let table = space_summary.load()?;
    let space_bytes = table.to_csv_bytes()?;
    fs::write(dir.join(SPACE_EXPORT_FILE), space_bytes)?;

    println!(
        "Wrote {} and {} to {}",
        CREDIT_EXPORT_FILE,
        SPACE_EXPORT_FILE,
        dir.display()
    );
    Ok(())
}
