//! Code Review CLI
//!
//! Command-line access to the code review API:
//! - Dashboard, team, repository, security and quality metrics
//! - Submit files for analysis and fetch results
//! - Render dashboard pages in the terminal
//! - Generate a default config file

use clap::{Parser, Subcommand, ValueEnum};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::path::PathBuf;

use codereview::config::{generate_default_config, Config, LoadedConfig};
use codereview::services::models::{
    AnalysisResult, DashboardMetrics, QualityTrends, RepositoryMetrics, SecurityReport,
    TeamMetrics,
};
use codereview::{layout, pages, route, ApiClient, CodeFile, PageContext, Pending, Services};

#[derive(Parser)]
#[command(name = "codereview")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Code quality metrics and AI code review from the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API base URL (overrides config and CODEREVIEW_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Config file (default: standard locations)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Dashboard summary
    Dashboard {
        /// Lookback window in days (default: 30)
        #[arg(short, long, allow_negative_numbers = true)]
        days: Option<i64>,
    },

    /// Metrics for one team
    Team {
        team_id: String,
        #[arg(short, long, allow_negative_numbers = true)]
        days: Option<i64>,
    },

    /// Metrics for one repository
    Repo {
        repo_id: String,
        #[arg(short, long, allow_negative_numbers = true)]
        days: Option<i64>,
    },

    /// Security issues report
    Security {
        #[arg(short, long, allow_negative_numbers = true)]
        days: Option<i64>,
    },

    /// Code quality trends
    Trends {
        #[arg(short, long, allow_negative_numbers = true)]
        days: Option<i64>,
    },

    /// Submit files for analysis
    Analyze {
        /// Files to analyze, sent in the given order
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Fetch an earlier analysis
    Analysis { analysis_id: String },

    /// Render a dashboard page (/, /repositories, /security, /settings)
    Open {
        path: String,
        #[arg(short, long, allow_negative_numbers = true)]
        days: Option<i64>,
        /// Repository to detail on /repositories
        #[arg(long)]
        repo: Option<String>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => match Config::load_with_env(path) {
            Ok(config) => LoadedConfig {
                config,
                source: Some(path.clone()),
                errors: Vec::new(),
            },
            Err(e) => {
                eprintln!("{}", e);
                std::process::exit(1);
            }
        },
        None => Config::load_default(),
    };

    codereview::telemetry::init(&loaded.config.logging, "hyper=warn,reqwest=warn");
    loaded.log();

    let mut config = loaded.config;
    if let Some(url) = &cli.api_url {
        config.api.base_url = url.clone();
    }

    if let Err(e) = run(cli, config).await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli, config: Config) -> anyhow::Result<()> {
    if let Commands::Config { output } = &cli.command {
        return write_config(output.as_ref());
    }

    let services = Services::new(ApiClient::new(&config.api)?);
    let format = cli.format;

    match cli.command {
        Commands::Dashboard { days } => {
            emit(services.dashboard.dashboard(days), format, print_dashboard).await
        }
        Commands::Team { team_id, days } => {
            emit(services.dashboard.team_metrics(&team_id, days), format, print_team).await
        }
        Commands::Repo { repo_id, days } => {
            emit(
                services.dashboard.repository_metrics(&repo_id, days),
                format,
                print_repository,
            )
            .await
        }
        Commands::Security { days } => {
            emit(services.dashboard.security_report(days), format, print_security).await
        }
        Commands::Trends { days } => {
            emit(services.dashboard.quality_trends(days), format, print_trends).await
        }
        Commands::Analyze { files } => {
            let mut code_files = Vec::with_capacity(files.len());
            for path in &files {
                let content = std::fs::read_to_string(path)
                    .map_err(|e| anyhow::anyhow!("Cannot read {:?}: {}", path, e))?;
                code_files.push(CodeFile::new(path.to_string_lossy(), content));
            }

            emit(services.analysis.analyze_code(code_files), format, print_analysis).await
        }
        Commands::Analysis { analysis_id } => {
            emit(services.analysis.get_analysis(&analysis_id), format, print_analysis).await
        }
        Commands::Open { path, days, repo } => {
            let page = route(&path).ok_or_else(|| anyhow::anyhow!("No page at {}", path))?;
            let ctx = PageContext {
                days,
                repository: repo,
            };

            let content = pages::render(page, &services, &ctx).await?;
            print!("{}", layout::render(Some(page), &content));
            Ok(())
        }
        Commands::Config { .. } => Ok(()),
    }
}

/// Await a request and print it as JSON or through `table`
async fn emit<T, F>(pending: Pending<T>, format: OutputFormat, table: F) -> anyhow::Result<()>
where
    T: DeserializeOwned + Send + 'static,
    F: FnOnce(&T),
{
    match format {
        OutputFormat::Json => {
            let value: Value = pending.cast::<Value>().await?;
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Table => {
            let data = pending.await?;
            table(&data);
        }
    }
    Ok(())
}

fn write_config(output: Option<&PathBuf>) -> anyhow::Result<()> {
    let config = generate_default_config();

    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, &config)?;
            println!("Config written to {:?}", path);
        }
        None => print!("{}", config),
    }
    Ok(())
}

fn print_dashboard(m: &DashboardMetrics) {
    let s = &m.summary;
    println!("Period: {}", m.period);
    println!();
    println!("{:<24} {}", "Total reviews", s.total_reviews);
    println!("{:<24} {}", "Avg review time (min)", s.avg_review_time_minutes);
    println!("{:<24} {}", "Issues found", s.issues_found);
    println!("{:<24} {}", "Critical issues", s.critical_issues);
    println!("{:<24} {}", "Security issues", s.security_issues);
    println!("{:<24} {:.1}", "Avg quality score", s.avg_quality_score);
}

fn print_metric_map(metrics: &serde_json::Map<String, Value>) {
    if metrics.is_empty() {
        println!("No metrics recorded");
        return;
    }
    println!("{:<24} {}", "Metric", "Value");
    println!("{}", "-".repeat(40));
    for (name, value) in metrics {
        println!("{:<24} {}", name, value);
    }
}

fn print_team(m: &TeamMetrics) {
    println!("Team: {}", m.team_id);
    println!();
    print_metric_map(&m.metrics);
}

fn print_repository(m: &RepositoryMetrics) {
    println!("Repository: {}", m.repository_id);
    println!();
    print_metric_map(&m.metrics);
}

fn print_security(r: &SecurityReport) {
    println!("Period: {}", r.period);
    println!("Total issues: {}", r.total_issues);
    println!();
    println!("{:<10} {}", "Severity", "Count");
    println!("{}", "-".repeat(20));
    for (severity, count) in r.by_severity.counts() {
        println!("{:<10} {}", severity, count);
    }
}

fn print_trends(t: &QualityTrends) {
    println!("Period: {}", t.period);
    println!("Scores: {}", t.scores.len());
    println!();
    print_metric_map(&t.trends);
}

fn print_analysis(a: &AnalysisResult) {
    println!("Analysis {} ({})", a.analysis_id, a.status);
    println!("Processing time: {:.2}s", a.processing_time_seconds);

    if !a.summary.is_empty() {
        println!();
        print_metric_map(&a.summary);
    }

    if a.comments.is_empty() {
        println!();
        println!("No review comments");
        return;
    }

    println!();
    println!("{:<30} {:>6} {:<9} {:<13} {}", "File", "Line", "Severity", "Category", "Message");
    println!("{}", "-".repeat(80));
    for c in &a.comments {
        println!(
            "{:<30} {:>6} {:<9} {:<13} {}",
            c.file_path, c.line_number, c.severity, c.category, c.message
        );
        if let Some(suggestion) = &c.suggestion {
            println!("{:>38} {}", "->", suggestion);
        }
    }
}
