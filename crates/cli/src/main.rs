use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::str::FromStr;
use std::time::Instant;

use anyhow::{Context, bail};
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use owo_colors::OwoColorize;
use seoscope_core::{
    Article, BatchSummary, ConfigLoader, CoreWebVitals, JsonConfig, SeoAnalyzer, TextConfig, batch_to_json,
    batch_to_text, report_to_json, report_to_text,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod echo;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Output format for reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Invalid format: {}. Valid options: text, json", s)),
        }
    }
}

/// Score blog articles for SEO health
#[derive(Parser, Debug)]
#[command(name = "seoscope")]
#[command(author = "Seoscope Contributors")]
#[command(version)]
#[command(about = "Audit the SEO health of blog articles", long_about = None)]
struct Args {
    /// Article JSON files, or "-" for stdin
    #[arg(value_name = "ARTICLE", required_unless_present = "completions")]
    inputs: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text", value_name = "FORMAT")]
    format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// Core Web Vitals reading as JSON ({"LCP": ms, "FID": ms, "CLS": n})
    #[arg(long, value_name = "FILE", conflicts_with_all = ["lcp", "fid", "cls"])]
    vitals: Option<PathBuf>,

    /// Largest Contentful Paint in milliseconds
    #[arg(long, value_name = "MS", requires_all = ["fid", "cls"])]
    lcp: Option<f64>,

    /// First Input Delay in milliseconds
    #[arg(long, value_name = "MS", requires_all = ["lcp", "cls"])]
    fid: Option<f64>,

    /// Cumulative Layout Shift
    #[arg(long, value_name = "SCORE", requires_all = ["lcp", "fid"])]
    cls: Option<f64>,

    /// Plain-text body of another article to check for duplication (repeatable)
    #[arg(long, value_name = "FILE")]
    corpus: Vec<PathBuf>,

    /// Compare every input article against the others for duplication
    #[arg(long)]
    cross_check: bool,

    /// Scoring configuration file (default: <config dir>/seoscope/config.json)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Exit with status 2 if any article scores below this value
    #[arg(long, value_name = "SCORE", value_parser = clap::value_parser!(u32).range(0..=100))]
    fail_under: Option<u32>,

    /// Omit the suggestion list from text output
    #[arg(long)]
    no_suggestions: bool,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completions: Option<Shell>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "seoscope_core=debug,seoscope_cli=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).with_target(false).init();
}

fn read_article(input: &str) -> anyhow::Result<Article> {
    if input == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read from stdin")?;
        return Article::from_json(&buffer).context("Failed to parse article from stdin");
    }

    Article::from_file(Path::new(input)).with_context(|| format!("Failed to load article: {}", input))
}

fn read_vitals(args: &Args) -> anyhow::Result<Option<CoreWebVitals>> {
    if let Some(path) = &args.vitals {
        let vitals = CoreWebVitals::from_file(path)
            .with_context(|| format!("Failed to load Core Web Vitals: {}", path.display()))?;
        return Ok(Some(vitals));
    }

    match (args.lcp, args.fid, args.cls) {
        (Some(lcp), Some(fid), Some(cls)) => Ok(Some(CoreWebVitals::new(lcp, fid, cls))),
        _ => Ok(None),
    }
}

fn read_corpus(paths: &[PathBuf]) -> anyhow::Result<Vec<String>> {
    paths
        .iter()
        .map(|path| fs::read_to_string(path).with_context(|| format!("Failed to read corpus file: {}", path.display())))
        .collect()
}

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    if let Some(shell) = args.completions {
        let mut cmd = Args::command();
        clap_complete::generate(shell, &mut cmd, "seoscope", &mut io::stdout());
        return Ok(ExitCode::SUCCESS);
    }

    init_logging(args.verbose);

    if args.verbose {
        echo::print_banner();
        echo::print_info("Debug logging enabled");
        eprintln!();
    }

    if args.inputs.iter().filter(|i| i.as_str() == "-").count() > 1 {
        bail!("stdin (\"-\") can only be given once");
    }

    if args.verbose {
        echo::print_step(1, 4, "Loading scoring configuration");
    }
    let loader = match &args.config {
        Some(path) => ConfigLoader::new().with_file(path),
        None => ConfigLoader::new(),
    };
    let config = loader.load().context("Failed to load scoring configuration")?;
    let analyzer = SeoAnalyzer::with_config(config);

    if args.verbose {
        echo::print_step(
            2,
            4,
            &format!("Reading {} article(s)", args.inputs.len().to_string().bright_white()),
        );
    }
    let articles = args
        .inputs
        .iter()
        .map(|input| read_article(input))
        .collect::<anyhow::Result<Vec<_>>>()?;
    let vitals = read_vitals(&args)?;
    let corpus = read_corpus(&args.corpus)?;
    debug!(articles = articles.len(), corpus = corpus.len(), vitals = vitals.is_some(), "inputs loaded");

    if args.verbose {
        if vitals.is_none() {
            echo::print_warning("No Core Web Vitals reading supplied; it will be reported as unavailable");
        }
        if args.cross_check && articles.len() < 2 {
            echo::print_warning("--cross-check needs at least two articles");
        }
        eprintln!();
        echo::print_step(3, 4, "Scoring articles");
    }

    let started = Instant::now();
    let batch_mode = articles.len() > 1 || args.cross_check;
    let entries = analyzer.analyze_batch(&articles, vitals.as_ref(), &corpus, args.cross_check);

    if args.verbose {
        for entry in &entries {
            echo::print_score(&entry.label, &entry.report);
        }
        echo::print_timing("Scoring", started.elapsed());
        if batch_mode {
            echo::print_summary(&BatchSummary::from_entries(&entries));
        }
        eprintln!();
    }

    let text_config = TextConfig { include_suggestions: !args.no_suggestions, ..Default::default() };
    let json_config = JsonConfig { pretty: args.pretty };

    let output = match (args.format, batch_mode) {
        (OutputFormat::Text, false) => report_to_text(&entries[0].label, &entries[0].report, &text_config),
        (OutputFormat::Text, true) => batch_to_text(&entries, &text_config),
        (OutputFormat::Json, false) => report_to_json(&entries[0].report, &json_config).context("Failed to serialize report")?,
        (OutputFormat::Json, true) => batch_to_json(&entries, &json_config).context("Failed to serialize reports")?,
    };

    if args.verbose {
        echo::print_step(4, 4, "Writing output");
        eprintln!(
            "  {} {}\n",
            "Format:".dimmed(),
            format!("{:?}", args.format).bright_white()
        );
    }

    match &args.output {
        Some(path) => {
            fs::write(path, format!("{}\n", output))
                .with_context(|| format!("Failed to write to file: {}", path.display()))?;
            echo::print_success(&format!("Report written to {}", path.display().bright_white()));
        }
        None => {
            println!("{}", output);
        }
    }

    if let Some(threshold) = args.fail_under {
        let failing: Vec<&str> = entries
            .iter()
            .filter(|e| e.report.seo_score < threshold)
            .map(|e| e.label.as_str())
            .collect();
        if !failing.is_empty() {
            echo::print_error(&format!("Score below {} for: {}", threshold, failing.join(", ")));
            return Ok(ExitCode::from(2));
        }
    }

    Ok(ExitCode::SUCCESS)
}
