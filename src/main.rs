use clap::Parser;
use emotion_arc::export::{to_csv, to_json};
use emotion_arc::{
    load_config, AnalysisError, AppConfig, ConfigError, EmotionArcAnalyzer, ExportError,
    LexicalDiversityAnalyzer, Orchestrator, TextAnalyzer,
};
use futures::future::join_all;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

/// Emotion arc via lexicons and rolling averages.
#[derive(Debug, Parser)]
#[command(name = "emotion-arc", version)]
struct Cli {
    /// Text files to analyze
    #[arg(required = true)]
    inputs: Vec<PathBuf>,
    /// Rolling window size in sentences
    #[arg(long)]
    window: Option<usize>,
    /// Number of top emotions in the summary
    #[arg(long = "top")]
    top_n: Option<usize>,
    /// JSON config file
    #[arg(long)]
    config: Option<PathBuf>,
    /// JSON lexicon replacing the built-in one
    #[arg(long)]
    lexicon: Option<PathBuf>,
    /// Write <stem>.arc.json
    #[arg(long)]
    json: bool,
    /// Write <stem>.arc.csv
    #[arg(long)]
    csv: bool,
    /// Also run lexical diversity and write <stem>.report.json
    #[arg(long)]
    lexical: bool,
    /// Output directory
    #[arg(long)]
    out_dir: Option<PathBuf>,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Analysis(#[from] AnalysisError),
    #[error(transparent)]
    Export(#[from] ExportError),
    #[error("analysis task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Shared by every per-file task.
struct Context {
    analyzer: Arc<EmotionArcAnalyzer>,
    orchestrator: Option<Arc<Orchestrator>>,
    out_dir: PathBuf,
    json: bool,
    csv: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let config = match build_config(&cli) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Config error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let ctx = match build_context(&cli, &config) {
        Ok(ctx) => Arc::new(ctx),
        Err(e) => {
            error!("Setup error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    info!("Files to process: {}", cli.inputs.len());
    info!("(Rolling window = {})", config.analysis.window);

    // Process all files concurrently
    let tasks: Vec<_> = cli
        .inputs
        .iter()
        .map(|path| process_file(path.clone(), ctx.clone()))
        .collect();
    let outcomes = join_all(tasks).await;

    let mut failed = 0;
    for (path, outcome) in cli.inputs.iter().zip(outcomes) {
        if let Err(e) = outcome {
            warn!("Failed to analyze {}: {}", path.display(), e);
            failed += 1;
        }
    }

    if failed > 0 {
        error!("{} of {} files failed", failed, cli.inputs.len());
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Config file values, overridden by command-line flags.
fn build_config(cli: &Cli) -> Result<AppConfig, ConfigError> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => AppConfig::default(),
    };

    if let Some(window) = cli.window {
        config.analysis.window = window;
    }
    if let Some(top_n) = cli.top_n {
        config.analysis.top_n = top_n;
    }
    if let Some(lexicon) = &cli.lexicon {
        config.lexicon_path = Some(lexicon.clone());
    }
    if let Some(out_dir) = &cli.out_dir {
        config.out_dir = Some(out_dir.clone());
    }

    config.validate()?;
    Ok(config)
}

fn build_context(cli: &Cli, config: &AppConfig) -> Result<Context, CliError> {
    let lexicon = config.lexicon()?;
    let analyzer = EmotionArcAnalyzer::new(&config.analysis, lexicon)?;

    // The emotion arc entry is added from the per-file result, not rerun here
    let orchestrator = if cli.lexical {
        let orchestrator = Orchestrator::new()
            .with(LexicalDiversityAnalyzer::new(config.analysis.lexical_window)?);
        Some(Arc::new(orchestrator))
    } else {
        None
    };

    Ok(Context {
        analyzer: Arc::new(analyzer),
        orchestrator,
        out_dir: config.out_dir.clone().unwrap_or_else(|| PathBuf::from(".")),
        json: cli.json,
        csv: cli.csv,
    })
}

/// Reads, analyzes and exports a single file.
async fn process_file(path: PathBuf, ctx: Arc<Context>) -> Result<(), CliError> {
    info!("Processing file: {}", path.display());

    let bytes = tokio::fs::read(&path).await?;
    let text = String::from_utf8_lossy(&bytes).into_owned();
    if text.trim().is_empty() {
        warn!("File {} appears to be empty or contains only whitespace", path.display());
    }

    let analyzer = ctx.analyzer.clone();
    let orchestrator = ctx.orchestrator.clone();
    let (result, report) = tokio::task::spawn_blocking(move || {
        let result = analyzer.run(&text)?;
        let report = orchestrator.map(|o| o.run(&text)).transpose()?;
        Ok::<_, AnalysisError>((result, report))
    })
    .await??;

    info!(
        "{} | Sentences: {} | Avg valence: {:.2} | Top emotions: {:?}",
        path.display(),
        result.summary.sentence_count,
        result.summary.avg_valence,
        result.summary.top_emotions
    );

    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("input")
        .to_string();

    if ctx.json || ctx.csv || report.is_some() {
        tokio::fs::create_dir_all(&ctx.out_dir).await?;
    }

    if ctx.json {
        let out = ctx.out_dir.join(format!("{stem}.arc.json"));
        write_output(&out, to_json(&result)?).await?;
    }

    if ctx.csv {
        let out = ctx.out_dir.join(format!("{stem}.arc.csv"));
        write_output(&out, to_csv(&result, ctx.analyzer.lexicon())?).await?;
    }

    if let Some(mut report) = report {
        report
            .results
            .insert(ctx.analyzer.name().to_string(), ctx.analyzer.report_entry(&result));
        let out = ctx.out_dir.join(format!("{stem}.report.json"));
        let body = serde_json::to_string_pretty(&report).map_err(ExportError::from)?;
        write_output(&out, body).await?;
    }

    Ok(())
}

async fn write_output(path: &Path, body: String) -> Result<(), CliError> {
    tokio::fs::write(path, body).await?;
    info!("Written: {}", path.display());
    Ok(())
}
