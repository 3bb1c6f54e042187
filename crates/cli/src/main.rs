mod cache;
mod config;
mod report;
mod terminal_output;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use framesight_core::{FramesightError, VideoReference};
use framesight_extract::FrameExtractor;
use framesight_vision::{GeminiProvider, VideoAnalyzer, DEFAULT_MODEL};

use config::Config;
use terminal_output::{note_error, note_info, note_success};

#[derive(Parser)]
#[command(name = "framesight")]
#[command(about = "Extract frames from a video and describe them with a vision model")]
#[command(version)]
struct Cli {
    /// Video reference: a bare path or `video:path?fps=2&timestamps=1`
    video: String,

    /// Analysis prompt; when present, frames are sent to the vision model
    prompt: Option<String>,

    /// Vision model to use
    #[arg(short, long, default_value = DEFAULT_MODEL)]
    model: String,

    /// Output directory for frames (default: a fresh temp directory)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Save the analysis text to a timestamped report file
    #[arg(short = 's', long)]
    save_report: bool,

    /// Skip the cache check and always process the video
    #[arg(long)]
    no_cache: bool,
}

#[tokio::main]
async fn main() {
    let config = Config::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(err) = run(cli, &config).await {
        note_error(&format!("{err:#}"));
        std::process::exit(1);
    }
}

async fn run(cli: Cli, config: &Config) -> Result<()> {
    let reference = VideoReference::parse(&cli.video);
    let extractor = FrameExtractor::new().with_ffmpeg_bin(&config.ffmpeg_bin);

    let Some(prompt) = cli.prompt else {
        note_info("Extracting frames from video...");
        let frames = extractor.extract(&reference, cli.output.as_deref()).await?;
        print!("{}", terminal_output::extraction_summary(&frames));
        return Ok(());
    };

    let use_cache = !cli.no_cache;
    if use_cache && cache::is_processed(&reference.path, &config.cache_dir).await {
        note_info("Video already processed (pass --no-cache to force reprocessing)");
        return Ok(());
    }

    let api_key = config
        .gemini_api_key
        .clone()
        .ok_or_else(|| FramesightError::ConfigError("GEMINI_API_KEY is not set".to_string()))?;

    note_info("Starting video analysis...");
    let analyzer = VideoAnalyzer::new(GeminiProvider::new(api_key))
        .with_model(cli.model)
        .with_extractor(extractor);
    let analysis = analyzer
        .analyze(&reference, &prompt, cli.output.as_deref())
        .await?;

    if use_cache {
        cache::mark_processed(&reference.path, &config.cache_dir).await?;
    }

    if cli.save_report {
        let path = report::save_report(&reference, &analysis.text, cli.output.as_deref()).await?;
        note_success(&format!("Report saved to {}", path.display()));
    }

    print!("{}", terminal_output::cost_summary(&analysis.cost));
    println!();
    println!("Analysis result:");
    println!("{}", analysis.text);
    Ok(())
}
