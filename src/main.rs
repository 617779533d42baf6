use std::io::{self, BufRead};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use deepscout::{
    Config, JsonRenderer, Renderer, RequestController, RequestState, ResearchClient,
    SubmitOutcome, TextRenderer,
};

#[derive(Parser)]
#[command(
    name = "deepscout",
    version,
    about = "Ask a deep-research service and render its sources and report"
)]
struct Cli {
    /// Research question; leave empty for an interactive prompt
    query: Vec<String>,

    /// Research service root, e.g. http://localhost:8000
    #[arg(long)]
    api_url: Option<String>,

    /// Request timeout in seconds (0 disables)
    #[arg(long)]
    timeout: Option<u64>,

    /// Emit the normalized result as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Config file path (default: ~/.config/deepscout/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    if let Some(url) = cli.api_url {
        config.api.base_url = url;
    }
    if let Some(timeout) = cli.timeout {
        config.api.timeout_secs = timeout;
    }

    let client = ResearchClient::new(&config.api)?;
    let mut controller = RequestController::new(client);

    let mut renderer: Box<dyn Renderer> = if cli.json {
        Box::new(JsonRenderer::stdout())
    } else {
        Box::new(TextRenderer::stdout())
    };

    if cli.query.is_empty() {
        run_prompt(&mut controller, renderer.as_mut()).await
    } else {
        run_once(&mut controller, renderer.as_mut(), &cli.query.join(" ")).await
    }
}

/// One-shot mode: submit, render, exit nonzero if the request failed.
async fn run_once(
    controller: &mut RequestController,
    renderer: &mut dyn Renderer,
    query: &str,
) -> Result<()> {
    let outcome = controller
        .submit_observed(query, |state| renderer.render(state))
        .await?;

    match outcome {
        SubmitOutcome::Ignored => {
            tracing::warn!("query is blank, nothing submitted");
        }
        SubmitOutcome::Resolved => {
            if matches!(controller.state(), RequestState::Failed(_)) {
                std::process::exit(1);
            }
        }
    }
    Ok(())
}

/// Interactive mode: each non-blank stdin line is one research request.
/// The prompt goes to stderr; stdout carries only rendered output, so a
/// `--json` session stays one parseable document per request.
async fn run_prompt(
    controller: &mut RequestController,
    renderer: &mut dyn Renderer,
) -> Result<()> {
    let stdin = io::stdin();
    let mut line = String::new();

    loop {
        eprint!("research> ");

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        controller
            .submit_observed(&line, |state| renderer.render(state))
            .await?;
    }
    Ok(())
}
