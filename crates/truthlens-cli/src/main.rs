mod display;
mod session;

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tokio::io::AsyncReadExt;
use truthlens_client::{
    ClientConfig, DEFAULT_ENDPOINT, DEFAULT_IMAGE_MODEL, DEFAULT_TEXT_MODEL, DEFAULT_TIMEOUT,
    InferenceClient,
};
use truthlens_core::{Outcome, validate_passage};

/// Fake news and deepfake detection backed by hosted classifiers.
#[derive(Parser)]
#[command(name = "truthlens", version)]
struct Cli {
    #[command(flatten)]
    remote: RemoteArgs,

    /// Print outcomes as JSON instead of result cards.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct RemoteArgs {
    /// API token sent as a bearer credential.
    #[arg(long, env = "HF_API_TOKEN", hide_env_values = true, global = true)]
    token: Option<String>,

    /// Inference API base URL; model ids are appended as path segments.
    #[arg(long, env = "TRUTHLENS_ENDPOINT", default_value = DEFAULT_ENDPOINT, global = true)]
    endpoint: String,

    /// Model id for text analysis.
    #[arg(long, env = "TRUTHLENS_TEXT_MODEL", default_value = DEFAULT_TEXT_MODEL, global = true)]
    text_model: String,

    /// Model id for image analysis.
    #[arg(long, env = "TRUTHLENS_IMAGE_MODEL", default_value = DEFAULT_IMAGE_MODEL, global = true)]
    image_model: String,

    /// Request timeout in seconds.
    #[arg(long, env = "TRUTHLENS_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT.as_secs(), global = true)]
    timeout_secs: u64,
}

impl RemoteArgs {
    fn client_config(&self) -> ClientConfig {
        ClientConfig {
            endpoint: self.endpoint.clone(),
            text_model: self.text_model.clone(),
            image_model: self.image_model.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Analyze a news passage (argument, --file, or stdin).
    Text {
        /// The passage to analyze.
        text: Option<String>,
        /// Read the passage from a file instead.
        #[arg(long, conflicts_with = "text")]
        file: Option<PathBuf>,
    },
    /// Scan an image for deepfake manipulation.
    Image {
        /// Path to the image file.
        path: PathBuf,
    },
    /// Interactive session that keeps the last result on hand.
    Session,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    tracing::info!("truthlens v{}", env!("CARGO_PKG_VERSION"));

    let client = InferenceClient::new(cli.remote.client_config())
        .context("invalid inference client configuration")?;
    let token = cli.remote.token.as_deref();

    let outcome = match cli.command {
        Command::Text { text, file } => {
            let raw = read_passage(text, file).await?;
            let passage = validate_passage(&raw)?;
            client.analyze(passage, token).await
        }
        Command::Image { path } => {
            let bytes = tokio::fs::read(&path)
                .await
                .with_context(|| format!("reading image {}", path.display()))?;
            client.analyze_image(bytes, token).await
        }
        Command::Session => {
            session::run(&client, token, cli.json).await?;
            return Ok(ExitCode::SUCCESS);
        }
    };

    print!("{}", display::render(&outcome, cli.json)?);
    Ok(exit_code(&outcome))
}

async fn read_passage(text: Option<String>, file: Option<PathBuf>) -> anyhow::Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }
    if let Some(path) = file {
        return tokio::fs::read_to_string(&path)
            .await
            .with_context(|| format!("reading passage from {}", path.display()));
    }
    let mut buf = String::new();
    tokio::io::stdin()
        .read_to_string(&mut buf)
        .await
        .context("reading passage from stdin")?;
    Ok(buf)
}

fn exit_code(outcome: &Outcome) -> ExitCode {
    if outcome.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
