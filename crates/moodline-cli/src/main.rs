use clap::{Parser, Subcommand};
use moodline_core::AppConfig;
use moodline_engines::{Dispatcher, Library};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "moodline-cli")]
#[command(about = "Moodline sentiment analysis command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Analyze a piece of text and print the result as JSON
    Analyze {
        /// Engine to use: vader, textblob, or transformers
        #[arg(long, short, default_value_t = Library::default().as_str().to_string())]
        library: String,

        /// Print compact single-line JSON
        #[arg(long)]
        compact: bool,

        /// Text to analyze
        text: String,
    },
    /// List the available libraries
    Libraries,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();
    let config = moodline_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!(env = %config.env, tei_url = %config.tei_url, "configuration loaded");

    match cli.command {
        Commands::Analyze {
            library,
            compact,
            text,
        } => {
            let json = render_analysis(&config, &library, &text, compact).await?;
            println!("{json}");
        }
        Commands::Libraries => {
            for library in Library::ALL {
                println!("{library}");
            }
        }
    }

    Ok(())
}

/// Run one analysis in-process and render the result as JSON.
async fn render_analysis(
    config: &AppConfig,
    library: &str,
    text: &str,
    compact: bool,
) -> anyhow::Result<String> {
    let overrides = config
        .lexicon_overrides_path
        .as_deref()
        .map(moodline_core::load_lexicon_overrides)
        .transpose()?;
    if let Some(overrides) = &overrides {
        tracing::info!(words = overrides.words.len(), "loaded lexicon overrides");
    }

    let dispatcher = Dispatcher::from_config(config, overrides.as_ref())?;
    tracing::debug!(library = %library, "dispatching analysis");
    let result = dispatcher.analyze(text, library).await?;

    let json = if compact {
        serde_json::to_string(&result)?
    } else {
        serde_json::to_string_pretty(&result)?
    };
    Ok(json)
}

#[cfg(test)]
mod tests;
