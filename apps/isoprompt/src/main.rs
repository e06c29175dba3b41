use std::process::ExitCode;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use isoprompt::cli::{input_preview, save_prompt, Cli};
use isoprompt::config::{self, API_KEY_VAR};
use isoprompt::{optimize_prompt, validate_config, IsoPromptError};

#[tokio::main]
async fn main() -> ExitCode {
    // Parser errors exit 1; --help and --version exit 0
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let env_loaded = config::load_dotenv();

    // Initialize structured logging (stderr, so stdout carries only the prompt)
    let default_level = if cli.verbose { "info" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), default_level))
        }))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();

    debug!("Starting isoprompt v{}", env!("CARGO_PKG_VERSION"));
    if env_loaded {
        info!("Environment variables loaded from .env file");
    } else {
        info!("No .env file found; using process environment ({API_KEY_VAR} must be set)");
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: isoprompt run failed: {err:#}");
            if err
                .downcast_ref::<IsoPromptError>()
                .is_some_and(IsoPromptError::is_user_input)
            {
                eprintln!(
                    "Please check the arguments you passed; run --help for more information."
                );
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let started = Instant::now();

    let user_input = cli.user_input()?;
    let options = cli.to_options();

    // Validation happens here, before any network call
    validate_config(&options.to_config())?;

    if cli.verbose {
        info!("{}", input_preview(&user_input));
        info!("Mode: {}", options.mode);
        if let Some(domain) = &options.domain {
            info!("Domain: {domain}");
        }
    }
    if cli.refine {
        debug!("--refine accepted; no additional refinement pass is applied");
    }

    let optimized = optimize_prompt(&user_input, &options).await?;

    info!(
        "Prompt optimization succeeded in {:.2} seconds",
        started.elapsed().as_secs_f64()
    );

    match &cli.output {
        Some(path) => {
            let written = save_prompt(&optimized, path)?;
            eprintln!("Optimized prompt saved to: {}", written.display());
        }
        None => println!("{optimized}"),
    }

    Ok(())
}
