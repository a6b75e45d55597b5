//! CLI entrypoint for thermo-tutor
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use tutor_application::{
    ChatSessionUseCase, CompletionConfig, ConversationLogger, CredentialStore, SubmitOutcome,
};
use tutor_domain::{Model, SubmitRejection};
use tutor_infrastructure::{
    AnthropicCompletionClient, ConfigLoader, FileConfig, FileCredentialStore,
    InMemoryCredentialStore, JsonlConversationLogger, expand_home,
};
use tutor_presentation::{
    ChatRepl, Cli, ConsoleFormatter, ConsoleReporter, OutputConfig, ReplConfig,
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // === Configuration ===
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?
    };

    for issue in config.validate() {
        warn!("Config: {}", issue);
    }

    OutputConfig {
        color: config.output.color && !cli.no_color,
    }
    .apply();

    let completion_config = completion_config(&cli, &config)?;

    info!("Starting thermo-tutor");

    // === Dependency Injection ===
    let credential_store: Arc<dyn CredentialStore> = if cli.no_persist {
        Arc::new(InMemoryCredentialStore::new())
    } else {
        let path = credential_path(&config)?;
        info!("Credential file: {}", path.display());
        Arc::new(FileCredentialStore::new(path))
    };

    if cli.clear_key {
        credential_store
            .clear()
            .context("Failed to clear the stored API key")?;
        println!("{}", ConsoleFormatter::notice("API key cleared."));
        return Ok(());
    }

    let client = Arc::new(AnthropicCompletionClient::new(
        config.provider.base_url.as_str(),
        config.provider.api_version.as_str(),
    ));

    let mut session = ChatSessionUseCase::new(client, credential_store, completion_config);
    if let Some(logger) = conversation_logger(&cli, &config) {
        session = session.with_conversation_logger(logger);
    }
    let session = Arc::new(session);

    if let Some(key) = &cli.api_key {
        session
            .set_credential(key)
            .context("Failed to set the API key")?;
    }

    let show_progress = config.repl.show_progress && !cli.quiet;

    // Single prompt mode
    if let Some(prompt) = &cli.prompt {
        session.subscribe(Arc::new(
            ConsoleReporter::new()
                .with_progress(show_progress)
                .with_plain(true),
        ));

        return match session.submit(prompt).await {
            SubmitOutcome::Replied(_) => Ok(()),
            SubmitOutcome::Failed(_) => bail!("The completion request failed"),
            SubmitOutcome::Rejected(SubmitRejection::MissingCredential) => {
                bail!("No API key set. Pass --api-key or run interactively and use /key.")
            }
            SubmitOutcome::Rejected(rejection) => bail!("{}", rejection),
        };
    }

    // Interactive mode
    let repl_config = ReplConfig {
        show_progress,
        history_file: match &config.repl.history_file {
            Some(path) => Some(expand_home(path)),
            None => ReplConfig::default().history_file,
        },
    };
    ChatRepl::new(session, repl_config).run().await?;
    Ok(())
}

/// Completion parameters from config, with CLI overrides applied.
fn completion_config(cli: &Cli, config: &FileConfig) -> Result<CompletionConfig> {
    let mut completion = config.completion_config();
    if let Some(model) = &cli.model {
        if model.trim().is_empty() {
            bail!("--model cannot be empty");
        }
        completion = completion.with_model(Model::from(model.trim()));
    }
    if let Some(max_tokens) = cli.max_tokens {
        if max_tokens == 0 {
            bail!("--max-tokens must be at least 1");
        }
        completion = completion.with_max_tokens(max_tokens);
    }
    Ok(completion)
}

fn credential_path(config: &FileConfig) -> Result<PathBuf> {
    if let Some(path) = &config.credentials.path {
        return Ok(expand_home(path));
    }
    ConfigLoader::data_dir()
        .map(|dir| dir.join("credentials.json"))
        .context("Could not determine a data directory for the credential file; set credentials.path")
}

fn conversation_logger(cli: &Cli, config: &FileConfig) -> Option<Arc<dyn ConversationLogger>> {
    let path = match (&cli.log_file, &config.logging.conversation_log) {
        (Some(path), _) => path.clone(),
        (None, Some(path)) => expand_home(path),
        (None, None) => return None,
    };
    match JsonlConversationLogger::open(&path) {
        Ok(logger) => {
            info!("Conversation log: {}", logger.path().display());
            Some(Arc::new(logger))
        }
        Err(e) => {
            warn!("Could not open conversation log {}: {}", path.display(), e);
            None
        }
    }
}
