mod cli;
mod dotenv;
mod output;
mod pipeline;
mod provider;
mod shell;

use std::process::ExitCode;

use querycraft_ai::{QueryGenerator, Session};
use querycraft_common::{QueryCraftError, Result};
use querycraft_config::schema::{OutputFormat, ProviderKind};
use querycraft_config::QueryCraftConfig;
use querycraft_db::{introspect, DatabaseSource};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::cli::{Args, Command};
use crate::output::render_outcome;
use crate::pipeline::Pipeline;
use crate::shell::Shell;

fn init_logging(directive: &str) {
    let filter = match directive.parse() {
        Ok(directive) => EnvFilter::from_default_env().add_directive(directive),
        Err(_) => EnvFilter::from_default_env().add_directive(LevelFilter::WARN.into()),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(args: &Args) -> (QueryCraftConfig, Option<String>) {
    let loaded = match &args.config {
        Some(path) => querycraft_config::load_config_from(path),
        None => querycraft_config::load_config(),
    };
    match loaded {
        Ok(config) => (config, None),
        Err(e) => (QueryCraftConfig::default(), Some(e.to_string())),
    }
}

fn apply_overrides(config: &mut QueryCraftConfig, args: &Args) {
    match args.provider.as_deref() {
        Some("gemini") => config.model.provider = ProviderKind::Gemini,
        Some("claude") => config.model.provider = ProviderKind::Claude,
        _ => {}
    }
    if let Some(model) = &args.model {
        config.model.model = Some(model.clone());
    }
    match args.format.as_deref() {
        Some("table") => config.display.format = OutputFormat::Table,
        Some("json") => config.display.format = OutputFormat::Json,
        _ => {}
    }
}

fn database_source(args: &Args, config: &QueryCraftConfig) -> Result<DatabaseSource> {
    if let Some(path) = &args.upload {
        return DatabaseSource::upload(path).map_err(|e| QueryCraftError::Database(e.to_string()));
    }
    let path = args
        .db
        .clone()
        .unwrap_or_else(|| config.database.default_path.clone());
    Ok(DatabaseSource::from_path(path))
}

fn build_pipeline(config: &QueryCraftConfig) -> Result<Pipeline> {
    let client =
        provider::build_client(&config.model).map_err(|e| QueryCraftError::Ai(e.to_string()))?;
    let retry = provider::retry_policy(&config.retry);
    Ok(Pipeline::new(QueryGenerator::new(client, retry)))
}

fn run(args: Args, config: QueryCraftConfig) -> Result<bool> {
    match &args.command {
        Some(Command::Config) => {
            print!("{}", querycraft_config::config_to_toml(&config));
            Ok(true)
        }
        Some(Command::Schema) => {
            let source = database_source(&args, &config)?;
            let schema =
                introspect(source.path()).map_err(|e| QueryCraftError::Database(e.to_string()))?;
            print!("{schema}");
            Ok(true)
        }
        Some(Command::Ask { question }) => {
            let source = database_source(&args, &config)?;
            let pipeline = build_pipeline(&config)?;
            let runtime = runtime()?;
            let mut session = Session::new();
            let outcome = runtime.block_on(pipeline.run_turn(
                &mut session,
                source.path(),
                &question.join(" "),
            ));
            println!("{}", render_outcome(&outcome, session.last(), &config.display));
            Ok(!outcome.is_failure())
        }
        None => {
            let source = database_source(&args, &config)?;
            let pipeline = build_pipeline(&config)?;
            let runtime = runtime()?;
            Shell::new(&runtime, pipeline, source, config.display.clone()).run()?;
            Ok(true)
        }
    }
}

fn runtime() -> Result<tokio::runtime::Runtime> {
    Ok(tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?)
}

fn main() -> ExitCode {
    dotenv::load_dotenv();

    let args = cli::parse();
    let (mut config, config_error) = load_config(&args);

    let directive = args
        .log_level
        .clone()
        .unwrap_or_else(|| config.logging.level.as_directive().to_string());
    init_logging(&directive);

    tracing::info!("QueryCraft v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(e) = config_error {
        tracing::warn!("Config load failed, using defaults: {e}");
    }
    apply_overrides(&mut config, &args);
    tracing::info!(
        provider = %config.model.provider,
        db = %args.db.as_deref().unwrap_or(config.database.default_path.as_path()).display(),
        "config loaded"
    );
    tracing::info!("generated SQL is executed as-is, without validation");

    match run(args, config) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn invalid_config_falls_back_with_reported_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[retry]\nmax_attempts = 0\n").unwrap();
        let args =
            Args::try_parse_from(["querycraft", "--config", path.to_str().unwrap(), "config"])
                .unwrap();

        let (config, error) = load_config(&args);

        assert_eq!(config.retry.max_attempts, 3);
        let error = error.expect("validation failure should be reported");
        assert!(error.contains("retry.max_attempts"), "{error}");
    }

    #[test]
    fn valid_config_reports_no_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("good.toml");
        std::fs::write(&path, "[retry]\ndelay_secs = 1\n").unwrap();
        let args = Args::try_parse_from(["querycraft", "--config", path.to_str().unwrap()]).unwrap();

        let (config, error) = load_config(&args);

        assert!(error.is_none());
        assert_eq!(config.retry.delay_secs, 1);
    }

    #[test]
    fn cli_overrides_replace_config_values() {
        let args = Args::try_parse_from([
            "querycraft",
            "--provider",
            "claude",
            "--model",
            "claude-3-5-haiku-latest",
            "--format",
            "json",
        ])
        .unwrap();
        let mut config = QueryCraftConfig::default();

        apply_overrides(&mut config, &args);

        assert_eq!(config.model.provider, ProviderKind::Claude);
        assert_eq!(config.model.model.as_deref(), Some("claude-3-5-haiku-latest"));
        assert_eq!(config.display.format, OutputFormat::Json);
    }
}
