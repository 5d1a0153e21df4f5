mod boot;
mod chat;
mod cli;

use std::path::{Path, PathBuf};

use tilebrief_orchestrator::TurnMode;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

/// Env var naming an explicit `.env` file to load instead of the defaults.
const ENV_FILE_VAR: &str = "TILEBRIEF_ENV_FILE";

/// Load API keys and other settings from a `.env` file.
///
/// `TILEBRIEF_ENV_FILE` wins, then `./.env`, then the workspace root.
/// Only the first file found is read. Variables already present in the
/// environment are never overwritten.
fn load_dotenv() {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let candidates = std::env::var_os(ENV_FILE_VAR)
        .map(PathBuf::from)
        .into_iter()
        .chain([
            PathBuf::from(".env"),
            manifest_dir.join("..").join("..").join(".env"),
        ]);

    for path in candidates {
        let Ok(contents) = std::fs::read_to_string(&path) else {
            continue;
        };
        for (key, value) in contents.lines().filter_map(parse_env_line) {
            if std::env::var_os(key).is_none() {
                std::env::set_var(key, value);
            }
        }
        return;
    }
}

/// `KEY=VALUE`, optionally prefixed with `export` and with the value in
/// single or double quotes. Comments and blank lines yield `None`.
fn parse_env_line(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    let line = line.strip_prefix("export ").unwrap_or(line);
    let (key, value) = line.split_once('=')?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }
    let value = value.trim();
    let value = value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .or_else(|| value.strip_prefix('\'').and_then(|v| v.strip_suffix('\'')))
        .unwrap_or(value);
    Some((key, value))
}

#[tokio::main]
async fn main() {
    // Load .env file before anything else
    load_dotenv();

    let args = cli::parse();

    // Config before logging so `[logging] level` can apply
    let loaded = tilebrief_config::load_config(args.config.as_deref().map(Path::new));

    let log_directive = args.log_level.clone().unwrap_or_else(|| {
        loaded
            .as_ref()
            .map(|c| c.logging.level.directive())
            .unwrap_or("tilebrief=info")
            .to_string()
    });
    let directive = log_directive
        .parse::<Directive>()
        .or_else(|_| "tilebrief=info".parse::<Directive>());
    let mut filter = EnvFilter::from_default_env();
    if let Ok(directive) = directive {
        filter = filter.add_directive(directive);
    }
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("tilebrief v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        tilebrief_config::TileBriefConfig::default()
    });

    if args.print_config {
        println!("{}", tilebrief_config::config_to_json(&config));
        return;
    }

    let orchestrator = match boot::build_orchestrator(&config) {
        Ok(o) => o,
        Err(e) => {
            tracing::error!("Startup failed: {e}");
            eprintln!("tilebrief: {e}");
            std::process::exit(1);
        }
    };

    let mode = TurnMode {
        use_context_tool: config.conversation.use_context_tool && !args.no_context_tool,
        include_history: config.conversation.include_history && !args.no_history,
    };

    match args.message {
        Some(ref message) => chat::run_single(&orchestrator, mode, message).await,
        None => {
            if let Err(e) = chat::run_repl(&orchestrator, mode).await {
                tracing::error!("Input error: {e}");
            }
        }
    }

    tracing::info!("Shutdown complete");
}
