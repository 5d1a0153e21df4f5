use clap::Parser;

/// tilebrief: chat with Gemini and publish the resulting plan to xTiles.
#[derive(Parser, Debug)]
#[command(name = "tilebrief", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log level override (e.g. `tilebrief=debug`).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Send a single message, print the reply, and exit.
    #[arg(short = 'm', long)]
    pub message: Option<String>,

    /// Start with the project context tool disabled.
    #[arg(long)]
    pub no_context_tool: bool,

    /// Start with conversation history disabled.
    #[arg(long)]
    pub no_history: bool,

    /// Print the effective configuration as JSON and exit.
    #[arg(long)]
    pub print_config: bool,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_start_the_repl_with_both_modes_on() {
        let args = Args::parse_from(["tilebrief"]);
        assert!(args.message.is_none());
        assert!(!args.no_context_tool);
        assert!(!args.no_history);
    }

    #[test]
    fn single_message_with_modes_off() {
        let args = Args::parse_from([
            "tilebrief",
            "-m",
            "Plan a trip",
            "--no-context-tool",
            "--no-history",
            "--log-level",
            "tilebrief=debug",
        ]);
        assert_eq!(args.message.as_deref(), Some("Plan a trip"));
        assert!(args.no_context_tool);
        assert!(args.no_history);
        assert_eq!(args.log_level.as_deref(), Some("tilebrief=debug"));
    }
}
