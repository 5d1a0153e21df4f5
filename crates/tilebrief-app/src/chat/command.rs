/// One line of REPL input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    ToggleContextTool,
    ToggleHistory,
    Reset,
    Status,
    Help,
    Quit,
    Message(String),
    Unknown(String),
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        match trimmed {
            "/context" => Self::ToggleContextTool,
            "/history" => Self::ToggleHistory,
            "/reset" => Self::Reset,
            "/status" => Self::Status,
            "/help" => Self::Help,
            "/quit" | "/exit" => Self::Quit,
            _ if trimmed.starts_with('/') => Self::Unknown(trimmed.to_string()),
            _ => Self::Message(trimmed.to_string()),
        }
    }
}

pub const HELP: &str = "\
Commands:
  /context   toggle the project context tool (starts a new session)
  /history   toggle conversation history (starts a new session)
  /reset     start a new session
  /status    show modes, project, context and last token usage
  /quit      exit
Anything else is sent as a message.";
