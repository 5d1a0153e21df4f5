//! Line-oriented terminal loop.

use tilebrief_common::TileBriefError;
use tilebrief_orchestrator::{Orchestrator, TurnMode};
use tokio::io::{AsyncBufReadExt, BufReader};

use super::command::{Command, HELP};
use super::{ChatEntry, ChatState};

/// Run one turn for `message` and print the reply.
pub async fn run_single(orchestrator: &Orchestrator, mode: TurnMode, message: &str) {
    let mut state = ChatState::new(mode);
    match state.submit(orchestrator, message).await {
        Some(entry) => print_entry(entry),
        None => eprintln!("Nothing to send."),
    }
}

/// Interactive loop until `/quit` or end of input.
pub async fn run_repl(orchestrator: &Orchestrator, mode: TurnMode) -> Result<(), TileBriefError> {
    let mut state = ChatState::new(mode);
    for entry in &state.entries {
        print_entry(entry);
    }
    println!("(type /help for commands)");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match Command::parse(&line) {
            Command::Quit => break,
            Command::Help => println!("{HELP}"),
            Command::Status => print_status(&state),
            Command::Reset => {
                state.reset();
                println!("Started a new session.");
            }
            Command::ToggleContextTool => {
                state.toggle_context_tool();
                println!(
                    "Context tool {}. Started a new session.",
                    on_off(state.mode.use_context_tool)
                );
            }
            Command::ToggleHistory => {
                state.toggle_history();
                println!(
                    "History {}. Started a new session.",
                    on_off(state.mode.include_history)
                );
            }
            Command::Unknown(cmd) => println!("Unknown command {cmd}. Type /help."),
            Command::Message(text) => {
                if let Some(entry) = state.submit(orchestrator, &text).await {
                    print_entry(entry);
                }
            }
        }
    }

    Ok(())
}

fn print_entry(entry: &ChatEntry) {
    println!("\n{}\n", entry.content);
    if !entry.sources.is_empty() {
        println!("Sources:");
        for (i, source) in entry.sources.iter().enumerate() {
            println!("  [{}] {} <{}>", i + 1, source.title, source.uri);
        }
        println!();
    }
}

fn print_status(state: &ChatState) {
    println!("Context tool: {}", on_off(state.mode.use_context_tool));
    println!("History:      {}", on_off(state.mode.include_history));
    println!("Project:      {}", state.project_id.as_deref().unwrap_or("-"));
    println!(
        "Context:      {}",
        state.project_context.as_deref().unwrap_or("-")
    );
    match state.last_usage {
        Some(usage) => println!(
            "Last turn:    {} in / {} out tokens",
            usage.input_tokens, usage.output_tokens
        ),
        None => println!("Last turn:    -"),
    }
    if let Some((tokens, calls)) = state.session_usage() {
        println!("Session:      {tokens} tokens over {calls} calls");
    }
}

fn on_off(enabled: bool) -> &'static str {
    if enabled {
        "on"
    } else {
        "off"
    }
}
