use std::str::FromStr;

use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, EnumIter, EnumString};

/// Every slash command the shell understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, EnumString, AsRefStr)]
pub enum CommandName {
    #[strum(serialize = "/server")]
    Server,
    #[strum(serialize = "/agent_card")]
    AgentCard,
    #[strum(serialize = "/debug_info")]
    DebugInfo,
    #[strum(serialize = "/test_sse")]
    TestSse,
    #[strum(serialize = "/test_send_subscribe")]
    TestSendSubscribe,
    #[strum(serialize = "/connect")]
    Connect,
    #[strum(serialize = "/disconnect")]
    Disconnect,
    #[strum(serialize = "/help")]
    Help,
    #[strum(to_string = "/quit", serialize = "/exit")]
    Quit,
}

impl CommandName {
    pub fn usage(&self) -> &'static str {
        match self {
            CommandName::Server => "/server",
            CommandName::AgentCard => "/agent_card [--raw] [--refresh]",
            CommandName::DebugInfo => "/debug_info",
            CommandName::TestSse => "/test_sse [--timeout <seconds>]",
            CommandName::TestSendSubscribe => "/test_send_subscribe <text>",
            CommandName::Connect => "/connect <url>",
            CommandName::Disconnect => "/disconnect",
            CommandName::Help => "/help",
            CommandName::Quit => "/quit",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            CommandName::Server => "Show the current connection",
            CommandName::AgentCard => "Show the agent card of the connected server",
            CommandName::DebugInfo => "Show connection, system and dependency details",
            CommandName::TestSse => "Check that the event stream endpoint answers",
            CommandName::TestSendSubscribe => "Send one streaming task and check the response",
            CommandName::Connect => "Connect to an agent",
            CommandName::Disconnect => "Forget the current connection",
            CommandName::Help => "List the available commands",
            CommandName::Quit => "Leave the shell (also /exit)",
        }
    }

    /// All names a command can be typed as.
    pub fn all() -> Vec<String> {
        CommandName::iter()
            .map(|name| name.as_ref().to_string())
            .chain(std::iter::once("/exit".to_string()))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Server,
    AgentCard { raw: bool, refresh: bool },
    DebugInfo,
    TestSse { timeout: Option<String> },
    TestSendSubscribe { text: String },
    Connect { url: String },
    Disconnect,
    Help,
    Quit,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command: {0}. Type /help for the list of commands")]
    Unknown(String),
    #[error("Unknown option {option} for {command}")]
    UnknownOption { command: &'static str, option: String },
    #[error("Usage: {0}")]
    Usage(&'static str),
    #[error("Commands start with '/'. Type /help for the list of commands")]
    NotACommand,
}

impl Command {
    /// Parses one line of input. Blank input yields `None`.
    pub fn parse(input: &str) -> Result<Option<Self>, CommandError> {
        let line = input.trim();
        if line.is_empty() {
            return Ok(None);
        }
        let (head, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim_start();
        if !head.starts_with('/') {
            return Err(CommandError::NotACommand);
        }
        let name =
            CommandName::from_str(head).map_err(|_| CommandError::Unknown(head.to_string()))?;
        let args: Vec<&str> = rest.split_whitespace().collect();

        let command = match name {
            CommandName::Server => Command::Server,
            CommandName::DebugInfo => Command::DebugInfo,
            CommandName::Disconnect => Command::Disconnect,
            CommandName::Help => Command::Help,
            CommandName::Quit => Command::Quit,
            CommandName::AgentCard => {
                let (mut raw, mut refresh) = (false, false);
                for arg in args {
                    match arg {
                        "--raw" => raw = true,
                        "--refresh" => refresh = true,
                        other => return Err(unknown_option(name, other)),
                    }
                }
                Command::AgentCard { raw, refresh }
            }
            CommandName::TestSse => Command::TestSse { timeout: parse_timeout(name, &args)? },
            CommandName::TestSendSubscribe => {
                // Free text, sent as typed.
                Command::TestSendSubscribe { text: rest.to_string() }
            }
            CommandName::Connect => match args.as_slice() {
                [url] => Command::Connect { url: url.to_string() },
                _ => return Err(CommandError::Usage(name.usage())),
            },
        };
        Ok(Some(command))
    }
}

fn unknown_option(name: CommandName, option: &str) -> CommandError {
    CommandError::UnknownOption { command: name.usage(), option: option.to_string() }
}

// Accepts `--timeout X` and `--timeout=X`. A dangling `--timeout` passes an
// empty value through so the probe can report it.
fn parse_timeout(name: CommandName, args: &[&str]) -> Result<Option<String>, CommandError> {
    let mut timeout = None;
    let mut args = args.iter();
    while let Some(arg) = args.next() {
        if *arg == "--timeout" {
            timeout = Some(args.next().map(|value| value.to_string()).unwrap_or_default());
        } else if let Some(value) = arg.strip_prefix("--timeout=") {
            timeout = Some(value.to_string());
        } else {
            return Err(unknown_option(name, arg));
        }
    }
    Ok(timeout)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(Command::parse("/server"), Ok(Some(Command::Server)));
        assert_eq!(Command::parse("  /debug_info  "), Ok(Some(Command::DebugInfo)));
        assert_eq!(Command::parse("/exit"), Ok(Some(Command::Quit)));
        assert_eq!(Command::parse("/quit"), Ok(Some(Command::Quit)));
        assert_eq!(Command::parse("   "), Ok(None));
    }

    #[test]
    fn test_parse_agent_card_flags() {
        assert_eq!(
            Command::parse("/agent_card --raw"),
            Ok(Some(Command::AgentCard { raw: true, refresh: false }))
        );
        assert_eq!(
            Command::parse("/agent_card --refresh --raw"),
            Ok(Some(Command::AgentCard { raw: true, refresh: true }))
        );
        assert!(matches!(
            Command::parse("/agent_card --pretty"),
            Err(CommandError::UnknownOption { .. })
        ));
    }

    #[test]
    fn test_parse_test_sse_timeout() {
        assert_eq!(Command::parse("/test_sse"), Ok(Some(Command::TestSse { timeout: None })));
        assert_eq!(
            Command::parse("/test_sse --timeout abc"),
            Ok(Some(Command::TestSse { timeout: Some("abc".to_string()) }))
        );
        assert_eq!(
            Command::parse("/test_sse --timeout=2.5"),
            Ok(Some(Command::TestSse { timeout: Some("2.5".to_string()) }))
        );
        assert_eq!(
            Command::parse("/test_sse --timeout"),
            Ok(Some(Command::TestSse { timeout: Some(String::new()) }))
        );
    }

    #[test]
    fn test_parse_send_subscribe_text() {
        assert_eq!(
            Command::parse("/test_send_subscribe Ahoy   matey"),
            Ok(Some(Command::TestSendSubscribe { text: "Ahoy   matey".to_string() }))
        );
        assert_eq!(
            Command::parse("  /test_send_subscribe \t Ahoy,\tmatey!  "),
            Ok(Some(Command::TestSendSubscribe { text: "Ahoy,\tmatey!".to_string() }))
        );
        assert_eq!(
            Command::parse("/test_send_subscribe"),
            Ok(Some(Command::TestSendSubscribe { text: String::new() }))
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            Command::parse("/teleport"),
            Err(CommandError::Unknown("/teleport".to_string()))
        );
        assert_eq!(Command::parse("hello"), Err(CommandError::NotACommand));
        assert_eq!(
            Command::parse("/connect"),
            Err(CommandError::Usage("/connect <url>"))
        );
        assert_eq!(
            CommandError::Usage("/connect <url>").to_string(),
            "Usage: /connect <url>"
        );
    }

    #[test]
    fn test_all_names() {
        let names = CommandName::all();

        assert_eq!(names.first().map(String::as_str), Some("/server"));
        assert!(names.contains(&"/exit".to_string()));
        assert!(names.contains(&"/quit".to_string()));
    }
}
