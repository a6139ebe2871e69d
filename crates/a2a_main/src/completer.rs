use reedline::{Completer, Span, Suggestion};

use crate::command::CommandName;

/// Completes slash command names at the start of the line.
#[derive(Clone, Default)]
pub struct CommandCompleter;

impl Completer for CommandCompleter {
    fn complete(&mut self, line: &str, pos: usize) -> Vec<Suggestion> {
        let typed = &line[..pos.min(line.len())];
        if !typed.starts_with('/') || typed.contains(char::is_whitespace) {
            return vec![];
        }

        CommandName::all()
            .into_iter()
            .filter(|name| name.starts_with(typed))
            .map(|name| Suggestion {
                value: name,
                description: None,
                style: None,
                extra: None,
                span: Span::new(0, typed.len()),
                append_whitespace: true,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn values(line: &str) -> Vec<String> {
        CommandCompleter
            .complete(line, line.len())
            .into_iter()
            .map(|suggestion| suggestion.value)
            .collect()
    }

    #[test]
    fn test_completes_command_prefix() {
        assert_eq!(values("/test"), vec!["/test_sse", "/test_send_subscribe"]);
        assert_eq!(values("/di"), vec!["/disconnect"]);
    }

    #[test]
    fn test_ignores_arguments_and_plain_text() {
        assert!(values("/test_sse --t").is_empty());
        assert!(values("hello").is_empty());
    }
}
