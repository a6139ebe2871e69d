use std::io::{self, Stdout, Write};

use colored::{ColoredString, Colorize};
use serde_json::Value;

/// Semantic color of a piece of output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Plain,
    Accent,
    Success,
    Warning,
    Error,
    Muted,
    Strong,
}

impl Tone {
    fn paint(self, text: &str) -> ColoredString {
        match self {
            Tone::Plain => text.normal(),
            Tone::Accent => text.cyan(),
            Tone::Success => text.green(),
            Tone::Warning => text.yellow(),
            Tone::Error => text.red(),
            Tone::Muted => text.dimmed(),
            Tone::Strong => text.bold(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub tone: Tone,
}

/// One line of panel content made of styled spans.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    pub spans: Vec<Span>,
}

impl Line {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn span(mut self, text: impl ToString, tone: Tone) -> Self {
        self.spans.push(Span { text: text.to_string(), tone });
        self
    }

    pub fn plain(self, text: impl ToString) -> Self {
        self.span(text, Tone::Plain)
    }

    /// Adds `"{name}: "` in the accent color.
    pub fn label(self, name: &str) -> Self {
        self.span(format!("{name}: "), Tone::Accent)
    }

    /// A `label: value` line.
    pub fn field(name: &str, value: impl ToString) -> Self {
        Self::new().label(name).plain(value)
    }

    pub fn heading(text: impl ToString) -> Self {
        Self::new().span(text, Tone::Strong)
    }

    pub fn plain_text(&self) -> String {
        self.spans.iter().map(|span| span.text.as_str()).collect()
    }

    fn width(&self) -> usize {
        self.spans.iter().map(|span| span.text.chars().count()).sum()
    }
}

/// A titled, bordered block of lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel {
    pub title: String,
    pub border: Tone,
    pub body: Vec<Line>,
}

impl Panel {
    pub fn new(title: impl ToString) -> Self {
        Self { title: title.to_string(), border: Tone::Accent, body: Vec::new() }
    }

    pub fn border(mut self, tone: Tone) -> Self {
        self.border = tone;
        self
    }

    pub fn line(mut self, line: Line) -> Self {
        self.body.push(line);
        self
    }

    pub fn lines(mut self, lines: impl IntoIterator<Item = Line>) -> Self {
        self.body.extend(lines);
        self
    }

    pub fn blank(self) -> Self {
        self.line(Line::new())
    }

    /// The panel content without styling, one line per body line.
    pub fn plain_text(&self) -> String {
        self.body
            .iter()
            .map(Line::plain_text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Receives everything the commands want to show to the operator.
pub trait Presenter: Send {
    fn panel(&mut self, panel: Panel) -> anyhow::Result<()>;
    fn message(&mut self, tone: Tone, text: &str) -> anyhow::Result<()>;
    /// Shows a JSON document verbatim.
    fn code(&mut self, json: &Value) -> anyhow::Result<()>;

    fn info(&mut self, text: &str) -> anyhow::Result<()> {
        self.message(Tone::Accent, text)
    }

    fn success(&mut self, text: &str) -> anyhow::Result<()> {
        self.message(Tone::Success, text)
    }

    fn warning(&mut self, text: &str) -> anyhow::Result<()> {
        self.message(Tone::Warning, text)
    }

    fn error(&mut self, text: &str) -> anyhow::Result<()> {
        self.message(Tone::Error, text)
    }
}

/// Renders to a terminal with `colored`.
pub struct ConsolePresenter<W> {
    out: W,
}

impl ConsolePresenter<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> ConsolePresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn render_line(line: &Line) -> String {
        line.spans
            .iter()
            .map(|span| span.tone.paint(&span.text).to_string())
            .collect()
    }
}

impl<W: Write + Send> Presenter for ConsolePresenter<W> {
    fn panel(&mut self, panel: Panel) -> anyhow::Result<()> {
        let title_width = panel.title.chars().count() + 2;
        let width = panel
            .body
            .iter()
            .map(Line::width)
            .max()
            .unwrap_or(0)
            .max(title_width + 2);

        let top = format!(
            "╭─ {} {}╮",
            panel.title,
            "─".repeat(width + 1 - title_width)
        );
        writeln!(self.out, "{}", panel.border.paint(&top))?;

        let side = panel.border.paint("│");
        for line in &panel.body {
            let padding = " ".repeat(width - line.width());
            writeln!(self.out, "{side} {}{padding} {side}", Self::render_line(line))?;
        }

        let bottom = format!("╰{}╯", "─".repeat(width + 2));
        writeln!(self.out, "{}", panel.border.paint(&bottom))?;
        self.out.flush()?;
        Ok(())
    }

    fn message(&mut self, tone: Tone, text: &str) -> anyhow::Result<()> {
        writeln!(self.out, "{}", tone.paint(text))?;
        Ok(())
    }

    fn code(&mut self, json: &Value) -> anyhow::Result<()> {
        writeln!(self.out, "{}", serde_json::to_string_pretty(json)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn rendered(f: impl FnOnce(&mut ConsolePresenter<Vec<u8>>)) -> String {
        let mut presenter = ConsolePresenter::new(Vec::new());
        f(&mut presenter);
        let bytes = strip_ansi_escapes::strip(presenter.into_inner());
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_line_plain_text() {
        let line = Line::field("Base URL", "http://localhost:8000");

        assert_eq!(line.plain_text(), "Base URL: http://localhost:8000");
        assert_eq!(line.spans[0].tone, Tone::Accent);
    }

    #[test]
    fn test_panel_rendering() {
        let panel = Panel::new("Agent")
            .line(Line::heading("Pirate Agent"))
            .blank()
            .line(Line::field("Version", "0.1.0"));

        let actual = rendered(|p| p.panel(panel).unwrap());

        let expected = [
            "╭─ Agent ────────╮",
            "│ Pirate Agent   │",
            "│                │",
            "│ Version: 0.1.0 │",
            "╰────────────────╯",
            "",
        ]
        .join("\n");
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_panel_wider_title() {
        let panel = Panel::new("Debug Information").line(Line::new().plain("ok"));

        let actual = rendered(|p| p.panel(panel).unwrap());

        let lines: Vec<_> = actual.lines().collect();
        assert_eq!(lines[0], "╭─ Debug Information ───╮");
        assert_eq!(lines[1], "│ ok                    │");
        assert_eq!(lines[2], "╰───────────────────────╯");
    }

    #[test]
    fn test_messages_and_code() {
        let actual = rendered(|p| {
            p.error("Error: No text provided").unwrap();
            p.code(&json!({"name": "X"})).unwrap();
        });

        assert_eq!(actual, "Error: No text provided\n{\n  \"name\": \"X\"\n}\n");
    }
}
