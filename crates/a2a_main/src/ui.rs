use std::sync::Arc;

use a2a_diagnostics::{Diagnostics, ReqwestHttpService};
use a2a_domain::HttpService;
use reedline::{
    default_emacs_keybindings, ColumnarMenu, DefaultPrompt, DefaultPromptSegment, Emacs, KeyCode,
    KeyModifiers, MenuBuilder, Reedline, ReedlineEvent, ReedlineMenu, Signal,
};
use tracing::{debug, warn};

use crate::cli::Cli;
use crate::commands;
use crate::completer::CommandCompleter;
use crate::presenter::Presenter;
use crate::session::Session;

const COMPLETION_MENU: &str = "completion_menu";

pub struct UI<P> {
    cli: Cli,
    session: Session,
    presenter: P,
}

impl<P: Presenter> UI<P> {
    pub fn init(cli: Cli, presenter: P) -> Self {
        let http = match ReqwestHttpService::new() {
            Ok(http) => Some(Arc::new(http) as Arc<dyn HttpService>),
            Err(error) => {
                warn!(error = %error, "HTTP client unavailable, network probes are disabled");
                None
            }
        };
        let diagnostics = Diagnostics::new(cli.diagnostics_config(), http);
        Self { cli, session: Session::new(diagnostics), presenter }
    }

    pub async fn run(&mut self) -> anyhow::Result<()> {
        if let Some(url) = self.cli.base_url.clone() {
            commands::dispatch(&format!("/connect {url}"), &mut self.session, &mut self.presenter)
                .await?;
        }

        if let Some(command) = self.cli.command.clone() {
            commands::dispatch(&command, &mut self.session, &mut self.presenter).await?;
            return Ok(());
        }

        self.presenter
            .info(&format!("a2a {} - type /help for commands, /quit to leave", a2a_domain::VERSION))?;
        let mut editor = editor();
        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic("a2a".to_string()),
            DefaultPromptSegment::Empty,
        );

        loop {
            match editor.read_line(&prompt)? {
                Signal::Success(line) => {
                    debug!(input = %line, "Command received");
                    let keep_going =
                        commands::dispatch(&line, &mut self.session, &mut self.presenter).await?;
                    if !keep_going {
                        break;
                    }
                }
                Signal::CtrlC => continue,
                _ => break,
            }
        }
        Ok(())
    }
}

fn editor() -> Reedline {
    let mut keybindings = default_emacs_keybindings();
    keybindings.add_binding(
        KeyModifiers::NONE,
        KeyCode::Tab,
        ReedlineEvent::UntilFound(vec![
            ReedlineEvent::Menu(COMPLETION_MENU.to_string()),
            ReedlineEvent::MenuNext,
        ]),
    );
    let menu = ColumnarMenu::default().with_name(COMPLETION_MENU);

    Reedline::create()
        .with_completer(Box::new(CommandCompleter))
        .with_menu(ReedlineMenu::EngineCompleter(Box::new(menu)))
        .with_edit_mode(Box::new(Emacs::new(keybindings)))
}
