use a2a_main::{logging, Cli, ConsolePresenter, UI};
use anyhow::Result;
use clap::Parser;

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine.
    let _ = dotenv::dotenv();

    let cli = Cli::parse();
    let _guard = match logging::init(&cli.log_level) {
        Ok(guard) => Some(guard),
        Err(error) => {
            eprintln!("Logging disabled: {error:#}");
            None
        }
    };

    let mut ui = UI::init(cli, ConsolePresenter::stdout());
    ui.run().await
}
