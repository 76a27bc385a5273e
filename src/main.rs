use api_dash::app::App;
use api_dash::config::Config;
use api_dash::logging;
use color_eyre::Result;
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let config_path = Config::config_path()?;
    let config = Config::load_from(&config_path)?;
    logging::init(&config.logging)?;

    let terminal = ratatui::init();
    execute!(std::io::stdout(), EnableBracketedPaste)?;

    let app_result = App::new(config, config_path).run(terminal).await;

    execute!(std::io::stdout(), DisableBracketedPaste)?;
    ratatui::restore();
    app_result
}
