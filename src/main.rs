//! newsdesk - Entry Point

use clap::Parser;
use newsdesk::api::{HttpTransport, NewsApi};
use newsdesk::config::KeyBindings;
use newsdesk::model::Route;
use newsdesk::state::{
    detect_system_mode, load_stored_mode, stored_theme_path, AppState, Dispatcher, PageSettings,
    ThemeContext, ThemePreference,
};
use newsdesk::view::{ColorConfig, ShellOptions};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// newsdesk - browse and search news in the terminal
#[derive(Parser, Debug)]
#[command(name = "newsdesk")]
#[command(version)]
#[command(about = "Browse headlines, categories and search results from a news API")]
pub struct Args {
    /// Location to open: /, /category/<key>, /search/<term> or /news?title=<title>
    pub location: Option<String>,

    /// News API key (overrides config file and NEWS_API_KEY)
    #[arg(long)]
    pub api_key: Option<String>,

    /// Colour theme
    #[arg(long, value_parser = ["system", "light", "dark"])]
    pub theme: Option<String>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = newsdesk::config::load_config_with_precedence(args.config.clone())?;
        let merged = newsdesk::config::merge_config(config_file);
        let with_env = newsdesk::config::apply_env_overrides(merged);
        newsdesk::config::apply_cli_overrides(with_env, args.api_key.clone(), args.theme.clone())
    };

    let _log_guard = newsdesk::logging::init(&config.log_file_path)?;

    info!(config = ?config, "Configuration loaded and resolved");

    let start = Route::parse(args.location.as_deref().unwrap_or("/"))?;

    let preference: ThemePreference = config.theme.parse()?;
    let theme_path = stored_theme_path();
    let stored = theme_path.as_deref().and_then(load_stored_mode);
    let theme = ThemeContext::resolve(stored, preference, detect_system_mode());
    info!(mode = %theme.mode(), ?preference, ?stored, "Theme resolved");

    let api = NewsApi::new(
        config.api_base_url.clone(),
        config.api_key.clone(),
        Arc::new(HttpTransport::new()?),
    );
    if !api.has_api_key() {
        warn!("No API key configured; pages will report the missing key instead of fetching");
    }
    let mut dispatcher = Dispatcher::new(api);

    let settings = PageSettings {
        page_size: config.page_size,
        quiet_period: Duration::from_millis(config.debounce_ms),
        home_categories: config.home_categories.clone(),
    };
    let app_state = AppState::new(start, settings, theme, &mut dispatcher);

    let options = ShellOptions {
        color: ColorConfig::from_env_and_args(args.no_color),
        theme_path,
        key_bindings: KeyBindings::default(),
    };
    newsdesk::view::run(app_state, dispatcher, options)?;

    Ok(())
}
