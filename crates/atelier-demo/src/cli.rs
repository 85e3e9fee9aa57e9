use std::path::PathBuf;

use atelier::runtime::{PageConfig, PageContent, PageShell, ThemeContext};
use atelier::style::{
    EnvPreference, FixedPreference, JsonFileStore, MemoryStore, SystemPreference, ThemeStore,
};
use clap::{Parser, ValueEnum};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::error::Result;
use crate::logging;
use crate::session::{Session, SessionReport};

/// System color scheme the session pretends the visitor has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorScheme {
    Light,
    Dark,
    /// Read `ATELIER_COLOR_SCHEME` (`dark` / `light`); unknown otherwise.
    Auto,
}

impl ColorScheme {
    fn preference(self) -> Box<dyn SystemPreference> {
        match self {
            Self::Light => Box::new(FixedPreference::LIGHT),
            Self::Dark => Box::new(FixedPreference::DARK),
            Self::Auto => Box::new(EnvPreference::default()),
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "atelier-demo",
    about = "Run a scripted visitor session against the studio page and report it as JSON",
    version
)]
pub struct Cli {
    /// Page configuration JSON.
    #[arg(long, env = "ATELIER_CONFIG")]
    pub config: Option<PathBuf>,

    /// JSON file standing in for browser local storage. In-memory if unset.
    #[arg(long, env = "ATELIER_STATE_FILE")]
    pub state_file: Option<PathBuf>,

    /// Emit logs as JSON lines on stderr.
    #[arg(long, env = "ATELIER_JSON_LOGS")]
    pub json_logs: bool,

    /// Simulated system color scheme.
    #[arg(long, value_enum, default_value_t = ColorScheme::Auto)]
    pub color_scheme: ColorScheme,

    /// Seed for the lookbook and marquee shuffle.
    #[arg(long, env = "ATELIER_SEED")]
    pub seed: Option<u64>,

    /// Pretty-print the report.
    #[arg(long)]
    pub pretty: bool,
}

pub fn run_from_env() -> Result<()> {
    let cli = Cli::parse();
    run(cli)
}

pub fn run(cli: Cli) -> Result<()> {
    logging::init(cli.json_logs)?;
    let report = execute(&cli)?;
    let out = if cli.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{out}");
    Ok(())
}

/// Build the page from `cli` and play the scripted session.
pub fn execute(cli: &Cli) -> Result<SessionReport> {
    let config = match &cli.config {
        Some(path) => PageConfig::from_path(path)?,
        None => PageConfig::default(),
    };
    let store: Box<dyn ThemeStore> = match &cli.state_file {
        Some(path) => Box::new(JsonFileStore::new(path)),
        None => Box::new(MemoryStore::new()),
    };
    let system = cli.color_scheme.preference();
    let theme = ThemeContext::load(&config.theme_key, store, system.as_ref());
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    tracing::info!(
        theme = theme.mode().as_str(),
        source = ?theme.source(),
        seeded = cli.seed.is_some(),
        "starting session"
    );

    let theme_key = config.theme_key.clone();
    let page = PageShell::new(config, PageContent::studio(), theme, &mut rng);
    let mut report = Session::new(page).play();

    if let Some(path) = &cli.state_file {
        report.persisted_theme = JsonFileStore::new(path).load(&theme_key)?;
    }
    Ok(report)
}
