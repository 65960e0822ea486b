mod app;
mod cli;
mod data;
mod error;
mod hooks;
mod paths;

use std::fs::{self, File};
use std::path::PathBuf;

use arbor::dom::Terminal;
use simplelog::{Config, LevelFilter, WriteLogger};

use crate::app::App;
use crate::cli::Options;
use crate::error::DemoError;

fn main() -> Result<(), DemoError> {
    let matches = match cli::build_cli().try_get_matches() {
        Ok(matches) => matches,
        // --help and --version
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => return Err(e.into()),
    };
    let options = Options::from_matches(&matches);

    init_logging(&options)?;

    let records = match &options.data {
        Some(path) => data::load(path)?,
        None => data::sample()?,
    };
    let mut app = App::new(&options, &records);

    let mut terminal = Terminal::new()?;
    let result = app.run(&mut terminal);
    // Restore the screen before anything is printed
    drop(terminal);

    if let Err(e) = &result {
        log::error!("Demo stopped: {e}");
    }
    result
}

fn init_logging(options: &Options) -> Result<(), DemoError> {
    paths::rotate_logs();
    let path = paths::log_file().unwrap_or_else(|| PathBuf::from("arbor-demo.log"));
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }

    let level = if options.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    WriteLogger::init(level, Config::default(), File::create(&path)?)?;
    log::info!("Logging to {}", path.display());
    Ok(())
}
