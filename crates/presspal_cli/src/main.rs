//! Terminal shell for the PressPal contact book.
//!
//! # Responsibility
//! - Resolve configuration from flags and environment.
//! - Load preferences and the contact book, then run a line-based loop.
//! - Save preferences on the way out.

use clap::Parser;
use log::{error, info};
use presspal_core::{
    default_log_level, init_logging, init_model, load_user_prefs, JsonContactBookStorage,
    JsonUserPrefsStorage, LogicManager, StorageManager, UserPrefsStorage,
};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

const PROMPT: &str = "> ";

/// Command-line arguments for presspal
#[derive(Parser, Debug)]
#[command(name = "presspal")]
#[command(about = "Contact book for media professionals")]
#[command(version)]
struct Args {
    /// User preferences file
    #[arg(long, default_value = "preferences.json", env = "PRESSPAL_PREFS")]
    prefs: PathBuf,

    /// Contact book file; overrides the path stored in preferences
    #[arg(long, env = "PRESSPAL_DATA")]
    data: Option<PathBuf>,

    /// trace|debug|info|warn|error
    #[arg(long, env = "PRESSPAL_LOG_LEVEL")]
    log_level: Option<String>,

    /// Directory for rotated log files
    #[arg(long, default_value = "logs", env = "PRESSPAL_LOG_DIR")]
    log_dir: PathBuf,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = args.log_level.as_deref().unwrap_or(default_log_level());
    if let Err(err) = init_logging(level, &absolute(&args.log_dir)) {
        eprintln!("warning: logging disabled: {err}");
    }

    let prefs_storage = JsonUserPrefsStorage::new(&args.prefs);
    let mut user_prefs = load_user_prefs(&prefs_storage);
    if let Some(data) = args.data {
        user_prefs.set_contact_book_file_path(data);
    }

    let storage = StorageManager::new(
        JsonContactBookStorage::new(user_prefs.contact_book_file_path()),
        prefs_storage,
    );
    let model = init_model(&storage, user_prefs);
    let mut logic = LogicManager::new(model, storage);

    info!(
        "event=shell_start module=cli status=ok contact_book_file={} persons={}",
        logic.contact_book_file_path().display(),
        logic.contact_book().persons().len()
    );

    if let Err(err) = run_loop(&mut logic) {
        error!("event=shell_loop module=cli status=error error={err}");
        eprintln!("error: {err}");
    }

    match logic.storage().save_user_prefs(logic.user_prefs()) {
        Ok(()) => {
            info!("event=shell_stop module=cli status=ok");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("event=shell_stop module=cli status=error error={err}");
            eprintln!("error: could not save preferences: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run_loop(logic: &mut LogicManager<StorageManager>) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();

    loop {
        write!(stdout, "{PROMPT}")?;
        stdout.flush()?;

        let Some(line) = lines.next().transpose()? else {
            return Ok(());
        };

        match logic.execute(&line) {
            Ok(result) => {
                writeln!(stdout, "{}", result.feedback)?;
                if let Some(listing) = logic.render_listing(&result) {
                    writeln!(stdout, "{listing}")?;
                }
                if result.exit {
                    return Ok(());
                }
            }
            Err(err) => writeln!(stdout, "{err}")?,
        }
    }
}

fn absolute(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    std::env::current_dir()
        .map(|cwd| cwd.join(path))
        .unwrap_or_else(|_| path.to_path_buf())
}
