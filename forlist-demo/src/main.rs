mod items;
mod paths;

use std::fs::{self, File};
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use forlist::For;
use keydom::{markup, Attrs, Node, Tag, TagError};
use serde_json::Value;
use simplelog::{Config, LevelFilter, WriteLogger};
use thiserror::Error;

use items::ItemView;

#[derive(Debug, Error)]
enum DemoError {
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),
    #[error("invalid JSON input: {0}")]
    Json(#[from] serde_json::Error),
    #[error("input must be a JSON array")]
    NotAnArray,
    #[error("invalid tag: {0}")]
    Tag(#[from] TagError),
    #[error("failed to open log file: {0}")]
    LogFile(io::Error),
    #[error("failed to initialize logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}

/// Render a JSON array as keyed markup.
#[derive(Debug, Parser)]
#[command(name = "forlist-demo", version)]
struct Args {
    /// JSON file holding an array of items (stdin when omitted)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Element wrapping all items
    #[arg(short, long)]
    wrapper: Option<String>,

    /// Element used for each item
    #[arg(long, default_value = "li")]
    item_tag: String,

    /// Object field used as the item key
    #[arg(short, long)]
    key_field: Option<String>,

    /// Object field shown for each item
    #[arg(short, long)]
    field: Option<String>,

    /// Text shown when the array is empty
    #[arg(long)]
    empty: Option<String>,

    /// Text shown while loading
    #[arg(long)]
    loading: Option<String>,

    /// Render the loading state
    #[arg(long)]
    is_loading: bool,

    /// Class attribute for the wrapper
    #[arg(long, requires = "wrapper")]
    class: Option<String>,

    /// Indent the output
    #[arg(long)]
    pretty: bool,

    #[arg(long, env = "FORLIST_LOG", default_value = "info")]
    log_level: LevelFilter,
}

/// Create the first log file that can be created, in order.
///
/// Returns the error of the last candidate when none works.
fn open_log_file(candidates: &[PathBuf]) -> Result<(File, PathBuf), DemoError> {
    let mut last_err = io::Error::new(io::ErrorKind::NotFound, "no log file location");
    for path in candidates {
        let created = path
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty())
            .map_or(Ok(()), fs::create_dir_all)
            .and_then(|()| File::create(path));
        match created {
            Ok(file) => return Ok((file, path.clone())),
            Err(e) => last_err = e,
        }
    }
    Err(DemoError::LogFile(last_err))
}

fn init_logging(level: LevelFilter) -> Result<(), DemoError> {
    let candidates = paths::log_file_candidates();
    let (log_file, path) = open_log_file(&candidates)?;
    WriteLogger::init(level, Config::default(), log_file)?;
    if candidates.first() != Some(&path) {
        log::warn!("cache directory not writable, logging to {}", path.display());
    }
    log::info!("logging to {}", path.display());
    Ok(())
}

fn read_input(input: Option<&Path>) -> Result<String, DemoError> {
    match input {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn parse_items(raw: &str) -> Result<Vec<Value>, DemoError> {
    match serde_json::from_str(raw)? {
        Value::Array(items) => Ok(items),
        _ => Err(DemoError::NotAnArray),
    }
}

/// Render `raw` JSON according to `args`.
fn run(args: Args, raw: &str) -> Result<String, DemoError> {
    let items = parse_items(raw)?;
    log::info!("rendering {} items", items.len());

    let view = ItemView {
        tag: args.item_tag.parse()?,
        field: args.field,
        key_field: args.key_field,
    };

    let mut list = For::new(&items, |item, _, _| view.render(item))
        .key_by(|item, index| view.key(item, index))
        .is_loading(args.is_loading);
    if let Some(text) = args.empty {
        list = list.empty(move || Node::text(text.clone()));
    }
    if let Some(text) = args.loading {
        list = list.loading(move || Node::text(text.clone()));
    }

    let node = match args.wrapper {
        Some(wrapper) => {
            let tag: Tag = wrapper.parse()?;
            let mut props = Attrs::new();
            if let Some(class) = args.class {
                props.insert("class", class);
            }
            list.wrap(tag).wrapper_props(props).render()
        }
        None => list.render(),
    };

    Ok(if args.pretty {
        markup::render_pretty(&node)
    } else {
        markup::render(&node)
    })
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = init_logging(args.log_level) {
        eprintln!("Warning: logging disabled: {}", e);
    }

    let result = read_input(args.input.as_deref()).and_then(|raw| run(args, &raw));
    match result {
        Ok(out) => {
            println!("{}", out.trim_end());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
