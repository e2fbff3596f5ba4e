use anyhow::{Context, Result, bail};
use notemark_config::{Config, HighlighterKind};
use notemark_engine::{NoteStore, PlainHighlighter, Renderer, TodoStatus, todo};
use relative_path::RelativePathBuf;
use std::{
    collections::BTreeSet,
    env,
    path::PathBuf,
    process,
};

#[derive(Debug, PartialEq)]
enum Command {
    Render {
        note: String,
        highlight: Option<String>,
        tags: Vec<String>,
    },
    Toggle {
        note: String,
        status: TodoStatus,
        index: usize,
    },
}

fn parse_args(args: &[String]) -> Result<Command> {
    match args {
        [flag, note, status, index] if flag == "--todo" => Ok(Command::Toggle {
            note: note.clone(),
            status: status.parse()?,
            index: index
                .parse()
                .with_context(|| format!("invalid item index `{index}`"))?,
        }),
        [flag, ..] if flag == "--todo" => bail!("--todo takes a note, a status and an index"),
        _ => parse_render_args(args),
    }
}

fn parse_render_args(args: &[String]) -> Result<Command> {
    let mut note = None;
    let mut highlight = None;
    let mut tags = Vec::new();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--highlight" => {
                let Some(word) = iter.next() else {
                    bail!("--highlight needs a word");
                };
                highlight = Some(word.clone());
            }
            "--tag" => {
                let Some(tag) = iter.next() else {
                    bail!("--tag needs a name");
                };
                tags.push(tag.trim_start_matches('#').to_string());
            }
            flag if flag.starts_with("--") => bail!("unknown option `{flag}`"),
            _ if note.is_some() => bail!("only one note can be rendered at a time"),
            _ => note = Some(arg.clone()),
        }
    }

    let Some(note) = note else {
        bail!("no note given");
    };
    Ok(Command::Render {
        note,
        highlight,
        tags,
    })
}

/// Where a note lives: inside the configured notes directory, or anywhere.
#[derive(Debug, PartialEq)]
enum NoteRef {
    InNotes {
        store: NoteStore,
        relative: RelativePathBuf,
    },
    Direct(PathBuf),
}

impl NoteRef {
    fn resolve(note: &str, store: Option<&NoteStore>) -> Result<Self> {
        let direct = PathBuf::from(note);
        if direct.is_file() {
            return Ok(NoteRef::Direct(direct));
        }
        match store {
            Some(store) => Ok(NoteRef::InNotes {
                store: store.clone(),
                relative: RelativePathBuf::from(note),
            }),
            None => bail!(
                "note `{note}` not found and no usable notes path is configured in {}",
                Config::config_path().display()
            ),
        }
    }

    fn read(&self) -> Result<String> {
        match self {
            NoteRef::InNotes { store, relative } => Ok(store.read(relative)?),
            NoteRef::Direct(path) => std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display())),
        }
    }

    fn write(&self, content: &str) -> Result<()> {
        match self {
            NoteRef::InNotes { store, relative } => Ok(store.write(relative, content)?),
            NoteRef::Direct(path) => std::fs::write(path, content)
                .with_context(|| format!("failed to write {}", path.display())),
        }
    }
}

/// The configured notes directory, when it can be opened.
fn open_store(config: Option<&Config>) -> Option<NoteStore> {
    let config = config?;
    match NoteStore::open(&config.notes_path) {
        Ok(store) => {
            log::debug!("Using notes in {}", store.root().display());
            Some(store)
        }
        Err(e) => {
            log::warn!("Ignoring configured notes path: {e}");
            None
        }
    }
}

/// Config tags, command line tags and every tag written in the notes.
fn known_tags(config: Option<&Config>, store: Option<&NoteStore>, extra: &[String]) -> Vec<String> {
    let mut tags: BTreeSet<String> = extra.iter().cloned().collect();
    if let Some(config) = config {
        tags.extend(config.tags.iter().cloned());
    }
    if let Some(store) = store {
        match store.known_tags() {
            Ok(found) => tags.extend(found),
            Err(e) => log::warn!("Could not scan notes for tags: {e}"),
        }
    }
    tags.into_iter().collect()
}

fn run(command: Command, config: Option<&Config>) -> Result<String> {
    let store = open_store(config);
    match command {
        Command::Render {
            note,
            highlight,
            tags,
        } => {
            let text = NoteRef::resolve(&note, store.as_ref())?.read()?;
            let renderer = Renderer::new().with_tags(known_tags(config, store.as_ref(), &tags));
            log::debug!("Rendering {note} with {} known tags", renderer.tags().len());

            let html = match config.map_or(HighlighterKind::default(), |c| c.highlighter) {
                HighlighterKind::Syntect => renderer.render_note(&text, highlight.as_deref()),
                HighlighterKind::Plain => renderer
                    .with_highlighter(&PlainHighlighter)
                    .render_note(&text, highlight.as_deref()),
            };
            Ok(html)
        }
        Command::Toggle {
            note,
            status,
            index,
        } => {
            let note_ref = NoteRef::resolve(&note, store.as_ref())?;
            let text = note_ref.read()?;
            let Some(updated) = todo::toggle(&text, status, index) else {
                bail!("{note} has no {status} item at index {index}");
            };
            note_ref.write(&updated)?;
            log::info!("Marked {status} item {index} of {note} as {}", status.toggled());
            Ok(format!("{note}: {status} item {index} is now {}", status.toggled()))
        }
    }
}

fn print_usage(program: &str) {
    eprintln!("Usage: {program} <note> [--highlight WORD] [--tag NAME]...");
    eprintln!("       {program} --todo <note> <TODO|DONE> <index>");
    eprintln!(
        "Notes are looked up in notes_path from {}",
        Config::config_path().display()
    );
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map_or("notemark-cli", String::as_str);

    let command = match parse_args(args.get(1..).unwrap_or_default()) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("Error: {e}");
            print_usage(program);
            process::exit(1);
        }
    };

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };
    if config.is_none() {
        log::debug!("No config file at {}", Config::config_path().display());
    }

    let output = run(command, config.as_ref())?;
    println!("{output}");
    Ok(())
}
