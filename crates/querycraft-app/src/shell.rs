//! Interactive question loop.

use std::path::{Path, PathBuf};

use querycraft_ai::Session;
use querycraft_common::{QueryCraftError, Result};
use querycraft_config::schema::DisplayConfig;
use querycraft_db::{introspect, DatabaseSource};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tokio::runtime::Runtime;
use tracing::{debug, info, warn};

use crate::output::render_outcome;
use crate::pipeline::Pipeline;

const HELP: &str = "\
Type a question in plain language, or one of:
  .help          show this message
  .schema        print the schema sent to the model
  .history       print the conversation so far
  .usage         show token usage for this session
  .open FILE     query an uploaded copy of FILE (.db, .sqlite, .sqlite3)
  .clear         end this conversation and start a new one
  .exit, .quit   leave";

/// A line starting with `.`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetaCommand {
    Help,
    Schema,
    History,
    Usage,
    Open(Option<PathBuf>),
    Clear,
    Exit,
    Unknown(String),
}

impl MetaCommand {
    /// Parse a meta command. Returns `None` for ordinary questions.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if !line.starts_with('.') {
            return None;
        }
        let (name, rest) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (line, ""),
        };
        Some(match name {
            ".help" | ".h" => MetaCommand::Help,
            ".schema" => MetaCommand::Schema,
            ".history" => MetaCommand::History,
            ".usage" => MetaCommand::Usage,
            ".open" => MetaCommand::Open((!rest.is_empty()).then(|| PathBuf::from(rest))),
            ".clear" => MetaCommand::Clear,
            ".exit" | ".quit" | ".q" => MetaCommand::Exit,
            other => MetaCommand::Unknown(other.to_string()),
        })
    }
}

pub struct Shell<'a> {
    runtime: &'a Runtime,
    pipeline: Pipeline,
    source: DatabaseSource,
    display: DisplayConfig,
    session: Session,
}

impl<'a> Shell<'a> {
    pub fn new(
        runtime: &'a Runtime,
        pipeline: Pipeline,
        source: DatabaseSource,
        display: DisplayConfig,
    ) -> Self {
        Self {
            runtime,
            pipeline,
            source,
            display,
            session: Session::new(),
        }
    }

    pub fn run(&mut self) -> Result<()> {
        let mut editor = DefaultEditor::new().map_err(shell_error)?;
        let history = history_path();
        if let Some(path) = &history {
            if editor.load_history(path).is_err() {
                debug!(path = %path.display(), "no previous shell history");
            }
        }

        self.greet();

        loop {
            match editor.readline("querycraft> ") {
                Ok(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    if let Err(e) = editor.add_history_entry(line) {
                        debug!(error = %e, "failed to record history entry");
                    }
                    match MetaCommand::parse(line) {
                        Some(MetaCommand::Exit) => break,
                        Some(command) => self.meta(command),
                        None => self.ask(line),
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("(use .exit to leave)");
                }
                Err(ReadlineError::Eof) => break,
                Err(e) => return Err(shell_error(e)),
            }
        }

        if let Some(path) = &history {
            save_history(&mut editor, path);
        }
        info!(session = self.session.id().short(), turns = self.session.len(), "shell closed");
        Ok(())
    }

    fn greet(&self) {
        println!(
            "Hi! Ask me a question about {}, or open your own SQLite database with .open FILE.",
            self.source.label()
        );
        println!("Using {}. Type .help for commands.\n", self.pipeline.provider());
    }

    fn ask(&mut self, question: &str) {
        let outcome = self.runtime.block_on(self.pipeline.run_turn(
            &mut self.session,
            self.source.path(),
            question,
        ));
        println!("{}\n", render_outcome(&outcome, self.session.last(), &self.display));
    }

    fn meta(&mut self, command: MetaCommand) {
        match command {
            MetaCommand::Help => println!("{HELP}"),
            MetaCommand::Schema => match introspect(self.source.path()) {
                Ok(schema) if schema.is_empty() => println!("(no tables)"),
                Ok(schema) => print!("{schema}"),
                Err(e) => println!("Error: {e}"),
            },
            MetaCommand::History => {
                if self.session.is_empty() {
                    println!("(no conversation yet)");
                } else {
                    println!("{}", self.session.transcript());
                }
            }
            MetaCommand::Usage => println!("{}", usage_report(&self.session)),
            MetaCommand::Open(None) => println!("Usage: .open FILE"),
            MetaCommand::Open(Some(path)) => self.open(&path),
            MetaCommand::Clear => {
                self.session.clear();
                println!("Started a new conversation.");
            }
            MetaCommand::Unknown(name) => {
                println!("Unknown command {name}. Type .help for commands.")
            }
            MetaCommand::Exit => {}
        }
    }

    /// Switch to an uploaded copy of `path`. The previous upload, if any, is deleted.
    fn open(&mut self, path: &Path) {
        match DatabaseSource::upload(path) {
            Ok(source) => {
                self.source = source;
                self.session.clear();
                println!(
                    "Now querying {}. Started a new conversation.",
                    self.source.label()
                );
            }
            Err(e) => println!("Error: {e}"),
        }
    }
}

fn save_history(editor: &mut DefaultEditor, path: &Path) {
    if let Some(parent) = path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            warn!(error = %e, dir = %parent.display(), "failed to create history directory");
            return;
        }
    }
    if let Err(e) = editor.save_history(path) {
        warn!(error = %e, "failed to save shell history");
    }
}

/// Session token usage: totals first, then one line per provider.
fn usage_report(session: &Session) -> String {
    let tracker = session.tracker();
    let total = tracker.total();
    let mut out = format!(
        "Session {} (started {})\n{} calls, {} input tokens, {} output tokens",
        session.id().short(),
        session.started_at().format("%Y-%m-%d %H:%M:%S UTC"),
        tracker.call_count(),
        total.input_tokens,
        total.output_tokens
    );
    for (provider, usage) in tracker.providers() {
        out.push_str(&format!(
            "\n  {provider}: {} calls, {} input, {} output",
            usage.calls, usage.usage.input_tokens, usage.usage.output_tokens
        ));
    }
    out
}

fn history_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("querycraft").join("history.txt"))
}

fn shell_error(e: ReadlineError) -> QueryCraftError {
    QueryCraftError::Shell(e.to_string())
}
