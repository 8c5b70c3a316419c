use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::warn;

use flowpad_editor::{DispatchError, Editor, Intent};
use flowpad_graph::{IdSource, SequentialIdSource};

/// Flowpad - a branching workflow builder
#[derive(Parser)]
#[command(name = "flowpad")]
#[command(version, about, long_about = None)]
struct Cli {
  /// Enable debug logging
  #[arg(long, global = true)]
  verbose: bool,

  #[command(subcommand)]
  command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
  /// Apply a script of edit intents and print the resulting graph
  Apply {
    /// Path to the intent script (a JSON array); stdin when omitted
    script: Option<PathBuf>,

    /// Pretty-print the exported graph
    #[arg(long)]
    pretty: bool,

    /// Use sequential node ids for reproducible output
    #[arg(long)]
    seq_ids: bool,
  },
}

fn main() -> Result<()> {
  let cli = Cli::parse();
  init_tracing(cli.verbose);

  match cli.command {
    Some(Commands::Apply {
      script,
      pretty,
      seq_ids,
    }) => apply(script, pretty, seq_ids),
    None => {
      println!("flowpad - use --help to see available commands");
      Ok(())
    }
  }
}

fn init_tracing(verbose: bool) {
  let default_level = if verbose {
    tracing::Level::DEBUG
  } else {
    tracing::Level::WARN
  };
  tracing_subscriber::fmt()
    .with_env_filter(
      tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
    )
    .with_writer(io::stderr)
    .init();
}

fn apply(script: Option<PathBuf>, pretty: bool, seq_ids: bool) -> Result<()> {
  let content = match &script {
    Some(path) => std::fs::read_to_string(path)
      .with_context(|| format!("failed to read script file: {}", path.display()))?,
    None => read_intents_from_stdin()?,
  };

  let intents: Vec<Intent> =
    serde_json::from_str(&content).context("failed to parse intent script")?;

  let exported = if seq_ids {
    run_script(Editor::with_ids(SequentialIdSource::new()), intents)?
  } else {
    run_script(Editor::new(), intents)?
  };

  let output = if pretty {
    serde_json::to_string_pretty(&exported)?
  } else {
    serde_json::to_string(&exported)?
  };
  println!("{output}");

  Ok(())
}

/// Apply each intent in order. Mutation failures abort; advisory undo/redo
/// no-ops are logged and skipped, as a UI would simply disable the button.
fn run_script<I: IdSource>(
  mut editor: Editor<I>,
  intents: Vec<Intent>,
) -> Result<serde_json::Value> {
  for (index, intent) in intents.into_iter().enumerate() {
    match editor.dispatch(intent) {
      Ok(_) => {}
      Err(DispatchError::History(advisory)) => {
        warn!(index, "{advisory}");
      }
      Err(err) => {
        return Err(anyhow::Error::new(err).context(format!("intent {index} failed")));
      }
    }
  }
  Ok(editor.save())
}

fn read_intents_from_stdin() -> Result<String> {
  let mut buffer = String::new();
  io::stdin()
    .read_to_string(&mut buffer)
    .context("failed to read intents from stdin")?;
  Ok(buffer)
}
