use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

use anyhow::Context;
use linked_records::{CollectionPoint, Config, Console, RecordFile, SinglyLinkedList};
use tracing::instrument;

use crate::cli::terminal::Palette;

#[derive(Debug, clap::Parser)]
pub struct Command {
    /// Data file of collection points (`id;category;address`)
    #[arg(short, long)]
    file: Option<PathBuf>,
}

impl Command {
    #[instrument(skip(config))]
    pub fn run(self, config: &Config) -> anyhow::Result<()> {
        let settings = &config.collection;
        let path = self.file.unwrap_or_else(|| settings.file.clone());
        let source = RecordFile::new(path, config.delimiter);

        let stdin = io::stdin();
        let mut console = Console::new(stdin.lock(), io::stdout().lock());
        session(&source, settings.confirm, Palette::for_stdout(), &mut console)
    }
}

/// Asks for a material, lists the matching collection points, and repeats
/// while the user confirms.
fn session<R: BufRead, W: Write>(
    source: &RecordFile,
    yes: char,
    palette: Palette,
    console: &mut Console<R, W>,
) -> anyhow::Result<()> {
    // fail before the first prompt if the data file is unreadable
    source.open().context("could not load collection points")?;

    let again = palette.dim(&format!("\nContinue? ({yes}/n): "));
    loop {
        let Some(material) = console.ask("Which material do you want to dispose of: ")? else {
            break;
        };

        let mut list: SinglyLinkedList<CollectionPoint> = source
            .load(&material)
            .context("could not load collection points")?;
        tracing::info!("{} collection points accept '{material}'", list.len());

        if list.is_empty() {
            let message = format!("No collection point found for material {material}.");
            writeln!(console.out(), "{}", palette.warning(&message))?;
        } else {
            list.display(console.out())?;
        }
        list.release();

        if !console.confirm(&again, yes)? {
            break;
        }
    }

    writeln!(console.out(), "\nExiting...")?;
    Ok(())
}
