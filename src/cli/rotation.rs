use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

use anyhow::Context;
use linked_records::{CircularList, Config, Console, RecordFile, Rotation};
use tracing::instrument;

use crate::cli::terminal::Palette;

#[derive(Debug, clap::Parser)]
pub struct Command {
    /// Data file of vehicle rotations (`plate;weekday;time`)
    #[arg(short, long)]
    file: Option<PathBuf>,
}

impl Command {
    #[instrument(skip(config))]
    pub fn run(self, config: &Config) -> anyhow::Result<()> {
        let settings = &config.rotation;
        let path = self.file.unwrap_or_else(|| settings.file.clone());
        let source = RecordFile::new(path, config.delimiter);

        let stdin = io::stdin();
        let mut console = Console::new(stdin.lock(), io::stdout().lock());
        session(&source, settings.confirm, Palette::for_stdout(), &mut console)
    }
}

const MENU: &str = "\nChoose:\n1 - Show all vehicles\n2 - Browse vehicle by vehicle\nChoice: ";

fn session<R: BufRead, W: Write>(
    source: &RecordFile,
    yes: char,
    palette: Palette,
    console: &mut Console<R, W>,
) -> anyhow::Result<()> {
    // fail before the first prompt if the data file is unreadable
    source.open().context("could not load vehicle rotations")?;

    let same_filter = palette.dim(&format!(
        "\nShow again or browse again with the same filter? ({yes}/N): "
    ));
    let new_filter =
        palette.dim(&format!("\nRun a new search with another filter? ({yes}/N): "));
    loop {
        let Some(weekday) = console.ask("\nEnter the weekday (e.g. Segunda-feira): ")? else {
            break;
        };

        let mut list: CircularList<Rotation> = source
            .load(&weekday)
            .context("could not load vehicle rotations")?;
        tracing::info!("{} vehicles in rotation on '{weekday}'", list.len());

        if list.is_empty() {
            writeln!(
                console.out(),
                "{}",
                palette.warning("\nNo vehicle found for the given filter.")
            )?;
        } else {
            loop {
                match console.choose(&palette.info(MENU))? {
                    Some(Some(1)) => {
                        writeln!(console.out())?;
                        list.display_all(console.out())?;
                    }
                    Some(Some(2)) => list.navigate(console, yes)?,
                    Some(_) => {
                        writeln!(console.out(), "{}", palette.warning("Invalid option."))?;
                    }
                    None => break,
                }
                if !console.confirm(&same_filter, yes)? {
                    break;
                }
            }
        }
        list.release();

        if !console.confirm(&new_filter, yes)? {
            break;
        }
    }

    writeln!(console.out(), "\nProgram finished. Goodbye!")?;
    Ok(())
}
