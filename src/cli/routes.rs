use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

use anyhow::Context;
use linked_records::{Config, Console, DoublyLinkedList, RecordFile, Route};
use tracing::instrument;

use crate::cli::terminal::Palette;

#[derive(Debug, clap::Parser)]
pub struct Command {
    /// Data file of routes (`id;line;type;region`)
    #[arg(short, long)]
    file: Option<PathBuf>,
}

impl Command {
    #[instrument(skip(config))]
    pub fn run(self, config: &Config) -> anyhow::Result<()> {
        let settings = &config.routes;
        let path = self.file.unwrap_or_else(|| settings.file.clone());
        let source = RecordFile::new(path, config.delimiter);

        let stdin = io::stdin();
        let mut console = Console::new(stdin.lock(), io::stdout().lock());
        session(&source, settings.confirm, Palette::for_stdout(), &mut console)
    }
}

/// Options of the route menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuOption {
    Forward,
    Reverse,
    NewSearch,
    Quit,
}

impl MenuOption {
    const fn from_number(number: u32) -> Option<Self> {
        match number {
            1 => Some(Self::Forward),
            2 => Some(Self::Reverse),
            3 => Some(Self::NewSearch),
            4 => Some(Self::Quit),
            _ => None,
        }
    }
}

const MENU: &str = "\n=== ROUTE MENU ===\n\
                    1 - Show routes in forward order\n\
                    2 - Show routes in reverse order\n\
                    3 - New search\n\
                    4 - Quit";

/// Searches routes by transport type or region and offers a menu over the
/// matches until the list is released.
///
/// A new search (option 3) releases the list and falls through to the
/// "another search?" confirmation before the filter is asked for again.
fn session<R: BufRead, W: Write>(
    source: &RecordFile,
    yes: char,
    palette: Palette,
    console: &mut Console<R, W>,
) -> anyhow::Result<()> {
    // fail before the first prompt if the data file is unreadable
    source.open().context("could not load routes")?;

    let again = palette.dim(&format!("\nRun another search? ({yes}/N): "));
    loop {
        let Some(filter) = console.ask("\nEnter a transport type or region to search for: ")? else {
            break;
        };

        let mut list: DoublyLinkedList<Route> = source
            .load(&filter)
            .context("could not load routes")?;
        tracing::info!("{} routes match '{filter}'", list.len());

        let mut quit = false;
        if list.is_empty() {
            writeln!(
                console.out(),
                "{}",
                palette.warning("\nNo routes found for the given filter.")
            )?;
        }
        while !list.is_empty() {
            writeln!(console.out(), "{}", palette.info(MENU))?;
            let choice = console.choose("Choose an option: ")?;
            let Some(choice) = choice else {
                list.release();
                quit = true;
                break;
            };

            match choice.and_then(MenuOption::from_number) {
                Some(MenuOption::Forward) => {
                    writeln!(console.out())?;
                    list.display_forward(console.out())?;
                }
                Some(MenuOption::Reverse) => {
                    writeln!(console.out())?;
                    list.display_reverse(console.out())?;
                }
                Some(MenuOption::NewSearch) => list.release(),
                Some(MenuOption::Quit) => {
                    list.release();
                    quit = true;
                }
                None => writeln!(console.out(), "{}", palette.warning("Invalid option."))?,
            }
        }

        if quit || !console.confirm(&again, yes)? {
            break;
        }
    }

    writeln!(console.out(), "\nProgram finished.")?;
    Ok(())
}
