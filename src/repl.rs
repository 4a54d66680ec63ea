//! Interactive prompt
//!
//! A [`Session`] owns the client plus one [`Pagination`] per listing, reads
//! one command per line, and writes plain-text results. Failed commands are
//! reported and the prompt carries on; only `exit` or end of input stops it.

use std::io::{self, Write};

use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::warn;

use crate::commands::{clean_input, Command};
use crate::data::{AreaList, Client, ClientError, Fetch, HttpFetcher, Pagination};

const PROMPT: &str = "pokedex > ";

/// Errors from running a single command
#[derive(Debug, Error)]
pub enum SessionError {
    /// The catalog request failed
    #[error(transparent)]
    Client(#[from] ClientError),

    /// Writing output failed
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

/// What the prompt should do after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Prompt state for one interactive run
pub struct Session<F = HttpFetcher> {
    client: Client<F>,
    areas: Pagination,
    pokemon: Pagination,
}

impl<F: Fetch> Session<F> {
    pub fn new(client: Client<F>) -> Self {
        Self {
            client,
            areas: Pagination::new("location areas"),
            pokemon: Pagination::new("pokemon"),
        }
    }

    pub fn client(&self) -> &Client<F> {
        &self.client
    }

    /// Cursor state for the location area listing
    pub fn areas(&self) -> &Pagination {
        &self.areas
    }

    /// Cursor state for the pokemon listing
    pub fn pokemon(&self) -> &Pagination {
        &self.pokemon
    }

    /// Reads commands from `input` until `exit` or end of input
    ///
    /// Parse and command errors are written to `out` and do not end the run;
    /// only I/O failures do. Lines that are not valid UTF-8 are read lossily.
    pub async fn run<R, W>(&mut self, mut input: R, out: &mut W) -> io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        let mut buf = Vec::new();

        write!(out, "{}", PROMPT)?;
        out.flush()?;

        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf).await? == 0 {
                break;
            }
            let cleaned = clean_input(&String::from_utf8_lossy(&buf));

            match Command::parse(&cleaned) {
                Ok(None) => {}
                Ok(Some(command)) => match self.execute(command, out).await {
                    Ok(Flow::Exit) => return Ok(()),
                    Ok(Flow::Continue) => {}
                    Err(SessionError::Io(e)) => return Err(e),
                    Err(SessionError::Client(e)) => {
                        warn!(error = %e, "Command failed");
                        writeln!(out, "{}", e)?;
                    }
                },
                Err(e) => writeln!(out, "{}", e)?,
            }

            write!(out, "{}", PROMPT)?;
            out.flush()?;
        }

        writeln!(out)?;
        Ok(())
    }

    /// Runs one command, writing its output to `out`
    pub async fn execute<W: Write>(
        &mut self,
        command: Command,
        out: &mut W,
    ) -> Result<Flow, SessionError> {
        match command {
            Command::Help => {
                writeln!(out, "Welcome to the Pokedex!")?;
                writeln!(out, "Usage:")?;
                writeln!(out)?;
                for help in Command::HELP {
                    writeln!(out, " - {}: {}", help.usage, help.description)?;
                }
                writeln!(out)?;
            }
            Command::Exit => {
                writeln!(out, "Closing the Pokedex... Goodbye!")?;
                return Ok(Flow::Exit);
            }
            Command::Map => {
                let cursor = self.areas.next_cursor()?.map(str::to_string);
                let page = self.client.get_area_list(cursor.as_deref()).await?;
                self.areas.advance(&page);
                write_page(out, "Location areas:", &page)?;
            }
            Command::MapBack => {
                let cursor = self.areas.previous_cursor()?.to_string();
                let page = self.client.get_area_list(Some(&cursor)).await?;
                self.areas.advance(&page);
                write_page(out, "Location areas:", &page)?;
            }
            Command::Pokemon => {
                let cursor = self.pokemon.next_cursor()?.map(str::to_string);
                let page = self.client.get_entity_list(cursor.as_deref()).await?;
                self.pokemon.advance(&page);
                write_page(out, "Pokemon:", &page)?;
            }
            Command::PokemonBack => {
                let cursor = self.pokemon.previous_cursor()?.to_string();
                let page = self.client.get_entity_list(Some(&cursor)).await?;
                self.pokemon.advance(&page);
                write_page(out, "Pokemon:", &page)?;
            }
            Command::Explore(area) => {
                let detail = self.client.get_area_detail(&area).await?;
                writeln!(out, "Exploring {}...", area)?;
                writeln!(out, "Found Pokemon:")?;
                for name in &detail.encounters {
                    writeln!(out, " - {}", name)?;
                }
            }
            Command::Inspect(name) => {
                let detail = self.client.get_entity_detail(&name).await?;
                writeln!(out, "Name: {}", detail.name)?;
                writeln!(out, "Species: {}", detail.species)?;
                writeln!(out, "Base experience: {}", detail.base_experience)?;
                writeln!(out, "Height: {}", detail.height)?;
                writeln!(out, "Weight: {}", detail.weight)?;
                writeln!(out, "Stats:")?;
                for stat in &detail.stats {
                    writeln!(out, "  - {}: {}", stat.name, stat.value)?;
                }
                writeln!(out, "Types:")?;
                for kind in &detail.types {
                    writeln!(out, "  - {}", kind)?;
                }
            }
        }

        Ok(Flow::Continue)
    }
}

fn write_page<W: Write>(out: &mut W, heading: &str, page: &AreaList) -> io::Result<()> {
    writeln!(out, "{}", heading)?;
    for name in &page.names {
        writeln!(out, "{}", name)?;
    }
    Ok(())
}
