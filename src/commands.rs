//! Prompt commands
//!
//! Each command the prompt understands is a variant of [`Command`], carrying
//! the argument it needs. Parsing is the only place a name is looked up; from
//! there on the compiler checks that every command is handled.

use thiserror::Error;

/// Errors for lines that do not form a valid command
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    /// The first word is not a known command
    #[error("Invalid command '{0}', type 'help' to see available commands")]
    Unknown(String),

    /// A command that needs an argument was given none
    #[error("'{command}' needs a {argument}, usage: {usage}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
        usage: &'static str,
    },

    /// A command was given more words than it accepts
    #[error("too many arguments for '{command}', usage: {usage}")]
    UnexpectedArgument {
        command: &'static str,
        usage: &'static str,
    },
}

/// A single command entered at the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show the list of commands
    Help,
    /// Leave the prompt
    Exit,
    /// Show the next page of location areas
    Map,
    /// Show the previous page of location areas
    MapBack,
    /// Show the next page of pokemon
    Pokemon,
    /// Show the previous page of pokemon
    PokemonBack,
    /// List the pokemon found in an area
    Explore(String),
    /// Show a pokemon's stats
    Inspect(String),
}

/// Help text for one command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandHelp {
    pub usage: &'static str,
    pub description: &'static str,
}

impl Command {
    /// Every command, in the order `help` lists them
    pub const HELP: [CommandHelp; 8] = [
        CommandHelp {
            usage: "help",
            description: "Displays a help message",
        },
        CommandHelp {
            usage: "exit",
            description: "Exit the Pokedex",
        },
        CommandHelp {
            usage: "map",
            description: "Displays the names of the next 20 location areas",
        },
        CommandHelp {
            usage: "mapb",
            description: "Displays the names of the previous 20 location areas",
        },
        CommandHelp {
            usage: "pokemon",
            description: "Displays the names of the next 20 pokemon",
        },
        CommandHelp {
            usage: "pokemonb",
            description: "Displays the names of the previous 20 pokemon",
        },
        CommandHelp {
            usage: "explore <area>",
            description: "Lists the pokemon found in a location area",
        },
        CommandHelp {
            usage: "inspect <pokemon>",
            description: "Shows a pokemon's height, weight, stats and types",
        },
    ];

    /// Parses an already cleaned input line
    ///
    /// # Returns
    /// * `Ok(None)` for a blank line
    /// * `Ok(Some(Command))` for a recognised command with the right arguments
    /// * `Err(CommandError)` otherwise
    pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Ok(None);
        };
        let argument = words.next();
        let extra = words.next().is_some();

        let command = match name {
            "help" => Command::Help,
            "exit" => Command::Exit,
            "map" => Command::Map,
            "mapb" => Command::MapBack,
            "pokemon" => Command::Pokemon,
            "pokemonb" => Command::PokemonBack,
            "explore" => {
                let area = require("explore", "location area name", "explore <area>", argument)?;
                Command::Explore(area)
            }
            "inspect" => {
                let pokemon = require("inspect", "pokemon name", "inspect <pokemon>", argument)?;
                Command::Inspect(pokemon)
            }
            other => return Err(CommandError::Unknown(other.to_string())),
        };

        let takes_argument = matches!(command, Command::Explore(_) | Command::Inspect(_));
        if extra || (argument.is_some() && !takes_argument) {
            return Err(CommandError::UnexpectedArgument {
                command: command.name(),
                usage: command.usage(),
            });
        }

        Ok(Some(command))
    }

    /// The word that invokes this command
    pub fn name(&self) -> &'static str {
        match self {
            Command::Help => "help",
            Command::Exit => "exit",
            Command::Map => "map",
            Command::MapBack => "mapb",
            Command::Pokemon => "pokemon",
            Command::PokemonBack => "pokemonb",
            Command::Explore(_) => "explore",
            Command::Inspect(_) => "inspect",
        }
    }

    fn usage(&self) -> &'static str {
        match self {
            Command::Explore(_) => "explore <area>",
            Command::Inspect(_) => "inspect <pokemon>",
            other => other.name(),
        }
    }
}

fn require(
    command: &'static str,
    argument: &'static str,
    usage: &'static str,
    value: Option<&str>,
) -> Result<String, CommandError> {
    value
        .map(str::to_string)
        .ok_or(CommandError::MissingArgument {
            command,
            argument,
            usage,
        })
}

/// Trims surrounding whitespace and lower-cases a raw input line
pub fn clean_input(text: &str) -> String {
    text.trim().to_lowercase()
}
