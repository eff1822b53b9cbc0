//! Command line parsing

use std::collections::HashMap;
use std::path::PathBuf;

pub const USAGE: &str = "\
Usage: fstore <command> [options]

Commands:
  list    [--page N] [--raw]      Show one page of uploaded files
  count                           Show the number of files and pages
  upload  --file PATH [--raw]     Upload a file to the server
  delete  --id ID [--raw]         Delete an uploaded file
  get     --id ID [--outdir DIR]  Download a file's content
  shell                           Browse files interactively
  help                            Show this message

Options:
  --raw   Print JSON instead of a table

Environment:
  API_SERVER_URL   Base URL of the file storage API";

/// A parsed command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List { page: u64, raw: bool },
    Count,
    Upload { file: PathBuf, raw: bool },
    Delete { id: u64, raw: bool },
    Get { id: u64, outdir: Option<PathBuf> },
    Shell,
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UsageError {
    #[error("unknown command '{0}'")]
    UnknownCommand(String),
    #[error("unknown option '--{0}'")]
    UnknownOption(String),
    #[error("unexpected argument '{0}'")]
    UnexpectedArgument(String),
    #[error("option '--{0}' requires a value")]
    MissingValue(String),
    #[error("missing required option '--{0}'")]
    MissingOption(&'static str),
    #[error("invalid value '{value}' for '--{option}': expected a positive number")]
    InvalidNumber { option: &'static str, value: String },
}

/// Options given after the command name
#[derive(Debug, Default)]
struct Options {
    values: HashMap<String, String>,
    raw: bool,
}

impl Options {
    /// Accepts `--name value`, `--name=value` and the `--raw` flag.
    fn parse(args: &[String], allowed: &[&str]) -> Result<Self, UsageError> {
        let mut options = Self::default();
        let mut iter = args.iter();

        while let Some(arg) = iter.next() {
            let Some(option) = arg.strip_prefix("--") else {
                return Err(UsageError::UnexpectedArgument(arg.clone()));
            };
            let (name, inline_value) = match option.split_once('=') {
                Some((name, value)) => (name, Some(value.to_string())),
                None => (option, None),
            };

            if !allowed.contains(&name) {
                return Err(UsageError::UnknownOption(name.to_string()));
            }

            if name == "raw" {
                options.raw = true;
                continue;
            }

            let value = match inline_value {
                Some(value) => value,
                None => iter
                    .next()
                    .filter(|value| !value.starts_with("--"))
                    .cloned()
                    .ok_or_else(|| UsageError::MissingValue(name.to_string()))?,
            };
            options.values.insert(name.to_string(), value);
        }

        Ok(options)
    }

    fn number(&self, option: &'static str) -> Result<Option<u64>, UsageError> {
        self.values
            .get(option)
            .map(|value| match value.parse::<u64>() {
                Ok(number) if number > 0 => Ok(number),
                _ => Err(UsageError::InvalidNumber {
                    option,
                    value: value.clone(),
                }),
            })
            .transpose()
    }

    fn required_number(&self, option: &'static str) -> Result<u64, UsageError> {
        self.number(option)?
            .ok_or(UsageError::MissingOption(option))
    }

    fn path(&self, option: &str) -> Option<PathBuf> {
        self.values.get(option).map(PathBuf::from)
    }
}

/// Parse the arguments following the program name
pub fn parse_args<I>(args: I) -> Result<Command, UsageError>
where
    I: IntoIterator<Item = String>,
{
    let args: Vec<String> = args.into_iter().collect();
    let Some((command, rest)) = args.split_first() else {
        return Ok(Command::Help);
    };

    match command.as_str() {
        "list" => {
            let options = Options::parse(rest, &["page", "raw"])?;
            Ok(Command::List {
                page: options.number("page")?.unwrap_or(1),
                raw: options.raw,
            })
        }
        "count" => {
            Options::parse(rest, &[])?;
            Ok(Command::Count)
        }
        "upload" => {
            let options = Options::parse(rest, &["file", "raw"])?;
            Ok(Command::Upload {
                file: options
                    .path("file")
                    .ok_or(UsageError::MissingOption("file"))?,
                raw: options.raw,
            })
        }
        "delete" => {
            let options = Options::parse(rest, &["id", "raw"])?;
            Ok(Command::Delete {
                id: options.required_number("id")?,
                raw: options.raw,
            })
        }
        "get" => {
            let options = Options::parse(rest, &["id", "outdir"])?;
            Ok(Command::Get {
                id: options.required_number("id")?,
                outdir: options.path("outdir"),
            })
        }
        "shell" => {
            Options::parse(rest, &[])?;
            Ok(Command::Shell)
        }
        "help" | "--help" | "-h" => Ok(Command::Help),
        other => Err(UsageError::UnknownCommand(other.to_string())),
    }
}
