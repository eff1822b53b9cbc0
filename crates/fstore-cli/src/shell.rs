//! Interactive shell
//!
//! Reads one command per line and renders the current page after each one.
//! The loop ends on `quit`, which dispatches `GlobalAction::Quit`, or at the
//! end of input.

use crate::actions::GlobalAction;
use crate::commands::read_upload;
use crate::dispatcher::Dispatch;
use crate::output::{files_table, page_bar};
use crate::service::FileStorageService;
use anyhow::Result;
use std::path::PathBuf;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines};

const HELP: &str = "\
Commands:
  next          Show the next page
  prev          Show the previous page
  page N        Jump to page N
  upload PATH   Upload a file
  delete ID     Delete a file on this page
  refresh       Reload count and first page
  help          Show this message
  quit          Leave the shell";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Next,
    Previous,
    Page(u64),
    Upload(PathBuf),
    Delete(u64),
    Refresh,
    Help,
    Quit,
}

impl ShellCommand {
    /// Parse one input line; `Ok(None)` for blank lines
    pub fn parse(line: &str) -> std::result::Result<Option<Self>, String> {
        let line = line.trim();
        let (word, argument) = match line.split_once(char::is_whitespace) {
            Some((word, argument)) => (word, argument.trim()),
            None => (line, ""),
        };

        let command = match (word, argument) {
            ("", _) => return Ok(None),
            ("next" | "n", "") => Self::Next,
            ("prev" | "p", "") => Self::Previous,
            ("page", page) => match page.parse::<u64>() {
                Ok(page) if page > 0 => Self::Page(page),
                _ => return Err(format!("invalid page '{}'", page)),
            },
            ("upload", "") => return Err("upload needs a file path".to_string()),
            ("upload", path) => Self::Upload(PathBuf::from(path)),
            ("delete", id) => match id.parse::<u64>() {
                Ok(id) => Self::Delete(id),
                Err(_) => return Err(format!("invalid file id '{}'", id)),
            },
            ("refresh" | "r", "") => Self::Refresh,
            ("help" | "?", "") => Self::Help,
            ("quit" | "q" | "exit", "") => Self::Quit,
            _ => return Err(format!("unknown command '{}', try 'help'", line)),
        };
        Ok(Some(command))
    }
}

/// Run the shell on stdin
pub async fn run(service: &FileStorageService) -> Result<()> {
    let lines = BufReader::new(tokio::io::stdin()).lines();
    run_with(service, lines).await
}

pub async fn run_with<R>(service: &FileStorageService, mut lines: Lines<R>) -> Result<()>
where
    R: AsyncBufRead + Unpin,
{
    service.initialize().await;
    render(service);

    while service.state().running {
        let Some(line) = lines.next_line().await? else {
            break;
        };

        match ShellCommand::parse(&line) {
            Ok(Some(command)) => execute(service, command, &mut lines).await?,
            Ok(None) => {}
            Err(message) => println!("{}", message),
        }
    }

    log::info!("Leaving shell");
    Ok(())
}

async fn execute<R>(
    service: &FileStorageService,
    command: ShellCommand,
    lines: &mut Lines<R>,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
{
    match command {
        ShellCommand::Next => {
            if !service.next_page().await {
                println!("Already on the last page");
                return Ok(());
            }
        }
        ShellCommand::Previous => {
            if !service.previous_page().await {
                println!("Already on the first page");
                return Ok(());
            }
        }
        ShellCommand::Page(page) => {
            if !service.fetch_page(page).await {
                println!("No such page: {}", page);
                return Ok(());
            }
        }
        ShellCommand::Upload(path) => match read_upload(&path).await {
            Ok(upload) => {
                service.upload(upload).await;
            }
            Err(e) => {
                println!("{:#}", e);
                return Ok(());
            }
        },
        ShellCommand::Delete(id) => {
            if !service.request_delete(id) {
                println!("File {} is not on this page", id);
                return Ok(());
            }
            if !confirm(service, lines).await? {
                service.cancel_delete();
                return Ok(());
            }
            service.confirm_delete().await;
        }
        ShellCommand::Refresh => service.initialize().await,
        ShellCommand::Help => {
            println!("{}", HELP);
            return Ok(());
        }
        ShellCommand::Quit => {
            service.store().dispatch(GlobalAction::Quit.into());
            return Ok(());
        }
    }

    render(service);
    Ok(())
}

/// Ask for confirmation of the file targeted by the delete modal
async fn confirm<R>(service: &FileStorageService, lines: &mut Lines<R>) -> Result<bool>
where
    R: AsyncBufRead + Unpin,
{
    let modal = service.file_storage().modal_state;
    if let Some(file) = &modal.file {
        println!("Delete {} ({})? [y/N]", file.name, file.id);
    }
    let answer = lines.next_line().await?.unwrap_or_default();
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}

fn render(service: &FileStorageService) {
    let state = service.file_storage();
    if !state.is_initial_list_fetched {
        return;
    }
    println!("{}", files_table(&state.files));
    println!("{}", page_bar(&state));
}
