//! Command execution
//!
//! Every command loads the file list first so the count and current page are
//! known, then runs its operation through the [`FileStorageService`]. Failed
//! requests have already been shown by the notification middleware, so they
//! only end the command early here.

use crate::cli::{Command, USAGE};
use crate::output::{file_output, files_json, files_table, page_bar};
use crate::service::FileStorageService;
use crate::shell;
use anyhow::{bail, Context, Result};
use fstore_client::Upload;
use fstore_config::AppConfig;
use std::path::{Path, PathBuf};

pub async fn run(command: Command, service: &FileStorageService, config: &AppConfig) -> Result<()> {
    log::debug!("Running command: {:?}", command);
    match command {
        Command::List { page, raw } => list(service, page, raw).await,
        Command::Count => count(service).await,
        Command::Upload { file, raw } => upload(service, &file, raw).await,
        Command::Delete { id, raw } => delete(service, id, raw).await,
        Command::Get { id, outdir } => {
            let outdir = resolve_outdir(outdir, config)?;
            get(service, id, &outdir).await
        }
        Command::Shell => shell::run(service).await,
        Command::Help => {
            println!("{}", USAGE);
            Ok(())
        }
    }
}

/// Load count and first page; false when that failed
async fn load(service: &FileStorageService) -> bool {
    service.initialize().await;
    service.file_storage().is_initial_list_fetched
}

async fn list(service: &FileStorageService, page: u64, raw: bool) -> Result<()> {
    if !load(service).await {
        return Ok(());
    }
    if page != 1 && !service.fetch_page(page).await {
        bail!(
            "No such page: {} (last page is {})",
            page,
            service.file_storage().last_offset.max(1)
        );
    }

    let state = service.file_storage();
    if raw {
        println!("{}", files_json(&state.files)?);
    } else {
        println!("{}", files_table(&state.files));
        println!("{}", page_bar(&state));
    }
    Ok(())
}

async fn count(service: &FileStorageService) -> Result<()> {
    if !load(service).await {
        return Ok(());
    }
    let state = service.file_storage();
    println!("{} files, {} pages", state.all_files_count, state.last_offset);
    Ok(())
}

/// Read a local file into an upload named after its final path component
pub async fn read_upload(path: &Path) -> Result<Upload> {
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .with_context(|| format!("Not a file path: {:?}", path))?
        .to_string();
    let content = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read file: {:?}", path))?;
    Ok(Upload::new(file_name, content))
}

async fn upload(service: &FileStorageService, path: &Path, raw: bool) -> Result<()> {
    let upload = read_upload(path).await?;
    if !load(service).await {
        return Ok(());
    }

    if let Some(created) = service.upload(upload).await {
        println!("{}", file_output(&created, raw)?);
    }
    Ok(())
}

async fn delete(service: &FileStorageService, id: u64, raw: bool) -> Result<()> {
    if !load(service).await {
        return Ok(());
    }

    let target = service.file_storage().file_by_id(id).cloned();
    let deleted = if service.request_delete(id) {
        service.confirm_delete().await.unwrap_or(false)
    } else {
        // Not on the first page; delete without a confirmation target
        service.delete(id).await
    };

    if !deleted {
        return Ok(());
    }
    match target {
        Some(file) => println!("{}", file_output(&file, raw)?),
        None if raw => println!("{}", serde_json::json!({ "id": id })),
        None => println!("Deleted file {}", id),
    }
    Ok(())
}

/// `--outdir`, then the configured download directory, then the working directory
pub fn resolve_outdir(outdir: Option<PathBuf>, config: &AppConfig) -> Result<PathBuf> {
    match outdir.or_else(|| config.download_dir.as_ref().map(PathBuf::from)) {
        Some(dir) => Ok(dir),
        None => fstore_config::download_dir(),
    }
}

async fn get(service: &FileStorageService, id: u64, outdir: &Path) -> Result<()> {
    let Some(file) = service.download(id).await else {
        return Ok(());
    };

    tokio::fs::create_dir_all(outdir)
        .await
        .with_context(|| format!("Failed to create directory: {:?}", outdir))?;
    let target = outdir.join(&file.file_name);
    tokio::fs::write(&target, &file.content)
        .await
        .with_context(|| format!("Failed to write file: {:?}", target))?;

    log::info!("Saved file {} to {:?}", id, target);
    println!("{}", target.display());
    Ok(())
}
