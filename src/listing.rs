//! Disk-backed listing for the file browser widget.
//!
//! Walks a public folder once per request and hands back a tree the browser
//! expands lazily. Any failure fails the whole request; partial trees are
//! never returned.

use futures::future::BoxFuture;
use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;
use uuid::Uuid;

const FALLBACK_MIME: &str = "application/octet-stream";
pub const LISTING_ERROR_MESSAGE: &str = "Error reading directory";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    File,
    Folder,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileSystemItem {
    /// Fresh on every listing; not stable across requests.
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    /// Web path, `/` plus the path below the public root.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<FileSystemItem>>,
}

/// How the browser previews a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewKind {
    Image,
    Video,
    Audio,
    Other,
}

impl FileSystemItem {
    fn folder(name: String, children: Vec<FileSystemItem>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            item_type: ItemType::Folder,
            mime_type: None,
            path: None,
            size: None,
            children: Some(children),
        }
    }

    fn file(name: String, web_path: String, size: u64) -> Self {
        let mime_type = mime_guess::from_path(&name)
            .first_raw()
            .unwrap_or(FALLBACK_MIME)
            .to_string();
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            item_type: ItemType::File,
            mime_type: Some(mime_type),
            path: Some(web_path),
            size: Some(size),
            children: None,
        }
    }

    pub fn is_folder(&self) -> bool {
        self.item_type == ItemType::Folder
    }

    /// How the browser will show this item. Folders are never previewed.
    pub fn preview_kind(&self) -> PreviewKind {
        match self.mime_type.as_deref() {
            Some(m) if m.starts_with("image/") => PreviewKind::Image,
            Some(m) if m.starts_with("video/") => PreviewKind::Video,
            Some(m) if m.starts_with("audio/") => PreviewKind::Audio,
            _ => PreviewKind::Other,
        }
    }
}

impl PreviewKind {
    pub fn label(self) -> &'static str {
        match self {
            PreviewKind::Image => "image",
            PreviewKind::Video => "video",
            PreviewKind::Audio => "audio",
            PreviewKind::Other => "file",
        }
    }
}

#[derive(Debug, Error)]
pub enum ListingError {
    #[error("failed to read directory {path}: {source}")]
    ReadDir { path: PathBuf, source: io::Error },
    #[error("failed to stat {path}: {source}")]
    Stat { path: PathBuf, source: io::Error },
}

/// Human-readable size as shown next to files, e.g. `1.50 KB`. Zero and
/// unknown sizes render as nothing.
pub fn format_file_size(bytes: Option<u64>) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
    let bytes = match bytes {
        Some(b) if b > 0 => b,
        _ => return String::new(),
    };
    let mut unit = 0;
    let mut value = bytes as f64;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.2} {}", value, UNITS[unit])
}

fn web_path(root: &Path, full_path: &Path) -> String {
    let rel = full_path.strip_prefix(root).unwrap_or(full_path);
    let parts: Vec<String> = rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    format!("/{}", parts.join("/"))
}

/// Recursively list `root`. Children come back sorted by name; each folder is
/// fully walked before its next sibling is looked at.
pub async fn list_directory(root: &Path) -> Result<Vec<FileSystemItem>, ListingError> {
    list_dir_recursive(root, root).await
}

fn list_dir_recursive<'a>(
    root: &'a Path,
    dir: &'a Path,
) -> BoxFuture<'a, Result<Vec<FileSystemItem>, ListingError>> {
    Box::pin(async move {
        let read_err = |source: io::Error| ListingError::ReadDir { path: dir.to_path_buf(), source };
        let mut reader = fs::read_dir(dir).await.map_err(read_err)?;
        let mut entries = Vec::new();
        while let Some(entry) = reader.next_entry().await.map_err(read_err)? {
            entries.push((entry.file_name(), entry.path()));
        }
        entries.sort();

        let mut contents = Vec::with_capacity(entries.len());
        for (file_name, full_path) in entries {
            // lossy only for display; the disk is always addressed by the real path
            let name = file_name.to_string_lossy().into_owned();
            let meta = fs::metadata(&full_path)
                .await
                .map_err(|source| ListingError::Stat { path: full_path.clone(), source })?;

            if meta.is_dir() {
                let children = list_dir_recursive(root, &full_path).await?;
                contents.push(FileSystemItem::folder(name, children));
            } else {
                contents.push(FileSystemItem::file(name, web_path(root, &full_path), meta.len()));
            }
        }
        Ok(contents)
    })
}

/// Indented text view of a listing, as the file browser lays it out. Folders
/// end in `/`; files show their preview kind and, when known, their size.
pub fn render_tree(items: &[FileSystemItem]) -> String {
    let mut out = String::new();
    render_level(items, 0, &mut out);
    out
}

fn render_level(items: &[FileSystemItem], depth: usize, out: &mut String) {
    let indent = "  ".repeat(depth);
    for item in items {
        if item.is_folder() {
            out.push_str(&format!("{}{}/\n", indent, item.name));
            render_level(item.children.as_deref().unwrap_or_default(), depth + 1, out);
            continue;
        }
        let size = format_file_size(item.size);
        let kind = item.preview_kind().label();
        if size.is_empty() {
            out.push_str(&format!("{}{} [{}]\n", indent, item.name, kind));
        } else {
            out.push_str(&format!("{}{} [{}] {}\n", indent, item.name, kind, size));
        }
    }
}

/// What the listing endpoint sends back: a status code and a JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingResponse {
    pub status: u16,
    pub body: serde_json::Value,
}

impl ListingResponse {
    pub fn is_success(&self) -> bool {
        self.status == 200
    }
}

/// Serve one listing request for `public_dir`.
pub async fn listing_response(public_dir: &Path) -> ListingResponse {
    let listed = list_directory(public_dir)
        .await
        .map_err(|e| e.to_string())
        .and_then(|items| serde_json::to_value(items).map_err(|e| e.to_string()));

    match listed {
        Ok(body) => ListingResponse { status: 200, body },
        Err(e) => {
            log::error!("Error reading directory: {}", e);
            ListingResponse {
                status: 500,
                body: serde_json::json!({ "message": LISTING_ERROR_MESSAGE }),
            }
        }
    }
}
