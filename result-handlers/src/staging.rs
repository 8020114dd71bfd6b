//! PDF staging and delivery.
//!
//! A fetched PDF is written to a uniquely named file in the work directory, uploaded, and removed again.
//! [`StagedPdf`] owns the file: dropping it deletes the file and removes the work directory if it is
//! now empty, so cleanup happens on every exit path including a failed upload.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use bot_core::{Bot, Chat, OutgoingDocument, Result};
use results_client::FetchOutcome;
use tempfile::NamedTempFile;
use tracing::{debug, error, info, warn};

use crate::replies::{pdf_failure_text, DocumentKind, UPLOAD_FAILED_TEXT};

fn sanitize_roll(roll_number: &str) -> String {
    let cleaned: String = roll_number
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .collect();
    if cleaned.is_empty() {
        "unknown".to_string()
    } else {
        cleaned
    }
}

/// Name the recipient sees, e.g. `marksheet_SV2121XXX.pdf`.
pub fn upload_file_name(kind: DocumentKind, roll_number: &str) -> String {
    format!("{}_{}.pdf", kind.file_prefix(), sanitize_roll(roll_number))
}

/// A request-scoped PDF on disk.
#[derive(Debug)]
pub struct StagedPdf {
    file: Option<NamedTempFile>,
    path: PathBuf,
    dir: PathBuf,
    upload_name: String,
}

impl StagedPdf {
    /// Writes `bytes` to a new file in `dir`, creating the directory on demand.
    pub fn write(dir: &Path, kind: DocumentKind, roll_number: &str, bytes: &[u8]) -> io::Result<Self> {
        let prefix = format!("{}_{}_", kind.file_prefix(), sanitize_roll(roll_number));
        let mut builder = tempfile::Builder::new();
        builder.prefix(&prefix).suffix(".pdf");

        fs::create_dir_all(dir)?;
        // Another request may remove the directory between the two calls.
        let mut file = match builder.tempfile_in(dir) {
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                fs::create_dir_all(dir)?;
                builder.tempfile_in(dir)?
            }
            other => other?,
        };
        file.write_all(bytes)?;
        file.flush()?;

        let path = file.path().to_path_buf();
        debug!(path = %path.display(), bytes = bytes.len(), "Staged PDF");
        Ok(Self {
            file: Some(file),
            path,
            dir: dir.to_path_buf(),
            upload_name: upload_file_name(kind, roll_number),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn upload_name(&self) -> &str {
        &self.upload_name
    }

    pub fn document(&self, caption: Option<String>) -> OutgoingDocument {
        OutgoingDocument {
            path: self.path.clone(),
            file_name: self.upload_name.clone(),
            caption,
        }
    }
}

impl Drop for StagedPdf {
    fn drop(&mut self) {
        if let Some(file) = self.file.take() {
            if let Err(e) = file.close() {
                warn!(path = %self.path.display(), error = %e, "Failed to delete staged PDF");
            }
        }
        // Fails while other requests still have files here; that is expected.
        if fs::remove_dir(&self.dir).is_ok() {
            debug!(dir = %self.dir.display(), "Removed empty PDF work directory");
        }
    }
}

/// Sends the PDF from `outcome` as a document, or the matching failure message.
/// A failed upload is reported to the user; the staged file is removed either way.
pub async fn deliver_pdf(
    bot: &dyn Bot,
    chat: &Chat,
    outcome: FetchOutcome<Vec<u8>>,
    kind: DocumentKind,
    roll_number: &str,
    work_dir: &Path,
) -> Result<bool> {
    let bytes = match outcome {
        FetchOutcome::Success(bytes) => bytes,
        failure => {
            let text = pdf_failure_text(kind, &failure).unwrap_or_default();
            info!(chat_id = chat.id, kind = kind.label(), outcome = ?failure, "PDF not available");
            bot.send_message(chat, &text).await?;
            return Ok(false);
        }
    };

    let staged = StagedPdf::write(work_dir, kind, roll_number, &bytes)?;
    let caption = format!("{} for {}", kind.label(), roll_number);
    let upload = bot.send_document(chat, &staged.document(Some(caption))).await;
    drop(staged);

    match upload {
        Ok(()) => {
            info!(chat_id = chat.id, kind = kind.label(), bytes = bytes.len(), "PDF sent");
            Ok(true)
        }
        Err(e) => {
            error!(chat_id = chat.id, kind = kind.label(), error = %e, "PDF upload failed");
            bot.send_message(chat, UPLOAD_FAILED_TEXT).await?;
            Ok(false)
        }
    }
}
