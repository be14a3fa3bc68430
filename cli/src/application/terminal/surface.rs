use std::{
    path::Path,
    sync::{Mutex, PoisonError},
};

use crossterm::style::Stylize;
use labelscan_core::domain::{
    ingredient::{rendering::RenderedDocument, value_objects::ImageUpload},
    workflow::ports::{
        FileSource, Notifier, OcrSink, ResultSink, StatusSink, TextSource, TriggerControl,
    },
};
use serde::Serialize;

/// What a workflow left in its result area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum ResultView {
    Document(RenderedDocument),
    Error(String),
}

/// Status line on stderr. Both workflows share one; the last write wins.
#[derive(Debug, Default)]
pub struct StderrStatus {
    last: Mutex<Option<String>>,
}

impl StderrStatus {
    pub fn last(&self) -> Option<String> {
        self.last
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl StatusSink for StderrStatus {
    fn set_status(&self, text: &str) {
        eprintln!("{} {}", "»".dim(), text);
        *self.last.lock().unwrap_or_else(PoisonError::into_inner) = Some(text.to_string());
    }
}

/// Keeps the latest result so it can be printed once the workflow is done.
#[derive(Debug, Default)]
pub struct BufferedResult {
    view: Mutex<Option<ResultView>>,
}

impl BufferedResult {
    pub fn take(&self) -> Option<ResultView> {
        self.view.lock().unwrap_or_else(PoisonError::into_inner).take()
    }

    fn set(&self, view: Option<ResultView>) {
        *self.view.lock().unwrap_or_else(PoisonError::into_inner) = view;
    }
}

impl ResultSink for BufferedResult {
    fn clear(&self) {
        self.set(None);
    }

    fn show_document(&self, document: &RenderedDocument) {
        self.set(Some(ResultView::Document(document.clone())));
    }

    fn show_error(&self, message: &str) {
        self.set(Some(ResultView::Error(message.to_string())));
    }
}

#[derive(Debug, Default)]
pub struct BufferedOcr {
    text: Mutex<Option<String>>,
}

impl BufferedOcr {
    pub fn take(&self) -> Option<String> {
        self.text.lock().unwrap_or_else(PoisonError::into_inner).take()
    }
}

impl OcrSink for BufferedOcr {
    fn clear(&self) {
        *self.text.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }

    fn show_text(&self, text: &str) {
        *self.text.lock().unwrap_or_else(PoisonError::into_inner) = Some(text.to_string());
    }
}

/// A one-shot command has no button to grey out; toggles are only traced.
#[derive(Debug, Default)]
pub struct CliTrigger;

impl TriggerControl for CliTrigger {
    fn set_enabled(&self, enabled: bool) {
        tracing::trace!(enabled, "trigger toggled");
    }
}

#[derive(Debug, Default)]
pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn alert(&self, message: &str) {
        tracing::warn!("input rejected: {}", message);
        eprintln!("{} {}", "!".yellow().bold(), message);
    }
}

/// Text given on the command line or read from a file.
#[derive(Debug, Clone)]
pub struct FixedText(pub String);

impl TextSource for FixedText {
    fn current_text(&self) -> String {
        self.0.clone()
    }
}

#[derive(Debug, Clone, Default)]
pub struct SelectedImage(pub Option<ImageUpload>);

impl FileSource for SelectedImage {
    fn selected_file(&self) -> Option<ImageUpload> {
        self.0.clone()
    }
}

impl SelectedImage {
    /// Reads `path` into an upload, guessing the MIME type from the extension.
    pub fn load(path: &Path) -> Result<Self, std::io::Error> {
        let bytes = std::fs::read(path)?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());

        Ok(Self(Some(ImageUpload::new(
            file_name,
            mime_for_path(path),
            bytes,
        ))))
    }
}

pub fn mime_for_path(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase());

    match extension.as_deref() {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        Some("bmp") => "image/bmp",
        Some("tif" | "tiff") => "image/tiff",
        _ => "application/octet-stream",
    }
}
