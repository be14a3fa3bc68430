//! Presentation surface the workflows drive.
//!
//! All methods take `&self`; adapters own whatever interior mutability they
//! need. None of them may block for long, they are called between the
//! workflow's suspension points.

use crate::domain::ingredient::{rendering::RenderedDocument, value_objects::ImageUpload};

/// Shared status line.
#[cfg_attr(test, mockall::automock)]
pub trait StatusSink: Send + Sync {
    fn set_status(&self, text: &str);
}

/// Primary result area.
#[cfg_attr(test, mockall::automock)]
pub trait ResultSink: Send + Sync {
    fn clear(&self);
    fn show_document(&self, document: &RenderedDocument);
    fn show_error(&self, message: &str);
}

/// Where the text read from an uploaded image is shown.
#[cfg_attr(test, mockall::automock)]
pub trait OcrSink: Send + Sync {
    fn clear(&self);
    fn show_text(&self, text: &str);
}

/// The button (or equivalent) that starts a workflow.
#[cfg_attr(test, mockall::automock)]
pub trait TriggerControl: Send + Sync {
    fn set_enabled(&self, enabled: bool);
}

/// Immediate, blocking user notice for rejected input.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier: Send + Sync {
    fn alert(&self, message: &str);
}

#[cfg_attr(test, mockall::automock)]
pub trait TextSource: Send + Sync {
    fn current_text(&self) -> String;
}

#[cfg_attr(test, mockall::automock)]
pub trait FileSource: Send + Sync {
    fn selected_file(&self) -> Option<ImageUpload>;
}
