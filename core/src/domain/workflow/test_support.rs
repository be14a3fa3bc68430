use std::sync::{Arc, Mutex};

use tokio::sync::Notify;

use crate::domain::{
    common::entities::app_errors::CoreError,
    ingredient::{
        entities::{AnalysisResult, ImageAnalysisResult},
        ports::AnalysisClient,
        rendering::RenderedDocument,
        value_objects::ImageUpload,
    },
    workflow::ports::{
        FileSource, Notifier, OcrSink, ResultSink, StatusSink, TextSource, TriggerControl,
    },
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShownResult {
    Document(RenderedDocument),
    Error(String),
}

#[derive(Debug)]
struct RecorderState {
    enabled: bool,
    trigger_history: Vec<bool>,
    statuses: Vec<String>,
    results: Vec<ShownResult>,
    clears: usize,
    ocr_text: Option<String>,
    ocr_clears: usize,
    alerts: Vec<String>,
}

/// One object standing in for every sink of a surface, recording what the
/// workflow did to it.
#[derive(Debug)]
pub struct Recorder {
    state: Mutex<RecorderState>,
}

impl Default for Recorder {
    fn default() -> Self {
        Self {
            state: Mutex::new(RecorderState {
                enabled: true,
                trigger_history: Vec::new(),
                statuses: Vec::new(),
                results: Vec::new(),
                clears: 0,
                ocr_text: None,
                ocr_clears: 0,
                alerts: Vec::new(),
            }),
        }
    }
}

impl Recorder {
    fn with<R>(&self, f: impl FnOnce(&mut RecorderState) -> R) -> R {
        f(&mut self.state.lock().unwrap())
    }

    pub fn is_enabled(&self) -> bool {
        self.with(|s| s.enabled)
    }

    pub fn trigger_history(&self) -> Vec<bool> {
        self.with(|s| s.trigger_history.clone())
    }

    pub fn statuses(&self) -> Vec<String> {
        self.with(|s| s.statuses.clone())
    }

    pub fn last_status(&self) -> Option<String> {
        self.with(|s| s.statuses.last().cloned())
    }

    pub fn last_result(&self) -> Option<ShownResult> {
        self.with(|s| s.results.last().cloned())
    }

    pub fn clear_count(&self) -> usize {
        self.with(|s| s.clears)
    }

    pub fn ocr_text(&self) -> Option<String> {
        self.with(|s| s.ocr_text.clone())
    }

    pub fn ocr_clear_count(&self) -> usize {
        self.with(|s| s.ocr_clears)
    }

    pub fn alerts(&self) -> Vec<String> {
        self.with(|s| s.alerts.clone())
    }
}

impl TriggerControl for Recorder {
    fn set_enabled(&self, enabled: bool) {
        self.with(|s| {
            s.enabled = enabled;
            s.trigger_history.push(enabled);
        });
    }

}

impl StatusSink for Recorder {
    fn set_status(&self, text: &str) {
        self.with(|s| s.statuses.push(text.to_string()));
    }
}

impl ResultSink for Recorder {
    fn clear(&self) {
        self.with(|s| s.clears += 1);
    }

    fn show_document(&self, document: &RenderedDocument) {
        self.with(|s| s.results.push(ShownResult::Document(document.clone())));
    }

    fn show_error(&self, message: &str) {
        self.with(|s| s.results.push(ShownResult::Error(message.to_string())));
    }
}

impl OcrSink for Recorder {
    fn clear(&self) {
        self.with(|s| {
            s.ocr_clears += 1;
            s.ocr_text = None;
        });
    }

    fn show_text(&self, text: &str) {
        self.with(|s| s.ocr_text = Some(text.to_string()));
    }
}

impl Notifier for Recorder {
    fn alert(&self, message: &str) {
        self.with(|s| s.alerts.push(message.to_string()));
    }
}

pub struct FakeTextSource(String);

impl FakeTextSource {
    pub fn new(text: &str) -> Self {
        Self(text.to_string())
    }
}

impl TextSource for FakeTextSource {
    fn current_text(&self) -> String {
        self.0.clone()
    }
}

pub struct FakeFileSource(Option<ImageUpload>);

impl FakeFileSource {
    pub fn new(upload: Option<ImageUpload>) -> Self {
        Self(upload)
    }
}

impl FileSource for FakeFileSource {
    fn selected_file(&self) -> Option<ImageUpload> {
        self.0.clone()
    }
}

/// Client returning canned responses and remembering what it was sent.
#[derive(Clone, Default)]
pub struct StubClient {
    text_response: Option<Result<AnalysisResult, CoreError>>,
    image_response: Option<Result<ImageAnalysisResult, CoreError>>,
    text_calls: Arc<Mutex<Vec<String>>>,
    image_calls: Arc<Mutex<Vec<String>>>,
}

impl StubClient {
    pub fn text(response: Result<AnalysisResult, CoreError>) -> Self {
        Self {
            text_response: Some(response),
            ..Default::default()
        }
    }

    pub fn image(response: Result<ImageAnalysisResult, CoreError>) -> Self {
        Self {
            image_response: Some(response),
            ..Default::default()
        }
    }

    pub fn text_calls(&self) -> Vec<String> {
        self.text_calls.lock().unwrap().clone()
    }

    pub fn image_calls(&self) -> Vec<String> {
        self.image_calls.lock().unwrap().clone()
    }
}

impl AnalysisClient for StubClient {
    async fn analyze_text(&self, text: String) -> Result<AnalysisResult, CoreError> {
        self.text_calls.lock().unwrap().push(text);
        self.text_response
            .clone()
            .expect("text response not configured")
    }

    async fn analyze_image(&self, upload: ImageUpload) -> Result<ImageAnalysisResult, CoreError> {
        self.image_calls.lock().unwrap().push(upload.file_name);
        self.image_response
            .clone()
            .expect("image response not configured")
    }
}

/// Client whose text request stays pending until the gate is notified.
pub struct GatedClient {
    gate: Arc<Notify>,
    result: AnalysisResult,
}

impl GatedClient {
    pub fn new(result: AnalysisResult) -> Self {
        Self {
            gate: Arc::new(Notify::new()),
            result,
        }
    }

    pub fn gate(&self) -> Arc<Notify> {
        self.gate.clone()
    }
}

impl AnalysisClient for GatedClient {
    async fn analyze_text(&self, _text: String) -> Result<AnalysisResult, CoreError> {
        self.gate.notified().await;
        Ok(self.result.clone())
    }

    async fn analyze_image(&self, _upload: ImageUpload) -> Result<ImageAnalysisResult, CoreError> {
        self.gate.notified().await;
        Ok(ImageAnalysisResult {
            extracted_text: None,
            analysis: Some(self.result.clone()),
        })
    }
}
