use std::sync::Arc;

use tracing::{error, info, instrument};

use crate::domain::{
    common::entities::app_errors::CoreError,
    ingredient::{ports::AnalysisClient, rendering::render},
    workflow::{
        messages,
        ports::{FileSource, Notifier, OcrSink, ResultSink, StatusSink, TextSource, TriggerControl},
        state::{InFlight, WorkflowEvent, WorkflowMachine, WorkflowState},
    },
};

/// How a single activation ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkflowOutcome {
    /// Input failed validation; nothing was sent.
    Rejected,
    /// Another activation of the same workflow is still in flight.
    Busy,
    Succeeded,
    Failed(CoreError),
}

impl WorkflowOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, WorkflowOutcome::Succeeded)
    }
}

/// Sinks and sources the text workflow reads from and writes to.
#[derive(Clone)]
pub struct TextSurface {
    pub input: Arc<dyn TextSource>,
    pub trigger: Arc<dyn TriggerControl>,
    pub status: Arc<dyn StatusSink>,
    pub output: Arc<dyn ResultSink>,
    pub notifier: Arc<dyn Notifier>,
}

/// Sinks and sources the image workflow reads from and writes to.
#[derive(Clone)]
pub struct ImageSurface {
    pub input: Arc<dyn FileSource>,
    pub trigger: Arc<dyn TriggerControl>,
    pub status: Arc<dyn StatusSink>,
    pub output: Arc<dyn ResultSink>,
    pub ocr: Arc<dyn OcrSink>,
    pub notifier: Arc<dyn Notifier>,
}

pub struct TextAnalysisWorkflow<C: AnalysisClient> {
    client: Arc<C>,
    surface: TextSurface,
    machine: WorkflowMachine,
}

impl<C: AnalysisClient> TextAnalysisWorkflow<C> {
    pub fn new(client: Arc<C>, surface: TextSurface) -> Self {
        Self {
            client,
            surface,
            machine: WorkflowMachine::new("text_analysis"),
        }
    }

    pub fn state(&self) -> WorkflowState {
        self.machine.state()
    }

    /// Runs one activation to completion. Remote failures are reported to
    /// the surface and returned, never propagated as `Err`.
    #[instrument(skip_all, name = "text_analysis")]
    pub async fn activate(&self) -> WorkflowOutcome {
        if !self.machine.try_trigger() {
            return WorkflowOutcome::Busy;
        }

        let raw = self.surface.input.current_text();
        let text = raw.trim();
        if text.is_empty() {
            self.machine.fire(WorkflowEvent::InputRejected);
            self.surface.notifier.alert(messages::TEXT_REQUIRED);
            return WorkflowOutcome::Rejected;
        }

        self.machine.fire(WorkflowEvent::InputAccepted);
        let _in_flight = InFlight::begin(&self.machine, self.surface.trigger.as_ref());
        self.surface.status.set_status(messages::TEXT_IN_PROGRESS);
        self.surface.output.clear();

        match self.client.analyze_text(text.to_string()).await {
            Ok(result) => {
                self.machine.fire(WorkflowEvent::RequestSucceeded);
                info!(items = result.items.len(), "text analysis completed");
                self.surface.output.show_document(&render(Some(&result)));
                self.surface.status.set_status(messages::TEXT_DONE);
                WorkflowOutcome::Succeeded
            }
            Err(e) => {
                self.machine.fire(WorkflowEvent::RequestFailed);
                error!("text analysis failed: {}", e);
                self.surface.output.show_error(&e.to_string());
                self.surface.status.set_status(messages::TEXT_FAILED);
                WorkflowOutcome::Failed(e)
            }
        }
    }
}

pub struct ImageAnalysisWorkflow<C: AnalysisClient> {
    client: Arc<C>,
    surface: ImageSurface,
    machine: WorkflowMachine,
}

impl<C: AnalysisClient> ImageAnalysisWorkflow<C> {
    pub fn new(client: Arc<C>, surface: ImageSurface) -> Self {
        Self {
            client,
            surface,
            machine: WorkflowMachine::new("image_analysis"),
        }
    }

    pub fn state(&self) -> WorkflowState {
        self.machine.state()
    }

    #[instrument(skip_all, name = "image_analysis")]
    pub async fn activate(&self) -> WorkflowOutcome {
        if !self.machine.try_trigger() {
            return WorkflowOutcome::Busy;
        }

        let Some(upload) = self.surface.input.selected_file() else {
            self.machine.fire(WorkflowEvent::InputRejected);
            self.surface.notifier.alert(messages::IMAGE_REQUIRED);
            return WorkflowOutcome::Rejected;
        };

        self.machine.fire(WorkflowEvent::InputAccepted);
        let _in_flight = InFlight::begin(&self.machine, self.surface.trigger.as_ref());
        self.surface.status.set_status(messages::IMAGE_IN_PROGRESS);
        self.surface.ocr.clear();
        self.surface.output.clear();

        let file_name = upload.file_name.clone();
        match self.client.analyze_image(upload).await {
            Ok(result) => {
                self.machine.fire(WorkflowEvent::RequestSucceeded);
                info!(file = %file_name, "image analysis completed");

                let extracted = result
                    .extracted_text
                    .as_deref()
                    .filter(|text| !text.is_empty())
                    .unwrap_or(messages::OCR_UNREADABLE);
                self.surface.ocr.show_text(extracted);
                self.surface
                    .output
                    .show_document(&render(result.analysis.as_ref()));
                self.surface.status.set_status(messages::IMAGE_DONE);
                WorkflowOutcome::Succeeded
            }
            Err(e) => {
                self.machine.fire(WorkflowEvent::RequestFailed);
                error!(file = %file_name, "image analysis failed: {}", e);
                self.surface.output.show_error(&e.to_string());
                self.surface.status.set_status(messages::IMAGE_FAILED);
                WorkflowOutcome::Failed(e)
            }
        }
    }
}
