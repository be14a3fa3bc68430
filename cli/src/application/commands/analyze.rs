use std::{io::IsTerminal, process::ExitCode, sync::Arc};

use anyhow::Context;
use labelscan_core::domain::{
    ingredient::ports::AnalysisClient,
    workflow::{
        ImageAnalysisWorkflow, ImageSurface, TextAnalysisWorkflow, TextSurface, WorkflowOutcome,
    },
};
use serde::Serialize;

use crate::{
    application::terminal::{
        BufferedOcr, BufferedResult, CliTrigger, FixedText, ResultView, SelectedImage,
        StderrNotifier, StderrStatus, table::format_view,
    },
    args::{AnalyzeArgs, OutputFormat},
};

/// Everything one `analyze` run produced, in print order.
#[derive(Debug, Default, Serialize)]
pub struct AnalyzeReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<ResultView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ocr_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ResultView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

struct TextRun<C: AnalysisClient> {
    workflow: TextAnalysisWorkflow<C>,
    output: Arc<BufferedResult>,
}

struct ImageRun<C: AnalysisClient> {
    workflow: ImageAnalysisWorkflow<C>,
    output: Arc<BufferedResult>,
    ocr: Arc<BufferedOcr>,
}

/// Runs the requested workflows side by side and collects their output.
/// Returns the report and whether every launched workflow succeeded.
pub async fn run_analyze<C: AnalysisClient>(
    client: Arc<C>,
    args: &AnalyzeArgs,
) -> Result<(AnalyzeReport, bool), anyhow::Error> {
    let status = Arc::new(StderrStatus::default());
    let notifier = Arc::new(StderrNotifier);

    let text_input = match (&args.text, &args.text_file) {
        (Some(text), _) => Some(text.clone()),
        (None, Some(path)) => Some(
            std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?,
        ),
        (None, None) => None,
    };

    let text_run = text_input.map(|text| {
        let output = Arc::new(BufferedResult::default());
        TextRun {
            workflow: TextAnalysisWorkflow::new(
                client.clone(),
                TextSurface {
                    input: Arc::new(FixedText(text)),
                    trigger: Arc::new(CliTrigger),
                    status: status.clone(),
                    output: output.clone(),
                    notifier: notifier.clone(),
                },
            ),
            output,
        }
    });

    let image_run = match &args.image {
        Some(path) => {
            let selected = SelectedImage::load(path)
                .with_context(|| format!("failed to read image {}", path.display()))?;
            let output = Arc::new(BufferedResult::default());
            let ocr = Arc::new(BufferedOcr::default());
            Some(ImageRun {
                workflow: ImageAnalysisWorkflow::new(
                    client.clone(),
                    ImageSurface {
                        input: Arc::new(selected),
                        trigger: Arc::new(CliTrigger),
                        status: status.clone(),
                        output: output.clone(),
                        ocr: ocr.clone(),
                        notifier: notifier.clone(),
                    },
                ),
                output,
                ocr,
            })
        }
        None => None,
    };

    let (text_outcome, image_outcome) = tokio::join!(
        async {
            match &text_run {
                Some(run) => Some(run.workflow.activate().await),
                None => None,
            }
        },
        async {
            match &image_run {
                Some(run) => Some(run.workflow.activate().await),
                None => None,
            }
        }
    );

    let all_succeeded = [&text_outcome, &image_outcome]
        .into_iter()
        .flatten()
        .all(WorkflowOutcome::is_success);

    let report = AnalyzeReport {
        text: text_run.as_ref().and_then(|run| run.output.take()),
        ocr_text: image_run.as_ref().and_then(|run| run.ocr.take()),
        image: image_run.as_ref().and_then(|run| run.output.take()),
        status: status.last(),
    };

    Ok((report, all_succeeded))
}

pub fn print_report(
    report: &AnalyzeReport,
    format: OutputFormat,
    narrative: bool,
) -> Result<(), anyhow::Error> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(report)?);
        }
        OutputFormat::Table => {
            let color = std::io::stdout().is_terminal();
            if let Some(view) = &report.text {
                println!("== Metin analizi ==");
                print!("{}", format_view(view, color, narrative));
            }
            if report.ocr_text.is_some() || report.image.is_some() {
                println!("== Resim analizi ==");
            }
            if let Some(ocr_text) = &report.ocr_text {
                println!("Okunan metin:\n{}\n", ocr_text);
            }
            if let Some(view) = &report.image {
                print!("{}", format_view(view, color, narrative));
            }
        }
    }
    Ok(())
}

pub async fn execute<C: AnalysisClient>(
    client: Arc<C>,
    args: &AnalyzeArgs,
    format: OutputFormat,
) -> Result<ExitCode, anyhow::Error> {
    let (report, all_succeeded) = run_analyze(client, args).await?;
    print_report(&report, format, args.narrative)?;

    Ok(if all_succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
