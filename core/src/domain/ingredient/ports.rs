use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    ingredient::{
        entities::{AnalysisResult, ImageAnalysisResult},
        value_objects::ImageUpload,
    },
};

/// Remote ingredient analysis backend.
///
/// Implementations must not retry, cache or time out: each call maps to
/// exactly one request.
#[cfg_attr(test, mockall::automock)]
pub trait AnalysisClient: Send + Sync {
    /// `text` is expected to be trimmed and non-empty; callers validate.
    fn analyze_text(
        &self,
        text: String,
    ) -> impl Future<Output = Result<AnalysisResult, CoreError>> + Send;

    fn analyze_image(
        &self,
        upload: ImageUpload,
    ) -> impl Future<Output = Result<ImageAnalysisResult, CoreError>> + Send;
}
