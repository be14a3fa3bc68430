use crate::{
    domain::common::{LabelScanConfig, entities::app_errors::CoreError},
    infrastructure::analysis_backend::HttpAnalysisClient,
};

pub type LabelScanClient = HttpAnalysisClient;

/// Builds the backend client adapters run the workflows against.
pub fn create_client(config: &LabelScanConfig) -> Result<LabelScanClient, CoreError> {
    let client = HttpAnalysisClient::new(&config.backend)?;
    tracing::debug!(base_url = client.base_url(), "analysis client ready");
    Ok(client)
}
