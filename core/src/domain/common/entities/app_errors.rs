use thiserror::Error;

/// Errors surfaced by the analysis client and the workflows around it.
///
/// Display strings are user-facing: the workflows write them verbatim into
/// the result sink.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("{0}")]
    Validation(String),

    #[error("İstek başarısız: {status} - {body}")]
    RequestFailed { status: u16, body: String },

    #[error("Yanıt çözümlenemedi: {0}")]
    ResponseParse(String),

    #[error("Ağ hatası: {0}")]
    Network(String),

    #[error("Geçersiz yapılandırma: {0}")]
    InvalidConfig(String),
}
