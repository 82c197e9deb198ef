use thiserror::Error;

use crate::form::session::SessionError;
use crate::logging::LoggingError;
use crate::pipeline::stage1_answers::AnswerSheetError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("logging error: {0}")]
    Logging(#[from] LoggingError),
    #[error(transparent)]
    AnswerSheet(#[from] AnswerSheetError),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error("failed to write report: {0}")]
    Report(#[from] std::io::Error),
}
