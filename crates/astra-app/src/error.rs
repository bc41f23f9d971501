use astra_flow::error::FlowError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Flow(#[from] FlowError),

    #[error("assessment is not complete")]
    NotComplete,
}
