//! Error types for MailTriage.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Inference error: {0}")]
    Inference(String),

    #[error("Model load error: {0}")]
    ModelLoad(String),
}

pub type Result<T> = std::result::Result<T, Error>;
