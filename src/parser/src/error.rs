use thiserror::Error;
use crate::FileEntity;

#[derive(Error, Debug)]
pub enum ParserError{
    #[error("{0} {1} does not exist")]
    MissingFileEntity(FileEntity, String),

    #[error("{1} is not a {0}")]
    InvalidFileEntity(FileEntity, String),

    #[error("Failed to serialize command line arguments")]
    SerializeArgs(#[source] serde_yaml::Error),

    #[error("Unable to deserialize arguments from {0}")]
    DeserializeArgs(String, #[source] serde_yaml::Error),

    #[error("Unable to write arguments into {0}")]
    WriteArgs(String, #[source] std::io::Error),

    #[error("Failed to open {0}")]
    OpenArgs(String, #[source] std::io::Error),
}
