//! Chat transcripts on disk.
//!
//! Two JSON layouts are accepted:
//!
//! ```json
//! [{"id": "m1", "content": "Which mountain?"}]
//! ```
//!
//! ```json
//! {"title": "Mt. Takao", "messages": [{"id": "m1", "content": "Which mountain?"}]}
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::model::types::RawMessage;

#[derive(Error, Debug)]
pub enum TranscriptError {
    #[error("Failed to read transcript {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse transcript {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Transcript {
    /// Overrides the configured chat title when present.
    pub title: Option<String>,
    pub messages: Vec<RawMessage>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TranscriptFile {
    Bare(Vec<RawMessage>),
    Wrapped {
        #[serde(default)]
        title: Option<String>,
        messages: Vec<RawMessage>,
    },
}

impl From<TranscriptFile> for Transcript {
    fn from(file: TranscriptFile) -> Self {
        match file {
            TranscriptFile::Bare(messages) => Transcript {
                title: None,
                messages,
            },
            TranscriptFile::Wrapped { title, messages } => Transcript { title, messages },
        }
    }
}

impl Transcript {
    pub fn from_json_str(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<TranscriptFile>(text).map(Transcript::from)
    }

    pub fn load(path: &Path) -> Result<Self, TranscriptError> {
        let text = std::fs::read_to_string(path).map_err(|source| TranscriptError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let transcript = Self::from_json_str(&text).map_err(|source| TranscriptError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        info!(
            component = "transcript",
            operation = "load",
            path = %path.display(),
            message_count = transcript.messages.len(),
            "Transcript loaded"
        );
        Ok(transcript)
    }
}
