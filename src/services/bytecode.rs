//! Contract bytecode loading.
//!
//! Accepts raw hex (solc `--bin` output) or a JSON compiler artifact
//! (Hardhat or Foundry layout).

use std::path::Path;

use alloy::{hex, primitives::Bytes};
use serde::Deserialize;

use crate::error::{AppError, Result};

/// Compiler artifact, only the creation bytecode is read.
#[derive(Debug, Deserialize)]
struct Artifact {
    bytecode: ArtifactBytecode,
}

/// Hardhat stores the bytecode as a string, Foundry nests it in an object.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ArtifactBytecode {
    Hex(String),
    Object { object: String },
}

impl ArtifactBytecode {
    fn into_hex(self) -> String {
        match self {
            ArtifactBytecode::Hex(hex) => hex,
            ArtifactBytecode::Object { object } => object,
        }
    }
}

/// Load creation bytecode from a file.
pub fn load_bytecode(path: &Path) -> Result<Bytes> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| AppError::Bytecode(format!("failed to read {}: {}", path.display(), e)))?;

    let bytecode = parse_bytecode(&contents)
        .map_err(|e| AppError::Bytecode(format!("{}: {}", path.display(), e)))?;

    tracing::debug!(path = %path.display(), size = bytecode.len(), "Loaded contract bytecode");
    Ok(bytecode)
}

/// Decode bytecode from file contents.
fn parse_bytecode(contents: &str) -> std::result::Result<Bytes, String> {
    let trimmed = contents.trim();

    let hex_text = if trimmed.starts_with('{') {
        let artifact: Artifact =
            serde_json::from_str(trimmed).map_err(|e| format!("invalid artifact: {e}"))?;
        artifact.bytecode.into_hex()
    } else {
        trimmed.to_string()
    };

    let bytes = hex::decode(hex_text.trim()).map_err(|e| format!("invalid hex bytecode: {e}"))?;
    if bytes.is_empty() {
        return Err("bytecode is empty".to_string());
    }

    Ok(Bytes::from(bytes))
}
