//! Flat-file storage for raw canvas payloads.
//!
//! Each payload is stored as a single line in `<root>/<id>.csv`, where the id
//! is derived from a SHA-256 digest of the stored line. Writes go through a
//! temporary file and a rename, so readers never observe a partial payload and
//! concurrent writers of the same content converge on one file.

use std::{
    fmt,
    path::PathBuf,
    sync::atomic::{AtomicU64, Ordering},
};

use anyhow::Context as _;
use serde::Serialize;
use sha2::Digest as _;

use crate::{
    foundation::error::{CanvasError, CanvasResult},
    grid::parse::strip_brackets,
};

const ID_HEX_LEN: usize = 32;
const PAYLOAD_EXT: &str = "csv";

static TMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Content-addressed payload identifier: 32 lowercase hex characters.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct PayloadId(String);

impl PayloadId {
    /// Validate an identifier received from a client.
    pub fn parse(s: &str) -> CanvasResult<Self> {
        let ok = s.len() == ID_HEX_LEN
            && s.bytes()
                .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b));
        if !ok {
            return Err(CanvasError::invalid_id(format!(
                "payload ids are {ID_HEX_LEN} lowercase hex characters, got {s:?}"
            )));
        }
        Ok(Self(s.to_string()))
    }

    fn for_content(content: &str) -> Self {
        let digest = sha2::Sha256::digest(content.as_bytes());
        let mut out = String::with_capacity(ID_HEX_LEN);
        for b in &digest[..ID_HEX_LEN / 2] {
            out.push_str(&format!("{b:02x}"));
        }
        Self(out)
    }

    /// Identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PayloadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A payload read back from the store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StoredPayload {
    /// Identifier the payload is stored under.
    pub unique_id: PayloadId,
    /// Stored line, including its trailing newline.
    pub data: String,
}

/// Directory-backed payload store.
#[derive(Clone, Debug)]
pub struct PayloadStore {
    root: PathBuf,
}

impl PayloadStore {
    /// Open (and create if needed) a store rooted at `root`.
    pub fn open(root: impl Into<PathBuf>) -> CanvasResult<Self> {
        let root = root.into();
        std::fs::create_dir_all(&root)
            .with_context(|| format!("create payload directory '{}'", root.display()))?;
        Ok(Self { root })
    }

    fn path_for(&self, id: &PayloadId) -> PathBuf {
        self.root.join(format!("{}.{PAYLOAD_EXT}", id.as_str()))
    }

    /// Store `text` and return its id.
    ///
    /// One bracket is stripped from each end and a newline appended. Storing
    /// the same text again returns the same id without rewriting the file; a
    /// different payload hashing to an existing id is refused.
    #[tracing::instrument(skip(self, text), fields(len = text.len()))]
    pub fn put(&self, text: &str) -> CanvasResult<PayloadId> {
        let line = format!("{}\n", strip_brackets(text));
        let id = PayloadId::for_content(&line);
        let path = self.path_for(&id);

        match std::fs::read_to_string(&path) {
            Ok(existing) if existing == line => {
                tracing::debug!(%id, "payload already stored");
                return Ok(id);
            }
            Ok(_) => {
                return Err(CanvasError::storage(format!(
                    "payload id {id} already holds different content"
                )));
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                return Err(anyhow::Error::new(e)
                    .context(format!("read payload '{}'", path.display()))
                    .into());
            }
        }

        let tmp = self.root.join(format!(
            ".{id}.{}.{}.tmp",
            std::process::id(),
            TMP_COUNTER.fetch_add(1, Ordering::Relaxed)
        ));
        std::fs::write(&tmp, &line)
            .with_context(|| format!("write temporary payload '{}'", tmp.display()))?;
        if let Err(e) = std::fs::rename(&tmp, &path) {
            std::fs::remove_file(&tmp).ok();
            return Err(anyhow::Error::new(e)
                .context(format!("publish payload '{}'", path.display()))
                .into());
        }

        tracing::info!(%id, bytes = line.len(), "stored payload");
        Ok(id)
    }

    /// Read the payload stored under `id`.
    pub fn get(&self, id: &PayloadId) -> CanvasResult<String> {
        let path = self.path_for(id);
        match std::fs::read_to_string(&path) {
            Ok(s) => Ok(s),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(CanvasError::not_found(format!("payload {id}")))
            }
            Err(e) => Err(anyhow::Error::new(e)
                .context(format!("read payload '{}'", path.display()))
                .into()),
        }
    }

    /// All stored payloads, ordered by id.
    pub fn list(&self) -> CanvasResult<Vec<StoredPayload>> {
        let rd = std::fs::read_dir(&self.root)
            .with_context(|| format!("list payload directory '{}'", self.root.display()))?;

        let mut out = Vec::new();
        for entry in rd {
            let entry = entry.context("read payload directory entry")?;
            let path = entry.path();
            if path.extension().and_then(|s| s.to_str()) != Some(PAYLOAD_EXT) {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            let Ok(unique_id) = PayloadId::parse(stem) else {
                continue;
            };
            let data = std::fs::read_to_string(&path)
                .with_context(|| format!("read payload '{}'", path.display()))?;
            out.push(StoredPayload { unique_id, data });
        }

        out.sort_by(|a, b| a.unique_id.cmp(&b.unique_id));
        Ok(out)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/store/payload.rs"]
mod tests;
