use std::path::PathBuf;

use chrono::NaiveDate;

use crate::error::ArchiveError;
use crate::record::SentRecord;

/// Date-keyed flat-file store for [`SentRecord`]s.
///
/// There is no locking. One process per scheduled invocation is assumed;
/// two runs racing on the same day's file can lose each other's additions.
#[derive(Debug, Clone)]
pub struct ArchiveStore {
    dir: PathBuf,
}

impl ArchiveStore {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// `<dir>/sent_items_YYYYMMDD.json`
    #[must_use]
    pub fn path_for(&self, date: NaiveDate) -> PathBuf {
        self.dir
            .join(format!("sent_items_{}.json", date.format("%Y%m%d")))
    }

    /// Loads the record for `date`.
    ///
    /// A missing file is an empty record. A file that exists but cannot be
    /// read or decoded is logged and also treated as empty, so the next save
    /// rewrites it.
    #[must_use]
    pub fn load(&self, date: NaiveDate) -> SentRecord {
        let path = self.path_for(date);
        let raw = match std::fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return SentRecord::new(),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "sent record unreadable, starting empty");
                return SentRecord::new();
            }
        };

        match serde_json::from_str::<SentRecord>(&raw) {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "sent record corrupt, starting empty");
                SentRecord::new()
            }
        }
    }

    /// Overwrites the record for `date`.
    ///
    /// Creates the archive directory when needed, writes a sibling temp file
    /// and renames it over the target.
    ///
    /// # Errors
    ///
    /// Returns [`ArchiveError::Io`] if the directory, temp file, or rename
    /// fails, or [`ArchiveError::Encode`] if serialization fails.
    pub fn save(&self, date: NaiveDate, record: &SentRecord) -> Result<(), ArchiveError> {
        let path = self.path_for(date);
        std::fs::create_dir_all(&self.dir).map_err(|source| ArchiveError::Io {
            path: self.dir.clone(),
            source,
        })?;

        let encoded = serde_json::to_vec(record).map_err(|source| ArchiveError::Encode {
            path: path.clone(),
            source,
        })?;

        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, encoded).map_err(|source| ArchiveError::Io {
            path: tmp.clone(),
            source,
        })?;
        std::fs::rename(&tmp, &path).map_err(|source| ArchiveError::Io {
            path: path.clone(),
            source,
        })?;

        tracing::debug!(path = %path.display(), entries = record.len(), "saved sent record");
        Ok(())
    }
}
