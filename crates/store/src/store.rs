//! Persistent cumulative keyword counts
//!
//! Counts are stored as a single JSON object `{ "keyword": count, ... }`.
//! Each run merges its counter on top of what is already stored; nothing is
//! ever reset. Writes go to a temp file that is renamed over the store, so an
//! interrupted run leaves the previous counts intact.
//!
//! One process at a time: `open` takes an exclusive lock on `<store>.lock`
//! and holds it until the store is dropped.

use crate::counter::KeywordCounter;
use fs2::FileExt;
use keyword_core::{Error, Result};
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

fn sibling(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(suffix);
    PathBuf::from(name)
}

/// File-backed keyword count store
#[derive(Debug)]
pub struct KeywordStore {
    path: PathBuf,
    counts: RwLock<BTreeMap<String, u64>>,
    _lock: File,
}

impl KeywordStore {
    /// Open (or create) the store at `path`.
    ///
    /// # Errors
    ///
    /// `StoreLocked` if another process holds the store, `SerializationError`
    /// if the existing file is not a JSON object of counts.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let lock_path = sibling(&path, ".lock");
        let lock_file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .read(true)
            .write(true)
            .open(&lock_path)?;
        lock_file
            .try_lock_exclusive()
            .map_err(|_| Error::StoreLocked(path.display().to_string()))?;

        let counts = match fs::read_to_string(&path) {
            Ok(content) if content.trim().is_empty() => BTreeMap::new(),
            Ok(content) => serde_json::from_str(&content)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };

        info!(
            target: "ckw::store",
            path = %path.display(),
            keywords = counts.len(),
            "Opened keyword store"
        );

        Ok(Self {
            path,
            counts: RwLock::new(counts),
            _lock: lock_file,
        })
    }

    /// Store file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Add `n` occurrences of `keyword`.
    pub fn increment(&self, keyword: &str, n: u64) {
        let mut counts = self.counts.write();
        match counts.get_mut(keyword) {
            Some(count) => *count += n,
            None => {
                counts.insert(keyword.to_string(), n);
            }
        }
    }

    /// Add every count of a finished run. Returns the number of keywords
    /// that were not in the store before.
    pub fn merge(&self, counter: &KeywordCounter) -> usize {
        let run = counter.snapshot();
        let mut counts = self.counts.write();
        let mut new_keywords = 0;
        for (keyword, n) in run {
            let slot = counts.entry(keyword).or_insert_with(|| {
                new_keywords += 1;
                0
            });
            *slot += n;
        }
        debug!(
            target: "ckw::store",
            new_keywords,
            total = counts.len(),
            "Merged run counts"
        );
        new_keywords
    }

    /// Stored count of `keyword`
    pub fn get(&self, keyword: &str) -> u64 {
        self.counts.read().get(keyword).copied().unwrap_or(0)
    }

    /// Number of distinct keywords stored
    pub fn len(&self) -> usize {
        self.counts.read().len()
    }

    /// True if the store holds no keywords
    pub fn is_empty(&self) -> bool {
        self.counts.read().is_empty()
    }

    /// All entries, most frequent first, ties by keyword.
    pub fn entries(&self) -> Vec<(String, u64)> {
        let mut entries: Vec<(String, u64)> = self
            .counts
            .read()
            .iter()
            .map(|(k, v)| (k.clone(), *v))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        entries
    }

    /// Write the counts to disk atomically.
    pub fn flush(&self) -> Result<()> {
        let tmp_path = sibling(&self.path, ".tmp");
        {
            let counts = self.counts.read();
            let mut tmp = File::create(&tmp_path)?;
            serde_json::to_writer(&mut tmp, &*counts)?;
            tmp.flush()?;
            tmp.sync_all()?;
        }
        fs::rename(&tmp_path, &self.path)?;

        info!(
            target: "ckw::store",
            path = %self.path.display(),
            keywords = self.len(),
            "Flushed keyword store"
        );
        Ok(())
    }

    /// Write `keyword,count` CSV rows, in `entries()` order. Returns the
    /// number of rows written.
    pub fn export_csv<W: Write>(&self, writer: W) -> Result<usize> {
        let mut csv = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);
        let entries = self.entries();
        for (keyword, count) in &entries {
            csv.write_record([keyword.as_str(), count.to_string().as_str()])?;
        }
        csv.flush()?;
        Ok(entries.len())
    }
}
