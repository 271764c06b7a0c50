use std::{
    env,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use super::{Result, SlotStore};

const SLOT_EXTENSION: &str = "json";
const TMP_SUFFIX: &str = "tmp";
const DEFAULT_DIR_NAME: &str = ".expensewise";
const HOME_OVERRIDE: &str = "EXPENSEWISE_HOME";

/// Durable slots stored as one JSON file each under a profile directory.
///
/// Writes go through a temp file and rename so a crash mid-write never leaves
/// a half-written slot. Two processes sharing a profile directory race with
/// last-write-wins semantics; nothing here locks.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    /// Opens a store rooted at `root`, creating the directory if needed.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// Opens the store in the default profile directory,
    /// `$EXPENSEWISE_HOME` or `~/.expensewise`.
    pub fn open_default() -> Result<Self> {
        Self::new(default_profile_dir())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File backing a slot.
    pub fn slot_path(&self, slot: &str) -> PathBuf {
        self.root.join(format!("{}.{}", slot, SLOT_EXTENSION))
    }
}

impl SlotStore for JsonFileStore {
    fn read(&self, slot: &str) -> Result<Option<String>> {
        let path = self.slot_path(slot);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(path)?))
    }

    fn write(&self, slot: &str, payload: &str) -> Result<()> {
        write_atomic(&self.slot_path(slot), payload)
    }

    fn remove(&self, slot: &str) -> Result<()> {
        let path = self.slot_path(slot);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }

    fn clear_all(&self) -> Result<()> {
        if !self.root.exists() {
            return Ok(());
        }
        for entry in fs::read_dir(&self.root)? {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) == Some(SLOT_EXTENSION) {
                fs::remove_file(path)?;
            }
        }
        Ok(())
    }
}

/// Profile directory honouring the `EXPENSEWISE_HOME` override.
pub fn default_profile_dir() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_OVERRIDE) {
        return PathBuf::from(custom);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

pub(crate) fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let tmp = tmp_path(path);
    let mut file = File::create(&tmp)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    fs::rename(&tmp, path)?;
    Ok(())
}
