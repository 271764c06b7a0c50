//! One-shot export of the profile's data, the settings-page download.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::calendar;
use crate::clock::Clock;
use crate::domain::Expense;

use super::{json_backend, Result};

/// Owner stamp embedded in an exported document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackupUser {
    pub name: String,
    pub email: String,
}

/// The exported document: owner, full expense collection, export stamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<BackupUser>,
    #[serde(default)]
    pub expenses: Vec<Expense>,
    #[serde(default)]
    pub exported_at: String,
}

impl BackupDocument {
    pub fn new(user: Option<BackupUser>, expenses: Vec<Expense>, clock: &dyn Clock) -> Self {
        Self {
            user,
            expenses,
            exported_at: clock.stamp(),
        }
    }
}

/// Writes `document` as pretty JSON to `expensewise-backup-YYYY-MM-DD.json`
/// under `dir` and returns the path.
pub fn write_backup(dir: &Path, document: &BackupDocument, clock: &dyn Clock) -> Result<PathBuf> {
    let file_name = format!("expensewise-backup-{}.json", calendar::day_key(clock.today()));
    let path = dir.join(file_name);
    let json = serde_json::to_string_pretty(document)?;
    json_backend::write_atomic(&path, &json)?;
    Ok(path)
}
