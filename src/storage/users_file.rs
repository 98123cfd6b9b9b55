use crate::models::user::UserRecord;
use anyhow::{Context, Result};
use rust_decimal::Decimal;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Fields every stored user entry must carry
const REQUIRED_FIELDS: [&str; 6] = ["username", "budget", "age", "weight", "height", "health_condition"];

/// A stored entry (or the whole file) that could not be loaded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadIssue {
    /// Key of the offending entry, `None` when the file as a whole is unusable
    pub username: Option<String>,
    pub reason: String,
}

/// Outcome of reading the users file
#[derive(Debug, Default)]
pub struct LoadReport {
    pub users: BTreeMap<String, UserRecord>,
    pub issues: Vec<LoadIssue>,
}

/// The JSON file holding every user record, keyed by username
///
/// Each load reads the whole file and each save rewrites it.
pub struct UsersFile {
    path: PathBuf,
}

impl UsersFile {
    pub fn new(path: PathBuf) -> Self {
        UsersFile { path }
    }

    /// Read every user from disk
    ///
    /// A missing file is an empty store. Unparseable content and malformed
    /// entries are reported in the returned issues; valid entries still load.
    pub fn load(&self) -> Result<LoadReport> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(path = %self.path.display(), "Users file not found, starting with an empty store");
                return Ok(LoadReport::default());
            }
            Err(e) => {
                return Err(e).context(format!("Failed to read users file: {}", self.path.display()));
            }
        };

        let report = parse_users(&content);

        for issue in &report.issues {
            warn!(
                path = %self.path.display(),
                username = issue.username.as_deref().unwrap_or("<file>"),
                reason = %issue.reason,
                "Skipping malformed user data"
            );
        }

        debug!(
            path = %self.path.display(),
            users = report.users.len(),
            issues = report.issues.len(),
            "Users file loaded"
        );

        Ok(report)
    }

    /// Replace the file contents with `users`
    ///
    /// Writes to a sibling temp file first, then renames it over the target.
    pub fn save(&self, users: &BTreeMap<String, UserRecord>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .context(format!("Failed to create directory: {}", parent.display()))?;
            }
        }

        let json = serde_json::to_string_pretty(users).context("Failed to serialize users")?;

        let tmp_path = self.path.with_extension("json.tmp");
        let mut file = fs::File::create(&tmp_path)
            .context(format!("Failed to create temp file: {}", tmp_path.display()))?;
        file.write_all(json.as_bytes()).context("Failed to write users file")?;
        file.sync_all().context("Failed to flush users file")?;

        fs::rename(&tmp_path, &self.path)
            .context(format!("Failed to replace users file: {}", self.path.display()))?;

        debug!(path = %self.path.display(), users = users.len(), "Users file saved");

        Ok(())
    }
}

/// Decode file contents entry by entry
pub fn parse_users(content: &str) -> LoadReport {
    let mut report = LoadReport::default();

    if content.trim().is_empty() {
        return report;
    }

    let root: Value = match serde_json::from_str(content) {
        Ok(root) => root,
        Err(e) => {
            report.issues.push(LoadIssue {
                username: None,
                reason: format!("invalid JSON: {}", e),
            });
            return report;
        }
    };

    let Value::Object(entries) = root else {
        report.issues.push(LoadIssue {
            username: None,
            reason: "user data is not a JSON object".to_string(),
        });
        return report;
    };

    for (key, value) in entries {
        match decode_entry(&key, value) {
            Ok(user) => {
                report.users.insert(key, user);
            }
            Err(reason) => report.issues.push(LoadIssue {
                username: Some(key),
                reason,
            }),
        }
    }

    report
}

fn decode_entry(key: &str, value: Value) -> Result<UserRecord, String> {
    let Some(fields) = value.as_object() else {
        return Err("entry is not a JSON object".to_string());
    };

    let missing = missing_fields(fields);
    if !missing.is_empty() {
        return Err(format!("missing fields: {}", missing.join(", ")));
    }

    let user: UserRecord = serde_json::from_value(value).map_err(|e| e.to_string())?;

    if user.username != key {
        return Err(format!("username '{}' does not match its key", user.username));
    }

    if user.budget < Decimal::ZERO {
        return Err(format!("budget must be non-negative, got {}", user.budget));
    }

    for (name, value) in [("weight", user.weight), ("height", user.height)] {
        if !value.is_finite() || value < 0.0 {
            return Err(format!("{} must be non-negative, got {}", name, value));
        }
    }

    Ok(user)
}

fn missing_fields(fields: &Map<String, Value>) -> Vec<&'static str> {
    REQUIRED_FIELDS
        .into_iter()
        .filter(|field| !fields.contains_key(*field))
        .collect()
}
