use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::core::config::Config;
use crate::storage::users_file::UsersFile;
use crate::stores::user_store::UserStore;

// this runs at boot time
pub fn open_user_store(config: &Config) -> Result<UserStore> {
    let path = config.storage.users_file.clone();
    let (store, issues) = UserStore::open(UsersFile::new(path.clone()))
        .context(format!("Failed to load users from '{}'", path.display()))?;

    if !issues.is_empty() {
        warn!(
            path = %path.display(),
            skipped = issues.len(),
            "Some user entries could not be loaded and will be dropped on the next write"
        );
    }

    info!(
        path = %path.display(),
        users_loaded = store.len(),
        "User store ready"
    );

    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn config_for(users_file: &std::path::Path) -> Config {
        let content = format!(
            "[server]\nport = 8080\n[storage]\nusers_file = {:?}\n",
            users_file.display().to_string()
        );
        Config::parse(&content).unwrap()
    }

    #[test]
    fn test_open_empty_store() {
        let temp_dir = TempDir::new().unwrap();
        let config = config_for(&temp_dir.path().join("users.json"));

        let store = open_user_store(&config).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_open_store_with_corrupt_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("users.json");
        std::fs::write(&path, "this is not json").unwrap();

        let store = open_user_store(&config_for(&path)).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_open_store_unreadable_path() {
        let temp_dir = TempDir::new().unwrap();
        // reading a directory fails with something other than NotFound
        let config = config_for(temp_dir.path());

        assert!(open_user_store(&config).is_err());
    }
}
