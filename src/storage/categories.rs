//! Category registry repository for JSON storage
//!
//! Loads the canonical category list from categories.json.

use std::path::PathBuf;

use crate::error::PaceResult;
use crate::models::CategoryRegistry;

use super::json_file::JsonFile;

/// Repository for the category registry
pub struct CategoryRepository {
    file: JsonFile<CategoryRegistry>,
}

impl CategoryRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            file: JsonFile::new(path),
        }
    }

    pub fn load(&self) -> PaceResult<()> {
        self.file.load()
    }

    pub fn get(&self) -> PaceResult<CategoryRegistry> {
        self.file.snapshot()
    }

    /// Replace the registry and persist it
    pub fn set(&self, registry: CategoryRegistry) -> PaceResult<()> {
        self.file.replace(registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_round_trip_preserves_order() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("categories.json");
        let repo = CategoryRepository::new(path.clone());
        repo.set(CategoryRegistry::default_registry()).unwrap();

        let repo2 = CategoryRepository::new(path);
        repo2.load().unwrap();
        assert_eq!(repo2.get().unwrap(), CategoryRegistry::default_registry());
    }
}
