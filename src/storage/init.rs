//! Storage initialization
//!
//! Handles first-run setup and default data creation

use tracing::info;

use crate::config::paths::PacePaths;
use crate::error::PaceResult;
use crate::models::CategoryRegistry;

use super::categories::CategoryRepository;

/// Initialize storage for a fresh installation
///
/// Writes the default category registry unless one already exists.
pub fn initialize_storage(paths: &PacePaths) -> PaceResult<()> {
    paths.ensure_directories()?;

    if !paths.categories_file().exists() {
        let registry = CategoryRegistry::default_registry();
        let count = registry.len();
        CategoryRepository::new(paths.categories_file()).set(registry)?;
        info!(categories = count, "created default category registry");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RegistryCategory;
    use tempfile::TempDir;

    #[test]
    fn test_initialize_writes_registry_once() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PacePaths::with_base_dir(temp_dir.path().to_path_buf());

        initialize_storage(&paths).unwrap();
        assert!(paths.is_initialized());

        let custom = CategoryRegistry::new([RegistryCategory::new("pets", "Pets", "Home")]);
        CategoryRepository::new(paths.categories_file())
            .set(custom.clone())
            .unwrap();

        initialize_storage(&paths).unwrap();
        let reloaded = CategoryRepository::new(paths.categories_file());
        reloaded.load().unwrap();
        assert_eq!(reloaded.get().unwrap(), custom);
    }
}
