//! Service container for dependency injection
//!
//! Wires up all services with their dependencies.

use std::sync::Arc;

use crate::application::services::{SeedService, TransferService};
use crate::application::ApplicationResult;
use crate::config::Settings;
use crate::infrastructure::traits::{FileSystem, RealFileSystem, Selector, SkimSelector};

/// Container holding all application services.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Filesystem abstraction
    pub fs: Arc<dyn FileSystem>,

    /// Interactive node picker
    pub selector: Arc<dyn Selector>,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    pub fn new(settings: Settings) -> Self {
        let selector = Arc::new(SkimSelector::new(settings.picker.height.clone()));
        Self::with_deps(settings, Arc::new(RealFileSystem), selector)
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(
        settings: Settings,
        fs: Arc<dyn FileSystem>,
        selector: Arc<dyn Selector>,
    ) -> Self {
        let settings = Arc::new(settings);

        Self {
            settings,
            fs,
            selector,
        }
    }

    pub fn seed_service(&self) -> SeedService {
        SeedService::new(Arc::clone(&self.fs))
    }

    /// Fresh transfer state from the configured seed.
    pub fn transfer_service(&self) -> ApplicationResult<TransferService> {
        let seed = self
            .seed_service()
            .load(self.settings.seed_file.as_deref())?;
        TransferService::from_seed(&seed)
    }
}
