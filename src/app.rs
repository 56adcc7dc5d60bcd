use std::sync::Arc;
use tracing::info;

use crate::{
    adapters::outbound::persistence::InMemoryMemberRepository,
    domain::{errors::ValidationError, value_objects::FamilyName},
    ports::repositories::MemberRepository,
    services::FamilyServiceImpl,
};

/// Configuration for the application
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub family_name: FamilyName,
}

impl AppConfig {
    /// Build a configuration from a raw family name, as read from flags or env
    pub fn from_family_name(family_name: &str) -> Result<Self, AppError> {
        Ok(Self {
            family_name: FamilyName::new(family_name)?,
        })
    }
}

/// Application dependencies container
pub struct AppDependencies {
    pub member_repository: Arc<dyn MemberRepository>,
}

/// Application services container
pub struct AppServices {
    pub family_service: FamilyServiceImpl,
}

/// Application builder for dependency injection
pub struct AppBuilder {
    config: AppConfig,
}

impl AppBuilder {
    /// Create a new application builder
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
        }
    }

    /// Configure the application with custom settings
    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    /// Configure the family held by the store
    pub fn with_family_name(mut self, family_name: FamilyName) -> Self {
        self.config.family_name = family_name;
        self
    }

    /// Build the application dependencies
    pub fn build_dependencies(self) -> Result<AppDependencies, AppError> {
        let member_repository: Arc<dyn MemberRepository> =
            Arc::new(InMemoryMemberRepository::new(self.config.family_name));

        Ok(AppDependencies { member_repository })
    }

    /// Build the complete application with services
    pub fn build(self) -> Result<AppServices, AppError> {
        let family_name = self.config.family_name.clone();
        let deps = self.build_dependencies()?;

        let family_service = FamilyServiceImpl::new(deps.member_repository.clone());
        info!(family = %family_name, "Family store created");

        Ok(AppServices { family_service })
    }
}

impl Default for AppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Application-level errors
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid family name: {0}")]
    InvalidFamilyName(#[from] ValidationError),
}

/// Create an in-memory application holding the default family
pub fn create_in_memory_app() -> Result<AppServices, AppError> {
    AppBuilder::new().build()
}
