pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

// Re-export key types for convenience

// Domain types - core business entities and value objects
pub use domain::{
    // Models
    FamilySnapshot,
    FamilyStore,
    // Value objects
    FamilyName,
    Member,
    // Errors
    MemberError,
    MemberId,
    MemberResult,
    NewMember,
    ValidationError,
};

// Port types - interfaces for external systems
pub use ports::{FamilyService, MemberRepository};

// Service implementations - business logic
pub use services::{FamilyServiceBuilder, FamilyServiceImpl};

// Application factory and configuration
pub use app::{
    AppBuilder, AppConfig, AppDependencies, AppError, AppServices, create_in_memory_app,
};

// Adapter types - infrastructure implementations
pub use adapters::{
    inbound::http::router::{AppState, create_router},
    outbound::persistence::InMemoryMemberRepository,
};

// Public facade for easy construction
pub mod prelude {
    pub use crate::{
        AppBuilder, AppServices, AppState, FamilyName, FamilyService, FamilyServiceImpl,
        InMemoryMemberRepository, Member, MemberId, MemberRepository, NewMember,
        create_in_memory_app, create_router,
    };
}
