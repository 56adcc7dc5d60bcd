pub mod repositories;
pub mod services;

// Re-export all port traits for convenience
pub use repositories::MemberRepository;
pub use services::FamilyService;
