pub mod availability_repository;
pub mod billing_repository;
pub mod class_repository;
pub mod enrollment_repository;
pub mod room_repository;
pub mod user_repository;

// Re-export all repositories for convenient access
pub use availability_repository::AvailabilityRepository;
pub use billing_repository::BillingRepository;
pub use class_repository::ClassRepository;
pub use enrollment_repository::EnrollmentRepository;
pub use room_repository::RoomRepository;
pub use user_repository::UserRepository;
