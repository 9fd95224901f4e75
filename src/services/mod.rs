pub mod account_service;
pub mod availability_service;
pub mod billing_service;
pub mod enrollment_service;
pub mod scheduling_service;

pub use account_service::{AccountService, MemberDashboard};
pub use availability_service::AvailabilityService;
pub use billing_service::BillingService;
pub use enrollment_service::EnrollmentService;
pub use scheduling_service::SchedulingService;
