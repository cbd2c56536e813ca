pub use super::courses::Entity as Courses;
pub use super::enrollments::Entity as Enrollments;
pub use super::families::Entity as Families;
pub use super::fee_allocations::Entity as FeeAllocations;
pub use super::fee_services::Entity as FeeServices;
pub use super::payments::Entity as Payments;
pub use super::students::Entity as Students;
pub use super::subscriptions::Entity as Subscriptions;
pub use super::system_settings::Entity as SystemSettings;
pub use super::users::Entity as Users;
