pub mod auth;

pub mod users;

pub mod families;

pub mod students;

pub mod courses;

pub mod fee_services;

pub mod subscriptions;

pub mod billing;

pub mod payments;

pub mod reports;

pub mod modules;

pub mod system;

pub use auth::configure_auth_routes;
pub use billing::configure_billing_routes;
pub use courses::configure_courses_routes;
pub use families::configure_families_routes;
pub use fee_services::configure_fee_services_routes;
pub use modules::configure_modules_routes;
pub use payments::configure_payments_routes;
pub use reports::configure_reports_routes;
pub use students::configure_students_routes;
pub use subscriptions::configure_subscriptions_routes;
pub use system::configure_system_routes;
pub use users::configure_user_routes;
