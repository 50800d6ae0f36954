//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument.

pub mod activity_repo;
pub mod category_repo;
pub mod dashboard_repo;
pub mod product_repo;
pub mod sale_repo;
pub mod session_repo;
pub mod stock_repo;
pub mod user_repo;
pub mod vehicle_type_repo;

pub use activity_repo::ActivityLogRepo;
pub use category_repo::CategoryRepo;
pub use dashboard_repo::DashboardRepo;
pub use product_repo::ProductRepo;
pub use sale_repo::{SaleDetailRepo, SaleRepo};
pub use session_repo::SessionRepo;
pub use stock_repo::StockMovementRepo;
pub use user_repo::UserRepo;
pub use vehicle_type_repo::VehicleTypeRepo;
