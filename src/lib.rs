//! People API: Person CRUD REST service backed by PostgreSQL.

pub mod config;
pub mod error;
pub mod handlers;
pub mod person;
pub mod routes;
pub mod state;
pub mod store;

pub use config::AppConfig;
pub use error::AppError;
pub use person::Person;
pub use routes::{app, common_routes, person_routes};
pub use state::AppState;
pub use store::{ensure_database_exists, ensure_person_table, MemStore, PersonStore, PgStore};
