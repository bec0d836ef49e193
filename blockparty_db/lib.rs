pub mod uow;

mod connection;
mod models;
mod repository;

pub use connection::{
    DATABASE_ENV, DbPool, connect, establish_connection_pool, establish_test_connection_pool,
    run_migrations,
};
pub use repository::*;
