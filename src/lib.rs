pub mod db;
pub mod dto;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod service;

use sqlx::{postgres::Postgres, Pool};

pub type PGPool = Pool<Postgres>;

/// Lifetime of tokens minted through `service::auth::jwt::create`, in seconds.
pub const ACCESS_TOKEN_EXP: usize = 60 * 60;
