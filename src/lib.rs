//! Library crate for tictactoe-back, exposing modules for binaries and integration tests.

pub mod client;
pub mod config;
pub mod dao;
pub mod dto;
mod error;
pub mod game;
pub mod routes;
pub mod services;
pub mod state;

pub use error::{AppError, ServiceError};
