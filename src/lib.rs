//! Signup and login pages over a user store, with bcrypt-hashed passwords.

pub mod app;
pub mod auth;
pub mod config;
pub mod state;
pub mod views;
