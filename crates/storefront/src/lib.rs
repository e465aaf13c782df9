//! VoltCart Storefront library.
//!
//! This crate provides the storefront functionality as a library,
//! allowing it to be tested and reused.
//!
//! # Modules
//!
//! - [`catalog`] - In-memory product catalog and the listing pipeline
//! - [`auth_flow`] - Sign-in / sign-up / password-reset step machine
//! - [`services`] - Session cart, account-backed session provider, SMS gateway
//! - [`routes`] - axum handlers and the application router

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod auth_flow;
pub mod catalog;
pub mod config;
pub mod db;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
