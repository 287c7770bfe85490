//! Banking API Library
//!
//! Owners, their bank accounts and the HTTP surface that manages them under
//! `/banking`.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![allow(elided_lifetimes_in_paths)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

// Core modules
pub mod common;
pub mod config;
pub mod db;
pub mod dto;
pub mod entities;
pub mod errors;
pub mod handlers;
pub mod iban;
pub mod mapping;
pub mod middleware_helpers;
pub mod migrator;
pub mod openapi;
pub mod repositories;
pub mod seed;
pub mod services;
pub mod tracing;

use axum::{routing::get, Router};
use sea_orm::DatabaseConnection;
use std::sync::Arc;

use repositories::UnitOfWork;
use services::{AccountService, OwnerService};

// App state definition
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DatabaseConnection>,
    pub config: config::AppConfig,
}

impl AppState {
    pub fn new(db: Arc<DatabaseConnection>, config: config::AppConfig) -> Self {
        Self { db, config }
    }

    /// Fresh change tracker over the shared pool; one per request.
    pub fn unit_of_work(&self) -> UnitOfWork {
        UnitOfWork::new(self.db.clone())
    }

    pub fn owner_service(&self) -> OwnerService {
        OwnerService::from_unit_of_work(&self.unit_of_work())
    }

    pub fn account_service(&self) -> AccountService {
        AccountService::from_unit_of_work(&self.unit_of_work())
    }
}

/// Full application router: health, `/banking`, OpenAPI docs, tracing and request ids.
///
/// CORS and compression are left to the binary since they depend on deployment.
pub fn app(state: AppState) -> Router {
    Router::<AppState>::new()
        .route("/health", get(handlers::health::health_check))
        .nest("/banking", handlers::banking_routes())
        .merge(openapi::swagger_ui())
        // HTTP tracing layer for consistent request/response telemetry
        .layer(crate::tracing::configure_http_tracing())
        // Ensure every request carries a request id for traceability
        .layer(axum::middleware::from_fn(
            middleware_helpers::request_id_middleware,
        ))
        .with_state(state)
}
