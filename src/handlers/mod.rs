pub mod accounts;
pub mod common;
pub mod health;
pub mod owners;

use axum::{
    routing::{delete, get},
    Router,
};

use crate::AppState;

/// Owner and account routes, relative to `/banking`.
///
/// Static segments (`name`, `email`, `birthdate`, `iban`) take precedence over the
/// `:id` captures next to them.
pub fn banking_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/owners",
            get(owners::list_owners).post(owners::create_owner),
        )
        .route("/owners/name", get(owners::get_owner_by_name))
        .route("/owners/email", get(owners::get_owner_by_email))
        .route("/owners/birthdate", get(owners::get_owners_by_birthdate))
        .route(
            "/owners/:id",
            get(owners::get_owner)
                .put(owners::update_owner)
                .delete(owners::delete_owner),
        )
        .route(
            "/owners/:id/accounts",
            get(accounts::list_accounts_of_owner).post(accounts::create_account),
        )
        .route(
            "/owners/:id/accounts/:account_id",
            delete(accounts::delete_account),
        )
        .route("/accounts/iban", get(accounts::get_account_by_iban))
        .route("/accounts/:id", get(accounts::get_account))
}
