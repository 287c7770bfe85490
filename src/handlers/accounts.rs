use axum::{
    extract::{Path, Query, State},
    response::Response,
    Json,
};
use tracing::debug;
use uuid::Uuid;

use crate::{common::short_id, dto::AccountDto, iban::format_grouped, AppState};

use super::common::{
    created_response, no_content_response, success_response, HandlerResult, IbanQuery,
};

/// Location of a single account resource
pub fn account_location(id: Uuid) -> String {
    format!("/banking/accounts/{}", id)
}

#[utoipa::path(
    get,
    path = "/banking/owners/{ownerId}/accounts",
    params(
        ("ownerId" = Uuid, Path, description = "Owner ID")
    ),
    responses(
        (status = 200, description = "Accounts held by the owner", body = [AccountDto])
    ),
    tag = "accounts"
)]
pub async fn list_accounts_of_owner(
    State(state): State<AppState>,
    Path(owner_id): Path<Uuid>,
) -> HandlerResult<Response> {
    debug!(owner = %short_id(&owner_id), "GET accounts of owner");
    let accounts = state
        .account_service()
        .list_accounts_of_owner(owner_id)
        .await?;
    Ok(success_response(accounts))
}

#[utoipa::path(
    get,
    path = "/banking/accounts/{id}",
    params(
        ("id" = Uuid, Path, description = "Account ID")
    ),
    responses(
        (status = 200, description = "Account fetched", body = AccountDto),
        (status = 404, description = "Account not found", body = crate::errors::ErrorResponse)
    ),
    tag = "accounts"
)]
pub async fn get_account(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> HandlerResult<Response> {
    debug!(account = %short_id(&id), "GET account");
    let account = state.account_service().get_account(id).await?;
    Ok(success_response(account))
}

#[utoipa::path(
    get,
    path = "/banking/accounts/iban",
    params(IbanQuery),
    responses(
        (status = 200, description = "Account holding this IBAN", body = AccountDto),
        (status = 404, description = "No account with this IBAN", body = crate::errors::ErrorResponse)
    ),
    tag = "accounts"
)]
pub async fn get_account_by_iban(
    State(state): State<AppState>,
    Query(query): Query<IbanQuery>,
) -> HandlerResult<Response> {
    debug!(iban = %format_grouped(&query.iban), "GET account by IBAN");
    let account = state
        .account_service()
        .get_account_by_iban(&query.iban)
        .await?;
    Ok(success_response(account))
}

#[utoipa::path(
    post,
    path = "/banking/owners/{ownerId}/accounts",
    request_body = AccountDto,
    params(
        ("ownerId" = Uuid, Path, description = "Owner the account is opened for")
    ),
    responses(
        (status = 201, description = "Account created", body = AccountDto,
            headers(("Location" = String, description = "URI of the new account"))),
        (status = 400, description = "Owner does not exist", body = crate::errors::ErrorResponse),
        (status = 409, description = "Account id already taken", body = crate::errors::ErrorResponse)
    ),
    tag = "accounts"
)]
pub async fn create_account(
    State(state): State<AppState>,
    Path(owner_id): Path<Uuid>,
    Json(payload): Json<AccountDto>,
) -> HandlerResult<Response> {
    debug!(
        owner = %short_id(&owner_id),
        account = %short_id(&payload.id),
        iban = %format_grouped(&payload.iban),
        "POST account"
    );
    let created = state
        .account_service()
        .create_account(owner_id, payload)
        .await?;
    Ok(created_response(account_location(created.id), created))
}

#[utoipa::path(
    delete,
    path = "/banking/owners/{ownerId}/accounts/{id}",
    params(
        ("ownerId" = Uuid, Path, description = "Owner ID, only logged"),
        ("id" = Uuid, Path, description = "Account ID")
    ),
    responses(
        (status = 204, description = "Account deleted"),
        (status = 404, description = "Account not found", body = crate::errors::ErrorResponse)
    ),
    tag = "accounts"
)]
pub async fn delete_account(
    State(state): State<AppState>,
    Path((owner_id, id)): Path<(Uuid, Uuid)>,
) -> HandlerResult<Response> {
    debug!(owner = %short_id(&owner_id), account = %short_id(&id), "DELETE account");
    state.account_service().delete_account(owner_id, id).await?;
    Ok(no_content_response())
}
