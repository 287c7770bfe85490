use axum::{
    extract::{Path, Query, State},
    response::Response,
    Json,
};
use tracing::debug;
use uuid::Uuid;

use crate::{
    common::{short_id, DateRangeParams},
    dto::OwnerDto,
    AppState,
};

use super::common::{
    created_response, no_content_response, success_response, EmailQuery, HandlerResult,
    NameQuery,
};

/// Location of a single owner resource
pub fn owner_location(id: Uuid) -> String {
    format!("/banking/owners/{}", id)
}

#[utoipa::path(
    get,
    path = "/banking/owners",
    responses(
        (status = 200, description = "All owners", body = [OwnerDto])
    ),
    tag = "owners"
)]
pub async fn list_owners(State(state): State<AppState>) -> HandlerResult<Response> {
    debug!("GET owners");
    let owners = state.owner_service().list_owners().await?;
    Ok(success_response(owners))
}

#[utoipa::path(
    get,
    path = "/banking/owners/{id}",
    params(
        ("id" = Uuid, Path, description = "Owner ID")
    ),
    responses(
        (status = 200, description = "Owner fetched", body = OwnerDto),
        (status = 404, description = "Owner not found", body = crate::errors::ErrorResponse)
    ),
    tag = "owners"
)]
pub async fn get_owner(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> HandlerResult<Response> {
    debug!(owner = %short_id(&id), "GET owner");
    let owner = state.owner_service().get_owner(id).await?;
    Ok(success_response(owner))
}

#[utoipa::path(
    get,
    path = "/banking/owners/name",
    params(NameQuery),
    responses(
        (status = 200, description = "Owner with this exact name", body = OwnerDto),
        (status = 404, description = "No owner with this name", body = crate::errors::ErrorResponse),
        (status = 409, description = "Several owners share this name", body = crate::errors::ErrorResponse)
    ),
    tag = "owners"
)]
pub async fn get_owner_by_name(
    State(state): State<AppState>,
    Query(query): Query<NameQuery>,
) -> HandlerResult<Response> {
    debug!(name = %query.name, "GET owner by name");
    let owner = state.owner_service().get_owner_by_name(&query.name).await?;
    Ok(success_response(owner))
}

#[utoipa::path(
    get,
    path = "/banking/owners/email",
    params(EmailQuery),
    responses(
        (status = 200, description = "Owner with this exact email", body = OwnerDto),
        (status = 404, description = "No owner with this email", body = crate::errors::ErrorResponse),
        (status = 409, description = "Several owners share this email", body = crate::errors::ErrorResponse)
    ),
    tag = "owners"
)]
pub async fn get_owner_by_email(
    State(state): State<AppState>,
    Query(query): Query<EmailQuery>,
) -> HandlerResult<Response> {
    debug!(email = %query.email, "GET owner by email");
    let owner = state
        .owner_service()
        .get_owner_by_email(&query.email)
        .await?;
    Ok(success_response(owner))
}

#[utoipa::path(
    get,
    path = "/banking/owners/birthdate",
    params(DateRangeParams),
    responses(
        (status = 200, description = "Owners born within the range", body = [OwnerDto]),
        (status = 400, description = "Unparsable date", body = crate::errors::ErrorResponse)
    ),
    tag = "owners"
)]
pub async fn get_owners_by_birthdate(
    State(state): State<AppState>,
    Query(params): Query<DateRangeParams>,
) -> HandlerResult<Response> {
    debug!(from = %params.from, to = %params.to, "GET owners by birthdate");
    let (from, to) = params.to_date_range()?;
    let owners = state
        .owner_service()
        .get_owners_by_birthdate(from, to)
        .await?;
    Ok(success_response(owners))
}

#[utoipa::path(
    post,
    path = "/banking/owners",
    request_body = OwnerDto,
    responses(
        (status = 201, description = "Owner created", body = OwnerDto,
            headers(("Location" = String, description = "URI of the new owner"))),
        (status = 409, description = "Owner id already taken", body = crate::errors::ErrorResponse)
    ),
    tag = "owners"
)]
pub async fn create_owner(
    State(state): State<AppState>,
    Json(payload): Json<OwnerDto>,
) -> HandlerResult<Response> {
    debug!(owner = %short_id(&payload.id), name = %payload.name, "POST owner");
    let created = state.owner_service().create_owner(payload).await?;
    Ok(created_response(owner_location(created.id), created))
}

#[utoipa::path(
    put,
    path = "/banking/owners/{id}",
    request_body = OwnerDto,
    params(
        ("id" = Uuid, Path, description = "Owner ID, must equal the id in the body")
    ),
    responses(
        (status = 200, description = "Owner updated", body = OwnerDto),
        (status = 400, description = "Path and body ids differ", body = crate::errors::ErrorResponse),
        (status = 404, description = "Owner not found", body = crate::errors::ErrorResponse)
    ),
    tag = "owners"
)]
pub async fn update_owner(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<OwnerDto>,
) -> HandlerResult<Response> {
    debug!(owner = %short_id(&id), "PUT owner");
    let updated = state.owner_service().update_owner(id, payload).await?;
    Ok(success_response(updated))
}

#[utoipa::path(
    delete,
    path = "/banking/owners/{id}",
    params(
        ("id" = Uuid, Path, description = "Owner ID")
    ),
    responses(
        (status = 204, description = "Owner deleted"),
        (status = 404, description = "Owner not found", body = crate::errors::ErrorResponse)
    ),
    tag = "owners"
)]
pub async fn delete_owner(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> HandlerResult<Response> {
    debug!(owner = %short_id(&id), "DELETE owner");
    state.owner_service().delete_owner(id).await?;
    Ok(no_content_response())
}
