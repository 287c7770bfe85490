use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Banking API",
        version = "1.0.0",
        description = r#"
# Banking API

CRUD endpoints for bank account owners and their accounts.

## Owners

Owners carry a name, an email address and a birthdate (`yyyy-MM-dd`). They can be
looked up by id, by exact name or email, or by a birthdate range. Lookups by name
or email answer `409 Conflict` when more than one owner matches.

## Accounts

Every account belongs to one owner. Accounts opened without an IBAN (or with one
shorter than 8 characters) receive a generated placeholder starting with `DE`.
Supplied IBANs are stored without spaces and upper-cased.

## Error Handling

Failures use one body format:

```json
{
  "error": "Not Found",
  "message": "Not found: Owner 10000000-0000-0000-0000-000000000000 not found",
  "request_id": "6f1c...",
  "timestamp": "2024-01-01T00:00:00Z"
}
```
        "#,
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development")
    ),
    tags(
        (name = "owners", description = "Account owner endpoints"),
        (name = "accounts", description = "Bank account endpoints"),
        (name = "health", description = "Health check endpoints")
    ),
    paths(
        // Owners
        crate::handlers::owners::list_owners,
        crate::handlers::owners::get_owner,
        crate::handlers::owners::get_owner_by_name,
        crate::handlers::owners::get_owner_by_email,
        crate::handlers::owners::get_owners_by_birthdate,
        crate::handlers::owners::create_owner,
        crate::handlers::owners::update_owner,
        crate::handlers::owners::delete_owner,

        // Accounts
        crate::handlers::accounts::list_accounts_of_owner,
        crate::handlers::accounts::get_account,
        crate::handlers::accounts::get_account_by_iban,
        crate::handlers::accounts::create_account,
        crate::handlers::accounts::delete_account,

        crate::handlers::health::health_check,
    ),
    components(
        schemas(
            crate::dto::OwnerDto,
            crate::dto::AccountDto,
            crate::handlers::health::HealthResponse,
            crate::errors::ErrorResponse
        )
    )
)]
pub struct ApiDoc;

pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/swagger-ui")
        .url("/api-docs/openapi.json", ApiDoc::openapi())
        .config(utoipa_swagger_ui::Config::from("/api-docs/openapi.json").try_it_out_enabled(true))
}
