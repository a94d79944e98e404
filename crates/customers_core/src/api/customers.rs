//! `/v1/customers` routes.
//!
//! | Method | Path | Success |
//! |---|---|---|
//! | GET | `/v1/customers/{id}` | 200 + customer JSON |
//! | POST | `/v1/customers` | 201 + customer JSON |
//! | PUT | `/v1/customers/{id}` | 200 + customer JSON |
//! | DELETE | `/v1/customers/{id}` | 204 |
//!
//! Failures: validation -> 400 JSON list, not found -> 404 text,
//! missing/unreadable body -> 400 text, storage -> 500 text.

use super::ApiResponse;
use crate::dto::CustomerInput;
use crate::model::customer::CustomerId;
use crate::repo::customer_repo::CustomerRepository;
use crate::service::customer_service::{CustomerService, CustomerServiceError};
use log::{error, warn};
use serde::Serialize;

const COLLECTION_PATH: &str = "/v1/customers";

const STATUS_OK: u16 = 200;
const STATUS_CREATED: u16 = 201;
const STATUS_NO_CONTENT: u16 = 204;
const STATUS_BAD_REQUEST: u16 = 400;
const STATUS_NOT_FOUND: u16 = 404;
const STATUS_METHOD_NOT_ALLOWED: u16 = 405;
const STATUS_INTERNAL_ERROR: u16 = 500;

const INVALID_BODY_MESSAGE: &str = "Request body must be a customer data object.";
const INTERNAL_ERROR_MESSAGE: &str = "An unexpected error occurred.";

enum Route {
    Collection,
    Item(CustomerId),
}

/// Dispatches one request to the matching customer operation.
///
/// `method` is matched case-insensitively; `body` is the raw request payload.
pub fn handle_request<R: CustomerRepository>(
    service: &CustomerService<R>,
    method: &str,
    path: &str,
    body: Option<&str>,
) -> ApiResponse {
    let route = match parse_route(path) {
        Ok(route) => route,
        Err(response) => return response,
    };

    match (method.to_ascii_uppercase().as_str(), route) {
        ("POST", Route::Collection) => create_customer(service, body),
        ("GET", Route::Item(id)) => get_customer(service, id),
        ("PUT", Route::Item(id)) => update_customer(service, id, body),
        ("DELETE", Route::Item(id)) => delete_customer(service, id),
        (other, _) => {
            warn!("event=api_request module=api status=error error_code=method_not_allowed method={other} path={path}");
            ApiResponse::text(
                STATUS_METHOD_NOT_ALLOWED,
                format!("Method {other} is not allowed for {path}."),
            )
        }
    }
}

/// `GET /v1/customers/{id}`
pub fn get_customer<R: CustomerRepository>(
    service: &CustomerService<R>,
    id: CustomerId,
) -> ApiResponse {
    match service.find_by_id(id) {
        Ok(dto) => json_response(STATUS_OK, &dto),
        Err(err) => error_response("customer_get", &err),
    }
}

/// `POST /v1/customers`
pub fn create_customer<R: CustomerRepository>(
    service: &CustomerService<R>,
    body: Option<&str>,
) -> ApiResponse {
    let input = match parse_input(body) {
        Ok(input) => input,
        Err(response) => return response,
    };

    match service.create(input.as_ref()) {
        Ok(dto) => json_response(STATUS_CREATED, &dto),
        Err(err) => error_response("customer_create", &err),
    }
}

/// `PUT /v1/customers/{id}`
pub fn update_customer<R: CustomerRepository>(
    service: &CustomerService<R>,
    id: CustomerId,
    body: Option<&str>,
) -> ApiResponse {
    let input = match parse_input(body) {
        Ok(input) => input,
        Err(response) => return response,
    };

    match service.update(id, input.as_ref()) {
        Ok(dto) => json_response(STATUS_OK, &dto),
        Err(err) => error_response("customer_update", &err),
    }
}

/// `DELETE /v1/customers/{id}`
pub fn delete_customer<R: CustomerRepository>(
    service: &CustomerService<R>,
    id: CustomerId,
) -> ApiResponse {
    match service.delete_by_id(id) {
        Ok(()) => ApiResponse::empty(STATUS_NO_CONTENT),
        Err(err) => error_response("customer_delete", &err),
    }
}

/// Maps a service error to its response and logs it.
pub fn error_response(event: &str, err: &CustomerServiceError) -> ApiResponse {
    match err {
        CustomerServiceError::Validation(failure) => {
            warn!("event={event} module=api status=error error_code=validation error={failure}");
            json_response(STATUS_BAD_REQUEST, failure.errors())
        }
        CustomerServiceError::NotFound { .. } => {
            warn!("event={event} module=api status=error error_code=not_found error={err}");
            ApiResponse::text(STATUS_NOT_FOUND, err.to_string())
        }
        CustomerServiceError::InvalidArgument(_) => {
            warn!("event={event} module=api status=error error_code=invalid_argument error={err}");
            ApiResponse::text(STATUS_BAD_REQUEST, INVALID_BODY_MESSAGE)
        }
        CustomerServiceError::Repo(_) | CustomerServiceError::InconsistentState(_) => {
            error!("event={event} module=api status=error error_code=internal error={err}");
            ApiResponse::text(STATUS_INTERNAL_ERROR, INTERNAL_ERROR_MESSAGE)
        }
    }
}

fn parse_route(path: &str) -> Result<Route, ApiResponse> {
    let trimmed = path.trim_end_matches('/');
    if trimmed == COLLECTION_PATH {
        return Ok(Route::Collection);
    }

    let Some(raw_id) = trimmed
        .strip_prefix(COLLECTION_PATH)
        .and_then(|rest| rest.strip_prefix('/'))
        .filter(|rest| !rest.is_empty() && !rest.contains('/'))
    else {
        warn!("event=api_request module=api status=error error_code=unknown_route path={path}");
        return Err(ApiResponse::text(
            STATUS_NOT_FOUND,
            format!("No route matches {path}."),
        ));
    };

    raw_id.parse::<CustomerId>().map(Route::Item).map_err(|_| {
        warn!("event=api_request module=api status=error error_code=invalid_id path={path}");
        ApiResponse::text(
            STATUS_BAD_REQUEST,
            format!("Customer id `{raw_id}` is not a number."),
        )
    })
}

/// Parses the request payload; blank and `null` bodies yield `None`.
fn parse_input(body: Option<&str>) -> Result<Option<CustomerInput>, ApiResponse> {
    let Some(raw) = body.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return Ok(None);
    };

    serde_json::from_str::<Option<CustomerInput>>(raw).map_err(|err| {
        warn!("event=api_request module=api status=error error_code=invalid_body error={err}");
        ApiResponse::text(STATUS_BAD_REQUEST, INVALID_BODY_MESSAGE)
    })
}

fn json_response<T: Serialize + ?Sized>(status: u16, value: &T) -> ApiResponse {
    match serde_json::to_string(value) {
        Ok(body) => ApiResponse::json(status, body),
        Err(err) => {
            error!("event=api_response module=api status=error error_code=serialize_failed error={err}");
            ApiResponse::text(STATUS_INTERNAL_ERROR, INTERNAL_ERROR_MESSAGE)
        }
    }
}
