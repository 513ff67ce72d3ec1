//! Reusable OpenAPI response types for consistent API documentation.

use super::ErrorResponse;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error - the document store failed",
    content_type = "application/json",
    example = json!({
        "code": 2003,
        "error": "STORE_ERROR",
        "message": "Connection failed: server selection timeout"
    })
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Validation Error",
    content_type = "application/json",
    example = json!({
        "code": 1001,
        "error": "VALIDATION_ERROR",
        "message": "title: Validation error: length [{\"min\": Number(1), \"value\": String(\"\")}]",
        "details": {
            "title": [{
                "code": "length",
                "message": null,
                "params": {"min": 1, "value": ""}
            }]
        }
    })
)]
pub struct BadRequestValidationResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Malformed JSON or missing field",
    content_type = "application/json",
    example = json!({
        "code": 1003,
        "error": "INVALID_JSON",
        "message": "Failed to deserialize the JSON body into the target type: missing field `description` at line 1 column 15"
    })
)]
pub struct BadRequestJsonResponse(pub ErrorResponse);
