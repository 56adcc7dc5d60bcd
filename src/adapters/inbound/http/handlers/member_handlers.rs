use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde_json::Value;
use tracing::{error, warn};

use crate::{
    adapters::inbound::http::{
        dto::{
            CreateMemberDto, DeleteResponseDto, ErrorResponseDto, FamilyDto, MemberDto,
            SuccessResponseDto,
        },
        router::AppState,
    },
    domain::{
        errors::{MemberError, ValidationError},
        models::NewMember,
        value_objects::MemberId,
    },
};

/// Error half of every member handler result
pub type ApiError = (StatusCode, Json<ErrorResponseDto>);

/// Translate a domain error into a status code and JSON body
pub fn member_error_response(e: MemberError) -> ApiError {
    let status_code = StatusCode::from(e.clone());
    if status_code.is_server_error() {
        error!(error = %e, "Member operation failed");
    } else {
        warn!(error = %e, status = %status_code, "Member request rejected");
    }
    (status_code, Json(ErrorResponseDto::from_member_error(&e)))
}

/// Unparsable ids are reported exactly like absent ones
fn parse_member_id(raw: &str) -> Result<MemberId, ApiError> {
    MemberId::parse(raw).map_err(|_| {
        warn!(id = raw, "Member id is not an integer");
        (
            StatusCode::NOT_FOUND,
            Json(ErrorResponseDto::not_found("Member not found")),
        )
    })
}

/// Handle member listing
pub async fn get_all_members(
    State(app_state): State<AppState>,
) -> Result<Json<Vec<MemberDto>>, ApiError> {
    let members = app_state
        .family_service
        .get_all_members()
        .await
        .map_err(member_error_response)?;

    Ok(Json(members.into_iter().map(MemberDto::from).collect()))
}

/// Handle single member retrieval
pub async fn get_member(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MemberDto>, ApiError> {
    let member_id = parse_member_id(&id)?;

    let member = app_state
        .family_service
        .get_member(member_id)
        .await
        .map_err(member_error_response)?;

    Ok(Json(member.into()))
}

/// Handle member creation
pub async fn add_member(
    State(app_state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<SuccessResponseDto>), ApiError> {
    let Json(body) = payload.map_err(|rejection| {
        member_error_response(ValidationError::MalformedBody(rejection.body_text()).into())
    })?;

    let dto = CreateMemberDto::try_from(body)
        .map_err(|e| member_error_response(e.into()))?;

    let member = app_state
        .family_service
        .add_member(NewMember::from(dto))
        .await
        .map_err(member_error_response)?;

    let data = serde_json::to_value(MemberDto::from(member)).map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponseDto::internal_error(&e.to_string())),
        )
    })?;

    Ok((
        StatusCode::OK,
        Json(SuccessResponseDto::with_data(
            "Member added successfully",
            data,
        )),
    ))
}

/// Handle member deletion
pub async fn delete_member(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponseDto>, ApiError> {
    let member_id = parse_member_id(&id)?;

    app_state
        .family_service
        .delete_member(member_id)
        .await
        .map_err(member_error_response)?;

    Ok(Json(DeleteResponseDto { done: true }))
}

/// Handle family retrieval
pub async fn get_family(
    State(app_state): State<AppState>,
) -> Result<Json<FamilyDto>, ApiError> {
    let family = app_state
        .family_service
        .family()
        .await
        .map_err(member_error_response)?;

    Ok(Json(family.into()))
}
