use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::candidate::CandidateStatus;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub total: i64,
    pub page: i64,
    pub limit: i64,
    pub total_pages: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCandidatePayload {
    #[validate(length(min = 2, max = 100, message = "Name must be between 2 and 100 characters"))]
    pub name: String,
    #[validate(length(
        min = 2,
        max = 100,
        message = "Position must be between 2 and 100 characters"
    ))]
    pub position: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 1, message = "Phone is required"))]
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(
        min = 10,
        max = 2000,
        message = "Description must be between 10 and 2000 characters"
    ))]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<CandidateStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skill_ids: Option<Vec<i64>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct UpdateStatusRequest {
    pub status: CandidateStatus,
}
