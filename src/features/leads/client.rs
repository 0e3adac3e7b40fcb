//! Client helpers for the lead endpoints. All calls are bearer-authenticated
//! and unwrap the `{success, message, data}` envelope before returning.

use crate::{
    app_lib::{ApiResponse, AppError, delete_json, get_json, post_json, put_json},
    features::leads::types::{Lead, LeadDraft, LeadModification, LeadStatus},
};

/// Fetches every lead visible to the current user.
pub async fn list_leads() -> Result<Vec<Lead>, AppError> {
    let response: ApiResponse<Vec<Lead>> = get_json("/api/leads").await?;
    response.into_result()
}

/// Fetches leads matching a status via the backend filter endpoint.
pub async fn filter_by_status(status: LeadStatus) -> Result<Vec<Lead>, AppError> {
    let response: ApiResponse<Vec<Lead>> =
        get_json(&format!("/api/leads/filter/status?status={status}")).await?;
    response.into_result()
}

pub async fn get_lead(id: u64) -> Result<Lead, AppError> {
    let response: ApiResponse<Lead> = get_json(&format!("/api/leads/{id}")).await?;
    response.into_result()
}

pub async fn create_lead(draft: &LeadDraft) -> Result<Lead, AppError> {
    let response: ApiResponse<Lead> = post_json("/api/leads", draft).await?;
    response.into_result()
}

pub async fn update_lead(id: u64, draft: &LeadDraft) -> Result<Lead, AppError> {
    let response: ApiResponse<Lead> = put_json(&format!("/api/leads/{id}"), draft).await?;
    response.into_result()
}

pub async fn delete_lead(id: u64) -> Result<String, AppError> {
    let response: ApiResponse<String> = delete_json(&format!("/api/leads/{id}")).await?;
    response.into_result()
}

/// Fetches the field-change history for a lead.
pub async fn modification_history(id: u64) -> Result<Vec<LeadModification>, AppError> {
    let response: ApiResponse<Vec<LeadModification>> =
        get_json(&format!("/api/leads/{id}/modifications")).await?;
    response.into_result()
}
