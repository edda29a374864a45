use axum::extract::FromRequest;
use serde::Deserialize;
use crate::errors::QuipsterError;

/// `Json` whose rejections render as the usual `{"error": ...}` body.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(QuipsterError))]
pub struct ApiJson<T>(pub T);

/// The caller behind a verified bearer token.
#[derive(Debug, Clone)]
pub struct AuthUser(pub String);

pub const DEFAULT_PAGE_SIZE: usize = 20;
pub const MAX_PAGE_SIZE: usize = 100;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

impl ListQuery {
    pub fn limit(&self) -> usize {
        self.limit.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE)
    }

    pub fn offset(&self) -> usize {
        self.offset.unwrap_or(0)
    }
}
