/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 * - Clone 前提で持つ (内部は Arc/Clone cheap)
 */
use std::sync::Arc;

use crate::config::ProtectedRoutes;
use crate::services::{forward::DownstreamForwarder, token_validator::TokenValidator};

#[derive(Clone)]
pub struct AppState {
    pub validator: Arc<TokenValidator>,
    pub forwarder: Arc<DownstreamForwarder>,
    pub protected: Arc<ProtectedRoutes>,
}

impl AppState {
    pub fn new(
        validator: Arc<TokenValidator>,
        forwarder: Arc<DownstreamForwarder>,
        protected: Arc<ProtectedRoutes>,
    ) -> Self {
        Self {
            validator,
            forwarder,
            protected,
        }
    }
}
