use std::sync::Arc;

use crate::repos::user_repo::UserRepo;
use crate::services::auth::token_service::TokenService;

#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<TokenService>,
    pub users: Arc<UserRepo>,
}

impl AppState {
    pub fn new(auth: Arc<TokenService>, users: Arc<UserRepo>) -> Self {
        Self { auth, users }
    }
}
