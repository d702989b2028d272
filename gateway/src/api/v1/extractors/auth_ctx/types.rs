/// Identity attached to a request by the auth middleware.
///
/// Lives in the request's extensions only; never shared across requests.
#[derive(Clone, Debug)]
pub struct AuthCtx {
    pub user: String,
}

impl AuthCtx {
    pub fn new(user: String) -> Self {
        Self { user }
    }
}
