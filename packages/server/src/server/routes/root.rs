use axum::response::Redirect;

/// Entry document of the bundled front end
pub const FRONT_END_ENTRY: &str = "/static/index.html";

/// `GET /` - 307 to the front end
pub async fn root_redirect_handler() -> Redirect {
    Redirect::temporary(FRONT_END_ENTRY)
}
