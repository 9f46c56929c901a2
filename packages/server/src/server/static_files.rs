use axum::{
    extract::Path,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use rust_embed::RustEmbed;

// Embed the front end at compile time
#[derive(RustEmbed)]
#[folder = "static"]
pub struct FrontEndAssets;

/// Serve a front-end asset from `/static/*path`
pub async fn serve_static(Path(path): Path<String>) -> Response {
    serve_embedded::<FrontEndAssets>(&path)
}

/// Look up an embedded file; directory paths resolve to their index.html
fn serve_embedded<E: RustEmbed>(path: &str) -> Response {
    let path = path.trim_start_matches('/');
    let path = if path.is_empty() || path.ends_with('/') {
        format!("{}index.html", path)
    } else {
        path.to_string()
    };

    match E::get(&path) {
        Some(content) => {
            let mime = mime_guess::from_path(&path).first_or_octet_stream();
            (
                [
                    (header::CONTENT_TYPE, mime.as_ref().to_string()),
                    (header::CACHE_CONTROL, "no-cache".to_string()),
                ],
                content.data,
            )
                .into_response()
        }
        None => (StatusCode::NOT_FOUND, "404 Not Found").into_response(),
    }
}
