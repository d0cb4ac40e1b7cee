use crate::routes::imports::*;

// filename-to-path join under the configured images directory
#[axum_macros::debug_handler]
pub async fn article_image(
    Extension(conf): Extension<Conf>,
    Path(path): Path<String>,
) -> ApiResult<Response> {
    let path = std::path::PathBuf::from(&conf.images_dir).join(path);

    match std::fs::read(&path) {
        Err(_e) => Ok(IntoResponse::into_response(StatusCode::NOT_FOUND)),
        Ok(file) => {
            let modified = std::fs::metadata(&path)
                .and_then(|meta| meta.modified())
                .unwrap_or(std::time::SystemTime::UNIX_EPOCH);
            Ok(file_response(file, &path, modified))
        }
    }
}

pub fn file_response(
    contents: impl Into<axum::body::Full<bytes::Bytes>>,
    path: impl AsRef<std::path::Path>,
    modified: std::time::SystemTime,
) -> axum::response::Response {
    let last_modified = httpdate::fmt_http_date(modified);
    let mime_type = mime_guess::from_path(path).first_or_text_plain();
    axum::http::Response::builder()
        .status(axum::http::StatusCode::OK)
        .header(
            axum::http::header::CONTENT_TYPE,
            axum::http::HeaderValue::from_str(mime_type.as_ref()).unwrap(),
        )
        .header(axum::http::header::LAST_MODIFIED, last_modified)
        .body(axum::body::boxed(contents.into()))
        .unwrap_or_else(|_| axum::http::StatusCode::INTERNAL_SERVER_ERROR.into_response())
}
