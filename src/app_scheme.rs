use std::{fs, path::Path};

use tauri::http::{header::CONTENT_TYPE, HeaderValue, Response, StatusCode};

use crate::{append_desktop_log, APP_INDEX_FILE};

/// Serves one request on the privileged `app://` scheme from the resolved
/// packaged front-end directory. Failures stay per-request; nothing here can
/// take the shell down.
pub(crate) fn handle_app_request(webui_dir: Option<&Path>, request_path: &str) -> Response<Vec<u8>> {
    let Some(webui_dir) = webui_dir else {
        append_desktop_log("app scheme request failed: packaged front-end dir is unresolved");
        return plain_response(StatusCode::INTERNAL_SERVER_ERROR, "packaged app unavailable");
    };

    let Some(relative_path) = sanitize_request_path(request_path) else {
        return plain_response(StatusCode::NOT_FOUND, "not found");
    };

    let file_path = webui_dir.join(&relative_path);
    match fs::read(&file_path) {
        Ok(body) => {
            let mut response = Response::new(body);
            response.headers_mut().insert(
                CONTENT_TYPE,
                HeaderValue::from_static(content_type_for_path(&relative_path)),
            );
            response
        }
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
            plain_response(StatusCode::NOT_FOUND, "not found")
        }
        Err(error) => {
            append_desktop_log(&format!(
                "app scheme failed to read {}: {}",
                file_path.display(),
                error
            ));
            plain_response(StatusCode::INTERNAL_SERVER_ERROR, "read failure")
        }
    }
}

/// Normalizes the request path to a relative file path under the packaged
/// dir; anything that could escape it is rejected.
pub(crate) fn sanitize_request_path(raw: &str) -> Option<String> {
    let trimmed = raw.trim_start_matches('/');
    if trimmed.is_empty() {
        return Some(APP_INDEX_FILE.to_string());
    }
    if trimmed.contains('\\') {
        return None;
    }
    for component in trimmed.split('/') {
        if component.is_empty() || component == "." || component == ".." {
            return None;
        }
    }
    Some(trimmed.to_string())
}

pub(crate) fn content_type_for_path(path: &str) -> &'static str {
    let extension = path.rsplit('.').next().unwrap_or_default();
    match extension {
        "html" | "htm" => "text/html",
        "js" | "mjs" => "text/javascript",
        "css" => "text/css",
        "json" | "map" => "application/json",
        "svg" => "image/svg+xml",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "ico" => "image/x-icon",
        "wasm" => "application/wasm",
        "woff" => "font/woff",
        "woff2" => "font/woff2",
        "txt" => "text/plain",
        _ => "application/octet-stream",
    }
}

fn plain_response(status: StatusCode, message: &str) -> Response<Vec<u8>> {
    let mut response = Response::new(message.as_bytes().to_vec());
    *response.status_mut() = status;
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static("text/plain"));
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_request_path_defaults_to_the_index_document() {
        assert_eq!(sanitize_request_path("/"), Some("index.html".to_string()));
        assert_eq!(sanitize_request_path(""), Some("index.html".to_string()));
    }

    #[test]
    fn sanitize_request_path_keeps_nested_files() {
        assert_eq!(
            sanitize_request_path("/assets/main.js"),
            Some("assets/main.js".to_string())
        );
    }

    #[test]
    fn sanitize_request_path_rejects_traversal() {
        assert_eq!(sanitize_request_path("/../secrets"), None);
        assert_eq!(sanitize_request_path("/a/../../b"), None);
        assert_eq!(sanitize_request_path("/a//b"), None);
        assert_eq!(sanitize_request_path("/a\\b"), None);
    }

    #[test]
    fn content_type_covers_the_packaged_asset_kinds() {
        assert_eq!(content_type_for_path("index.html"), "text/html");
        assert_eq!(content_type_for_path("assets/app.js"), "text/javascript");
        assert_eq!(content_type_for_path("style.css"), "text/css");
        assert_eq!(content_type_for_path("icon.svg"), "image/svg+xml");
        assert_eq!(content_type_for_path("no-extension"), "application/octet-stream");
    }

    #[test]
    fn handle_app_request_serves_existing_files_with_content_type() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join("index.html"), "<html></html>").expect("seed index");

        let response = handle_app_request(Some(dir.path()), "/index.html");
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(CONTENT_TYPE).expect("content type"),
            "text/html"
        );
        assert_eq!(response.body(), b"<html></html>");
    }

    #[test]
    fn handle_app_request_maps_missing_files_to_404() {
        let dir = tempfile::tempdir().expect("tempdir");
        let response = handle_app_request(Some(dir.path()), "/missing.js");
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn handle_app_request_without_webui_dir_is_a_500() {
        let response = handle_app_request(None, "/index.html");
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
