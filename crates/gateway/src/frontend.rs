//! Embedded web UI.
//!
//! `frontend/` is compiled into the binary with `include_str!`. The page
//! never parses reply markup itself: it renders the segments the API
//! returns for each message.

use axum::{
    Router,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};

/// One embedded file and the route it is served on.
struct Asset {
    path: &'static str,
    content_type: &'static str,
    body: &'static str,
}

const ASSETS: &[Asset] = &[
    Asset {
        path: "/",
        content_type: "text/html; charset=utf-8",
        body: include_str!("../../../frontend/index.html"),
    },
    Asset {
        path: "/static/style.css",
        content_type: "text/css; charset=utf-8",
        body: include_str!("../../../frontend/style.css"),
    },
    Asset {
        path: "/static/app.js",
        content_type: "application/javascript; charset=utf-8",
        body: include_str!("../../../frontend/app.js"),
    },
];

/// Router serving every embedded asset.
pub fn frontend_router() -> Router {
    ASSETS.iter().fold(Router::new(), |router, asset| {
        router.route(asset.path, get(move || async move { serve(asset) }))
    })
}

fn serve(asset: &'static Asset) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, asset.content_type)],
        asset.body,
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    #[tokio::test]
    async fn serves_each_asset_with_its_content_type() {
        let cases = [
            ("/", "text/html", &["<!DOCTYPE html>", "DSA Mentor", "/static/app.js"][..]),
            ("/static/style.css", "text/css", &[".code-block"][..]),
            ("/static/app.js", "javascript", &["/api/sessions", "code_block"][..]),
        ];

        for (uri, content_type, needles) in cases {
            let response = frontend_router()
                .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK, "{uri}");

            let actual = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
            assert!(actual.contains(content_type), "{uri}: {actual}");

            let body = response.into_body().collect().await.unwrap().to_bytes();
            let text = String::from_utf8_lossy(&body);
            for needle in needles {
                assert!(text.contains(needle), "{uri} should contain {needle}");
            }
        }
    }
}
