// Preview server: every GET is answered with the app shell, the way a
// history-mode deployment falls back to index.html.

use std::sync::Arc;

use anyhow::Result;
use axum::{
    extract::{Query, State},
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Json, Response},
    routing::get,
    Router,
};
use colored::Colorize;
use maud::{html, Markup, PreEscaped, DOCTYPE};
use serde::Deserialize;
use spa_router::{Resolution, RouteTable};
use tracing::{debug, info};

/// Endpoint returning the resolution of `?path=` as JSON
///
/// Reserved by the preview server: a location equal to it never reaches the
/// shell. It spans two segments so the one-segment demo route never hits it.
pub const ROUTE_ENDPOINT: &str = "/__spa-router/route";

#[derive(Clone)]
struct AppState {
    table: Arc<RouteTable>,
}

#[derive(Debug, Deserialize)]
struct RouteQuery {
    path: String,
}

pub fn build_app(table: RouteTable) -> Router {
    let state = AppState {
        table: Arc::new(table),
    };

    Router::new()
        .route(ROUTE_ENDPOINT, get(route_handler))
        .fallback(shell_handler)
        .with_state(state)
}

/// Start the preview server
pub async fn start_preview_server(table: RouteTable, port: u16) -> Result<()> {
    println!();
    println!("{}", "Starting spa-router preview server...".green().bold());
    println!();
    println!("  {} {}", "Mode:".cyan(), table.mode());
    println!("  {} {}", "Base:".cyan(), table.base());
    for route in table.routes() {
        println!("  {} {} {}", "→".green(), route.pattern, route.name);
    }

    let app = build_app(table);

    let addr = format!("127.0.0.1:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    println!();
    println!("  {} {}", "URL:".cyan(), format!("http://{}", addr).bold());
    println!("  {} Press Ctrl+C to stop", "ℹ".cyan());
    println!();
    info!(%addr, "preview server listening");

    axum::serve(listener, app).await?;

    Ok(())
}

async fn shell_handler(State(state): State<AppState>, uri: Uri) -> Response {
    let location = uri.path_and_query().map(|pq| pq.as_str()).unwrap_or("/");

    match state.table.resolve_location(location) {
        Ok(resolution) => {
            debug!(%location, view = %resolution.view, "serving shell");
            (StatusCode::OK, Html(render_shell(Some(&resolution), location).into_string()))
                .into_response()
        }
        Err(e) => {
            debug!(%location, error = %e, "serving not-found shell");
            (StatusCode::NOT_FOUND, Html(render_shell(None, location).into_string()))
                .into_response()
        }
    }
}

async fn route_handler(
    State(state): State<AppState>,
    Query(query): Query<RouteQuery>,
) -> Response {
    match state.table.resolve_location(&query.path) {
        Ok(resolution) => Json(resolution).into_response(),
        Err(e) => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "path": query.path, "error": e.to_string() })),
        )
            .into_response(),
    }
}

/// App shell with the resolution embedded for the client to pick up
fn render_shell(resolution: Option<&Resolution>, location: &str) -> Markup {
    // `</` inside a script element would close it early
    let state_json = serde_json::to_string(&resolution)
        .unwrap_or_else(|_| "null".to_string())
        .replace("</", "<\\/");

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                title {
                    @match resolution {
                        Some(r) => { (r.component) }
                        None => { "Not found" }
                    }
                }
            }
            body {
                div id="app"
                    data-view=[resolution.map(|r| r.view.as_str())]
                    data-component=[resolution.map(|r| r.component.as_str())] {
                    @match resolution {
                        Some(r) => {
                            h1 { (r.component) }
                            @if let Some(initial) = r.initial() {
                                p class="initial" { (initial) }
                            }
                        }
                        None => {
                            h1 { "Not found" }
                            p { code { (location) } }
                        }
                    }
                }
                script type="application/json" id="route-state" { (PreEscaped(state_json)) }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use pretty_assertions::assert_eq;
    use tower::ServiceExt;

    async fn get_body(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_shell_for_matched_path() {
        let (status, body) = get_body(build_app(RouteTable::demo()), "/hello").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(r#"data-view="demo""#));
        assert!(body.contains(r#"<p class="initial">hello</p>"#));
    }

    #[tokio::test]
    async fn test_shell_for_root() {
        let (status, body) = get_body(build_app(RouteTable::demo()), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(!body.contains(r#"class="initial""#));
    }

    #[tokio::test]
    async fn test_shell_for_unmatched_path() {
        let (status, body) = get_body(build_app(RouteTable::demo()), "/a/b").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("Not found"));
        assert!(body.contains(r#"<script type="application/json" id="route-state">null</script>"#));
    }

    #[tokio::test]
    async fn test_route_endpoint() {
        let (status, body) =
            get_body(build_app(RouteTable::demo()), "/__spa-router/route?path=%2Fhello%3Fx%3D1").await;
        assert_eq!(status, StatusCode::OK);

        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value["view"], "demo");
        assert_eq!(value["params"]["initial"], "hello");
        assert_eq!(value["query"]["x"], "1");

        let (status, _) = get_body(build_app(RouteTable::demo()), "/__spa-router/route?path=/a/b").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_demo_path_named_like_endpoint_gets_shell() {
        let (status, body) = get_body(build_app(RouteTable::demo()), "/__route").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(r#"<p class="initial">__route</p>"#));
    }

    #[test]
    fn test_shell_escapes_script_close() {
        let resolution = RouteTable::demo().resolve("/%3C%2Fscript%3E").unwrap();
        let markup = render_shell(Some(&resolution), "/").into_string();
        assert!(markup.contains(r#""initial":"<\/script>""#));
        assert!(markup.contains("<p class=\"initial\">&lt;/script&gt;</p>"));
    }
}
