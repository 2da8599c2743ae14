//! Preview server
//!
//! Pages are rendered on every request from the current post files, so the
//! preview never needs a separate build step. Anything that is not a page is
//! served from the static directory.

use anyhow::Result;
use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    response::{Html, IntoResponse, Response},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::content::{FrontMatterIndex, PostSource};
use crate::generator::render_route;
use crate::Site;

/// Server state
struct ServerState {
    site: Site,
    posts: FrontMatterIndex,
}

/// Start the preview server
pub async fn start(site: &Site, ip: &str, port: u16) -> Result<()> {
    let state = Arc::new(ServerState {
        site: site.clone(),
        posts: site.post_source(),
    });

    let app = Router::new()
        .fallback(fallback_handler)
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    println!("Server running at http://{}:{}", ip, port);
    println!("Press Ctrl+C to stop.");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Render the page for a path, or `None` when no page serves it
async fn render_page(state: Arc<ServerState>, path: String) -> Result<Option<String>> {
    tokio::task::spawn_blocking(move || -> Result<Option<String>> {
        let posts = state.posts.summaries()?;
        Ok(render_route(&state.site.config, &posts, &path))
    })
    .await?
}

/// Serve pages, then fall back to static assets
async fn fallback_handler(
    State(state): State<Arc<ServerState>>,
    request: Request<Body>,
) -> Response {
    let path = request.uri().path().to_string();

    match render_page(state.clone(), path.clone()).await {
        Ok(Some(html)) => return Html(html).into_response(),
        Ok(None) => {}
        Err(e) => {
            tracing::error!("Failed to render {}: {}", path, e);
            return (StatusCode::INTERNAL_SERVER_ERROR, "Render error").into_response();
        }
    }

    let mut service = ServeDir::new(&state.site.static_dir);
    match service.try_call(request).await {
        Ok(response) => response.into_response(),
        Err(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Server error").into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn state_for(dir: &std::path::Path) -> Arc<ServerState> {
        let site = Site::new(dir).unwrap();
        Arc::new(ServerState {
            posts: site.post_source(),
            site,
        })
    }

    #[tokio::test]
    async fn test_render_page_reads_posts_per_request() {
        let dir = tempfile::tempdir().unwrap();
        let state = state_for(dir.path());

        let html = render_page(state.clone(), "/blog".to_string())
            .await
            .unwrap()
            .unwrap();
        assert!(!html.contains("Embracing Vim"));

        fs::create_dir_all(dir.path().join("posts")).unwrap();
        fs::write(
            dir.path().join("posts/vim.mdx"),
            "---\ntitle: Embracing Vim\npublishedAt: 2024-04-09\n---\n",
        )
        .unwrap();

        let html = render_page(state, "/blog/".to_string())
            .await
            .unwrap()
            .unwrap();
        assert!(html.contains("Embracing Vim"));
    }

    #[tokio::test]
    async fn test_unknown_path_is_not_a_page() {
        let dir = tempfile::tempdir().unwrap();
        let state = state_for(dir.path());
        let page = render_page(state, "/times-wide.png".to_string()).await.unwrap();
        assert!(page.is_none());
    }
}
