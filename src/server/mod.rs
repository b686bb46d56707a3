//! Blog front-end server
//!
//! Three routes: the listing page, the article page, and the JSON endpoint
//! backing the "load more" control. Every upstream failure degrades to an
//! empty listing or a loading placeholder; no route surfaces an error page
//! for a content API hiccup.

use anyhow::Result;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Html,
    routing::get,
    Json, Router,
};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::Deserialize;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::trace::TraceLayer;

use crate::cms::{CmsClient, PostSource};
use crate::config::SiteConfig;
use crate::content::{reading_time, Feed, Post, PostPage};
use crate::helpers;
use crate::templates::{IndexEntry, SectionView, SiteData, TemplateRenderer};
use crate::Starlog;

/// Shared server state
///
/// `rendered` is the render-on-demand map: article pages are rendered on
/// their first request and reused afterwards.
pub struct AppState {
    pub config: SiteConfig,
    pub source: Arc<dyn PostSource>,
    pub renderer: TemplateRenderer,
    pub rendered: RwLock<HashMap<String, String>>,
}

/// Start the blog server
pub async fn start(app: &Starlog, ip: &str, port: u16) -> Result<()> {
    let state = Arc::new(AppState {
        config: app.config.clone(),
        source: Arc::new(CmsClient::new(app.config.api.clone())),
        renderer: TemplateRenderer::new()?,
        rendered: RwLock::new(HashMap::new()),
    });

    prerender_first_post(&state).await;

    let router = Router::new()
        .route("/", get(index))
        .route("/post/:slug", get(show_post))
        .route("/api/posts", get(api_posts))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    println!("Server running at http://{}:{}", ip, port);
    println!("Press Ctrl+C to stop.");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

/// Pre-resolve one slug at startup and render it into the page map
///
/// Failures are logged and ignored: any slug that was not pre-rendered is
/// simply rendered on its first request instead.
async fn prerender_first_post(state: &Arc<AppState>) {
    let page = match state
        .source
        .list_posts(state.config.api.prefetch_page_size)
        .await
    {
        Ok(page) => page,
        Err(err) => {
            tracing::warn!("slug pre-resolution failed: {}", err);
            return;
        }
    };

    let Some(slug) = page.results.first().map(|post| post.uid.clone()) else {
        return;
    };

    match state.source.get_by_slug(&slug).await {
        Ok(Some(post)) => match render_post(state, Some(&post)) {
            Ok(html) => {
                state.rendered.write().await.insert(slug.clone(), html);
                tracing::info!("pre-rendered /post/{}", slug);
            }
            Err(err) => tracing::warn!("pre-rendering /post/{} failed: {}", slug, err),
        },
        Ok(None) => tracing::warn!("pre-resolved slug {} not found upstream", slug),
        Err(err) => tracing::warn!("pre-fetching /post/{} failed: {}", slug, err),
    }
}

/// GET / - the article listing
async fn index(State(state): State<Arc<AppState>>) -> Result<Html<String>, StatusCode> {
    let page = match state.source.list_posts(state.config.api.page_size).await {
        Ok(page) => page,
        Err(err) => {
            tracing::warn!("listing fetch failed, rendering empty list: {}", err);
            PostPage::empty()
        }
    };

    let feed = Feed::from_page(page);
    render_index(&state, &feed).map(Html).map_err(render_failure)
}

/// GET /post/{slug} - one article, rendered on demand and then reused
async fn show_post(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<Html<String>, StatusCode> {
    if let Some(html) = state.rendered.read().await.get(&slug) {
        return Ok(Html(html.clone()));
    }

    let post = match state.source.get_by_slug(&slug).await {
        Ok(post) => post,
        Err(err) => {
            tracing::warn!("fetching post {} failed: {}", slug, err);
            None
        }
    };

    let html = render_post(&state, post.as_ref()).map_err(render_failure)?;

    // Only successful renders are reused; a placeholder stays retryable
    if post.is_some() {
        state.rendered.write().await.insert(slug, html.clone());
    }

    Ok(Html(html))
}

#[derive(Debug, Deserialize)]
struct PostsQuery {
    cursor: Option<String>,
}

/// GET /api/posts - listing pages for the "load more" control
///
/// Returns the same JSON shape the server consumes from the content API,
/// with cursors rewritten to point back at this endpoint so the browser
/// call stays same-origin.
async fn api_posts(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PostsQuery>,
) -> Result<Json<PostPage>, StatusCode> {
    let fetched = match &query.cursor {
        Some(cursor) => state.source.fetch_page(cursor).await,
        None => state.source.list_posts(state.config.api.page_size).await,
    };

    match fetched {
        Ok(mut page) => {
            page.next_page = api_cursor_href(page.next_page.as_deref());
            Ok(Json(page))
        }
        Err(err) => {
            tracing::warn!("listing page fetch failed: {}", err);
            Err(StatusCode::BAD_GATEWAY)
        }
    }
}

/// Rewrite an upstream cursor URL into a same-origin API link
fn api_cursor_href(next_page: Option<&str>) -> Option<String> {
    next_page.map(|cursor| {
        format!(
            "/api/posts?cursor={}",
            utf8_percent_encode(cursor, NON_ALPHANUMERIC)
        )
    })
}

fn render_failure(err: anyhow::Error) -> StatusCode {
    tracing::error!("template rendering failed: {}", err);
    StatusCode::INTERNAL_SERVER_ERROR
}

fn site_data(config: &SiteConfig) -> SiteData {
    SiteData {
        title: helpers::html_escape(&config.title),
        description: helpers::html_escape(&config.description),
        language: config.language.clone(),
    }
}

/// Render the listing page from the accumulated feed
fn render_index(state: &AppState, feed: &Feed) -> Result<String> {
    let entries: Vec<IndexEntry> = feed
        .results
        .iter()
        .map(|post| IndexEntry {
            uid: post.uid.clone(),
            title: helpers::html_escape(&post.data.title),
            subtitle: helpers::html_escape(&post.data.subtitle),
            author: helpers::html_escape(&post.data.author),
            date: helpers::display_date(post.first_publication_date.as_ref()),
        })
        .collect();

    let mut context = tera::Context::new();
    context.insert("site", &site_data(&state.config));
    context.insert("page_title", &format!("Home | {}", state.config.title));
    context.insert("posts", &entries);
    context.insert("next_page", &api_cursor_href(feed.next_page.as_deref()));

    state.renderer.render("index.html", &context)
}

/// Render the article page; an absent post renders the loading placeholder
fn render_post(state: &AppState, post: Option<&Post>) -> Result<String> {
    let mut context = tera::Context::new();
    context.insert("site", &site_data(&state.config));
    context.insert("loading", &post.is_none());
    context.insert("reading_time", &reading_time::estimate(post));

    match post {
        Some(post) => {
            let sections: Vec<SectionView> = post
                .data
                .content
                .iter()
                .map(|section| SectionView {
                    heading: helpers::html_escape(&section.heading),
                    paragraphs: section
                        .body
                        .iter()
                        .filter(|block| !block.text.is_empty())
                        .map(|block| helpers::html_escape(&block.text))
                        .collect(),
                })
                .collect();

            context.insert(
                "page_title",
                &format!("{} | {}", post.data.title, state.config.title),
            );
            context.insert("title", &helpers::html_escape(&post.data.title));
            context.insert("author", &helpers::html_escape(&post.data.author));
            context.insert("banner_url", &helpers::html_escape(&post.data.banner.url));
            context.insert(
                "date",
                &helpers::display_date(post.first_publication_date.as_ref()),
            );
            context.insert(
                "datetime",
                &helpers::datetime_attr(post.first_publication_date.as_ref()),
            );
            context.insert("sections", &sections);
        }
        None => {
            context.insert("page_title", &format!("Post | {}", state.config.title));
        }
    }

    state.renderer.render("post.html", &context)
}
