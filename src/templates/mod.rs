//! Built-in theme templates using the Tera template engine
//!
//! All templates are embedded directly in the binary; the server renders
//! from prepared view models, never from raw API data.

use anyhow::Result;
use serde::Serialize;
use tera::{Context, Tera};

/// Template renderer with the embedded theme loaded
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all theme templates loaded
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        // View models arrive pre-escaped, so autoescaping stays off
        tera.autoescape_on(vec![]);

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("theme/layout.html")),
            ("index.html", include_str!("theme/index.html")),
            ("post.html", include_str!("theme/post.html")),
            (
                "partials/head.html",
                include_str!("theme/partials/head.html"),
            ),
            (
                "partials/header.html",
                include_str!("theme/partials/header.html"),
            ),
        ])?;

        Ok(Self { tera })
    }

    /// Render a template with the given context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template_name, context)?)
    }
}

/// Site-wide template data
#[derive(Debug, Clone, Serialize)]
pub struct SiteData {
    pub title: String,
    pub description: String,
    pub language: String,
}

/// One listing entry, ready for the index template
#[derive(Debug, Clone, Serialize)]
pub struct IndexEntry {
    pub uid: String,
    pub title: String,
    pub subtitle: String,
    pub author: String,
    pub date: String,
}

/// One article section, ready for the post template
#[derive(Debug, Clone, Serialize)]
pub struct SectionView {
    pub heading: String,
    pub paragraphs: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site() -> SiteData {
        SiteData {
            title: "starlog".to_string(),
            description: String::new(),
            language: "en".to_string(),
        }
    }

    #[test]
    fn test_render_index() {
        let renderer = TemplateRenderer::new().unwrap();

        let mut context = Context::new();
        context.insert("site", &site());
        context.insert("page_title", "Home | starlog");
        context.insert(
            "posts",
            &vec![IndexEntry {
                uid: "first-post".to_string(),
                title: "First post".to_string(),
                subtitle: "A beginning".to_string(),
                author: "Ada".to_string(),
                date: "15 Mar 2021".to_string(),
            }],
        );
        context.insert("next_page", &Some("/api/posts?cursor=abc".to_string()));

        let html = renderer.render("index.html", &context).unwrap();
        assert!(html.contains("/post/first-post"));
        assert!(html.contains("First post"));
        assert!(html.contains("load-more"));
    }

    #[test]
    fn test_render_index_without_cursor_hides_button() {
        let renderer = TemplateRenderer::new().unwrap();

        let mut context = Context::new();
        context.insert("site", &site());
        context.insert("page_title", "Home | starlog");
        context.insert("posts", &Vec::<IndexEntry>::new());
        context.insert("next_page", &None::<String>);

        let html = renderer.render("index.html", &context).unwrap();
        assert!(!html.contains("load-more"));
    }

    #[test]
    fn test_render_post_loading_placeholder() {
        let renderer = TemplateRenderer::new().unwrap();

        let mut context = Context::new();
        context.insert("site", &site());
        context.insert("page_title", "Post | starlog");
        context.insert("loading", &true);

        let html = renderer.render("post.html", &context).unwrap();
        assert!(html.contains("Loading"));
    }
}
