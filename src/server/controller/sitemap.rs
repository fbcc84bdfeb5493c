use std::sync::Arc;

use axum::{response::Html, Extension};
use utoipa::openapi::{path::PathItem, OpenApi};

/// A registered API path and the HTTP methods it accepts
#[derive(Clone, Debug, PartialEq)]
pub struct SitemapEntry {
    pub path: String,
    pub methods: Vec<&'static str>,
}

impl SitemapEntry {
    /// GET routes without path parameters can be opened straight from a browser
    fn is_linkable(&self) -> bool {
        self.methods.contains(&"GET") && !self.path.contains('{')
    }

    fn render(&self) -> String {
        let methods = self.methods.join(", ");

        if self.is_linkable() {
            format!("<li>{} <a href=\"{}\">{}</a></li>\n", methods, self.path, self.path)
        } else {
            format!("<li>{} {}</li>\n", methods, self.path)
        }
    }
}

/// Listing of every route in the OpenAPI document, served at `/`
#[derive(Clone, Debug)]
pub struct Sitemap {
    entries: Vec<SitemapEntry>,
    docs_path: String,
}

impl Sitemap {
    /// Builds the sitemap from the generated OpenAPI document, so it always matches the
    /// registered routes.
    pub fn from_openapi(api: &OpenApi, docs_path: &str) -> Self {
        let entries = api
            .paths
            .paths
            .iter()
            .map(|(path, item)| SitemapEntry {
                path: path.clone(),
                methods: methods(item),
            })
            .collect();

        Self {
            entries,
            docs_path: docs_path.to_string(),
        }
    }

    pub fn render(&self) -> String {
        let items: String = self.entries.iter().map(SitemapEntry::render).collect();

        format!(
            "<!DOCTYPE html>\n<html>\n<head><title>Holonet API</title></head>\n<body>\n\
             <h1>Holonet API</h1>\n<p>Available endpoints:</p>\n<ul>\n{items}</ul>\n\
             <p>Interactive documentation: <a href=\"{docs}\">{docs}</a></p>\n</body>\n</html>\n",
            docs = self.docs_path
        )
    }
}

fn methods(item: &PathItem) -> Vec<&'static str> {
    [
        ("GET", item.get.is_some()),
        ("POST", item.post.is_some()),
        ("PUT", item.put.is_some()),
        ("PATCH", item.patch.is_some()),
        ("DELETE", item.delete.is_some()),
        ("HEAD", item.head.is_some()),
        ("OPTIONS", item.options.is_some()),
        ("TRACE", item.trace.is_some()),
    ]
    .into_iter()
    .filter_map(|(method, present)| present.then_some(method))
    .collect()
}

/// Sitemap listing all available routes
pub async fn sitemap(Extension(sitemap): Extension<Arc<Sitemap>>) -> Html<String> {
    Html(sitemap.render())
}
