use axum::{extract::State, response::Html};
use tracing::warn;

use crate::adapters::inbound::http::router::AppState;

/// An endpoint listed on the sitemap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteInfo {
    pub method: &'static str,
    pub path: &'static str,
    pub description: &'static str,
}

/// Every endpoint served by the member router
pub const ROUTES: &[RouteInfo] = &[
    RouteInfo {
        method: "GET",
        path: "/members",
        description: "List all family members",
    },
    RouteInfo {
        method: "GET",
        path: "/member/{id}",
        description: "Retrieve one member",
    },
    RouteInfo {
        method: "POST",
        path: "/member",
        description: "Add a member from {first_name, age, lucky_numbers}",
    },
    RouteInfo {
        method: "DELETE",
        path: "/member/{id}",
        description: "Delete a member",
    },
    RouteInfo {
        method: "GET",
        path: "/family",
        description: "Family name with all of its members",
    },
];

/// Render the sitemap page. Parameterless GET routes become links.
pub fn render_sitemap(family_name: &str) -> String {
    let items: String = ROUTES
        .iter()
        .map(|route| {
            let target = if route.method == "GET" && !route.path.contains('{') {
                format!("<a href=\"{0}\">{0}</a>", route.path)
            } else {
                route.path.to_string()
            };
            format!(
                "<li><code>{}</code> {} &mdash; {}</li>",
                route.method,
                target,
                escape_html(route.description)
            )
        })
        .collect();

    format!(
        "<!DOCTYPE html><html><head><title>{0} family API</title></head>\
         <body><h1>{0} family API</h1><p>Available endpoints:</p><ul>{1}</ul></body></html>",
        escape_html(family_name),
        items
    )
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Handle the sitemap at `/`
pub async fn sitemap(State(app_state): State<AppState>) -> Html<String> {
    let family_name = match app_state.family_service.family_name().await {
        Ok(name) => name.as_str().to_string(),
        Err(e) => {
            warn!(error = %e, "Family name unavailable, rendering generic sitemap");
            String::from("Family")
        }
    };

    Html(render_sitemap(&family_name))
}
