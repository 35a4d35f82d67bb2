//! Handler for the HTML landing page.

use axum::response::Html;

const LANDING_PAGE: &str = r#"<!DOCTYPE html>
<html>
    <head>
        <title>String Analyzer API</title>
        <style>
            body { font-family: Arial; text-align: center; margin-top: 150px; }
            a { color: #007bff; text-decoration: none; font-weight: bold; }
            a:hover { text-decoration: underline; }
        </style>
    </head>
    <body>
        <h1>Welcome to the String Analyzer API!</h1>
        <p><a href="/strings">Click here</a> to explore the API.</p>
    </body>
</html>
"#;

/// Serves the landing page linking to the API.
///
/// # Endpoint
///
/// `GET /`
pub async fn home_handler() -> Html<&'static str> {
    Html(LANDING_PAGE)
}
