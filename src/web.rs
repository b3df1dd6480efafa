//! Liveness endpoints for the hosting platform, served independently of the
//! dialogue core.

use axum::response::Html;
use axum::routing::get;
use axum::Router;
use tracing::info;

const STATUS_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Nexon Status</title>
    <style>
        body {
            margin: 0;
            background-color: #000000;
            display: flex;
            justify-content: center;
            align-items: center;
            height: 100vh;
            font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
            color: #00ff41;
        }
        .container { text-align: center; }
        .online-dot {
            width: 12px;
            height: 12px;
            margin: 0 auto 20px;
            background-color: #00ff41;
            border-radius: 50%;
            box-shadow: 0 0 10px #00ff41, 0 0 20px #00ff41;
            animation: glow 1.5s infinite alternate;
        }
        .status-text {
            font-size: 2.5rem;
            font-weight: bold;
            text-shadow: 0 0 10px #00ff41, 0 0 20px #00ff41;
        }
        @keyframes glow {
            0% { box-shadow: 0 0 10px #00ff41; }
            100% { box-shadow: 0 0 20px #00ff41; }
        }
        @media (max-width: 480px) {
            .status-text { font-size: 1.5rem; }
        }
    </style>
</head>
<body>
    <div class="container">
        <div class="online-dot"></div>
        <h1 class="status-text">Nexon is live</h1>
    </div>
</body>
</html>
"#;

async fn home() -> Html<&'static str> {
    Html(STATUS_PAGE)
}

async fn health() -> &'static str {
    "OK"
}

pub fn router() -> Router {
    Router::new()
        .route("/", get(home))
        .route("/health", get(health))
}

/// Binds on all interfaces and serves until the process exits.
pub async fn serve(port: u16) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    info!("liveness server listening on port {port}");
    axum::serve(listener, router()).await
}
