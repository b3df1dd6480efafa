use std::env;
use std::sync::Arc;

use serenity::model::gateway::GatewayIntents;
use serenity::prelude::*;
use tracing::{error, info};

use nexon_bot::api::WebsiteClient;
use nexon_bot::constants::{DEFAULT_API_URL, DEFAULT_WEB_PORT};
use nexon_bot::{handler, web, AppState};

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt::init();

    // The token is the only non-negotiable piece of configuration.
    let token = env::var("DISCORD_TOKEN").expect("Expected DISCORD_TOKEN in the environment.");
    let api_url = env::var("API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
    let port = env::var("PORT")
        .ok()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(DEFAULT_WEB_PORT);

    info!("starting bot (token length {} characters)", token.len());

    let app_state = Arc::new(AppState::new(WebsiteClient::new(api_url)));

    // Liveness endpoints run beside the bot; losing them never takes the
    // dialogue down with them.
    tokio::spawn(async move {
        if let Err(e) = web::serve(port).await {
            error!("liveness server exited: {e}");
        }
    });

    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT
        | GatewayIntents::GUILD_MESSAGE_REACTIONS;

    let mut client = Client::builder(&token, intents)
        .event_handler(handler::Handler)
        .await
        .expect("Error creating the Discord client.");

    {
        let mut data = client.data.write().await;
        data.insert::<AppState>(app_state);
    }

    if let Err(why) = client.start().await {
        error!("client error: {why:?}");
    }
}
