//! The `!channels` command: shows where each category's posts go.

use serenity::builder::{CreateEmbed, CreateMessage};
use serenity::client::Context;
use serenity::model::channel::Message;
use serenity::model::mention::Mentionable;
use tracing::warn;

use crate::model::AppState;

pub async fn run(ctx: &Context, msg: &Message, state: &AppState) {
    let mut embed = CreateEmbed::new().title("📋 Channel Mappings").color(0x00ff41);

    for (tag, channel) in state.channels.list().await {
        let value = match channel {
            Some(id) => id.mention().to_string(),
            None => "Not set (posts to current channel)".to_string(),
        };
        embed = embed.field(tag.name(), value, false);
    }

    let builder = CreateMessage::new().embed(embed);
    if let Err(e) = msg.channel_id.send_message(&ctx.http, builder).await {
        warn!("failed to send channel mappings: {e:?}");
    }
}
