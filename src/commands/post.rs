//! The `!post` command: opens a composition session for the author and asks
//! for the topic.

use serenity::client::Context;
use serenity::model::channel::Message;
use tracing::error;

use crate::dialogue;
use crate::model::AppState;
use crate::session::SessionError;

pub async fn run(ctx: &Context, msg: &Message, state: &AppState) {
    match state.sessions.create(msg.author.id, msg.channel_id).await {
        Ok(()) => {
            let prompt = dialogue::topic_prompt(&msg.author);
            if let Err(e) = msg.channel_id.say(&ctx.http, prompt).await {
                error!("failed to send topic prompt: {e:?}");
            }
        }
        Err(SessionError::AlreadyActive) => {
            let _ = msg
                .channel_id
                .say(
                    &ctx.http,
                    "❌ You already have an active post creation session. Finish it or type `cancel` to start over.",
                )
                .await;
        }
    }
}
