//! Discord-facing glue for the composition dialogue: intercepts text
//! replies for active sessions, renders step prompts, seeds the category
//! reaction menu, and runs the completion path when a qualifying reaction
//! arrives.

use serenity::builder::GetMessages;
use serenity::client::Context;
use serenity::model::channel::{Message, Reaction, ReactionType};
use serenity::model::id::ChannelId;
use serenity::model::mention::Mentionable;
use serenity::model::user::User;
use tracing::{debug, error, info, warn};

use crate::constants::CLEANUP_FETCH_LIMIT;
use crate::model::AppState;
use crate::publisher::{self, CompletedPost};
use crate::router::Category;
use crate::session::{Step, StepReply};

pub fn topic_prompt(user: &User) -> String {
    format!(
        "**📝 Creating new post - Step 1/3**\n{}, what's the topic of your post?",
        user.mention()
    )
}

/// Feeds one inbound message into the author's session, if any. Returns
/// `true` when the message was consumed as dialogue input; `false` lets the
/// caller fall through to command dispatch.
pub async fn handle_session_reply(ctx: &Context, msg: &Message, state: &AppState) -> bool {
    let Some(reply) = state.sessions.apply_text(msg.author.id, &msg.content).await else {
        return false;
    };
    match reply {
        StepReply::Prompt(step) => {
            let prompt = match step {
                Step::Description => format!(
                    "**📝 Creating new post - Step 2/3**\n{}, provide a description for your post:",
                    msg.author.mention()
                ),
                Step::Link => format!(
                    "**📝 Creating new post - Step 3/3**\n{}, add a link (or type 'skip' if no link):",
                    msg.author.mention()
                ),
                // Topic prompts come from `!post`; Category gets the menu.
                Step::Topic | Step::Category => return true,
            };
            if let Err(e) = msg.channel_id.say(&ctx.http, prompt).await {
                error!("failed to send step prompt: {e:?}");
            }
            true
        }
        StepReply::CategoryMenu => {
            send_category_menu(ctx, msg, state).await;
            true
        }
        StepReply::Cancelled => {
            let notice = format!("❌ {} Post creation cancelled.", msg.author.mention());
            if let Err(e) = msg.channel_id.say(&ctx.http, notice).await {
                warn!("failed to send cancellation notice: {e:?}");
            }
            true
        }
        StepReply::NotConsumed => false,
    }
}

/// Posts the category menu and decorates it with one selectable reaction per
/// tag. Each reaction add is best-effort; a missing reaction only means the
/// user has to add the emoji themselves.
async fn send_category_menu(ctx: &Context, msg: &Message, state: &AppState) {
    let mut text = format!(
        "**📝 Creating new post - Final Step**\n{}, choose a category:\n",
        msg.author.mention()
    );
    for tag in Category::ALL {
        text.push_str(&format!("{} {}\n", tag.emoji(), tag.name()));
    }
    text.push_str("\nReact with the appropriate emoji to select category:");

    let menu = match msg.channel_id.say(&ctx.http, text).await {
        Ok(menu) => menu,
        Err(e) => {
            error!("failed to send category menu: {e:?}");
            return;
        }
    };
    state.sessions.set_prompt(msg.author.id, menu.id).await;

    for tag in Category::ALL {
        if let Err(e) = menu
            .react(&ctx.http, ReactionType::Unicode(tag.emoji().to_string()))
            .await
        {
            debug!(emoji = tag.emoji(), "failed to add category reaction: {e:?}");
        }
    }
}

/// Completion path. A reaction only counts when the reactor is human, owns a
/// session at the category step, reacted on that session's prompt message,
/// and used a recognized emoji. Everything else is silently ignored.
pub async fn handle_reaction(ctx: &Context, reaction: &Reaction, state: &AppState) {
    let user = match reaction.user(ctx).await {
        Ok(user) => user,
        Err(e) => {
            debug!("could not resolve reacting user: {e:?}");
            return;
        }
    };
    if user.bot {
        return;
    }
    let ReactionType::Unicode(emoji) = &reaction.emoji else {
        return;
    };
    let Some(tag) = Category::from_emoji(emoji) else {
        return;
    };
    let Some(session) = state.sessions.take_matching(user.id, reaction.message_id).await else {
        return;
    };

    // The dialogue messages are noise once the post exists; sweep them
    // first. Publishing waits for the sweep but never on its success.
    clear_recent_messages(ctx, session.origin_channel).await;

    let post = CompletedPost::from_draft(session.draft, tag);
    let outcome = publisher::publish(
        ctx,
        session.origin_channel,
        &post,
        &state.channels,
        &state.website,
    )
    .await;

    if let Err(e) = &outcome.origin {
        error!("failed to post to origin channel: {e:?}");
    }
    if let Some(Err(e)) = &outcome.category {
        warn!(tag = post.tag.name(), "failed to cross-post to category channel: {e:?}");
    }
    match &outcome.website {
        Ok(()) => info!(tag = post.tag.name(), topic = %post.topic, "post uploaded to website"),
        Err(e) => warn!("website upload failed: {e}"),
    }
}

/// Best-effort sweep of the most recent messages in the origin channel.
async fn clear_recent_messages(ctx: &Context, channel: ChannelId) {
    let recent = match channel
        .messages(&ctx.http, GetMessages::new().limit(CLEANUP_FETCH_LIMIT))
        .await
    {
        Ok(messages) => messages,
        Err(e) => {
            warn!("failed to fetch channel history for cleanup: {e:?}");
            return;
        }
    };
    for message in recent {
        if let Err(e) = message.delete(&ctx.http).await {
            debug!(message_id = message.id.get(), "failed to delete message during cleanup: {e:?}");
        }
    }
}
