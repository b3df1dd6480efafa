//! The `!setchannel` command: points a category at a destination channel,
//! or clears the mapping. Administrator-only.

use std::collections::HashMap;

use serenity::client::Context;
use serenity::model::channel::Message;
use serenity::model::guild::Role;
use serenity::model::id::{ChannelId, RoleId, UserId};
use serenity::model::mention::Mentionable;
use serenity::model::permissions::Permissions;

use crate::model::AppState;

// Self-contained admin gate, resolved against the guild cache.
struct GuildInfo {
    owner_id: UserId,
    roles: HashMap<RoleId, Role>,
}

fn get_guild_info_from_cache(ctx: &Context, msg: &Message) -> Option<GuildInfo> {
    let guild = ctx.cache.guild(msg.guild_id?)?;

    Some(GuildInfo {
        owner_id: guild.owner_id,
        roles: guild.roles.clone(),
    })
}

fn is_admin(msg: &Message, guild_info: &GuildInfo) -> bool {
    if msg.author.id == guild_info.owner_id {
        return true;
    }
    let Some(member) = &msg.member else {
        return false;
    };
    member.roles.iter().any(|role_id| {
        guild_info
            .roles
            .get(role_id)
            .is_some_and(|role| role.permissions.contains(Permissions::ADMINISTRATOR))
    })
}

pub async fn run(ctx: &Context, msg: &Message, args: Vec<&str>, state: &AppState) {
    let guild_info = match get_guild_info_from_cache(ctx, msg) {
        Some(info) => info,
        None => {
            let _ = msg
                .reply(
                    ctx,
                    "Could not get server info from cache. Please try again.",
                )
                .await;
            return;
        }
    };
    if !is_admin(msg, &guild_info) {
        let _ = msg
            .reply(ctx, "You must be an administrator to use this command.")
            .await;
        return;
    }

    let Some(&name) = args.first() else {
        let _ = msg
            .reply(ctx, "Usage: `!setchannel <category> [channel_id]`")
            .await;
        return;
    };

    let channel = match args.get(1) {
        Some(raw) => match raw.parse::<u64>() {
            Ok(id) if id != 0 => Some(ChannelId::new(id)),
            _ => {
                let _ = msg.reply(ctx, "❌ Channel id must be a number.").await;
                return;
            }
        },
        None => None,
    };

    // Reject ids the platform cannot resolve before touching the mapping.
    if let Some(id) = channel {
        if ctx.http.get_channel(id).await.is_err() {
            let _ = msg.reply(ctx, "❌ Channel not found!").await;
            return;
        }
    }

    match state.channels.update(name, channel).await {
        Ok(tag) => {
            let response = match channel {
                Some(id) => format!("✅ Set {} posts to go to {}", tag, id.mention()),
                None => format!("✅ Removed channel mapping for {}", tag),
            };
            let _ = msg.reply(ctx, response).await;
        }
        Err(e) => {
            let _ = msg.reply(ctx, format!("❌ {e}")).await;
        }
    }
}
