use crate::constants::COMMAND_PREFIX;
use crate::{commands, dialogue, AppState};
use serenity::async_trait;
use serenity::client::Context;
use serenity::model::{channel::Message, channel::Reaction, gateway::Ready};
use serenity::prelude::EventHandler;
use std::str::FromStr;
use tracing::info;

enum Command {
    Post,
    SetChannel,
    Channels,
    Unknown,
}

impl FromStr for Command {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "post" => Ok(Command::Post),
            "setchannel" => Ok(Command::SetChannel),
            "channels" => Ok(Command::Channels),
            _ => Ok(Command::Unknown),
        }
    }
}

pub struct Handler;

#[async_trait]
impl EventHandler for Handler {
    async fn message(&self, ctx: Context, msg: Message) {
        if msg.author.bot {
            return;
        }
        let app_state = {
            ctx.data
                .read()
                .await
                .get::<AppState>()
                .expect("Expected AppState in TypeMap.")
                .clone()
        };

        // An active dialogue owns the author's messages; only once the
        // session declines the input does command dispatch get a turn.
        if dialogue::handle_session_reply(&ctx, &msg, &app_state).await {
            return;
        }

        let Some(command_body) = msg.content.strip_prefix(COMMAND_PREFIX) else {
            return;
        };
        let mut args = command_body.split_whitespace();
        let Some(command_str) = args.next() else {
            return;
        };
        let command = Command::from_str(command_str).unwrap_or(Command::Unknown);
        let args_vec: Vec<&str> = args.collect();
        match command {
            Command::Post => commands::post::run(&ctx, &msg, &app_state).await,
            Command::SetChannel => commands::setchannel::run(&ctx, &msg, args_vec, &app_state).await,
            Command::Channels => commands::channels::run(&ctx, &msg, &app_state).await,
            Command::Unknown => {}
        }
    }

    async fn reaction_add(&self, ctx: Context, reaction: Reaction) {
        let app_state = {
            ctx.data
                .read()
                .await
                .get::<AppState>()
                .expect("Expected AppState in TypeMap.")
                .clone()
        };
        dialogue::handle_reaction(&ctx, &reaction, &app_state).await;
    }

    async fn ready(&self, _ctx: Context, ready: Ready) {
        info!("{} is connected and ready!", ready.user.name);
        info!("use `{COMMAND_PREFIX}post` to start creating a new post");
    }
}
