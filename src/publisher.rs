//! Formats a completed composition and fans it out to every destination:
//! the origin channel, the category's channel (when one is mapped and
//! distinct), and the website API. Destinations are independent; one
//! failing never stops the others.

use serenity::client::Context;
use serenity::model::id::ChannelId;

use crate::api::{PostPayload, UploadError, WebsiteClient};
use crate::router::{Category, CategoryRouter};
use crate::session::Draft;

/// A finished draft plus the tag the user reacted with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedPost {
    pub topic: String,
    pub description: String,
    pub link: String,
    pub tag: Category,
}

impl CompletedPost {
    pub fn from_draft(draft: Draft, tag: Category) -> Self {
        Self {
            topic: draft.topic.unwrap_or_default(),
            description: draft.description.unwrap_or_default(),
            link: draft.link.unwrap_or_default(),
            tag,
        }
    }

    /// The plain-text message body: heading, quoted description, and the raw
    /// link on its own line unless it is empty or whitespace.
    pub fn body(&self) -> String {
        let mut body = format!("# {}\n> {}", self.topic, self.description);
        if !self.link.trim().is_empty() {
            body.push('\n');
            body.push_str(&self.link);
        }
        body
    }

    pub fn payload(&self) -> PostPayload {
        let link = if self.link.trim().is_empty() {
            String::new()
        } else {
            self.link.clone()
        };
        PostPayload::new(self.topic.clone(), self.description.clone(), link, self.tag)
    }
}

/// Per-destination results of one publish. `category` is `None` when the tag
/// has no mapped channel or it is the origin channel itself.
pub struct PublishOutcome {
    pub origin: Result<(), serenity::Error>,
    pub category: Option<Result<(), serenity::Error>>,
    pub website: Result<(), UploadError>,
}

/// Sends the post everywhere it belongs. Every destination is attempted
/// regardless of earlier failures; the caller decides how loudly to report
/// each result.
pub async fn publish(
    ctx: &Context,
    origin: ChannelId,
    post: &CompletedPost,
    channels: &CategoryRouter,
    website: &WebsiteClient,
) -> PublishOutcome {
    let body = post.body();

    let origin_result = origin.say(&ctx.http, body.clone()).await.map(|_| ());

    let category_result = match channels.resolve(post.tag).await {
        Some(destination) if destination != origin => {
            Some(destination.say(&ctx.http, body).await.map(|_| ()))
        }
        _ => None,
    };

    let website_result = website.upload(&post.payload()).await;

    PublishOutcome {
        origin: origin_result,
        category: category_result,
        website: website_result,
    }
}
