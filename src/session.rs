//! The post-composition dialogue: per-user session state, the step
//! transition function, and the process-wide session store.

use std::collections::HashMap;

use serenity::model::id::{ChannelId, MessageId, UserId};
use thiserror::Error;
use tokio::sync::RwLock;

/// The input the dialogue is currently waiting on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Topic,
    Description,
    Link,
    Category,
}

/// What the user has submitted so far. Fields fill in step order; `link`
/// becomes an empty string when the user types `skip`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub topic: Option<String>,
    pub description: Option<String>,
    pub link: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Session {
    pub owner: UserId,
    pub origin_channel: ChannelId,
    pub step: Step,
    pub draft: Draft,
    /// The reaction-bearing category prompt, set only once the dialogue
    /// reaches [`Step::Category`].
    pub prompt_message: Option<MessageId>,
}

impl Session {
    pub fn new(owner: UserId, origin_channel: ChannelId) -> Self {
        Self {
            owner,
            origin_channel,
            step: Step::Topic,
            draft: Draft::default(),
            prompt_message: None,
        }
    }
}

/// Outcome of feeding one text message into a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepReply {
    /// The session advanced; prompt the user for `Step`'s input next.
    Prompt(Step),
    /// The session reached the category step; send the reaction menu.
    CategoryMenu,
    /// The user cancelled; the session is gone.
    Cancelled,
    /// The session is waiting on a reaction; the message is not dialogue
    /// input and falls through to normal command dispatch.
    NotConsumed,
}

/// Advances `session` by one step for a text message. Any content counts as
/// literal input (emoji, empty strings, command-looking text); only the
/// whole-message keywords `cancel` and `skip` are special, case-insensitive.
pub fn advance(session: &mut Session, content: &str) -> StepReply {
    if session.step != Step::Category && content.eq_ignore_ascii_case("cancel") {
        return StepReply::Cancelled;
    }
    match session.step {
        Step::Topic => {
            session.draft.topic = Some(content.to_string());
            session.step = Step::Description;
            StepReply::Prompt(Step::Description)
        }
        Step::Description => {
            session.draft.description = Some(content.to_string());
            session.step = Step::Link;
            StepReply::Prompt(Step::Link)
        }
        Step::Link => {
            let link = if content.eq_ignore_ascii_case("skip") {
                String::new()
            } else {
                content.to_string()
            };
            session.draft.link = Some(link);
            session.step = Step::Category;
            StepReply::CategoryMenu
        }
        Step::Category => StepReply::NotConsumed,
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("an active post session already exists for this user")]
    AlreadyActive,
}

/// Process-wide map of in-progress compositions, one per user. Sessions are
/// ephemeral: lost on restart, removed only on cancellation or completion.
/// There is no expiry; an abandoned session keeps its slot until the user
/// types `cancel`.
#[derive(Default)]
pub struct SessionStore {
    inner: RwLock<HashMap<UserId, Session>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn create(&self, owner: UserId, channel: ChannelId) -> Result<(), SessionError> {
        let mut map = self.inner.write().await;
        if map.contains_key(&owner) {
            return Err(SessionError::AlreadyActive);
        }
        map.insert(owner, Session::new(owner, channel));
        Ok(())
    }

    pub async fn get(&self, owner: UserId) -> Option<Session> {
        self.inner.read().await.get(&owner).cloned()
    }

    /// Unconditional, idempotent removal.
    pub async fn remove(&self, owner: UserId) -> Option<Session> {
        self.inner.write().await.remove(&owner)
    }

    /// Feeds one text message into the owner's session, holding the write
    /// lock across the whole transition. A cancelling message removes the
    /// session before the lock is released. Returns `None` when the owner
    /// has no session.
    pub async fn apply_text(&self, owner: UserId, content: &str) -> Option<StepReply> {
        let mut map = self.inner.write().await;
        let session = map.get_mut(&owner)?;
        let reply = advance(session, content);
        if reply == StepReply::Cancelled {
            map.remove(&owner);
        }
        Some(reply)
    }

    /// Records the category prompt message the session is now waiting on.
    pub async fn set_prompt(&self, owner: UserId, message: MessageId) {
        if let Some(session) = self.inner.write().await.get_mut(&owner) {
            session.prompt_message = Some(message);
        }
    }

    /// Removes and returns the owner's session iff it is at the category
    /// step waiting on exactly `message`. The check and the removal happen
    /// under one write lock, so a duplicated completion event yields the
    /// session to at most one caller.
    pub async fn take_matching(&self, owner: UserId, message: MessageId) -> Option<Session> {
        let mut map = self.inner.write().await;
        let session = map.get(&owner)?;
        if session.step != Step::Category || session.prompt_message != Some(message) {
            return None;
        }
        map.remove(&owner)
    }
}
