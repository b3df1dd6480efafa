//! Lifecycle tests for the process-wide session store: exclusivity,
//! idempotent removal, and the atomic completion takeover.

use nexon_bot::session::{SessionError, SessionStore, Step, StepReply};
use serenity::model::id::{ChannelId, MessageId, UserId};

const USER: UserId = UserId::new(42);
const CHANNEL: ChannelId = ChannelId::new(777);
const PROMPT: MessageId = MessageId::new(9001);

#[tokio::test]
async fn create_then_get() {
    let store = SessionStore::new();
    store.create(USER, CHANNEL).await.unwrap();

    let session = store.get(USER).await.unwrap();
    assert_eq!(session.owner, USER);
    assert_eq!(session.origin_channel, CHANNEL);
    assert_eq!(session.step, Step::Topic);
    assert!(session.prompt_message.is_none());
}

#[tokio::test]
async fn duplicate_create_rejected_and_leaves_session_untouched() {
    let store = SessionStore::new();
    store.create(USER, CHANNEL).await.unwrap();
    store.apply_text(USER, "My topic").await.unwrap();

    assert_eq!(
        store.create(USER, ChannelId::new(1)).await,
        Err(SessionError::AlreadyActive)
    );

    let session = store.get(USER).await.unwrap();
    assert_eq!(session.step, Step::Description);
    assert_eq!(session.origin_channel, CHANNEL);
    assert_eq!(session.draft.topic.as_deref(), Some("My topic"));
}

#[tokio::test]
async fn cancel_removes_the_session() {
    let store = SessionStore::new();
    store.create(USER, CHANNEL).await.unwrap();

    assert_eq!(
        store.apply_text(USER, "cancel").await,
        Some(StepReply::Cancelled)
    );
    assert!(store.get(USER).await.is_none());
    // A fresh session can start immediately afterwards.
    store.create(USER, CHANNEL).await.unwrap();
}

#[tokio::test]
async fn apply_text_without_session_is_none() {
    let store = SessionStore::new();
    assert_eq!(store.apply_text(USER, "anything").await, None);
}

#[tokio::test]
async fn remove_is_idempotent() {
    let store = SessionStore::new();
    store.create(USER, CHANNEL).await.unwrap();

    assert!(store.remove(USER).await.is_some());
    assert!(store.remove(USER).await.is_none());
    assert!(store.get(USER).await.is_none());
}

#[tokio::test]
async fn take_matching_requires_category_step_and_prompt_id() {
    let store = SessionStore::new();
    store.create(USER, CHANNEL).await.unwrap();

    // Still at the topic step: the prompt id alone is not enough.
    store.set_prompt(USER, PROMPT).await;
    assert!(store.take_matching(USER, PROMPT).await.is_none());
    assert!(store.get(USER).await.is_some());

    store.apply_text(USER, "Tech Talk").await.unwrap();
    store.apply_text(USER, "Weekly sync").await.unwrap();
    assert_eq!(
        store.apply_text(USER, "skip").await,
        Some(StepReply::CategoryMenu)
    );
    store.set_prompt(USER, PROMPT).await;

    // A reaction on some other message never advances or destroys it.
    assert!(store.take_matching(USER, MessageId::new(1)).await.is_none());
    assert!(store.get(USER).await.is_some());

    let session = store.take_matching(USER, PROMPT).await.unwrap();
    assert_eq!(session.draft.link.as_deref(), Some(""));
    assert!(store.get(USER).await.is_none());
}

#[tokio::test]
async fn take_matching_yields_the_session_exactly_once() {
    let store = SessionStore::new();
    store.create(USER, CHANNEL).await.unwrap();
    store.apply_text(USER, "t").await.unwrap();
    store.apply_text(USER, "d").await.unwrap();
    store.apply_text(USER, "skip").await.unwrap();
    store.set_prompt(USER, PROMPT).await;

    // Simulates the completion reaction being delivered twice.
    assert!(store.take_matching(USER, PROMPT).await.is_some());
    assert!(store.take_matching(USER, PROMPT).await.is_none());
}
