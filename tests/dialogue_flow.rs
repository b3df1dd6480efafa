//! Transition-table coverage for the composition dialogue, exercised
//! without any platform dependency.

use nexon_bot::session::{advance, Session, Step, StepReply};
use serenity::model::id::{ChannelId, UserId};

fn fresh_session() -> Session {
    Session::new(UserId::new(101), ChannelId::new(555))
}

#[test]
fn full_walk_collects_draft_in_order() {
    let mut session = fresh_session();
    assert_eq!(session.step, Step::Topic);

    assert_eq!(
        advance(&mut session, "Tech Talk"),
        StepReply::Prompt(Step::Description)
    );
    assert_eq!(session.step, Step::Description);

    assert_eq!(
        advance(&mut session, "Weekly sync"),
        StepReply::Prompt(Step::Link)
    );
    assert_eq!(session.step, Step::Link);

    assert_eq!(advance(&mut session, "https://x.test"), StepReply::CategoryMenu);
    assert_eq!(session.step, Step::Category);

    assert_eq!(session.draft.topic.as_deref(), Some("Tech Talk"));
    assert_eq!(session.draft.description.as_deref(), Some("Weekly sync"));
    assert_eq!(session.draft.link.as_deref(), Some("https://x.test"));
}

#[test]
fn skip_stores_an_empty_link() {
    for keyword in ["skip", "SKIP", "Skip"] {
        let mut session = fresh_session();
        advance(&mut session, "Tech Talk");
        advance(&mut session, "Weekly sync");
        assert_eq!(advance(&mut session, keyword), StepReply::CategoryMenu);
        assert_eq!(session.draft.link.as_deref(), Some(""));
    }
}

#[test]
fn cancel_fires_at_every_text_step() {
    for (steps_before_cancel, keyword) in [(0, "cancel"), (1, "CANCEL"), (2, "Cancel")] {
        let mut session = fresh_session();
        for input in ["topic", "description"].iter().take(steps_before_cancel) {
            advance(&mut session, input);
        }
        assert_eq!(advance(&mut session, keyword), StepReply::Cancelled);
    }
}

#[test]
fn keywords_only_match_the_whole_message() {
    let mut session = fresh_session();
    assert_eq!(
        advance(&mut session, "cancel culture"),
        StepReply::Prompt(Step::Description)
    );
    assert_eq!(session.draft.topic.as_deref(), Some("cancel culture"));

    advance(&mut session, "a description");
    // "skip" only has its special meaning at the link step, and only alone.
    assert_eq!(advance(&mut session, "skip this one"), StepReply::CategoryMenu);
    assert_eq!(session.draft.link.as_deref(), Some("skip this one"));
}

#[test]
fn emoji_and_empty_content_are_literal_input() {
    let mut session = fresh_session();
    advance(&mut session, "🎉🎉");
    advance(&mut session, "");
    assert_eq!(session.draft.topic.as_deref(), Some("🎉🎉"));
    assert_eq!(session.draft.description.as_deref(), Some(""));
}

#[test]
fn text_at_category_step_is_not_consumed() {
    let mut session = fresh_session();
    advance(&mut session, "Tech Talk");
    advance(&mut session, "Weekly sync");
    advance(&mut session, "skip");

    let draft_before = session.draft.clone();
    assert_eq!(advance(&mut session, "some text"), StepReply::NotConsumed);
    assert_eq!(advance(&mut session, "cancel"), StepReply::NotConsumed);
    assert_eq!(session.step, Step::Category);
    assert_eq!(session.draft, draft_before);
}
