//! Exact-output tests for the final post body and the website payload.

use nexon_bot::publisher::CompletedPost;
use nexon_bot::router::Category;
use nexon_bot::session::Draft;
use serde_json::json;

fn draft(topic: &str, description: &str, link: &str) -> Draft {
    Draft {
        topic: Some(topic.to_string()),
        description: Some(description.to_string()),
        link: Some(link.to_string()),
    }
}

#[test]
fn body_without_link() {
    let post = CompletedPost::from_draft(
        draft("Tech Talk", "Weekly sync", ""),
        Category::Education,
    );
    assert_eq!(post.body(), "# Tech Talk\n> Weekly sync");
}

#[test]
fn body_with_link() {
    let post = CompletedPost::from_draft(
        draft("Tech Talk", "Weekly sync", "https://x.test"),
        Category::Education,
    );
    assert_eq!(post.body(), "# Tech Talk\n> Weekly sync\nhttps://x.test");
}

#[test]
fn whitespace_only_link_is_dropped_everywhere() {
    let post = CompletedPost::from_draft(draft("t", "d", "   "), Category::Others);
    assert_eq!(post.body(), "# t\n> d");
    assert_eq!(post.payload().link, "");
}

#[test]
fn payload_matches_the_website_contract() {
    let post = CompletedPost::from_draft(
        draft("Tech Talk", "Weekly sync", ""),
        Category::Education,
    );
    assert_eq!(
        serde_json::to_value(post.payload()).unwrap(),
        json!({
            "topic": "Tech Talk",
            "description": "Weekly sync",
            "link": "",
            "tag": "Education",
            "source": "discord",
        })
    );
}

#[test]
fn payload_keeps_a_real_link() {
    let post = CompletedPost::from_draft(
        draft("Tech Talk", "Weekly sync", "https://x.test"),
        Category::Education,
    );
    assert_eq!(post.payload().link, "https://x.test");
    assert_eq!(post.payload().tag, "Education");
}
