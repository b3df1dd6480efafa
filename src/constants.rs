// Central constants for the command surface and publishing limits.
use crate::router::Category;

pub const COMMAND_PREFIX: &str = "!";

/// How many recent messages are fetched (and best-effort deleted) from the
/// origin channel before the final post goes out.
pub const CLEANUP_FETCH_LIMIT: u8 = 8;

/// Bound on the website upload request.
pub const UPLOAD_TIMEOUT_SECS: u64 = 10;

pub const DEFAULT_API_URL: &str = "http://localhost:5000/api/upload";
pub const DEFAULT_WEB_PORT: u16 = 8080;

/// Boot-time category routing. Runtime changes via `!setchannel` are not
/// persisted and fall back to these ids on restart.
pub const DEFAULT_CATEGORY_CHANNELS: [(Category, u64); 5] = [
    (Category::Entertainment, 1413856614510755880),
    (Category::Education, 1413881799322636319),
    (Category::Website, 1413881852451885266),
    (Category::Hack, 1413881887428055193),
    (Category::Others, 1413881920248615143),
];
