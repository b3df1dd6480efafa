//! Category tags and the runtime-mutable category -> channel mapping.

use std::collections::HashMap;
use std::fmt;

use serenity::model::id::ChannelId;
use thiserror::Error;
use tokio::sync::RwLock;

use crate::constants::DEFAULT_CATEGORY_CHANNELS;

/// The fixed set of post categories. Each one is selectable in the dialogue
/// through its reaction emoji and may be routed to a dedicated channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Entertainment,
    Education,
    Website,
    Hack,
    Others,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Entertainment,
        Category::Education,
        Category::Website,
        Category::Hack,
        Category::Others,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Entertainment => "Entertainment",
            Self::Education => "Education",
            Self::Website => "Website",
            Self::Hack => "Hack",
            Self::Others => "Others",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Self::Entertainment => "🎉",
            Self::Education => "📚",
            Self::Website => "🌐",
            Self::Hack => "🛠️",
            Self::Others => "❓",
        }
    }

    pub fn from_emoji(emoji: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tag| tag.emoji() == emoji)
    }

    /// Exact-match lookup by display name, as typed in `!setchannel`.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tag| tag.name() == name)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouterError {
    #[error("invalid category `{0}`; use: Entertainment, Education, Website, Hack, Others")]
    InvalidCategory(String),
}

/// Process-global mapping from category tag to an optional destination
/// channel. Rebuilt from the compiled-in defaults on every boot; runtime
/// updates are not persisted.
pub struct CategoryRouter {
    map: RwLock<HashMap<Category, Option<ChannelId>>>,
}

impl CategoryRouter {
    pub fn new() -> Self {
        let map = DEFAULT_CATEGORY_CHANNELS
            .into_iter()
            .map(|(tag, id)| (tag, Some(ChannelId::new(id))))
            .collect();
        Self {
            map: RwLock::new(map),
        }
    }

    pub async fn resolve(&self, tag: Category) -> Option<ChannelId> {
        self.map.read().await.get(&tag).copied().flatten()
    }

    /// Points `name`'s category at `channel`, or clears the mapping when
    /// `channel` is `None`. Unknown names leave the mapping untouched.
    pub async fn update(
        &self,
        name: &str,
        channel: Option<ChannelId>,
    ) -> Result<Category, RouterError> {
        let tag =
            Category::from_name(name).ok_or_else(|| RouterError::InvalidCategory(name.to_string()))?;
        self.map.write().await.insert(tag, channel);
        Ok(tag)
    }

    /// The full mapping in display order.
    pub async fn list(&self) -> Vec<(Category, Option<ChannelId>)> {
        let map = self.map.read().await;
        Category::ALL
            .into_iter()
            .map(|tag| (tag, map.get(&tag).copied().flatten()))
            .collect()
    }
}

impl Default for CategoryRouter {
    fn default() -> Self {
        Self::new()
    }
}
