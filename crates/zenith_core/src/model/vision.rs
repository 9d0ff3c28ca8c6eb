//! Vision board item record.

use crate::model::EntityId;
use serde::{Deserialize, Serialize};

/// Fixed category set for vision board items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum VisionCategory {
    #[default]
    Career,
    Travel,
    Health,
    Relationships,
    Wealth,
    Spirituality,
}

/// One pinned item on the vision board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisionItem {
    pub id: EntityId,
    /// Serialized as `imageUrl` to match the persisted collection format.
    /// Non-empty at creation.
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    pub caption: String,
    pub category: VisionCategory,
}

impl VisionItem {
    pub fn new(
        id: EntityId,
        image_url: impl Into<String>,
        caption: impl Into<String>,
        category: VisionCategory,
    ) -> Self {
        Self {
            id,
            image_url: image_url.into(),
            caption: caption.into(),
            category,
        }
    }
}
