//! Vision board collection operations.

use crate::model::ids::IdGenerator;
use crate::model::vision::{VisionCategory, VisionItem};

/// Input for pinning a vision board item.
#[derive(Debug, Clone, Default)]
pub struct NewVisionItem {
    pub image_url: String,
    pub caption: String,
    pub category: VisionCategory,
}

/// Appends a new vision board item.
///
/// A blank image url is rejected and the collection is returned unchanged.
pub fn add_item(items: &[VisionItem], ids: &dyn IdGenerator, input: &NewVisionItem) -> Vec<VisionItem> {
    if input.image_url.trim().is_empty() {
        return items.to_vec();
    }

    let mut next = items.to_vec();
    next.push(VisionItem::new(
        ids.next_id(),
        input.image_url.clone(),
        input.caption.clone(),
        input.category,
    ));
    next
}

/// Removes the item with the given id, if present.
pub fn remove_item(items: &[VisionItem], id: &str) -> Vec<VisionItem> {
    items.iter().filter(|item| item.id != id).cloned().collect()
}
