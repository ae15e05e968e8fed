use crate::model::bubble::{BubbleId, BubbleKind, TextBubble};

/// Ordered bubbles of one editing session plus the single selection.
///
/// Sequence order is paint order; selecting never reorders. New ids come from a counter that
/// skips ids already present, so persisted ids of any shape stay unique.
#[derive(Clone, Debug, PartialEq)]
pub struct BubbleSet {
    bubbles: Vec<TextBubble>,
    selected: Option<BubbleId>,
    next_id: u64,
}

impl Default for BubbleSet {
    fn default() -> Self {
        Self::from_bubbles(Vec::new())
    }
}

impl BubbleSet {
    /// Take ownership of persisted bubbles, growing any undersized bounds to the minimum.
    pub fn from_bubbles(bubbles: Vec<TextBubble>) -> Self {
        let bubbles: Vec<TextBubble> = bubbles
            .into_iter()
            .map(|mut b| {
                b.bounds = b.bounds.clamped_to_min();
                b
            })
            .collect();
        Self {
            bubbles,
            selected: None,
            next_id: 1,
        }
    }

    // First counter value not already taken by a bubble in this set.
    fn fresh_id(&mut self) -> BubbleId {
        loop {
            let id = BubbleId(self.next_id.to_string());
            self.next_id = self.next_id.wrapping_add(1);
            if self.get(&id).is_none() {
                return id;
            }
        }
    }

    /// Append a bubble with the kind's defaults; it paints on top and becomes selected.
    pub fn add(&mut self, kind: BubbleKind) -> BubbleId {
        let id = self.fresh_id();
        self.bubbles.push(TextBubble::with_defaults(id.clone(), kind));
        self.selected = Some(id.clone());
        tracing::debug!(%id, ?kind, "bubble added");
        id
    }

    /// Delete a bubble; clears the selection if it was selected. Unknown ids are a no-op.
    pub fn remove(&mut self, id: &BubbleId) -> Option<TextBubble> {
        let idx = self.bubbles.iter().position(|b| &b.id == id)?;
        if self.selected.as_ref() == Some(id) {
            self.selected = None;
        }
        Some(self.bubbles.remove(idx))
    }

    /// Replace a bubble's text; geometry and selection are untouched.
    pub fn update_text(&mut self, id: &BubbleId, text: impl Into<String>) -> bool {
        match self.get_mut(id) {
            Some(b) => {
                b.text = text.into();
                true
            }
            None => false,
        }
    }

    /// Select a bubble if it exists; returns whether the selection changed to it.
    pub fn select(&mut self, id: &BubbleId) -> bool {
        if self.get(id).is_none() {
            return false;
        }
        self.selected = Some(id.clone());
        true
    }

    /// Drop the selection.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Currently selected bubble id.
    pub fn selected(&self) -> Option<&BubbleId> {
        self.selected.as_ref()
    }

    /// Look up a bubble.
    pub fn get(&self, id: &BubbleId) -> Option<&TextBubble> {
        self.bubbles.iter().find(|b| &b.id == id)
    }

    pub(crate) fn get_mut(&mut self, id: &BubbleId) -> Option<&mut TextBubble> {
        self.bubbles.iter_mut().find(|b| &b.id == id)
    }

    /// Bubbles in paint order.
    pub fn as_slice(&self) -> &[TextBubble] {
        &self.bubbles
    }

    /// Number of bubbles.
    pub fn len(&self) -> usize {
        self.bubbles.len()
    }

    /// True when there are no bubbles.
    pub fn is_empty(&self) -> bool {
        self.bubbles.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/editor/bubbles.rs"]
mod tests;
