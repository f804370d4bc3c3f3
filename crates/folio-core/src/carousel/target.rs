/// Kind of element under the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetKind {
    /// Carousel track outside any card.
    Track,
    /// Card body.
    Card,
    /// Plain text inside a card.
    Text,
    /// Navigable link.
    Link,
    /// Button (arrows, page marks, popups).
    Button,
    /// Media control (play button, embedded player).
    Media,
}

impl TargetKind {
    /// Links, buttons and media controls own their clicks.
    pub fn is_interactive(self) -> bool {
        matches!(self, TargetKind::Link | TargetKind::Button | TargetKind::Media)
    }
}

/// Element path under the pointer, outermost first.
///
/// A target counts as interactive when any element on the path is, so a
/// text span nested in a link still belongs to the link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointerTarget {
    path: Vec<TargetKind>,
}

impl PointerTarget {
    pub fn new(kind: TargetKind) -> Self {
        Self { path: vec![kind] }
    }

    pub fn from_path(path: Vec<TargetKind>) -> Self {
        Self { path }
    }

    /// Appends a nested element.
    #[must_use]
    pub fn nested(mut self, kind: TargetKind) -> Self {
        self.path.push(kind);
        self
    }

    /// Innermost element, if any.
    pub fn innermost(&self) -> Option<TargetKind> {
        self.path.last().copied()
    }

    pub fn is_interactive(&self) -> bool {
        self.path.iter().any(|kind| kind.is_interactive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_card_is_not_interactive() {
        let target = PointerTarget::new(TargetKind::Card).nested(TargetKind::Text);
        assert!(!target.is_interactive());
        assert_eq!(target.innermost(), Some(TargetKind::Text));
    }

    #[test]
    fn test_text_inside_link_is_interactive() {
        let target = PointerTarget::from_path(vec![
            TargetKind::Card,
            TargetKind::Link,
            TargetKind::Text,
        ]);
        assert!(target.is_interactive());
    }

    #[test]
    fn test_empty_path() {
        let target = PointerTarget::from_path(Vec::new());
        assert!(!target.is_interactive());
        assert_eq!(target.innermost(), None);
    }
}
