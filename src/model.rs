//! Empty-state values: what an overlay shows.
//!
//! These are plain values with no behavior beyond equality. A model with every field unset is
//! valid and renders as an empty overlay.

use std::fmt;
use std::rc::Rc;

/// Callback run when the user activates an empty-state action.
///
/// Handlers live on the UI thread, so they are reference counted without `Send`.
pub type ActionHandler = Rc<dyn Fn()>;

/// Button shown below the message, e.g. "Add item" or "Retry".
#[derive(Clone)]
pub struct EmptyStateAction {
    title: String,
    handler: Option<ActionHandler>,
}

impl EmptyStateAction {
    pub fn new(title: impl Into<String>, handler: impl Fn() + 'static) -> Self {
        Self {
            title: title.into(),
            handler: Some(Rc::new(handler)),
        }
    }

    /// Action with a label but nothing to run; activating it is a no-op.
    pub fn without_handler(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            handler: None,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn has_handler(&self) -> bool {
        self.handler.is_some()
    }

    /// Run the handler, if any.
    pub fn invoke(&self) {
        if let Some(handler) = &self.handler {
            handler();
        }
    }
}

/// Only titles are compared. Two actions with the same title but different handlers are equal.
impl PartialEq for EmptyStateAction {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title
    }
}

impl Eq for EmptyStateAction {}

impl fmt::Debug for EmptyStateAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmptyStateAction")
            .field("title", &self.title)
            .field("has_handler", &self.handler.is_some())
            .finish()
    }
}

/// Glyph art drawn above the message.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmptyStateImage {
    rows: Vec<String>,
}

impl EmptyStateImage {
    /// Build an image from text; each line becomes one row.
    pub fn new(art: &str) -> Self {
        Self {
            rows: art.lines().map(str::to_owned).collect(),
        }
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    pub fn height(&self) -> u16 {
        u16::try_from(self.rows.len()).unwrap_or(u16::MAX)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl From<&str> for EmptyStateImage {
    fn from(art: &str) -> Self {
        Self::new(art)
    }
}

/// What to display when a screen has nothing to show.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmptyStateModel {
    message: Option<String>,
    image: Option<EmptyStateImage>,
    action: Option<EmptyStateAction>,
}

impl EmptyStateModel {
    pub fn new(
        message: Option<String>,
        image: Option<EmptyStateImage>,
        action: Option<EmptyStateAction>,
    ) -> Self {
        Self {
            message,
            image,
            action,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_image(mut self, image: impl Into<EmptyStateImage>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn with_action(mut self, action: EmptyStateAction) -> Self {
        self.action = Some(action);
        self
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn image(&self) -> Option<&EmptyStateImage> {
        self.image.as_ref()
    }

    pub fn action(&self) -> Option<&EmptyStateAction> {
        self.action.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::cell::Cell;

    #[test]
    fn test_action_invoke_runs_handler() {
        let hits = Rc::new(Cell::new(0));
        let counter = Rc::clone(&hits);
        let action = EmptyStateAction::new("Retry", move || counter.set(counter.get() + 1));

        action.invoke();
        action.invoke();
        assert_eq!(hits.get(), 2);
        assert!(action.has_handler());
    }

    #[test]
    fn test_action_without_handler_is_noop() {
        let action = EmptyStateAction::without_handler("Nothing");
        assert!(!action.has_handler());
        action.invoke();
        assert_eq!(action.title(), "Nothing");
    }

    #[test]
    fn test_action_equality_ignores_handler() {
        let hits = Rc::new(Cell::new(0));
        let counter = Rc::clone(&hits);
        let counting = EmptyStateAction::new("Add", move || counter.set(counter.get() + 1));
        let silent = EmptyStateAction::without_handler("Add");

        assert_eq!(counting, silent);
        assert_ne!(counting, EmptyStateAction::without_handler("Remove"));
    }

    #[test]
    fn test_cloned_action_shares_handler() {
        let hits = Rc::new(Cell::new(0));
        let counter = Rc::clone(&hits);
        let action = EmptyStateAction::new("Go", move || counter.set(counter.get() + 1));
        let copy = action.clone();

        copy.invoke();
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn test_image_rows() {
        let image = EmptyStateImage::new(" /\\ \n/__\\");
        assert_eq!(image.height(), 2);
        assert_eq!(image.rows()[1], "/__\\");
        assert!(!image.is_empty());
        assert!(EmptyStateImage::new("").is_empty());
    }

    #[test]
    fn test_default_model_is_empty() {
        let model = EmptyStateModel::default();
        assert!(model.message().is_none());
        assert!(model.image().is_none());
        assert!(model.action().is_none());
        assert_eq!(model, EmptyStateModel::new(None, None, None));
    }

    #[test]
    fn test_model_equality_is_structural() {
        let base = EmptyStateModel::default()
            .with_message("Nothing here")
            .with_image("[ ]")
            .with_action(EmptyStateAction::new("Add", || {}));

        let same = EmptyStateModel::new(
            Some("Nothing here".to_string()),
            Some(EmptyStateImage::new("[ ]")),
            Some(EmptyStateAction::without_handler("Add")),
        );
        assert_eq!(base, same);

        assert_ne!(base, same.clone().with_message("Still nothing"));
        assert_ne!(base, same.clone().with_image("( )"));
        assert_ne!(base, EmptyStateModel::default().with_message("Nothing here"));
    }

    proptest! {
        #[test]
        fn prop_action_equality_follows_title(a in ".{0,12}", b in ".{0,12}") {
            let left = EmptyStateAction::new(a.clone(), || {});
            let right = EmptyStateAction::without_handler(b.clone());
            prop_assert_eq!(left == right, a == b);
        }

        #[test]
        fn prop_model_equal_to_rebuilt_copy(
            message in proptest::option::of(".{0,24}"),
            art in proptest::option::of("[a-z#]{1,8}"),
            title in proptest::option::of("[A-Za-z ]{1,10}"),
        ) {
            let build = || EmptyStateModel::new(
                message.clone(),
                art.as_deref().map(EmptyStateImage::new),
                title.clone().map(|t| EmptyStateAction::new(t, || {})),
            );
            prop_assert_eq!(build(), build());
        }
    }
}
