//! Several formatters on one page must never act on each other's fields.

use std::cell::RefCell;
use std::rc::Rc;

use markpad_core::{
    FieldPlatform, FormatAction, FormatOutcome, Formatter, Key, KeyCombo, KeybindingConfig,
    KeydownResult, Modifiers, NoPrompt, PlatformError, Selection, TOOLBAR_BUTTONS,
};

/// Shared "page": which field id has focus.
type Page = Rc<RefCell<Option<String>>>;

#[derive(Clone)]
struct PageField {
    id: String,
    page: Page,
    value: Rc<RefCell<String>>,
    selection: Rc<RefCell<Selection>>,
}

impl PageField {
    fn new(page: &Page, id: &str, value: &str) -> Self {
        let len = value.chars().count();
        Self {
            id: id.to_string(),
            page: Rc::clone(page),
            value: Rc::new(RefCell::new(value.to_string())),
            selection: Rc::new(RefCell::new(Selection::new(0, len))),
        }
    }
}

impl FieldPlatform for PageField {
    fn field_id(&self) -> &str {
        &self.id
    }

    fn value(&self) -> String {
        self.value.borrow().clone()
    }

    fn selection(&self) -> Selection {
        *self.selection.borrow()
    }

    fn set_value(&self, value: &str) -> Result<(), PlatformError> {
        *self.value.borrow_mut() = value.to_string();
        Ok(())
    }

    fn set_selection(&self, selection: Selection) -> Result<(), PlatformError> {
        *self.selection.borrow_mut() = selection;
        Ok(())
    }

    fn focus(&self) -> Result<(), PlatformError> {
        *self.page.borrow_mut() = Some(self.id.clone());
        Ok(())
    }

    fn has_focus(&self) -> bool {
        self.page.borrow().as_deref() == Some(self.id.as_str())
    }
}

fn setup() -> (Page, Formatter<PageField>, Formatter<PageField>) {
    let page: Page = Rc::new(RefCell::new(None));
    let content = Formatter::new(
        PageField::new(&page, "id_content", "body"),
        KeybindingConfig::default(),
    );
    let excerpt = Formatter::new(
        PageField::new(&page, "id_excerpt", "summary"),
        KeybindingConfig::default(),
    );
    (page, content, excerpt)
}

#[test]
fn clicks_only_reach_their_own_field() {
    let (_page, content, excerpt) = setup();

    // Every button on the content toolbar is tagged for the content field.
    for button in &TOOLBAR_BUTTONS {
        let result = excerpt
            .handle_click("id_content", button.action, &mut NoPrompt)
            .unwrap();
        assert_eq!(result, None, "{}", button.label);
    }
    assert_eq!(excerpt.field().value(), "summary");

    let result = content
        .handle_click("id_content", FormatAction::Code, &mut NoPrompt)
        .unwrap();
    assert_eq!(result, Some(FormatOutcome::Applied { cursor: 6 }));
    assert_eq!(content.field().value(), "`body`");
    assert_eq!(excerpt.field().value(), "summary");
}

#[test]
fn shortcuts_only_reach_the_focused_field() {
    let (page, content, excerpt) = setup();
    let bold = KeyCombo::with_modifiers(Key::character("b"), Modifiers::CTRL);

    excerpt.field().focus().unwrap();

    // Both formatters see the same keydown, only the focused one acts.
    assert_eq!(
        content.handle_keydown(&bold, &mut NoPrompt).unwrap(),
        KeydownResult::PassThrough
    );
    assert_eq!(
        excerpt.handle_keydown(&bold, &mut NoPrompt).unwrap(),
        KeydownResult::Handled
    );

    assert_eq!(content.field().value(), "body");
    assert_eq!(excerpt.field().value(), "**summary**");
    assert_eq!(page.borrow().as_deref(), Some("id_excerpt"));
}

#[test]
fn applying_focuses_the_formatted_field() {
    let (page, content, excerpt) = setup();
    excerpt.field().focus().unwrap();

    content.apply(FormatAction::Quote, &mut NoPrompt).unwrap();

    assert_eq!(content.field().value(), "\n> body\n");
    assert_eq!(page.borrow().as_deref(), Some("id_content"));
}

#[test]
fn link_prompt_per_field() {
    let (_page, content, excerpt) = setup();
    let mut answers = vec![Some("https://a.test".to_string()), None];
    let mut prompt = |_: &str| answers.remove(0);

    content.apply(FormatAction::Link, &mut prompt).unwrap();
    excerpt.apply(FormatAction::Link, &mut prompt).unwrap();

    assert_eq!(content.field().value(), "[body](https://a.test)");
    assert_eq!(excerpt.field().value(), "summary");
}
