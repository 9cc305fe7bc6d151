//! Shared integration test doubles for clean-paste.
//!
//! Include this module at the top of each test file that needs it:
//!
//! ```ignore
//! mod common;
//! use common::{MockField, MockNode};
//! ```
//!
//! Note: Rust integration tests use `mod common;` (not `use`) to bring in
//! helpers from `tests/common/mod.rs`. The `#[allow(dead_code)]` attribute
//! suppresses warnings when only a subset of helpers are used per file.

#![allow(dead_code)]

use std::rc::Rc;

use clean_paste::{DomNode, EditableField, FieldEvent, FieldKind};

/// In-memory stand-in for a host editable element.
///
/// Records every dispatched synthetic event in `events`. The `supports_*`
/// flags simulate elements that reject a primitive (a non-text input, a
/// selection-less element), for exercising the skip-silently paths.
#[derive(Debug, Clone)]
pub struct MockField {
    pub kind: FieldKind,
    pub password: bool,
    pub value: String,
    pub markup: String,
    pub selection: (usize, usize),
    pub events: Vec<FieldEvent>,
    pub supports_value: bool,
    pub supports_selection: bool,
    pub supports_insert: bool,
}

impl MockField {
    /// A plain input/text-area style field.
    pub fn plain(value: &str) -> Self {
        Self {
            kind: FieldKind::PlainValue,
            password: false,
            value: value.to_string(),
            markup: String::new(),
            selection: (0, 0),
            events: Vec::new(),
            supports_value: true,
            supports_selection: true,
            supports_insert: false,
        }
    }

    /// A rich editable-region style element holding rendered markup.
    pub fn region(markup: &str) -> Self {
        Self {
            kind: FieldKind::EditableRegion,
            password: false,
            value: String::new(),
            markup: markup.to_string(),
            selection: (0, 0),
            events: Vec::new(),
            supports_value: false,
            supports_selection: false,
            supports_insert: true,
        }
    }

    /// A password input (must never be touched).
    pub fn password(value: &str) -> Self {
        let mut field = Self::plain(value);
        field.password = true;
        field
    }

    pub fn with_selection(mut self, start: usize, end: usize) -> Self {
        self.selection = (start, end);
        self
    }
}

impl EditableField for MockField {
    fn kind(&self) -> FieldKind {
        self.kind
    }

    fn is_password(&self) -> bool {
        self.password
    }

    fn value(&self) -> Option<String> {
        self.supports_value.then(|| self.value.clone())
    }

    fn set_value(&mut self, value: &str) -> bool {
        if !self.supports_value {
            return false;
        }
        self.value = value.to_string();
        true
    }

    fn markup(&self) -> Option<String> {
        (self.kind == FieldKind::EditableRegion).then(|| self.markup.clone())
    }

    fn set_markup(&mut self, markup: &str) -> bool {
        if self.kind != FieldKind::EditableRegion {
            return false;
        }
        self.markup = markup.to_string();
        true
    }

    fn selection(&self) -> Option<(usize, usize)> {
        self.supports_selection.then_some(self.selection)
    }

    fn set_selection(&mut self, start: usize, end: usize) -> bool {
        if !self.supports_selection {
            return false;
        }
        self.selection = (start, end);
        true
    }

    fn insert_text(&mut self, text: &str) -> bool {
        if !self.supports_insert {
            return false;
        }
        self.markup.push_str(text);
        true
    }

    fn dispatch(&mut self, event: FieldEvent) {
        self.events.push(event);
    }
}

/// Node in a tiny in-memory tree, for `resolve_target` tests.
#[derive(Debug, Clone)]
pub struct MockNode {
    inner: Rc<NodeInner>,
}

#[derive(Debug)]
struct NodeInner {
    name: &'static str,
    editable_region: bool,
    parent: Option<MockNode>,
}

impl MockNode {
    pub fn new(name: &'static str, editable_region: bool, parent: Option<&MockNode>) -> Self {
        Self {
            inner: Rc::new(NodeInner {
                name,
                editable_region,
                parent: parent.cloned(),
            }),
        }
    }

    pub fn name(&self) -> &'static str {
        self.inner.name
    }
}

impl DomNode for MockNode {
    fn parent(&self) -> Option<Self> {
        self.inner.parent.clone()
    }

    fn is_editable_region(&self) -> bool {
        self.inner.editable_region
    }
}
