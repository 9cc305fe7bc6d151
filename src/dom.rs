//! Interfaces to the host document environment.
//!
//! The crate performs no real DOM work. Hosts (a browser bridge, a webview
//! shim, a test harness) implement these traits over their element handles
//! and drive the interceptor from their own event loop.
//!
//! Unsupported primitives degrade instead of erroring: readers return
//! `None`, writers return `false`, and callers skip the write silently.

/// How a target element exposes its editable content.
///
/// Re-resolved on every event; never ownership-bearing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// An input or text area: a plain value string plus integer selection
    /// offsets.
    PlainValue,
    /// A rich editable region: content exposed as rendered markup with its
    /// own insertion point.
    EditableRegion,
}

/// Synthetic notifications dispatched after a programmatic mutation, so
/// listeners (e.g. a form framework) observe the change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldEvent {
    Input,
    Change,
}

/// An element currently receiving input.
///
/// `value`/`set_value` cover the plain-value surface, `markup`/`set_markup`
/// the rendered-markup surface; which pair applies follows from
/// [`kind`](Self::kind). Password inputs must report
/// [`is_password`](Self::is_password) truthfully; the interceptor never
/// reads, rewrites, or intercepts them.
pub trait EditableField {
    /// Classification of this element's editable surface.
    fn kind(&self) -> FieldKind;

    /// Whether this is a password-type input (always excluded from
    /// interception).
    fn is_password(&self) -> bool;

    /// Current plain value string, or `None` if the element has none.
    fn value(&self) -> Option<String>;

    /// Write the plain value string. Returns `false` if the element does
    /// not support a value write.
    fn set_value(&mut self, value: &str) -> bool;

    /// Current rendered markup, or `None` if the element exposes none.
    fn markup(&self) -> Option<String>;

    /// Write the rendered markup. Returns `false` if unsupported.
    fn set_markup(&mut self, markup: &str) -> bool;

    /// Current selection bounds as character offsets `(start, end)`,
    /// `start <= end`, or `None` if the element has no readable selection.
    fn selection(&self) -> Option<(usize, usize)>;

    /// Move the selection. Returns `false` if unsupported.
    fn set_selection(&mut self, start: usize, end: usize) -> bool;

    /// Insert text at the current insertion point of an editable region.
    /// Returns `false` if unsupported.
    fn insert_text(&mut self, text: &str) -> bool;

    /// Dispatch a synthetic notification event on this element.
    fn dispatch(&mut self, event: FieldEvent);
}

/// A node in the host document tree, for target resolution.
pub trait DomNode: Clone {
    /// Parent node, or `None` at the root.
    fn parent(&self) -> Option<Self>;

    /// Whether this node is an editable region.
    fn is_editable_region(&self) -> bool;
}

/// Resolve the effective editable target for an event: the nearest
/// ancestor (including `target` itself) that is an editable region, or
/// `target` itself when no such ancestor exists.
pub fn resolve_target<N: DomNode>(target: &N) -> N {
    let mut node = Some(target.clone());
    while let Some(current) = node {
        if current.is_editable_region() {
            return current;
        }
        node = current.parent();
    }
    target.clone()
}
