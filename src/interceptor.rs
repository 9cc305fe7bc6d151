//! Paste interception: binds the sanitizer to live fields without
//! corrupting cursor state or bypassing normal typing.
//!
//! Hosts own the actual event registration. They create an interceptor
//! with [`PasteInterceptor::attach`], forward paste events (preemptive
//! policy) or manual-paste keystrokes (post-hoc policy) to it, and call
//! [`PasteInterceptor::detach`] when tearing listeners down.

use serde::{Deserialize, Serialize};

use crate::caret::splice_at_selection;
use crate::dom::{EditableField, FieldEvent, FieldKind};
use crate::sanitize::{clean_markup_noise, looks_like_html, strip_all_markup};

/// When sanitization runs relative to the native paste.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PastePolicy {
    /// Intercept the paste event, prevent the native paste, and splice the
    /// stripped clipboard text in manually. No flash of unsanitized
    /// content; this is the primary policy.
    #[default]
    Preemptive,
    /// Let the native paste land, then scrub the element's rendered markup
    /// in a deferred pass. Fallback for hosts that cannot intercept the
    /// native paste event.
    PostHoc,
}

/// Paste interception handle.
///
/// Created with [`attach`](Self::attach), which also sweeps pre-populated
/// field values. After [`detach`](Self::detach) every handler call is a
/// no-op, so a host may drop its listener registrations in any order.
#[derive(Debug)]
pub struct PasteInterceptor {
    policy: PastePolicy,
    attached: bool,
}

impl PasteInterceptor {
    /// Attach to a set of candidate fields.
    ///
    /// Runs the setup sweep: every non-password field whose current value
    /// looks like HTML (content populated before the interceptor existed,
    /// e.g. server-rendered values) is rewritten with its stripped form.
    pub fn attach<'a, F, I>(policy: PastePolicy, fields: I) -> Self
    where
        F: EditableField + 'a,
        I: IntoIterator<Item = &'a mut F>,
    {
        let mut total = 0usize;
        let mut cleaned = 0usize;
        for field in fields {
            total += 1;
            if sweep_field(field) {
                cleaned += 1;
            }
        }
        log::info!("clean-paste attached to {total} fields ({cleaned} pre-populated values cleaned)");
        Self {
            policy,
            attached: true,
        }
    }

    /// The configured triggering policy.
    pub fn policy(&self) -> PastePolicy {
        self.policy
    }

    /// Whether the interceptor is still live.
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Tear down: every subsequent handler call becomes a no-op. The host
    /// removes its own event listeners alongside.
    pub fn detach(&mut self) {
        if self.attached {
            self.attached = false;
            log::debug!("clean-paste detached");
        }
    }

    /// Preemptive entry point: handle an intercepted paste event on
    /// `field` with the clipboard's plain-text payload.
    ///
    /// Returns whether the paste was consumed: the host prevents the
    /// native paste exactly when this returns `true`. Absent clipboard
    /// data is treated as empty text, not an error. Returns `false`
    /// (leaving the native paste alone) when detached, when the policy is
    /// [`PastePolicy::PostHoc`], on password fields, or when the target
    /// does not support the required write.
    pub fn handle_paste<F: EditableField>(
        &self,
        field: &mut F,
        clipboard_text: Option<&str>,
    ) -> bool {
        if !self.attached || self.policy != PastePolicy::Preemptive {
            return false;
        }
        if field.is_password() {
            return false;
        }

        let clean = strip_all_markup(clipboard_text.unwrap_or(""));

        match field.kind() {
            FieldKind::EditableRegion => {
                if !field.insert_text(&clean) {
                    log::debug!("paste target rejected text insertion; skipping");
                    return false;
                }
            }
            FieldKind::PlainValue => {
                let Some(value) = field.value() else {
                    log::debug!("paste target exposes no value; skipping");
                    return false;
                };
                // Caret-at-end fallback when the selection is unreadable.
                let content_len = value.chars().count();
                let (start, end) = field.selection().unwrap_or((content_len, content_len));
                let splice = splice_at_selection(&value, start, end, &clean);
                if !field.set_value(&splice.value) {
                    log::debug!("paste target rejected value write; skipping");
                    return false;
                }
                field.set_selection(splice.caret, splice.caret);
            }
        }

        field.dispatch(FieldEvent::Input);
        field.dispatch(FieldEvent::Change);
        true
    }

    /// Post-hoc entry point: call on the manual-paste key combination
    /// (e.g. Ctrl+V) before the native paste lands.
    ///
    /// Returns the deferred correction, or `None` when detached or when
    /// the policy is [`PastePolicy::Preemptive`]. The host must schedule
    /// [`PostPasteFixup::apply`] on its task queue, yielding at least
    /// once, so it runs strictly after the native paste has fully applied
    /// to the element, never concurrently with it.
    pub fn handle_paste_key(&self) -> Option<PostPasteFixup> {
        if !self.attached || self.policy != PastePolicy::PostHoc {
            return None;
        }
        Some(PostPasteFixup { _private: () })
    }
}

/// Deferred post-paste correction produced by
/// [`PasteInterceptor::handle_paste_key`]. Consumed by
/// [`apply`](Self::apply): each paste yields one fixup, run once.
#[derive(Debug)]
pub struct PostPasteFixup {
    _private: (),
}

impl PostPasteFixup {
    /// Re-read the resolved target's rendered markup and scrub markup
    /// noise in place.
    ///
    /// `field` is the effective editable target (hosts resolve it with
    /// [`crate::dom::resolve_target`] at apply time, against the
    /// then-current tree). Password fields, markup-less elements, and
    /// already-clean content are left untouched.
    pub fn apply<F: EditableField>(self, field: &mut F) {
        if field.is_password() {
            return;
        }
        let Some(markup) = field.markup() else {
            return;
        };
        if markup.is_empty() {
            return;
        }
        let cleaned = clean_markup_noise(&markup);
        if cleaned != markup && !field.set_markup(&cleaned) {
            log::debug!("post-paste target rejected markup write; skipping");
        }
    }
}

/// Setup-time sweep of one field. Returns whether its value was rewritten.
fn sweep_field<F: EditableField>(field: &mut F) -> bool {
    if field.is_password() {
        return false;
    }
    let Some(value) = field.value() else {
        return false;
    };
    if value.is_empty() || !looks_like_html(&value) {
        return false;
    }
    field.set_value(&strip_all_markup(&value))
}
