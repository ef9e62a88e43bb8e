//! Clipboard and delete shortcuts.

use super::SketchArea;
use crate::effect::{Effect, UserMessage};
use crate::event::{Key, KeyPress};
use umlsketch_core::StoreReader;

/// Maps Ctrl+X / Ctrl+C / Ctrl+V and Delete to clipboard effects.
///
/// Keys typed into a text entry belong to the entry and are ignored.
pub(super) fn handle_key<S: StoreReader + ?Sized>(
    area: &SketchArea,
    store: &S,
    key: KeyPress,
    out: &mut Vec<Effect>,
) {
    if key.in_text_entry {
        return;
    }
    let selected = area.marking.selected();
    match (key.key, key.ctrl) {
        (Key::Char(c), true) => match c.to_ascii_lowercase() {
            'x' | 'c' if selected.is_empty() => {
                out.push(Effect::message(UserMessage::NothingSelected));
            }
            'x' => out.push(Effect::Cut(selected.clone())),
            'c' => out.push(Effect::Copy(selected.clone())),
            'v' => {
                if store.is_open() {
                    out.push(Effect::Paste {
                        diagram: area.marking.focused_diagram(),
                    });
                } else {
                    out.push(Effect::message(UserMessage::NoDatabase));
                }
            }
            _ => {}
        },
        (Key::Delete, _) => {
            if selected.is_empty() {
                out.push(Effect::message(UserMessage::NothingSelected));
            } else {
                out.push(Effect::Delete(selected.clone()));
            }
        }
        _ => {}
    }
}
