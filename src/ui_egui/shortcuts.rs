use crate::services::picker::PickerKey;

const KEY_MAP: [(egui::Key, PickerKey); 11] = [
    (egui::Key::ArrowUp, PickerKey::ArrowUp),
    (egui::Key::ArrowDown, PickerKey::ArrowDown),
    (egui::Key::ArrowLeft, PickerKey::ArrowLeft),
    (egui::Key::ArrowRight, PickerKey::ArrowRight),
    (egui::Key::Enter, PickerKey::Enter),
    (egui::Key::Space, PickerKey::Space),
    (egui::Key::Home, PickerKey::Home),
    (egui::Key::End, PickerKey::End),
    (egui::Key::PageUp, PickerKey::PageUp),
    (egui::Key::PageDown, PickerKey::PageDown),
    (egui::Key::Escape, PickerKey::Escape),
];

pub fn picker_key(key: egui::Key) -> Option<PickerKey> {
    KEY_MAP
        .iter()
        .find(|(egui_key, _)| *egui_key == key)
        .map(|(_, picker_key)| *picker_key)
}

/// Take this frame's picker key presses out of the input queue so egui's own
/// focus traversal does not also act on them.
pub(crate) fn consume_picker_keys(ctx: &egui::Context) -> Vec<PickerKey> {
    ctx.input_mut(|input| drain_picker_keys(&mut input.events))
}

/// Remove unmodified picker key presses from `events`, in arrival order.
fn drain_picker_keys(events: &mut Vec<egui::Event>) -> Vec<PickerKey> {
    let mut keys = Vec::new();
    events.retain(|event| {
        let egui::Event::Key {
            key,
            pressed: true,
            modifiers,
            ..
        } = event
        else {
            return true;
        };
        match picker_key(*key) {
            Some(picker_key) if modifiers.is_none() => {
                keys.push(picker_key);
                false
            }
            _ => true,
        }
    });
    keys
}
