use crate::core::navigation::{key_command, KeyCommand};
use crate::dom;
use crate::nav::Navigation;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_keydown(ev: &web::KeyboardEvent, nav: &Navigation) {
    let Some(cmd) = key_command(&ev.key(), ev.ctrl_key(), ev.shift_key()) else {
        return;
    };
    let handled = match cmd {
        KeyCommand::FocusNextLink => nav.focus_adjacent_link(false),
        KeyCommand::FocusPreviousLink => nav.focus_adjacent_link(true),
        KeyCommand::NextSection => nav.go_to_next(),
        KeyCommand::PreviousSection => nav.go_to_previous(),
        KeyCommand::Jump(section) => nav.go_to(section),
    };
    // Tab outside the nav ring keeps its default behavior.
    let focus_move = matches!(
        cmd,
        KeyCommand::FocusNextLink | KeyCommand::FocusPreviousLink
    );
    if handled || !focus_move {
        ev.prevent_default();
    }
}

pub fn wire_keyboard(nav: &Navigation) {
    let nav_cb = nav.clone();
    dom::add_listener(nav.document(), "keydown", move |ev| {
        if let Some(kev) = ev.dyn_ref::<web::KeyboardEvent>() {
            handle_keydown(kev, &nav_cb);
        }
    });
}
