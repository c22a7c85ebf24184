/*  passgen - a random password generator
    Copyright (C) 2026 the passgen developers

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU General Public License as published by
    the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.

    This program is distributed in the hope that it will be useful,
    but WITHOUT ANY WARRANTY; without even the implied warranty of
    MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
    GNU General Public License for more details.

    You should have received a copy of the GNU General Public License
    along with this program.  If not, see <https://www.gnu.org/licenses/>.
*/

use cursive::{
    event::Key,
    views::{Dialog, OnEventView, TextView},
    Cursive,
};
use passgen::{pool::CharacterClass, Error};

pub fn errorbox(ui: &mut Cursive, err: &Error) {
    let d = Dialog::around(TextView::new(format!("{err}")))
        .dismiss_button("Ok")
        .title("Error");

    let ev = OnEventView::new(d).on_event(Key::Esc, |s| {
        s.pop_layer();
    });

    ui.add_layer(ev);
}

pub fn set_status(ui: &mut Cursive, message: &str) {
    let message = message.to_owned();
    ui.call_on_name("status_bar", |l: &mut TextView| {
        l.set_content(message);
    });
}

pub fn checkbox_name(class: CharacterClass) -> &'static str {
    match class {
        CharacterClass::Uppercase => "uppercase_checkbox",
        CharacterClass::Lowercase => "lowercase_checkbox",
        CharacterClass::Digits => "digits_checkbox",
        CharacterClass::Symbols => "symbols_checkbox",
    }
}

#[cfg(test)]
#[path = "tests/helpers.rs"]
mod helpers_tests;
