use cursive::{view::Nameable, views::TextView};
use passgen::pool::CharacterClass;

use crate::helpers::{checkbox_name, errorbox, set_status};

#[test]
fn errorbox_adds_layer() {
    let mut siv = cursive::default();

    errorbox(&mut siv, &passgen::Error::Generic("unit test error"));

    assert_eq!(1, siv.screen().len());
}

#[test]
fn set_status_updates_status_bar() {
    let mut siv = cursive::default();
    siv.add_layer(TextView::new("").with_name("status_bar"));

    set_status(&mut siv, "unit test status");

    let content = siv
        .call_on_name("status_bar", |l: &mut TextView| {
            l.get_content().source().to_owned()
        })
        .unwrap();
    assert_eq!("unit test status", content);
}

#[test]
fn checkbox_names_are_unique() {
    let mut names: Vec<&str> = CharacterClass::ALL.iter().map(|c| checkbox_name(*c)).collect();
    names.sort_unstable();
    names.dedup();

    assert_eq!(4, names.len());
}
