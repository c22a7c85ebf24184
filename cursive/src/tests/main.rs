use super::*;
use passgen::{password_generator::Sampling, validation::ValidationError};

fn text_of(siv: &mut Cursive, name: &str) -> String {
    siv.call_on_name(name, |l: &mut TextView| l.get_content().source().to_owned())
        .unwrap()
}

fn is_checked(siv: &mut Cursive, class: CharacterClass) -> bool {
    siv.call_on_name(helpers::checkbox_name(class), |c: &mut Checkbox| {
        c.is_checked()
    })
    .unwrap()
}

fn generate_enabled(siv: &mut Cursive) -> bool {
    siv.call_on_name("generate_button", |b: &mut Button| b.is_enabled())
        .unwrap()
}

fn result_visible(siv: &mut Cursive) -> bool {
    siv.call_on_name("result_panel", |v: &mut HideableView<Dialog>| {
        v.is_visible()
    })
    .unwrap()
}

#[test]
fn setup_starts_idle() {
    let mut siv = cursive::default();
    setup(&mut siv, &Settings::default());

    assert!(!generate_enabled(&mut siv));
    assert!(!result_visible(&mut siv));
    assert_eq!("", text_of(&mut siv, "length_error"));
    assert!(is_checked(&mut siv, CharacterClass::Lowercase));
    assert!(!is_checked(&mut siv, CharacterClass::Uppercase));
    assert!(!is_checked(&mut siv, CharacterClass::Digits));
    assert!(!is_checked(&mut siv, CharacterClass::Symbols));
}

#[test]
fn short_length_shows_error_and_disables_generate() {
    let mut siv = cursive::default();
    setup(&mut siv, &Settings::default());

    on_length_edit(&mut siv, "3", 1);

    assert!(!generate_enabled(&mut siv));
    assert_eq!(
        ValidationError::TooShort.message(),
        text_of(&mut siv, "length_error")
    );

    on_length_edit(&mut siv, "", 0);
    assert_eq!("Length is required", text_of(&mut siv, "length_error"));
}

#[test]
fn valid_length_enables_generate() {
    let mut siv = cursive::default();
    setup(&mut siv, &Settings::default());

    on_length_edit(&mut siv, "8", 1);

    assert!(generate_enabled(&mut siv));
    assert_eq!("", text_of(&mut siv, "length_error"));
}

#[test]
fn generate_shows_result() {
    let mut siv = cursive::default();
    setup(&mut siv, &Settings::default());

    on_length_edit(&mut siv, "8", 1);
    generate(&mut siv);

    assert!(result_visible(&mut siv));
    let password = text_of(&mut siv, "result_text");
    assert!(password.len() <= 8);
    assert!(password.chars().all(|c| c.is_ascii_lowercase()));
}

#[test]
fn generate_with_invalid_length_keeps_result_hidden() {
    let mut siv = cursive::default();
    setup(&mut siv, &Settings::default());

    on_length_edit(&mut siv, "40", 2);
    generate(&mut siv);

    assert!(!result_visible(&mut siv));
    assert_eq!(
        "Should be maximum of 16 characters",
        text_of(&mut siv, "length_error")
    );
}

#[test]
fn toggle_updates_screen() {
    let mut siv = cursive::default();
    setup(&mut siv, &Settings::default());

    toggle(&mut siv, CharacterClass::Symbols);

    let options = siv
        .with_user_data(|app: &mut App| app.screen.options().clone())
        .unwrap();
    assert!(options.include_lower);
    assert!(!options.include_upper);
    assert!(!options.include_digits);
    assert!(options.include_symbols);
}

#[test]
fn reset_restores_form() {
    let settings = Settings {
        sampling: Sampling::Exclusive,
        ..Settings::default()
    };
    let mut siv = cursive::default();
    setup(&mut siv, &settings);

    siv.call_on_name("uppercase_checkbox", |c: &mut Checkbox| {
        let _ = c.set_checked(true);
    });
    toggle(&mut siv, CharacterClass::Uppercase);
    siv.call_on_name("length_input", |e: &mut EditView| {
        let _ = e.set_content("12");
    });
    on_length_edit(&mut siv, "12", 2);
    generate(&mut siv);
    assert!(result_visible(&mut siv));
    assert_eq!(12, text_of(&mut siv, "result_text").len());

    reset(&mut siv);

    assert!(!result_visible(&mut siv));
    assert!(!generate_enabled(&mut siv));
    assert!(!is_checked(&mut siv, CharacterClass::Uppercase));
    assert!(is_checked(&mut siv, CharacterClass::Lowercase));
    let length = siv
        .call_on_name("length_input", |e: &mut EditView| e.get_content())
        .unwrap();
    assert_eq!("", length.as_str());
    let result_shown = siv
        .with_user_data(|app: &mut App| app.screen.is_result_shown())
        .unwrap();
    assert!(!result_shown);
}

#[test]
fn copy_without_password() {
    let mut siv = cursive::default();
    setup(&mut siv, &Settings::default());

    copy(&mut siv);

    assert_eq!("Generate a password first", text_of(&mut siv, "status_bar"));
    let clipboard_opened = siv
        .with_user_data(|app: &mut App| app.clipboard.is_some())
        .unwrap();
    assert!(!clipboard_opened);
}

#[test]
fn copy_password_needs_a_result() {
    let mut app = App::new(&Settings::default());

    assert!(matches!(app.copy_password(), Ok(None)));
    assert!(app.clipboard.is_none());
}

#[test]
fn app_takes_clipboard_timeout_from_settings() {
    let settings = Settings {
        clipboard_timeout: 5,
        ..Settings::default()
    };
    let mut siv = cursive::default();
    setup(&mut siv, &settings);

    let timeout = siv
        .with_user_data(|app: &mut App| app.clipboard_timeout)
        .unwrap();
    assert_eq!(5, timeout);
}

#[test]
fn clear_without_clipboard_leaves_status() {
    let mut siv = cursive::default();
    setup(&mut siv, &Settings::default());
    helpers::set_status(&mut siv, "Copied password to copy buffer");

    let ticket = passgen::clipboard::CopyTracker::default().next();
    clear_copy(&mut siv, ticket);

    assert_eq!(
        "Copied password to copy buffer",
        text_of(&mut siv, "status_bar")
    );
}
