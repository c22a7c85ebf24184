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

use std::{path::PathBuf, process, thread, time::Duration};

use cursive::{
    event::{Event, Key},
    traits::*,
    views::{
        Button, Checkbox, Dialog, DummyView, EditView, HideableView, LinearLayout, TextView,
    },
    Cursive,
};
use passgen::{
    clipboard::{Clipboard, CopyTicket},
    pool::CharacterClass,
    screen::Screen,
    settings::{read_config, save_config, Settings},
};
use zeroize::Zeroizing;

mod helpers;

/// The order the toggles are shown in.
const TOGGLE_ORDER: [CharacterClass; 4] = [
    CharacterClass::Lowercase,
    CharacterClass::Uppercase,
    CharacterClass::Digits,
    CharacterClass::Symbols,
];

/// Everything the callbacks share, stored as the cursive user data.
struct App {
    screen: Screen,
    clipboard: Option<Clipboard>,
    clipboard_timeout: u64,
}

impl App {
    fn new(settings: &Settings) -> Self {
        Self {
            screen: Screen::new(settings),
            clipboard: None,
            clipboard_timeout: settings.clipboard_timeout,
        }
    }

    /// Copies the shown password. `Ok(None)` when there is nothing to copy.
    fn copy_password(&mut self) -> passgen::Result<Option<CopyTicket>> {
        let Some(password) = self.screen.password() else {
            return Ok(None);
        };
        let password = Zeroizing::new(password.to_owned());

        // created on the first copy and kept until the app exits
        if self.clipboard.is_none() {
            self.clipboard = Some(Clipboard::new()?);
        }
        match self.clipboard.as_mut() {
            Some(clipboard) => clipboard.copy(&password).map(Some),
            None => Ok(None),
        }
    }
}

/// Redraws the views that depend on the screen state.
fn refresh(ui: &mut Cursive) {
    let view_state = ui.with_user_data(|app: &mut App| {
        let screen = &app.screen;
        (
            screen.can_submit(),
            screen.visible_error(),
            screen.password().map(str::to_owned),
        )
    });
    let Some((can_submit, error, password)) = view_state else {
        return;
    };

    ui.call_on_name("length_error", |l: &mut TextView| {
        l.set_content(error.map(|e| e.message()).unwrap_or_default());
    });
    ui.call_on_name("generate_button", |b: &mut Button| {
        b.set_enabled(can_submit);
    });

    // views inside a hidden panel can't be found by name
    let shown = password.is_some();
    if shown {
        ui.call_on_name("result_panel", |v: &mut HideableView<Dialog>| {
            v.set_visible(true);
        });
    }
    ui.call_on_name("result_text", |l: &mut TextView| {
        l.set_content(password.unwrap_or_default());
    });
    if !shown {
        ui.call_on_name("result_panel", |v: &mut HideableView<Dialog>| {
            v.set_visible(false);
        });
    }
}

fn on_length_edit(ui: &mut Cursive, text: &str, _cursor: usize) {
    ui.with_user_data(|app: &mut App| app.screen.edit_length(text));
    refresh(ui);
}

fn toggle(ui: &mut Cursive, class: CharacterClass) {
    ui.with_user_data(|app: &mut App| app.screen.toggle(class));
    refresh(ui);
}

fn generate(ui: &mut Cursive) {
    let result = ui.with_user_data(|app: &mut App| app.screen.generate().map(|_| ()));
    if let Some(Err(err)) = result {
        log::debug!("refused to generate: {err}");
    }
    helpers::set_status(ui, "");
    refresh(ui);
}

/// Puts the checkboxes back in line with the options after a reset.
fn sync_checkboxes(ui: &mut Cursive) {
    let options = match ui.with_user_data(|app: &mut App| app.screen.options().clone()) {
        Some(options) => options,
        None => return,
    };

    for class in CharacterClass::ALL {
        ui.call_on_name(helpers::checkbox_name(class), |c: &mut Checkbox| {
            // dropping the returned event keeps the on_change callback from running
            let _ = c.set_checked(options.is_enabled(class));
        });
    }
}

fn reset(ui: &mut Cursive) {
    ui.with_user_data(|app: &mut App| app.screen.reset());
    ui.call_on_name("length_input", |e: &mut EditView| {
        let _ = e.set_content("");
    });
    sync_checkboxes(ui);
    helpers::set_status(ui, "");
    refresh(ui);
}

fn copy(ui: &mut Cursive) {
    let copied = ui.with_user_data(|app: &mut App| {
        app.copy_password()
            .map(|ticket| ticket.map(|t| (t, app.clipboard_timeout)))
    });

    let (ticket, clipboard_timeout) = match copied {
        Some(Ok(Some(copied))) => copied,
        Some(Err(err)) => {
            helpers::errorbox(ui, &err);
            return;
        }
        _ => {
            helpers::set_status(ui, "Generate a password first");
            return;
        }
    };

    if clipboard_timeout > 0 {
        clear_after(ui, ticket, clipboard_timeout);
        helpers::set_status(
            ui,
            &format!("Copied password to copy buffer for {clipboard_timeout} seconds"),
        );
    } else {
        helpers::set_status(ui, "Copied password to copy buffer");
    }
}

/// Sends `clear_copy` back to the UI thread once the timeout has passed.
fn clear_after(ui: &mut Cursive, ticket: CopyTicket, timeout_secs: u64) {
    let cb_sink = ui.cb_sink().clone();
    thread::spawn(move || {
        thread::sleep(Duration::from_secs(timeout_secs));
        // fails once the UI has quit, the clipboard is gone by then
        let _ = cb_sink.send(Box::new(move |ui: &mut Cursive| clear_copy(ui, ticket)));
    });
}

fn clear_copy(ui: &mut Cursive, ticket: CopyTicket) {
    let cleared = ui
        .with_user_data(|app: &mut App| {
            app.clipboard
                .as_mut()
                .map(|clipboard| clipboard.clear_if_current(ticket))
        })
        .flatten();

    match cleared {
        Some(Ok(true)) => helpers::set_status(ui, "Cleared the copy buffer"),
        Some(Err(err)) => log::warn!("failed to clear the clipboard: {err}"),
        _ => (),
    }
}

fn length_row() -> LinearLayout {
    LinearLayout::horizontal()
        .child(
            LinearLayout::vertical()
                .child(TextView::new("Password Length (Ex. 7)"))
                .child(TextView::new("").with_name("length_error")),
        )
        .child(DummyView.full_width())
        .child(
            EditView::new()
                .on_edit(on_length_edit)
                .on_submit(|ui, _| generate(ui))
                .with_name("length_input")
                .fixed_width(8),
        )
}

fn toggle_row(class: CharacterClass, checked: bool) -> LinearLayout {
    let mut checkbox = Checkbox::new();
    let _ = checkbox.set_checked(checked);
    let checkbox = checkbox.on_change(move |ui, _| toggle(ui, class));

    LinearLayout::horizontal()
        .child(TextView::new(class.label()))
        .child(DummyView.full_width())
        .child(checkbox.with_name(helpers::checkbox_name(class)))
}

/// Builds the generator screen into `ui`, with the screen state stored as user data.
fn setup(ui: &mut Cursive, settings: &Settings) {
    let app = App::new(settings);

    let mut form = LinearLayout::vertical().child(length_row());
    for class in TOGGLE_ORDER {
        form.add_child(toggle_row(class, app.screen.options().is_enabled(class)));
    }
    form.add_child(DummyView);
    form.add_child(
        LinearLayout::horizontal()
            .child(
                Button::new("Generate Password", generate)
                    .disabled()
                    .with_name("generate_button"),
            )
            .child(DummyView)
            .child(Button::new("Reset Password", reset)),
    );

    let result_panel = HideableView::new(
        Dialog::around(
            LinearLayout::vertical()
                .child(TextView::new("Press ctrl-y to copy"))
                .child(TextView::new("").with_name("result_text")),
        )
        .title("Result:"),
    )
    .hidden()
    .with_name("result_panel");

    ui.set_user_data(app);

    ui.add_global_callback(Event::CtrlChar('y'), copy);
    ui.add_global_callback(Event::CtrlChar('r'), reset);
    ui.add_global_callback(Key::Esc, |s| s.quit());

    ui.add_layer(
        LinearLayout::vertical()
            .child(Dialog::around(form.fixed_width(48)).title("Password Generator"))
            .child(result_panel)
            .child(
                LinearLayout::horizontal()
                    .child(TextView::new("ctrl-y: Copy | ctrl-r: Reset | esc: Quit | "))
                    .child(TextView::new("").with_name("status_bar"))
                    .full_width(),
            ),
    );

    refresh(ui);
}

fn help() {
    println!("A random password generator for the terminal.");
    println!();
    println!("usage: passgen-cursive [-h|--help]");
    println!();
    println!("Enter a length between 4 and 16, pick the character classes and press");
    println!("'Generate Password'. ctrl-y copies the result, ctrl-r resets the form.");
}

fn load_settings() -> passgen::Result<Settings> {
    let home = std::env::var_os("HOME").map(PathBuf::from);
    let xdg_config_home = std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from);
    if home.is_none() && xdg_config_home.is_none() {
        log::warn!("neither HOME nor XDG_CONFIG_HOME is set, using the default settings");
        return Ok(Settings::default());
    }

    let (settings, config_file_location) = read_config(&home, &xdg_config_home)?;
    if !config_file_location.exists() {
        save_config(&settings, &config_file_location)?;
    }

    Ok(settings)
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    match args.len() {
        1 => (),
        2 if args[1] == "-h" || args[1] == "--help" => {
            help();
            process::exit(0);
        }
        _ => {
            eprintln!("Unknown argument, usage: passgen-cursive [-h|--help]");
            process::exit(1);
        }
    }

    let settings = match load_settings() {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("Error {err}");
            process::exit(1);
        }
    };

    let mut ui = cursive::default();

    if let Err(err) = ui.load_toml(include_str!("../res/style.toml")) {
        log::warn!("failed to load the built in theme: {err:?}");
    }
    if let Some(style_path) = &settings.style_path {
        if let Err(err) = ui.load_theme_file(style_path) {
            eprintln!("Error loading theme {}: {err:?}", style_path.display());
            process::exit(1);
        }
    }

    setup(&mut ui, &settings);

    ui.run();
}

#[cfg(test)]
#[path = "tests/main.rs"]
mod main_tests;
