use std::path::PathBuf;

fn generate_man_page() -> String {
    man::prelude::Manual::new("passgen-cursive")
        .about("A random password generator for the terminal.")
        .flag(
            man::prelude::Flag::new()
                .short("-h")
                .long("--help")
                .help("Print a help text"),
        )
        .description(
            "passgen-cursive is an ncurses application that generates a random password from the \
character classes you enable (lowercase, uppercase, numbers and symbols) and a length between 4 and 16.",
        )
        .custom(
            man::prelude::Section::new("Keyboard shortcuts")
                .paragraph("Enter : in the length field, generate a password")
                .paragraph("Control + y : copy the generated password to the copy buffer")
                .paragraph("Control + r : reset the form")
                .paragraph("Escape : quit "),
        )
        .custom(
            man::prelude::Section::new("usage note").paragraph(
                "passgen-cursive reads $XDG_CONFIG_HOME/passgen/settings.toml, or \
$HOME/.config/passgen/settings.toml if XDG_CONFIG_HOME isn't set. The keys are sampling \
(inclusive or exclusive), rng (thread or os), require_class, clipboard_timeout and style_path.",
            ),
        )
        .render()
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let mut dest_path = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    dest_path.push("passgen-cursive.1");

    print!("generating man page to {} ", dest_path.display());
    let res = std::fs::write(&dest_path, generate_man_page());
    if res.is_ok() {
        println!("success");
    } else {
        println!("error: {:?}", res.err().unwrap());
    }
}
