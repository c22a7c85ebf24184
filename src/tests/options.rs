use super::*;

#[test]
fn defaults() {
    let options = GenerationOptions::default();

    assert!(options.include_lower);
    assert!(!options.include_upper);
    assert!(!options.include_digits);
    assert!(!options.include_symbols);
    assert_eq!(None, options.length);
}

#[test]
fn toggle_only_changes_one_flag() {
    for class in CharacterClass::ALL {
        let mut options = GenerationOptions::default();
        let before = options.clone();

        options.toggle(class);

        for other in CharacterClass::ALL {
            if other == class {
                assert_ne!(before.is_enabled(other), options.is_enabled(other));
            } else {
                assert_eq!(before.is_enabled(other), options.is_enabled(other));
            }
        }
    }
}

#[test]
fn named_toggles() {
    let mut options = GenerationOptions::default();

    options.toggle_lower();
    options.toggle_upper();
    options.toggle_digits();
    options.toggle_symbols();

    assert!(!options.include_lower);
    assert!(options.include_upper);
    assert!(options.include_digits);
    assert!(options.include_symbols);

    options.toggle_digits();

    assert!(!options.include_lower);
    assert!(options.include_upper);
    assert!(!options.include_digits);
    assert!(options.include_symbols);
}

#[test]
fn all_flags_off_is_accepted() {
    let mut options = GenerationOptions::default();
    options.toggle_lower();

    assert!(!options.any_enabled());
    assert!(options.pool().is_empty());
}

#[test]
fn reset_restores_defaults() {
    let mut options = GenerationOptions {
        include_lower: false,
        include_upper: true,
        include_digits: true,
        include_symbols: true,
        length: Some(12),
    };

    options.reset();

    assert_eq!(GenerationOptions::default(), options);
}

#[test]
fn pool_follows_flags() {
    let mut options = GenerationOptions::default();
    assert_eq!("abcdefghijklmnopqrstuvwxyz", format!("{}", options.pool()));

    options.toggle_digits();
    options.toggle_upper();
    assert_eq!(
        "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789",
        format!("{}", options.pool())
    );
    assert_eq!(
        vec![
            CharacterClass::Uppercase,
            CharacterClass::Lowercase,
            CharacterClass::Digits
        ],
        options.enabled_classes()
    );
}
