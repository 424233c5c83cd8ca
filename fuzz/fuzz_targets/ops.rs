#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() > 4 * 1024 {
        return;
    }
    let text = String::from_utf8_lossy(data);

    // Trimming: idempotent, never grows.
    let trimmed = textops::trim(&text);
    assert_eq!(textops::trim(&trimmed), trimmed);
    assert!(trimmed.len() <= text.len());

    // Padding: result length is max(len, width).
    let len = text.chars().count();
    for width in [0, 1, len, len + 7] {
        assert_eq!(textops::center(&text, width, '*').chars().count(), len.max(width));
        assert_eq!(textops::pad_end(&text, width, '*').chars().count(), len.max(width));
        assert_eq!(textops::pad_start(&text, width, '*').chars().count(), len.max(width));
    }

    // Casing round trips through already-folded text.
    let lower = textops::to_lower(&text);
    assert_eq!(textops::to_lower(&textops::to_upper(&lower)), lower);

    // Whitespace split never yields empty tokens.
    for token in textops::split(&text, "") {
        assert!(!token.is_empty());
    }

    // Tab expansion leaves no tabs behind.
    assert!(!textops::expand_tabs(&text, 4).contains('\t'));

    // Edit distance against a fixed probe is symmetric and bounded.
    let probe = "kitten";
    let d = textops::edit_distance(&text, probe, false);
    assert_eq!(d, textops::edit_distance(probe, &text, false));
    assert!(d <= len.max(probe.len()));
});
