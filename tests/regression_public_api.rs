//! Regression tests for the public API.
//!
//! Expected values are frozen snapshots computed by hand from the cipher
//! definitions: any change in output indicates a regression.
//!
//! Coverage:
//! - `Alphabet`
//! - `substitution::{ShiftCipher, MonoalphabeticCipher, VigenereCipher}`
//! - `transposition::{RailFenceCipher, RowTranspositionCipher, DoubleTranspositionCipher}`
//! - `dispatch` (name lookup, key parsing, encrypt/decrypt by name)
//! - `CipherError`

use abjad_ciphers::alphabet::ARABIC_SYMBOLS;
use abjad_ciphers::dispatch;
use abjad_ciphers::error::UNKNOWN_CIPHER_MESSAGE;
use abjad_ciphers::{
    Alphabet, Cipher, CipherError, CipherKind, DoubleTranspositionCipher, Key,
    MonoalphabeticCipher, RailFenceCipher, RowTranspositionCipher, ShiftCipher, VigenereCipher,
};

// ═══════════════════════════════════════════════════════════════════════
// Alphabet
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn alphabet_order_is_frozen() {
    let arabic = Alphabet::arabic();
    assert_eq!(arabic.symbols().iter().collect::<String>(), ARABIC_SYMBOLS);
    assert_eq!(arabic.index('ا'), Some(0));
    assert_eq!(arabic.index('ي'), Some(27));
    assert_eq!(arabic.index('ء'), Some(31));
    assert_eq!(arabic.index('ئ'), Some(35));
}

#[test]
fn alphabet_is_shared() {
    assert!(std::ptr::eq(Alphabet::arabic(), Alphabet::arabic()));
}

// ═══════════════════════════════════════════════════════════════════════
// Substitution ciphers
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn shift_known_vector() {
    let cipher = ShiftCipher::new(Alphabet::arabic(), 2);
    assert_eq!(cipher.encrypt("اب").unwrap(), "تث");
    assert_eq!(cipher.decrypt("تث").unwrap(), "اب");
}

#[test]
fn shift_preserves_layout() {
    let cipher = ShiftCipher::new(Alphabet::arabic(), 1);
    assert_eq!(cipher.encrypt("ا ب\nت!").unwrap(), "ب ت\nث!");
}

#[test]
fn monoalphabetic_rejects_any_wrong_length() {
    for len in [0usize, 1, 35, 37, 72] {
        let key: String = std::iter::repeat('ا').take(len).collect();
        assert_eq!(
            MonoalphabeticCipher::new(Alphabet::arabic(), &key).unwrap_err(),
            CipherError::InvalidKeyLength {
                expected: 36,
                actual: len
            }
        );
    }
}

#[test]
fn monoalphabetic_shifted_key_matches_shift_cipher() {
    let alphabet = Alphabet::arabic();
    let rotated: String = ARABIC_SYMBOLS.chars().cycle().skip(5).take(36).collect();
    let mono = MonoalphabeticCipher::new(alphabet, &rotated).unwrap();
    let shift = ShiftCipher::new(alphabet, 5);
    let text = "الحروف العربية ٣٦";
    assert_eq!(mono.encrypt(text).unwrap(), shift.encrypt(text).unwrap());
}

#[test]
fn vigenere_skips_foreign_for_key_cursor() {
    let cipher = VigenereCipher::new(Alphabet::arabic(), "بت").unwrap();
    assert_eq!(cipher.encrypt("ا ا، ا").unwrap(), "ب ت، ب");
}

// ═══════════════════════════════════════════════════════════════════════
// Transposition ciphers
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn rail_fence_known_vector() {
    let cipher = RailFenceCipher::new(Alphabet::arabic(), 2).unwrap();
    assert_eq!(cipher.encrypt("ابتثج").unwrap(), "اتجبث");
    assert_eq!(cipher.decrypt("اتجبث").unwrap(), "ابتثج");
}

/// Foreign characters are dropped on both paths, so the round trip returns
/// only the alphabet symbols of the input.
#[test]
fn rail_fence_strips_foreign_characters() {
    let cipher = RailFenceCipher::new(Alphabet::arabic(), 3).unwrap();
    let enc = cipher.encrypt("اب تث, جح!").unwrap();
    assert_eq!(enc.chars().count(), 6);
    assert_eq!(cipher.decrypt(&enc).unwrap(), "ابتثجح");
}

#[test]
fn rail_fence_rejects_single_rail() {
    assert!(matches!(
        RailFenceCipher::new(Alphabet::arabic(), 1),
        Err(CipherError::InvalidParameter(_))
    ));
}

#[test]
fn row_transposition_known_vector() {
    let cipher = RowTranspositionCipher::new(Alphabet::arabic(), "تاب").unwrap();
    assert_eq!(cipher.encrypt("ابت ثجح خ").unwrap(), "بجتحاثخ");
    assert_eq!(cipher.decrypt("بجتحاثخ").unwrap(), "ابتثجحخ");
}

#[test]
fn row_transposition_every_ragged_length() {
    let cipher = RowTranspositionCipher::new(Alphabet::arabic(), "دبجا").unwrap();
    let full: Vec<char> = ARABIC_SYMBOLS.chars().collect();
    for len in 0..=full.len() {
        let text: String = full[..len].iter().collect();
        let enc = cipher.encrypt(&text).unwrap();
        assert_eq!(cipher.decrypt(&enc).unwrap(), text, "length {len}");
    }
}

#[test]
fn double_transposition_known_vector() {
    let cipher =
        DoubleTranspositionCipher::from_key_pair(Alphabet::arabic(), "تاب با").unwrap();
    // round 1: بجتحاثخ, round 2 over rows بج / تح / اث / خ
    assert_eq!(cipher.encrypt("ابتثجحخ").unwrap(), "جحثبتاخ");
    assert_eq!(cipher.decrypt("جحثبتاخ").unwrap(), "ابتثجحخ");
}

#[test]
fn double_transposition_key_count() {
    for (raw, count) in [("", 0), ("اب", 1), ("ا ب ت", 3), ("ا ب ت ث", 4)] {
        assert_eq!(
            DoubleTranspositionCipher::from_key_pair(Alphabet::arabic(), raw).unwrap_err(),
            CipherError::InvalidKeyCount(count),
            "raw key {raw:?}"
        );
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Dispatcher
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn dispatch_recognises_exact_name_set() {
    let names: Vec<&str> = CipherKind::ALL.iter().map(|k| k.name()).collect();
    assert_eq!(
        names,
        [
            "Shift",
            "Monoalphabetic",
            "Vigenère",
            "Rail-Fence",
            "Row-Transposition",
            "Double-Transposition"
        ]
    );
}

#[test]
fn dispatch_every_cipher_roundtrips() {
    let reversed: String = ARABIC_SYMBOLS.chars().rev().collect();
    let cases = [
        ("Shift", "-40"),
        ("Monoalphabetic", reversed.as_str()),
        ("Vigenère", "مفتاح"),
        ("Rail-Fence", "3"),
        ("Row-Transposition", "مفتاح"),
        ("Double-Transposition", "مفتاح سر"),
    ];
    let text = "لاتخبرأحدا";
    for (name, key) in cases {
        let enc = dispatch::encrypt(name, text, key).unwrap();
        assert_eq!(dispatch::decrypt(name, &enc, key).unwrap(), text, "{name}");
    }
}

#[test]
fn dispatch_integer_keys_are_validated() {
    for name in ["Shift", "Rail-Fence"] {
        assert!(matches!(
            dispatch::encrypt(name, "اب", "x"),
            Err(CipherError::InvalidKeyFormat(_))
        ));
        assert!(matches!(
            dispatch::decrypt(name, "اب", "4x"),
            Err(CipherError::InvalidKeyFormat(_))
        ));
    }
}

#[test]
fn dispatch_unknown_cipher_message() {
    let err = dispatch::decrypt("Hill", "اب", "1").unwrap_err();
    assert_eq!(err, CipherError::UnknownCipher("Hill".to_string()));
    assert_eq!(err.to_string(), UNKNOWN_CIPHER_MESSAGE);
}

#[test]
fn dispatch_double_transposition_bad_key() {
    assert_eq!(
        dispatch::encrypt("Double-Transposition", "ابت", "مفتاح"),
        Err(CipherError::InvalidKeyCount(1))
    );
}

#[test]
fn dispatch_build_returns_trait_object() {
    let kind = CipherKind::RowTransposition;
    let key = kind.parse_key("تاب").unwrap();
    assert_eq!(key, Key::Text("تاب".to_string()));
    let cipher = kind.build(Alphabet::arabic(), &key).unwrap();
    assert_eq!(cipher.name(), "Row-Transposition");
    assert_eq!(cipher.encrypt("ابتثجحخ").unwrap(), "بجتحاثخ");
}
