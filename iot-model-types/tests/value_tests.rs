use iot_model_types::ShapeValue;
use iot_model_types::value::{combine, eq_option, hash_option};
use std::collections::BTreeMap;
use std::fmt;

struct Rendered<'a, T>(&'a T);

impl<T: ShapeValue> fmt::Display for Rendered<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.render(f)
    }
}

fn render<T: ShapeValue>(value: &T) -> String {
    Rendered(value).to_string()
}

// ── JVM hash parity ──────────────────────────────────────────────

#[test]
fn string_hash_matches_jvm() {
    assert_eq!(String::new().hash_code(), 0);
    assert_eq!("a".to_string().hash_code(), 97);
    assert_eq!("hello".to_string().hash_code(), 99_162_322);
}

#[test]
fn string_hash_uses_utf16_units() {
    // "é" is one UTF-16 unit (0xE9); "😀" is the surrogate pair D83D DE00.
    assert_eq!("é".to_string().hash_code(), 0xE9);
    assert_eq!("😀".to_string().hash_code(), 0xD83D * 31 + 0xDE00);
}

#[test]
fn integer_hash_is_identity() {
    assert_eq!(42i32.hash_code(), 42);
    assert_eq!((-7i32).hash_code(), -7);
}

#[test]
fn long_hash_folds_high_bits() {
    assert_eq!(5i64.hash_code(), 5);
    assert_eq!((-1i64).hash_code(), 0);
    assert_eq!((1i64 << 32).hash_code(), 1);
}

#[test]
fn boolean_hash_matches_jvm() {
    assert_eq!(true.hash_code(), 1231);
    assert_eq!(false.hash_code(), 1237);
}

#[test]
fn double_hash_matches_jvm() {
    assert_eq!(0.0f64.hash_code(), 0);
    assert_eq!(1.0f64.hash_code(), 1_072_693_248);
    assert_eq!(f64::NAN.hash_code(), 2_146_959_360);
}

#[test]
fn list_hash_matches_jvm() {
    let list = vec!["a".to_string(), "b".to_string()];
    assert_eq!(list.hash_code(), 4066);
    assert_eq!(Vec::<String>::new().hash_code(), 1);
}

#[test]
fn map_hash_is_sum_of_entry_hashes() {
    let mut map = BTreeMap::new();
    map.insert("a".to_string(), "b".to_string());
    assert_eq!(map.hash_code(), 97 ^ 98);

    map.insert("c".to_string(), "d".to_string());
    assert_eq!(map.hash_code(), (97 ^ 98) + (99 ^ 100));
}

#[test]
fn combine_wraps_on_overflow() {
    assert_eq!(combine(1, 0), 31);
    assert_eq!(combine(i32::MAX, 1), i32::MAX.wrapping_mul(31).wrapping_add(1));
}

#[test]
fn absent_option_hashes_to_zero() {
    assert_eq!(hash_option::<String>(&None), 0);
    assert_eq!(hash_option(&Some(true)), 1231);
}

// ── Equality ─────────────────────────────────────────────────────

#[test]
fn absent_equals_only_absent() {
    assert!(eq_option::<i32>(&None, &None));
    assert!(!eq_option(&None, &Some(1)));
    assert!(!eq_option(&Some(1), &None));
    assert!(eq_option(&Some(1), &Some(1)));
}

#[test]
fn empty_list_is_not_absent() {
    assert!(!eq_option(&Some(Vec::<String>::new()), &None));
}

#[test]
fn double_equality_is_bitwise() {
    assert!(f64::NAN.value_eq(&f64::NAN));
    assert!(!0.0f64.value_eq(&-0.0));
    assert!(1.5f64.value_eq(&1.5));
}

#[test]
fn list_equality_is_order_sensitive() {
    let ab = vec!["a".to_string(), "b".to_string()];
    let ba = vec!["b".to_string(), "a".to_string()];
    assert!(!ab.value_eq(&ba));
    assert!(ab.value_eq(&ab.clone()));
}

#[test]
fn map_equality_ignores_insertion_order() {
    let mut first = BTreeMap::new();
    first.insert("x".to_string(), 1i32);
    first.insert("y".to_string(), 2i32);

    let mut second = BTreeMap::new();
    second.insert("y".to_string(), 2i32);
    second.insert("x".to_string(), 1i32);

    assert!(first.value_eq(&second));
    assert_eq!(first.hash_code(), second.hash_code());

    second.insert("y".to_string(), 3);
    assert!(!first.value_eq(&second));
}

// ── Rendering ────────────────────────────────────────────────────

#[test]
fn scalars_render_plainly() {
    assert_eq!(render(&"plain".to_string()), "plain");
    assert_eq!(render(&5i32), "5");
    assert_eq!(render(&-9i64), "-9");
    assert_eq!(render(&true), "true");
}

#[test]
fn doubles_keep_a_fraction() {
    assert_eq!(render(&1.0f64), "1.0");
    assert_eq!(render(&0.25f64), "0.25");
}

#[test]
fn lists_render_bracketed() {
    assert_eq!(render(&vec![1i32, 2, 3]), "[1, 2, 3]");
    assert_eq!(render(&Vec::<i32>::new()), "[]");
}

#[test]
fn maps_render_with_equals() {
    let mut map = BTreeMap::new();
    map.insert("b".to_string(), vec!["x".to_string()]);
    map.insert("a".to_string(), vec![]);
    assert_eq!(render(&map), "{a=[], b=[x]}");
}
