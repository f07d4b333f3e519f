use iot_model_types::{
    Blob, Constraints, Error, FieldKind, Shape, ShapeValue, Timestamp, service_enum,
};
use pretty_assertions::assert_eq;
use std::collections::BTreeMap;

service_enum! {
    pub enum Color {
        Red = "RED",
        Green = "GREEN",
    }
}

#[derive(Debug, Clone, Default, Shape)]
struct Counter {
    name: Option<String>,
    count: Option<i32>,
}

#[derive(Debug, Clone, Default, Shape)]
#[shape(name = "Widget")]
struct WidgetRecord {
    #[shape(min_length = 1, max_length = 64, pattern = "[a-z]+")]
    name: Option<String>,
    #[shape(enumeration = "Color")]
    color: Option<String>,
    tags: Option<Vec<String>>,
    #[shape(rename = "Labels")]
    labels: Option<BTreeMap<String, String>>,
    counter: Option<Counter>,
    #[shape(min = -5, max = 5)]
    offset: Option<i64>,
    ratio: Option<f64>,
    enabled: Option<bool>,
    created_at: Option<Timestamp>,
    payload: Option<Blob>,
}

#[derive(Debug, Clone, Default, Shape)]
struct Empty {}

// ── Rendering ────────────────────────────────────────────────────

#[test]
fn renders_only_present_fields_in_order() {
    let counter = Counter::new();
    assert_eq!(counter.to_string(), "{}");

    let counter = counter.with_name("x");
    assert_eq!(counter.to_string(), "{name: x}");

    let counter = counter.with_count(5);
    assert_eq!(counter.to_string(), "{name: x, count: 5}");
}

#[test]
fn declared_order_wins_over_set_order() {
    let counter = Counter::new().with_count(1).with_name("late");
    assert_eq!(counter.to_string(), "{name: late, count: 1}");
}

#[test]
fn renders_nested_and_collections() {
    let mut widget = WidgetRecord::new()
        .with_name("w")
        .with_tags(["a", "b"])
        .with_counter(Counter::new().with_name("c"))
        .with_ratio(0.5)
        .with_enabled(false)
        .with_created_at(Timestamp::from_epoch_millis(0))
        .with_payload(vec![0u8, 1, 2]);
    widget.add_labels_entry("k", "v").unwrap();

    assert_eq!(
        widget.to_string(),
        "{name: w, tags: [a, b], Labels: {k=v}, counter: {name: c}, ratio: 0.5, \
         enabled: false, createdAt: 1970-01-01T00:00:00.000Z, payload: AAEC}"
    );
}

#[test]
fn cleared_field_disappears_from_rendering() {
    let mut counter = Counter::new().with_name("x").with_count(5);
    counter.set_name(None);
    assert_eq!(counter.name(), None);
    assert_eq!(counter.to_string(), "{count: 5}");
}

#[test]
fn empty_shape_renders_braces() {
    assert_eq!(Empty::new().to_string(), "{}");
    assert_eq!(Empty::new(), Empty::default());
    assert_eq!(Empty::new().hash_code(), 1);
}

// ── Accessors ────────────────────────────────────────────────────

#[test]
fn getters_default_to_absent() {
    let widget = WidgetRecord::new();
    assert_eq!(widget.name(), None);
    assert_eq!(widget.tags(), None);
    assert_eq!(widget.labels(), None);
    assert_eq!(widget.counter(), None);
    assert_eq!(widget.offset(), None);
    assert_eq!(widget.created_at(), None);
    assert!(widget.is_empty());
}

#[test]
fn setters_replace_unconditionally() {
    let mut widget = WidgetRecord::new();
    widget.set_offset(Some(100));
    assert_eq!(widget.offset(), Some(100));
    widget.set_offset(Some(-100));
    assert_eq!(widget.offset(), Some(-100));
    widget.set_offset(None);
    assert_eq!(widget.offset(), None);
}

#[test]
fn documented_constraints_are_not_enforced() {
    let widget = WidgetRecord::new().with_name("").with_offset(1_000);
    assert_eq!(widget.name(), Some(""));
    assert_eq!(widget.offset(), Some(1_000));
}

// ── List fields ──────────────────────────────────────────────────

#[test]
fn variadic_with_appends() {
    let widget = WidgetRecord::new().with_tags(["a"]).with_tags(["b"]);
    assert_eq!(widget.tags(), Some(&["a".to_string(), "b".to_string()][..]));
}

#[test]
fn collection_with_replaces() {
    let mut widget = WidgetRecord::new();
    widget.set_tags(Some(vec!["x".into(), "y".into()]));
    let widget = widget.with_tags_list(Some(vec!["z".into()]));
    assert_eq!(widget.tags(), Some(&["z".to_string()][..]));

    let widget = widget.with_tags_list(None);
    assert_eq!(widget.tags(), None);
}

#[test]
fn present_but_empty_list_differs_from_absent() {
    let empty = WidgetRecord::new().with_tags(Vec::<String>::new());
    assert_eq!(empty.tags(), Some(&[][..]));
    assert_ne!(empty, WidgetRecord::new());
    assert_eq!(empty.to_string(), "{tags: []}");
}

// ── Map fields ───────────────────────────────────────────────────

#[test]
fn distinct_keys_are_kept() {
    let mut widget = WidgetRecord::new();
    widget.add_labels_entry("a", "1").unwrap();
    widget.add_labels_entry("b", "2").unwrap();

    let labels = widget.labels().unwrap();
    assert_eq!(labels.len(), 2);
    assert_eq!(labels["a"], "1");
    assert_eq!(labels["b"], "2");
}

#[test]
fn duplicate_key_fails_and_leaves_map_unchanged() {
    let mut widget = WidgetRecord::new();
    widget.add_labels_entry("a", "1").unwrap();
    let before = widget.clone();

    let err = widget.add_labels_entry("a", "2").unwrap_err();
    assert!(err.is_invalid_argument());
    match err {
        Error::DuplicateKey { shape, field, key } => {
            assert_eq!(shape, "Widget");
            assert_eq!(field, "Labels");
            assert_eq!(key, "a");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(widget, before);
    assert_eq!(widget.labels().unwrap()["a"], "1");
}

#[test]
fn add_entry_chains() {
    let mut widget = WidgetRecord::new();
    widget
        .add_labels_entry("a", "1")
        .unwrap()
        .add_labels_entry("b", "2")
        .unwrap();
    assert_eq!(widget.labels().unwrap().len(), 2);
}

#[test]
fn clear_entries_resets_to_absent() {
    let mut widget = WidgetRecord::new();
    widget.add_labels_entry("a", "1").unwrap();
    widget.clear_labels_entries();
    assert_eq!(widget.labels(), None);
    assert_eq!(widget.to_string(), "{}");
}

#[test]
fn map_with_replaces() {
    let mut map = BTreeMap::new();
    map.insert("only".to_string(), "one".to_string());
    let mut widget = WidgetRecord::new();
    widget.add_labels_entry("a", "1").unwrap();
    let widget = widget.with_labels(map.clone());
    assert_eq!(widget.labels(), Some(&map));
}

// ── Enum-backed fields ───────────────────────────────────────────

#[test]
fn enum_field_accepts_typed_and_raw_values() {
    let typed = WidgetRecord::new().with_color_enum(Color::Green);
    assert_eq!(typed.color(), Some("GREEN"));

    let via_into = WidgetRecord::new().with_color(Color::Green);
    assert_eq!(typed, via_into);

    let raw = WidgetRecord::new().with_color("PURPLE");
    assert_eq!(raw.color(), Some("PURPLE"));

    let mut set = WidgetRecord::new();
    set.set_color_enum(Color::Red);
    assert_eq!(set.color(), Some("RED"));
}

// ── Equality and hashing ─────────────────────────────────────────

#[test]
fn hash_matches_jvm_combiner() {
    assert_eq!(Counter::new().hash_code(), 961);
    // 31 * (31 * 1 + "x".hashCode()) + 5
    assert_eq!(Counter::new().with_name("x").with_count(5).hash_code(), 4686);
}

#[test]
fn nested_equality_is_structural() {
    let a = WidgetRecord::new().with_counter(Counter::new().with_count(1));
    let b = WidgetRecord::new().with_counter(Counter::new().with_count(1));
    let c = WidgetRecord::new().with_counter(Counter::new().with_count(2));
    assert_eq!(a, b);
    assert_eq!(a.hash_code(), b.hash_code());
    assert_ne!(a, c);
}

#[test]
fn map_equality_ignores_insertion_order() {
    let mut a = WidgetRecord::new();
    a.add_labels_entry("x", "1").unwrap();
    a.add_labels_entry("y", "2").unwrap();
    let mut b = WidgetRecord::new();
    b.add_labels_entry("y", "2").unwrap();
    b.add_labels_entry("x", "1").unwrap();
    assert_eq!(a, b);
}

#[test]
fn nan_doubles_compare_equal() {
    let a = WidgetRecord::new().with_ratio(f64::NAN);
    assert_eq!(a, a.clone());
}

#[test]
fn std_hash_agrees_with_equality() {
    use std::collections::HashSet;
    let mut set = HashSet::new();
    set.insert(Counter::new().with_name("x"));
    set.insert(Counter::new().with_name("x"));
    set.insert(Counter::new().with_name("y"));
    assert_eq!(set.len(), 2);
}

// ── Metadata ─────────────────────────────────────────────────────

#[test]
fn shape_names() {
    assert_eq!(Counter::NAME, "Counter");
    assert_eq!(WidgetRecord::NAME, "Widget");
}

#[test]
fn field_descriptors_follow_declaration() {
    let names: Vec<&str> = WidgetRecord::fields().iter().map(|d| d.name).collect();
    assert_eq!(
        names,
        vec![
            "name", "color", "tags", "Labels", "counter", "offset", "ratio", "enabled",
            "createdAt", "payload",
        ]
    );
}

#[test]
fn field_descriptor_details() {
    let name = WidgetRecord::field("name").unwrap();
    assert_eq!(name.kind, FieldKind::String);
    assert_eq!(name.member, "name");
    assert_eq!(
        name.constraints,
        Constraints {
            min_length: Some(1),
            max_length: Some(64),
            pattern: Some("[a-z]+"),
            ..Constraints::NONE
        }
    );

    let color = WidgetRecord::field("color").unwrap();
    assert_eq!(color.kind, FieldKind::Enum);
    assert_eq!(color.target, Some("Color"));
    assert_eq!(color.allowed_values, Some(&["RED", "GREEN"][..]));

    let labels = WidgetRecord::field("Labels").unwrap();
    assert_eq!(labels.kind, FieldKind::Map);
    assert_eq!(labels.member, "labels");
    assert!(labels.kind.is_collection());

    let counter = WidgetRecord::field("counter").unwrap();
    assert_eq!(counter.kind, FieldKind::Structure);
    assert_eq!(counter.target, Some("Counter"));

    let offset = WidgetRecord::field("offset").unwrap();
    assert_eq!(offset.kind, FieldKind::Long);
    assert_eq!(offset.constraints.min, Some(-5));
    assert_eq!(offset.constraints.max, Some(5));

    assert_eq!(WidgetRecord::field("createdAt").unwrap().kind, FieldKind::Timestamp);
    assert_eq!(WidgetRecord::field("payload").unwrap().kind, FieldKind::Blob);
    assert!(WidgetRecord::field("tags").unwrap().constraints.is_empty());
    assert!(WidgetRecord::field("missing").is_none());
}

#[test]
fn present_fields_lists_wire_names() {
    let widget = WidgetRecord::new().with_enabled(true).with_name("n");
    assert_eq!(widget.present_fields(), vec!["name", "enabled"]);
    assert!(!widget.is_empty());
}

// ── JSON ─────────────────────────────────────────────────────────

#[test]
fn json_uses_wire_names_and_skips_absent() {
    let mut widget = WidgetRecord::new().with_name("w").with_tags(["t"]);
    widget.add_labels_entry("k", "v").unwrap();
    assert_eq!(
        widget.to_json().unwrap(),
        r#"{"name":"w","tags":["t"],"Labels":{"k":"v"}}"#
    );
}

#[test]
fn json_parse_ignores_unknown_and_null() {
    let widget =
        WidgetRecord::from_json(r#"{"name":"w","color":null,"extra":1,"counter":{"count":3}}"#)
            .unwrap();
    assert_eq!(widget.name(), Some("w"));
    assert_eq!(widget.color(), None);
    assert_eq!(widget.counter().and_then(Counter::count), Some(3));
}

#[test]
fn json_parse_error_is_serialization() {
    let err = Counter::from_json(r#"{"count":"five"}"#).unwrap_err();
    assert!(!err.is_invalid_argument());
}
