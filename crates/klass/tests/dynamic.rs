use klass::{configure_value, klass_value, reset};
use serde_json::{Value, json};
use serial_test::serial;

#[test]
#[serial]
fn documented_shapes_render() {
    reset();
    let conditions = json!({ "current": true, "act": true });

    assert_eq!(klass_value(&Value::Null, None, None), "");
    assert_eq!(klass_value(&conditions, None, None), "current act");
    assert_eq!(klass_value(&json!("comp"), Some(&conditions), None), "compCurrent compAct");
    assert_eq!(klass_value(&json!("comp"), Some(&conditions), Some(&json!(true))), "comp compCurrent compAct");
    assert_eq!(
        klass_value(&json!(["comp", "current", { "act": true, "haha": false }]), None, None),
        "comp current act"
    );
    assert_eq!(
        klass_value(&json!({ "base": "comp", "prepend": true }), Some(&conditions), None),
        "comp compCurrent compAct"
    );
    assert_eq!(klass_value(&json!({ "base": "comp" }), Some(&conditions), None), "compCurrent compAct");
    assert_eq!(
        klass_value(&json!({ "base": "comp", "type": 1 }), Some(&conditions), None),
        "comp-current comp-act"
    );
    assert_eq!(
        klass_value(&json!({ "base": "comp", "type": 1, "connect": "__" }), Some(&conditions), None),
        "comp__current comp__act"
    );
}

#[test]
#[serial]
fn configure_value_then_render() {
    reset();
    configure_value(&json!({ "type": 1, "symbol": "___" }));
    assert_eq!(
        klass_value(&json!({ "base": "comp", "prepend": true }), Some(&json!({ "current": true, "act": true })), None),
        "comp comp___current comp___act"
    );
    reset();
}

#[test]
#[serial]
fn non_object_configure_is_ignored() {
    reset();
    let before = klass::settings();
    configure_value(&json!("line"));
    configure_value(&json!([1, "___"]));
    configure_value(&Value::Null);
    assert_eq!(klass::settings(), before);
}

#[test]
#[serial]
fn reserved_keys_never_become_classes() {
    reset();
    assert_eq!(klass_value(&json!({ "base": "comp", "prepend": true, "act": true }), None, None), "comp compAct");
    assert_eq!(klass_value(&json!({ "base": "comp", "type": 1 }), None, None), "");
}

#[test]
#[serial]
fn odd_inputs_degrade_quietly() {
    reset();
    assert_eq!(klass_value(&json!(7), None, None), "");
    assert_eq!(klass_value(&json!(true), Some(&json!({ "a": true })), None), "a");
    assert_eq!(klass_value(&json!("comp"), Some(&json!(3)), Some(&json!("yes"))), "");
    assert_eq!(klass_value(&json!(["a", 1, "b"]), None, None), "a  b");
    assert_eq!(klass_value(&json!({ "base": "comp", "act": "yes" }), None, None), "");
}

#[test]
#[serial]
fn unknown_type_falls_back_to_default_convention() {
    reset();
    let conditions = json!({ "current": true, "act": true });
    let spec = json!({ "base": "comp", "type": 9 });
    assert_eq!(klass_value(&spec, Some(&conditions), None), "compCurrent compAct");

    configure_value(&json!({ "type": 1 }));
    assert_eq!(klass_value(&spec, Some(&conditions), None), "comp-current comp-act");
    reset();
}

#[test]
#[serial]
fn integral_float_type_selects_convention() {
    reset();
    let out = klass_value(&json!({ "base": "comp", "type": 1.0 }), Some(&json!({ "act": true })), None);
    assert_eq!(out, "comp-act");
}

#[test]
#[serial]
fn large_condition_objects_render_in_order() {
    reset();
    let size = 100_000;
    let conditions: serde_json::Map<String, Value> =
        (0..size).map(|i| (format!("k{i}"), Value::Bool(i % 4 != 3))).collect();

    let out = klass_value(&json!("c"), Some(&Value::Object(conditions)), None);
    let tokens: Vec<&str> = out.split(' ').collect();

    assert_eq!(tokens.len(), size - size / 4);
    assert_eq!(tokens.first(), Some(&"cK0"));
    assert_eq!(tokens.last(), Some(&"cK99998"));
}
