use ::interpolate::{
    context, interpolate, interpolate_with_options, Delimiters, Error, Map, Options, Value,
};

fn assert_missing(result: Result<Value, Error>, path: &str) {
    match result {
        Err(Error::MissingVariable { path: reported }) => assert_eq!(reported, path),
        Err(other) => panic!("expected MissingVariable, got: {}", other),
        Ok(value) => panic!("expected failure, got: {:?}", value),
    }
}

#[test]
fn uses_custom_delimiters() {
    let options = Options::new().with_delimiters(Delimiters::pattern(r"\[", r"\]"));
    let result =
        interpolate_with_options("My age is [age]", &context! { "age": 21 }, &options).unwrap();
    assert_eq!(result, Value::from("My age is 21"));
}

#[test]
fn literal_delimiters_match_hand_escaped_patterns() {
    let escaped = Options::new().with_delimiters(Delimiters::pattern(r"\[", r"\]"));
    let literal = Options::new().with_delimiters(Delimiters::literal("[", "]"));
    let ctx = context! { "age": 21 };

    assert_eq!(
        interpolate_with_options("My age is [age]", &ctx, &escaped).unwrap(),
        interpolate_with_options("My age is [age]", &ctx, &literal).unwrap(),
    );
}

#[test]
fn casts_positive_integer_to_string_in_text() {
    let result = interpolate("My age is {{age}}", &context! { "age": 21 }).unwrap();
    assert_eq!(result, Value::from("My age is 21"));
}

#[test]
fn casts_negative_integer_to_string_in_text() {
    let result = interpolate(
        "The temperature is {{temperature}}",
        &context! { "temperature": -5 },
    )
    .unwrap();
    assert_eq!(result, Value::from("The temperature is -5"));
}

#[test]
fn casts_positive_float_to_string_in_text() {
    let result = interpolate("Foo {{bar}} baz", &context! { "bar": 5.1 }).unwrap();
    assert_eq!(result, Value::from("Foo 5.1 baz"));
}

#[test]
fn casts_negative_float_to_string_in_text() {
    let result = interpolate("Foo {{bar}} baz", &context! { "bar": -3.3 }).unwrap();
    assert_eq!(result, Value::from("Foo -3.3 baz"));
}

#[test]
fn casts_true_to_string_in_text() {
    let result = interpolate("Foo {{bool}} baz", &context! { "bool": true }).unwrap();
    assert_eq!(result, Value::from("Foo true baz"));
}

#[test]
fn casts_false_to_string_in_text() {
    let result = interpolate("Foo {{bool}} baz", &context! { "bool": false }).unwrap();
    assert_eq!(result, Value::from("Foo false baz"));
}

#[test]
fn fails_if_referenced_variable_does_not_exist() {
    assert_missing(interpolate("{{foo}}", &Map::new()), "foo");
}

#[test]
fn fails_if_referenced_variable_is_null() {
    assert_missing(interpolate("{{foo}}", &context! { "foo": null }), "foo");
}

#[test]
fn fails_with_full_path_if_nested_variable_does_not_exist() {
    assert_missing(interpolate("{{foo.bar.baz}}", &Map::new()), "foo.bar.baz");
}

#[test]
fn fails_with_full_path_if_intermediate_segment_is_null() {
    let ctx = context! { "foo": { "bar": null } };
    assert_missing(interpolate("{{foo.bar.baz}}", &ctx), "foo.bar.baz");
}

#[test]
fn ignores_unused_data_variables() {
    let result = interpolate(
        "{{foo}} {{bar}}",
        &context! {
            "foo": "FOO",
            "bar": "BAR",
            "baz": "BAZ",
            "data": {
                "hello": "world"
            }
        },
    )
    .unwrap();

    assert_eq!(result, Value::from("FOO BAR"));
}

#[test]
fn forces_string_type_on_scalar() {
    let result = interpolate("{{string:age}}", &context! { "age": 43 }).unwrap();
    assert_eq!(result, Value::from("43"));
}

#[test]
fn string_cast_is_idempotent_on_strings() {
    let ctx = context! { "name": "Alice" };
    assert_eq!(
        interpolate("{{string:name}}", &ctx).unwrap(),
        interpolate("{{name}}", &ctx).unwrap(),
    );
}

#[test]
fn interpolates_an_object_type_preserved() {
    let result = interpolate(
        "{{person}}",
        &context! {
            "person": {
                "name": "John Doe",
                "email": "johndoe@example.com"
            }
        },
    )
    .unwrap();

    let expected = context! {
        "name": "John Doe",
        "email": "johndoe@example.com"
    };
    assert_eq!(result, Value::Object(expected));
}

#[test]
fn stringifies_an_object_when_cast_to_string() {
    let result = interpolate(
        "{{string:person}}",
        &context! {
            "person": {
                "name": "John Doe",
                "email": "johndoe@example.com"
            }
        },
    )
    .unwrap();

    assert_eq!(
        result,
        Value::from(r#"{"name":"John Doe","email":"johndoe@example.com"}"#),
    );
}

#[test]
fn stringifies_an_object_interpolated_with_other_text() {
    let result = interpolate(
        "Foo {{person}}",
        &context! {
            "person": {
                "name": "John Doe",
                "email": "johndoe@example.com"
            }
        },
    )
    .unwrap();

    assert_eq!(
        result,
        Value::from(r#"Foo {"name":"John Doe","email":"johndoe@example.com"}"#),
    );
}

#[test]
fn stringifies_a_cast_object_interpolated_with_other_text() {
    let result = interpolate(
        "Foo {{string:person}}",
        &context! {
            "person": {
                "name": "John Doe",
                "email": "johndoe@example.com"
            }
        },
    )
    .unwrap();

    assert_eq!(
        result,
        Value::from(r#"Foo {"name":"John Doe","email":"johndoe@example.com"}"#),
    );
}

#[test]
fn renders_arrays_as_compact_json_in_text() {
    let result = interpolate("tags: {{tags}}", &context! { "tags": ["a", "b"] }).unwrap();
    assert_eq!(result, Value::from(r#"tags: ["a","b"]"#));
}

#[test]
fn preserves_array_type_for_whole_template_token() {
    let ctx = context! { "tags": [1, 2, 3] };
    let result = interpolate("{{tags}}", &ctx).unwrap();
    assert!(result.is_array());
    assert_eq!(result.as_array().map(Vec::len), Some(3));
}

#[test]
fn resolves_deeply_nested_paths() {
    let ctx = context! {
        "a": { "b": { "c": { "d": "deep" } } }
    };
    let result = interpolate("{{a.b.c.d}}", &ctx).unwrap();
    assert_eq!(result, Value::from("deep"));
}

#[test]
fn json_rendering_preserves_insertion_order() {
    let ctx = context! {
        "obj": { "z": 1, "a": 2, "m": 3 }
    };
    let result = interpolate("x {{obj}}", &ctx).unwrap();
    assert_eq!(result, Value::from(r#"x {"z":1,"a":2,"m":3}"#));
}

#[test]
fn aborts_on_first_unresolved_token() {
    let ctx = context! { "ok": 1 };
    assert_missing(interpolate("{{ok}} {{first.bad}} {{second.bad}}", &ctx), "first.bad");
}

#[test]
fn whole_template_check_requires_no_surrounding_text() {
    // A single leading space is enough to force string output.
    let ctx = context! { "n": 7 };
    let result = interpolate(" {{n}}", &ctx).unwrap();
    assert_eq!(result, Value::from(" 7"));
}

#[test]
fn custom_delimiters_change_recognition_only() {
    let ctx = context! {
        "person": { "name": "John Doe" }
    };
    let options = Options::new().with_delimiters(Delimiters::literal("<%", "%>"));

    // Type preservation still applies under custom markers.
    let whole = interpolate_with_options("<%person%>", &ctx, &options).unwrap();
    assert!(whole.is_object());

    // And default markers are plain text under custom ones.
    let mixed = interpolate_with_options("{{person}} <%person.name%>", &ctx, &options).unwrap();
    assert_eq!(mixed, Value::from("{{person}} John Doe"));
}

#[test]
fn reserved_data_key_is_not_a_lookup_root() {
    let ctx = context! {
        "data": { "hello": "world" }
    };
    assert_missing(interpolate("{{data.hello}}", &ctx), "data.hello");
}
