use super::*;

#[test]
fn finds_placeholders_in_order() {
    let names: Vec<_> = placeholders(r#"<a fill="{skin}"/><b stroke="{ink}"/>{skin}"#).collect();
    assert_eq!(names, ["skin", "ink", "skin"]);
}

#[test]
fn ignores_non_identifier_braces() {
    let frag = "<style>.x{fill:red}</style>{ }{}{a b}";
    assert_eq!(placeholders(frag).count(), 0);
    assert_eq!(fill(frag, |_| None).unwrap(), frag);
}

#[test]
fn fill_substitutes_values() {
    let out = fill(r#"<circle fill="{skin}" stroke="{ink}"/>"#, |name| match name {
        "skin" => Some("#f1c27d"),
        "ink" => Some("black"),
        _ => None,
    })
    .unwrap();
    assert_eq!(out, r##"<circle fill="#f1c27d" stroke="black"/>"##);
}

#[test]
fn fill_reports_unresolved_name() {
    let err = fill("{known}{missing}", |name| (name == "known").then_some("x")).unwrap_err();
    assert_eq!(err, "missing");
}

#[test]
fn unterminated_brace_is_text() {
    assert_eq!(fill("a{skin", |_| Some("x")).unwrap(), "a{skin");
}
