//! End-to-end editing flows through the public API.

use assert_matches::assert_matches;
use serde_json::json;

use ldedit_core::prelude::*;

#[test]
fn person_with_bad_email_is_invalid() {
    let catalog = Catalog::builtin();
    let d = Document::try_from(json!({
        "@context": "https://schema.org",
        "@type": "Person",
        "email": "bad"
    }))
    .unwrap();

    let v = validate(&d, "Person", &catalog);
    assert!(!v.is_valid);
    assert_eq!(
        v.messages(),
        vec!["Property 'email' has an invalid format for type 'Email'.".to_string()]
    );
}

#[test]
fn person_with_url_is_valid() {
    let catalog = Catalog::builtin();
    let d = Document::try_from(json!({
        "@context": "https://schema.org",
        "@type": "Person",
        "url": "https://x.com"
    }))
    .unwrap();
    assert!(validate(&d, "Person", &catalog).is_valid);
}

#[test]
fn plain_text_import_finds_nothing() {
    let r = resolve_import("not json at all");
    assert_eq!(r.document, None);
    assert_eq!(
        r.warning.unwrap().to_string(),
        "no valid document or embedded script tag found"
    );
}

#[test]
fn unknown_type_import_falls_back_to_person() {
    let catalog = Catalog::builtin();
    let mut session = EditorSession::new(&catalog, EditorConfig::default()).unwrap();
    session.set_active_type("Recipe").unwrap();

    let report =
        session.import_text(r#"{"@context":"https://schema.org","@type":"UnknownThing"}"#);
    assert!(report.applied);
    assert_eq!(session.active_type(), "Person");
    assert_eq!(session.document(), &Document::minimal("Person"));
    assert_matches!(
        report.warning,
        Some(ImportWarning::UnrecognizedType { ref found, ref fallback })
            if found == "UnknownThing" && fallback == "Person"
    );
}

#[test]
fn full_editing_session() {
    let catalog = Catalog::builtin();
    let mut session = EditorSession::new(&catalog, EditorConfig::default()).unwrap();

    // Pick a type and fill in the form.
    session.set_active_type("Event").unwrap();
    session.set_property_value("name", "RustConf");
    session.set_property_value("startDate", "2025-09-02T09:00:00-06:00");
    assert!(session.verdict().is_valid);

    // Break it from the raw view, then fix it there.
    let mut raw = session.raw_text().replace("2025-09-02T09:00:00-06:00", "soon");
    assert_eq!(session.edit_raw_text(raw.clone()), RawTextOutcome::Applied);
    assert_eq!(
        session.verdict().summary(),
        "Property 'startDate' has an invalid format for type 'DateTime'."
    );

    raw = raw.replace("soon", "2025-09-02");
    session.edit_raw_text(raw);
    assert!(session.verdict().is_valid);

    // Half-typed text leaves the document alone.
    let before = session.document().clone();
    assert_matches!(
        session.edit_raw_text("{\"@context\": "),
        RawTextOutcome::Rejected { .. }
    );
    assert_eq!(session.document(), &before);

    // A form edit resynchronizes the text view.
    session.set_property_value("location", "Seattle");
    assert!(session.raw_text_in_sync());

    // Export.
    assert_eq!(suggested_filename(session.document()), "Event.jsonld");
    let tag = to_script_tag(session.document());
    let back = resolve_import(&tag).document.unwrap();
    assert_eq!(&back, session.document());

    let keys: Vec<&str> = back.keys().map(|k| k.as_str()).collect();
    assert_eq!(
        keys,
        vec!["@context", "@type", "name", "startDate", "location"]
    );
}

#[test]
fn form_fields_reflect_document() {
    let catalog = Catalog::builtin();
    let mut session = EditorSession::new(&catalog, EditorConfig::default()).unwrap();
    session.set_active_type("FAQPage").unwrap();
    session.set_property_value("mainEntity", "Q&A");

    let fields = session.form_fields();
    assert_eq!(
        fields,
        vec![FormField {
            name: "mainEntity".into(),
            kind: PropertyKind::Text,
            value: "Q&A".into(),
        }]
    );
}

#[test]
fn custom_catalog_drives_session() {
    let catalog = Catalog::from_json_str(
        r#"{
            "Podcast": { "properties": [
                { "name": "feed", "type": "URL" },
                { "name": "episodes", "type": "Number" }
            ] }
        }"#,
    )
    .unwrap();
    let cfg = EditorConfig::default().with_default_type("Podcast");
    let mut session = EditorSession::new(&catalog, cfg).unwrap();

    session.set_property_value("episodes", "twelve");
    assert_eq!(
        session.verdict().messages(),
        vec!["Property 'episodes' has an invalid format for type 'Number'.".to_string()]
    );
    session.set_property_value("episodes", "12");
    assert!(session.verdict().is_valid);
}
