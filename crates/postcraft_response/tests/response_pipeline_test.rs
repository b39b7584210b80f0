//! End-to-end tests for extracting, decoding and validating model output.

use postcraft_core::{Idea, StructureKind};
use postcraft_error::{PostcraftErrorKind, ShapeErrorKind};
use postcraft_response::{
    Payload, extract, decode, parse_response, validate_content, validate_ideas,
    validate_translation,
};
use serde_json::{Value, json};

fn five_ideas() -> Value {
    json!([
        {"title": "VPNs Demystified", "summary": "What a VPN really does.", "slug": "vpns-demystified"},
        {"title": "Tunnels, Not Magic", "summary": "How encryption tunnels work.", "slug": "tunnels-not-magic"},
        {"title": "Public Wi-Fi Safety", "summary": "Why a VPN helps on the road.", "slug": "public-wifi-safety"},
        {"title": "Choosing a Provider", "summary": "What to look for.", "slug": "choosing-a-vpn-provider"},
        {"title": "VPN Myths", "summary": "Common misconceptions.", "slug": "vpn-myths"}
    ])
}

#[test]
fn test_well_formed_list_survives_every_wrapping() {
    let expected = five_ideas();
    let compact = serde_json::to_string(&expected).unwrap();
    let pretty = serde_json::to_string_pretty(&expected).unwrap();

    let wrappings = [
        compact.clone(),
        pretty.clone(),
        format!("```json\n{}\n```", pretty),
        format!("```\n{}\n```", compact),
        format!("  \n{}\n\n", pretty),
        format!("Here are your ideas:\n{}\nLet me know if you need more.", compact),
    ];

    for raw in &wrappings {
        let json = extract(raw, StructureKind::List).unwrap();
        let decoded = decode(json).unwrap();
        assert!(!decoded.is_lenient(), "unexpected lenient parse for {raw:?}");
        assert_eq!(decoded.value, expected);
    }
}

#[test]
fn test_fenced_ideas_parse_without_warning() {
    let raw = format!(
        "```json\n{}\n```",
        serde_json::to_string_pretty(&five_ideas()).unwrap()
    );
    let parsed = parse_response(&raw, StructureKind::List).unwrap();
    assert!(!parsed.lenient);

    let batch = validate_ideas(parsed.payload).unwrap();
    assert_eq!(batch.ideas().len(), 5);
    assert_eq!(*batch.dropped(), 0);
    assert_eq!(
        batch.ideas()[2],
        Idea::new(
            "Public Wi-Fi Safety",
            "Why a VPN helps on the road.",
            "public-wifi-safety"
        )
    );
}

#[test]
fn test_mixed_ideas_keep_exactly_the_valid_ones() {
    let raw = r#"[
        {"title": "Good One", "summary": "Fine.", "slug": "good-one"},
        {"title": "No Slug", "summary": "Missing slug."},
        {"title": "   ", "summary": "Blank title.", "slug": "blank"},
        ["not", "a", "mapping"],
        {"title": "Good Two", "summary": "Also fine.", "slug": "good-two"}
    ]"#;
    let parsed = parse_response(raw, StructureKind::List).unwrap();
    let batch = validate_ideas(parsed.payload).unwrap();

    let slugs: Vec<_> = batch.ideas().iter().map(|i| i.slug.as_str()).collect();
    assert_eq!(slugs, vec!["good-one", "good-two"]);
    assert_eq!(*batch.dropped(), 3);
}

#[test]
fn test_no_valid_ideas_is_empty_result() {
    let parsed = parse_response(r#"[{"title": "Only"}, {}]"#, StructureKind::List).unwrap();
    let err = validate_ideas(parsed.payload).unwrap_err();
    assert!(matches!(err.kind, ShapeErrorKind::EmptyResult(_)));
}

#[test]
fn test_content_with_literal_newlines_is_lenient() {
    let raw = "```json\n{\"linkedin_post\": \"Stay safe online.\", \"blog_article\": \"# VPNs\n\nA VPN encrypts traffic.\"}\n```";
    let parsed = parse_response(raw, StructureKind::Object).unwrap();
    assert!(parsed.lenient);

    let fields = validate_content(parsed.payload).unwrap();
    assert_eq!(
        fields.blog_article.as_deref(),
        Some("# VPNs\n\nA VPN encrypts traffic.")
    );
}

#[test]
fn test_prose_only_response_reports_snippet() {
    let raw = "I'm sorry, but I can't help with that request.";
    let err = parse_response(raw, StructureKind::Object).unwrap_err();
    match err.kind() {
        PostcraftErrorKind::Extract(e) => {
            assert_eq!(e.snippet.as_deref(), Some(raw));
        }
        other => panic!("expected extract error, got {other:?}"),
    }
    assert!(err.user_message().contains("I'm sorry"));
}

#[test]
fn test_broken_json_reports_decode_error_with_snippet() {
    let raw = "{\"linkedin_post_fr\": \"Bonjour\" \"blog_article_fr\": }";
    let err = parse_response(raw, StructureKind::Object).unwrap_err();
    match err.kind() {
        PostcraftErrorKind::Decode(e) => {
            assert!(e.snippet.is_some());
            assert_eq!(e.payload_line, 1);
        }
        other => panic!("expected decode error, got {other:?}"),
    }
}

#[test]
fn test_translation_object_after_commentary() {
    let raw = "Voici la traduction :\n{\"linkedin_post_fr\": \"Restez en sécurité.\", \"blog_article_fr\": \"# Les VPN\", \"blog_link_tag_fr\": \"les-vpn\"}\nBonne lecture !";
    let parsed = parse_response(raw, StructureKind::Object).unwrap();
    let fields = validate_translation(parsed.payload).unwrap();
    assert_eq!(fields.blog_link_tag_fr.as_deref(), Some("les-vpn"));
}

#[test]
fn test_scalar_payload_is_invalid_shape() {
    assert!(matches!(Payload::from(json!(42)), Payload::Invalid(_)));
    let err = validate_content(Payload::from(json!(true))).unwrap_err();
    assert!(matches!(err.kind, ShapeErrorKind::ExpectedObject(_)));
}
