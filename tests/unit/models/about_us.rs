use super::*;

#[test]
fn deserializes_sparse_document() {
    let doc: AboutUs = serde_json::from_str(r#"{"companyName":"Acme","email":"a@b.c"}"#).unwrap();

    assert_eq!(doc.company_name, "Acme");
    assert_eq!(doc.vision, "");
    assert!(doc.organization_structure.is_empty());
    assert_eq!(doc.social_media, SocialMedia::default());
}

#[test]
fn serializes_camel_case_keys() {
    let doc = AboutUs {
        company_name: "Acme".to_string(),
        logo_url: Some("https://acme.test/logo.png".to_string()),
        ..AboutUs::default()
    };
    let value = serde_json::to_value(&doc).unwrap();

    assert_eq!(value["companyName"], "Acme");
    assert_eq!(value["logoUrl"], "https://acme.test/logo.png");
    assert!(value["organizationStructure"].as_array().unwrap().is_empty());
}

#[test]
fn set_field_clears_optional_fields_on_empty() {
    let mut doc = AboutUs::default();
    doc.set_field(FormField::Social(SocialPlatform::Linkedin), "https://in".to_string());
    assert_eq!(doc.field(FormField::Social(SocialPlatform::Linkedin)), "https://in");

    doc.set_field(FormField::Social(SocialPlatform::Linkedin), String::new());
    assert_eq!(doc.social_media.linkedin, None);

    doc.set_field(FormField::Phone, "123".to_string());
    assert_eq!(doc.phone, "123");
}

#[test]
fn display_name_falls_back() {
    let mut doc = AboutUs::default();
    assert_eq!(doc.display_name(), "Your Company");
    doc.company_name = "Acme".to_string();
    assert_eq!(doc.display_name(), "Acme");
}

#[test]
fn null_values_read_as_empty() {
    let doc: AboutUs = serde_json::from_str(
        r#"{"companyName":"Acme","vision":null,"socialMedia":null,"organizationStructure":null}"#,
    )
    .unwrap();

    assert_eq!(doc.company_name, "Acme");
    assert_eq!(doc.vision, "");
    assert_eq!(doc.social_media, SocialMedia::default());
    assert!(doc.organization_structure.is_empty());
}

#[test]
fn unmodelled_keys_survive_a_round_trip() {
    let raw = r#"{"companyName":"Acme","updatedAt":"2024-01-01","socialMedia":{"tiktok":"@acme"}}"#;
    let doc: AboutUs = serde_json::from_str(raw).unwrap();
    assert_eq!(doc.extra["updatedAt"], "2024-01-01");

    let value = serde_json::to_value(&doc).unwrap();
    assert_eq!(value["updatedAt"], "2024-01-01");
    assert_eq!(value["socialMedia"]["tiktok"], "@acme");
    assert!(value.get("extra").is_none());
}
