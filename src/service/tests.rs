use super::{MultipartBody, Refiner, ServiceConfig, StaticCredentials};
use crate::service::Credentials;

#[test]
fn multipart_body_contains_every_part_and_the_closing_boundary() {
    let mut body = MultipartBody::new();
    body.add_file("image_file", "photo.jpg", "application/octet-stream", b"JPG");
    body.add_file("mask_file", "mask.png", "image/png", b"PNG");
    body.add_text("refiner", "none");
    let boundary = body.boundary().to_string();
    let bytes = body.finish();
    let text = String::from_utf8_lossy(&bytes);

    assert!(text.contains(&format!("--{boundary}\r\n")));
    assert!(text.contains("Content-Disposition: form-data; name=\"image_file\"; filename=\"photo.jpg\""));
    assert!(text.contains("Content-Disposition: form-data; name=\"mask_file\"; filename=\"mask.png\""));
    assert!(text.contains("Content-Type: image/png"));
    assert!(text.contains("Content-Disposition: form-data; name=\"refiner\""));
    assert!(text.contains("\r\n\r\nnone\r\n"));
    assert!(text.ends_with(&format!("--{boundary}--\r\n")));
}

#[test]
fn multipart_content_type_carries_the_boundary() {
    let body = MultipartBody::new();
    let content_type = body.content_type();
    assert!(content_type.starts_with("multipart/form-data; boundary="));
    assert!(content_type.ends_with(body.boundary()));
}

#[test]
fn multipart_bodies_use_distinct_boundaries() {
    let first = MultipartBody::new();
    let second = MultipartBody::new();
    assert_ne!(first.boundary(), second.boundary());
}

#[test]
fn refiner_maps_to_wire_strings() {
    assert_eq!(Refiner::None.as_str(), "none");
    assert_eq!(Refiner::Medium.as_str(), "medium");
}

#[test]
fn config_defaults_are_bounded() {
    let config = ServiceConfig::new("https://example.test/inpaint");
    assert_eq!(config.refiner, Refiner::None);
    assert!(config.timeout.as_secs() > 0);
}

#[test]
fn static_credentials_hand_back_their_tokens() {
    let credentials = StaticCredentials {
        pro: true,
        id_token: Some("id".into()),
        attestation_token: None,
    };
    assert!(credentials.is_pro());
    assert_eq!(credentials.id_token().as_deref(), Some("id"));
    assert!(credentials.attestation_token().is_none());
}
