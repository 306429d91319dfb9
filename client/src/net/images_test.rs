use super::*;
use crate::net::api::{Method, RequestBody, SelectedFile};

#[test]
fn list_request_targets_collection() {
    let req = list_request();
    assert_eq!(req.method, Method::Get);
    assert_eq!(req.path, "/images");
}

#[test]
fn get_request_targets_single_image() {
    let req = get_request("9");
    assert_eq!(req.method, Method::Get);
    assert_eq!(req.path, "/images/9");
}

#[test]
fn upload_request_is_multipart_post() {
    let req = upload_request(UploadForm {
        file: SelectedFile::named("photo.png"),
        description: "sunset".to_owned(),
        is_public: false,
    });
    assert_eq!(req.method, Method::Post);
    assert_eq!(req.path, "/images/upload");
    let RequestBody::Multipart(form) = req.body else {
        panic!("expected multipart body");
    };
    assert_eq!(form.file.name(), "photo.png");
    assert_eq!(form.description, "sunset");
    assert!(!form.is_public);
}

#[test]
fn update_request_sends_partial_fields() {
    let update = ImageUpdate { description: Some("new caption".to_owned()), is_public: None };
    let req = update_request("3", &update);
    assert_eq!(req.method, Method::Put);
    assert_eq!(req.path, "/images/3");
    assert_eq!(req.json(), Some(&serde_json::json!({ "description": "new caption" })));
}

#[test]
fn delete_request_has_no_body() {
    let req = delete_request("3");
    assert_eq!(req.method, Method::Delete);
    assert_eq!(req.path, "/images/3");
    assert!(matches!(req.body, RequestBody::Empty));
}
