use super::*;

#[test]
fn submission_is_none_without_a_file() {
    let draft = UploadDraft { description: "sunset".to_owned(), is_public: true, ..UploadDraft::default() };
    assert!(draft.submission().is_none());
    assert_eq!(draft.file_name(), None);
}

#[test]
fn submission_carries_trimmed_description_and_visibility() {
    let draft = UploadDraft {
        file: Some(SelectedFile::named("cat.png")),
        description: "  a cat  ".to_owned(),
        is_public: true,
    };
    let form = draft.submission().expect("file chosen");
    assert_eq!(form.file.name(), "cat.png");
    assert_eq!(form.description, "a cat");
    assert!(form.is_public);
}

#[test]
fn reset_clears_every_field() {
    let mut draft = UploadDraft {
        file: Some(SelectedFile::named("cat.png")),
        description: "a cat".to_owned(),
        is_public: true,
    };
    draft.reset();
    assert!(draft.file.is_none());
    assert!(draft.description.is_empty());
    assert!(!draft.is_public);
}

mod upload_submission {
    use futures::executor::block_on;

    use super::*;
    use crate::net::api::Method;
    use crate::net::error::ApiError;
    use crate::net::testing::{RecordingTransport, with_app_context};

    fn backend() -> RecordingTransport {
        RecordingTransport::new(|method, path| match (method, path) {
            (Method::Post, "/images/upload") => Ok(
                r#"{"image":{"id":5,"filename":"cat.png","isPublic":true,"createdAt":"2024-01-01T00:00:00Z"}}"#
                    .to_owned(),
            ),
            _ => Err(ApiError::from_status(404, "")),
        })
    }

    #[test]
    fn without_a_file_nothing_is_sent() {
        let transport = backend();
        with_app_context(&transport, || {
            let hook = use_images();
            let draft = RwSignal::new_local(UploadDraft { description: "a cat".to_owned(), ..UploadDraft::default() });

            assert!(!block_on(submit_upload(hook, draft)));
            assert!(transport.calls().is_empty());
            assert_eq!(draft.with_untracked(|d| d.description.clone()), "a cat");
        });
    }

    #[test]
    fn with_a_file_uploads_and_resets_the_draft() {
        let transport = backend();
        with_app_context(&transport, || {
            let hook = use_images();
            let draft = RwSignal::new_local(UploadDraft {
                file: Some(SelectedFile::named("cat.png")),
                description: "a cat".to_owned(),
                is_public: true,
            });

            assert!(block_on(submit_upload(hook, draft)));
            assert_eq!(transport.calls(), vec!["POST /images/upload"]);
            assert!(draft.with_untracked(|d| d.file.is_none() && d.description.is_empty()));
            assert_eq!(hook.state.with_untracked(|s| s.items.len()), 1);
        });
    }

    #[test]
    fn failed_upload_keeps_the_draft() {
        let transport = RecordingTransport::new(|_, _| Err(ApiError::from_status(413, "")));
        with_app_context(&transport, || {
            let hook = use_images();
            let draft = RwSignal::new_local(UploadDraft { file: Some(SelectedFile::named("big.png")), ..UploadDraft::default() });

            assert!(!block_on(submit_upload(hook, draft)));
            assert_eq!(draft.with_untracked(|d| d.file_name().map(str::to_owned)), Some("big.png".to_owned()));
        });
    }
}
