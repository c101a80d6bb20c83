use crate::apis::telegram::{Chat, Document, Message, PhotoSize, User};

pub fn user() -> User {
    User { id: 2048, first_name: "Аня".into(), username: Some("anya".into()), is_bot: false }
}

pub fn text_message(text: &str) -> Message {
    Message {
        message_id: 1,
        chat: Chat { id: 2048 },
        from: Some(user()),
        text: Some(text.into()),
        photo: Vec::new(),
        document: None,
        forward_origin: None,
    }
}

pub fn photo_message() -> Message {
    Message {
        message_id: 2,
        chat: Chat { id: 2048 },
        from: Some(user()),
        text: None,
        photo: vec![
            PhotoSize { file_id: "photo-small".into(), width: 90, height: 120 },
            PhotoSize { file_id: "photo-big".into(), width: 900, height: 1200 },
            PhotoSize { file_id: "photo-medium".into(), width: 450, height: 600 },
        ],
        document: None,
        forward_origin: None,
    }
}

pub fn document_message(mime_type: Option<&str>) -> Message {
    Message {
        message_id: 3,
        chat: Chat { id: 2048 },
        from: Some(user()),
        text: None,
        photo: Vec::new(),
        document: Some(Document {
            file_id: "document-1".into(),
            file_name: Some("photo.png".into()),
            mime_type: mime_type.map(str::to_string),
        }),
        forward_origin: None,
    }
}
