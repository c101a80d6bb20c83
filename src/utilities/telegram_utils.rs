use crate::apis::telegram::{Document, Message, PhotoSize};

pub enum MessageAttachment {
    Photo(PhotoSize),
    Document(Document),
}

impl MessageAttachment {
    pub fn file_id(&self) -> &str {
        match self {
            Self::Photo(photo) => &photo.file_id,
            Self::Document(document) => &document.file_id,
        }
    }

    pub fn mime_type(&self) -> &str {
        match self {
            // photos always arrive re-encoded as JPEG
            Self::Photo(_) => "image/jpeg",
            Self::Document(document) => {
                document.mime_type.as_deref().unwrap_or("application/octet-stream")
            }
        }
    }
}

pub fn largest_photo(sizes: &[PhotoSize]) -> Option<&PhotoSize> {
    sizes.iter().max_by_key(|size| u64::from(size.width) * u64::from(size.height))
}

pub fn get_message_attachment(message: &Message) -> Option<MessageAttachment> {
    if let Some(photo) = largest_photo(&message.photo) {
        return Some(MessageAttachment::Photo(photo.clone()));
    }

    message.document.clone().map(MessageAttachment::Document)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::utilities::test_fixtures;

    #[test]
    fn picks_the_largest_photo_size() {
        let message = test_fixtures::photo_message();
        let attachment = get_message_attachment(&message).unwrap();

        assert_eq!(attachment.file_id(), "photo-big");
        assert_eq!(attachment.mime_type(), "image/jpeg");
    }

    #[test]
    fn falls_back_to_the_document() {
        let message = test_fixtures::document_message(Some("image/png"));
        let attachment = get_message_attachment(&message).unwrap();

        assert_eq!(attachment.file_id(), "document-1");
        assert_eq!(attachment.mime_type(), "image/png");
    }

    #[test]
    fn text_message_has_no_attachment() {
        assert!(get_message_attachment(&test_fixtures::text_message("привет")).is_none());
    }
}
