use uuid::Uuid;

/// A `multipart/form-data` body for the photo upload endpoint.
///
/// Three parts in fixed order: the uploader display name (`name`), the JPEG
/// bytes (`photo`, sent as `photo.jpeg`), and the decimal photo-type id
/// (`typeId`). The layout is byte-exact — the server rejects bodies with a
/// misplaced CRLF or a malformed final boundary — so the body is assembled
/// here rather than delegated to a generic encoder.
#[derive(Debug, Clone)]
pub struct MultipartForm {
    boundary: String,
    body: Vec<u8>,
}

impl MultipartForm {
    pub fn new(uploader_name: &str, image: Vec<u8>, type_id: u64) -> Self {
        // UUID-derived token: unique per request, cannot collide with the
        // text fields or plausible JPEG bytes.
        let boundary = format!("Boundary-{}", Uuid::new_v4());
        let mut body = Vec::with_capacity(image.len() + 512);

        push_str(&mut body, &format!("--{boundary}\r\n"));
        push_str(
            &mut body,
            "Content-Disposition: form-data; name=\"name\"\r\n\r\n",
        );
        push_str(&mut body, &format!("{uploader_name}\r\n"));

        push_str(&mut body, &format!("--{boundary}\r\n"));
        push_str(
            &mut body,
            "Content-Disposition: form-data; name=\"photo\"; filename=\"photo.jpeg\"\r\n",
        );
        push_str(&mut body, "Content-Type: image/jpeg\r\n\r\n");
        body.extend_from_slice(&image);
        push_str(&mut body, "\r\n");

        push_str(&mut body, &format!("--{boundary}\r\n"));
        push_str(
            &mut body,
            "Content-Disposition: form-data; name=\"typeId\"\r\n\r\n",
        );
        push_str(&mut body, &format!("{type_id}\r\n"));

        push_str(&mut body, &format!("--{boundary}--\r\n"));

        Self { boundary, body }
    }

    /// Value for the request `Content-Type` header.
    pub fn content_type(&self) -> String {
        format!("multipart/form-data; boundary={}", self.boundary)
    }

    pub fn boundary(&self) -> &str {
        &self.boundary
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.body
    }
}

fn push_str(body: &mut Vec<u8>, text: &str) {
    body.extend_from_slice(text.as_bytes());
}
