use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static BOUNDARY_SEQ: AtomicU64 = AtomicU64::new(0);

/// Minimal `multipart/form-data` body builder (RFC 7578 subset). `ureq` has
/// no multipart support of its own, and the inpainting endpoint only needs
/// plain text fields and binary file parts.
#[derive(Debug, Clone)]
pub struct MultipartBody {
    boundary: String,
    buffer: Vec<u8>,
}

impl MultipartBody {
    pub fn new() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_nanos())
            .unwrap_or(0);
        let seq = BOUNDARY_SEQ.fetch_add(1, Ordering::Relaxed);
        Self {
            boundary: format!("----inpaint-boundary-{nanos:024x}{seq:08x}"),
            buffer: Vec::new(),
        }
    }

    pub fn boundary(&self) -> &str {
        &self.boundary
    }

    pub fn content_type(&self) -> String {
        format!("multipart/form-data; boundary={}", self.boundary)
    }

    pub fn add_text(&mut self, name: &str, value: &str) {
        self.open_part(&format!("form-data; name=\"{name}\""), None);
        self.buffer.extend_from_slice(value.as_bytes());
        self.buffer.extend_from_slice(b"\r\n");
    }

    pub fn add_file(&mut self, name: &str, filename: &str, content_type: &str, bytes: &[u8]) {
        self.open_part(
            &format!("form-data; name=\"{name}\"; filename=\"{filename}\""),
            Some(content_type),
        );
        self.buffer.extend_from_slice(bytes);
        self.buffer.extend_from_slice(b"\r\n");
    }

    /// Appends the closing boundary and returns the finished body.
    pub fn finish(mut self) -> Vec<u8> {
        self.buffer
            .extend_from_slice(format!("--{}--\r\n", self.boundary).as_bytes());
        self.buffer
    }

    fn open_part(&mut self, disposition: &str, content_type: Option<&str>) {
        self.buffer
            .extend_from_slice(format!("--{}\r\n", self.boundary).as_bytes());
        self.buffer
            .extend_from_slice(format!("Content-Disposition: {disposition}\r\n").as_bytes());
        if let Some(content_type) = content_type {
            self.buffer
                .extend_from_slice(format!("Content-Type: {content_type}\r\n").as_bytes());
        }
        self.buffer.extend_from_slice(b"\r\n");
    }
}

impl Default for MultipartBody {
    fn default() -> Self {
        Self::new()
    }
}
