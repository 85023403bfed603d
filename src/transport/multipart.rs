//! multipart/form-data body construction.
//!
//! The byte layout is fixed: every part is opened by `--{boundary}\r\n`, carries a
//! `Content-Disposition` header (plus `Content-Type` for files), a blank line, the
//! payload and a trailing CRLF. The body ends with a single `--{boundary}--\r\n`.

use crate::{Error, ErrorContext, Result};
use std::path::{Path, PathBuf};
use tracing::trace;

const CRLF: &[u8] = b"\r\n";
const BOUNDARY_PREFIX: &str = "------------------------elevenlabs";
const MAX_BOUNDARY_ATTEMPTS: usize = 8;
const DEFAULT_AUDIO_MIME: &str = "audio/mpeg";

/// Where the bytes of a file part come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileSource {
    /// Read from disk when the body is encoded.
    Path(PathBuf),
    /// Already in memory.
    Bytes(Vec<u8>),
}

impl FileSource {
    fn load(&self) -> Result<Vec<u8>> {
        match self {
            FileSource::Path(path) => std::fs::read(path).map_err(Error::Io),
            FileSource::Bytes(bytes) => Ok(bytes.clone()),
        }
    }
}

/// One entry of a multipart form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MultipartFormContent {
    Field {
        name: String,
        value: String,
    },
    File {
        name: String,
        filename: String,
        content_type: String,
        source: FileSource,
    },
}

impl MultipartFormContent {
    pub fn name(&self) -> &str {
        match self {
            MultipartFormContent::Field { name, .. } | MultipartFormContent::File { name, .. } => {
                name
            }
        }
    }
}

/// Ordered list of form entries. Order is preserved in the encoded body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultipartForm {
    items: Vec<MultipartFormContent>,
}

impl MultipartForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.items.push(MultipartFormContent::Field {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    /// Add a file part read from `path`. File name and MIME type come from the path.
    pub fn file_path(mut self, name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "file".to_string());
        let content_type = guess_mime_type(&path).to_string();
        self.items.push(MultipartFormContent::File {
            name: name.into(),
            filename,
            content_type,
            source: FileSource::Path(path),
        });
        self
    }

    pub fn file_bytes(
        mut self,
        name: impl Into<String>,
        filename: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        self.items.push(MultipartFormContent::File {
            name: name.into(),
            filename: filename.into(),
            content_type: content_type.into(),
            source: FileSource::Bytes(bytes),
        });
        self
    }

    pub fn items(&self) -> &[MultipartFormContent] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Encode the form with a freshly generated boundary that does not occur in any payload.
    ///
    /// Returns `(boundary, body)`.
    pub fn encode(&self) -> Result<(String, Vec<u8>)> {
        let payloads = self.load_payloads()?;
        for _ in 0..MAX_BOUNDARY_ATTEMPTS {
            let boundary = generate_boundary();
            if payloads
                .iter()
                .all(|p| !contains_subslice(p, boundary.as_bytes()))
            {
                let body = write_body(&self.items, &payloads, &boundary);
                return Ok((boundary, body));
            }
        }
        Err(Error::configuration_with_context(
            "could not find a multipart boundary absent from the payload",
            ErrorContext::new().with_source("multipart"),
        ))
    }

    /// Encode the form with a caller-chosen boundary.
    pub fn encode_with_boundary(&self, boundary: &str) -> Result<Vec<u8>> {
        if boundary.is_empty() {
            return Err(Error::configuration("multipart boundary must not be empty"));
        }
        let payloads = self.load_payloads()?;
        if let Some(item) = self
            .items
            .iter()
            .zip(&payloads)
            .find(|(_, p)| contains_subslice(p, boundary.as_bytes()))
            .map(|(item, _)| item)
        {
            return Err(Error::configuration_with_context(
                "multipart boundary collides with part content",
                ErrorContext::new()
                    .with_field_path(item.name())
                    .with_source("multipart"),
            ));
        }
        Ok(write_body(&self.items, &payloads, boundary))
    }

    fn load_payloads(&self) -> Result<Vec<Vec<u8>>> {
        self.items
            .iter()
            .map(|item| match item {
                MultipartFormContent::Field { value, .. } => Ok(value.as_bytes().to_vec()),
                MultipartFormContent::File { source, .. } => source.load(),
            })
            .collect()
    }
}

fn write_body(items: &[MultipartFormContent], payloads: &[Vec<u8>], boundary: &str) -> Vec<u8> {
    let mut body = Vec::with_capacity(payloads.iter().map(|p| p.len() + 128).sum());
    for (item, payload) in items.iter().zip(payloads) {
        body.extend_from_slice(b"--");
        body.extend_from_slice(boundary.as_bytes());
        body.extend_from_slice(CRLF);
        match item {
            MultipartFormContent::Field { name, .. } => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{}\"",
                        escape_quoted(name)
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(CRLF);
            }
            MultipartFormContent::File {
                name,
                filename,
                content_type,
                ..
            } => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"",
                        escape_quoted(name),
                        escape_quoted(filename)
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(CRLF);
                body.extend_from_slice(format!("Content-Type: {}", content_type).as_bytes());
                body.extend_from_slice(CRLF);
            }
        }
        body.extend_from_slice(CRLF);
        body.extend_from_slice(payload);
        body.extend_from_slice(CRLF);
        trace!(part = item.name(), bytes = payload.len(), "multipart part written");
    }
    body.extend_from_slice(b"--");
    body.extend_from_slice(boundary.as_bytes());
    body.extend_from_slice(b"--");
    body.extend_from_slice(CRLF);
    body
}

/// A boundary token unique per call.
pub fn generate_boundary() -> String {
    format!("{}{}", BOUNDARY_PREFIX, uuid::Uuid::new_v4().simple())
}

/// `Content-Type` header value for a body encoded with `boundary`.
pub fn content_type_header(boundary: &str) -> String {
    format!("multipart/form-data; boundary={}", boundary)
}

/// MIME type for an audio sample, judged by its extension.
///
/// Non-audio guesses and unknown extensions fall back to `audio/mpeg`.
pub fn guess_mime_type(path: &Path) -> &'static str {
    mime_guess::from_path(path)
        .iter_raw()
        .find(|mime| mime.starts_with("audio/"))
        .unwrap_or(DEFAULT_AUDIO_MIME)
}

fn escape_quoted(s: &str) -> String {
    s.replace('"', "%22").replace('\r', "%0D").replace('\n', "%0A")
}

fn contains_subslice(haystack: &[u8], needle: &[u8]) -> bool {
    !needle.is_empty()
        && haystack.len() >= needle.len()
        && haystack.windows(needle.len()).any(|w| w == needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct ParsedPart {
        name: Option<String>,
        file_name: Option<String>,
        content_type: Option<String>,
        data: Vec<u8>,
    }

    /// Read an encoded body back with `multer`.
    fn parse(body: Vec<u8>, boundary: &str) -> Vec<ParsedPart> {
        let stream = futures::stream::once(async move {
            Ok::<_, std::convert::Infallible>(bytes::Bytes::from(body))
        });
        let mut multipart = multer::Multipart::new(stream, boundary);
        futures::executor::block_on(async {
            let mut parts = Vec::new();
            while let Some(field) = multipart.next_field().await.unwrap() {
                let name = field.name().map(String::from);
                let file_name = field.file_name().map(String::from);
                let content_type = field.content_type().map(|m| m.to_string());
                let data = field.bytes().await.unwrap().to_vec();
                parts.push(ParsedPart {
                    name,
                    file_name,
                    content_type,
                    data,
                });
            }
            parts
        })
    }

    fn closing_count(body: &[u8], boundary: &str) -> usize {
        let closing = format!("--{}--", boundary).into_bytes();
        body.windows(closing.len()).filter(|w| *w == closing.as_slice()).count()
    }

    #[test]
    fn exact_layout_for_field_and_file() {
        let form = MultipartForm::new()
            .text("name", "Test")
            .file_bytes("files", "a.mp3", "audio/mpeg", vec![1, 2, 3]);
        let body = form.encode_with_boundary("XYZ").unwrap();
        let mut expected = Vec::new();
        expected.extend_from_slice(
            b"--XYZ\r\nContent-Disposition: form-data; name=\"name\"\r\n\r\nTest\r\n",
        );
        expected.extend_from_slice(
            b"--XYZ\r\nContent-Disposition: form-data; name=\"files\"; filename=\"a.mp3\"\r\nContent-Type: audio/mpeg\r\n\r\n",
        );
        expected.extend_from_slice(&[1, 2, 3]);
        expected.extend_from_slice(b"\r\n--XYZ--\r\n");
        assert_eq!(body, expected);
    }

    #[test]
    fn parts_come_back_in_order() {
        let audio: Vec<u8> = (0..=255u8).cycle().take(2048).collect();
        let form = MultipartForm::new()
            .text("name", "Test")
            .text("labels", r#"{"accent":"british","age":"old"}"#)
            .file_bytes("files", "one.wav", "audio/wav", audio.clone())
            .text("description", "line1\r\nline2");
        let (boundary, body) = form.encode().unwrap();
        assert_eq!(closing_count(&body, &boundary), 1);
        assert!(body.ends_with(format!("--{}--\r\n", boundary).as_bytes()));

        let parts = parse(body, &boundary);
        assert_eq!(parts.len(), 4);
        let names: Vec<_> = parts.iter().map(|p| p.name.as_deref().unwrap()).collect();
        assert_eq!(names, vec!["name", "labels", "files", "description"]);
        assert_eq!(parts[0].data, b"Test");
        assert!(parts[0].file_name.is_none());
        assert_eq!(parts[1].data, br#"{"accent":"british","age":"old"}"#);
        assert_eq!(parts[2].file_name.as_deref(), Some("one.wav"));
        assert_eq!(parts[2].content_type.as_deref(), Some("audio/wav"));
        assert_eq!(parts[2].data, audio);
        assert_eq!(parts[3].data, b"line1\r\nline2");
    }

    #[test]
    fn several_files_keep_exact_bytes() {
        // Payloads that look like delimiters must not split a part.
        let first = b"\r\n--not-the-boundary\r\n\r\n".to_vec();
        let second: Vec<u8> = (0..4096u32).map(|i| (i * 7 % 256) as u8).collect();
        let third = Vec::new();
        let form = MultipartForm::new()
            .text("name", "Clone")
            .text("description", "")
            .file_bytes("files", "a.mp3", "audio/mpeg", first.clone())
            .file_bytes("files", "b.ogg", "audio/ogg", second.clone())
            .file_bytes("files", "c.flac", "audio/flac", third.clone());
        let (boundary, body) = form.encode().unwrap();
        assert_eq!(closing_count(&body, &boundary), 1);

        let parts = parse(body, &boundary);
        assert_eq!(parts.len(), 5);
        assert_eq!(parts[0].data, b"Clone");
        assert!(parts[1].data.is_empty());
        let files: Vec<_> = parts[2..]
            .iter()
            .map(|p| (p.file_name.as_deref().unwrap(), p.data.clone()))
            .collect();
        assert_eq!(
            files,
            vec![("a.mp3", first), ("b.ogg", second), ("c.flac", third)]
        );
        assert!(parts[2..].iter().all(|p| p.name.as_deref() == Some("files")));
    }

    #[test]
    fn empty_form_is_only_closing_delimiter() {
        let body = MultipartForm::new().encode_with_boundary("b").unwrap();
        assert_eq!(body, b"--b--\r\n");
    }

    #[test]
    fn colliding_boundary_is_rejected() {
        let form = MultipartForm::new().text("name", "contains --XYZ inside");
        let err = form.encode_with_boundary("XYZ").unwrap_err();
        assert!(matches!(err, Error::Configuration { .. }));
    }

    #[test]
    fn boundaries_are_unique() {
        assert_ne!(generate_boundary(), generate_boundary());
        assert_eq!(
            content_type_header("abc"),
            "multipart/form-data; boundary=abc"
        );
    }

    #[test]
    fn file_path_reads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.WAV");
        std::fs::write(&path, b"RIFFdata").unwrap();
        let form = MultipartForm::new().file_path("files", &path);
        match &form.items()[0] {
            MultipartFormContent::File {
                filename,
                content_type,
                ..
            } => {
                assert_eq!(filename, "sample.WAV");
                assert_eq!(content_type, "audio/wav");
            }
            other => panic!("unexpected item {:?}", other),
        }
        let body = form.encode_with_boundary("B").unwrap();
        assert!(body.windows(8).any(|w| w == b"RIFFdata"));
    }

    #[test]
    fn missing_file_surfaces_io_error() {
        let form = MultipartForm::new().file_path("files", "/definitely/not/here.mp3");
        assert!(matches!(form.encode(), Err(Error::Io(_))));
    }

    #[test]
    fn audio_mime_types_come_from_extension() {
        for name in ["a.opus", "a.aiff", "a.ogg", "a.flac"] {
            let mime = guess_mime_type(Path::new(name));
            assert!(mime.starts_with("audio/"), "{} -> {}", name, mime);
            assert_ne!(mime, "audio/mpeg", "{}", name);
        }
        assert_eq!(guess_mime_type(Path::new("a.mp3")), "audio/mpeg");
        assert_eq!(guess_mime_type(Path::new("notes.txt")), "audio/mpeg");
        assert_eq!(guess_mime_type(Path::new("no_extension")), "audio/mpeg");
    }
}
