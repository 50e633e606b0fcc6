// RADOS Gateway Swift client library for Rust
// Copyright 2025 MinIO, Inc.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use async_std::io::ReadExt;
use bytes::Bytes;
use futures_util::stream::{self, Stream, StreamExt};
use std::fmt;
use std::path::{Path, PathBuf};
use std::pin::Pin;

type IoResult<T> = core::result::Result<T, std::io::Error>;

/// Boxed stream of body chunks.
pub type ContentStream = Pin<Box<dyn Stream<Item = IoResult<Bytes>> + Send>>;

const FILE_CHUNK_SIZE: usize = 8192;

// region: Size

#[derive(Debug, Clone, PartialEq, Eq, Copy, Default)]
pub enum Size {
    Known(u64),
    #[default]
    Unknown,
}

impl Size {
    /// Returns the size if known, otherwise returns `None`.
    pub fn value(&self) -> Option<u64> {
        match self {
            Size::Known(v) => Some(*v),
            Size::Unknown => None,
        }
    }
}

impl From<Option<u64>> for Size {
    fn from(value: Option<u64>) -> Self {
        match value {
            Some(v) => Size::Known(v),
            None => Size::Unknown,
        }
    }
}

impl From<u64> for Size {
    fn from(value: u64) -> Self {
        Size::Known(value)
    }
}
// endregion: Size

/// Object content that can be uploaded.
///
/// Can be constructed from a stream of `Bytes`, a file path, or in-memory data.
/// A file is only opened when the upload starts and is closed when the body
/// has been sent.
pub struct ObjectContent(ObjectContentInner);

enum ObjectContentInner {
    Stream(ContentStream, Size),
    FilePath(PathBuf),
    Bytes(Bytes),
}

impl From<Bytes> for ObjectContent {
    fn from(value: Bytes) -> Self {
        ObjectContent(ObjectContentInner::Bytes(value))
    }
}

impl From<String> for ObjectContent {
    fn from(value: String) -> Self {
        ObjectContent(ObjectContentInner::Bytes(Bytes::from(value)))
    }
}

impl From<Vec<u8>> for ObjectContent {
    fn from(value: Vec<u8>) -> Self {
        ObjectContent(ObjectContentInner::Bytes(Bytes::from(value)))
    }
}

impl From<&'static [u8]> for ObjectContent {
    fn from(value: &'static [u8]) -> Self {
        ObjectContent(ObjectContentInner::Bytes(Bytes::from_static(value)))
    }
}

impl From<&'static str> for ObjectContent {
    fn from(value: &'static str) -> Self {
        ObjectContent(ObjectContentInner::Bytes(Bytes::from_static(
            value.as_bytes(),
        )))
    }
}

impl From<&Path> for ObjectContent {
    fn from(value: &Path) -> Self {
        ObjectContent(ObjectContentInner::FilePath(value.to_path_buf()))
    }
}

impl From<PathBuf> for ObjectContent {
    fn from(value: PathBuf) -> Self {
        ObjectContent(ObjectContentInner::FilePath(value))
    }
}

impl Default for ObjectContent {
    fn default() -> Self {
        ObjectContent(ObjectContentInner::Bytes(Bytes::new()))
    }
}

impl fmt::Debug for ObjectContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            ObjectContentInner::Stream(_, size) => {
                f.debug_tuple("ObjectContent::Stream").field(size).finish()
            }
            ObjectContentInner::FilePath(path) => {
                f.debug_tuple("ObjectContent::FilePath").field(path).finish()
            }
            ObjectContentInner::Bytes(b) => f
                .debug_tuple("ObjectContent::Bytes")
                .field(&b.len())
                .finish(),
        }
    }
}

impl ObjectContent {
    /// Create a new `ObjectContent` from a stream of `Bytes`.
    pub fn new_from_stream(
        r: impl Stream<Item = IoResult<Bytes>> + Send + 'static,
        size: impl Into<Size>,
    ) -> Self {
        ObjectContent(ObjectContentInner::Stream(Box::pin(r), size.into()))
    }

    /// Opens the content for sending and returns the chunk stream with its
    /// size, when known up front.
    ///
    /// For a file path this is where the file is opened, so a missing or
    /// unreadable file surfaces here as a local I/O error.
    pub async fn to_stream(self) -> IoResult<(ContentStream, Size)> {
        match self.0 {
            ObjectContentInner::Stream(r, size) => Ok((r, size)),

            ObjectContentInner::FilePath(path) => {
                let mut file = async_std::fs::File::open(&path).await?;
                let size = file.metadata().await?.len();

                let stream = async_stream::try_stream! {
                    let mut buf = vec![0u8; FILE_CHUNK_SIZE];
                    loop {
                        let n = file.read(&mut buf).await?;
                        if n == 0 {
                            break;
                        }
                        yield Bytes::copy_from_slice(&buf[..n]);
                    }
                };

                Ok((Box::pin(stream), Size::Known(size)))
            }

            ObjectContentInner::Bytes(b) => {
                let k = b.len() as u64;
                let r = stream::iter(
                    std::iter::once(Ok::<_, std::io::Error>(b)).filter(move |_| k > 0),
                );
                Ok((Box::pin(r), Size::Known(k)))
            }
        }
    }

    /// Load the content into memory.
    pub async fn to_bytes(self) -> IoResult<Bytes> {
        let (mut r, _) = match self.0 {
            ObjectContentInner::Bytes(b) => return Ok(b),
            inner => ObjectContent(inner).to_stream().await?,
        };
        let mut buf = bytes::BytesMut::new();
        while let Some(chunk) = r.next().await {
            buf.extend_from_slice(&chunk?);
        }
        Ok(buf.freeze())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_bytes_content() {
        let (_, size) = ObjectContent::from("123456789abcdefghij")
            .to_stream()
            .await
            .unwrap();
        assert_eq!(size, Size::Known(19));

        let data = ObjectContent::from(String::from("hello")).to_bytes().await.unwrap();
        assert_eq!(data.as_ref(), b"hello");
    }

    #[tokio::test]
    async fn test_empty_bytes_yield_no_chunks() {
        let (mut r, size) = ObjectContent::from(Bytes::new()).to_stream().await.unwrap();
        assert_eq!(size, Size::Known(0));
        assert!(r.next().await.is_none());
    }

    #[tokio::test]
    async fn test_file_content_is_chunked() {
        let path = std::env::temp_dir().join(format!(
            "rgw-swift-content-{}",
            std::process::id()
        ));
        let payload: Vec<u8> = (0..(FILE_CHUNK_SIZE * 2 + 17)).map(|i| i as u8).collect();
        std::fs::File::create(&path)
            .unwrap()
            .write_all(&payload)
            .unwrap();

        let (mut r, size) = ObjectContent::from(path.as_path()).to_stream().await.unwrap();
        assert_eq!(size, Size::Known(payload.len() as u64));
        let mut chunks = 0;
        let mut read = Vec::new();
        while let Some(chunk) = r.next().await {
            read.extend_from_slice(&chunk.unwrap());
            chunks += 1;
        }
        assert!(chunks >= 3);
        assert_eq!(read, payload);

        std::fs::remove_file(&path).unwrap();
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let err = ObjectContent::from(Path::new("/nonexistent/rgw-swift/file"))
            .to_stream()
            .await
            .err().unwrap();
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
    }
}
