//! Streamed resource retrieval.
//!
//! `GetResource` is a server-streaming call: the backend sends the resource
//! in chunks and the client concatenates them in arrival order. A status of
//! [`RESOURCE_UNAVAILABLE`] ends the call at once with
//! [`StoreError::ResourceUnavailable`]; any other error status ends it with
//! [`StoreError::Rpc`]. Either way no partial data is returned.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use futures::StreamExt;
use tonic::Code;

use crate::clients::ResourceStream;
use crate::store::StoreError;

/// The status code the backend uses for a resource that cannot be served.
pub const RESOURCE_UNAVAILABLE: Code = Code::Internal;

/// Drains `stream`, concatenating every chunk in order.
///
/// # Errors
///
/// Returns the first error status the stream yields, mapped as described in
/// the module docs. Chunks received before it are discarded.
pub async fn assemble_resource(mut stream: ResourceStream) -> Result<Vec<u8>, StoreError> {
    let mut data = Vec::new();
    let mut chunks = 0_usize;

    while let Some(item) = stream.next().await {
        match item {
            Ok(chunk) => {
                data.extend_from_slice(&chunk.data);
                chunks += 1;
            }
            Err(status) if status.code() == RESOURCE_UNAVAILABLE => {
                tracing::debug!(chunks, "Resource stream reported resource unavailable");
                return Err(StoreError::ResourceUnavailable(status));
            }
            Err(status) => return Err(StoreError::Rpc(status)),
        }
    }

    tracing::debug!(chunks, bytes = data.len(), "Resource stream complete");
    Ok(data)
}

/// Formats `bytes` as a base64 data URI.
///
/// # Example
///
/// ```rust
/// use storefront_rpc::build_image_from_bytes;
///
/// assert_eq!(
///     build_image_from_bytes("image/png", b"hi"),
///     "data:image/png;base64,aGk="
/// );
/// ```
#[must_use]
pub fn build_image_from_bytes(content_type: &str, bytes: &[u8]) -> String {
    format!("data:{content_type};base64,{}", STANDARD.encode(bytes))
}
