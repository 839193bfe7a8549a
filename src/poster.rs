use crate::omdb::{build_client, FetchError};

/// Download poster image bytes. Returns `None` on any failure.
pub async fn fetch_poster(url: &str, timeout_secs: Option<u64>) -> Option<Vec<u8>> {
    match download(url, timeout_secs).await {
        Ok(bytes) => {
            tracing::debug!("Loaded poster {} ({} bytes)", url, bytes.len());
            Some(bytes)
        }
        Err(e) => {
            tracing::warn!("Failed to load poster {}: {}", url, e);
            None
        }
    }
}

async fn download(url: &str, timeout_secs: Option<u64>) -> Result<Vec<u8>, FetchError> {
    let client = build_client(timeout_secs)?;
    let response = client.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }

    Ok(response.bytes().await?.to_vec())
}
