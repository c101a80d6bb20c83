use bytes::Bytes;
use rand::Rng;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};

use crate::commands::CommandError;
use crate::utilities::config::StorageConfig;
use crate::utilities::text_utils::TruncateWithEllipsis;

const MAX_ERROR_BODY: usize = 256;

/// Uploads a blob into the bucket and returns its public URL.
pub async fn upload(
    http_client: &reqwest::Client,
    config: &StorageConfig,
    content: Bytes,
    suffix: &str,
) -> Result<String, CommandError> {
    let object_name = object_name(suffix);

    let response = http_client
        .post(format!(
            "{}/storage/v1/object/{}/{object_name}",
            config.endpoint, config.bucket
        ))
        .header(AUTHORIZATION, format!("Bearer {}", config.key))
        .header("apikey", config.key.as_str())
        .header(CONTENT_TYPE, mime_for_suffix(suffix))
        .body(content)
        .send()
        .await?;

    let status = response.status();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(CommandError::Storage {
            status,
            body: body.truncate_with_ellipsis(MAX_ERROR_BODY),
        });
    }

    Ok(format!("{}/storage/v1/object/public/{}/{object_name}", config.endpoint, config.bucket))
}

/// Fetches an image from a URL and stores a copy in the bucket, so replies
/// never depend on the generation API keeping its files around.
pub async fn reupload(
    http_client: &reqwest::Client,
    config: &StorageConfig,
    url: &str,
) -> Result<String, CommandError> {
    let response = http_client.get(url).send().await?.error_for_status()?;

    let suffix = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map_or("jpg", suffix_for_mime);

    let content = response.bytes().await?;

    upload(http_client, config, content, suffix).await
}

fn object_name(suffix: &str) -> String {
    let timestamp = time::OffsetDateTime::now_utc().unix_timestamp();
    let token = rand::rng().random::<u64>();

    format!("{timestamp}-{token:016x}.{suffix}")
}

fn mime_for_suffix(suffix: &str) -> &'static str {
    match suffix {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "webp" => "image/webp",
        _ => "application/octet-stream",
    }
}

pub fn suffix_for_mime(mime: &str) -> &'static str {
    match mime.split(';').next().unwrap_or_default().trim() {
        "image/png" => "png",
        "image/webp" => "webp",
        _ => "jpg",
    }
}
