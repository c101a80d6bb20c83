use reqwest::header::AUTHORIZATION;
use serde::{Deserialize, Serialize};

use crate::commands::CommandError;
use crate::utilities::config::FalConfig;
use crate::utilities::presets::Preset;
use crate::utilities::text_utils::TruncateWithEllipsis;

// Low strength keeps the source garment recognizable.
const STRENGTH: f64 = 0.45;
const GUIDANCE_SCALE: f64 = 4.0;
const IMAGE_SIZE: &str = "3072x4096";
const NEGATIVE_PROMPT: &str =
    "watermark, text, logo, extra fingers, plastic skin, hdr glow, oversmooth";

const MAX_ERROR_BODY: usize = 256;

#[derive(Serialize)]
struct Payload<'a> {
    input: Input<'a>,
}

#[derive(Serialize)]
struct Input<'a> {
    image_url: &'a str,
    prompt: &'static str,
    num_images: u8,
    strength: f64,
    guidance_scale: f64,
    image_size: &'static str,
    negative_prompt: &'static str,
}

impl<'a> Payload<'a> {
    fn new(image_url: &'a str, preset: &Preset) -> Self {
        Self {
            input: Input {
                image_url,
                prompt: preset.prompt,
                num_images: preset.num_images,
                strength: STRENGTH,
                guidance_scale: GUIDANCE_SCALE,
                image_size: IMAGE_SIZE,
                negative_prompt: NEGATIVE_PROMPT,
            },
        }
    }
}

#[derive(Deserialize)]
struct Response {
    #[serde(default)]
    images: Vec<ImageRef>,
    output: Option<Output>,
}

#[derive(Deserialize)]
struct Output {
    #[serde(default)]
    images: Vec<ImageRef>,
}

/// The API returns either bare URL strings or objects wrapping one.
#[derive(Deserialize)]
#[serde(untagged)]
enum ImageRef {
    Url(String),
    Object { url: String },
}

impl ImageRef {
    fn into_url(self) -> String {
        match self {
            Self::Url(url) | Self::Object { url } => url,
        }
    }
}

fn extract_image_urls(response: Response) -> Result<Vec<String>, CommandError> {
    let images = if response.images.is_empty() {
        response.output.map(|output| output.images).unwrap_or_default()
    } else {
        response.images
    };

    let urls = images.into_iter().map(ImageRef::into_url).collect::<Vec<_>>();

    if urls.is_empty() {
        return Err(CommandError::EmptyResult);
    }

    Ok(urls)
}

pub async fn generate(
    http_client: &reqwest::Client,
    config: &FalConfig,
    image_url: &str,
    preset: &Preset,
) -> Result<Vec<String>, CommandError> {
    let response = http_client
        .post(&config.url)
        .header(AUTHORIZATION, format!("Key {}", config.key))
        .json(&Payload::new(image_url, preset))
        .send()
        .await?;

    let status = response.status();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(CommandError::Upstream {
            status,
            body: body.truncate_with_ellipsis(MAX_ERROR_BODY),
        });
    }

    extract_image_urls(response.json().await?)
}

#[cfg(test)]
mod test {
    use super::*;

    fn parse(json: &str) -> Response {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn urls_under_the_primary_key() {
        let urls = extract_image_urls(parse(
            r#"{"images": ["https://cdn.example/a.jpg", {"url": "https://cdn.example/b.jpg"}]}"#,
        ))
        .unwrap();

        assert_eq!(urls, ["https://cdn.example/a.jpg", "https://cdn.example/b.jpg"]);
    }

    #[test]
    fn urls_under_the_nested_key() {
        let urls = extract_image_urls(parse(
            r#"{"output": {"images": [{"url": "https://cdn.example/a.jpg"}]}}"#,
        ))
        .unwrap();

        assert_eq!(urls, ["https://cdn.example/a.jpg"]);
    }

    #[test]
    fn both_nestings_normalize_to_the_same_list() {
        let primary = extract_image_urls(parse(r#"{"images": ["https://cdn.example/a.jpg"]}"#));
        let nested =
            extract_image_urls(parse(r#"{"output": {"images": ["https://cdn.example/a.jpg"]}}"#));

        assert_eq!(primary.unwrap(), nested.unwrap());
    }

    #[test]
    fn no_images_anywhere_is_an_empty_result() {
        assert!(matches!(extract_image_urls(parse("{}")), Err(CommandError::EmptyResult)));
        assert!(matches!(
            extract_image_urls(parse(r#"{"images": [], "output": {"images": []}}"#)),
            Err(CommandError::EmptyResult)
        ));
    }

    #[test]
    fn payload_nests_generation_settings_under_input() {
        let preset = Preset { prompt: "studio photo", num_images: 12 };
        let payload = serde_json::to_value(Payload::new("https://cdn.example/src.jpg", &preset))
            .unwrap();

        let input = &payload["input"];

        assert_eq!(input["image_url"], "https://cdn.example/src.jpg");
        assert_eq!(input["prompt"], "studio photo");
        assert_eq!(input["num_images"], 12);
        assert_eq!(input["strength"], 0.45);
        assert_eq!(input["guidance_scale"], 4.0);
        assert_eq!(input["image_size"], "3072x4096");
        assert!(!input["negative_prompt"].as_str().unwrap().is_empty());
    }
}
