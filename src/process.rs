// The fabricated processing pipeline: fake detection, a caption, and two
// stubs that hand the image back untouched.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, Level};

use crate::fashion::{detect_fashion_items, generate_ugc_text};
use crate::payload::EncodedImage;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedResult {
    pub original_image: String,
    pub enhanced_image: String,
    pub fashion_items: Vec<String>,
    pub ugc_text: String,
    pub ugc_animation: String,
}

/// Stand-in for a real enhancement step; returns the image unchanged.
pub async fn enhance_image(image: String) -> Result<String> {
    Ok(image)
}

/// Stand-in for UGC animation rendering; returns the image unchanged.
pub async fn create_ugc_animation(image: String, _caption: &str) -> Result<String> {
    Ok(image)
}

pub async fn process_image(image: String) -> Result<ProcessedResult> {
    if tracing::enabled!(Level::DEBUG) {
        match EncodedImage::inspect(&image) {
            Some(info) => debug!(
                mime = %info.mime_type,
                bytes = info.byte_len,
                format = ?info.format,
                "processing encoded image"
            ),
            None => debug!(len = image.len(), "processing opaque image payload"),
        }
    }

    let (fashion_items, ugc_text) = {
        let mut rng = rand::thread_rng();
        let items = detect_fashion_items(&mut rng);
        let text = generate_ugc_text(&mut rng, &items);
        (items, text)
    };

    let enhanced_image = enhance_image(image.clone()).await?;
    let ugc_animation = create_ugc_animation(enhanced_image.clone(), &ugc_text).await?;

    Ok(ProcessedResult {
        original_image: image,
        enhanced_image,
        fashion_items,
        ugc_text,
        ugc_animation,
    })
}

/// Processes every image on its own task. Results come back in submission
/// order; the first failure fails the whole batch.
pub async fn process_batch(images: Vec<String>) -> Result<Vec<ProcessedResult>> {
    info!(count = images.len(), "processing image batch");

    let handles: Vec<_> = images
        .into_iter()
        .map(|image| tokio::spawn(process_image(image)))
        .collect();

    let mut results = Vec::with_capacity(handles.len());
    for (index, handle) in handles.into_iter().enumerate() {
        let result = handle
            .await
            .with_context(|| format!("task for image {} did not complete", index))??;
        results.push(result);
    }

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fashion::{MAX_ITEMS, MIN_ITEMS};

    #[tokio::test]
    async fn stubs_pass_images_through() {
        let image = "data:image/png;base64,iVBORw0KGgo=".to_string();
        let result = process_image(image.clone()).await.unwrap();

        assert_eq!(result.original_image, image);
        assert_eq!(result.enhanced_image, image);
        assert_eq!(result.ugc_animation, image);
        assert!((MIN_ITEMS..=MAX_ITEMS).contains(&result.fashion_items.len()));
        assert!(!result.ugc_text.is_empty());
    }

    #[tokio::test]
    async fn batch_preserves_order() {
        let images: Vec<String> = (0..32).map(|i| format!("image-{}", i)).collect();
        let results = process_batch(images.clone()).await.unwrap();

        assert_eq!(results.len(), images.len());
        for (result, image) in results.iter().zip(&images) {
            assert_eq!(&result.original_image, image);
            assert_eq!(&result.enhanced_image, image);
        }
    }

    #[tokio::test]
    async fn empty_batch_yields_no_results() {
        assert!(process_batch(Vec::new()).await.unwrap().is_empty());
    }

    #[test]
    fn serializes_camel_case() {
        let result = ProcessedResult {
            original_image: "a".into(),
            enhanced_image: "a".into(),
            fashion_items: vec!["Jean".into(), "Pull".into()],
            ugc_text: "OOTD : Jean + Pull. Simple mais efficace ! ⭐".into(),
            ugc_animation: "a".into(),
        };
        let value = serde_json::to_value(&result).unwrap();

        assert_eq!(value["originalImage"], "a");
        assert_eq!(value["enhancedImage"], "a");
        assert_eq!(value["fashionItems"][1], "Pull");
        assert_eq!(value["ugcAnimation"], "a");
        assert!(value["ugcText"].as_str().unwrap().starts_with("OOTD"));
    }
}
