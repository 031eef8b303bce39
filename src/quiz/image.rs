use anyhow::*;
use async_trait::async_trait;
use std::path::PathBuf;

use crate::quiz::definition::Question;
use crate::slides::ItemLoader;

/// Resolves question images stored on disk into absolute paths, relative to
/// the directory the quiz was imported from. Remote images are left alone.
#[derive(Clone, Debug)]
pub struct ImageResolver {
    base_dir: PathBuf,
}

impl ImageResolver {
    pub fn new(base_dir: PathBuf) -> Self {
        ImageResolver { base_dir }
    }
}

fn is_remote(image: &str) -> bool {
    image.contains("://") || image.starts_with("data:")
}

#[async_trait(?Send)]
impl ItemLoader<Question> for ImageResolver {
    async fn load(&self, mut question: Question) -> Result<Question> {
        let image = match question.image.clone() {
            Some(image) if !is_remote(&image) => image,
            _ => return Ok(question),
        };

        let path = self.base_dir.join(&image);
        let resolved = tokio::fs::canonicalize(&path).await.with_context(|| {
            format!("Image {:?} of question {:?} is missing", image, question.id)
        })?;
        question.image = Some(resolved.to_string_lossy().into_owned());
        Ok(question)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn question(image: Option<&str>) -> Question {
        Question {
            id: "q1".to_owned(),
            image: image.map(str::to_owned),
            question: "Which flag is this?".to_owned(),
            answers: Vec::new(),
        }
    }

    #[tokio::test]
    async fn resolves_local_images() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("flag.png"), b"png").unwrap();
        let resolver = ImageResolver::new(dir.path().to_path_buf());
        let loaded = resolver.load(question(Some("flag.png"))).await.unwrap();
        let image = PathBuf::from(loaded.image.unwrap());
        assert!(image.is_absolute());
        assert!(image.ends_with("flag.png"));
    }

    #[tokio::test]
    async fn keeps_remote_images() {
        let resolver = ImageResolver::new(PathBuf::from("/nowhere"));
        let url = "https://example.com/flag.png";
        let loaded = resolver.load(question(Some(url))).await.unwrap();
        assert_eq!(loaded.image.as_deref(), Some(url));
        let loaded = resolver.load(question(None)).await.unwrap();
        assert_eq!(loaded.image, None);
    }

    #[tokio::test]
    async fn missing_image_fails() {
        let dir = TempDir::new().unwrap();
        let resolver = ImageResolver::new(dir.path().to_path_buf());
        assert!(resolver.load(question(Some("missing.png"))).await.is_err());
    }
}
