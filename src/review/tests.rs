use super::*;
use tempfile::TempDir;

use crate::output::mock::MockQuizOutput;
use crate::quiz::definition::Answer;

fn quiz(images: &[Option<&str>]) -> Quiz {
    let questions = images
        .iter()
        .enumerate()
        .map(|(i, image)| Question {
            id: format!("q{}", i + 1),
            image: image.map(str::to_owned),
            question: format!("Question {}", i + 1),
            answers: vec![Answer {
                id: "a1".to_owned(),
                answer: "Answer".to_owned(),
                is_correct: true,
            }],
        })
        .collect();
    Quiz {
        id: "quiz".to_owned(),
        title: "Quiz".to_owned(),
        questions,
        ..Default::default()
    }
}

fn review_slides(output: &MockQuizOutput) -> Vec<usize> {
    output
        .flush()
        .into_iter()
        .filter_map(|m| match m {
            Message::ReviewSlide { number, .. } => Some(number),
            _ => None,
        })
        .collect()
}

#[tokio::test]
async fn resolves_images_around_current_slide() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("one.png"), b"png").unwrap();
    std::fs::write(dir.path().join("two.png"), b"png").unwrap();
    let quiz = quiz(&[Some("one.png"), Some("two.png"), None]);
    let output = MockQuizOutput::new();
    let settings = Settings {
        auto_advance: false,
        ..Default::default()
    };
    let mut review =
        ReviewSlideshow::new(&quiz, settings, dir.path().to_path_buf(), output.clone()).unwrap();
    review.begin().await.unwrap();

    let image = review.slides.current_slide().unwrap().image.clone().unwrap();
    assert!(PathBuf::from(image).is_absolute());
    assert_eq!(review_slides(&output), vec![1]);
}

#[tokio::test]
async fn missing_image_is_reported() {
    let dir = TempDir::new().unwrap();
    let quiz = quiz(&[Some("missing.png"), None]);
    let output = MockQuizOutput::new();
    let mut review =
        ReviewSlideshow::new(&quiz, Settings::default(), dir.path().to_path_buf(), output.clone())
            .unwrap();
    review.begin().await.unwrap();
    assert_eq!(
        output.count_matching(|m| match m {
            Message::Error(_) => true,
            _ => false,
        }),
        1
    );
    assert_eq!(review.slides.current_slide().unwrap().image.as_deref(), Some("missing.png"));
}

#[tokio::test]
async fn auto_advances_and_skips() {
    let dir = TempDir::new().unwrap();
    let quiz = quiz(&[None, None, None, None]);
    let output = MockQuizOutput::new();
    let settings = Settings {
        skip_index: Some(2),
        slide_duration: Duration::from_secs(5),
        ..Default::default()
    };
    let mut review =
        ReviewSlideshow::new(&quiz, settings, dir.path().to_path_buf(), output.clone()).unwrap();
    review.begin().await.unwrap();
    assert_eq!(review.tick(Duration::from_secs(10)).await, 2);
    assert_eq!(review.slides.current_index(), Some(3));
    assert_eq!(review_slides(&output), vec![1, 2, 4]);
}

#[tokio::test]
async fn keys_drive_the_slideshow() {
    let dir = TempDir::new().unwrap();
    let quiz = quiz(&[None, None, None]);
    let output = MockQuizOutput::new();
    let mut review =
        ReviewSlideshow::new(&quiz, Settings::default(), dir.path().to_path_buf(), output.clone())
            .unwrap();
    review.begin().await.unwrap();

    assert_eq!(review.handle_key("ArrowLeft").await, KeyOutcome::Handled);
    assert_eq!(review.slides.current_index(), Some(2));
    assert!(!review.slides.is_auto_advancing());
    assert!(output.contains_message(&Message::AutoAdvance(false)));

    assert_eq!(review.handle_key("Space").await, KeyOutcome::Handled);
    assert!(review.slides.is_auto_advancing());
    assert_eq!(review.handle_key("Enter").await, KeyOutcome::Ignored);
}
