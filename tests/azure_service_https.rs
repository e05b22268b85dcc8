use howpositive::analytics::{AzureService, DocumentBatch, LanguageDetector, SentimentScorer};
use howpositive::auth::Auth;
use howpositive::conf::{DEFAULT_ANALYTICS_ENDPOINT, SUBSCRIPTION_KEY_VAR};
use howpositive::http::HTTPClientFactory;
use howpositive::post::Post;

// Live checks against a text analytics resource. Scores drift as the
// service's models change, so these only look at what must always hold.

fn service() -> AzureService {
    let auth = Auth::from_env(SUBSCRIPTION_KEY_VAR)
        .expect("Could not create auth. Is $AZURE_SUBSCRIPTION_KEY set?");
    AzureService::new(&HTTPClientFactory::default(), DEFAULT_ANALYTICS_ENDPOINT, auth)
        .expect("could not create analytics service")
}

fn batch() -> DocumentBatch {
    DocumentBatch::from(vec![
        Post::new("1", "What a wonderful day at the beach with friends!"),
        Post::new("2", "Otra vez se canceló mi vuelo."),
    ])
}

#[tokio::test]
#[ignore = "needs $AZURE_SUBSCRIPTION_KEY and network access"]
async fn it_detects_languages() {
    let service = service();
    let languages = LanguageDetector::new(&service)
        .detect(&batch())
        .await
        .expect("could not detect languages");
    assert_eq!(languages, vec!["en", "es"]);
}

#[tokio::test]
#[ignore = "needs $AZURE_SUBSCRIPTION_KEY and network access"]
async fn it_scores_sentiment() {
    let service = service();
    let batch = batch()
        .with_languages(vec!["en".to_string(), "es".to_string()])
        .expect("could not attach languages");
    let scores = SentimentScorer::new(&service)
        .score(&batch)
        .await
        .expect("could not score sentiment");
    assert_eq!(scores.len(), 2);
    assert!(scores.iter().all(|s| (0.0..=1.0).contains(&s.score())));
}
