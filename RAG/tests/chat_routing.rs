mod common;

use common::{RecordingSynthesizer, StubRetriever};
use rag_system::chat_service::{NO_CONTACT_INFO, NO_RELEVANT_INFO};
use rag_system::{ChatService, ServiceError};
use std::sync::Arc;

fn service(retriever: &Arc<StubRetriever>, synthesizer: &Arc<RecordingSynthesizer>) -> ChatService {
    ChatService::new(retriever.clone(), synthesizer.clone(), 3)
}

#[tokio::test]
async fn blank_question_is_rejected_without_collaborator_calls() {
    let retriever = Arc::new(StubRetriever::with_chunks(&["anything"]));
    let synthesizer = Arc::new(RecordingSynthesizer::default());
    let chat = service(&retriever, &synthesizer);

    for question in ["", "   ", "\n\t"] {
        let err = chat.answer(question).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
        assert_eq!(err.to_string(), "No question provided");
    }

    assert_eq!(retriever.calls(), 0);
    assert_eq!(synthesizer.call_count(), 0);
}

#[tokio::test]
async fn empty_retrieval_short_circuits_for_any_intent() {
    let retriever = Arc::new(StubRetriever::default());
    let synthesizer = Arc::new(RecordingSynthesizer::default());
    let chat = service(&retriever, &synthesizer);

    assert_eq!(chat.answer("What is your phone number?").await.unwrap(), NO_RELEVANT_INFO);
    assert_eq!(chat.answer("When do you open?").await.unwrap(), NO_RELEVANT_INFO);
    assert_eq!(synthesizer.call_count(), 0);
}

#[tokio::test]
async fn contact_question_without_contact_segments_gets_fallback() {
    let retriever = Arc::new(StubRetriever::with_chunks(&[
        "Our mission is to serve residents.",
        "Office hours are 9 to 5 on weekdays.",
        "Permits are processed within ten days.",
    ]));
    let synthesizer = Arc::new(RecordingSynthesizer::default());
    let chat = service(&retriever, &synthesizer);

    let answer = chat.answer("What is your contact email?").await.unwrap();

    assert_eq!(answer, NO_CONTACT_INFO);
    assert_eq!(synthesizer.call_count(), 0);
}

#[tokio::test]
async fn contact_question_with_contact_segment_is_synthesized() {
    let retriever = Arc::new(StubRetriever::with_chunks(&[
        "Our mission is to serve residents.",
        "Write to help@city.gov for support.",
    ]));
    let synthesizer = Arc::new(RecordingSynthesizer::default());
    let chat = service(&retriever, &synthesizer);

    let answer = chat.answer("  What is your contact email?  ").await.unwrap();

    assert_eq!(answer, "synthesized: What is your contact email?");
    let calls = synthesizer.calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0], ("What is your contact email?".to_string(), 2));
}

#[tokio::test]
async fn non_contact_question_always_reaches_synthesizer() {
    let retriever = Arc::new(StubRetriever::with_chunks(&["Nothing useful here."]));
    let synthesizer = Arc::new(RecordingSynthesizer::default());
    let chat = service(&retriever, &synthesizer);

    let answer = chat.answer("When is the office open?").await.unwrap();

    assert_eq!(answer, "synthesized: When is the office open?");
    assert_eq!(synthesizer.call_count(), 1);
}

#[tokio::test]
async fn retrieval_is_capped_at_k() {
    let retriever = Arc::new(StubRetriever::with_chunks(&["a one", "b two", "c three", "d four"]));
    let synthesizer = Arc::new(RecordingSynthesizer::default());
    let chat = service(&retriever, &synthesizer);

    chat.answer("tell me about things").await.unwrap();

    assert_eq!(synthesizer.calls.lock().unwrap()[0].1, 3);
}

#[tokio::test]
async fn collaborator_failures_are_upstream_errors() {
    let retriever = Arc::new(StubRetriever::failing("index offline"));
    let synthesizer = Arc::new(RecordingSynthesizer::default());
    let err = service(&retriever, &synthesizer)
        .answer("When is the office open?")
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Upstream(_)));
    assert!(err.to_string().contains("index offline"));

    let retriever = Arc::new(StubRetriever::with_chunks(&["Office hours are 9 to 5."]));
    let synthesizer = Arc::new(RecordingSynthesizer::failing("rate limited"));
    let err = service(&retriever, &synthesizer)
        .answer("When is the office open?")
        .await
        .unwrap_err();
    assert_eq!(err.kind(), "upstream");
    assert!(err.to_string().contains("rate limited"));
}
