use std::sync::{Arc, Barrier};
use std::thread;

use super::common::*;
use crate::assessment::answers::AnswerError;
use crate::assessment::domain::{OptionKey, Section};
use crate::assessment::engine::AssessmentEngine;
use crate::assessment::report::CareerReport;
use crate::assessment::session::{AssessmentSession, SessionError};
use crate::assessment::storage::{KeyValueStore, StorageError, StorageKey};

#[test]
fn recording_persists_after_every_selection() {
    let (store, session) = memory_session();

    let progress = session.record(1, OptionKey::B).expect("valid answer");
    assert_eq!(progress.answered, 1);
    assert_eq!(progress.current_section, Section::Mbti);
    assert!(store
        .get_raw(StorageKey::AssessmentAnswers)
        .expect("store readable")
        .is_some());

    session.record(1, OptionKey::A).expect("answers can change");
    let answers = session.answers().expect("answers load");
    assert_eq!(answers.get(1), Some(OptionKey::A));
    assert_eq!(answers.len(), 1);
}

#[test]
fn invalid_selections_leave_storage_untouched() {
    let (store, session) = memory_session();

    let error = session
        .record(2, OptionKey::D)
        .expect_err("binary question");
    assert!(matches!(
        error,
        SessionError::Answers(AnswerError::InvalidOption { question_id: 2, .. })
    ));
    assert!(store
        .get_raw(StorageKey::AssessmentAnswers)
        .expect("store readable")
        .is_none());
}

#[test]
fn submit_requires_every_question() {
    let (_store, session) = memory_session();
    session.record(1, OptionKey::A).expect("valid answer");

    match session.submit() {
        Err(SessionError::Answers(AnswerError::Incomplete { missing })) => {
            assert_eq!(missing.len(), 29);
            assert_eq!(missing[0], 2);
        }
        other => panic!("expected incomplete answers, got {other:?}"),
    }
    assert!(session.latest_report().expect("readable").is_none());
}

#[test]
fn submit_stores_report_and_personality_result() {
    let (store, session) = memory_session();
    answer_everything(&session, OptionKey::A);

    let report = session
        .submit_at(fixed_instant())
        .expect("complete answers submit");
    assert_eq!(report.mbti.mbti_type, "ISTJ");

    let stored: CareerReport = store
        .load(StorageKey::AssessmentResult)
        .expect("readable")
        .expect("report stored");
    assert_eq!(stored, report);
    assert_eq!(
        session
            .latest_mbti()
            .expect("readable")
            .expect("mbti stored")
            .mbti_type,
        "ISTJ"
    );
}

#[test]
fn retake_clears_answers_and_results() {
    let (_store, session) = memory_session();
    answer_everything(&session, OptionKey::B);
    session.submit().expect("complete answers submit");

    session.retake().expect("retake succeeds");

    assert!(session.answers().expect("readable").is_empty());
    assert!(session.latest_report().expect("readable").is_none());
    assert!(session.latest_mbti().expect("readable").is_none());
    assert_eq!(session.progress().expect("readable").percent_complete, 0);
}

#[test]
fn corrupt_answers_surface_as_storage_errors() {
    let (store, session) = memory_session();
    store
        .set_raw(StorageKey::AssessmentAnswers, r#"{"99":"A"}"#.to_string())
        .expect("raw write");

    assert!(matches!(
        session.answers(),
        Err(SessionError::Storage(StorageError::Corrupt { .. }))
    ));
}

#[test]
fn unavailable_store_propagates() {
    let session =
        AssessmentSession::new(Arc::new(UnavailableStore), AssessmentEngine::standard());

    assert!(matches!(
        session.record(1, OptionKey::A),
        Err(SessionError::Storage(StorageError::Unavailable(_)))
    ));
    assert!(session.retake().is_err());
}

#[test]
fn concurrent_records_keep_every_answer() {
    let session = Arc::new(AssessmentSession::new(
        Arc::new(SlowStore::default()),
        AssessmentEngine::standard(),
    ));
    let barrier = Arc::new(Barrier::new(2));

    let writers: Vec<_> = [(1, OptionKey::A), (9, OptionKey::B)]
        .into_iter()
        .map(|(question_id, option)| {
            let session = Arc::clone(&session);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                session.record(question_id, option).expect("valid answer");
            })
        })
        .collect();
    for writer in writers {
        writer.join().expect("writer thread finishes");
    }

    let answers = session.answers().expect("answers load");
    assert_eq!(answers.len(), 2);
    assert_eq!(answers.get(1), Some(OptionKey::A));
    assert_eq!(answers.get(9), Some(OptionKey::B));
}
