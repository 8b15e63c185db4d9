//! SubmitAssessmentHandler - Scores a questionnaire submission and records
//! the resulting risk profile on the user's session.

use std::sync::Arc;

use crate::domain::assessment::{AnswerSet, Assessment, RiskClassifier};
use crate::domain::foundation::{DomainError, SessionId};
use crate::domain::session::UserSession;

use super::super::session::SessionService;

/// Command to submit questionnaire answers.
#[derive(Debug, Clone)]
pub struct SubmitAssessmentCommand {
    pub session_id: SessionId,
    pub answers: AnswerSet,
}

/// Result of a scored submission.
#[derive(Debug, Clone)]
pub struct SubmitAssessmentResult {
    pub session: UserSession,
    pub assessment: Assessment,
}

/// Handler for questionnaire submissions.
///
/// With `strict_answers` off, entries that name an unknown question or
/// option are skipped and logged. With it on, the first such entry rejects
/// the submission and nothing is persisted.
pub struct SubmitAssessmentHandler {
    sessions: Arc<SessionService>,
    classifier: RiskClassifier<'static>,
    strict_answers: bool,
}

impl SubmitAssessmentHandler {
    pub fn new(sessions: Arc<SessionService>, strict_answers: bool) -> Self {
        Self {
            sessions,
            classifier: RiskClassifier::standard(),
            strict_answers,
        }
    }

    pub async fn handle(
        &self,
        cmd: SubmitAssessmentCommand,
    ) -> Result<SubmitAssessmentResult, DomainError> {
        if self.strict_answers {
            self.classifier.validate(&cmd.answers)?;
        }

        let assessment = self.classifier.assess(&cmd.answers);
        for skipped in &assessment.unresolved {
            tracing::warn!(
                session_id = %cmd.session_id,
                question_id = %skipped.question_id,
                option_id = %skipped.option_id,
                reason = ?skipped.reason,
                "skipping unresolvable answer"
            );
        }

        let session = self
            .sessions
            .update_risk_profile(cmd.session_id, assessment.profile)
            .await?;

        tracing::info!(
            session_id = %cmd.session_id,
            profile = %assessment.profile,
            score_pct = assessment.score_pct,
            answered = assessment.answered_count,
            "assessment recorded"
        );

        Ok(SubmitAssessmentResult {
            session,
            assessment,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryKeyValueStore;
    use crate::domain::assessment::{RiskProfile, UnresolvedReason};
    use crate::domain::foundation::ErrorCode;

    async fn setup(strict: bool) -> (SubmitAssessmentHandler, Arc<SessionService>, SessionId) {
        let sessions = Arc::new(SessionService::new(Arc::new(InMemoryKeyValueStore::new())));
        let session = sessions.start("investor@example.com").await.unwrap();
        (
            SubmitAssessmentHandler::new(sessions.clone(), strict),
            sessions,
            session.id(),
        )
    }

    fn all_answers(letter: char) -> AnswerSet {
        (1..=8u32)
            .map(|q| (q, format!("{}{}", q, letter)))
            .collect()
    }

    #[tokio::test]
    async fn middle_answers_record_medium_profile() {
        let (handler, sessions, id) = setup(false).await;

        let result = handler
            .handle(SubmitAssessmentCommand {
                session_id: id,
                answers: all_answers('c'),
            })
            .await
            .unwrap();

        assert_eq!(result.assessment.profile, RiskProfile::Medium);
        assert_eq!(result.session.risk_profile(), Some(RiskProfile::Medium));
        let stored = sessions.require(id).await.unwrap();
        assert_eq!(stored.risk_profile(), Some(RiskProfile::Medium));
    }

    #[tokio::test]
    async fn lenient_mode_skips_unknown_entries() {
        let (handler, _, id) = setup(false).await;
        let answers = all_answers('e').with_answer(99, "99z");

        let result = handler
            .handle(SubmitAssessmentCommand {
                session_id: id,
                answers,
            })
            .await
            .unwrap();

        assert_eq!(result.assessment.profile, RiskProfile::VeryHigh);
        assert_eq!(result.assessment.unresolved.len(), 1);
        assert_eq!(
            result.assessment.unresolved[0].reason,
            UnresolvedReason::UnknownQuestion
        );
    }

    #[tokio::test]
    async fn strict_mode_rejects_unknown_entries_without_persisting() {
        let (handler, sessions, id) = setup(true).await;
        let answers = all_answers('a').with_answer(3, "3z");

        let err = handler
            .handle(SubmitAssessmentCommand {
                session_id: id,
                answers,
            })
            .await
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::ValidationFailed);
        assert_eq!(sessions.require(id).await.unwrap().risk_profile(), None);
    }

    #[tokio::test]
    async fn empty_submission_records_no_risk() {
        let (handler, _, id) = setup(true).await;

        let result = handler
            .handle(SubmitAssessmentCommand {
                session_id: id,
                answers: AnswerSet::new(),
            })
            .await
            .unwrap();

        assert_eq!(result.assessment.profile, RiskProfile::No);
        assert_eq!(result.assessment.answered_count, 0);
    }

    #[tokio::test]
    async fn unknown_session_is_not_found() {
        let (handler, _, _) = setup(false).await;

        let err = handler
            .handle(SubmitAssessmentCommand {
                session_id: SessionId::new(),
                answers: all_answers('b'),
            })
            .await
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::SessionNotFound);
    }
}
