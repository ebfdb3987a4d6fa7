use std::sync::Arc;
use tld_dns_domain::{MatchResult, Question, QuestionName, TldMatchPolicy, Zone, ZoneEntry};
use tracing::debug;

/// Resolves decoded questions against the served zone.
pub struct MatchQuestionsUseCase {
    zone: Arc<Zone>,
    tld_policy: TldMatchPolicy,
}

impl MatchQuestionsUseCase {
    pub fn new(zone: Arc<Zone>, tld_policy: TldMatchPolicy) -> Self {
        Self { zone, tld_policy }
    }

    /// One result per question, in question order. Unanswerable questions
    /// yield an empty result rather than an error.
    pub fn execute(&self, questions: &[Question]) -> Vec<MatchResult> {
        questions
            .iter()
            .map(|question| {
                let result = MatchResult::new(question.offset, self.match_question(question));
                debug!(
                    offset = question.offset,
                    name = %question.name,
                    qtype = %question.qtype,
                    matches = result.entries.len(),
                    "Question matched"
                );
                result
            })
            .collect()
    }

    fn match_question(&self, question: &Question) -> Vec<ZoneEntry> {
        let QuestionName::HostTld { host, tld } = &question.name else {
            return Vec::new();
        };

        if !question.accepts_ipv4_answer() || !self.zone.serves_tld(tld, self.tld_policy) {
            return Vec::new();
        }

        self.zone.lookup(host).into_iter().cloned().collect()
    }
}
