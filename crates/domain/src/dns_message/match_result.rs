use crate::zone::ZoneEntry;

/// Zone entries matched by one question, in answer order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    pub question_offset: usize,
    pub entries: Vec<ZoneEntry>,
}

impl MatchResult {
    pub fn new(question_offset: usize, entries: Vec<ZoneEntry>) -> Self {
        Self {
            question_offset,
            entries,
        }
    }
}
