use crate::dns_record::{RecordType, CLASS_ANY, CLASS_IN};

/// Decoded QNAME, restricted to the shapes this server can answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionName {
    /// A lone zero-length label.
    Root,
    /// `host.tld`, exactly two labels.
    HostTld { host: Vec<u8>, tld: Vec<u8> },
    /// Any other label count. Walked for offsets, never answered.
    Unsupported { label_count: usize },
}

impl QuestionName {
    pub fn host(&self) -> Option<&[u8]> {
        match self {
            QuestionName::HostTld { host, .. } => Some(host),
            _ => None,
        }
    }

    pub fn tld(&self) -> Option<&[u8]> {
        match self {
            QuestionName::HostTld { tld, .. } => Some(tld),
            _ => None,
        }
    }
}

impl std::fmt::Display for QuestionName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuestionName::Root => write!(f, "."),
            QuestionName::HostTld { host, tld } => write!(
                f,
                "{}.{}",
                String::from_utf8_lossy(host),
                String::from_utf8_lossy(tld)
            ),
            QuestionName::Unsupported { label_count } => write!(f, "<{} labels>", label_count),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    /// Byte offset of the QNAME from the start of the message.
    pub offset: usize,
    pub name: QuestionName,
    pub qtype: RecordType,
    pub qclass: u16,
}

impl Question {
    /// True when an A record is a valid answer to this question.
    pub fn accepts_ipv4_answer(&self) -> bool {
        self.qtype.wants_ipv4() && (self.qclass == CLASS_IN || self.qclass == CLASS_ANY)
    }
}
