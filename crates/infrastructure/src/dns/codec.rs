//! RFC 1035 §4.1 header and question section codec.
//!
//! Every read is bounds-checked; a buffer shorter than its declared structure
//! surfaces as [`DomainError::TruncatedHeader`] or
//! [`DomainError::MalformedQuestion`] instead of a panic.

use std::ops::Range;
use tld_dns_domain::dns_message::HEADER_SIZE;
use tld_dns_domain::{DomainError, HeaderFlags, MessageHeader, Question, QuestionName, RecordType};

const MAX_NAME_LEN: usize = 255;
const LABEL_TYPE_MASK: u8 = 0xC0;
/// QTYPE + QCLASS.
const QUESTION_TRAILER_LEN: usize = 4;

/// Decodes the first 12 bytes of `buf`. Any further bytes are ignored.
pub fn decode_header(buf: &[u8]) -> Result<MessageHeader, DomainError> {
    if buf.len() < HEADER_SIZE {
        return Err(DomainError::TruncatedHeader(buf.len()));
    }

    let word = |at: usize| u16::from_be_bytes([buf[at], buf[at + 1]]);

    Ok(MessageHeader {
        id: word(0),
        flags: HeaderFlags::from_word(word(2)),
        question_count: word(4),
        answer_count: word(6),
        authority_count: word(8),
        additional_count: word(10),
    })
}

pub fn encode_header(header: &MessageHeader) -> [u8; HEADER_SIZE] {
    let mut out = [0u8; HEADER_SIZE];
    for (i, value) in [
        header.id,
        header.flags.to_word(),
        header.question_count,
        header.answer_count,
        header.authority_count,
        header.additional_count,
    ]
    .into_iter()
    .enumerate()
    {
        out[i * 2..i * 2 + 2].copy_from_slice(&value.to_be_bytes());
    }
    out
}

/// Decodes `count` questions starting right after the header of `message`.
///
/// Offsets recorded on each [`Question`] are relative to the start of
/// `message`. The first unreadable question aborts the whole section.
pub fn decode_questions(message: &[u8], count: u16) -> Result<Vec<Question>, DomainError> {
    // Smallest question: root label plus type/class.
    let max_fit = message.len().saturating_sub(HEADER_SIZE) / (1 + QUESTION_TRAILER_LEN);
    let mut questions = Vec::with_capacity((count as usize).min(max_fit));
    let mut pos = HEADER_SIZE;

    for index in 0..count {
        let (question, next) = read_question(message, pos).map_err(|e| match e {
            DomainError::MalformedQuestion(reason) => {
                DomainError::MalformedQuestion(format!("question {}: {}", index + 1, reason))
            }
            other => other,
        })?;
        questions.push(question);
        pos = next;
    }

    Ok(questions)
}

/// Byte length of the question section: label bytes, terminators and the
/// fixed type/class trailer of each of the `count` questions.
pub fn question_section_len(message: &[u8], count: u16) -> Result<usize, DomainError> {
    let mut pos = HEADER_SIZE;
    for _ in 0..count {
        pos = walk_name(message, pos)?.end + QUESTION_TRAILER_LEN;
        if pos > message.len() {
            return Err(DomainError::MalformedQuestion(
                "question section runs past end of message".to_string(),
            ));
        }
    }
    Ok(pos - HEADER_SIZE)
}

fn read_question(message: &[u8], offset: usize) -> Result<(Question, usize), DomainError> {
    let walk = walk_name(message, offset)?;

    let trailer = walk.end..walk.end + QUESTION_TRAILER_LEN;
    let Some(fixed) = message.get(trailer.clone()) else {
        return Err(DomainError::MalformedQuestion(format!(
            "type/class at offset {} runs past end of message",
            walk.end
        )));
    };

    let name = match walk.labels.as_slice() {
        [] => QuestionName::Root,
        [host, tld] => QuestionName::HostTld {
            host: message[host.clone()].to_vec(),
            tld: message[tld.clone()].to_vec(),
        },
        labels => QuestionName::Unsupported {
            label_count: labels.len(),
        },
    };

    let question = Question {
        offset,
        name,
        qtype: RecordType::from_u16(u16::from_be_bytes([fixed[0], fixed[1]])),
        qclass: u16::from_be_bytes([fixed[2], fixed[3]]),
    };

    Ok((question, trailer.end))
}

struct NameWalk {
    labels: Vec<Range<usize>>,
    /// Position just past the zero-length terminator.
    end: usize,
}

fn walk_name(message: &[u8], start: usize) -> Result<NameWalk, DomainError> {
    let mut labels = Vec::new();
    let mut pos = start;

    loop {
        let Some(&len_byte) = message.get(pos) else {
            return Err(DomainError::MalformedQuestion(format!(
                "name at offset {} runs past end of message",
                start
            )));
        };

        if len_byte == 0 {
            pos += 1;
            break;
        }

        if len_byte & LABEL_TYPE_MASK != 0 {
            return Err(DomainError::MalformedQuestion(format!(
                "unsupported label type 0x{:02x} at offset {}",
                len_byte, pos
            )));
        }

        let label = pos + 1..pos + 1 + len_byte as usize;
        if label.end > message.len() {
            return Err(DomainError::MalformedQuestion(format!(
                "label of {} bytes at offset {} runs past end of message",
                len_byte, pos
            )));
        }
        if label.end - start >= MAX_NAME_LEN {
            return Err(DomainError::MalformedQuestion(format!(
                "name at offset {} exceeds {} bytes",
                start, MAX_NAME_LEN
            )));
        }

        pos = label.end;
        labels.push(label);
    }

    Ok(NameWalk { labels, end: pos })
}
