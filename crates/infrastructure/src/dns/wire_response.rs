use super::codec::{encode_header, question_section_len};
use tld_dns_domain::dns_message::HEADER_SIZE;
use tld_dns_domain::dns_record::{ANSWER_TTL, CLASS_IN};
use tld_dns_domain::{DomainError, HeaderFlags, MatchResult, MessageHeader, RecordType};

/// Pointer(2) + TYPE(2) + CLASS(2) + TTL(4) + RDLENGTH(2) + IPv4(4).
pub const A_RECORD_LEN: usize = 16;

const POINTER_TAG: u16 = 0xC000;
const MAX_POINTER_OFFSET: usize = 0x3FFF;
const IPV4_RDATA_LEN: u16 = 4;

/// Builds the reply to `query_buf` in wire format.
///
/// The question section is copied verbatim so it sits at the same offsets as
/// in the query; each answer names its question through a compression pointer
/// to that offset. Questions with no matches contribute no records. The length
/// of the returned buffer is the exact datagram length to send.
pub fn build_response(
    query: &MessageHeader,
    query_buf: &[u8],
    results: &[MatchResult],
) -> Result<Vec<u8>, DomainError> {
    let question_len = question_section_len(query_buf, query.question_count)?;
    let question_end = HEADER_SIZE + question_len;

    let total: usize = results.iter().map(|r| r.entries.len()).sum();
    let answer_count = u16::try_from(total).unwrap_or(u16::MAX);

    let header = MessageHeader {
        id: query.id,
        flags: HeaderFlags::response(),
        question_count: query.question_count,
        answer_count,
        authority_count: 0,
        additional_count: 0,
    };

    let mut buf = Vec::with_capacity(question_end + answer_count as usize * A_RECORD_LEN);
    buf.extend_from_slice(&encode_header(&header));
    buf.extend_from_slice(&query_buf[HEADER_SIZE..question_end]);

    let records = results
        .iter()
        .flat_map(|r| r.entries.iter().map(move |e| (r.question_offset, e.address)))
        .take(answer_count as usize);

    for (offset, address) in records {
        let pointer = compression_pointer(offset, question_end)?;
        buf.extend_from_slice(&pointer.to_be_bytes());
        buf.extend_from_slice(&RecordType::A.to_u16().to_be_bytes());
        buf.extend_from_slice(&CLASS_IN.to_be_bytes());
        buf.extend_from_slice(&ANSWER_TTL.to_be_bytes());
        buf.extend_from_slice(&IPV4_RDATA_LEN.to_be_bytes());
        buf.extend_from_slice(&address.octets());
    }

    Ok(buf)
}

fn compression_pointer(offset: usize, question_end: usize) -> Result<u16, DomainError> {
    if !(HEADER_SIZE..question_end).contains(&offset) {
        return Err(DomainError::MalformedQuestion(format!(
            "answer offset {} outside question section {}..{}",
            offset, HEADER_SIZE, question_end
        )));
    }
    if offset > MAX_POINTER_OFFSET {
        return Err(DomainError::CompressionOffsetOverflow(offset));
    }
    Ok(POINTER_TAG | offset as u16)
}
