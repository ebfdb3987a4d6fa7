use super::{codec, wire_response};
use std::net::SocketAddr;
use std::sync::Arc;
use tld_dns_application::use_cases::MatchQuestionsUseCase;
use tld_dns_domain::{DomainError, MessageHeader};
use tracing::debug;

/// Decode → match → build for one datagram at a time.
#[derive(Clone)]
pub struct DnsServerHandler {
    matcher: Arc<MatchQuestionsUseCase>,
}

impl DnsServerHandler {
    pub fn new(matcher: Arc<MatchQuestionsUseCase>) -> Self {
        Self { matcher }
    }

    /// Returns the reply bytes for `buf`, or `None` when nothing must be sent.
    ///
    /// An `Err` means the datagram was unreadable; the caller drops it.
    pub fn handle_datagram(
        &self,
        buf: &[u8],
        peer: SocketAddr,
    ) -> Result<Option<Vec<u8>>, DomainError> {
        let header = codec::decode_header(buf)?;
        log_header(&header, peer);

        if header.is_response() {
            debug!(client = %peer, id = header.id, "Ignoring message with QR set");
            return Ok(None);
        }

        let questions = codec::decode_questions(buf, header.question_count)?;
        let results = self.matcher.execute(&questions);
        let response = wire_response::build_response(&header, buf, &results)?;

        debug!(
            client = %peer,
            id = header.id,
            answers = results.iter().map(|r| r.entries.len()).sum::<usize>(),
            len = response.len(),
            "Sending response"
        );

        Ok(Some(response))
    }
}

fn log_header(header: &MessageHeader, peer: SocketAddr) {
    let flags = &header.flags;
    debug!(
        client = %peer,
        id = header.id,
        qr = flags.qr,
        opcode = flags.opcode,
        aa = flags.authoritative,
        tc = flags.truncated,
        rd = flags.recursion_desired,
        ra = flags.recursion_available,
        z = flags.z,
        ad = flags.authenticated_data,
        cd = flags.checking_disabled,
        rcode = flags.rcode,
        qdcount = header.question_count,
        ancount = header.answer_count,
        nscount = header.authority_count,
        arcount = header.additional_count,
        "DNS header decoded"
    );
}
