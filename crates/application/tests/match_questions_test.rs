mod helpers;

use helpers::host_tld_question;
use std::net::Ipv4Addr;
use std::sync::Arc;
use tld_dns_application::use_cases::MatchQuestionsUseCase;
use tld_dns_domain::{Question, QuestionName, RecordType, TldMatchPolicy, Zone, ZoneEntry};

fn zone() -> Arc<Zone> {
    Arc::new(Zone::new(
        "com",
        vec![
            ZoneEntry::new("example", Ipv4Addr::new(93, 184, 216, 34)),
            ZoneEntry::new("mail", Ipv4Addr::new(10, 0, 0, 25)),
            ZoneEntry::new("example", Ipv4Addr::new(93, 184, 216, 35)),
        ],
    ))
}

fn exact() -> MatchQuestionsUseCase {
    MatchQuestionsUseCase::new(zone(), TldMatchPolicy::Exact)
}

#[test]
fn test_single_match_keeps_question_offset() {
    let results = exact().execute(&[host_tld_question(12, "mail", "com")]);

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].question_offset, 12);
    assert_eq!(results[0].entries.len(), 1);
    assert_eq!(results[0].entries[0].address, Ipv4Addr::new(10, 0, 0, 25));
}

#[test]
fn test_duplicate_hosts_all_match_latest_first() {
    let results = exact().execute(&[host_tld_question(12, "example", "com")]);

    let addresses: Vec<Ipv4Addr> = results[0].entries.iter().map(|e| e.address).collect();
    assert_eq!(
        addresses,
        vec![
            Ipv4Addr::new(93, 184, 216, 35),
            Ipv4Addr::new(93, 184, 216, 34)
        ]
    );
}

#[test]
fn test_tld_mismatch_yields_empty_result() {
    let results = exact().execute(&[host_tld_question(12, "example", "org")]);

    assert_eq!(results.len(), 1);
    assert!(results[0].entries.is_empty());
}

#[test]
fn test_tld_case_policy() {
    let question = host_tld_question(12, "example", "COM");

    assert!(exact().execute(&[question.clone()])[0].entries.is_empty());

    let folding = MatchQuestionsUseCase::new(zone(), TldMatchPolicy::IgnoreAsciiCase);
    assert_eq!(folding.execute(&[question])[0].entries.len(), 2);
}

#[test]
fn test_unknown_host_yields_empty_result() {
    let results = exact().execute(&[host_tld_question(12, "nothere", "com")]);
    assert!(results[0].entries.is_empty());
}

#[test]
fn test_root_and_unsupported_names_never_match() {
    let root = Question {
        offset: 12,
        name: QuestionName::Root,
        qtype: RecordType::A,
        qclass: 1,
    };
    let deep = Question {
        offset: 17,
        name: QuestionName::Unsupported { label_count: 3 },
        qtype: RecordType::A,
        qclass: 1,
    };

    let results = exact().execute(&[root, deep]);

    assert_eq!(results.len(), 2);
    assert!(results.iter().all(|r| r.entries.is_empty()));
    assert_eq!(results[1].question_offset, 17);
}

#[test]
fn test_non_address_query_types_not_answered() {
    let mut question = host_tld_question(12, "example", "com");
    question.qtype = RecordType::AAAA;

    assert!(exact().execute(&[question])[0].entries.is_empty());
}

#[test]
fn test_results_follow_question_order() {
    let results = exact().execute(&[
        host_tld_question(12, "mail", "com"),
        host_tld_question(26, "example", "org"),
        host_tld_question(42, "example", "com"),
    ]);

    let offsets: Vec<usize> = results.iter().map(|r| r.question_offset).collect();
    assert_eq!(offsets, vec![12, 26, 42]);
    assert_eq!(results[0].entries.len(), 1);
    assert!(results[1].entries.is_empty());
    assert_eq!(results[2].entries.len(), 2);
}
