mod helpers;

use helpers::MockZoneSource;
use std::net::Ipv4Addr;
use std::sync::Arc;
use tld_dns_application::use_cases::LoadZoneUseCase;
use tld_dns_domain::DomainError;

#[test]
fn test_execute_builds_zone_in_load_order() {
    let source = Arc::new(MockZoneSource::new(
        "com",
        vec![("example", [93, 184, 216, 34]), ("www", [10, 0, 0, 1])],
    ));

    let zone = LoadZoneUseCase::new(source.clone()).execute().unwrap();

    assert_eq!(zone.served_tld(), "com");
    assert_eq!(zone.len(), 2);
    assert_eq!(zone.entries()[0].host, "example");
    assert_eq!(zone.entries()[0].address, Ipv4Addr::new(93, 184, 216, 34));
    assert_eq!(source.load_count(), 1);
}

#[test]
fn test_execute_empty_table_is_startup_data_error() {
    let source = Arc::new(MockZoneSource::new("com", vec![]));

    let result = LoadZoneUseCase::new(source).execute();

    assert!(matches!(result, Err(DomainError::StartupData(_))));
}

#[test]
fn test_execute_tld_error_skips_table() {
    let source = Arc::new(
        MockZoneSource::new("com", vec![("example", [1, 2, 3, 4])])
            .with_tld_error(DomainError::StartupIo("tld.conf: not found".to_string())),
    );

    let result = LoadZoneUseCase::new(source.clone()).execute();

    assert!(matches!(result, Err(DomainError::StartupIo(_))));
    assert_eq!(source.load_count(), 0);
}

#[test]
fn test_execute_propagates_table_error() {
    let source = Arc::new(
        MockZoneSource::new("com", vec![])
            .with_entries_error(DomainError::StartupData("line 3: bad address".to_string())),
    );

    let err = LoadZoneUseCase::new(source).execute().unwrap_err();

    assert!(matches!(err, DomainError::StartupData(_)));
    assert!(err.to_string().contains("line 3"));
}
