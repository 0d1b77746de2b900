use dockauto_demo::contract::{
    ContractChecker, ContractProfile, ContractStatus, EnvSnapshot, Outcome,
};
use dockauto_demo::greeting::{GreetingService, GREETING};

fn checker(pairs: &[(&str, &str)]) -> ContractChecker {
    ContractChecker::new(EnvSnapshot::from_pairs(pairs.iter().copied()))
}

#[test]
fn scenario_a_fully_provisioned_environment_passes() {
    let c = checker(&[("DB_HOST", "db"), ("REDIS_HOST", "cache"), ("APP_ENV", "development")]);

    assert!(c.check_presence("DB_HOST").is_pass());
    assert!(c.check_presence("REDIS_HOST").is_pass());
    assert!(c.check_exact_value("APP_ENV", "development").is_pass());

    let report = c.run(&ContractProfile::development());
    assert_eq!(report.status(), ContractStatus::Satisfied);
    assert!(report.reasons().is_empty());
}

#[test]
fn scenario_b_missing_db_host_fails_only_that_check() {
    let c = checker(&[("REDIS_HOST", "cache"), ("APP_ENV", "development")]);

    assert_eq!(
        c.check_presence("DB_HOST").outcome,
        Outcome::Fail("DB_HOST must not be unset".to_string())
    );
    assert!(c.check_presence("REDIS_HOST").is_pass());
    assert!(c.check_exact_value("APP_ENV", "development").is_pass());

    let report = c.run(&ContractProfile::development());
    assert_eq!(report.status(), ContractStatus::Violated);
    assert_eq!(report.reasons(), vec!["DB_HOST must not be unset"]);
}

#[test]
fn scenario_c_wrong_app_env_cites_expected_and_actual() {
    let c = checker(&[("DB_HOST", "db"), ("REDIS_HOST", "cache"), ("APP_ENV", "production")]);

    let result = c.check_exact_value("APP_ENV", "development");
    assert_eq!(result.reason(), Some("APP_ENV expected development, got production"));

    let err = c.run(&ContractProfile::development()).into_result().unwrap_err();
    assert_eq!(err.to_string(), "APP_ENV expected development, got production");
}

#[test]
fn scenario_d_greeting_is_constant() {
    let service = GreetingService::new();
    let first = service.greet();
    for _ in 0..1000 {
        assert_eq!(service.greet(), first);
    }
    assert_eq!(first, GREETING);
}

#[test]
fn empty_value_counts_as_present_by_default() {
    let c = checker(&[("DB_HOST", ""), ("REDIS_HOST", "cache"), ("APP_ENV", "development")]);
    assert_eq!(c.run(&ContractProfile::development()).status(), ContractStatus::Satisfied);
}

#[test]
fn unprovisioned_environment_is_absent_not_violated() {
    let c = checker(&[("PATH", "/usr/bin"), ("HOME", "/root")]);
    let report = c.run(&ContractProfile::development());

    assert_eq!(report.status(), ContractStatus::Absent);
    assert_eq!(report.results().len(), 3);
    assert_eq!(
        report.reasons(),
        vec!["DB_HOST must not be unset", "REDIS_HOST must not be unset", "APP_ENV unset"]
    );
}

#[test]
fn results_do_not_depend_on_check_order() {
    let c = checker(&[("DB_HOST", "db"), ("APP_ENV", "staging")]);

    let forward = vec![
        c.check_presence("DB_HOST"),
        c.check_presence("REDIS_HOST"),
        c.check_exact_value("APP_ENV", "development"),
    ];
    let mut backward = vec![
        c.check_exact_value("APP_ENV", "development"),
        c.check_presence("REDIS_HOST"),
        c.check_presence("DB_HOST"),
    ];
    backward.reverse();

    assert_eq!(forward, backward);
}
