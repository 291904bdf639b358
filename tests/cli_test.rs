mod common;
use common::TestContext;

#[test]
fn test_similarity_and_distance() {
    let ctx = TestContext::new();
    assert_eq!(ctx.stdout(&["similarity", "kitten", "sitting"]), "0.5714");
    assert_eq!(ctx.stdout(&["distance", "kitten", "sitting"]), "3");
    assert_eq!(ctx.stdout(&["similarity", "", ""]), "1.0000");
}

#[test]
fn test_best_match() {
    let ctx = TestContext::new();
    let out = ctx.stdout(&["best-match", "beatles", "The Beatles", "Beach Boys"]);
    assert!(out.starts_with("The Beatles ("), "unexpected output: {}", out);

    let miss = ctx.run(&["best-match", "zzz", "apple", "--cutoff", "0.9"]);
    assert!(!miss.status.success());
    assert!(String::from_utf8_lossy(&miss.stderr).contains("No candidate matched"));
}

#[test]
fn test_time_formatting() {
    let ctx = TestContext::new();
    assert_eq!(ctx.stdout(&["format-min", "80"]), "01:20");
    assert_eq!(ctx.stdout(&["format-sec", "80"]), "00:01:20");
    assert_eq!(ctx.stdout(&["timestamp", "8:15"]), "495");
    assert!(!ctx.run(&["timestamp", "late"]).status.success());
}

#[test]
fn test_dates() {
    let ctx = TestContext::new();
    let date = "2023-02-14T14:10:00+02:00";
    assert_eq!(ctx.stdout(&["calendar-date", "--date", date]), "2023-02-14");
    assert_eq!(ctx.stdout(&["human-date", "--date", date]), "14 Feb 2023 14:10");
    assert_eq!(
        ctx.stdout(&["human-date", "--date", date, "--format", "dddd [at] h A"]),
        "Tuesday at 2 PM"
    );
    assert!(!ctx.run(&["calendar-date", "--date", "soon"]).status.success());
}

#[test]
fn test_money_uses_config_currency() {
    let ctx = TestContext::new();
    assert_eq!(ctx.stdout(&["money", "560"]), "560.00 ZAR");

    ctx.write_config(r#"{ "currency_code": "USD" }"#);
    assert_eq!(ctx.stdout(&["money", "560"]), "560.00 USD");
    assert_eq!(ctx.stdout(&["money", "560", "--currency", "EUR"]), "560.00 EUR");
    assert_eq!(ctx.stdout(&["money", "560", "--no-code"]), "560.00");
}

#[test]
fn test_currency() {
    let ctx = TestContext::new();
    assert_eq!(
        ctx.stdout(&["currency", "560000.59"]),
        "R\u{a0}560\u{a0}000,59"
    );
    assert_eq!(ctx.stdout(&["currency", "-5"]), "-R\u{a0}5");
}

#[test]
fn test_text_commands() {
    let ctx = TestContext::new();
    assert_eq!(ctx.stdout(&["capitalize", "mike"]), "Mike");
    assert_eq!(ctx.stdout(&["limit", "I am a cat", "--limit", "5"]), "I am...");
    assert_eq!(ctx.stdout(&["strip-spaces", " a b c "]), "abc");
    assert_eq!(ctx.stdout(&["safe", "a b/c-d_e"]), "abc-d_e");
    assert_eq!(
        ctx.stdout(&["link", "go to https://x.io"]),
        "go to <a href=\"https://x.io\" target=\"_blank\">https://x.io</a>"
    );
}

#[test]
fn test_limit_uses_config_default() {
    let ctx = TestContext::new();
    ctx.write_config(r#"{ "text_limit": 3 }"#);
    assert_eq!(ctx.stdout(&["limit", "abcdef"]), "abc...");
}

#[test]
fn test_query() {
    let ctx = TestContext::new();
    assert_eq!(
        ctx.stdout(&["query", "http://test", "cool=true", "name=jack"]),
        "http://test?cool=true&name=jack"
    );
    assert_eq!(
        ctx.stdout(&["query", "http://test", "name=Jack Black", "--encode"]),
        "http://test?name=Jack%20Black"
    );
    assert!(!ctx.run(&["query", "http://test", "broken"]).status.success());
}

#[test]
fn test_validation_commands() {
    let ctx = TestContext::new();
    assert_eq!(ctx.stdout(&["valid-number", "12.5"]), "true");
    assert_eq!(ctx.stdout(&["valid-number", "-12.5"]), "true");
    assert_eq!(ctx.stdout(&["valid-number", "12.5.6"]), "false");
    assert_eq!(ctx.stdout(&["valid-email", "a@b.com"]), "true");
    assert_eq!(ctx.stdout(&["valid-email", "a@@b.com"]), "false");
}

#[test]
fn test_corrupt_config_falls_back_to_defaults() {
    let ctx = TestContext::new();
    ctx.write_config("{ not json");
    assert_eq!(ctx.stdout(&["money", "1"]), "1.00 ZAR");
    assert!(ctx.config_path.with_extension("json.corrupt").exists());
}
