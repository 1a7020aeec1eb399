use cohort::config::CorsConfig;

const EXPECTED_ORIGINS: [&str; 8] = [
    "http://localhost:4500",
    "http://127.0.0.1:4500",
    "http://localhost:4600",
    "http://127.0.0.1:4600",
    "http://localhost:4000",
    "http://127.0.0.1:4000",
    "https://open-coding-society.github.io",
    "https://pages.opencodingsociety.com",
];

#[test]
fn test_allow_list_contains_exactly_the_expected_origins() {
    let cors = CorsConfig::new();

    assert_eq!(cors.allowed_origins.len(), EXPECTED_ORIGINS.len());
    for origin in EXPECTED_ORIGINS {
        assert!(
            cors.allowed_origins.iter().any(|o| o == origin),
            "missing origin: {origin}"
        );
    }
}

#[test]
fn test_every_origin_parses_as_a_header_value() {
    let cors = CorsConfig::new();

    for origin in &cors.allowed_origins {
        assert!(
            origin.parse::<axum::http::HeaderValue>().is_ok(),
            "unparseable origin: {origin}"
        );
    }
}

#[test]
fn test_default_matches_new() {
    assert_eq!(
        CorsConfig::default().allowed_origins,
        CorsConfig::new().allowed_origins
    );
}
