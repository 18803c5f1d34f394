use super::*;

#[test]
fn parses_analyze_with_default_library() {
    let cli = Cli::try_parse_from(["moodline-cli", "analyze", "I love this!"])
        .expect("expected valid cli args");

    match cli.command {
        Commands::Analyze {
            library,
            compact,
            text,
        } => {
            assert_eq!(library, "vader");
            assert!(!compact);
            assert_eq!(text, "I love this!");
        }
        Commands::Libraries => panic!("expected analyze"),
    }
}

#[test]
fn parses_analyze_with_library_flag() {
    let cli = Cli::try_parse_from([
        "moodline-cli",
        "analyze",
        "--library",
        "TextBlob",
        "--compact",
        "so so",
    ])
    .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Commands::Analyze { ref library, compact: true, .. } if library == "TextBlob"
    ));
}

#[test]
fn library_is_validated_at_analysis_time() {
    // Any string parses; the dispatcher rejects unknown names with the same
    // message the HTTP surface uses.
    let cli = Cli::try_parse_from(["moodline-cli", "analyze", "-l", "foo", "hi"])
        .expect("expected valid cli args");
    assert!(matches!(cli.command, Commands::Analyze { .. }));
}

#[test]
fn analyze_requires_text() {
    assert!(Cli::try_parse_from(["moodline-cli", "analyze"]).is_err());
}

#[test]
fn parses_libraries_command() {
    let cli = Cli::try_parse_from(["moodline-cli", "libraries"]).expect("expected valid cli args");
    assert!(matches!(cli.command, Commands::Libraries));
}

fn offline_config() -> AppConfig {
    AppConfig {
        env: moodline_core::Environment::Test,
        bind_addr: "127.0.0.1:0".parse().unwrap(),
        log_level: "info".to_string(),
        tei_url: "http://127.0.0.1:9".to_string(),
        neural_timeout_secs: 1,
        neural_warmup: false,
        lexicon_overrides_path: None,
    }
}

#[tokio::test]
async fn compact_analysis_renders_single_line_json() {
    let json = render_analysis(&offline_config(), "VADER", "I love this!", true)
        .await
        .expect("vader runs in-process");

    assert!(!json.contains('\n'));
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    assert_eq!(value["library"], "vader");
    assert_eq!(value["category"], "positive");
}

#[tokio::test]
async fn unknown_library_fails_analysis() {
    let err = render_analysis(&offline_config(), "foo", "hello", false)
        .await
        .expect_err("foo is not a library");
    assert!(err.to_string().contains("Invalid library"), "{err}");
}
