//! Tests for multi-game simulation and configuration files.

use std::io::Write;
use tictactoe_minimax::{MatchConfig, PlayerKind, simulate};

#[test]
fn test_random_versus_random_counts_every_game() {
    let config = MatchConfig::default()
        .with_x(PlayerKind::Random)
        .with_o(PlayerKind::Random)
        .with_trials(1000)
        .with_seed(Some(2024));

    let tally = simulate(&config).expect("Simulation completes");
    assert_eq!(tally.x_wins() + tally.o_wins() + tally.ties(), 1000);
    assert_eq!(tally.total(), 1000);
    assert!(*tally.o_wins() > 0);
    assert!(*tally.x_wins() > 0);
}

#[test]
fn test_seeded_simulation_is_reproducible() {
    let config = MatchConfig::default()
        .with_x(PlayerKind::Random)
        .with_o(PlayerKind::Genius)
        .with_trials(50)
        .with_seed(Some(7));

    let first = simulate(&config).expect("Simulation completes");
    let second = simulate(&config).expect("Simulation completes");
    assert_eq!(first, second);
    assert_eq!(*first.x_wins(), 0);
}

#[test]
fn test_tally_serializes_to_json() {
    let config = MatchConfig::default()
        .with_x(PlayerKind::Genius)
        .with_o(PlayerKind::Genius)
        .with_trials(2)
        .with_seed(Some(1));

    let tally = simulate(&config).expect("Simulation completes");
    let json = serde_json::to_value(tally).expect("Serializable");
    assert_eq!(json["ties"], 2);
    assert_eq!(json["x_wins"], 0);
    assert_eq!(json["o_wins"], 0);
}

#[test]
fn test_config_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("Temp file");
    writeln!(file, "x = \"genius\"\no = \"random\"\ntrials = 10\nseed = 3").expect("Write config");

    let config = MatchConfig::from_file(file.path()).expect("Valid config");
    assert_eq!(*config.x(), PlayerKind::Genius);
    assert_eq!(*config.o(), PlayerKind::Random);
    assert_eq!(*config.trials(), 10);
    assert_eq!(*config.seed(), Some(3));

    let tally = simulate(&config).expect("Simulation completes");
    assert_eq!(tally.total(), 10);
    assert_eq!(*tally.o_wins(), 0);
}

#[test]
fn test_missing_config_file() {
    let dir = tempfile::tempdir().expect("Temp dir");
    let err = MatchConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_unknown_field_rejected() {
    let mut file = tempfile::NamedTempFile::new().expect("Temp file");
    writeln!(file, "players = 3").expect("Write config");
    assert!(MatchConfig::from_file(file.path()).is_err());
}
