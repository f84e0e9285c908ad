//! Creation counters are process-wide, so they are checked in their own test
//! binary, sequentially, inside a single test.

use cricket_core::api::{build_squad, SquadEntryRequest, SquadRequest};
use cricket_core::{BattingRecord, BowlingRecord, ModelConfig};

#[test]
fn test_creation_counters_track_every_construction() {
    let batsmen = BattingRecord::total_created();
    let bowlers = BowlingRecord::total_created();

    let kohli = BattingRecord::with_runs("Virat Kohli", 32, 100, 12000);
    assert_eq!(BattingRecord::total_created(), batsmen + 1);

    let _gill = BattingRecord::new("Shubman Gill", 24);
    assert_eq!(BattingRecord::total_created(), batsmen + 2);

    let _sharma = BattingRecord::with_stats("Rohit Sharma", 36, 10, 100, 10.0, 10.0);
    assert_eq!(BattingRecord::total_created(), batsmen + 3);

    let _placeholder = BattingRecord::default_batsman();
    assert_eq!(BattingRecord::total_created(), batsmen + 4);

    let _copy = kohli.clone();
    assert_eq!(BattingRecord::total_created(), batsmen + 5, "copies count as creations");

    // Bowling count is independent
    assert_eq!(BowlingRecord::total_created(), bowlers);

    let bumrah = BowlingRecord::with_overs("Jasprit Bumrah", 27, 80, 200.0);
    let _shami = BowlingRecord::with_figures("Mohammed Shami", 33, 64, 80.0, 200, 12);
    let _jadeja = BowlingRecord::with_stats("Ravindra Jadeja", 34, 70, 100.0, 450, 30, 4.5);
    let _siraj = BowlingRecord::new("Mohammed Siraj", 29);
    let _bumrah_copy = bumrah.clone();
    assert_eq!(BowlingRecord::total_created(), bowlers + 5);
    assert_eq!(BattingRecord::total_created(), batsmen + 5);

    // Moving a record is not a construction
    let moved = kohli;
    assert_eq!(moved.runs_scored(), 12000);
    assert_eq!(BattingRecord::total_created(), batsmen + 5);

    // The squad API builds through the constructors
    let request = SquadRequest {
        schema_version: None,
        entries: vec![
            SquadEntryRequest::Batting {
                identity: "KL Rahul".to_string(),
                age: 31,
                matches: 50,
                runs: 2500,
            },
            SquadEntryRequest::Bowling {
                identity: "Kuldeep Yadav".to_string(),
                age: 29,
                matches: 10,
                overs: 40.0,
                runs_conceded: 160,
                wickets: 8,
            },
        ],
    };
    let roster = build_squad(&request, &ModelConfig::default()).unwrap();
    assert_eq!(roster.len(), 2);
    assert_eq!(BattingRecord::total_created(), batsmen + 6);
    assert_eq!(BowlingRecord::total_created(), bowlers + 6);
}
