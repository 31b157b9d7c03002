use battleship_melee::{
    rank_by_score, score, AttackResult, Coordinate, LeaderboardEntry, Player, ShipType,
};

fn named(name: &str) -> Player {
    Player::new(name)
}

#[test]
fn test_score_folds_outcomes() {
    let cell = Coordinate::new(1, 1);
    let shots = [
        AttackResult::hit(cell, ShipType::Destroyer, false),
        AttackResult::hit(cell, ShipType::Destroyer, true),
        AttackResult::miss(cell),
        AttackResult::already_attacked(cell),
        AttackResult::invalid_position(cell),
    ];
    assert_eq!(score(&shots, false, false), 2 + 5 - 1 - 1);
    assert_eq!(score(&shots, true, false), 5 - 100);
    assert_eq!(score(&shots, false, true), 5 + 100);
    assert_eq!(score(&[], false, false), 0);
}

#[test]
fn test_winner_ranks_first() {
    let ranked = rank_by_score(vec![(named("Loser"), -100), (named("Winner"), 148)]);
    assert_eq!(ranked[0].player.name(), "Winner");
    assert_eq!(ranked[0].position, 1);
    assert_eq!(ranked[1].player.name(), "Loser");
    assert_eq!(ranked[1].position, 2);
}

#[test]
fn test_ties_share_a_dense_position() {
    let ranked = rank_by_score(vec![
        (named("A"), 10),
        (named("B"), 5),
        (named("C"), 10),
        (named("D"), 5),
        (named("E"), 0),
    ]);
    let rows: Vec<_> = ranked
        .iter()
        .map(|r| (r.player.name(), r.score, r.position))
        .collect();
    assert_eq!(
        rows,
        vec![
            ("A", 10, 1),
            ("C", 10, 1),
            ("B", 5, 2),
            ("D", 5, 2),
            ("E", 0, 3),
        ]
    );
}

#[test]
fn test_rows_never_carry_secrets() {
    let player = named("Secretive");
    assert!(player.private_id().is_some());
    let ranked = rank_by_score(vec![(player.clone(), 1)]);
    assert_eq!(ranked[0].player, player.public());
}

#[test]
fn test_entry_from_row() {
    let ranked = rank_by_score(vec![(Player::computer("Deep Thought"), 42)]);
    let entry = LeaderboardEntry::from(&ranked[0]);
    assert_eq!(
        entry,
        LeaderboardEntry {
            name: "Deep Thought".to_string(),
            position: 1,
            score: 42,
            is_computer: true,
        }
    );
}
