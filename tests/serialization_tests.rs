use battleship_melee::{
    AttackResult, Coordinate, Game, GameType, LeaderboardEntry, Orientation, Player, PlayerId,
    Ship, ShipType,
};
use serde_json::json;

#[test]
fn test_coordinate_wire_form() {
    let value = serde_json::to_value(Coordinate::new(1, 1)).unwrap();
    assert_eq!(value, json!({ "row": 1, "col": 1, "isValid": true }));

    let value = serde_json::to_value(Coordinate::new(1, 11)).unwrap();
    assert_eq!(value, json!({ "row": 1, "col": 11, "isValid": false }));

    // validity is derived, never trusted
    let coord: Coordinate = serde_json::from_str(r#"{"row":2,"col":3,"isValid":false}"#).unwrap();
    assert_eq!(coord, Coordinate::new(2, 3));
    assert!(coord.is_valid());
    let coord: Coordinate = serde_json::from_str(r#"{"row":10,"col":10}"#).unwrap();
    assert_eq!(coord, Coordinate::new(10, 10));
}

#[test]
fn test_ids_serialize_as_strings() {
    let id = PlayerId::generate();
    let value = serde_json::to_value(id).unwrap();
    assert_eq!(value, json!(id.to_string()));
    let back: PlayerId = serde_json::from_value(value).unwrap();
    assert_eq!(back, id);
}

#[test]
fn test_public_player_has_no_secret_field() {
    let player = Player::new("Human");
    let private = serde_json::to_value(&player).unwrap();
    assert!(private.get("privateId").is_some());

    let public = serde_json::to_value(player.public()).unwrap();
    assert_eq!(public.get("privateId"), None);
    assert_eq!(public["name"], json!("Human"));
    assert_eq!(public["isComputer"], json!(false));
}

#[test]
fn test_ship_segments_come_from_the_shape() {
    let text = r#"{
        "shipType": "Destroyer",
        "position": { "row": 1, "col": 1 },
        "orientation": "Horizontal",
        "segments": [ { "coordinate": { "row": 9, "col": 9 }, "isHit": true } ]
    }"#;
    let ship: Ship = serde_json::from_str(text).unwrap();
    assert_eq!(
        ship,
        Ship::positioned(ShipType::Destroyer, Coordinate::new(1, 1), Orientation::Horizontal)
    );

    let unplaced: Ship = serde_json::from_str(r#"{ "shipType": "AircraftCarrier" }"#).unwrap();
    assert_eq!(unplaced, Ship::new(ShipType::AircraftCarrier));

    let value = serde_json::to_value(&ship).unwrap();
    assert_eq!(value["shipType"], json!("Destroyer"));
    assert_eq!(value["segments"].as_array().map(Vec::len), Some(2));
}

#[test]
fn test_attack_result_wire_form() {
    let target = PlayerId::generate();
    let result = AttackResult::hit(Coordinate::new(1, 2), ShipType::Destroyer, true).against(target);
    let value = serde_json::to_value(result).unwrap();
    assert_eq!(
        value,
        json!({
            "coordinate": { "row": 1, "col": 2, "isValid": true },
            "outcome": "HitAndSunk",
            "shipType": "Destroyer",
            "targetedPlayer": target.to_string(),
        })
    );
}

#[test]
fn test_leaderboard_entry_wire_form() {
    let entry = LeaderboardEntry {
        name: "Computer".to_string(),
        position: 1,
        score: 148,
        is_computer: true,
    };
    let value = serde_json::to_value(&entry).unwrap();
    assert_eq!(
        value,
        json!({ "name": "Computer", "position": 1, "score": 148, "isComputer": true })
    );
}

#[test]
fn test_shot_history_bincode() {
    let mut game = Game::with_seed(GameType::Classic, 21);
    let computer = game.add_player("Computer", true);
    game.add_player("Other", true);
    for _ in 0..20 {
        game.other_players_fire();
    }
    let shots = game.shots(computer.id()).unwrap().to_vec();
    assert_eq!(shots.len(), 20);

    let bytes = bincode::serialize(&shots).unwrap();
    let decoded: Vec<AttackResult> = bincode::deserialize(&bytes).unwrap();
    assert_eq!(decoded, shots);
}

#[test]
fn test_deserialized_ship_is_a_fresh_placement() {
    let mut ship = Ship::positioned(ShipType::Cruiser, Coordinate::new(2, 2), Orientation::Vertical);
    ship.attack(Coordinate::new(3, 2));
    let value = serde_json::to_value(&ship).unwrap();
    assert_eq!(value["segments"][1]["isHit"], json!(true));

    let back: Ship = serde_json::from_value(value).unwrap();
    assert!(back.segments().iter().all(|s| !s.is_hit));
    assert_eq!(back.coordinates().collect::<Vec<_>>(), ship.coordinates().collect::<Vec<_>>());
}
