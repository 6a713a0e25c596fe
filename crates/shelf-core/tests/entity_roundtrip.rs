//! Serde roundtrip and display tests for all entity types.

use chrono::Utc;
use pretty_assertions::assert_eq;
use shelf_core::entities::{Game, Membership, Review, User};

macro_rules! roundtrip {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );
        }
    };
}

roundtrip!(
    user_roundtrip,
    User,
    User {
        id: 1,
        name: Some("alice".to_string()),
        create_at: Utc::now(),
        updated_at: Utc::now(),
    }
);

roundtrip!(
    user_roundtrip_unnamed,
    User,
    User {
        id: 2,
        name: None,
        create_at: Utc::now(),
        updated_at: Utc::now(),
    }
);

roundtrip!(
    game_roundtrip,
    Game,
    Game {
        id: 1,
        title: "Chess".to_string(),
        genre: "Strategy".to_string(),
        platform: "PC".to_string(),
        price: 10,
    }
);

roundtrip!(
    review_roundtrip,
    Review,
    Review {
        id: 1,
        score: 5,
        comment: "great".to_string(),
        game_id: 1,
        user_id: 1,
    }
);

roundtrip!(
    membership_roundtrip,
    Membership,
    Membership {
        game_id: 1,
        user_id: 1,
    }
);

#[test]
fn user_display_includes_name_when_set() {
    let user = User {
        id: 7,
        name: Some("alice".to_string()),
        create_at: Utc::now(),
        updated_at: Utc::now(),
    };
    assert_eq!(user.to_string(), "User(id=7, name=alice)");

    let unnamed = User { name: None, ..user };
    assert_eq!(unnamed.to_string(), "User(id=7)");
}

#[test]
fn game_display_shows_title_and_platform() {
    let game = Game {
        id: 3,
        title: "Chess".to_string(),
        genre: "Strategy".to_string(),
        platform: "PC".to_string(),
        price: 10,
    };
    assert_eq!(game.to_string(), "Game(id=3, title=Chess, platform=PC)");
}

#[test]
fn review_display_shows_score_and_game() {
    let review = Review {
        id: 9,
        score: 5,
        comment: "great".to_string(),
        game_id: 3,
        user_id: 7,
    };
    assert_eq!(review.to_string(), "Review(id=9, score=5, game_id=3)");
}
