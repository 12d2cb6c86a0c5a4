//! Key joins between roster entities.
//!
//! Both joins are plain linear scans over the right-hand list: for every
//! left-hand item the first matching item wins, and items without a match
//! are left out of the result. No index is built; the first match is always
//! the earliest one in input order.

use crate::club::{Club, Manager, Player};

/// Pairs every player with the first club whose name equals `player.club`.
///
/// The comparison is exact and case-sensitive. Players whose club is not
/// listed are skipped.
pub fn join_player_to_club<'a>(
    players: &'a [Player],
    clubs: &'a [Club],
) -> Vec<(&'a Player, &'a Club)> {
    players
        .iter()
        .filter_map(|player| {
            clubs
                .iter()
                .find(|club| club.name == player.club)
                .map(|club| (player, club))
        })
        .collect()
}

/// Pairs every club with the first manager whose id equals `club.manager_id`.
pub fn join_club_to_manager<'a>(
    clubs: &'a [Club],
    managers: &'a [Manager],
) -> Vec<(&'a Club, &'a Manager)> {
    clubs
        .iter()
        .filter_map(|club| {
            managers
                .iter()
                .find(|manager| manager.id == club.manager_id)
                .map(|manager| (club, manager))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(id: u32, name: &str, age: u8, club: &str) -> Player {
        Player::new(id, name.to_string(), age, "FW".to_string(), club.to_string())
    }

    fn club(name: &str, description: &str, manager_id: u32) -> Club {
        Club::new(
            name.to_string(),
            "USA".to_string(),
            description.to_string(),
            manager_id,
        )
    }

    fn manager(id: u32, name: &str) -> Manager {
        Manager::new(id, name.to_string(), "pressing".to_string())
    }

    #[test]
    fn single_player_club_and_manager_are_joined() {
        let players = vec![player(1, "Leo", 36, "Miami FC")];
        let clubs = vec![club("Miami FC", "MLS side", 9)];
        let managers = vec![manager(9, "Tata")];

        let player_clubs = join_player_to_club(&players, &clubs);
        assert_eq!(player_clubs.len(), 1);
        assert_eq!(player_clubs[0].0.name, "Leo");
        assert_eq!(player_clubs[0].1, &clubs[0]);
        assert!(player_clubs[0].0.is_veteran());

        let club_managers = join_club_to_manager(&clubs, &managers);
        assert_eq!(club_managers.len(), 1);
        assert_eq!(club_managers[0].0.name, "Miami FC");
        assert_eq!(club_managers[0].1.name, "Tata");
    }

    #[test]
    fn earliest_club_wins_on_duplicate_names() {
        let players = vec![player(1, "Leo", 36, "Miami FC")];
        let clubs = vec![
            club("Miami FC", "first listing", 9),
            club("Miami FC", "second listing", 10),
        ];

        let joined = join_player_to_club(&players, &clubs);

        assert_eq!(joined.len(), 1);
        assert_eq!(joined[0].1.description, "first listing");
    }

    #[test]
    fn earliest_manager_wins_on_duplicate_ids() {
        let clubs = vec![club("Miami FC", "MLS side", 9)];
        let managers = vec![manager(9, "Tata"), manager(9, "Gerardo")];

        let joined = join_club_to_manager(&clubs, &managers);

        assert_eq!(joined.len(), 1);
        assert_eq!(joined[0].1.name, "Tata");
    }

    #[test]
    fn player_without_club_is_omitted() {
        let players = vec![
            player(1, "Leo", 36, "Miami FC"),
            player(2, "Luis", 37, "Gremio"),
            player(3, "Sergio", 36, "Miami FC"),
        ];
        let clubs = vec![club("Miami FC", "MLS side", 9)];

        let joined = join_player_to_club(&players, &clubs);

        let names: Vec<&str> = joined.iter().map(|(p, _)| p.name.as_str()).collect();
        assert_eq!(names, vec!["Leo", "Sergio"]);
    }

    #[test]
    fn club_name_match_is_case_sensitive() {
        let players = vec![player(1, "Leo", 36, "miami fc")];
        let clubs = vec![club("Miami FC", "MLS side", 9)];

        assert!(join_player_to_club(&players, &clubs).is_empty());
    }

    #[test]
    fn club_without_manager_is_omitted() {
        let clubs = vec![club("Miami FC", "MLS side", 9), club("Barcelona", "Catalan side", 4)];
        let managers = vec![manager(4, "Hansi")];

        let joined = join_club_to_manager(&clubs, &managers);

        assert_eq!(joined.len(), 1);
        assert_eq!(joined[0].0.name, "Barcelona");
    }

    #[test]
    fn joins_are_repeatable() {
        let players = vec![
            player(1, "Leo", 36, "Miami FC"),
            player(2, "Pedri", 22, "Barcelona"),
        ];
        let clubs = vec![club("Barcelona", "Catalan side", 4), club("Miami FC", "MLS side", 9)];
        let managers = vec![manager(9, "Tata"), manager(4, "Hansi")];

        assert_eq!(
            join_player_to_club(&players, &clubs),
            join_player_to_club(&players, &clubs)
        );
        assert_eq!(
            join_club_to_manager(&clubs, &managers),
            join_club_to_manager(&clubs, &managers)
        );
    }

    #[test]
    fn empty_inputs_produce_empty_joins() {
        assert!(join_player_to_club(&[], &[]).is_empty());
        assert!(join_club_to_manager(&[], &[]).is_empty());

        let players = vec![player(1, "Leo", 36, "Miami FC")];
        assert!(join_player_to_club(&players, &[]).is_empty());
    }
}
