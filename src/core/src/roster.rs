use crate::club::{join_club_to_manager, join_player_to_club, Club, Manager, Player};
use log::debug;

/// Everything one report pass works with. Built once per load and
/// never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct RosterData {
    pub players: Vec<Player>,
    pub clubs: Vec<Club>,
    pub managers: Vec<Manager>,
}

impl RosterData {
    pub fn new(players: Vec<Player>, clubs: Vec<Club>, managers: Vec<Manager>) -> Self {
        debug!(
            "roster data: {} players, {} clubs, {} managers",
            players.len(),
            clubs.len(),
            managers.len()
        );

        RosterData {
            players,
            clubs,
            managers,
        }
    }

    pub fn player_clubs(&self) -> Vec<(&Player, &Club)> {
        join_player_to_club(&self.players, &self.clubs)
    }

    pub fn club_managers(&self) -> Vec<(&Club, &Manager)> {
        join_club_to_manager(&self.clubs, &self.managers)
    }

    pub fn veterans(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|p| p.is_veteran())
    }
}
