use crate::loaders::{ClubRecord, ManagerRecord, PlayerRecord, RosterDocument};
use roster_core::{Club, Manager, Player, RosterData};
use log::debug;

pub struct RosterGenerator;

impl RosterGenerator {
    pub fn generate(document: &RosterDocument) -> RosterData {
        let players = RosterGenerator::build_players(&document.players);
        let managers = RosterGenerator::build_managers(&document.managers);
        let clubs = RosterGenerator::build_clubs(&document.clubs);

        if let Some(player) = players.first() {
            debug!("{}", player.introduce());
        }

        if let Some(manager) = managers.first() {
            debug!("{}", manager.coach());
        }

        let data = RosterData::new(players, clubs, managers);

        debug!("veterans: {}", data.veterans().count());

        data
    }

    pub fn build_players(records: &[PlayerRecord]) -> Vec<Player> {
        records
            .iter()
            .map(|p| {
                Player::new(
                    p.id,
                    p.name.clone(),
                    p.age,
                    p.position.clone(),
                    p.club.clone(),
                )
            })
            .collect()
    }

    pub fn build_managers(records: &[ManagerRecord]) -> Vec<Manager> {
        records
            .iter()
            .map(|m| Manager::new(m.id, m.name.clone(), m.specialty.clone()))
            .collect()
    }

    pub fn build_clubs(records: &[ClubRecord]) -> Vec<Club> {
        records
            .iter()
            .map(|c| {
                Club::new(
                    c.name.clone(),
                    c.country.clone(),
                    c.description.clone(),
                    c.manager_id,
                )
            })
            .collect()
    }
}
