pub mod routes;

use crate::common::default_handler::CSS_VERSION;
use crate::{ApiResult, RosterAppData};
use askama::Template;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use database::{RosterGenerator, RosterLoader};
use log::info;
use roster_core::utils::TimeEstimation;
use roster_core::RosterData;

pub const REPORT_TITLE: &str = "Football Roster";

pub const FAILURE_MESSAGE: &str = "Failed to load data. Please check the logs.";

#[derive(Template)]
#[template(path = "roster/index.html")]
pub struct RosterTemplate {
    pub css_version: &'static str,
    pub title: &'static str,
    pub players: Vec<PlayerViewModel>,
    pub clubs: Vec<ClubViewModel>,
    pub managers: Vec<ManagerViewModel>,
    pub player_clubs: Vec<PlayerClubViewModel>,
    pub club_managers: Vec<ClubManagerViewModel>,
}

#[derive(Template)]
#[template(path = "roster/failure.html")]
pub struct RosterFailureTemplate {
    pub css_version: &'static str,
    pub title: &'static str,
    pub message: &'static str,
}

pub struct PlayerViewModel {
    pub name: String,
    pub age: u8,
    pub position: String,
    pub club: String,
    pub is_veteran: bool,
}

pub struct ClubViewModel {
    pub name: String,
    pub country: String,
    pub description: String,
}

pub struct ManagerViewModel {
    pub name: String,
    pub specialty: String,
}

pub struct PlayerClubViewModel {
    pub player_name: String,
    pub club_name: String,
    pub club_description: String,
}

pub struct ClubManagerViewModel {
    pub club_name: String,
    pub manager_name: String,
}

impl RosterTemplate {
    pub fn from_data(data: &RosterData) -> Self {
        RosterTemplate {
            css_version: CSS_VERSION,
            title: REPORT_TITLE,
            players: data
                .players
                .iter()
                .map(|player| PlayerViewModel {
                    name: player.name.clone(),
                    age: player.age,
                    position: player.position.clone(),
                    club: player.club.clone(),
                    is_veteran: player.is_veteran(),
                })
                .collect(),
            clubs: data
                .clubs
                .iter()
                .map(|club| ClubViewModel {
                    name: club.name.clone(),
                    country: club.country.clone(),
                    description: club.description.clone(),
                })
                .collect(),
            managers: data
                .managers
                .iter()
                .map(|manager| ManagerViewModel {
                    name: manager.name.clone(),
                    specialty: manager.specialty.clone(),
                })
                .collect(),
            player_clubs: data
                .player_clubs()
                .into_iter()
                .map(|(player, club)| PlayerClubViewModel {
                    player_name: player.name.clone(),
                    club_name: club.name.clone(),
                    club_description: club.description.clone(),
                })
                .collect(),
            club_managers: data
                .club_managers()
                .into_iter()
                .map(|(club, manager)| ClubManagerViewModel {
                    club_name: club.name.clone(),
                    manager_name: manager.name.clone(),
                })
                .collect(),
        }
    }
}

impl Default for RosterFailureTemplate {
    fn default() -> Self {
        RosterFailureTemplate {
            css_version: CSS_VERSION,
            title: REPORT_TITLE,
            message: FAILURE_MESSAGE,
        }
    }
}

/// Turns built roster data into the HTML report.
pub struct RosterReport;

impl RosterReport {
    pub fn render(data: &RosterData) -> askama::Result<String> {
        RosterTemplate::from_data(data).render()
    }

    pub fn render_failure() -> askama::Result<String> {
        RosterFailureTemplate::default().render()
    }
}

pub async fn roster_get_action(State(state): State<RosterAppData>) -> ApiResult<Response> {
    let Some(document) = RosterLoader::try_load(state.source.as_ref()).await else {
        let page = RosterReport::render_failure()?;
        return Ok((StatusCode::SERVICE_UNAVAILABLE, Html(page)).into_response());
    };

    let (page, estimated) = TimeEstimation::estimate(|| {
        let data = RosterGenerator::generate(&document);
        RosterReport::render(&data)
    });

    info!("roster rendered: {} ms", estimated);

    Ok(Html(page?).into_response())
}
