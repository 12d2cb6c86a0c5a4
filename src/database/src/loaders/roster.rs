use crate::loaders::{LoadError, RosterSource};
use log::{error, info};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PlayerRecord {
    pub id: u32,
    pub name: String,
    pub age: u8,
    pub position: String,
    pub club: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ClubRecord {
    pub name: String,
    pub country: String,
    pub description: String,
    pub manager_id: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ManagerRecord {
    pub id: u32,
    pub name: String,
    pub specialty: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RosterDocument {
    pub players: Vec<PlayerRecord>,
    pub clubs: Vec<ClubRecord>,
    pub managers: Vec<ManagerRecord>,
}

impl RosterDocument {
    /// Invalid UTF-8 inside the body is a parse error, never replaced.
    pub fn parse(body: &[u8]) -> Result<Self, LoadError> {
        Ok(serde_json::from_slice(body)?)
    }
}

pub struct RosterLoader;

impl RosterLoader {
    /// Single fetch of the roster document. No retries.
    pub async fn load<S: RosterSource>(source: &S) -> Result<RosterDocument, LoadError> {
        let response = source.fetch().await?;

        if !response.is_success() {
            return Err(LoadError::HttpStatus {
                status: response.status,
            });
        }

        RosterDocument::parse(&response.body)
    }

    /// Same as [`RosterLoader::load`], but the error only reaches the log.
    pub async fn try_load<S: RosterSource>(source: &S) -> Option<RosterDocument> {
        match Self::load(source).await {
            Ok(document) => {
                info!(
                    "roster fetched: {} players, {} clubs, {} managers",
                    document.players.len(),
                    document.clubs.len(),
                    document.managers.len()
                );
                Some(document)
            }
            Err(e) => {
                error!("error fetching roster: {}", e);
                None
            }
        }
    }
}
