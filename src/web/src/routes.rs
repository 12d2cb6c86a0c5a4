use crate::common::default_handler::default_handler;
use crate::roster;
use crate::RosterAppData;
use axum::Router;

pub struct ServerRoutes;

impl ServerRoutes {
    pub fn create() -> Router<RosterAppData> {
        Router::<RosterAppData>::new()
            .merge(roster::routes::routes())
            .fallback(default_handler)
    }
}
