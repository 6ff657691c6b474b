use poem_openapi::Object;

use crate::types::db::{event_type, functionality};
use crate::types::dto::common::listing_message;

#[derive(Object, Debug)]
pub struct FunctionalityResponse {
    pub functionality_id: i32,
    pub name: String,
}

impl From<functionality::Model> for FunctionalityResponse {
    fn from(model: functionality::Model) -> Self {
        Self {
            functionality_id: model.functionality_id,
            name: model.name,
        }
    }
}

#[derive(Object, Debug)]
pub struct FunctionalityListResponse {
    pub status_code: u16,
    pub message: String,
    pub count: u64,
    pub functionalities: Vec<FunctionalityResponse>,
}

impl From<Vec<functionality::Model>> for FunctionalityListResponse {
    fn from(models: Vec<functionality::Model>) -> Self {
        Self {
            status_code: 200,
            message: listing_message(models.len()),
            count: models.len() as u64,
            functionalities: models.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Object, Debug)]
pub struct EventTypeResponse {
    pub event_type_id: i32,
    pub functionality_id: i32,
    pub name: String,
}

impl From<event_type::Model> for EventTypeResponse {
    fn from(model: event_type::Model) -> Self {
        Self {
            event_type_id: model.event_type_id,
            functionality_id: model.functionality_id,
            name: model.name,
        }
    }
}

#[derive(Object, Debug)]
pub struct EventTypeListResponse {
    pub status_code: u16,
    pub message: String,
    pub count: u64,
    pub event_types: Vec<EventTypeResponse>,
}

impl From<Vec<event_type::Model>> for EventTypeListResponse {
    fn from(models: Vec<event_type::Model>) -> Self {
        Self {
            status_code: 200,
            message: listing_message(models.len()),
            count: models.len() as u64,
            event_types: models.into_iter().map(Into::into).collect(),
        }
    }
}
