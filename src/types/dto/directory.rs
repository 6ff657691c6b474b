use poem_openapi::Object;

use crate::types::db::{company, store_location};
use crate::types::dto::common::listing_message;

#[derive(Object, Debug)]
pub struct CompanyResponse {
    pub company_id: i64,
    pub company_name: Option<String>,
}

#[derive(Object, Debug)]
pub struct CompanyListResponse {
    pub status_code: u16,
    pub message: String,
    pub count: u64,
    pub companies: Vec<CompanyResponse>,
}

impl From<Vec<company::Model>> for CompanyListResponse {
    fn from(models: Vec<company::Model>) -> Self {
        Self {
            status_code: 200,
            message: listing_message(models.len()),
            count: models.len() as u64,
            companies: models
                .into_iter()
                .map(|model| CompanyResponse {
                    company_id: model.company_id,
                    company_name: model.company_name,
                })
                .collect(),
        }
    }
}

#[derive(Object, Debug)]
pub struct StoreLocationResponse {
    pub store_location_id: i64,
    pub company_id: i64,
    pub store_name: Option<String>,
}

#[derive(Object, Debug)]
pub struct StoreLocationListResponse {
    pub status_code: u16,
    pub message: String,
    pub count: u64,
    pub store_locations: Vec<StoreLocationResponse>,
}

impl From<Vec<store_location::Model>> for StoreLocationListResponse {
    fn from(models: Vec<store_location::Model>) -> Self {
        Self {
            status_code: 200,
            message: listing_message(models.len()),
            count: models.len() as u64,
            store_locations: models
                .into_iter()
                .map(|model| StoreLocationResponse {
                    store_location_id: model.store_location_id,
                    company_id: model.company_id,
                    store_name: model.store_name,
                })
                .collect(),
        }
    }
}
