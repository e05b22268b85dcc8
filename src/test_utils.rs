use crate::analytics::service::{APIService, Endpoint};
use crate::http::HTTPResult;
use crate::twitter::{SearchQuery, Service};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;

pub fn do_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn load_data(file: &str) -> String {
    let filename = format!("tests/data/{file}.json");
    fs::read_to_string(&filename).expect(&format!("could not load test data from {filename}"))
}

/// Answers searches with `tests/data/search_<suffix>.json`.
pub struct TestService<'a> {
    suffix: &'a str,
}

impl<'a> TestService<'a> {
    pub fn new(suffix: &'a str) -> Self {
        Self { suffix }
    }
}

impl<'a> Service for TestService<'a> {
    async fn search_recent(&self, _query: &SearchQuery) -> HTTPResult<String> {
        Ok(load_data(&format!("search_{}", self.suffix)))
    }
}

/// Answers text analytics requests with `tests/data/<endpoint>_<suffix>.json`.
pub struct TestAPIService<'a> {
    suffix: &'a str,
}

impl<'a> TestAPIService<'a> {
    pub fn new(suffix: &'a str) -> Self {
        Self { suffix }
    }
}

impl<'a> APIService for TestAPIService<'a> {
    async fn post<D, R>(&self, endpoint: Endpoint, _data: &D) -> HTTPResult<R>
    where
        D: Serialize + Sync,
        R: DeserializeOwned + Send,
    {
        let body = load_data(&format!("{}_{}", endpoint.name(), self.suffix));
        Ok(serde_json::from_str(&body)?)
    }
}
