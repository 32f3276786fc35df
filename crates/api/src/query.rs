use serde::Deserialize;

/// Common pagination query parameters (`?page=1&pageSize=20`).
///
/// Raw values are clamped downstream by `cinelog_core::pagination` before use.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageParams {
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}

/// Query parameters for the ranking endpoint (`?limit=50`).
#[derive(Debug, Default, Deserialize)]
pub struct RankingParams {
    pub limit: Option<i64>,
}

/// Query parameters for the community top listing (`?limit=10&includeVotes=true`).
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunityTopParams {
    pub limit: Option<i64>,
    pub include_votes: Option<bool>,
}
