use travel_map_shared::{FeatureCollection, MapConfig, MapError, MapModel};

/// Fetch and parse the world GeoJSON asset.
pub async fn fetch_world(url: &str) -> Result<FeatureCollection, MapError> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| MapError::Fetch(e.to_string()))?;

    if !resp.ok() {
        return Err(MapError::Http(resp.status()));
    }

    let body = resp
        .text()
        .await
        .map_err(|e| MapError::Fetch(e.to_string()))?;
    FeatureCollection::from_json(&body)
}

/// Load the asset named by `config` and build the interaction model from it.
///
/// An empty interactive set is rejected by `MapModel::build`, after the fetch.
pub async fn load_map(config: &MapConfig) -> Result<MapModel, MapError> {
    let collection = fetch_world(&config.data_url).await?;
    MapModel::build(&collection, config)
}
