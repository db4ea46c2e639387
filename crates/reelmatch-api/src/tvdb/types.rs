use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub data: LoginData,
}

#[derive(Debug, Deserialize)]
pub struct LoginData {
    pub token: String,
}

#[derive(Debug, Deserialize)]
pub struct EpisodesResponse {
    pub data: EpisodesData,
}

#[derive(Debug, Deserialize)]
pub struct EpisodesData {
    pub episodes: Vec<TvdbEpisode>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TvdbEpisode {
    pub id: u64,
    pub name: Option<String>,
    /// ISO air date, e.g. "2005-10-18".
    pub aired: Option<String>,
    #[serde(rename = "seasonNumber")]
    pub season_number: u32,
    #[serde(rename = "number")]
    pub episode_number: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_episodes_response_parses() {
        let json = r#"{
            "status": "success",
            "data": {
                "series": {"id": 73244},
                "episodes": [
                    {"id": 306, "name": "Halloween", "aired": "2005-10-18",
                     "seasonNumber": 2, "number": 5},
                    {"id": 307, "name": null, "aired": null,
                     "seasonNumber": 2, "number": 6}
                ]
            }
        }"#;
        let resp: EpisodesResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.data.episodes.len(), 2);
        assert_eq!(resp.data.episodes[0].name.as_deref(), Some("Halloween"));
        assert_eq!(resp.data.episodes[1].aired, None);
    }

    #[test]
    fn test_login_response_parses() {
        let json = r#"{"status": "success", "data": {"token": "abc123"}}"#;
        let resp: LoginResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.data.token, "abc123");
    }
}
