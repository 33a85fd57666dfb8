use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ShareLinkResponse {
    pub url: String,
}
