use pk_core::PublicView;

use serde::Serialize;

/// Anonymous-viewer DTO.
///
/// Hidden and empty fields are omitted from the JSON entirely, never present
/// as null. Visibility flags themselves never appear here. `phoneCallUri`
/// follows the phone number's own flag, independent of the chat action.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicInfoDto {
    /// Epoch milliseconds; always present
    pub last_updated: i64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visit_place: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kakao_open_chat_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_call_uri: Option<String>,
}

impl From<PublicView> for PublicInfoDto {
    fn from(view: PublicView) -> Self {
        let phone_call_uri = view.phone_call_uri();
        Self {
            last_updated: view.last_updated.timestamp_millis(),
            comment: view.comment,
            vehicle_number: view.vehicle_number,
            nickname: view.nickname,
            visit_place: view.visit_place,
            phone_number: view.phone_number,
            memo: view.memo,
            kakao_open_chat_url: view.kakao_open_chat_url,
            phone_call_uri,
        }
    }
}
