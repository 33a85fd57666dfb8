use crate::PublicInfoDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct PublicInfoResponse {
    pub info: PublicInfoDto,
}
