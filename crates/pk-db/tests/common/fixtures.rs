use pk_core::{OwnerKey, ProfileFields, VisibilitySettings};

use uuid::Uuid;

/// Owner key unique to the calling test
pub fn unique_owner_key() -> OwnerKey {
    OwnerKey::parse(&Uuid::new_v4().to_string()).expect("UUID is a valid owner key")
}

pub fn sample_fields() -> ProfileFields {
    ProfileFields {
        comment: "Back in 10 minutes".to_string(),
        vehicle_number: "12가3456".to_string(),
        nickname: "Minsu".to_string(),
        visit_place: "Building A".to_string(),
        phone_number: "010-1234-5678".to_string(),
        memo: "Call before towing".to_string(),
        kakao_open_chat_url: "https://open.kakao.com/o/abc123".to_string(),
    }
}

pub fn hidden_phone_visibility() -> VisibilitySettings {
    let mut visibility = VisibilitySettings::all_visible();
    visibility.phone_number = false;
    visibility
}
