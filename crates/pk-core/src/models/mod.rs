pub mod owner_key;
pub mod profile_field;
pub mod profile_fields;
pub mod profile_record;
pub mod public_view;
pub mod visibility_settings;
