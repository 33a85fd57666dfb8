pub mod owner_key;
