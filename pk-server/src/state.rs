use pk_db::ProfileStore;

use std::sync::Arc;

/// Shared application state handed to every handler.
///
/// The store sits behind the `ProfileStore` trait and is injected here;
/// handlers never construct their own database handles.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ProfileStore>,
    /// Base URL for share links handed to the QR renderer
    pub public_base_url: String,
}
