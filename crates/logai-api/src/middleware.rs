use tower_http::cors::CorsLayer;

/// Any origin, method and header, with credentials.
///
/// A literal `*` origin cannot be combined with credentials, so the request
/// origin is mirrored back instead. Not meant for production.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::very_permissive()
}
