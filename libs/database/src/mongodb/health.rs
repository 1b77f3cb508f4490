use mongodb::{bson::doc, Client};

/// Check MongoDB connectivity with a ping command.
///
/// Returns `true` when the server answers; used by readiness endpoints.
pub async fn check_health(client: &Client) -> bool {
    client
        .database("admin")
        .run_command(doc! { "ping": 1 })
        .await
        .is_ok()
}
