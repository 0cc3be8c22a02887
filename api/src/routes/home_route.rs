/// Handler: GET /
pub async fn home() -> &'static str {
    "Welcome to the API"
}
