
// --- Unit Tests ---
pub mod unit {
    pub mod admin_test;
    pub mod events_test;
    pub mod exchange_test;
    pub mod execute_test;
    pub mod listing_test;
    pub mod purchase_test;
    pub mod registry_test;
    pub mod resolve_test;
    pub mod storage_test;
    pub mod transfer_test;
    pub mod validation_test;
}
