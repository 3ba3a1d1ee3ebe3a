// User profiles, per-specialization progress and certificates.
// Everything lives in process memory behind the `ProgressStore` trait.

pub mod certificates;
pub mod cv;
pub mod handlers;
pub mod models;
pub mod store;
