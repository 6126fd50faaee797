pub mod integrity_check;

pub use integrity_check::{check_integrity, ensure_healthy};
