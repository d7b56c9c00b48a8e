//! Vendor-specific connector implementations

pub mod yandex;

// Re-export for convenience
pub use yandex::YandexGptClient;
