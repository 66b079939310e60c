pub mod wise_provider;

pub use wise_provider::WiseProvider;
