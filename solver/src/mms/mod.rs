mod interface;
pub mod types;

pub use interface::MmsInterface;
