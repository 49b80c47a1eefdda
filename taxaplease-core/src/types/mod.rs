pub mod baltimore;
pub mod rank;
pub mod record;
pub mod taxonomy;

pub use baltimore::BaltimoreClass;
pub use rank::TaxonomicRank;
pub use record::{TaxidStatus, TaxonRecord};
pub use taxonomy::TaxonId;
