pub mod aggregate;
pub mod domain;
pub mod ports;

pub use aggregate::{aggregate, bucket_label};
pub use domain::{Book, GroupedHistory, HistoryEntry, HistoryRecord};
pub use ports::{
    BookLookup, HistoryStore, Navigator, NotificationOutcome, NotificationSurface, PortError,
    PortResult,
};
