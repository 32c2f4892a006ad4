///! teamdex-core – team-builder core logic
///!
///! Export-text parsing, the persisted team store, and the memoized
///! remote species cache. All I/O goes through injected ports
///! ([`storage::KvStore`], [`species::SpeciesFetcher`]) so the core can
///! be exercised without a browser, a network, or a real filesystem.

pub mod error;
pub mod settings;
pub mod species;
pub mod storage;
pub mod team;
