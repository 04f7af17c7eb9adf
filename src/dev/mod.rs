/// Development utilities module
///
/// Contains the fixture-backed mock data provider used by tests and by
/// `--mock` runs of the binary.
pub mod mock_client;
