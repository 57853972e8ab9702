//! TLE (Two-Line Element) data module
//!
//! Parsing of two- and three-line element sets and their epochs, and construction
//! of the SGP4 model from them.

pub mod mock_data;
pub mod parser;
pub mod types;

pub use mock_data::POLAR_TLE;
pub use parser::{parse_tle_epoch_to_utc, split_element_lines};
pub use types::TleData;
