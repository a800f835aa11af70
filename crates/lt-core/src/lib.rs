//! Brightness partitioning of the 24-bit RGB space.
//!
//! Stages:
//! 1. Brightness: integer-weighted luma of an RGB triple
//! 2. Partition: every packed RGB value grouped by brightness level
//! 3. Ranges: each level's values collapsed into maximal contiguous runs
//! 4. Layout: fixed little-endian binary form of a level record

pub mod brightness;
pub mod config;
pub mod error;
pub mod layout;
pub mod partition;
pub mod range;
pub mod record;

pub use brightness::{brightness, brightness_of, pack_rgb, unpack_rgb, LEVEL_COUNT, RGB_SPACE_SIZE};
pub use config::TableConfig;
pub use error::{LumaError, Result};
pub use layout::{decode_record, natural_len, serialize_record, DEFAULT_MIN_BUFFER_LEN};
pub use partition::{level_counts, partition, Partition};
pub use range::{encode_ranges, encode_sorted, ColorRange};
pub use record::LevelRecord;
