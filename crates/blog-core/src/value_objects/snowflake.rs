//! Snowflake ID - time-ordered 64-bit identifier for users, posts and comments
//!
//! Layout:
//! - Bits 63-22: milliseconds since [`Snowflake::EPOCH`]
//! - Bits 21-12: node id (0-1023)
//! - Bits 11-0:  per-millisecond sequence (0-4095)
//!
//! Ids sort by creation time, which the content store relies on as a
//! tie-breaker when two rows share a `created_at` timestamp.

use std::fmt;
use std::str::FromStr;

use chrono::Utc;
use parking_lot::Mutex;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

const NODE_BITS: u32 = 10;
const SEQUENCE_BITS: u32 = 12;
const MAX_NODE_ID: u16 = (1 << NODE_BITS) - 1;
const SEQUENCE_MASK: i64 = (1 << SEQUENCE_BITS) - 1;
const TIMESTAMP_SHIFT: u32 = NODE_BITS + SEQUENCE_BITS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Snowflake(i64);

impl Snowflake {
    /// 2025-01-01 00:00:00 UTC in milliseconds
    pub const EPOCH: i64 = 1_735_689_600_000;

    #[inline]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    #[inline]
    pub const fn into_inner(self) -> i64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SnowflakeParseError {
    #[error("invalid id format")]
    InvalidFormat,
}

impl fmt::Display for Snowflake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Snowflake {
    type Err = SnowflakeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<i64>() {
            Ok(id) if id > 0 => Ok(Self(id)),
            _ => Err(SnowflakeParseError::InvalidFormat),
        }
    }
}

// JSON clients lose precision above 2^53, so ids travel as strings.
impl Serialize for Snowflake {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Snowflake {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Int(i64),
            Str(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Int(id) => Ok(Self(id)),
            Repr::Str(s) => s.parse().map_err(de::Error::custom),
        }
    }
}

/// Thread-safe id generator
///
/// Hands out up to 4096 ids per millisecond per node. When the sequence is
/// exhausted, or the wall clock steps backwards, the generator borrows from
/// the next millisecond instead of blocking.
pub struct SnowflakeGenerator {
    node_id: u16,
    state: Mutex<GeneratorState>,
}

struct GeneratorState {
    last_millis: i64,
    sequence: i64,
}

impl SnowflakeGenerator {
    /// Node ids above 1023 are masked into range.
    pub fn new(node_id: u16) -> Self {
        Self {
            node_id: node_id & MAX_NODE_ID,
            state: Mutex::new(GeneratorState {
                last_millis: 0,
                sequence: 0,
            }),
        }
    }

    pub fn generate(&self) -> Snowflake {
        let now = Utc::now().timestamp_millis() - Snowflake::EPOCH;

        let mut state = self.state.lock();
        if now > state.last_millis {
            state.last_millis = now;
            state.sequence = 0;
        } else {
            state.sequence = (state.sequence + 1) & SEQUENCE_MASK;
            if state.sequence == 0 {
                state.last_millis += 1;
            }
        }

        Snowflake(
            (state.last_millis << TIMESTAMP_SHIFT)
                | (i64::from(self.node_id) << SEQUENCE_BITS)
                | state.sequence,
        )
    }
}

impl fmt::Debug for SnowflakeGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SnowflakeGenerator")
            .field("node_id", &self.node_id)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generated_ids_are_unique_and_increasing() {
        let generator = SnowflakeGenerator::new(3);
        let ids: Vec<Snowflake> = (0..10_000).map(|_| generator.generate()).collect();

        let unique: HashSet<_> = ids.iter().copied().collect();
        assert_eq!(unique.len(), ids.len());
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_timestamp_bits_are_close_to_now() {
        let id = SnowflakeGenerator::new(0).generate();
        let minted = (id.into_inner() >> TIMESTAMP_SHIFT) + Snowflake::EPOCH;
        assert!((Utc::now().timestamp_millis() - minted).abs() < 5_000);
    }

    #[test]
    fn test_node_id_is_masked() {
        let id = SnowflakeGenerator::new(2047).generate();
        assert_eq!((id.into_inner() >> SEQUENCE_BITS) & i64::from(MAX_NODE_ID), 1023);
    }

    #[test]
    fn test_parse_rejects_garbage_and_non_positive() {
        assert_eq!("42".parse::<Snowflake>(), Ok(Snowflake::new(42)));
        assert!("abc".parse::<Snowflake>().is_err());
        assert!("0".parse::<Snowflake>().is_err());
        assert!("-7".parse::<Snowflake>().is_err());
    }

    #[test]
    fn test_json_uses_strings_but_accepts_numbers() {
        let id = Snowflake::new(1_234_567_890_123);
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"1234567890123\"");

        let from_str: Snowflake = serde_json::from_str("\"1234567890123\"").unwrap();
        let from_num: Snowflake = serde_json::from_str("1234567890123").unwrap();
        assert_eq!(from_str, id);
        assert_eq!(from_num, id);
    }
}
