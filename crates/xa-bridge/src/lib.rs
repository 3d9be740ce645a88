//! Member access bridge for tests.
//!
//! Lets a test read fields, call methods and read constants that are not
//! part of a type's public API. The type opts in by implementing [`Reflect`]
//! in its own module, where its private members are visible, and registering
//! accessors on a [`MemberTable`]. Values cross the bridge as
//! `serde_json::Value`.
//!
//! # Quick Start
//!
//! ```rust
//! use serde_json::json;
//! use xa_bridge::{arg, Bridge, MemberTable, Reflect, Target};
//!
//! struct Counter {
//!     count: u32,
//! }
//!
//! impl Counter {
//!     const LIMIT: u32 = 10;
//!
//!     fn bump(&mut self, by: u32) -> u32 {
//!         self.count = (self.count + by).min(Self::LIMIT);
//!         self.count
//!     }
//! }
//!
//! impl Reflect for Counter {
//!     fn reflect(table: &mut MemberTable<Self>) {
//!         table
//!             .field("count", |c| c.count)
//!             .method("bump", |c, args| Ok(json!(c.bump(arg(args, 0, "bump")?))))
//!             .constant("LIMIT", Counter::LIMIT);
//!     }
//! }
//!
//! let mut counter = Counter { count: 8 };
//! let out = Bridge::call_method(Target::Instance(&mut counter), "bump", &[json!(5)]).unwrap();
//! assert_eq!(out, json!(10));
//! assert_eq!(Bridge::get_property(&counter, "count").unwrap(), json!(10));
//! assert_eq!(Bridge::get_constant::<Counter>("LIMIT").unwrap(), json!(10));
//! ```

pub mod bridge;
pub mod error;
pub mod table;

pub use bridge::{arg, Bridge, MemberListing, Target};
pub use error::{BridgeError, BridgeResult, MemberKind};
pub use table::{MemberTable, Reflect};
