//! enum-select - enum descriptions and select lists
//!
//! Binds closed enumerations to human-readable labels and turns them into
//! option lists for dropdowns and checkbox lists.
//!
//! ## Quick Start
//!
//! ```rust
//! use enum_select::colours::UserColour;
//! use enum_select::{lookup, options, Describe};
//!
//! assert_eq!(UserColour::SkyBlue.description(), "하늘색");
//! assert_eq!(
//!     lookup::enum_from_description::<UserColour>("하늘색"),
//!     Ok(UserColour::SkyBlue)
//! );
//!
//! let items = options::to_select_list::<UserColour>(Some("2"));
//! assert!(items[1].selected);
//! ```

// Core error handling
pub mod error;

// Enumeration metadata
pub mod describe;

// Description lookup and caches
pub mod lookup;

// Option list building
pub mod options;

// Demo colour domain
pub mod colours;

// REST API server (when enabled)
#[cfg(feature = "server")]
pub mod api;
#[cfg(feature = "server")]
pub mod config;

pub use describe::Describe;
pub use error::{EnumSelectError, FieldError};
pub use options::SelectOption;
