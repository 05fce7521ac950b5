//! Domain identifier types
//!
//! Newtype wrappers around the numeric identifiers handed out by the
//! library services. Each collection has its own identifier type so a
//! borrow id can never be passed where a fine id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! numeric_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Creates a new identifier from its numeric value
            pub fn new(value: i64) -> Self {
                Self(value)
            }

            /// Returns the numeric value of the identifier
            pub fn value(&self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().parse().map(Self)
            }
        }
    };
}

numeric_id! {
    /// Identifier of a user profile, owned by the user service
    ///
    /// # Examples
    ///
    /// ```
    /// use circdesk::domain::ids::UserId;
    ///
    /// let id = UserId::new(10);
    /// assert_eq!(id.value(), 10);
    /// assert_eq!(id.to_string(), "10");
    /// ```
    UserId
}

numeric_id! {
    /// Identifier of a book, owned by the catalog service
    BookId
}

numeric_id! {
    /// Identifier of a borrow record, owned by the borrow service
    BorrowId
}

numeric_id! {
    /// Identifier of a fine, owned by the fines service
    FineId
}
