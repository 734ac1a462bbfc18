//! Declares storage error enums whose variants all carry the backend's message.
//!
//! Adapters surface storage failures to clients verbatim, so every variant
//! holds a single `message: String` that is also its `Display` output. The
//! macro adds a snake-case constructor per variant and a `message()` accessor:
//!
//! ```ignore
//! define_port_error! {
//!     pub enum StoreError {
//!         Unavailable,
//!         Rejected,
//!     }
//! }
//! let err = StoreError::rejected("UNIQUE constraint failed: users.email");
//! assert_eq!(err.message(), err.to_string());
//! ```

macro_rules! define_port_error {
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),+ $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error("{message}")]
                $variant { message: String },
            )+
        }

        impl $name {
            $(
                ::paste::paste! {
                    #[doc = "Construct the `" $variant "` variant from a storage message."]
                    pub fn [<$variant:snake>](message: impl Into<String>) -> Self {
                        Self::$variant {
                            message: message.into(),
                        }
                    }
                }
            )+

            /// The storage layer's message, without any prefix.
            #[must_use]
            pub fn message(&self) -> &str {
                match self {
                    $( Self::$variant { message } )|+ => message.as_str(),
                }
            }
        }
    };
}

pub(crate) use define_port_error;
