//! Error types for the Homba core library.
//!
//! Defines error enums exposed by the public API and a convenient result alias.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Error type produced when configuring a [`crate::Generator`].
///
/// Every variant is raised synchronously by [`crate::GeneratorBuilder::build`];
/// generation itself never fails once the parameters have been accepted.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum GeneratorError {
    /// Every new node must attach to at least one target.
    #[error("edges_per_node must be at least 1 (got {got})")]
    InvalidEdgesPerNode {
        /// The invalid attachment count supplied by the caller.
        got: usize,
    },
    /// The graph cannot hold fewer nodes than the seed set.
    #[error("nodes must be at least edges_per_node {edges_per_node} (got {nodes})")]
    InsufficientNodes {
        /// Total number of nodes requested by the caller.
        nodes: usize,
        /// Seed-set size the node count must accommodate.
        edges_per_node: usize,
    },
    /// The minority share must be a fraction of the node count.
    #[error("minority_fraction must lie in [0, 1] (got {got})")]
    InvalidMinorityFraction {
        /// The out-of-range fraction supplied by the caller.
        got: f64,
    },
    /// The homophily bias must be a probability-like weight.
    #[error("homophily must lie in [0, 1] (got {got})")]
    InvalidHomophily {
        /// The out-of-range bias supplied by the caller.
        got: f64,
    },
}

define_error_codes! {
    /// Stable codes describing [`GeneratorError`] variants.
    enum GeneratorErrorCode for GeneratorError {
        /// Every new node must attach to at least one target.
        InvalidEdgesPerNode => InvalidEdgesPerNode { .. } => "GENERATOR_INVALID_EDGES_PER_NODE",
        /// The graph cannot hold fewer nodes than the seed set.
        InsufficientNodes => InsufficientNodes { .. } => "GENERATOR_INSUFFICIENT_NODES",
        /// The minority share must be a fraction of the node count.
        InvalidMinorityFraction => InvalidMinorityFraction { .. } => "GENERATOR_INVALID_MINORITY_FRACTION",
        /// The homophily bias must be a probability-like weight.
        InvalidHomophily => InvalidHomophily { .. } => "GENERATOR_INVALID_HOMOPHILY",
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, GeneratorError>;
