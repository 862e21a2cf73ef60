// Copyright 2026 the Spotlight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported by the focus engine.
//!
//! Navigation dead ends are not errors: [`Spotlight::spot`](crate::Spotlight::spot) returns
//! `Ok(false)` and the navigator returns empty lists. Only API misuse ends up here.

use spotlight_focus::Kind;

/// Error type for engine operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SpotlightError {
    /// The engine has no owner.
    #[error("spotlight is not attached to an owner")]
    NotAttached,
    /// The engine is attached to a different owner than the one given.
    #[error("spotlight is attached to a different owner")]
    OwnerMismatch,
    /// No target was given and no element is current.
    #[error("no element is currently spotted")]
    NoCurrent,
    /// A behavior is already registered for this kind.
    #[error("a behavior is already registered for kind `{}`", .0.name())]
    DuplicateBehavior(Kind),
    /// A container behavior is already registered.
    #[error("a container behavior is already registered")]
    DuplicateContainerBehavior,
}

/// Result alias for engine operations.
pub type Result<T> = core::result::Result<T, SpotlightError>;
