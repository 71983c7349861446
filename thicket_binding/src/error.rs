// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors raised while configuring property definitions.

use core::fmt;

/// A property definition request conflicted with an existing definition.
///
/// This is a configuration failure, not a runtime binding condition:
/// re-registering the same (owner type, name) pair must use the same value
/// type and accessor shape as the first registration. Runtime conditions
/// such as a missing property or a destroyed binding source are reported
/// through [`BindResult`](crate::BindResult) and quiet no-ops instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefinitionError {
    /// The (owner type, name) pair is already defined with accessors of a
    /// different type.
    AccessorMismatch {
        /// The property name under which the conflict occurred.
        name: &'static str,
    },
}

impl fmt::Display for DefinitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AccessorMismatch { name } => write!(
                f,
                "property '{name}' was not configured properly: the accessors are not of the expected type"
            ),
        }
    }
}

impl core::error::Error for DefinitionError {}
