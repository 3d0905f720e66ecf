// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Toast**: Auto-dismiss duration and stack capacity
//! - **Modal**: Slide-in panel placement and size classes

use crate::domain::ui::newtypes::toast_bounds;

// ==========================================================================
// Toast Defaults
// ==========================================================================

/// Default auto-dismiss duration for toasts (in milliseconds).
pub const DEFAULT_TOAST_DURATION_MS: u64 = toast_bounds::DEFAULT_DURATION_MS;

/// Default maximum number of toasts kept on screen.
pub const DEFAULT_MAX_TOASTS: usize = toast_bounds::DEFAULT_CAPACITY;

/// Minimum toast capacity.
pub const MIN_MAX_TOASTS: usize = toast_bounds::MIN_CAPACITY;

// ==========================================================================
// Modal Defaults
// ==========================================================================

/// Size classes applied to a modal when the caller does not provide any.
pub const DEFAULT_MODAL_SIZE: &str = "w-full md:w-[32rem] lg:w-[32rem]";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_TOAST_DURATION_MS > 0);

    assert!(MIN_MAX_TOASTS > 0);
    assert!(DEFAULT_MAX_TOASTS >= MIN_MAX_TOASTS);

    assert!(!DEFAULT_MODAL_SIZE.is_empty());
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_defaults_are_valid() {
        assert_eq!(DEFAULT_TOAST_DURATION_MS, 5000);
        assert_eq!(DEFAULT_MAX_TOASTS, 5);
        assert!(DEFAULT_MAX_TOASTS >= MIN_MAX_TOASTS);
    }

    #[test]
    fn modal_size_default_is_responsive() {
        assert!(DEFAULT_MODAL_SIZE.starts_with("w-full"));
    }
}
