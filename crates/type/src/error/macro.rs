// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

/// Wraps a [`Diagnostic`](crate::error::Diagnostic) into an
/// [`Error`](crate::error::Error).
#[macro_export]
macro_rules! error {
	($diagnostic:expr) => {
		$crate::error::Error($diagnostic)
	};
}

/// Wraps a diagnostic into an `Err`.
#[macro_export]
macro_rules! err {
	($diagnostic:expr) => {
		Err($crate::error!($diagnostic))
	};
}

/// Returns early with the given diagnostic.
#[macro_export]
macro_rules! return_error {
	($diagnostic:expr) => {
		return $crate::err!($diagnostic)
	};
}

/// Creates an internal error diagnostic with the source location attached.
#[macro_export]
macro_rules! internal_error {
	($reason:expr) => {
		$crate::error::diagnostic::internal::internal_with_context($reason, file!(), line!(), module_path!())
	};
	($fmt:expr, $($arg:tt)*) => {
		$crate::error::diagnostic::internal::internal_with_context(
			format!($fmt, $($arg)*),
			file!(),
			line!(),
			module_path!(),
		)
	};
}

#[cfg(test)]
mod tests {
	use crate::{
		Result,
		error::{Error, diagnostic::internal::internal},
	};

	#[test]
	fn test_error_macro_wraps_diagnostic() {
		let error: Error = error!(internal("boom"));
		assert_eq!(error.code, "INTERNAL_ERROR");
	}

	#[test]
	fn test_return_error_in_function() {
		fn fails() -> Result<()> {
			return_error!(internal("function error"));
		}

		let err = fails().unwrap_err();
		assert!(err.message.contains("function error"));
	}

	#[test]
	fn test_internal_error_captures_location() {
		let diagnostic = internal_error!("value was {}", 42);
		assert!(diagnostic.message.contains("value was 42"));
		assert!(diagnostic.label.as_ref().unwrap().contains("macro.rs"));
	}
}
