//! Error kinds surfaced at the kernel's public boundary.

use thiserror::Error;

/// Errors that can be raised by the kernel's fallible operations.
///
/// Internal helpers that merely have "no answer" (an empty root list, a
/// degenerate normal) return `Option`/empty collections; `KernelError` is
/// reserved for cases that indicate a caller mistake or an unrecoverable
/// topology problem, per the error-handling design.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum KernelError {
	/// A numeric argument was out of its required domain, e.g. a parameter
	/// outside `[0, 1]` where the operation requires it.
	#[error("invalid argument: {0}")]
	InvalidArgument(String),

	/// An unrecognised command letter was encountered in path data. Reserved
	/// for the external SVG adapter; the core re-exports the variant so the
	/// adapter can participate in the same error enum.
	#[error("malformed path-data command: {0}")]
	MalformedCommand(String),

	/// An operation attempted to mutate a path after it was closed, or to
	/// close an already-closed path.
	#[error("illegal mutation: {0}")]
	IllegalMutation(String),

	/// A topology invariant could not be upheld, e.g. stroke-to-outline
	/// failed to close a closed input, or `containsPos` exhausted its
	/// rotation sweep without finding an unambiguous ray.
	#[error("topology invariant violated: {0}")]
	TopologyViolation(String),
}

pub type Result<T> = std::result::Result<T, KernelError>;
