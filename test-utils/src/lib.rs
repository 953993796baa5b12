#![doc = include_str!("../README.md")]

//---------------------------------------------------------------------------------------------------- Lints
// Forbid lints.
// Our code, and code generated (e.g macros) cannot overrule these.
#![forbid(
	// Never.
	unused_unsafe,
	redundant_semicolons,
	unused_allocation,
	while_true,

	// Maybe can be put into `#[deny]`.
	unconditional_recursion,
	for_loops_over_fallibles,
	unused_braces,
	unused_doc_comments,
	unused_labels,
	non_ascii_idents,

	// Probably can be put into `#[deny]`.
	future_incompatible,
	break_with_label_and_loop,
	duplicate_macro_attributes,
	overlapping_range_endpoints,
	semicolon_in_expressions_from_macros,
	noop_method_call,
)]
// Deny lints.
// Some of these are `#[allow]`'ed on a per-case basis.
#![deny(
    unused_mut,
    missing_docs,
    deprecated,
    unused_comparisons,
    nonstandard_style,
    unreachable_code,
    unused_variables,
    dead_code,
    unused_imports
)]
#![allow(
	// Fine in testing utilities.
	clippy::missing_panics_doc,
)]

pub mod config;
pub mod harness;
pub mod logging;
pub mod rpc;
