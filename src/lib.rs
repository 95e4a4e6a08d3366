//! Package search and selection engine for the packages step of a software
//! image build wizard.
//!
//! The engine maintains two disjoint pools over a remote package catalog:
//! the Available pool, replaced wholesale by each search, and the Chosen
//! pool, the packages committed to the image. Searches are capped, ranked by
//! relevance tier, and guaranteed to surface a literal exact-name match even
//! when the result set is truncated. The Chosen pool is persisted in the
//! wizard's shared form store across step navigation.

pub mod catalog;
pub mod flags;
pub mod form;
pub mod logic;
pub mod state;
pub mod util;
pub mod worker;
