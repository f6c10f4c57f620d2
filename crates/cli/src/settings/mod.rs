//! Configuration loading and resolution.
//!
//! Settings are layered from the default config files, any `--config` files,
//! `STOREFRONT__*` environment variables and finally CLI flags. [`load`] turns
//! the merged layers into a validated [`ResolvedConfig`].

mod loader;
mod raw;
mod resolved;
mod sources;

pub(crate) use loader::load;
pub(crate) use resolved::ResolvedConfig;
