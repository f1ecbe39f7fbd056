//! Client contract generator.
//!
//! Turns the endpoint descriptor maps a server publishes (routes,
//! pub/sub channels, and emitted events) into one generated Rust
//! source file of typed call contracts, scoped to a configured path
//! prefix.
//!
//! ## Pipeline
//!
//! 1. [`config`] discovers the consuming project and its
//!    `[package.metadata.api-types]` block.
//! 2. [`acquire`] fetches the three descriptor maps and the optional
//!    compressed support module from the server.
//! 3. [`scope`] filters routes and channels under the scope prefix,
//!    rebases their paths, and wraps every type-string in the
//!    data-only projection.
//! 4. [`codegen`] renders the contract sections; [`output`] assembles
//!    them and writes the artifact atomically.
//!
//! Type-strings flow through the whole pipeline as opaque text; the
//! consuming crate's compiler is the arbiter of whether they resolve.

pub mod acquire;
pub mod codegen;
pub mod config;
pub mod errors;
pub mod ident;
pub mod output;
pub mod scope;

pub use acquire::DescriptorMaps;
pub use config::{ApiTypesConfig, ProjectConfig};
pub use errors::GeneratorError;

/// Runs the full acquisition-and-synthesis pipeline, returning the
/// contract source ready to write.
///
/// The support bundle is fetched first; any acquisition failure
/// abandons the run before synthesis, so a transient server error
/// never replaces a previously written artifact. With `check` set the
/// assembled text is parsed and pretty-printed before being returned.
pub async fn load_contract(
    client: &reqwest::Client,
    config: &ProjectConfig,
    api_types: &ApiTypesConfig,
    scope: &str,
    check: bool,
) -> Result<String, GeneratorError> {
    let extracted =
        acquire::fetch_support_bundle(client, api_types, &config.support_dir()).await?;
    let support = config::support_import_path(&config.client_path(), &extracted);
    let maps = acquire::fetch_descriptor_maps(client, api_types).await?;

    let text = synthesize(maps, scope, Some(&support));
    if check {
        output::check_and_format(&text)
    } else {
        Ok(text)
    }
}

/// Synthesizes the contract source from fetched descriptor maps.
///
/// Routes and channels are filtered under `scope`; events always pass
/// through. `support_import` is the relative path mounted via
/// `#[path]` when a support module was extracted.
pub fn synthesize(maps: DescriptorMaps, scope: &str, support_import: Option<&str>) -> String {
    let routes = scope::filter_scoped(maps.routes, scope);
    let channels = scope::filter_scoped(maps.channels, scope);
    let events = scope::prepare_events(maps.events);
    output::assemble(support_import, &routes, &channels, &events)
}
