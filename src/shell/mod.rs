// Composition root for the progress bounded context.
//
// Responsibilities
// - Read config from environment.
// - Instantiate the file backed store and the tracker.
// - Spawn the visibility worker behind a channel observer.
// - Expose the HTTP and GraphQL routers.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
