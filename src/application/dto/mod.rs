/// Data Transfer Objects for application layer
///
/// DTOs carry requests from the CLI into the use cases and results back
/// out to the formatters, keeping the domain layer isolated.
mod inspect_request;
mod inspect_response;
mod list_request;
mod output_format;

pub use inspect_request::InspectRequest;
pub use inspect_response::{InspectResponse, ListResponse};
pub use list_request::ListRequest;
pub use output_format::OutputFormat;
