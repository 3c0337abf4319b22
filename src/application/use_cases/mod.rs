/// Use cases module containing application business logic orchestration
mod inspect_projects;
mod list_manifests;

pub use inspect_projects::InspectProjectsUseCase;
pub use list_manifests::ListManifestsUseCase;
