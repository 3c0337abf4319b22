use pkgsync::adapters::outbound::console::StderrProgressReporter;
use pkgsync::adapters::outbound::filesystem::{
    FileSystemReader, FileSystemScanner, StdoutPresenter,
};
use pkgsync::application::dto::{InspectRequest, ListRequest};
use pkgsync::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use pkgsync::application::read_models::SyncReportBuilder;
use pkgsync::application::use_cases::{InspectProjectsUseCase, ListManifestsUseCase};
use pkgsync::cli::{Args, Command};
use pkgsync::config::{merge_omit, resolve_config, ConfigFile};
use pkgsync::ports::outbound::{OutputPresenter, RootListReader};
use pkgsync::shared::error::{ExitCode, SyncError};
use pkgsync::shared::Result;
use pkgsync::workspace_sync::policies::ExclusionRules;
use pkgsync::workspace_sync::services::CrossReferenceOptions;
use std::path::{Path, PathBuf};
use std::process;

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            e.downcast_ref::<SyncError>()
                .map_or(ExitCode::ApplicationError, SyncError::exit_code)
        }
    };

    process::exit(exit_code.as_i32());
}

async fn run() -> Result<ExitCode> {
    let args = Args::parse_args();

    // Argument errors are reported before any config is read
    if let Command::Inspect { paths, file, .. } = &args.command {
        if paths.is_empty() && file.is_none() {
            return Err(SyncError::NoInputPaths.into());
        }
    }

    let config = resolve_config(args.config.as_deref(), Path::new("."))?;

    match args.command {
        Command::List { path, omit } => run_list(path, &omit, &config),
        Command::Inspect {
            paths,
            file,
            omit,
            format,
            dev,
            output,
            no_color,
        } => {
            let roots = collect_roots(file.as_deref(), paths)?;
            let format = format.or_else(|| config.output_format()).unwrap_or_default();
            let options = CrossReferenceOptions {
                include_dev_dependencies: dev || config.include_dev_dependencies.unwrap_or(false),
            };
            let request = InspectRequest::new(
                roots,
                ExclusionRules::new(merge_omit(&config, &omit)),
                options,
            );

            // Colour codes only make sense on a terminal stream
            let colored = !no_color && output.is_none();

            let use_case = InspectProjectsUseCase::new(
                FileSystemScanner::new(),
                FileSystemReader::new(),
                StderrProgressReporter::new(),
            );
            let response = use_case.execute(request).await?;

            eprintln!("{}", FormatterFactory::progress_message(format));
            let report = SyncReportBuilder::build(&response.projects);
            let formatted_output = FormatterFactory::create(format, colored).format(&report)?;

            let presenter = PresenterFactory::create(PresenterType::from_output(output));
            presenter.present(&formatted_output)?;

            if response.skipped_manifest_count() > 0 {
                Ok(ExitCode::ManifestsSkipped)
            } else {
                Ok(ExitCode::Success)
            }
        }
    }
}

fn run_list(path: PathBuf, omit: &[String], config: &ConfigFile) -> Result<ExitCode> {
    let use_case =
        ListManifestsUseCase::new(FileSystemScanner::new(), StderrProgressReporter::quiet());
    let response = use_case.execute(ListRequest::new(
        path,
        ExclusionRules::new(merge_omit(config, omit)),
    ))?;

    let output: String = response
        .manifests
        .iter()
        .map(|manifest| format!("{}\n", manifest.display()))
        .collect();
    StdoutPresenter::new().present(&output)?;

    Ok(ExitCode::Success)
}

/// Roots from the list file come first, then the positional paths
fn collect_roots(list_file: Option<&Path>, paths: Vec<PathBuf>) -> Result<Vec<PathBuf>> {
    let mut roots = match list_file {
        Some(list) => FileSystemReader::new()
            .read_roots(list)?
            .into_iter()
            .map(PathBuf::from)
            .collect(),
        None => Vec::new(),
    };
    roots.extend(paths);
    Ok(roots)
}
