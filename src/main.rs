//! blockbaker's main application entry point and orchestration logic.
//! Handles command-line argument parsing, model discovery, display-name
//! collection and the generation loop.

use blockbaker::{
    answers::{get_answers_from, get_display_name},
    cli::{get_args, Args},
    codec::JsonCodec,
    config::get_config,
    error::{default_error_handler, Error, Result},
    fs::LocalFileSystem,
    generator::{Generator, Outcome},
    layout::ProjectLayout,
    logger::init_logger,
    model::{read_textures, GenerationRequest, ModelRef},
    prompt::{DialoguerPrompter, Prompter},
    renderer::MiniJinjaRenderer,
    scanner::{build_exclude_set, scan_models},
    version::TargetVersion,
};
use log::warn;

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Returns the models to generate: the ones given on the command line, or the
/// ones found in the project. `None` means there is nothing to do.
fn select_models(
    args: &Args,
    prompt: &dyn Prompter,
    layout: &ProjectLayout,
    exclude: &[String],
) -> Result<Option<Vec<ModelRef>>> {
    if !args.models.is_empty() {
        return Ok(Some(args.models.clone()));
    }

    let exclude = build_exclude_set(exclude)?;
    let mut scan = match scan_models(layout.models_root(), &exclude) {
        Ok(scan) => scan,
        Err(err @ Error::ModelRootNotFound { .. }) => {
            warn!("{}", err);
            println!("Check the mod id and project directory.");
            return Ok(None);
        }
        Err(err) => return Err(err),
    };

    if scan.is_empty() {
        println!("No JSON models found in 'block' or 'item'.");
        return Ok(None);
    }

    if scan.suggests_item_synthesis() {
        let synthesize = if args.synthesize_items {
            true
        } else if args.assume_yes {
            false
        } else {
            prompt.confirm(
                false,
                "Block models found but no item models. Generate an item for every block?"
                    .to_string(),
            )?
        };
        if synthesize {
            scan = scan.with_synthesized_items();
        }
    }
    Ok(Some(scan.models))
}

/// Main application logic execution.
///
/// # Flow
/// 1. Validates the mod id and loads the project configuration
/// 2. Selects models (command line or scan)
/// 3. Collects a display name per model
/// 4. Asks for confirmation
/// 5. Generates every model, reporting each artifact
fn run(args: Args) -> Result<()> {
    let mod_id = args.mod_id.trim().to_string();
    if mod_id.is_empty() {
        return Err(Error::ValidationError(
            "a mod id is required (e.g. sandwich)".to_string(),
        ));
    }

    let config = get_config(&args.project_dir)?;
    let target_version = args
        .target_version
        .clone()
        .unwrap_or_else(|| config.target_version.clone());
    target_version.parse::<TargetVersion>()?;
    let use_aux_feature = args.aux_feature || config.aux_feature;

    let layout = ProjectLayout::new(&args.project_dir, &mod_id, &config);
    let prompt = DialoguerPrompter::new();

    let Some(models) = select_models(&args, &prompt, &layout, &config.exclude)? else {
        return Ok(());
    };

    if args.scan_only {
        for model in &models {
            println!("{}", model);
        }
        return Ok(());
    }
    if models.is_empty() {
        return Err(Error::ValidationError("no models selected".to_string()));
    }

    let fs = LocalFileSystem::new();
    let preloaded_answers = get_answers_from(args.stdin)?;
    let mut requests = Vec::with_capacity(models.len());
    for model in models {
        let Some(display_name) =
            get_display_name(&prompt, &model, &preloaded_answers, args.assume_yes)?
        else {
            println!("Generation cancelled.");
            return Ok(());
        };
        let textures = read_textures(&fs, &layout.model_file(model.kind, &model.name))
            .unwrap_or_else(|err| {
                warn!("Could not read textures of {}: {}", model, err);
                Default::default()
            });
        requests.push(GenerationRequest {
            mod_id: mod_id.clone(),
            model,
            display_name,
            textures,
            use_aux_feature,
            target_version: target_version.clone(),
        });
    }

    let proceed = prompt.confirm(
        args.assume_yes,
        format!(
            "Generate {} model(s) into '{}'?",
            requests.len(),
            layout.root().display()
        ),
    )?;
    if !proceed {
        println!("Generation cancelled.");
        return Ok(());
    }

    let renderer = MiniJinjaRenderer::new();
    let codec = JsonCodec::new();
    let generator = Generator::new(&fs, &renderer, &codec, &layout, &config);

    let mut failed_steps = 0;
    for request in &requests {
        let report = generator.generate(request)?;
        for step in &report.steps {
            if !matches!(step.outcome, Outcome::Unchanged) {
                println!("{}: '{}'", step.outcome, step.path.display());
            }
        }
        failed_steps += report.failures().count();
    }

    if failed_steps == 0 {
        println!("Generated {} model(s) for '{}'.", requests.len(), mod_id);
    } else {
        println!(
            "Generated {} model(s) for '{}' with {} failed step(s); see the log above.",
            requests.len(),
            mod_id,
            failed_steps
        );
    }
    Ok(())
}
