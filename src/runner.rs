//! Orchestrates one drop-in run.

use std::fs;

use log::{info, warn};

use crate::{
    backup::backup_target,
    cli::Args,
    codegen::{generator_commands, run_generators},
    config::load_config,
    context::Context,
    copier::TreeCopier,
    entities::EntityGenerator,
    error::{Error, Result},
    filter::PathFilter,
    operation::OperationRunner,
    schema::generate_schema,
    updaters::update_project_configuration,
};

/// Resolves the command line into a [`Context`] and executes it.
pub fn run(args: Args) -> Result<()> {
    let context = Context::from_args(&args)?;
    let mut runner = OperationRunner::new(context.dry_run);
    execute(&context, &mut runner)
}

/// Runs every stage in order:
/// 1. Loads the exclusion config and compiles the path filter
/// 2. Backs up a non-empty target
/// 3. Creates the target root
/// 4. Copies the template tree through the project pass
/// 5. Writes the schema file and every entity's role files
/// 6. Patches go.mod, package.json and .devloop.yaml
/// 7. Triggers the external generators
pub fn execute(context: &Context, runner: &mut OperationRunner) -> Result<()> {
    println!("Source: {}", context.source_root.display());
    println!("Target: {}", context.target_root.display());
    println!("Entities: {}", context.entities.join(", "));
    println!("Project: {}", context.project.name);
    println!("Module: {}", context.project.module_path);
    if context.dry_run {
        println!("DRY RUN MODE - no files will be modified");
    }

    let config = load_config(&context.source_root, context.config_path.as_deref())?;
    let filter = PathFilter::new(&config, context.exclude_template_entity)?;

    backup_target(&context.target_root, runner)?;

    if !context.dry_run {
        fs::create_dir_all(&context.target_root).map_err(|e| Error::TargetCreationError {
            target_dir: context.target_root.display().to_string(),
            e,
        })?;
    }

    info!("Copying template files");
    TreeCopier::new(&filter, &context.project).copy(
        &context.source_root,
        &context.target_root,
        runner,
    )?;

    info!("Generating entity files");
    if let Err(e) = generate_schema(
        &context.source_root,
        &context.target_root,
        &context.project,
        &context.entities,
        context.exclude_template_entity,
        runner,
    ) {
        warn!("Failed to generate the schema file: {e}");
    }
    EntityGenerator::new(&context.project).generate(
        &context.source_root,
        &context.target_root,
        &context.entities,
        runner,
    );

    info!("Updating project configuration");
    update_project_configuration(&context.target_root, &context.project, runner);

    if !context.skip_codegen {
        run_generators(&generator_commands(&context.target_root), runner);
    }

    println!("Drop-in completed successfully in {}.", context.target_root.display());
    Ok(())
}
