use crate::{
    cli::Args,
    config::load_metadata,
    error::Result,
    loader::TemplateSource,
    package::{CreateArgs, PackageTemplate},
    renderer::get_template_engine,
    template::PackageProcessor,
};

/// Name of the invoking user, used as the default maintainer.
pub fn current_user() -> Option<String> {
    std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .ok()
        .filter(|user| !user.trim().is_empty())
}

/// Main CLI runner that creates one package from the parsed arguments
pub struct Runner {
    args: Args,
}

impl Runner {
    pub fn new(args: Args) -> Self {
        Self { args }
    }

    pub fn run(self) -> Result<()> {
        let template = self.build_template()?;
        let name = template.package().name.clone();
        let target = self.args.path.join(&name);

        let source = TemplateSource::from_option(self.args.templates_dir.clone());
        log::debug!("Using {source} for distro '{}'", self.args.rosdistro);
        let engine = get_template_engine();
        let loader = source.loader();
        let processor = PackageProcessor::new(&engine, loader.as_ref(), &self.args.rosdistro);

        if self.args.dry_run {
            let files = processor.package_files(&template, None)?;
            for path in files.keys() {
                println!("[DRY RUN] Would write '{}'", target.join(path).display());
            }
            return Ok(());
        }

        processor.create_package_files(&target, &template, None)?;
        println!("Created package '{}' in {}.", name, target.display());
        Ok(())
    }

    /// Builds the package record from a metadata file or from the inline flags.
    fn build_template(&self) -> Result<PackageTemplate> {
        if let Some(path) = &self.args.metadata {
            let mut package = load_metadata(path)?;
            if let Some(name) = &self.args.name {
                package.name = name.clone();
            }
            return PackageTemplate::from_package(package);
        }

        PackageTemplate::create(CreateArgs {
            name: self.args.name.clone().unwrap_or_default(),
            description: self.args.description.clone(),
            licenses: self.args.licenses.clone(),
            maintainer_names: self.args.maintainers.clone(),
            author_names: self.args.authors.clone(),
            version: self.args.pkg_version.clone(),
            catkin_deps: self.args.dependencies.clone(),
            default_maintainer: current_user(),
        })
    }
}

/// Main entry point for CLI execution
pub fn run(args: Args) -> Result<()> {
    Runner::new(args).run()
}
