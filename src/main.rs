use std::{path::Path, sync::Arc};

use clap::Parser;
use lumina::{
    args::{Args, BuildArgs, Commands, ReplayArgs},
    config::Config,
    content::Content,
    error::LuminaErr,
    renderer::{Renderer, render_site},
    replay,
    site::Site,
    templating,
};
use tracing::info;
use tracing_log::AsTrace;

fn init_logging(args: &Args) {
    tracing_subscriber::fmt()
        .with_max_level(args.verbose.log_level_filter().as_trace())
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

async fn load(path: &Path) -> Result<(Arc<Config>, Renderer), LuminaErr> {
    let config = Arc::new(Config::try_from(path.to_path_buf())?);
    let content = match &config.content_path {
        Some(content_path) => Content::from_path(&path.join(content_path)).await?,
        None => Content::bundled()?,
    };
    info!(
        "loaded {} posts and {} projects",
        content.posts().len(),
        content.projects().len()
    );
    let template_path = config.template.as_ref().map(|template| path.join(template));
    let tera = templating::initialize(template_path.as_deref())?;
    Ok((config.clone(), Renderer::new(tera, config, content)))
}

async fn run_build(args: BuildArgs) -> Result<(), LuminaErr> {
    let (config, renderer) = load(&args.path).await?;
    let site = Site::new(args.path.join(&config.dist_path));
    render_site(&site, &renderer)?;
    site.save().await
}

async fn run_replay(args: ReplayArgs) -> Result<(), LuminaErr> {
    let actions = if args.actions.is_empty() {
        replay::read_stdin_actions().await?
    } else {
        replay::parse_actions(&args.actions)?
    };
    let renderer = if args.html {
        Some(load(&args.path).await?.1)
    } else {
        None
    };
    let mut stdout = std::io::stdout().lock();
    replay::replay(actions, renderer.as_ref(), &mut stdout)?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), LuminaErr> {
    let args = Args::parse();
    init_logging(&args);

    match args.command {
        Some(Commands::Replay(replay_args)) => run_replay(replay_args).await,
        Some(Commands::Build(build_args)) => run_build(build_args).await,
        None => run_build(BuildArgs { path: ".".into() }).await,
    }
}
