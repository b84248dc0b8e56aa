use std::sync::Arc;

use serde::Serialize;
use tera::{Context, Tera};
use tracing::{debug, info};

use crate::{
    config::Config,
    content::{About, Content, Home, Post, Project},
    decoration::hero_parallax,
    error::LuminaErr,
    navigation::{Action, NavItem, NavigationState, Page, ViewController},
    site::Site,
};

/// Number of posts on the home grid.
const FEATURED_POSTS: usize = 2;

/// What a page shows, resolved against the content tables.
#[derive(Debug, PartialEq)]
pub enum View<'a> {
    Home {
        home: &'a Home,
        featured: &'a [Post],
    },
    Post(&'a Post),
    Projects(&'a [Project]),
    ProjectDetail(&'a Project),
    About(&'a About),
}

impl<'a> View<'a> {
    pub fn resolve(state: &NavigationState, content: &'a Content) -> Self {
        match state.page {
            Page::Home => View::Home {
                home: &content.home,
                featured: content.featured_posts(FEATURED_POSTS),
            },
            Page::Post => View::Post(content.resolve_post(state.selected_post_id)),
            Page::Projects => View::Projects(content.projects()),
            Page::ProjectDetail => {
                View::ProjectDetail(content.resolve_project(state.selected_project_id))
            }
            Page::About => View::About(&content.about),
        }
    }

    pub fn template(&self) -> &'static str {
        match self {
            View::Home { .. } => "home.html",
            View::Post(_) => "post.html",
            View::Projects(_) => "projects.html",
            View::ProjectDetail(_) => "project_detail.html",
            View::About(_) => "about.html",
        }
    }

    pub fn title(&self) -> Option<&str> {
        match self {
            View::Post(post) => Some(post.title.as_ref()),
            View::ProjectDetail(project) => Some(project.title.as_ref()),
            View::Projects(_) => Some("Laboratory."),
            View::About(about) => Some(about.heading.as_ref()),
            View::Home { .. } => None,
        }
    }

    fn insert_into(&self, context: &mut Context) -> Result<(), LuminaErr> {
        match self {
            View::Home { home, featured } => {
                context.insert("home", home);
                context.insert("featured", featured);
            }
            View::Post(post) => {
                context.insert("post", post);
                context.insert("published", &post.published()?.format("%Y-%m-%d").to_string());
            }
            View::Projects(projects) => context.insert("projects", projects),
            View::ProjectDetail(project) => {
                context.insert("project", project);
                context.insert("source_url", project.source_url()?.as_str());
                context.insert("demo_url", project.demo_url()?.as_str());
            }
            View::About(about) => context.insert("about", about),
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
struct MenuEntry {
    label: &'static str,
    href: String,
    active: bool,
}

fn menu(active: NavItem) -> Vec<MenuEntry> {
    NavItem::ALL
        .into_iter()
        .map(|item| MenuEntry {
            label: item.label(),
            href: Action::Navigate(item.target())
                .href()
                .unwrap_or_else(|| "/index.html".into()),
            active: item == active,
        })
        .collect()
}

/// Pure function of (navigation state, scroll offset, content, config) to HTML.
pub struct Renderer {
    tera: Tera,
    config: Arc<Config>,
    content: Arc<Content>,
}

impl Renderer {
    pub fn new(tera: Tera, config: Arc<Config>, content: Arc<Content>) -> Self {
        Self {
            tera,
            config,
            content,
        }
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    pub fn render(&self, controller: &ViewController) -> Result<String, LuminaErr> {
        let state = controller.state();
        let view = View::resolve(state, &self.content);
        debug!("render {} with {}", state.page, view.template());

        let mut context = Context::new();
        context.insert("config", self.config.as_ref());
        context.insert("page", &state.page);
        context.insert("state", state);
        context.insert("title", &view.title());
        context.insert("menu", &menu(controller.active_nav_item()));
        context.insert("show_footer", &state.page.has_footer());
        context.insert("hero_style", &hero_parallax(controller.scroll_offset()).style());
        view.insert_into(&mut context)?;

        Ok(self.tera.render(view.template(), &context)?)
    }
}

/// Walks every reachable state and collects the rendered pages into `site`.
pub fn render_site(site: &Site, renderer: &Renderer) -> Result<(), LuminaErr> {
    info!("render pages");
    let mut actions = vec![
        Action::Navigate(Page::Home),
        Action::Navigate(Page::Projects),
        Action::Navigate(Page::About),
    ];
    actions.extend(renderer.content().posts().iter().map(|p| Action::SelectPost(p.id)));
    actions.extend(
        renderer
            .content()
            .projects()
            .iter()
            .map(|p| Action::SelectProject(p.id)),
    );

    let mut controller = ViewController::new();
    for action in actions {
        let Some(path) = action.href() else {
            continue;
        };
        controller.apply(action);
        site.add_page(&path, renderer.render(&controller)?.into())?;
    }
    info!("render pages complete");
    Ok(())
}
