//! Navigation state: which page is on screen, which post or project is
//! selected, and the transitions between them.

use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::LuminaErr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    #[default]
    Home,
    Post,
    Projects,
    ProjectDetail,
    About,
}

impl Page {
    pub const ALL: [Page; 5] = [
        Page::Home,
        Page::Post,
        Page::Projects,
        Page::ProjectDetail,
        Page::About,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Post => "post",
            Page::Projects => "projects",
            Page::ProjectDetail => "project-detail",
            Page::About => "about",
        }
    }

    /// Detail pages highlight the menu entry of the list they belong to.
    pub fn active_nav_item(&self) -> NavItem {
        match self {
            Page::Home | Page::Post => NavItem::Home,
            Page::Projects | Page::ProjectDetail => NavItem::Projects,
            Page::About => NavItem::About,
        }
    }

    pub fn has_footer(&self) -> bool {
        !matches!(self, Page::Post | Page::ProjectDetail)
    }
}

impl Display for Page {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Page {
    type Err = LuminaErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Page::ALL
            .into_iter()
            .find(|page| page.as_str() == s)
            .ok_or_else(|| format!("unknown page: {s}").into())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NavItem {
    Home,
    Projects,
    About,
}

impl NavItem {
    /// Menu order.
    pub const ALL: [NavItem; 3] = [NavItem::Home, NavItem::Projects, NavItem::About];

    pub fn target(&self) -> Page {
        match self {
            NavItem::Home => Page::Home,
            NavItem::Projects => Page::Projects,
            NavItem::About => Page::About,
        }
    }

    pub fn label(&self) -> &'static str {
        self.target().as_str()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NavigationState {
    pub page: Page,
    pub selected_post_id: Option<u32>,
    pub selected_project_id: Option<u32>,
}

/// A discrete user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Navigate(Page),
    SelectPost(u32),
    SelectProject(u32),
    Scroll(u32),
}

impl Action {
    /// Link that performs this action on the static site.
    pub fn href(&self) -> Option<String> {
        match self {
            Action::Navigate(Page::Home) => Some("/index.html".into()),
            Action::Navigate(Page::Projects) => Some("/projects.html".into()),
            Action::Navigate(Page::About) => Some("/about.html".into()),
            // detail pages are only reachable through a selection
            Action::Navigate(Page::Post | Page::ProjectDetail) => None,
            Action::SelectPost(id) => Some(format!("/post/{id}.html")),
            Action::SelectProject(id) => Some(format!("/project/{id}.html")),
            Action::Scroll(_) => None,
        }
    }
}

fn parse_id(kind: &str, raw: Option<&str>) -> Result<u32, LuminaErr> {
    let raw = raw.ok_or_else(|| format!("{kind} requires an id"))?;
    raw.trim()
        .parse()
        .map_err(|_| format!("{kind}: {raw:?} is not a valid id").into())
}

impl FromStr for Action {
    type Err = LuminaErr;

    /// `home`, `post 2`, `post:2`, `project 3`, `scroll 480`, ...
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (verb, arg) = match s.split_once([' ', ':']) {
            Some((verb, arg)) => (verb, Some(arg)),
            None => (s, None),
        };
        match verb {
            "post" => Ok(Action::SelectPost(parse_id(verb, arg)?)),
            "project" => Ok(Action::SelectProject(parse_id(verb, arg)?)),
            "scroll" => Ok(Action::Scroll(parse_id(verb, arg)?)),
            _ if arg.is_some() => Err(format!("{verb} takes no argument").into()),
            page => Ok(Action::Navigate(page.parse()?)),
        }
    }
}

/// Single owner of the navigation state.
#[derive(Debug, Default)]
pub struct ViewController {
    state: NavigationState,
    scroll_offset: u32,
}

impl ViewController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn page(&self) -> Page {
        self.state.page
    }

    pub fn scroll_offset(&self) -> u32 {
        self.scroll_offset
    }

    pub fn active_nav_item(&self) -> NavItem {
        self.state.page.active_nav_item()
    }

    /// Every transition lands at the top of the page, same-page ones included.
    pub fn navigate_to(&mut self, page: Page) {
        debug!("navigate: {} -> {}", self.state.page, page);
        self.state.page = page;
        self.scroll_offset = 0;
    }

    pub fn select_post(&mut self, id: u32) {
        self.state.selected_post_id = Some(id);
        self.navigate_to(Page::Post);
    }

    pub fn select_project(&mut self, id: u32) {
        self.state.selected_project_id = Some(id);
        self.navigate_to(Page::ProjectDetail);
    }

    pub fn scroll_to(&mut self, offset: u32) {
        self.scroll_offset = offset;
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Navigate(page) => self.navigate_to(page),
            Action::SelectPost(id) => self.select_post(id),
            Action::SelectProject(id) => self.select_project(id),
            Action::Scroll(offset) => self.scroll_to(offset),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn state(
        page: Page,
        selected_post_id: Option<u32>,
        selected_project_id: Option<u32>,
    ) -> NavigationState {
        NavigationState {
            page,
            selected_post_id,
            selected_project_id,
        }
    }

    #[test]
    fn starts_at_home_without_selection() {
        let controller = ViewController::new();
        assert_eq!(*controller.state(), state(Page::Home, None, None));
        assert_eq!(controller.scroll_offset(), 0);
    }

    #[test]
    fn navigate_sets_page_and_resets_scroll() {
        let mut controller = ViewController::new();
        for page in Page::ALL {
            controller.scroll_to(640);
            controller.navigate_to(page);
            assert_eq!(controller.page(), page);
            assert_eq!(controller.scroll_offset(), 0);
        }
    }

    #[test]
    fn navigate_twice_is_idempotent() {
        let mut once = ViewController::new();
        once.navigate_to(Page::Home);
        let mut twice = ViewController::new();
        twice.navigate_to(Page::Home);
        twice.navigate_to(Page::Home);
        assert_eq!(once.state(), twice.state());
        assert_eq!(once.scroll_offset(), twice.scroll_offset());
    }

    #[test]
    fn select_post_and_project() {
        let mut controller = ViewController::new();
        controller.select_post(3);
        assert_eq!(*controller.state(), state(Page::Post, Some(3), None));
        controller.select_project(2);
        assert_eq!(
            *controller.state(),
            state(Page::ProjectDetail, Some(3), Some(2))
        );
    }

    #[test]
    fn unknown_ids_are_stored_as_given() {
        let mut controller = ViewController::new();
        controller.select_post(9999);
        assert_eq!(*controller.state(), state(Page::Post, Some(9999), None));
    }

    #[test]
    fn stale_selection_is_retained() {
        let mut controller = ViewController::new();
        controller.select_post(2);
        assert_eq!(*controller.state(), state(Page::Post, Some(2), None));
        controller.navigate_to(Page::Projects);
        assert_eq!(*controller.state(), state(Page::Projects, Some(2), None));
    }

    #[test]
    fn active_menu_item_is_derived() {
        let expected = [
            (Page::Home, NavItem::Home),
            (Page::Post, NavItem::Home),
            (Page::Projects, NavItem::Projects),
            (Page::ProjectDetail, NavItem::Projects),
            (Page::About, NavItem::About),
        ];
        let mut controller = ViewController::new();
        for (page, item) in expected {
            controller.navigate_to(page);
            assert_eq!(controller.active_nav_item(), item);
        }
    }

    #[test]
    fn footer_is_hidden_on_detail_pages() {
        let with_footer: Vec<Page> = Page::ALL.into_iter().filter(Page::has_footer).collect();
        assert_eq!(with_footer, vec![Page::Home, Page::Projects, Page::About]);
    }

    #[test]
    fn pages_round_trip_through_text() {
        for page in Page::ALL {
            assert_eq!(page.to_string().parse::<Page>().unwrap(), page);
        }
        assert!("contact".parse::<Page>().is_err());
        assert_eq!(
            serde_json::to_string(&Page::ProjectDetail).unwrap(),
            "\"project-detail\""
        );
    }

    #[test]
    fn actions_parse() {
        assert_eq!(
            "projects".parse::<Action>().unwrap(),
            Action::Navigate(Page::Projects)
        );
        assert_eq!("post 2".parse::<Action>().unwrap(), Action::SelectPost(2));
        assert_eq!("post:2".parse::<Action>().unwrap(), Action::SelectPost(2));
        assert_eq!(
            " project 3 ".parse::<Action>().unwrap(),
            Action::SelectProject(3)
        );
        assert_eq!("scroll 480".parse::<Action>().unwrap(), Action::Scroll(480));
        assert!("post".parse::<Action>().is_err());
        assert!("post two".parse::<Action>().is_err());
        assert!("about 1".parse::<Action>().is_err());
    }

    #[test]
    fn actions_apply_in_order() {
        let mut controller = ViewController::new();
        for action in ["post 2", "scroll 300", "projects", "project 1", "about"] {
            controller.apply(action.parse().unwrap());
        }
        assert_eq!(*controller.state(), state(Page::About, Some(2), Some(1)));
        assert_eq!(controller.scroll_offset(), 0);
    }

    #[test]
    fn scroll_is_kept_until_next_transition() {
        let mut controller = ViewController::new();
        controller.apply(Action::Scroll(120));
        assert_eq!(controller.scroll_offset(), 120);
        assert_eq!(controller.page(), Page::Home);
    }

    #[test]
    fn hrefs() {
        assert_eq!(
            Action::Navigate(Page::Home).href().as_deref(),
            Some("/index.html")
        );
        assert_eq!(Action::SelectPost(2).href().as_deref(), Some("/post/2.html"));
        assert_eq!(
            Action::SelectProject(3).href().as_deref(),
            Some("/project/3.html")
        );
        assert_eq!(Action::Navigate(Page::Post).href(), None);
        assert_eq!(Action::Scroll(10).href(), None);
    }
}
