use std::io::Write;

use serde::Serialize;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::{
    error::LuminaErr,
    navigation::{Action, NavItem, NavigationState, ViewController},
    renderer::Renderer,
};

/// One line of replay output.
#[derive(Debug, Serialize)]
pub struct Snapshot<'a> {
    #[serde(flatten)]
    pub state: &'a NavigationState,
    pub scroll_offset: u32,
    pub active: NavItem,
}

impl<'a> Snapshot<'a> {
    pub fn of(controller: &'a ViewController) -> Self {
        Self {
            state: controller.state(),
            scroll_offset: controller.scroll_offset(),
            active: controller.active_nav_item(),
        }
    }
}

/// Applies `actions` in order. After each one a JSON snapshot goes to `out`,
/// unless `renderer` is given, in which case only the final page is written.
pub fn replay<I, W>(
    actions: I,
    renderer: Option<&Renderer>,
    out: &mut W,
) -> Result<ViewController, LuminaErr>
where
    I: IntoIterator<Item = Action>,
    W: Write,
{
    let mut controller = ViewController::new();
    for action in actions {
        controller.apply(action);
        if renderer.is_none() {
            serde_json::to_writer(&mut *out, &Snapshot::of(&controller))?;
            writeln!(out)?;
        }
    }
    if let Some(renderer) = renderer {
        out.write_all(renderer.render(&controller)?.as_bytes())?;
    }
    Ok(controller)
}

pub fn parse_actions<S: AsRef<str>>(raw: &[S]) -> Result<Vec<Action>, LuminaErr> {
    raw.iter()
        .map(|line| line.as_ref())
        .filter(|line| !line.trim().is_empty() && !line.trim_start().starts_with('#'))
        .map(str::parse)
        .collect()
}

pub async fn read_stdin_actions() -> Result<Vec<Action>, LuminaErr> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut raw = Vec::new();
    while let Some(line) = lines.next_line().await? {
        raw.push(line);
    }
    parse_actions(&raw)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{config::Config, content::Content, navigation::Page, templating::initialize};

    #[test]
    fn blank_lines_and_comments_are_skipped() {
        let actions = parse_actions(&["# open a post", "post 2", "", "  projects"]).unwrap();
        assert_eq!(
            actions,
            vec![Action::SelectPost(2), Action::Navigate(Page::Projects)]
        );
        assert!(parse_actions(&["settings"]).is_err());
    }

    #[test]
    fn snapshots_follow_each_action() {
        let mut out = Vec::new();
        let actions = parse_actions(&["post 2", "projects"]).unwrap();
        replay(actions, None, &mut out).unwrap();
        let lines: Vec<serde_json::Value> = String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(
            lines,
            vec![
                serde_json::json!({
                    "page": "post",
                    "selected_post_id": 2,
                    "selected_project_id": null,
                    "scroll_offset": 0,
                    "active": "home"
                }),
                serde_json::json!({
                    "page": "projects",
                    "selected_post_id": 2,
                    "selected_project_id": null,
                    "scroll_offset": 0,
                    "active": "projects"
                }),
            ]
        );
    }

    #[test]
    fn html_mode_renders_final_state() {
        let renderer = Renderer::new(
            initialize(None).unwrap(),
            Arc::new(Config::default()),
            Content::bundled().unwrap(),
        );
        let mut out = Vec::new();
        let actions = parse_actions(&["post 1", "project 9999"]).unwrap();
        let controller = replay(actions, Some(&renderer), &mut out).unwrap();
        assert_eq!(controller.page(), Page::ProjectDetail);
        let html = String::from_utf8(out).unwrap();
        assert!(html.contains("<h1 class=\"project-title\">Nebula UI</h1>"));
    }
}
