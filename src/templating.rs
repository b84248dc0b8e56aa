use std::{collections::HashMap, path::Path};

use tera::{Function, Result, Tera, Value};
use tracing::info;

use crate::{
    fs::crc32_checksum,
    navigation::{Action, Page},
    site::static_file,
};

const TEMPLATES: [(&str, &str); 7] = [
    ("base.html", include_str!("../templates/base.html")),
    ("macros.html", include_str!("../templates/macros.html")),
    ("home.html", include_str!("../templates/home.html")),
    ("post.html", include_str!("../templates/post.html")),
    ("projects.html", include_str!("../templates/projects.html")),
    (
        "project_detail.html",
        include_str!("../templates/project_detail.html"),
    ),
    ("about.html", include_str!("../templates/about.html")),
];

pub fn get_string_arg(args: &HashMap<String, Value>, key: &str) -> Option<String> {
    match args.get(key) {
        Some(value) => value.as_str().map(|string| string.to_string()),
        None => None,
    }
}

fn get_id_arg(args: &HashMap<String, Value>, key: &str) -> Result<u32> {
    args.get(key)
        .and_then(|value| value.as_u64())
        .and_then(|id| u32::try_from(id).ok())
        .ok_or_else(|| tera::Error::msg(format!("{key} is required and must be an id")))
}

fn href(action: Action) -> Result<Value> {
    let href = action
        .href()
        .ok_or_else(|| tera::Error::msg(format!("{action:?} has no link")))?;
    Ok(tera::to_value(href)?)
}

fn post_href() -> impl Function + 'static {
    move |args: &HashMap<String, Value>| href(Action::SelectPost(get_id_arg(args, "id")?))
}

fn project_href() -> impl Function + 'static {
    move |args: &HashMap<String, Value>| href(Action::SelectProject(get_id_arg(args, "id")?))
}

fn nav_href() -> impl Function + 'static {
    move |args: &HashMap<String, Value>| {
        let page: Page = get_string_arg(args, "page")
            .ok_or_else(|| tera::Error::msg("page is required"))?
            .parse()
            .map_err(|e| tera::Error::msg(format!("{e}")))?;
        href(Action::Navigate(page))
    }
}

fn asset_url() -> impl Function + 'static {
    move |args: &HashMap<String, Value>| {
        if let Some(path) = get_string_arg(args, "path") {
            if let Some(content) = static_file(&path) {
                let hash = crc32_checksum(content.as_bytes());
                return Ok(tera::to_value(format!("{path}?cb={hash}"))?);
            }
            return Err(tera::Error::msg(format!("{path} not found")));
        }
        Err(tera::Error::msg("path is required"))
    }
}

fn crc32(value: &Value, _: &HashMap<String, Value>) -> Result<Value> {
    let val = value
        .as_str()
        .ok_or_else(|| tera::Error::msg("crc32 filter requires a string value"))?;
    Ok(tera::to_value(crc32_checksum(val.as_bytes()))?)
}

/// Bundled templates, or `<template_path>/**/*.html` when a directory is given.
pub fn initialize(template_path: Option<&Path>) -> Result<Tera> {
    let mut tera = match template_path {
        Some(path) => {
            let templates = format!("{}/**/*.html", path.display());
            info!("initialize templates: {}", templates);
            Tera::new(&templates)?
        }
        None => {
            info!("initialize bundled templates");
            let mut tera = Tera::default();
            tera.add_raw_templates(TEMPLATES)?;
            tera
        }
    };
    tera.register_function("post_href", post_href());
    tera.register_function("project_href", project_href());
    tera.register_function("nav_href", nav_href());
    tera.register_function("asset_url", asset_url());

    tera.register_filter("crc32", crc32);

    info!("template initialization complete");
    Ok(tera)
}
