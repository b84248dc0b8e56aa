use std::{
    collections::BTreeMap,
    path::PathBuf,
    sync::{Arc, Mutex},
};

use tracing::{debug, info};

use crate::{
    r#async::try_for_each,
    error::LuminaErr,
    fs::{clean_dir, write_file},
};

/// Assets served next to the pages, keyed by absolute site path.
const STATIC_FILES: [(&str, &str); 1] = [("/style.css", include_str!("../static/style.css"))];

pub fn static_file(path: &str) -> Option<&'static str> {
    STATIC_FILES
        .iter()
        .find(|(p, _)| *p == path)
        .map(|(_, content)| *content)
}

/// Rendered output waiting to be written, keyed by site path.
pub struct Site {
    dist_folder: PathBuf,
    pages: Mutex<BTreeMap<String, Arc<str>>>,
}

impl Site {
    pub fn new(dist_folder: PathBuf) -> Self {
        Self {
            dist_folder,
            pages: Mutex::new(BTreeMap::new()),
        }
    }

    pub fn add_page(&self, path: &str, content: Arc<str>) -> Result<(), LuminaErr> {
        debug!("add page: {}", path);
        self.pages
            .lock()
            .map_err(|_| LuminaErr::from("site pages lock poisoned"))?
            .insert(path.to_string(), content);
        Ok(())
    }

    pub fn get_page(&self, path: &str) -> Option<Arc<str>> {
        self.pages.lock().ok()?.get(path).cloned()
    }

    pub fn paths(&self) -> Vec<String> {
        self.pages
            .lock()
            .map(|pages| pages.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Clears the dist folder, then writes every page and static file.
    pub async fn save(&self) -> Result<(), LuminaErr> {
        info!("save site to {}", self.dist_folder.display());
        let dist_folder = Arc::new(clean_dir(&self.dist_folder).await?);

        let mut outputs: Vec<(String, Arc<str>)> = self
            .pages
            .lock()
            .map_err(|_| LuminaErr::from("site pages lock poisoned"))?
            .iter()
            .map(|(path, content)| (path.clone(), content.clone()))
            .collect();
        outputs.extend(
            STATIC_FILES
                .iter()
                .map(|(path, content)| (path.to_string(), Arc::from(*content))),
        );

        let count = outputs.len();
        try_for_each(outputs, move |(path, content)| {
            let target = dist_folder.join(path.trim_start_matches('/'));
            async move {
                debug!("write to file: {}", target.display());
                write_file(&target, content.as_bytes()).await
            }
        })
        .await?;
        info!("saved {} files", count);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn stylesheet_is_bundled() {
        assert!(static_file("/style.css").is_some());
        assert!(static_file("/missing.css").is_none());
    }

    #[test]
    fn pages_are_replaced_by_path() {
        let site = Site::new(PathBuf::from("unused"));
        site.add_page("/index.html", "old".into()).unwrap();
        site.add_page("/index.html", "new".into()).unwrap();
        site.add_page("/about.html", "about".into()).unwrap();
        assert_eq!(site.paths(), vec!["/about.html", "/index.html"]);
        assert_eq!(site.get_page("/index.html").as_deref(), Some("new"));
    }

    #[tokio::test]
    async fn save_writes_pages_and_assets() {
        let dist = std::env::temp_dir().join(format!("lumina-site-{}", std::process::id()));
        let site = Site::new(dist.clone());
        site.add_page("/index.html", "<h1>home</h1>".into()).unwrap();
        site.add_page("/post/2.html", "<h1>post</h1>".into()).unwrap();
        site.save().await.unwrap();

        assert_eq!(
            tokio::fs::read_to_string(dist.join("post/2.html"))
                .await
                .unwrap(),
            "<h1>post</h1>"
        );
        assert!(dist.join("index.html").is_file());
        assert!(dist.join("style.css").is_file());
        tokio::fs::remove_dir_all(&dist).await.unwrap();
    }
}
