use std::{
    fmt::{Debug, Display},
    io,
};

pub enum LuminaErr {
    Io(io::Error),
    ConfigNotValid(serde_yaml::Error),
    Json(serde_json::Error),
    Tera(tera::Error),
    Url(url::ParseError),
    Date(chrono::ParseError),
    Content(String),
    Message(String),
    WithContext {
        context: String,
        source: Box<LuminaErr>,
    },
}

impl From<io::Error> for LuminaErr {
    fn from(err: io::Error) -> Self {
        LuminaErr::Io(err)
    }
}

impl From<serde_yaml::Error> for LuminaErr {
    fn from(err: serde_yaml::Error) -> Self {
        LuminaErr::ConfigNotValid(err)
    }
}

impl From<serde_json::Error> for LuminaErr {
    fn from(err: serde_json::Error) -> Self {
        LuminaErr::Json(err)
    }
}

impl From<tera::Error> for LuminaErr {
    fn from(err: tera::Error) -> Self {
        LuminaErr::Tera(err)
    }
}

impl From<url::ParseError> for LuminaErr {
    fn from(err: url::ParseError) -> Self {
        LuminaErr::Url(err)
    }
}

impl From<chrono::ParseError> for LuminaErr {
    fn from(err: chrono::ParseError) -> Self {
        LuminaErr::Date(err)
    }
}

impl From<tokio::task::JoinError> for LuminaErr {
    fn from(err: tokio::task::JoinError) -> Self {
        LuminaErr::Message(format!("task failed: {err}"))
    }
}

impl From<&str> for LuminaErr {
    fn from(msg: &str) -> Self {
        LuminaErr::Message(msg.to_string())
    }
}

impl From<String> for LuminaErr {
    fn from(msg: String) -> Self {
        LuminaErr::Message(msg)
    }
}

impl Display for LuminaErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LuminaErr::Io(err) => write!(f, "IO error:\n {err}"),
            LuminaErr::ConfigNotValid(err) => write!(f, "YAML not valid:\n {err}"),
            LuminaErr::Json(err) => write!(f, "JSON error:\n {err}"),
            LuminaErr::Tera(err) => {
                write!(f, "Tera error:\n {err}")?;
                let mut source = std::error::Error::source(err);
                while let Some(inner) = source {
                    write!(f, "\n caused by: {inner}")?;
                    source = inner.source();
                }
                Ok(())
            }
            LuminaErr::Url(err) => write!(f, "URL not valid:\n {err}"),
            LuminaErr::Date(err) => write!(f, "Date not valid:\n {err}"),
            LuminaErr::Content(msg) => write!(f, "Content not valid:\n {msg}"),
            LuminaErr::Message(msg) => write!(f, "{msg}"),
            LuminaErr::WithContext { context, source } => write!(f, "{context}\n{source}"),
        }
    }
}

impl Debug for LuminaErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl std::error::Error for LuminaErr {}

pub trait ContextExt<T> {
    fn with_context<F>(self, f: F) -> Result<T, LuminaErr>
    where
        F: FnOnce() -> String;
}

impl<T, E> ContextExt<T> for Result<T, E>
where
    E: Into<LuminaErr>,
{
    fn with_context<F>(self, f: F) -> Result<T, LuminaErr>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|err| LuminaErr::WithContext {
            context: f(),
            source: Box::new(err.into()),
        })
    }
}
