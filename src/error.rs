use std::{collections::BTreeMap, fmt, sync::Arc};

#[derive(Debug, Clone)]
pub struct ViewerError {
    pub key: &'static str,
    pub args: BTreeMap<&'static str, String>,
    pub causes: Vec<ViewerCause>,
}

#[derive(Debug, Clone)]
pub enum ViewerCause {
    Viewer(Box<ViewerError>),
    Std(Arc<dyn std::error::Error + Send + Sync>),
}

impl ViewerError {
    pub fn new(key: &'static str) -> Self {
        Self {
            key,
            args: BTreeMap::new(),
            causes: Vec::new(),
        }
    }

    pub fn with_arg(mut self, k: &'static str, v: impl ToString) -> Self {
        self.args.insert(k, v.to_string());
        self
    }

    pub fn push_viewer(mut self, cause: ViewerError) -> Self {
        self.causes.push(ViewerCause::Viewer(Box::new(cause)));
        self
    }

    pub fn push_std(mut self, cause: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.causes.push(ViewerCause::Std(Arc::new(cause)));
        self
    }
}

impl fmt::Display for ViewerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.key)?;
        let mut first = true;
        for (k, v) in &self.args {
            if !first {
                write!(f, ", ")?;
            }
            first = false;
            write!(f, "{k}={v}")?;
        }
        write!(f, ")")
    }
}

impl std::error::Error for ViewerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.causes.iter().find_map(|c| match c {
            ViewerCause::Viewer(e) => Some(e.as_ref() as &dyn std::error::Error),
            ViewerCause::Std(e) => Some(e.as_ref() as &dyn std::error::Error),
        })
    }
}

impl From<serde_json::Error> for ViewerError {
    fn from(err: serde_json::Error) -> Self {
        ViewerError::new("json-error")
            .with_arg("line", err.line())
            .with_arg("column", err.column())
            .push_std(err)
    }
}

impl From<confy::ConfyError> for ViewerError {
    fn from(err: confy::ConfyError) -> Self {
        ViewerError::new("config-error").push_std(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;
    use std::io;

    #[test]
    fn test_display_lists_args_in_order() {
        let err = ViewerError::new("script-error")
            .with_arg("path", "gestures.json")
            .with_arg("index", 3);
        assert_eq!(err.to_string(), "script-error(index=3, path=gestures.json)");
    }

    #[test]
    fn test_source_is_first_cause() {
        let inner = ViewerError::new("inner");
        let err = ViewerError::new("outer")
            .push_viewer(inner)
            .push_std(io::Error::other("disk"));
        assert_eq!(err.source().map(|e| e.to_string()), Some("inner()".to_string()));
    }

    #[test]
    fn test_json_error_keeps_position() {
        let json_err = serde_json::from_str::<Vec<u32>>("[1,\n 2,").unwrap_err();
        let err = ViewerError::from(json_err);
        assert_eq!(err.key, "json-error");
        assert_eq!(err.args.get("line").map(String::as_str), Some("2"));
        assert!(err.source().is_some());
    }
}
