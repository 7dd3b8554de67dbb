use wasm_bindgen::JsValue;

pub type BackgroundResult<T> = Result<T, BackgroundError>;

#[derive(thiserror::Error, Debug)]
pub enum BackgroundError {
    #[error("drawing surface unavailable: {0}")]
    SurfaceUnavailable(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("malformed configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("draw failed: {0}")]
    Draw(String),

    #[error("frame scheduling failed: {0}")]
    Schedule(String),
}

impl BackgroundError {
    pub fn surface_unavailable(msg: impl Into<String>) -> Self {
        Self::SurfaceUnavailable(msg.into())
    }

    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    // JS exceptions carry no useful Display; fall back to their debug form
    pub fn draw(err: JsValue) -> Self {
        Self::Draw(describe(&err))
    }

    pub fn schedule(err: JsValue) -> Self {
        Self::Schedule(describe(&err))
    }
}

fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

impl From<BackgroundError> for JsValue {
    fn from(err: BackgroundError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
