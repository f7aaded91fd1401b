use std::fmt;

/// Error type produced by a host-supplied delegate.
///
/// The bridge never inspects or rewraps it; callers get the exact value back
/// through [`DurableLinksError::Delegate`].
pub type DelegateError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug)]
pub enum DurableLinksError {
    /// No delegate registered when one was needed
    DelegateUnavailable,
    /// Incoming link rejected by the validator, or long link could not be built
    InvalidDurableLink,
    /// Delegate completed with neither a result nor an error
    UnknownDelegateResponse,
    /// Rejected input (e.g. a non-https domain prefix)
    InvalidArgument(String),
    /// `configure` called after the allow-list was already fixed
    AlreadyConfigured,
    /// Error supplied by the delegate, passed through untouched
    Delegate(DelegateError),
}

impl DurableLinksError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            DurableLinksError::DelegateUnavailable => "E001",
            DurableLinksError::InvalidDurableLink => "E002",
            DurableLinksError::UnknownDelegateResponse => "E003",
            DurableLinksError::InvalidArgument(_) => "E004",
            DurableLinksError::AlreadyConfigured => "E005",
            DurableLinksError::Delegate(_) => "E006",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            DurableLinksError::DelegateUnavailable => "Delegate Unavailable",
            DurableLinksError::InvalidDurableLink => "Invalid Durable Link",
            DurableLinksError::UnknownDelegateResponse => "Unknown Delegate Response",
            DurableLinksError::InvalidArgument(_) => "Invalid Argument",
            DurableLinksError::AlreadyConfigured => "Already Configured",
            DurableLinksError::Delegate(_) => "Delegate Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> String {
        match self {
            DurableLinksError::DelegateUnavailable => "Delegate not set".to_string(),
            DurableLinksError::InvalidDurableLink => "Link is invalid".to_string(),
            DurableLinksError::UnknownDelegateResponse => {
                "Delegate returned nothing for both result and error".to_string()
            }
            DurableLinksError::InvalidArgument(msg) => msg.clone(),
            DurableLinksError::AlreadyConfigured => {
                "configure(...) called multiple times".to_string()
            }
            DurableLinksError::Delegate(err) => err.to_string(),
        }
    }

    /// 格式化为彩色输出（用于 CLI 模式）
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }

    /// Take back the delegate's own error, if this is one.
    pub fn into_delegate_error(self) -> Option<DelegateError> {
        match self {
            DurableLinksError::Delegate(err) => Some(err),
            _ => None,
        }
    }
}

impl fmt::Display for DurableLinksError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for DurableLinksError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DurableLinksError::Delegate(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

// 便捷的构造函数
impl DurableLinksError {
    pub fn invalid_argument<T: Into<String>>(msg: T) -> Self {
        DurableLinksError::InvalidArgument(msg.into())
    }

    pub fn delegate<E>(err: E) -> Self
    where
        E: Into<DelegateError>,
    {
        DurableLinksError::Delegate(err.into())
    }
}

impl From<url::ParseError> for DurableLinksError {
    fn from(err: url::ParseError) -> Self {
        DurableLinksError::InvalidArgument(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DurableLinksError>;
