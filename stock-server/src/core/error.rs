use thiserror::Error;

/// 服务器级错误 (启动、绑定、I/O)
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("I/O 错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("内部服务器错误")]
    Internal(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;
