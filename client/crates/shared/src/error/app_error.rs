//! Application Error - Unified error type for the client
//!
//! Defines [`AppError`] struct and [`AppResult<T>`] type alias.

use std::borrow::Cow;
use std::error::Error;
use std::fmt;

use super::kind::{ErrorKind, Severity};

/// クライアント統一エラー型
///
/// 各ドメインクレートのエラーはこの型に変換され、
/// View Binding の境界で Notification Sink に渡されます。
///
/// ## Fields
/// * `kind` - エラーの分類（通知レベルを決定）
/// * `message` - ユーザー向けのエラーメッセージ
/// * `status` - サーバーが返した HTTP ステータス（応答があった場合のみ）
/// * `source` - 元のエラー（オプション、デバッグ用）
///
/// ## Examples
/// ```rust
/// use kernel::error::{app_error::AppError, kind::ErrorKind};
///
/// let err = AppError::validation("Please fill in required fields");
/// assert_eq!(err.kind(), ErrorKind::Validation);
///
/// let err = AppError::from_status(400, "Already joined");
/// assert_eq!(err.kind(), ErrorKind::Conflict);
/// assert_eq!(err.status(), Some(400));
/// ```
pub struct AppError {
    /// エラー種別
    kind: ErrorKind,
    /// ユーザー向けメッセージ
    message: Cow<'static, str>,
    /// HTTP ステータス
    status: Option<u16>,
    /// 元のエラー（デバッグ用）
    source: Option<Box<dyn Error + Send + Sync + 'static>>,
}

/// クライアント結果型エイリアス
///
/// `Result<T, AppError>` の省略形です。
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// 新しいエラーを作成
    #[inline]
    pub fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            message: message.into(),
            status: None,
            source: None,
        }
    }

    /// HTTP ステータスから種別を判定してエラーを作成
    ///
    /// ## Arguments
    /// * `status` - サーバーが返した非成功ステータス
    /// * `message` - サーバー提供のメッセージ、またはクライアント側の既定文言
    #[inline]
    pub fn from_status(status: u16, message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::from_status(status), message).with_status(status)
    }

    // ========================================================================
    // Convenience constructors
    // ========================================================================

    /// 応答なしエラー
    #[inline]
    pub fn transport(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Transport, message)
    }

    /// 入力検証エラー
    #[inline]
    pub fn validation(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    /// サーバーエラー
    #[inline]
    pub fn server(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Server, message)
    }

    /// 解釈不能な応答
    #[inline]
    pub fn malformed(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::MalformedResponse, message)
    }

    // ========================================================================
    // Builder methods
    // ========================================================================

    /// HTTP ステータスを設定
    #[inline]
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    /// 元のエラーを設定（デバッグ用）
    ///
    /// ## Examples
    /// ```rust
    /// use kernel::error::app_error::{AppError, AppResult};
    ///
    /// fn parse_body(raw: &str) -> AppResult<serde_json::Value> {
    ///     serde_json::from_str(raw)
    ///         .map_err(|e| AppError::malformed("Response is not JSON").with_source(e))
    /// }
    /// assert!(parse_body("<html>").is_err());
    /// ```
    #[inline]
    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// エラー種別を取得
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// 通知レベルを取得
    #[inline]
    pub fn severity(&self) -> Severity {
        self.kind.severity()
    }

    /// HTTP ステータスを取得
    #[inline]
    pub fn status(&self) -> Option<u16> {
        self.status
    }

    /// メッセージを取得
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// 認証情報を破棄すべきエラーかどうか
    #[inline]
    pub fn is_unauthorized(&self) -> bool {
        self.kind == ErrorKind::Unauthorized
    }
}

impl fmt::Debug for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut builder = f.debug_struct("AppError");
        builder.field("kind", &self.kind);
        builder.field("message", &self.message);
        if let Some(status) = &self.status {
            builder.field("status", status);
        }
        if let Some(source) = &self.source {
            builder.field("source", source);
        }
        builder.finish()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Some(status) => write!(f, "[{} {}] {}", self.kind, status, self.message),
            None => write!(f, "[{}] {}", self.kind, self.message),
        }
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn Error + 'static))
    }
}
