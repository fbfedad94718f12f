//! Error Kind - Classification of client-side failures
//!
//! Defines the [`ErrorKind`] enum and the [`Severity`] each kind is reported with.

use serde::Serialize;

/// クライアント側エラー種別の列挙体
///
/// リモート API 呼び出しやフォーム入力検証で発生する失敗を分類します。
/// 通知レベル（[`Severity`]）はこの分類から一意に決まります。
///
/// ## Notes
/// * `non_exhaustive` - 将来的に列挙子が追加される可能性があることを示す
///
/// ## Examples
/// ```rust
/// use kernel::error::kind::{ErrorKind, Severity};
///
/// let kind = ErrorKind::from_status(400);
/// assert_eq!(kind, ErrorKind::Conflict);
/// assert_eq!(kind.severity(), Severity::Info);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum ErrorKind {
    /// 応答なし（オフライン、DNS、トランスポート層タイムアウト）
    Transport,
    /// 401/403: 認証情報なし・期限切れ
    Unauthorized,
    /// 必須フィールド未入力（リクエスト送信前に検出）
    Validation,
    /// 想定内の業務ルール違反（例: "Already joined"）
    Conflict,
    /// 404: リソースが見つからない
    NotFound,
    /// 5xx: サーバー内部エラー
    Server,
    /// 応答は得られたが解釈できない（非 JSON、埋め込み JSON なし等）
    MalformedResponse,
    /// クライアント設定の不足（API キー未設定等）
    Configuration,
}

/// 通知の重要度
///
/// Notification Sink に渡す際のレベル選択に使用します。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl ErrorKind {
    /// HTTP ステータスコードからエラー種別を判定
    ///
    /// ## Arguments
    /// * `status` - 非成功の HTTP ステータスコード
    ///
    /// ## Returns
    /// 対応する [`ErrorKind`]。2xx/3xx が渡された場合は `Server` として扱う
    ///
    /// ## Examples
    /// ```rust
    /// use kernel::error::kind::ErrorKind;
    /// assert_eq!(ErrorKind::from_status(401), ErrorKind::Unauthorized);
    /// assert_eq!(ErrorKind::from_status(404), ErrorKind::NotFound);
    /// assert_eq!(ErrorKind::from_status(502), ErrorKind::Server);
    /// ```
    pub const fn from_status(status: u16) -> Self {
        match status {
            401 | 403 => ErrorKind::Unauthorized,
            404 => ErrorKind::NotFound,
            400..=499 => ErrorKind::Conflict,
            _ => ErrorKind::Server,
        }
    }

    /// 通知レベルを取得
    ///
    /// 想定内の業務ルール違反は情報扱い、入力検証は警告扱い、
    /// それ以外はすべてエラー扱いとなります。
    #[inline]
    pub const fn severity(&self) -> Severity {
        match self {
            ErrorKind::Conflict => Severity::Info,
            ErrorKind::Validation => Severity::Warning,
            _ => Severity::Error,
        }
    }

    /// ログ・表示用の短い名前
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Transport => "Transport Failure",
            ErrorKind::Unauthorized => "Unauthorized",
            ErrorKind::Validation => "Validation Failure",
            ErrorKind::Conflict => "Conflict",
            ErrorKind::NotFound => "Not Found",
            ErrorKind::Server => "Server Failure",
            ErrorKind::MalformedResponse => "Malformed Response",
            ErrorKind::Configuration => "Configuration Missing",
        }
    }

    /// リクエスト送信前に検出されるエラーかどうか
    ///
    /// `true` の場合、ネットワーク呼び出しは一切行われていません。
    #[inline]
    pub const fn is_local(&self) -> bool {
        matches!(self, ErrorKind::Validation | ErrorKind::Configuration)
    }

    /// 想定外のエラーかどうか
    ///
    /// `true` の場合は `error` レベルでログに記録すべきです。
    #[inline]
    pub const fn is_unexpected(&self) -> bool {
        matches!(
            self,
            ErrorKind::Transport | ErrorKind::Server | ErrorKind::MalformedResponse
        )
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
