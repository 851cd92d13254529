//! User-facing Notices
//!
//! Transient messages the UI shows as toasts after each operation.

use crate::domain::{ControllerError, WriteAction};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Success, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Error, message: message.into() }
    }

    pub fn added() -> Self {
        Self::success("할 일이 추가되었습니다!")
    }

    /// After a toggle; `completed` is the new state
    pub fn toggled(completed: bool) -> Self {
        if completed {
            Self::success("할 일이 완료되었습니다!")
        } else {
            Self::success("할 일이 진행중으로 변경되었습니다!")
        }
    }

    pub fn deleted() -> Self {
        Self::success("할 일이 삭제되었습니다!")
    }

    pub fn priority_changed() -> Self {
        Self::success("우선순위가 변경되었습니다!")
    }

    pub fn cleared(count: usize) -> Self {
        Self::success(format!("{}개의 완료된 할 일이 삭제되었습니다!", count))
    }

    pub fn from_error(err: &ControllerError) -> Self {
        let message = match err.action() {
            None => "데이터를 불러오는 중 오류가 발생했습니다.",
            Some(WriteAction::Add) => "할 일 추가 중 오류가 발생했습니다.",
            Some(WriteAction::Toggle) => "할 일 상태 변경 중 오류가 발생했습니다.",
            Some(WriteAction::Delete) => "할 일 삭제 중 오류가 발생했습니다.",
            Some(WriteAction::ClearCompleted) => "완료된 할 일 삭제 중 오류가 발생했습니다.",
            Some(WriteAction::SetPriority) => "우선순위 변경 중 오류가 발생했습니다.",
        };
        Self::error(message)
    }

    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}
