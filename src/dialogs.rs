//! Blocking user prompts

pub const CONFIRM_DELETE_ITEM: &str = "確定要刪除這個項目嗎？";
pub const CONFIRM_DELETE_PRODUCT: &str = "確定要刪除這個商品嗎？";
pub const CONFIRM_DELETE_ALBUM: &str = "確定要刪除整個相簿嗎？";
pub const CONFIRM_RESTORE: &str = "確定要還原此備份嗎？目前的資料將會被覆蓋。";
pub const ALERT_INVALID_BACKUP: &str = "這不是有效的備份檔案！";
pub const ALERT_UNREADABLE_BACKUP: &str = "檔案讀取失敗，請確認檔案格式正確。";
pub const ALERT_RESTORED: &str = "資料還原成功！";
pub const ALERT_IMAGE_FAILED: &str = "圖片處理失敗，請試試看別張照片";
pub const ALERT_BACKUP_FAILED: &str = "備份失敗，請稍後再試。";

pub trait Dialogs {
    fn confirm(&self, message: &str) -> bool;
    fn alert(&self, message: &str);
}

/// `window.confirm` / `window.alert`
#[derive(Clone, Copy, Default)]
pub struct BrowserDialogs;

impl Dialogs for BrowserDialogs {
    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }

    fn alert(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
}

/// Run `action` only if the user confirms
pub fn confirm_then<D: Dialogs + ?Sized>(dialogs: &D, message: &str, action: impl FnOnce()) -> bool {
    let confirmed = dialogs.confirm(message);
    if confirmed {
        action();
    }
    confirmed
}

/// Log a failure and tell the user. Returns the value on success.
pub fn alert_on_error<T, E, D>(dialogs: &D, result: Result<T, E>, context: &str, message: &str) -> Option<T>
where
    E: std::fmt::Display,
    D: Dialogs + ?Sized,
{
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            log::error!("{}: {}", context, e);
            dialogs.alert(message);
            None
        }
    }
}

#[cfg(test)]
pub(crate) mod scripted {
    use std::cell::RefCell;

    use super::Dialogs;

    /// Answers confirms with a fixed reply and records every prompt
    pub struct ScriptedDialogs {
        pub reply: bool,
        pub confirms: RefCell<Vec<String>>,
        pub alerts: RefCell<Vec<String>>,
    }

    impl ScriptedDialogs {
        pub fn answering(reply: bool) -> Self {
            Self {
                reply,
                confirms: RefCell::new(Vec::new()),
                alerts: RefCell::new(Vec::new()),
            }
        }
    }

    impl Dialogs for ScriptedDialogs {
        fn confirm(&self, message: &str) -> bool {
            self.confirms.borrow_mut().push(message.to_string());
            self.reply
        }

        fn alert(&self, message: &str) {
            self.alerts.borrow_mut().push(message.to_string());
        }
    }
}
