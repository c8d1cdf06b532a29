//! Settings Page Component
//!
//! Backup download, restore from a file, and the recent diagnostics log.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::backup::{backup_filename, confirm_restore};
use crate::context::{use_app_context, ViewMode};
use crate::dialogs::{
    alert_on_error, BrowserDialogs, Dialogs, ALERT_BACKUP_FAILED, ALERT_RESTORED, ALERT_UNREADABLE_BACKUP,
};
use crate::error::PlannerResult;
use crate::files::{download_text, read_file_text};
use crate::store::{store_apply_restore, store_backup, use_app_store};

#[component]
pub fn SettingsPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let (trip, backup) = ctx.with_config(|c| (c.trip.clone(), c.backup.clone()));
    let backup = StoredValue::new(backup);
    let restore_input = NodeRef::<leptos::html::Input>::new();
    let (log_lines, set_log_lines) = signal(rolling_logger::recent_lines());

    let on_backup = move |_: web_sys::MouseEvent| {
        let result: PlannerResult<()> = backup.with_value(|b| {
            let json = store_backup(&store, &b.app).to_pretty_json()?;
            let filename = backup_filename(&b.file_prefix, chrono::Utc::now().date_naive());
            download_text(&filename, "application/json", &json)?;
            log::info!("[BACKUP] Downloaded {}", filename);
            Ok(())
        });
        alert_on_error(&BrowserDialogs, result, "[BACKUP] Backup failed", ALERT_BACKUP_FAILED);
    };

    let on_restore = move |ev: web_sys::Event| {
        let input: web_sys::HtmlInputElement = event_target(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        spawn_local(async move {
            match read_file_text(&file).await {
                Ok(raw) => {
                    let app = backup.with_value(|b| b.app.clone());
                    if let Some(payload) = confirm_restore(&raw, &app, &BrowserDialogs) {
                        store_apply_restore(&store, payload);
                        log::info!("[BACKUP] Restored from {}", file.name());
                        BrowserDialogs.alert(ALERT_RESTORED);
                        ctx.set_view_mode(ViewMode::Itinerary);
                    }
                }
                Err(e) => {
                    log::error!("[BACKUP] Could not read {}: {}", file.name(), e);
                    BrowserDialogs.alert(ALERT_UNREADABLE_BACKUP);
                }
            }
            // Allow choosing the same file again
            input.set_value("");
        });
    };

    view! {
        <div class="settings-page">
            <div class="page-heading">
                <span class="page-icon">"⚙"</span>
                <h2>"設定與備份"</h2>
            </div>

            <section class="settings-card backup">
                <h3>"備份資料"</h3>
                <p>"將目前的行程、購物清單、行前準備等所有資料下載成檔案保存。建議在更新 App 前先進行備份。"</p>
                <button class="primary-btn" on:click=on_backup>"下載備份檔案 (.json)"</button>
            </section>

            <section class="settings-card restore">
                <h3>"還原資料"</h3>
                <p>
                    "選取之前的備份檔案來還原資料。"
                    <br />
                    <span class="warning">"注意：目前的資料將會被覆蓋。"</span>
                </p>
                <input type="file" accept=".json" class="hidden" node_ref=restore_input on:change=on_restore />
                <button
                    class="secondary-btn"
                    on:click=move |_| {
                        if let Some(input) = restore_input.get() {
                            input.click();
                        }
                    }
                >
                    "選取檔案並還原"
                </button>
            </section>

            <section class="settings-card diagnostics">
                <div class="diagnostics-header">
                    <h3>"診斷紀錄"</h3>
                    <button class="icon-btn" on:click=move |_| set_log_lines.set(rolling_logger::recent_lines())>
                        "↻"
                    </button>
                </div>
                <pre class="log-view">
                    {move || log_lines.with(|lines| lines.join("\n"))}
                </pre>
            </section>

            <p class="app-version">{format!("{} v{}", trip.title, trip.version)}</p>
        </div>
    }
}
