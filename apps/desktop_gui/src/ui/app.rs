use std::time::{Duration, Instant};

use arboard::Clipboard;
use client_core::{Completion, Notifier, RequestError, RequestHandler, Submission, ViewState};
use crossbeam_channel::{Receiver, Sender};
use egui::{Align2, RichText};
use shared::protocol::ProductResult;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::{
    events::{err_label, UiEvent},
    orchestration::dispatch_backend_command,
};
use crate::ui::notifications::Notifications;

pub struct ProductLookupApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    handler: RequestHandler,
    view: ViewState,
    product_draft: String,
    notifications: Notifications,
    status: String,
}

impl ProductLookupApp {
    pub fn new(cmd_tx: Sender<BackendCommand>, ui_rx: Receiver<UiEvent>) -> Self {
        Self {
            cmd_tx,
            ui_rx,
            handler: RequestHandler::new(),
            view: ViewState::default(),
            product_draft: String::new(),
            notifications: Notifications::default(),
            status: "Starting...".to_string(),
        }
    }

    fn submit_lookup(&mut self) {
        let Submission::Dispatched {
            request_id,
            request,
        } = self
            .handler
            .submit(&mut self.view, &self.product_draft, &mut self.notifications)
        else {
            return;
        };

        self.status = format!("Looking up \"{}\"...", request.product);
        let cmd = BackendCommand::LookupProduct {
            request_id,
            request,
        };
        if let Err(reason) = dispatch_backend_command(&self.cmd_tx, cmd) {
            self.handler.on_complete(
                &mut self.view,
                request_id,
                Err(RequestError::transport(reason)),
                &mut self.notifications,
            );
            self.status = "Last lookup failed".to_string();
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::Info(message) => {
                    self.status = message;
                }
                UiEvent::ProductLookupCompleted {
                    request_id,
                    outcome,
                } => {
                    match self.handler.on_complete(
                        &mut self.view,
                        request_id,
                        outcome,
                        &mut self.notifications,
                    ) {
                        Completion::Succeeded => {
                            self.status =
                                format!("Loaded result for \"{}\"", self.view.product_input());
                        }
                        Completion::Failed { .. } => {
                            self.status = "Last lookup failed".to_string();
                        }
                        Completion::Rejected | Completion::Unknown => {}
                    }
                }
                UiEvent::Error(err) => {
                    tracing::error!(context = ?err.context(), "{}", err.message());
                    self.status = format!("{} error: {}", err_label(err.category()), err.message());
                    self.notifications.error_dialog(err.message());
                }
            }
        }
    }

    fn copy_result_to_clipboard(&mut self) {
        let Some(result) = self.view.api_result() else {
            return;
        };
        let text = render_result(result);
        match Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text)) {
            Ok(()) => self.notifications.toast("Result copied to clipboard."),
            Err(err) => {
                tracing::warn!("clipboard unavailable: {err}");
                self.status = format!("Could not copy result: {err}");
            }
        }
    }

    fn show_lookup_form(&mut self, ui: &mut egui::Ui) {
        ui.heading("Product lookup");
        ui.add_space(6.0);
        ui.label(RichText::new("Product").strong());

        let busy = self.view.is_busy();
        let mut submit = false;
        ui.horizontal(|ui| {
            let edit = egui::TextEdit::singleline(&mut self.product_draft)
                .hint_text("e.g. shoes")
                .desired_width(280.0);
            let response = ui.add_enabled(!busy, edit);
            if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                submit = true;
            }
            if ui
                .add_enabled(!busy, egui::Button::new("Call API"))
                .clicked()
            {
                submit = true;
            }
            if busy {
                ui.spinner();
            }
        });

        if submit && !busy {
            self.submit_lookup();
        }
    }

    fn show_result(&mut self, ui: &mut egui::Ui) {
        let Some(result) = self.view.api_result() else {
            ui.weak("No result yet.");
            return;
        };
        let rendered = render_result(result);

        let mut copy = false;
        ui.horizontal(|ui| {
            ui.label(
                RichText::new(format!("Result for \"{}\"", self.view.product_input()))
                    .strong(),
            );
            if ui.button("Copy JSON").clicked() {
                copy = true;
            }
        });
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.monospace(rendered);
            });

        if copy {
            self.copy_result_to_clipboard();
        }
    }

    fn show_toasts(&self, ctx: &egui::Context) {
        if !self.notifications.has_toasts() {
            return;
        }

        egui::Area::new(egui::Id::new("toasts"))
            .anchor(Align2::CENTER_BOTTOM, [0.0, -36.0])
            .show(ctx, |ui| {
                for toast in self.notifications.toasts() {
                    egui::Frame::popup(ui.style()).show(ui, |ui| {
                        ui.label(toast.message.as_str());
                    });
                }
            });
    }

    fn show_error_dialog(&mut self, ctx: &egui::Context) {
        let Some(message) = self.notifications.current_dialog().map(str::to_string) else {
            return;
        };

        let mut dismissed = false;
        egui::Window::new("Error")
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(RichText::new(&message).color(ui.visuals().error_fg_color));
                ui.add_space(8.0);
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });

        if dismissed {
            self.notifications.dismiss_dialog();
        }
    }
}

/// Pretty JSON for display; falls back to compact form.
pub fn render_result(result: &ProductResult) -> String {
    serde_json::to_string_pretty(result).unwrap_or_else(|_| result.to_string())
}

impl eframe::App for ProductLookupApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();
        self.notifications.prune(Instant::now());

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.small(RichText::new(&self.status).weak());
        });

        let dialog_open = self.notifications.current_dialog().is_some();
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(!dialog_open, |ui| {
                self.show_lookup_form(ui);
                ui.separator();
                self.show_result(ui);
            });
        });

        self.show_toasts(ctx);
        self.show_error_dialog(ctx);

        if self.view.is_busy() || self.notifications.has_toasts() {
            ctx.request_repaint_after(Duration::from_millis(16));
        } else {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}

#[cfg(test)]
mod tests {
    use client_core::handler::{EMPTY_INPUT_NOTICE, FAILURE_HEADLINE, SUCCESS_NOTICE};
    use crossbeam_channel::bounded;
    use serde_json::json;

    use super::*;
    use crate::controller::events::{UiError, UiErrorContext};

    fn app() -> (ProductLookupApp, Receiver<BackendCommand>, Sender<UiEvent>) {
        let (cmd_tx, cmd_rx) = bounded(8);
        let (ui_tx, ui_rx) = bounded(8);
        (ProductLookupApp::new(cmd_tx, ui_rx), cmd_rx, ui_tx)
    }

    fn toast_messages(app: &ProductLookupApp) -> Vec<String> {
        app.notifications
            .toasts()
            .map(|toast| toast.message.clone())
            .collect()
    }

    #[test]
    fn blank_draft_only_raises_toast() {
        let (mut app, cmd_rx, _ui_tx) = app();
        app.product_draft = "   ".into();

        app.submit_lookup();

        assert!(cmd_rx.try_recv().is_err());
        assert!(!app.view.is_busy());
        assert_eq!(toast_messages(&app), vec![EMPTY_INPUT_NOTICE.to_string()]);
    }

    #[test]
    fn lookup_round_trip_updates_view() {
        let (mut app, cmd_rx, ui_tx) = app();
        app.product_draft = " shoes ".into();

        app.submit_lookup();
        assert!(app.view.is_busy());
        let BackendCommand::LookupProduct {
            request_id,
            request,
        } = cmd_rx.try_recv().expect("queued command");
        assert_eq!(request.product, "shoes");

        ui_tx
            .send(UiEvent::ProductLookupCompleted {
                request_id,
                outcome: Ok(json!({ "price": 19.99 })),
            })
            .expect("send event");
        app.process_ui_events();

        assert!(!app.view.is_busy());
        assert_eq!(app.view.api_result(), Some(&json!({ "price": 19.99 })));
        assert_eq!(app.view.product_input(), "shoes");
        assert_eq!(toast_messages(&app), vec![SUCCESS_NOTICE.to_string()]);
    }

    #[test]
    fn disconnected_backend_fails_lookup_immediately() {
        let (mut app, cmd_rx, _ui_tx) = app();
        drop(cmd_rx);
        app.product_draft = "widget".into();

        app.submit_lookup();

        assert!(!app.view.is_busy());
        let dialog = app.notifications.current_dialog().expect("dialog");
        assert!(dialog.starts_with(FAILURE_HEADLINE));
        assert!(dialog.contains("disconnected"));
    }

    #[test]
    fn backend_startup_error_opens_dialog() {
        let (mut app, _cmd_rx, ui_tx) = app();
        ui_tx
            .send(UiEvent::Error(UiError::from_message(
                UiErrorContext::BackendStartup,
                "backend worker startup failure: failed to build runtime: boom",
            )))
            .expect("send event");

        app.process_ui_events();

        assert!(app.status.starts_with("Transport error"));
        assert_eq!(
            app.notifications.current_dialog(),
            Some("backend worker startup failure: failed to build runtime: boom")
        );
    }

    #[test]
    fn renders_result_as_pretty_json() {
        assert_eq!(
            render_result(&json!({ "price": 19.99 })),
            "{\n  \"price\": 19.99\n}"
        );
    }
}
